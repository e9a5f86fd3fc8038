use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub users: UserStore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// In-memory user store
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<BTreeMap<u64, User>>>,
    last_id: Arc<AtomicU64>,
}

impl UserStore {
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    pub async fn create(&self, input: NewUser) -> User {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            name: input.name,
            email: input.email,
        };
        self.users.write().await.insert(id, user.clone());
        user
    }

    pub async fn update(&self, id: u64, update: UserUpdate) -> Option<User> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id)?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        Some(user.clone())
    }

    pub async fn delete(&self, id: u64) -> Option<User> {
        self.users.write().await.remove(&id)
    }
}
