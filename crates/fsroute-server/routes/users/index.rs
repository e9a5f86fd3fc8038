use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fsroute::RouteModule;
use serde_json::json;

use crate::state::{AppState, NewUser, User};

pub fn route() -> RouteModule<AppState> {
    RouteModule::new()
        .handler(list_users)
        .on("post", create_user)
        .options(json!({ "tags": ["Users"], "summary": "List or create users" }))
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> (StatusCode, Json<User>) {
    let user = state.users.create(input).await;
    tracing::info!(id = user.id, "user created");
    (StatusCode::CREATED, Json(user))
}
