//! Module lookup
//!
//! Route files are compiled into the binary, so "loading" a file means finding
//! the code registered for it. [`StaticRegistry`] is the table the build step
//! generates (see `fsroute_router::codegen`); any other source of modules can
//! implement [`ModuleLoader`].

use crate::error::{Result, RouteError};
use crate::module::{Middleware, RouteModule};
use axum::Router;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Resolves a discovered file to its module
///
/// `key` is the `/`-separated path of the file relative to the routes root,
/// e.g. `users/[id].rs`; `path` is the file on disk, used for error reporting.
pub trait ModuleLoader<S>: Send + Sync {
    fn load_route(&self, key: &str, path: &Path) -> Result<RouteModule<S>>;

    fn load_middleware(&self, key: &str, path: &Path) -> Result<Middleware<S>>;

    /// Route keys this loader can serve, used to report entries with no file
    fn known_route_keys(&self) -> Vec<String> {
        Vec::new()
    }
}

type RouteFactory<S> = Arc<dyn Fn() -> RouteModule<S> + Send + Sync>;

/// Compile-time registration table: module key → route or middleware
///
/// ```
/// use axum::Router;
/// use fsroute::{RouteModule, StaticRegistry};
///
/// fn health() -> RouteModule<()> {
///     RouteModule::new().handler(|| async { "OK" })
/// }
///
/// let registry = StaticRegistry::new()
///     .route("health.rs", health)
///     .middleware("_middleware.rs", |router: Router<()>| router);
/// assert_eq!(registry.len(), 1);
/// ```
pub struct StaticRegistry<S> {
    routes: BTreeMap<String, RouteFactory<S>>,
    middleware: BTreeMap<String, Middleware<S>>,
}

impl<S> Default for StaticRegistry<S> {
    fn default() -> Self {
        Self {
            routes: BTreeMap::new(),
            middleware: BTreeMap::new(),
        }
    }
}

impl<S> StaticRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route<F>(mut self, key: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> RouteModule<S> + Send + Sync + 'static,
    {
        self.routes.insert(key.into(), Arc::new(factory));
        self
    }

    pub fn middleware<F>(mut self, key: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Router<S>) -> Router<S> + Send + Sync + 'static,
    {
        self.middleware.insert(key.into(), Middleware::new(transform));
        self
    }

    /// Number of registered route modules
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.middleware.is_empty()
    }
}

impl<S> ModuleLoader<S> for StaticRegistry<S>
where
    S: Send + Sync + 'static,
{
    fn load_route(&self, key: &str, path: &Path) -> Result<RouteModule<S>> {
        self.routes
            .get(key)
            .map(|factory| factory())
            .ok_or_else(|| RouteError::ModuleNotFound {
                file: path.to_path_buf(),
            })
    }

    fn load_middleware(&self, key: &str, path: &Path) -> Result<Middleware<S>> {
        self.middleware
            .get(key)
            .cloned()
            .ok_or_else(|| RouteError::ModuleNotFound {
                file: path.to_path_buf(),
            })
    }

    fn known_route_keys(&self) -> Vec<String> {
        self.routes.keys().cloned().collect()
    }
}

impl<S, L> ModuleLoader<S> for Arc<L>
where
    L: ModuleLoader<S> + ?Sized,
{
    fn load_route(&self, key: &str, path: &Path) -> Result<RouteModule<S>> {
        (**self).load_route(key, path)
    }

    fn load_middleware(&self, key: &str, path: &Path) -> Result<Middleware<S>> {
        (**self).load_middleware(key, path)
    }

    fn known_route_keys(&self) -> Vec<String> {
        (**self).known_route_keys()
    }
}
