// File: src/register.rs
// Purpose: Sync registration phase - binds a collected RouteTree onto an axum Router

use crate::collect::RouteLoader;
use crate::error::{Result, RouteError};
use crate::loader::ModuleLoader;
use crate::tree::{DirectoryNode, RouteTree};
use axum::Router;
use fsroute_router::HttpMethod;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

impl<S> RouteTree<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Checks everything axum would reject with a panic at registration time
    ///
    /// - the same method declared twice on one path ([`RouteError::RouteCollision`])
    /// - two wildcards that differ at the same position of the same route
    ///   shape ([`RouteError::ParameterConflict`]): parameters with different
    ///   names (`/users/:id` and `/users/:userId/posts`), or a parameter next
    ///   to a catch-all (`/users/:id` and `/users/*rest`)
    ///
    /// Routes are checked in registration order, so the first file reported is
    /// the one that would have been registered first.
    pub fn validate(&self) -> Result<()> {
        let mut endpoints: HashMap<(HttpMethod, &str), &Path> = HashMap::new();
        let mut params: HashMap<String, (&str, &str, &Path)> = HashMap::new();

        for route in self.root.descriptors() {
            let key = (route.method, route.full_path.as_str());
            if let Some(first) = endpoints.insert(key, route.source.as_path()) {
                return Err(RouteError::RouteCollision {
                    method: route.method,
                    path: route.full_path.clone(),
                    first: first.to_path_buf(),
                    second: route.source.clone(),
                });
            }

            let mut shape = String::new();
            for segment in route.full_path.split('/').filter(|s| !s.is_empty()) {
                match segment.chars().next() {
                    // params and catch-alls share one slot per position
                    Some(':' | '*') => {
                        let position = format!("{}/:", shape);
                        if let Some((name, first_path, first)) = params.get(&position) {
                            if *name != segment {
                                return Err(RouteError::ParameterConflict {
                                    first_path: first_path.to_string(),
                                    second_path: route.full_path.clone(),
                                    first: first.to_path_buf(),
                                    second: route.source.clone(),
                                });
                            }
                        } else {
                            params.insert(
                                position.clone(),
                                (segment, route.full_path.as_str(), route.source.as_path()),
                            );
                        }
                        shape = position;
                    }
                    _ => {
                        shape.push('/');
                        shape.push_str(segment);
                    }
                }
            }
        }

        Ok(())
    }

    /// Registers every route onto `app`
    ///
    /// Each directory becomes its own router: its routes first, then its
    /// subdirectories (nested under their segment, or merged when the directory
    /// contributes none), then its middleware, which therefore wraps exactly the
    /// directory and its descendants. The tree is validated first: either every
    /// route is registered or none is.
    pub fn register(self, app: Router<S>) -> Result<Router<S>> {
        self.validate()?;

        let count = self.len();
        let RouteTree { root, base_path } = self;
        let router = build_scope(root);

        let app = match &base_path {
            Some(base) => app.nest(base, router),
            None => app.merge(router),
        };

        info!(
            routes = count,
            base_path = base_path.as_deref().unwrap_or("/"),
            "registered file-system routes"
        );
        Ok(app)
    }
}

fn build_scope<S>(node: DirectoryNode<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let DirectoryNode {
        key,
        routes,
        middleware,
        middleware_key,
        children,
        ..
    } = node;

    let mut router = Router::new();

    for route in routes {
        debug!(
            method = %route.method,
            path = %route.full_path,
            file = %route.key,
            "registering route"
        );
        router = router.route(&route.path, route.handler.into_method_router(route.method));
    }

    for child in children {
        if child.route_count() == 0 {
            warn!(dir = %child.key, "skipping directory without routes");
            continue;
        }
        router = match child.segment.clone() {
            Some(segment) => router.nest(&segment, build_scope(child)),
            None => router.merge(build_scope(child)),
        };
    }

    if let Some(middleware) = middleware {
        debug!(
            dir = %key,
            file = middleware_key.as_deref().unwrap_or_default(),
            "applying middleware"
        );
        router = middleware.apply(router);
    }

    router
}

/// Collects `dir` with `loader` and registers the result onto `app`
///
/// ```no_run
/// use axum::Router;
/// use fsroute::{load_routes, RouteModule, StaticRegistry};
///
/// # async fn run() -> fsroute::Result<()> {
/// let registry = StaticRegistry::new()
///     .route("health.rs", || RouteModule::new().handler(|| async { "OK" }));
/// let app: Router = load_routes(Router::new(), "routes", registry).await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_routes<S, L>(
    app: Router<S>,
    dir: impl AsRef<Path>,
    loader: L,
) -> Result<Router<S>>
where
    S: Clone + Send + Sync + 'static,
    L: ModuleLoader<S>,
{
    let tree = RouteLoader::new(loader).collect(dir).await?;
    tree.register(app)
}
