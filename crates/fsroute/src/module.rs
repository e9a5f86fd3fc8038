// File: src/module.rs
// Purpose: What a route or middleware file hands to the resolver

use crate::error::{Result, RouteError};
use axum::handler::Handler;
use axum::routing::{on, MethodFilter, MethodRouter};
use axum::Router;
use fsroute_router::HttpMethod;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

type MakeMethodRouter<S> = Box<dyn FnOnce(MethodFilter) -> MethodRouter<S> + Send>;

/// A type-erased axum handler waiting for its method
///
/// The method is only known once the module has been resolved, so the handler
/// is kept as a constructor for the `MethodRouter` it will become.
pub struct RouteHandler<S> {
    make: MakeMethodRouter<S>,
}

impl<S> RouteHandler<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new<H, T>(handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self {
            make: Box::new(move |filter| on(filter, handler)),
        }
    }

    pub(crate) fn into_method_router(self, method: HttpMethod) -> MethodRouter<S> {
        (self.make)(method_filter(method))
    }
}

impl<S> fmt::Debug for RouteHandler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RouteHandler")
    }
}

/// Maps the fixed method set onto axum's filters
pub fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
        HttpMethod::Put => MethodFilter::PUT,
        HttpMethod::Patch => MethodFilter::PATCH,
        HttpMethod::Delete => MethodFilter::DELETE,
        HttpMethod::Options => MethodFilter::OPTIONS,
        HttpMethod::Head => MethodFilter::HEAD,
    }
}

/// The exports of one route file
///
/// A route file exposes `pub fn route() -> RouteModule<S>`. The primary
/// handler is registered under `method` (GET when absent); additional handlers
/// can be attached per method with [`RouteModule::on`].
///
/// ```
/// use fsroute::RouteModule;
///
/// let module: RouteModule<()> = RouteModule::new()
///     .handler(|| async { "list" })
///     .on("post", || async { "created" })
///     .options(serde_json::json!({ "summary": "Users" }));
/// assert_eq!(module.handler_count(), 2);
/// ```
pub struct RouteModule<S> {
    method: Option<String>,
    handler: Option<RouteHandler<S>>,
    extra: Vec<(String, RouteHandler<S>)>,
    options: Option<Value>,
}

impl<S> Default for RouteModule<S> {
    fn default() -> Self {
        Self {
            method: None,
            handler: None,
            extra: Vec::new(),
            options: None,
        }
    }
}

impl<S> RouteModule<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Method of the primary handler, compared case-insensitively
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn handler<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.handler = Some(RouteHandler::new(handler));
        self
    }

    /// Adds a handler for another method on the same path
    pub fn on<H, T>(mut self, method: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.extra.push((method.into(), RouteHandler::new(handler)));
        self
    }

    /// Opaque options, forwarded untouched to every descriptor of this module
    pub fn options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    pub fn handler_count(&self) -> usize {
        usize::from(self.handler.is_some()) + self.extra.len()
    }

    /// Turns the module into one descriptor per handler
    ///
    /// Fails with [`RouteError::MissingHandler`] when no handler was provided
    /// and with [`RouteError::UnsupportedMethod`] when a method name is outside
    /// [`HttpMethod::ALL`].
    pub(crate) fn into_descriptors(
        self,
        key: &str,
        file: &Path,
        path: &str,
        full_path: &str,
    ) -> Result<Vec<RouteDescriptor<S>>> {
        let RouteModule {
            method,
            handler,
            extra,
            options,
        } = self;

        if handler.is_none() && extra.is_empty() {
            return Err(RouteError::MissingHandler {
                file: file.to_path_buf(),
            });
        }

        let primary = handler.map(|handler| {
            let method = method.unwrap_or_else(|| HttpMethod::Get.as_str().to_string());
            (method, handler)
        });

        primary
            .into_iter()
            .chain(extra)
            .map(|(method, handler)| {
                let method = method
                    .parse::<HttpMethod>()
                    .map_err(|_| RouteError::UnsupportedMethod {
                        file: file.to_path_buf(),
                        method,
                    })?;
                Ok(RouteDescriptor {
                    path: path.to_string(),
                    full_path: full_path.to_string(),
                    method,
                    handler,
                    options: options.clone(),
                    key: key.to_string(),
                    source: file.to_path_buf(),
                })
            })
            .collect()
    }
}

/// One resolved endpoint
#[derive(Debug)]
pub struct RouteDescriptor<S> {
    /// Path relative to the owning directory scope, e.g. `/:id`
    pub path: String,
    /// Absolute path, e.g. `/users/:id`
    pub full_path: String,
    pub method: HttpMethod,
    pub handler: RouteHandler<S>,
    pub options: Option<Value>,
    /// Registry key of the declaring file
    pub key: String,
    pub source: PathBuf,
}

type RouterTransform<S> = dyn Fn(Router<S>) -> Router<S> + Send + Sync;

/// A directory's `_middleware` export: a transform over the directory's router
///
/// Middleware files expose `pub fn middleware(router: Router<S>) -> Router<S>`,
/// usually a `router.layer(...)`. The transform runs after the directory's
/// own routes and subdirectories are in place, so it wraps exactly them.
pub struct Middleware<S> {
    transform: Arc<RouterTransform<S>>,
}

impl<S> Middleware<S> {
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(Router<S>) -> Router<S> + Send + Sync + 'static,
    {
        Self {
            transform: Arc::new(transform),
        }
    }

    pub fn apply(&self, router: Router<S>) -> Router<S> {
        (self.transform)(router)
    }
}

impl<S> Clone for Middleware<S> {
    fn clone(&self) -> Self {
        Self {
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<S> fmt::Debug for Middleware<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Middleware")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(module: RouteModule<()>) -> Result<Vec<RouteDescriptor<()>>> {
        module.into_descriptors("users/[id].rs", Path::new("routes/users/[id].rs"), "/:id", "/users/:id")
    }

    #[test]
    fn test_method_defaults_to_get() {
        let routes = resolve(RouteModule::new().handler(|| async { "ok" })).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].method, HttpMethod::Get);
        assert_eq!(routes[0].full_path, "/users/:id");
        assert_eq!(routes[0].path, "/:id");
    }

    #[test]
    fn test_method_is_case_insensitive() {
        let routes = resolve(RouteModule::new().method("Delete").handler(|| async {})).unwrap();
        assert_eq!(routes[0].method, HttpMethod::Delete);
    }

    #[test]
    fn test_missing_handler() {
        let err = resolve(RouteModule::new().method("post")).unwrap_err();
        assert!(matches!(err, RouteError::MissingHandler { .. }));
        assert!(err.to_string().contains("users/[id].rs"));
    }

    #[test]
    fn test_unsupported_method() {
        let err = resolve(RouteModule::new().method("trace").handler(|| async {})).unwrap_err();
        match err {
            RouteError::UnsupportedMethod { method, .. } => assert_eq!(method, "trace"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_handlers_share_options() {
        let routes = resolve(
            RouteModule::new()
                .handler(|| async { "get" })
                .on("put", || async { "put" })
                .on("DELETE", || async { "delete" })
                .options(serde_json::json!({ "tag": "users" })),
        )
        .unwrap();

        let methods: Vec<HttpMethod> = routes.iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Put, HttpMethod::Delete]);
        assert!(routes
            .iter()
            .all(|r| r.options == Some(serde_json::json!({ "tag": "users" }))));
    }

    #[test]
    fn test_only_method_handlers() {
        let routes = resolve(RouteModule::new().on("post", || async {})).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].method, HttpMethod::Post);
    }
}
