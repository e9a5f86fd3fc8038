//! # fsroute
//!
//! Convention-driven route registration for axum: a `routes/` directory is
//! walked at startup, file and folder names become URL paths, per-directory
//! `_middleware` files wrap their subtree, and every handler is bound onto an
//! axum [`Router`](axum::Router).
//!
//! Resolution happens in two phases:
//!
//! 1. [`RouteLoader::collect`] (async) reads the directory tree and resolves
//!    each file through a [`ModuleLoader`], producing a [`RouteTree`].
//! 2. [`RouteTree::register`] (sync) validates the tree and binds it. Either
//!    the whole tree registers or an error is returned.
//!
//! Route files are plain Rust modules compiled into the binary. A build step
//! generates the [`StaticRegistry`] that maps each file to its code (see
//! `fsroute_router::codegen`).
//!
//! ```no_run
//! use axum::Router;
//! use fsroute::{RouteLoader, RouteModule, StaticRegistry};
//!
//! # async fn run() -> fsroute::Result<()> {
//! let registry = StaticRegistry::new()
//!     .route("index.rs", || RouteModule::new().handler(|| async { "home" }))
//!     .route("users/[id].rs", || {
//!         RouteModule::new()
//!             .handler(|| async { "user" })
//!             .on("delete", || async { "deleted" })
//!     });
//!
//! let tree = RouteLoader::new(registry).collect("routes").await?;
//! let app: Router = tree.register(Router::new())?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod collect;
pub mod config;
pub mod error;
pub mod loader;
pub mod module;
pub mod register;
pub mod tree;

pub use catalog::{CatalogEntry, RouteCatalog};
pub use collect::RouteLoader;
pub use config::{Config, RoutingConfig, ServerConfig};
pub use error::{Result, RouteError};
pub use loader::{ModuleLoader, StaticRegistry};
pub use module::{method_filter, Middleware, RouteDescriptor, RouteHandler, RouteModule};
pub use register::load_routes;
pub use tree::{DirectoryNode, RouteTree};

// Re-export the naming conventions and commonly used dependencies
pub use fsroute_router as router;
pub use fsroute_router::{HttpMethod, NamingRules};
pub use axum;
