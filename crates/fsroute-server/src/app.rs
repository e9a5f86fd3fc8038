// File: src/app.rs
// Purpose: Builds the axum app of a process from its routes directory

use crate::process::ProcessConfig;
use crate::registry;
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use fsroute::{HttpMethod, RouteCatalog, RouteLoader};
use std::path::PathBuf;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const DOCS_PATH: &str = "/docs/routes";

/// Runtime settings of the app, resolved from the environment by `main`
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub process: ProcessConfig,
    /// Disables the route docs endpoint
    pub production: bool,
    pub allowed_origins: Vec<String>,
    pub base_path: Option<String>,
    /// Directory the routes directories and `public/` live in
    pub root: PathBuf,
}

impl AppOptions {
    pub fn new(process: ProcessConfig) -> Self {
        let allowed_origins = vec![
            "http://localhost:3000".to_string(),
            format!("http://localhost:{}", process.port),
        ];
        Self {
            process,
            production: false,
            allowed_origins,
            base_path: None,
            root: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        }
    }

    /// Applies APP_ENV and ALLOWED_ORIGINS
    pub fn with_env(mut self) -> Self {
        if let Ok(app_env) = std::env::var("APP_ENV") {
            self.production = app_env.eq_ignore_ascii_case("production");
        }
        if let Ok(origins) = std::env::var("ALLOWED_ORIGINS") {
            self.allowed_origins = parse_origins(&origins);
        }
        self
    }
}

pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

pub async fn create_app(options: &AppOptions, state: AppState) -> Result<Router> {
    let process = &options.process;
    let mut app: Router<AppState> = Router::new();

    if let Some(dir) = process.routes_dir {
        let routes_dir = options.root.join(dir);
        if routes_dir.is_dir() {
            let mut loader = RouteLoader::new(registry::for_process(process.kind));
            if let Some(base_path) = &options.base_path {
                loader = loader.with_base_path(base_path.clone());
            }

            let tree = loader
                .collect(&routes_dir)
                .await
                .with_context(|| format!("failed to collect routes from {:?}", routes_dir))?;

            let catalog = tree.catalog();
            app = tree.register(app).context("failed to register routes")?;

            if process.enable_docs && !options.production {
                app = mount_docs(app, catalog)?;
            }
        } else {
            warn!(dir = %routes_dir.display(), "routes directory not found, no routes registered");
        }
    }

    if process.enable_static {
        let public_dir = options.root.join("public");
        info!(dir = %public_dir.display(), "serving static files");
        app = app.fallback_service(ServeDir::new(public_dir));
    }

    let app = app
        .with_state(state)
        .layer(cors_layer(&options.allowed_origins))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Serves the route catalog at `DOCS_PATH` unless a route file already does
fn mount_docs(app: Router<AppState>, catalog: RouteCatalog) -> Result<Router<AppState>> {
    if catalog
        .for_path(DOCS_PATH)
        .any(|entry| entry.method == HttpMethod::Get.as_str())
    {
        warn!(path = DOCS_PATH, "route file shadows the route docs, docs not mounted");
        return Ok(app);
    }

    let docs = serde_json::to_value(catalog)?;
    Ok(app.route(DOCS_PATH, get(move || async move { Json(docs) })))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
