use fsroute_router::HttpMethod;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while resolving or registering routes
///
/// All variants are startup failures: nothing is retried and re-running against
/// an unchanged directory tree produces the same error.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route file must provide a handler: {}", .file.display())]
    MissingHandler { file: PathBuf },

    #[error("unsupported HTTP method `{method}` declared in {}", .file.display())]
    UnsupportedMethod { file: PathBuf, method: String },

    #[error("failed to read routes directory {}: {source}", .dir.display())]
    DirectoryRead {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "route collision on {method} {path}: declared by {} and {}",
        .first.display(),
        .second.display()
    )]
    RouteCollision {
        method: HttpMethod,
        path: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error(
        "parameter conflict between {first_path} ({}) and {second_path} ({})",
        .first.display(),
        .second.display()
    )]
    ParameterConflict {
        first_path: String,
        second_path: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("no module registered for route file {}", .file.display())]
    ModuleNotFound { file: PathBuf },

    #[error("catch-all segments are only allowed in file names: {}", .path.display())]
    InvalidSegment { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, RouteError>;
