use anyhow::{Context, Result};
use colored::Colorize;
use fsroute_router::{url_path_for, HttpMethod, NamingRules, MIDDLEWARE_STEM};
use std::path::{Path, PathBuf};

use crate::project::scaffold;

pub enum FileKind {
    Route { method: String },
    Middleware,
}

pub fn execute(
    dir: &Path,
    rules: &NamingRules,
    route: &str,
    kind: FileKind,
    state: &str,
) -> Result<()> {
    let path = create(dir, rules, route, kind, state)?;

    println!("  {} {}", "✓".green(), path.display());
    Ok(())
}

/// Creates the file and returns its path
pub fn create(
    dir: &Path,
    rules: &NamingRules,
    route: &str,
    kind: FileKind,
    state: &str,
) -> Result<PathBuf> {
    let extension = rules
        .extensions()
        .first()
        .context("No route file extension configured")?;

    let relative = route.trim_matches('/');
    let relative = relative
        .strip_suffix(&format!(".{}", extension))
        .unwrap_or(relative);

    if relative.split('/').any(|segment| segment.starts_with('_')) {
        anyhow::bail!("Route segments starting with '_' are excluded from routing: {}", route);
    }

    match kind {
        FileKind::Route { method } => {
            if relative.is_empty() {
                anyhow::bail!("Route path must not be empty (use 'index' for the root)");
            }
            let method: HttpMethod = method.parse()?;
            let path = dir.join(format!("{}.{}", relative, extension));
            let url_path = url_path_for(dir, &path);
            scaffold::create_file(&path, &scaffold::route_template(&url_path, method, state))?;
            Ok(path)
        }
        FileKind::Middleware => {
            let path = dir
                .join(relative)
                .join(format!("{}.{}", MIDDLEWARE_STEM, extension));
            scaffold::create_file(&path, &scaffold::middleware_template(relative, state))?;
            Ok(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_route_file() {
        let tmp = TempDir::new().unwrap();
        let path = create(
            tmp.path(),
            &NamingRules::default(),
            "users/[id]",
            FileKind::Route { method: "delete".to_string() },
            "()",
        )
        .unwrap();

        assert_eq!(path, tmp.path().join("users/[id].rs"));
        let source = fs::read_to_string(path).unwrap();
        assert!(source.starts_with("// DELETE /users/:id"));
        assert!(source.contains(".method(\"delete\")"));
    }

    #[test]
    fn test_create_middleware_file() {
        let tmp = TempDir::new().unwrap();
        let path = create(tmp.path(), &NamingRules::default(), "admin", FileKind::Middleware, "()")
            .unwrap();
        assert_eq!(path, tmp.path().join("admin/_middleware.rs"));
    }

    #[test]
    fn test_rejects_unknown_method_and_excluded_segments() {
        let tmp = TempDir::new().unwrap();
        let rules = NamingRules::default();
        let trace = FileKind::Route { method: "trace".to_string() };
        assert!(create(tmp.path(), &rules, "ping", trace, "()").is_err());

        let get = FileKind::Route { method: "get".to_string() };
        assert!(create(tmp.path(), &rules, "_private/ping", get, "()").is_err());
    }
}
