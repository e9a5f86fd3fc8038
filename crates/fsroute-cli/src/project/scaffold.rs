use anyhow::{Context, Result};
use fsroute_router::HttpMethod;
use std::fs;
use std::path::Path;

/// Write a new file, creating parent directories and refusing to overwrite
pub fn create_file(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        anyhow::bail!("File {:?} already exists", path);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to create {:?}", path))?;
    Ok(())
}

/// Source of a route file serving `url_path`
pub fn route_template(url_path: &str, method: HttpMethod, state: &str) -> String {
    let params: Vec<&str> = url_path
        .split('/')
        .filter_map(|segment| segment.strip_prefix(':').or_else(|| segment.strip_prefix('*')))
        .collect();

    let method_line = match method {
        HttpMethod::Get => String::new(),
        other => format!("\n        .method(\"{}\")", other.as_lower()),
    };

    let (imports, args, body) = match params.as_slice() {
        [] => (
            String::new(),
            String::new(),
            format!("\"{} {}\".to_string()", method, url_path),
        ),
        [param] => (
            "use fsroute::axum::extract::Path;\n".to_string(),
            format!("Path({}): Path<String>", param),
            format!("format!(\"{} {} {{}}\", {})", method, url_path, param),
        ),
        many => (
            "use fsroute::axum::extract::Path;\n".to_string(),
            format!(
                "Path(({})): Path<({})>",
                many.join(", "),
                vec!["String"; many.len()].join(", ")
            ),
            format!(
                "format!(\"{} {}{}\"{})",
                method,
                url_path,
                " {}".repeat(many.len()),
                many.iter().map(|p| format!(", {}", p)).collect::<String>()
            ),
        ),
    };

    format!(
        r#"// {method} {url_path}
{imports}use fsroute::RouteModule;

pub fn route() -> RouteModule<{state}> {{
    RouteModule::new(){method_line}
        .handler(handler)
}}

async fn handler({args}) -> String {{
    {body}
}}
"#
    )
}

/// Source of a `_middleware` file for the routes under `dir_key`
pub fn middleware_template(dir_key: &str, state: &str) -> String {
    let scope = if dir_key.is_empty() { "/" } else { dir_key };
    format!(
        r#"// Middleware for every route under {scope}
use fsroute::axum::Router;

pub fn middleware(router: Router<{state}>) -> Router<{state}> {{
    router
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_template_default_get() {
        let source = route_template("/health", HttpMethod::Get, "()");
        assert!(source.contains("pub fn route() -> RouteModule<()> {"));
        assert!(!source.contains(".method("));
        assert!(source.contains("\"GET /health\".to_string()"));
    }

    #[test]
    fn test_route_template_params() {
        let source = route_template("/users/:id/posts/:postId", HttpMethod::Put, "AppState");
        assert!(source.contains(".method(\"put\")"));
        assert!(source.contains("Path((id, postId)): Path<(String, String)>"));
        assert!(source.contains("use fsroute::axum::extract::Path;"));
        assert!(source.contains("format!(\"PUT /users/:id/posts/:postId {} {}\", id, postId)"));
    }

    #[test]
    fn test_create_file_refuses_overwrite() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("a/b.rs");
        create_file(&path, "first").unwrap();
        assert!(create_file(&path, "second").is_err());
        assert_eq!(fs::read_to_string(path).unwrap(), "first");
    }
}
