/// Path utilities for validation, normalization and file → URL mapping
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;
use std::path::{Component, Path};

use crate::route::parse_segments;

pub mod hierarchy;
pub use hierarchy::DirHierarchy;

/// Validates if a URL path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use fsroute_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/users/:id"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("about")); // Missing leading /
/// assert!(!is_valid_path("/about/")); // Trailing /
/// assert!(!is_valid_path("/about//page")); // Double //
/// assert!(!is_valid_path("/about\\page")); // Backslash
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    if path == "/" {
        return true;
    }

    !path.ends_with('/')
}

/// Normalize a URL path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
///
/// # Examples
///
/// ```
/// use fsroute_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("/about/"), "/about");
/// assert_eq!(normalize_path("\\users\\123"), "/users/123");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Joins a scope prefix and a scope-relative path into one canonical path
///
/// ```
/// use fsroute_router::path::join_paths;
///
/// assert_eq!(join_paths("/users", "/"), "/users");
/// assert_eq!(join_paths("/users", "/:id"), "/users/:id");
/// assert_eq!(join_paths("", "/"), "/");
/// assert_eq!(join_paths("/", "/health"), "/health");
/// ```
pub fn join_paths(prefix: &str, path: &str) -> String {
    normalize_path(&format!("{}/{}", prefix, path)).into_owned()
}

/// Computes the URL path of `file_path` relative to `base_dir`
///
/// The extension of the file name is stripped, each component is mapped with
/// [`segment_for`](crate::segment_for), elided segments are dropped and the
/// result is joined with `/`. Paths outside `base_dir` are mapped as-is.
///
/// # Examples
///
/// ```
/// use fsroute_router::url_path_for;
/// use std::path::Path;
///
/// let base = Path::new("routes");
/// assert_eq!(url_path_for(base, Path::new("routes/index.rs")), "/");
/// assert_eq!(url_path_for(base, Path::new("routes/users/index.rs")), "/users");
/// assert_eq!(url_path_for(base, Path::new("routes/users/[id].rs")), "/users/:id");
/// ```
pub fn url_path_for(base_dir: &Path, file_path: &Path) -> String {
    let relative = file_path.strip_prefix(base_dir).unwrap_or(file_path);
    let without_ext = relative.with_extension("");

    let segments: Vec<Cow<'_, str>> = without_ext
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect();

    parse_segments(segments).pattern
}

/// Builds the registry key of a file: its path relative to `root`, `/`-separated
///
/// ```
/// use fsroute_router::path::module_key;
/// use std::path::Path;
///
/// assert_eq!(module_key(Path::new("routes"), Path::new("routes/users/[id].rs")), "users/[id].rs");
/// assert_eq!(module_key(Path::new("routes"), Path::new("routes/index.rs")), "index.rs");
/// ```
pub fn module_key(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/about"));
        assert!(is_valid_path("/users/123"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("about"));
        assert!(!is_valid_path("/about/"));
        assert!(!is_valid_path("/about//page"));
        assert!(!is_valid_path("/about\\page"));
    }

    #[test]
    fn test_normalize_path_valid() {
        let path = normalize_path("/about");
        assert!(matches!(path, Cow::Borrowed("/about")));

        let path = normalize_path("/");
        assert!(matches!(path, Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_path_trailing_and_double_slash() {
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("/path///to////page"), "/path/to/page");
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths("", "/health"), "/health");
        assert_eq!(join_paths("/api", "/"), "/api");
        assert_eq!(join_paths("/api/", "/users/"), "/api/users");
    }

    #[test]
    fn test_url_path_for_nested_params() {
        let base = PathBuf::from("/srv/app/routes");
        let file = base.join("users").join("[id]").join("posts").join("[postId].rs");
        assert_eq!(url_path_for(&base, &file), "/users/:id/posts/:postId");
    }

    #[test]
    fn test_url_path_for_keeps_dots_in_directories() {
        let base = PathBuf::from("routes");
        let file = base.join("v1.2").join("status.rs");
        assert_eq!(url_path_for(&base, &file), "/v1.2/status");
    }

    #[test]
    fn test_url_path_for_outside_base() {
        assert_eq!(
            url_path_for(Path::new("routes"), Path::new("other/ping.rs")),
            "/other/ping"
        );
    }

    #[test]
    fn test_dir_hierarchy() {
        let dirs: Vec<&str> = DirHierarchy::new("a/b/c/d.rs").collect();
        assert_eq!(dirs, vec!["a/b/c", "a/b", "a", ""]);

        let mut iter = DirHierarchy::new("a/b/c/d.rs");
        assert_eq!(iter.find(|&d| d == "a/b"), Some("a/b"));
        assert_eq!(iter.next(), Some("a"));
    }
}
