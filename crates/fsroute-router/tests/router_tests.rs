//! Integration tests for fsroute-router
//!
//! Tests are organized by feature area and cover:
//! - Path mapping (index elision, parameters, catch-all, groups)
//! - Underscore exclusion and middleware discovery
//! - Directory scanning
//! - Registry code generation

use fsroute_router::codegen::{generate_for_dir, RegistryOptions};
use fsroute_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "").unwrap();
    path
}

// ============================================================================
// Path mapping
// ============================================================================

#[rstest]
#[case("routes/index.rs", "/")]
#[case("routes/health.rs", "/health")]
#[case("routes/users/index.rs", "/users")]
#[case("routes/users/[id].rs", "/users/:id")]
#[case("routes/users/[id]/posts/[postId].rs", "/users/:id/posts/:postId")]
#[case("routes/users/[id]/index.rs", "/users/:id")]
#[case("routes/docs/[...slug].rs", "/docs/*slug")]
#[case("routes/(admin)/stats.rs", "/stats")]
#[case("routes/a/_/b.rs", "/a/b")]
fn test_url_path_for(#[case] file: &str, #[case] expected: &str) {
    assert_eq!(url_path_for(Path::new("routes"), Path::new(file)), expected);
}

#[test]
fn test_url_path_for_is_deterministic() {
    let base = Path::new("routes");
    let file = Path::new("routes/users/[id]/posts/[postId].rs");
    let first = url_path_for(base, file);
    let second = url_path_for(base, file);
    assert_eq!(first, second);
}

#[test]
fn test_url_path_never_has_trailing_slash() {
    for file in ["routes/a/index.rs", "routes/a/b/index.rs", "routes/index/index.rs"] {
        let path = url_path_for(Path::new("routes"), Path::new(file));
        assert!(is_valid_path(&path), "{} mapped to {}", file, path);
    }
}

// ============================================================================
// Scanning
// ============================================================================

#[test]
fn test_scan_scenario_tree() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "index.rs");
    touch(root, "health.rs");
    touch(root, "users/index.rs");
    touch(root, "users/[id].rs");

    let tree = scan(root, &NamingRules::default()).unwrap();
    let paths: Vec<(&str, &str)> = tree
        .all_routes()
        .iter()
        .map(|route| (route.key.as_str(), route.url_path.as_str()))
        .collect();

    assert_eq!(
        paths,
        vec![
            ("health.rs", "/health"),
            ("index.rs", "/"),
            ("users/[id].rs", "/users/:id"),
            ("users/index.rs", "/users"),
        ]
    );
    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].prefix, "/users");
    assert_eq!(tree.children[0].key, "users");
}

#[test]
fn test_scan_excludes_underscore_entries() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "_helpers.rs");
    touch(root, "_internal/secret.rs");
    touch(root, "users/_shared.rs");
    touch(root, "users/list.rs");
    touch(root, "notes.txt");

    let tree = scan(root, &NamingRules::default()).unwrap();
    let urls: Vec<&str> = tree.all_routes().iter().map(|r| r.url_path.as_str()).collect();

    assert_eq!(urls, vec!["/users/list"]);
    assert!(urls.iter().all(|url| !url.contains('_')));
}

#[test]
fn test_scan_finds_preferred_middleware() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "admin/_middleware.route");
    touch(root, "admin/_middleware.rs");
    touch(root, "admin/index.rs");

    let rules = NamingRules::new(["rs", "route"]);
    let tree = scan(root, &rules).unwrap();

    assert_eq!(tree.middleware, None);
    let admin = &tree.children[0];
    assert_eq!(
        admin.middleware.as_ref().map(|mw| mw.key.as_str()),
        Some("admin/_middleware.rs")
    );
    // the middleware file itself is never a route
    assert_eq!(admin.routes.len(), 1);
}

#[test]
fn test_scan_group_directory_keeps_parent_prefix() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "(auth)/_middleware.rs");
    touch(root, "(auth)/profile.rs");

    let tree = scan(root, &NamingRules::default()).unwrap();
    let group = &tree.children[0];
    assert_eq!(group.prefix, "/");
    assert_eq!(group.routes[0].url_path, "/profile");
    assert!(group.middleware.is_some());
}

#[test]
fn test_scan_rejects_catch_all_directory() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "docs/[...slug]/index.rs");

    let err = scan(tmp.path(), &NamingRules::default()).unwrap_err();
    assert!(matches!(err, ScanError::CatchAllDirectory { .. }));
}

#[test]
fn test_scan_missing_root_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = scan(&tmp.path().join("missing"), &NamingRules::default()).unwrap_err();
    assert!(matches!(err, ScanError::Io { .. }));
    assert!(err.to_string().contains("missing"));
}

// ============================================================================
// Code generation
// ============================================================================

#[test]
fn test_generate_registry_binds_every_file() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    touch(root, "health.rs");
    touch(root, "admin/_middleware.rs");
    touch(root, "admin/index.rs");

    let options = RegistryOptions::new("crate::AppState").relative_to(root);
    let source = generate_for_dir(root, &NamingRules::default(), &options).unwrap();

    assert!(source.contains("#[path = \"health.rs\"]\nmod route_0;"));
    assert!(source.contains("#[path = \"admin/index.rs\"]\nmod route_1;"));
    assert!(source.contains("#[path = \"admin/_middleware.rs\"]\nmod middleware_0;"));
    assert!(source.contains("pub fn registry() -> ::fsroute::StaticRegistry<crate::AppState> {"));
    assert!(source.contains(".route(\"health.rs\", route_0::route)"));
    assert!(source.contains(".route(\"admin/index.rs\", route_1::route)"));
    assert!(source.contains(".middleware(\"admin/_middleware.rs\", middleware_0::middleware)"));
}

#[test]
fn test_generate_registry_is_stable() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "b.rs");
    touch(tmp.path(), "a.rs");

    let options = RegistryOptions::new("()").with_fn_name("api_registry");
    let first = generate_for_dir(tmp.path(), &NamingRules::default(), &options).unwrap();
    let second = generate_for_dir(tmp.path(), &NamingRules::default(), &options).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("pub fn api_registry()"));
    let a = first.find(".route(\"a.rs\"").unwrap();
    let b = first.find(".route(\"b.rs\"").unwrap();
    assert!(a < b);
}
