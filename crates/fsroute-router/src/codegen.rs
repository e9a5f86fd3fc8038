//! Static registry generation
//!
//! Route files are ordinary Rust modules, so they cannot be imported at
//! runtime. Instead a build step scans the routes directory and emits a source
//! file that declares every route and middleware file as a `#[path]` module
//! and binds it into an `fsroute::StaticRegistry` under its module key.
//!
//! ```no_run
//! // build.rs
//! use fsroute_router::{codegen, NamingRules};
//! use std::path::Path;
//!
//! let source = codegen::generate_for_dir(
//!     Path::new("/abs/path/to/routes"),
//!     &NamingRules::default(),
//!     &codegen::RegistryOptions::new("crate::state::AppState"),
//! )
//! .unwrap();
//! std::fs::write("routes_gen.rs", source).unwrap();
//! ```

use std::fmt::Write as _;
use std::path::{Component, Path, PathBuf};

use crate::entry::NamingRules;
use crate::scan::{scan, ScanError, ScannedDir};

/// Settings for the emitted source
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    /// State type parameter of the registry, e.g. `crate::AppState`
    pub state_type: String,
    /// Path of the `fsroute` crate as seen from the generated code
    pub crate_path: String,
    /// Name of the generated function
    pub fn_name: String,
    /// When set, `#[path]` attributes are written relative to this directory
    /// (the directory of the generated file); otherwise file paths are used as-is.
    pub relative_to: Option<PathBuf>,
}

impl RegistryOptions {
    pub fn new(state_type: impl Into<String>) -> Self {
        Self {
            state_type: state_type.into(),
            crate_path: "::fsroute".to_string(),
            fn_name: "registry".to_string(),
            relative_to: None,
        }
    }

    pub fn with_fn_name(mut self, fn_name: impl Into<String>) -> Self {
        self.fn_name = fn_name.into();
        self
    }

    pub fn with_crate_path(mut self, crate_path: impl Into<String>) -> Self {
        self.crate_path = crate_path.into();
        self
    }

    pub fn relative_to(mut self, dir: impl Into<PathBuf>) -> Self {
        self.relative_to = Some(dir.into());
        self
    }
}

/// Scans `root` and generates the registry source for it
pub fn generate_for_dir(
    root: &Path,
    rules: &NamingRules,
    options: &RegistryOptions,
) -> Result<String, ScanError> {
    let tree = scan(root, rules)?;
    Ok(generate_registry(&tree, options))
}

/// Generates registry source for an already scanned tree
///
/// Modules are numbered in scan order, so the output is stable for an
/// unchanged directory.
pub fn generate_registry(tree: &ScannedDir, options: &RegistryOptions) -> String {
    let routes = tree.all_routes();
    let middleware = tree.all_middleware();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "// @generated by fsroute-router from {:?}. Do not edit.",
        tree.dir.display().to_string()
    );
    out.push('\n');

    for (index, route) in routes.iter().enumerate() {
        let _ = writeln!(out, "#[path = {:?}]", module_path(&route.file, options));
        let _ = writeln!(out, "mod route_{};", index);
    }
    for (index, mw) in middleware.iter().enumerate() {
        let _ = writeln!(out, "#[path = {:?}]", module_path(&mw.file, options));
        let _ = writeln!(out, "mod middleware_{};", index);
    }
    if !routes.is_empty() || !middleware.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "pub fn {}() -> {}::StaticRegistry<{}> {{",
        options.fn_name, options.crate_path, options.state_type
    );
    let _ = write!(out, "    {}::StaticRegistry::new()", options.crate_path);
    for (index, route) in routes.iter().enumerate() {
        let _ = write!(out, "\n        .route({:?}, route_{}::route)", route.key, index);
    }
    for (index, mw) in middleware.iter().enumerate() {
        let _ = write!(
            out,
            "\n        .middleware({:?}, middleware_{}::middleware)",
            mw.key, index
        );
    }
    out.push_str("\n}\n");
    out
}

fn module_path(file: &Path, options: &RegistryOptions) -> String {
    let path = match &options.relative_to {
        Some(base) => relative_path(base, file),
        None => file.to_path_buf(),
    };
    path.to_string_lossy().replace('\\', "/")
}

/// Path of `target` as seen from directory `base`
///
/// Both paths should be absolute (or both relative to the same directory).
fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base: Vec<Component<'_>> = base.components().collect();
    let target: Vec<Component<'_>> = target.components().collect();

    let common = base
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component.as_os_str());
    }
    relative
}
