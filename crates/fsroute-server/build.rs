// Generates the static route registries for routes/ and routes-admin/

use fsroute_router::codegen::{generate_for_dir, generate_registry, RegistryOptions};
use fsroute_router::{NamingRules, ScannedDir};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const STATE_TYPE: &str = "crate::state::AppState";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    for (dir, out_file) in [("routes", "main_routes.rs"), ("routes-admin", "admin_routes.rs")] {
        let routes_dir = manifest_dir.join(dir);
        println!("cargo:rerun-if-changed={}", routes_dir.display());

        let source = generate(&routes_dir)
            .unwrap_or_else(|e| panic!("failed to generate route registry for {}: {}", dir, e));
        fs::write(out_dir.join(out_file), source)
            .unwrap_or_else(|e| panic!("failed to write {}: {}", out_file, e));
    }
}

fn generate(routes_dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let options = RegistryOptions::new(STATE_TYPE);

    if !routes_dir.exists() {
        // an absent directory registers nothing
        let empty = ScannedDir {
            dir: routes_dir.to_path_buf(),
            key: String::new(),
            prefix: "/".to_string(),
            middleware: None,
            routes: Vec::new(),
            children: Vec::new(),
        };
        return Ok(generate_registry(&empty, &options));
    }

    let routes_dir = routes_dir.canonicalize()?;
    Ok(generate_for_dir(&routes_dir, &NamingRules::default(), &options)?)
}
