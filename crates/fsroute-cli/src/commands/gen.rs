use anyhow::{Context, Result};
use colored::Colorize;
use fsroute_router::codegen::{generate_for_dir, RegistryOptions};
use fsroute_router::NamingRules;
use std::fs;
use std::path::Path;

pub fn execute(
    dir: &Path,
    rules: &NamingRules,
    state: &str,
    fn_name: &str,
    out: Option<&Path>,
) -> Result<()> {
    let source = render(dir, rules, state, fn_name, out)?;

    match out {
        Some(out) => {
            fs::write(out, source).with_context(|| format!("Failed to write {:?}", out))?;
            println!("  {} {}", "✓".green(), out.display());
        }
        None => print!("{}", source),
    }

    Ok(())
}

/// Generates the registry source; `#[path]`s are relative to `out`'s directory
/// when an output file is given, absolute otherwise
pub fn render(
    dir: &Path,
    rules: &NamingRules,
    state: &str,
    fn_name: &str,
    out: Option<&Path>,
) -> Result<String> {
    let dir = dir
        .canonicalize()
        .with_context(|| format!("Routes directory not found: {:?}", dir))?;

    let mut options = RegistryOptions::new(state).with_fn_name(fn_name);
    if let Some(out) = out {
        let out_dir = match out.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };
        let out_dir = out_dir
            .canonicalize()
            .with_context(|| format!("Output directory not found: {:?}", out_dir))?;
        options = options.relative_to(out_dir);
    }

    generate_for_dir(&dir, rules, &options)
        .with_context(|| format!("Failed to scan routes directory: {:?}", dir))
}
