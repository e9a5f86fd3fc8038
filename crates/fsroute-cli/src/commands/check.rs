use anyhow::{Context, Result};
use colored::Colorize;
use fsroute_router::{is_valid_path, scan, NamingRules, ScannedDir};
use std::collections::BTreeMap;
use std::path::Path;

/// Findings of a routes directory check
#[derive(Debug, Default, PartialEq)]
pub struct CheckReport {
    pub routes: usize,
    /// URL paths produced by more than one file, with those files
    pub shared: Vec<(String, Vec<String>)>,
    /// Files whose URL path is not canonical
    pub invalid: Vec<String>,
}

pub fn execute(dir: &Path, rules: &NamingRules) -> Result<()> {
    println!("{}", format!("Checking {}...", dir.display()).green().bold());
    println!();

    let tree = scan(dir, rules)
        .with_context(|| format!("Failed to scan routes directory: {:?}", dir))?;
    let report = inspect(&tree);

    for (path, files) in &report.shared {
        println!(
            "  {} {} is declared by {} (methods must not overlap)",
            "⚠".yellow(),
            path.cyan(),
            files.join(", ")
        );
    }
    for file in &report.invalid {
        println!("  {} {} maps to an invalid path", "✗".red(), file);
    }

    if !report.invalid.is_empty() {
        anyhow::bail!("{} route files map to invalid paths", report.invalid.len());
    }

    println!("  {} {} route files", "✓".green(), report.routes);
    Ok(())
}

pub fn inspect(tree: &ScannedDir) -> CheckReport {
    let routes = tree.all_routes();

    let mut by_path: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for route in &routes {
        by_path
            .entry(route.url_path.as_str())
            .or_default()
            .push(route.key.clone());
    }

    CheckReport {
        routes: routes.len(),
        shared: by_path
            .into_iter()
            .filter(|(_, files)| files.len() > 1)
            .map(|(path, files)| (path.to_string(), files))
            .collect(),
        invalid: routes
            .iter()
            .filter(|route| !is_valid_path(&route.url_path))
            .map(|route| route.key.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_reports_shared_paths() {
        let tmp = TempDir::new().unwrap();
        for file in ["users.rs", "users/index.rs", "health.rs"] {
            let path = tmp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }

        let tree = scan(tmp.path(), &NamingRules::default()).unwrap();
        assert_eq!(
            inspect(&tree),
            CheckReport {
                routes: 3,
                shared: vec![(
                    "/users".to_string(),
                    vec!["users.rs".to_string(), "users/index.rs".to_string()]
                )],
                invalid: Vec::new(),
            }
        );
    }

    #[test]
    fn test_execute_fails_on_catch_all_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("[...rest]")).unwrap();
        fs::write(tmp.path().join("[...rest]/index.rs"), "").unwrap();

        assert!(execute(tmp.path(), &NamingRules::default()).is_err());
    }
}
