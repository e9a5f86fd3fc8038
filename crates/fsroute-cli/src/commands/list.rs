use anyhow::{Context, Result};
use colored::Colorize;
use fsroute_router::{scan, DirHierarchy, NamingRules, ScannedDir};
use std::collections::HashMap;
use std::path::Path;

pub fn execute(dir: &Path, rules: &NamingRules) -> Result<()> {
    let tree = scan(dir, rules)
        .with_context(|| format!("Failed to scan routes directory: {:?}", dir))?;
    let routes = tree.all_routes();

    println!("{}", format!("Routes in {}", dir.display()).green().bold());
    println!();

    if routes.is_empty() {
        println!("  {}", "(no routes)".dimmed());
        return Ok(());
    }

    let width = routes.iter().map(|r| r.url_path.len()).max().unwrap_or(0);
    for route in &routes {
        let chain = middleware_chain(&tree, &route.key);
        let chain = if chain.is_empty() {
            String::new()
        } else {
            format!("  [{}]", chain.join(" > ")).yellow().to_string()
        };
        let url = format!("{:width$}", route.url_path, width = width);
        println!("  {}  {}{}", url.cyan(), route.key, chain);
    }

    println!();
    println!("{} route files", routes.len());

    Ok(())
}

/// Middleware files wrapping `key`, outermost first
pub fn middleware_chain(tree: &ScannedDir, key: &str) -> Vec<String> {
    let by_dir: HashMap<&str, &str> = tree
        .all_middleware()
        .into_iter()
        .map(|mw| {
            let dir = mw.key.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
            (dir, mw.key.as_str())
        })
        .collect();

    let mut chain: Vec<String> = DirHierarchy::new(key)
        .filter_map(|dir| by_dir.get(dir).map(|mw| mw.to_string()))
        .collect();
    chain.reverse();
    chain
}
