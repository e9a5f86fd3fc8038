//! Synchronous scan of a routes directory
//!
//! Used where no async runtime exists (build scripts, the CLI). The scan only
//! discovers structure; it never loads modules.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::entry::{EntryKind, NamingRules};
use crate::path::{join_paths, module_key, url_path_for};
use crate::route::{classify_segment, PatternSegmentType};

/// Errors raised while scanning
#[derive(Debug)]
pub enum ScanError {
    /// A directory or entry could not be read
    Io { path: PathBuf, source: io::Error },
    /// A `[...name]` segment was used as a directory name
    CatchAllDirectory { path: PathBuf },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ScanError::CatchAllDirectory { path } => write!(
                f,
                "catch-all segments are only allowed in file names: {}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io { source, .. } => Some(source),
            ScanError::CatchAllDirectory { .. } => None,
        }
    }
}

/// A route file found by the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedRoute {
    pub file: PathBuf,
    /// Registry key, e.g. `users/[id].rs`
    pub key: String,
    /// Absolute URL path, e.g. `/users/:id`
    pub url_path: String,
}

/// A middleware file found by the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedMiddleware {
    pub file: PathBuf,
    pub key: String,
}

/// One scanned directory scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDir {
    pub dir: PathBuf,
    /// Directory key relative to the routes root (`""` for the root)
    pub key: String,
    /// Absolute URL prefix of this scope
    pub prefix: String,
    pub middleware: Option<ScannedMiddleware>,
    pub routes: Vec<ScannedRoute>,
    pub children: Vec<ScannedDir>,
}

impl ScannedDir {
    /// All route files, depth-first, parent before children
    pub fn all_routes(&self) -> Vec<&ScannedRoute> {
        let mut routes: Vec<&ScannedRoute> = self.routes.iter().collect();
        for child in &self.children {
            routes.extend(child.all_routes());
        }
        routes
    }

    /// All middleware files, depth-first, parent before children
    pub fn all_middleware(&self) -> Vec<&ScannedMiddleware> {
        let mut found: Vec<&ScannedMiddleware> = self.middleware.iter().collect();
        for child in &self.children {
            found.extend(child.all_middleware());
        }
        found
    }
}

/// Scans `root` recursively
///
/// Entries are visited in lexicographic order so two scans of an unchanged
/// tree always agree.
pub fn scan(root: &Path, rules: &NamingRules) -> Result<ScannedDir, ScanError> {
    scan_dir(root, root, String::new(), rules)
}

fn scan_dir(
    root: &Path,
    dir: &Path,
    prefix: String,
    rules: &NamingRules,
) -> Result<ScannedDir, ScanError> {
    let entries = read_sorted(dir)?;

    let file_names = entries
        .iter()
        .filter(|(_, is_dir)| !is_dir)
        .map(|(name, _)| name.as_str());
    let middleware = rules.pick_middleware(file_names).map(|name| {
        let file = dir.join(name);
        ScannedMiddleware {
            key: module_key(root, &file),
            file,
        }
    });

    let mut routes = Vec::new();
    let mut children = Vec::new();

    for (name, is_dir) in &entries {
        let path = dir.join(name);
        match rules.classify(name, *is_dir) {
            EntryKind::RouteFile => routes.push(ScannedRoute {
                key: module_key(root, &path),
                url_path: join_paths(&prefix, &url_path_for(dir, &path)),
                file: path,
            }),
            EntryKind::Subdirectory => {
                let segment = classify_segment(name);
                if matches!(segment, PatternSegmentType::CatchAll(_)) {
                    return Err(ScanError::CatchAllDirectory { path });
                }
                let child_prefix = join_paths(&prefix, &segment.to_url_segment());
                children.push(scan_dir(root, &path, child_prefix, rules)?);
            }
            EntryKind::MiddlewareFile | EntryKind::Ignored => {}
        }
    }

    Ok(ScannedDir {
        dir: dir.to_path_buf(),
        key: module_key(root, dir),
        prefix: if prefix.is_empty() { "/".to_string() } else { prefix },
        middleware,
        routes,
        children,
    })
}

/// Lists `(name, is_dir)` pairs sorted by name, following symlinks
fn read_sorted(dir: &Path) -> Result<Vec<(String, bool)>, ScanError> {
    let io_err = |source: io::Error| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let file_type = entry.file_type().map_err(io_err)?;
        let is_dir = if file_type.is_symlink() {
            fs::metadata(entry.path()).map_err(io_err)?.is_dir()
        } else {
            file_type.is_dir()
        };
        entries.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
    }
    entries.sort();
    Ok(entries)
}
