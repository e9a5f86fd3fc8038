// File: src/collect.rs
// Purpose: Async collection phase - walks the routes directory and resolves every module

use crate::config::RoutingConfig;
use crate::error::{Result, RouteError};
use crate::loader::ModuleLoader;
use crate::tree::{DirectoryNode, RouteTree};
use fsroute_router::{
    classify_segment, join_paths, module_key, url_path_for, EntryKind, NamingRules,
    PatternSegmentType,
};
use futures_util::future::try_join_all;
use std::collections::BTreeSet;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;
use tracing::{debug, info, warn};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Walks a routes directory and resolves each file through a [`ModuleLoader`]
///
/// Collection never touches the application router. Its result, a
/// [`RouteTree`], is registered in a separate synchronous step so that a
/// broken tree fails before anything is bound.
pub struct RouteLoader<L> {
    loader: L,
    rules: NamingRules,
    base_path: Option<String>,
}

/// One directory entry, stat'ed
struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

impl<L> RouteLoader<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            rules: NamingRules::default(),
            base_path: None,
        }
    }

    /// Create a loader using the extensions and base path of a routing config
    pub fn with_config(loader: L, config: &RoutingConfig) -> Self {
        Self {
            loader,
            rules: config.naming_rules(),
            base_path: config.base_path.clone(),
        }
    }

    pub fn with_rules(mut self, rules: NamingRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn rules(&self) -> &NamingRules {
        &self.rules
    }

    /// Collect every route and middleware below `dir`
    ///
    /// Sibling directories are read concurrently; results keep file name order.
    pub async fn collect<S>(&self, dir: impl AsRef<Path>) -> Result<RouteTree<S>>
    where
        L: ModuleLoader<S>,
        S: Clone + Send + Sync + 'static,
    {
        let root = dir.as_ref();
        let node = self
            .collect_dir(root, root.to_path_buf(), None, String::new())
            .await?;

        self.report_unused_keys(&node);

        let tree = RouteTree::new(node, self.base_path.clone());
        info!(
            dir = %root.display(),
            routes = tree.len(),
            "collected file-system routes"
        );
        Ok(tree)
    }

    fn collect_dir<'a, S>(
        &'a self,
        root: &'a Path,
        dir: PathBuf,
        segment: Option<String>,
        prefix: String,
    ) -> BoxFuture<'a, Result<DirectoryNode<S>>>
    where
        L: ModuleLoader<S>,
        S: Clone + Send + Sync + 'static,
    {
        Box::pin(async move {
            let entries = read_sorted(&dir).await?;

            let middleware_name = self.rules.pick_middleware(
                entries
                    .iter()
                    .filter(|entry| !entry.is_dir)
                    .map(|entry| entry.name.as_str()),
            );
            let (middleware, middleware_key) = match middleware_name {
                Some(name) => {
                    let path = dir.join(&name);
                    let key = module_key(root, &path);
                    let middleware = self.loader.load_middleware(&key, &path)?;
                    debug!(file = %key, "loaded middleware");
                    (Some(middleware), Some(key))
                }
                None => (None, None),
            };

            let mut routes = Vec::new();
            let mut subdirs = Vec::new();

            for entry in entries {
                match self.rules.classify(&entry.name, entry.is_dir) {
                    EntryKind::RouteFile => {
                        let key = module_key(root, &entry.path);
                        let module = self.loader.load_route(&key, &entry.path)?;
                        let path = url_path_for(&dir, &entry.path);
                        let full_path = join_paths(&prefix, &path);
                        routes.extend(module.into_descriptors(&key, &entry.path, &path, &full_path)?);
                    }
                    EntryKind::Subdirectory => {
                        let child = classify_segment(&entry.name);
                        if matches!(child, PatternSegmentType::CatchAll(_)) {
                            return Err(RouteError::InvalidSegment { path: entry.path });
                        }
                        let child_segment = (!child.is_elided())
                            .then(|| format!("/{}", child.to_url_segment()));
                        let child_prefix = match &child_segment {
                            Some(segment) => join_paths(&prefix, segment),
                            None => prefix.clone(),
                        };
                        subdirs.push((entry.path, child_segment, child_prefix));
                    }
                    EntryKind::MiddlewareFile | EntryKind::Ignored => {}
                }
            }

            let children = try_join_all(subdirs.into_iter().map(|(path, segment, prefix)| {
                self.collect_dir(root, path, segment, prefix)
            }))
            .await?;

            let key = module_key(root, &dir);
            debug!(
                dir = %key,
                routes = routes.len(),
                children = children.len(),
                "collected directory"
            );

            Ok(DirectoryNode {
                dir,
                key,
                segment,
                prefix: if prefix.is_empty() { "/".to_string() } else { prefix },
                routes,
                middleware,
                middleware_key,
                children,
            })
        })
    }

    fn report_unused_keys<S>(&self, node: &DirectoryNode<S>)
    where
        L: ModuleLoader<S>,
    {
        let found: BTreeSet<&str> = node
            .descriptors()
            .into_iter()
            .map(|route| route.key.as_str())
            .collect();
        for key in self.loader.known_route_keys() {
            if !found.contains(key.as_str()) {
                warn!(key = %key, "registered route module has no file in the routes directory");
            }
        }
    }
}

/// Lists the entries of `dir` sorted by name, following symlinks
async fn read_sorted(dir: &Path) -> Result<Vec<Entry>> {
    let read_err = |source: io::Error| RouteError::DirectoryRead {
        dir: dir.to_path_buf(),
        source,
    };

    let mut reader = fs::read_dir(dir).await.map_err(read_err)?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(read_err)? {
        let path = entry.path();
        let file_type = entry.file_type().await.map_err(read_err)?;
        let is_dir = if file_type.is_symlink() {
            fs::metadata(&path).await.map_err(read_err)?.is_dir()
        } else {
            file_type.is_dir()
        };
        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_dir,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
