//! The resolved directory tree, output of the collection phase

use crate::catalog::{CatalogEntry, RouteCatalog};
use crate::module::{Middleware, RouteDescriptor};
use fsroute_router::{join_paths, HttpMethod};
use std::path::PathBuf;

/// One routed directory
#[derive(Debug)]
pub struct DirectoryNode<S> {
    pub dir: PathBuf,
    /// Directory key relative to the routes root (`""` for the root)
    pub key: String,
    /// Segment this directory nests under, e.g. `/users` or `/:id`;
    /// `None` for the root and for elided directories (`index`, `(group)`)
    pub segment: Option<String>,
    /// Absolute URL prefix of the scope
    pub prefix: String,
    pub routes: Vec<RouteDescriptor<S>>,
    pub middleware: Option<Middleware<S>>,
    pub middleware_key: Option<String>,
    pub children: Vec<DirectoryNode<S>>,
}

impl<S> DirectoryNode<S> {
    /// All descriptors, depth-first, parent before children
    pub fn descriptors(&self) -> Vec<&RouteDescriptor<S>> {
        let mut found: Vec<&RouteDescriptor<S>> = self.routes.iter().collect();
        for child in &self.children {
            found.extend(child.descriptors());
        }
        found
    }

    pub fn route_count(&self) -> usize {
        self.routes.len() + self.children.iter().map(DirectoryNode::route_count).sum::<usize>()
    }
}

/// Everything [`RouteLoader::collect`](crate::RouteLoader::collect) found,
/// ready to be registered
#[derive(Debug)]
pub struct RouteTree<S> {
    pub(crate) root: DirectoryNode<S>,
    pub(crate) base_path: Option<String>,
}

impl<S> RouteTree<S> {
    pub(crate) fn new(root: DirectoryNode<S>, base_path: Option<String>) -> Self {
        let base_path = base_path
            .map(|base| join_paths("", &base))
            .filter(|base| base != "/");
        Self { root, base_path }
    }

    pub fn root(&self) -> &DirectoryNode<S> {
        &self.root
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.root.route_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path an endpoint is served at, base path included
    fn served_path(&self, full_path: &str) -> String {
        match &self.base_path {
            Some(base) => join_paths(base, full_path),
            None => full_path.to_string(),
        }
    }

    /// `(method, path)` of every endpoint in registration order
    pub fn endpoints(&self) -> Vec<(HttpMethod, String)> {
        self.root
            .descriptors()
            .into_iter()
            .map(|route| (route.method, self.served_path(&route.full_path)))
            .collect()
    }

    /// Serializable summary of every endpoint, options included
    pub fn catalog(&self) -> RouteCatalog {
        let routes = self
            .root
            .descriptors()
            .into_iter()
            .map(|route| CatalogEntry {
                method: route.method.as_str().to_string(),
                path: self.served_path(&route.full_path),
                file: route.key.clone(),
                options: route.options.clone(),
            })
            .collect();
        RouteCatalog { routes }
    }
}
