use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One documented endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub method: String,
    pub path: String,
    /// Registry key of the declaring file
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Serializable list of every registered endpoint
///
/// Route options are opaque to the resolver; the catalog is where they end up,
/// typically served as JSON by a documentation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteCatalog {
    pub routes: Vec<CatalogEntry>,
}

impl RouteCatalog {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Entries for one path, in registration order
    pub fn for_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.routes.iter().filter(move |entry| entry.path == path)
    }
}
