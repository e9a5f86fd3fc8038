//! Directory entry classification

use std::path::Path;

/// Name prefix reserved for middleware files
pub const MIDDLEWARE_STEM: &str = "_middleware";

/// What the walker does with a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A file whose module exposes one or more endpoints
    RouteFile,
    /// A directory-scoped `_middleware` file
    MiddlewareFile,
    /// A directory to recurse into
    Subdirectory,
    /// Excluded from routing
    Ignored,
}

/// File naming rules: which extensions count as route sources
///
/// The order of `extensions` is the middleware preference order: when a
/// directory holds `_middleware.<a>` and `_middleware.<b>`, the one whose
/// extension comes first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRules {
    extensions: Vec<String>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::new(["rs"])
    }
}

impl NamingRules {
    /// Creates rules for the given extensions (without the leading dot)
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.into().trim_start_matches('.').to_string())
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Middleware file names in preference order
    ///
    /// ```
    /// use fsroute_router::NamingRules;
    ///
    /// let rules = NamingRules::new(["rs", "route"]);
    /// assert_eq!(rules.middleware_candidates(), vec!["_middleware.rs", "_middleware.route"]);
    /// ```
    pub fn middleware_candidates(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| format!("{}.{}", MIDDLEWARE_STEM, ext))
            .collect()
    }

    /// Whether `name` carries one of the recognized extensions
    pub fn has_route_extension(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|known| known == ext))
            .unwrap_or(false)
    }

    /// Classifies one directory entry by name
    ///
    /// - Hidden (`.`-prefixed) entries are ignored.
    /// - `_middleware.<ext>` is a middleware file; every other `_`-prefixed
    ///   entry, file or directory, is excluded.
    /// - Other directories are recursed into.
    /// - Other files are routes when their extension is recognized.
    ///
    /// ```
    /// use fsroute_router::{EntryKind, NamingRules};
    ///
    /// let rules = NamingRules::default();
    /// assert_eq!(rules.classify("health.rs", false), EntryKind::RouteFile);
    /// assert_eq!(rules.classify("_middleware.rs", false), EntryKind::MiddlewareFile);
    /// assert_eq!(rules.classify("_helpers.rs", false), EntryKind::Ignored);
    /// assert_eq!(rules.classify("users", true), EntryKind::Subdirectory);
    /// assert_eq!(rules.classify("_internal", true), EntryKind::Ignored);
    /// assert_eq!(rules.classify("README.md", false), EntryKind::Ignored);
    /// ```
    pub fn classify(&self, name: &str, is_dir: bool) -> EntryKind {
        if name.starts_with('.') {
            return EntryKind::Ignored;
        }

        if is_dir {
            return if name.starts_with('_') {
                EntryKind::Ignored
            } else {
                EntryKind::Subdirectory
            };
        }

        if self.is_middleware_file(name) {
            EntryKind::MiddlewareFile
        } else if name.starts_with('_') {
            EntryKind::Ignored
        } else if self.has_route_extension(name) {
            EntryKind::RouteFile
        } else {
            EntryKind::Ignored
        }
    }

    fn is_middleware_file(&self, name: &str) -> bool {
        name.strip_prefix(MIDDLEWARE_STEM)
            .and_then(|rest| rest.strip_prefix('.'))
            .map(|ext| self.extensions.iter().any(|known| known == ext))
            .unwrap_or(false)
    }

    /// Picks the preferred middleware file among a directory's file names
    ///
    /// ```
    /// use fsroute_router::NamingRules;
    ///
    /// let rules = NamingRules::new(["rs", "route"]);
    /// let names = ["_middleware.route", "_middleware.rs", "index.rs"];
    /// assert_eq!(rules.pick_middleware(names.iter().copied()), Some("_middleware.rs".to_string()));
    /// ```
    pub fn pick_middleware<'a, I>(&self, file_names: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: Vec<&str> = file_names.into_iter().collect();
        self.middleware_candidates()
            .into_iter()
            .find(|candidate| present.contains(&candidate.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_middleware_extension_is_ignored() {
        let rules = NamingRules::default();
        assert_eq!(rules.classify("_middleware.ts", false), EntryKind::Ignored);
        assert_eq!(rules.classify("_middleware", false), EntryKind::Ignored);
    }

    #[test]
    fn test_hidden_entries_are_ignored() {
        let rules = NamingRules::default();
        assert_eq!(rules.classify(".git", true), EntryKind::Ignored);
        assert_eq!(rules.classify(".draft.rs", false), EntryKind::Ignored);
    }

    #[test]
    fn test_leading_dot_in_extension_config() {
        let rules = NamingRules::new([".rs"]);
        assert_eq!(rules.extensions(), &["rs".to_string()]);
        assert_eq!(rules.classify("index.rs", false), EntryKind::RouteFile);
    }

    #[test]
    fn test_pick_middleware_none() {
        let rules = NamingRules::default();
        assert_eq!(rules.pick_middleware(["index.rs", "_util.rs"]), None);
    }
}
