/// Segment classification for file-based route names
///
/// Pure functional parsing of a single file or directory name into a typed
/// segment. All functions are **pure**: same input → same output, no side effects.

/// Represents the different kinds of segments a route name can produce
///
/// # Examples
///
/// ```
/// use fsroute_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert_eq!(classify_segment("users"), PatternSegmentType::Static("users".to_string()));
/// assert_eq!(classify_segment("[id]"), PatternSegmentType::Param("id".to_string()));
/// assert_eq!(classify_segment("index"), PatternSegmentType::Index);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// `index`: elided, maps to its parent's path
    Index,
    /// Literal `_`: dropped from the URL
    Excluded,
    /// `(name)`: route group, scopes middleware without a URL segment
    Group(String),
    /// `[...name]`: catch-all parameter, only valid as a file name
    CatchAll(String),
    /// `[name]`: required parameter
    Param(String),
    /// Any other text
    Static(String),
}

impl PatternSegmentType {
    /// URL segment text without the leading slash (empty when elided)
    ///
    /// ```
    /// use fsroute_router::route::pattern::PatternSegmentType;
    ///
    /// assert_eq!(PatternSegmentType::Param("id".into()).to_url_segment(), ":id");
    /// assert_eq!(PatternSegmentType::CatchAll("rest".into()).to_url_segment(), "*rest");
    /// assert_eq!(PatternSegmentType::Index.to_url_segment(), "");
    /// ```
    pub fn to_url_segment(&self) -> String {
        match self {
            PatternSegmentType::Index
            | PatternSegmentType::Excluded
            | PatternSegmentType::Group(_) => String::new(),
            PatternSegmentType::CatchAll(name) => format!("*{}", name),
            PatternSegmentType::Param(name) => format!(":{}", name),
            PatternSegmentType::Static(text) => text.clone(),
        }
    }

    /// Whether this segment contributes nothing to the URL
    pub fn is_elided(&self) -> bool {
        matches!(
            self,
            PatternSegmentType::Index | PatternSegmentType::Excluded | PatternSegmentType::Group(_)
        )
    }

    /// Parameter name for `Param` and `CatchAll` segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegmentType::Param(name) | PatternSegmentType::CatchAll(name) => Some(name),
            _ => None,
        }
    }
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. `index` → [`PatternSegmentType::Index`]
/// 2. `_` → [`PatternSegmentType::Excluded`]
/// 3. `(name)` → [`PatternSegmentType::Group`]
/// 4. `[...name]` → [`PatternSegmentType::CatchAll`]
/// 5. `[name]` → [`PatternSegmentType::Param`]
/// 6. Anything else (including `[]`) → [`PatternSegmentType::Static`]
///
/// ```
/// use fsroute_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert_eq!(classify_segment("[...slug]"), PatternSegmentType::CatchAll("slug".into()));
/// assert_eq!(classify_segment("(admin)"), PatternSegmentType::Group("admin".into()));
/// assert_eq!(classify_segment("_"), PatternSegmentType::Excluded);
/// ```
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    match segment {
        "index" => return PatternSegmentType::Index,
        "_" => return PatternSegmentType::Excluded,
        _ => {}
    }

    if let Some(inner) = segment.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        if !inner.is_empty() {
            return PatternSegmentType::Group(inner.to_string());
        }
    }

    match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => match inner.strip_prefix("...") {
            Some(name) if !name.is_empty() => PatternSegmentType::CatchAll(name.to_string()),
            Some(_) => PatternSegmentType::Static(segment.to_string()),
            None if inner.is_empty() => PatternSegmentType::Static(segment.to_string()),
            None => PatternSegmentType::Param(inner.to_string()),
        },
        None => PatternSegmentType::Static(segment.to_string()),
    }
}

/// Maps a file or directory name (without extension) to its URL segment
///
/// `index` and `_` map to the empty segment, `[x]` maps to `:x`, anything else
/// passes through unchanged.
///
/// ```
/// use fsroute_router::segment_for;
///
/// assert_eq!(segment_for("index"), "");
/// assert_eq!(segment_for("[id]"), ":id");
/// assert_eq!(segment_for("users"), "users");
/// ```
pub fn segment_for(name: &str) -> String {
    classify_segment(name).to_url_segment()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(
            classify_segment("about"),
            PatternSegmentType::Static("about".to_string())
        );
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(
            classify_segment("[postId]"),
            PatternSegmentType::Param("postId".to_string())
        );
    }

    #[test]
    fn test_classify_catch_all() {
        assert_eq!(
            classify_segment("[...slug]"),
            PatternSegmentType::CatchAll("slug".to_string())
        );
    }

    #[test]
    fn test_empty_brackets_are_static() {
        assert_eq!(classify_segment("[]"), PatternSegmentType::Static("[]".to_string()));
        assert_eq!(
            classify_segment("[...]"),
            PatternSegmentType::Static("[...]".to_string())
        );
        assert_eq!(classify_segment("()"), PatternSegmentType::Static("()".to_string()));
    }

    #[test]
    fn test_partial_brackets_are_static() {
        assert_eq!(
            classify_segment("[id"),
            PatternSegmentType::Static("[id".to_string())
        );
        assert_eq!(
            classify_segment("id]"),
            PatternSegmentType::Static("id]".to_string())
        );
    }

    #[test]
    fn test_segment_for() {
        assert_eq!(segment_for("index"), "");
        assert_eq!(segment_for("_"), "");
        assert_eq!(segment_for("(auth)"), "");
        assert_eq!(segment_for("[id]"), ":id");
        assert_eq!(segment_for("[...rest]"), "*rest");
        assert_eq!(segment_for("health"), "health");
    }

    #[test]
    fn test_param_name() {
        assert_eq!(classify_segment("[id]").param_name(), Some("id"));
        assert_eq!(classify_segment("[...rest]").param_name(), Some("rest"));
        assert_eq!(classify_segment("users").param_name(), None);
    }
}
