/// Pattern parsing for route file paths
///
/// Pure functional parsers that transform relative file path segments into
/// URL patterns. All functions are **pure**: same input → same output, no side effects.

use super::pattern::{classify_segment, PatternSegmentType};

/// A parsed URL pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPattern {
    /// URL pattern like "/users/:id"
    pub pattern: String,
    /// Parameter names in order of appearance
    pub params: Vec<String>,
    /// Whether the pattern ends in a catch-all parameter
    pub has_catch_all: bool,
}

/// Internal state accumulator for fold-based parsing
#[derive(Default)]
struct ParseState {
    pattern: String,
    params: Vec<String>,
    has_catch_all: bool,
}

impl ParseState {
    fn with_static_segment(mut self, segment: String) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(&segment);
        self
    }

    fn with_param(mut self, param_name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&param_name);
        self.params.push(param_name);
        self
    }

    fn with_catch_all(mut self, param_name: String) -> Self {
        self.pattern.push_str("/*");
        self.pattern.push_str(&param_name);
        self.params.push(param_name);
        self.has_catch_all = true;
        self
    }

    /// Handles the empty pattern case
    fn finalize(mut self) -> ParsedPattern {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }
        ParsedPattern {
            pattern: self.pattern,
            params: self.params,
            has_catch_all: self.has_catch_all,
        }
    }
}

/// Processes a single segment and updates the parse state
fn process_segment<S: AsRef<str>>(state: ParseState, segment: S) -> ParseState {
    let segment = segment.as_ref();
    if segment.is_empty() {
        return state;
    }

    match classify_segment(segment) {
        PatternSegmentType::Index | PatternSegmentType::Excluded | PatternSegmentType::Group(_) => {
            state
        }
        PatternSegmentType::CatchAll(name) => state.with_catch_all(name),
        PatternSegmentType::Param(name) => state.with_param(name),
        PatternSegmentType::Static(text) => state.with_static_segment(text),
    }
}

/// Parses already-split path segments (extension removed) into a pattern
///
/// ```
/// use fsroute_router::route::parser::parse_segments;
///
/// let parsed = parse_segments(["users", "[id]", "posts", "[postId]"]);
/// assert_eq!(parsed.pattern, "/users/:id/posts/:postId");
/// assert_eq!(parsed.params, vec!["id", "postId"]);
///
/// assert_eq!(parse_segments(["index"]).pattern, "/");
/// ```
pub fn parse_segments<I, S>(segments: I) -> ParsedPattern
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .fold(ParseState::default(), process_segment)
        .finalize()
}

/// Parses a `/`-separated relative path without extension
///
/// ```
/// use fsroute_router::route::parser::parse_pattern;
///
/// assert_eq!(parse_pattern("users/index").pattern, "/users");
/// assert_eq!(parse_pattern("docs/[...slug]").pattern, "/docs/*slug");
/// ```
pub fn parse_pattern(path: &str) -> ParsedPattern {
    parse_segments(path.split('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern_static() {
        let parsed = parse_pattern("about");
        assert_eq!(parsed.pattern, "/about");
        assert!(parsed.params.is_empty());
        assert!(!parsed.has_catch_all);
    }

    #[test]
    fn test_parse_pattern_dynamic() {
        let parsed = parse_pattern("users/[id]");
        assert_eq!(parsed.pattern, "/users/:id");
        assert_eq!(parsed.params, vec!["id".to_string()]);
    }

    #[test]
    fn test_parse_pattern_catch_all() {
        let parsed = parse_pattern("docs/[...slug]");
        assert_eq!(parsed.pattern, "/docs/*slug");
        assert_eq!(parsed.params, vec!["slug".to_string()]);
        assert!(parsed.has_catch_all);
    }

    #[test]
    fn test_parse_pattern_skips_elided_segments() {
        assert_eq!(parse_pattern("users/_/[id]/index").pattern, "/users/:id");
        assert_eq!(parse_pattern("(admin)/users").pattern, "/users");
    }

    #[test]
    fn test_parse_pattern_empty() {
        assert_eq!(parse_pattern("").pattern, "/");
        assert_eq!(parse_pattern("index").pattern, "/");
        assert_eq!(parse_pattern("//").pattern, "/");
    }
}
