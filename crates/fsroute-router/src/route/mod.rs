/// Route module for file-based routing
///
/// Contains pure functional components for turning file names into URL patterns:
/// - Pure functions (same input → same output)
/// - Pattern matching for control flow

pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use parser::{parse_pattern, parse_segments, ParsedPattern};
pub use pattern::{classify_segment, segment_for, PatternSegmentType};
