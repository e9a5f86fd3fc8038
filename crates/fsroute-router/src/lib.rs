//! # fsroute router
//!
//! A zero-dependency library holding the naming conventions of file-system
//! routing:
//! - Entry classification (route files, `_middleware` files, subdirectories)
//! - URL path mapping (`index` elision, `[id]` → `:id`, `[...rest]` → `*rest`,
//!   `(group)` directories, `_`-prefixed exclusion)
//! - A synchronous directory scan
//! - Generation of a static module registry for ahead-of-time compiled routes
//!
//! ## Path Mapping
//!
//! | File | URL |
//! |---|---|
//! | `routes/index.rs` | `/` |
//! | `routes/health.rs` | `/health` |
//! | `routes/users/index.rs` | `/users` |
//! | `routes/users/[id].rs` | `/users/:id` |
//! | `routes/docs/[...slug].rs` | `/docs/*slug` |
//! | `routes/(admin)/stats.rs` | `/stats` |
//! | `routes/_helpers.rs` | not routed |
//!
//! ## Example
//!
//! ```
//! use fsroute_router::{url_path_for, EntryKind, NamingRules};
//! use std::path::Path;
//!
//! let rules = NamingRules::default();
//! assert_eq!(rules.classify("[id].rs", false), EntryKind::RouteFile);
//! assert_eq!(
//!     url_path_for(Path::new("routes"), Path::new("routes/users/[id].rs")),
//!     "/users/:id"
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod codegen;
pub mod entry;
pub mod method;
pub mod path;
pub mod route;
pub mod scan;

// ============================================================================
// Re-exports
// ============================================================================

pub use entry::{EntryKind, NamingRules, MIDDLEWARE_STEM};
pub use method::{HttpMethod, UnknownMethod};
pub use path::{is_valid_path, join_paths, module_key, normalize_path, url_path_for, DirHierarchy};
pub use route::{classify_segment, segment_for, PatternSegmentType};
pub use scan::{scan, ScanError, ScannedDir, ScannedMiddleware, ScannedRoute};
