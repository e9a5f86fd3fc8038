/// Lazy iterator over the ancestor directories of a module key
///
/// For key `admin/users/[id].rs`, yields: `admin/users` → `admin` → `` (the
/// routes root). Used to find every `_middleware` file that wraps a route.
///
/// # Performance
///
/// - **Allocations**: Zero (only borrows from input string)
/// - **Complexity**: O(depth) where depth is directory levels
///
/// # Examples
///
/// ```
/// use fsroute_router::path::DirHierarchy;
///
/// let dirs: Vec<&str> = DirHierarchy::new("admin/users/[id].rs").collect();
/// assert_eq!(dirs, vec!["admin/users", "admin", ""]);
///
/// let dirs: Vec<&str> = DirHierarchy::new("health.rs").collect();
/// assert_eq!(dirs, vec![""]);
/// ```
#[derive(Clone)]
pub struct DirHierarchy<'a> {
    current: Option<&'a str>,
}

impl<'a> DirHierarchy<'a> {
    /// Creates a hierarchy starting at the directory that contains `key`
    pub fn new(key: &'a str) -> Self {
        Self {
            current: Some(parent_of(key)),
        }
    }
}

impl<'a> Iterator for DirHierarchy<'a> {
    type Item = &'a str;

    /// Returns the next ancestor directory, ending with the root (`""`)
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = if current.is_empty() {
            None
        } else {
            Some(parent_of(current))
        };

        Some(current)
    }
}

fn parent_of(key: &str) -> &str {
    match key.rfind('/') {
        Some(pos) => &key[..pos],
        None => "",
    }
}
