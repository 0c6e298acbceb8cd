use thiserror::Error;

/// Failures reported by the raising queries of [`NavTreeMap`](crate::NavTreeMap).
///
/// Lookups that merely find nothing return `None` instead; only the
/// operations documented with an `# Errors` section produce a `NavError`.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum NavError {
    /// `first_key`/`last_key` was called on a map with no entries.
    #[error("navtree map is empty")]
    Empty,
    /// `sub_map` was given a start key ordered after its end key.
    #[error("range start is greater than range end")]
    InvalidRange,
}
