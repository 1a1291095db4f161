//! Stop lookup error types.

use crate::domain::StopId;

/// Errors from resolving a stop name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No stop has this name
    #[error("unknown stop \"{0}\"")]
    UnknownStop(String),
}

/// A stop name that matches more than one distinct stop.
///
/// Not fatal on its own: a lookup that hits this still returns a stop, and
/// carries this value so the caller can warn that the plan may be off.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate stop detected: \"{name}\" matches {} stops", .candidates.len())]
pub struct AmbiguousStop {
    /// The name as the caller supplied it.
    pub name: String,

    /// IDs of every matching stop, the chosen one first.
    pub candidates: Vec<StopId>,
}
