//! Stop types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid stop ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop ID: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A stop's unique identifier.
///
/// Stop IDs are opaque strings handed to us by the data source. The only
/// validation is that they must be non-empty.
///
/// # Examples
///
/// ```
/// use route_planner::domain::StopId;
///
/// let id = StopId::new("place-pktrm").unwrap();
/// assert_eq!(id.as_str(), "place-pktrm");
///
/// assert!(StopId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StopId(String);

impl StopId {
    /// Create a new stop ID.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidStopId> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "stop ID cannot be empty",
            });
        }
        Ok(StopId(s))
    }

    /// Returns the stop ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the StopId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for StopId {
    type Error = InvalidStopId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        StopId::new(s)
    }
}

impl From<StopId> for String {
    fn from(id: StopId) -> Self {
        id.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A location where passengers board or alight.
///
/// Identity is the `id` alone: two stops with the same ID compare equal and
/// hash the same even if their display names differ. Names are not unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    id: StopId,
    name: String,
}

impl Stop {
    /// Create a new stop.
    pub fn new(id: StopId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The stop's unique identifier.
    pub fn id(&self) -> &StopId {
        &self.id
    }

    /// The stop's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
