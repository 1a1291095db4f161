//! Route types.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::Stop;

/// Error returned when constructing an invalid route ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route ID: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// A route's unique identifier, e.g. `"Red"` or `"Green-B"`.
///
/// # Examples
///
/// ```
/// use route_planner::domain::RouteId;
///
/// let id = RouteId::new("Green-B").unwrap();
/// assert_eq!(id.as_str(), "Green-B");
///
/// assert!(RouteId::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RouteId(String);

impl RouteId {
    /// Create a new route ID.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: impl Into<String>) -> Result<Self, InvalidRouteId> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidRouteId {
                reason: "route ID cannot be empty",
            });
        }
        Ok(RouteId(s))
    }

    /// Returns the route ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the RouteId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RouteId {
    type Error = InvalidRouteId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        RouteId::new(s)
    }
}

impl From<RouteId> for String {
    fn from(id: RouteId) -> Self {
        id.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, ordered sequence of stops served by one transit line.
///
/// Stops are in travel order, first to last. Identity is the `id` alone.
/// A route with fewer than two stops is valid but contributes no edges to
/// a [`TransitGraph`](crate::network::TransitGraph).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    id: RouteId,
    name: String,
    stops: Vec<Stop>,
}

impl Route {
    /// Create a new route.
    pub fn new(id: RouteId, name: impl Into<String>, stops: Vec<Stop>) -> Self {
        Self {
            id,
            name: name.into(),
            stops,
        }
    }

    /// The route's unique identifier.
    pub fn id(&self) -> &RouteId {
        &self.id
    }

    /// The route's display name (e.g. "Red Line").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stops in travel order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops on the route.
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// Consecutive stop pairs, i.e. the segments this route travels.
    pub fn segments(&self) -> impl Iterator<Item = (&Stop, &Stop)> {
        self.stops.iter().zip(self.stops.iter().skip(1))
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
