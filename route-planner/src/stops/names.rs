//! Stop name lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Route, Stop};

use super::error::{AmbiguousStop, LookupError};

/// A resolved stop name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopMatch<'a> {
    /// The stop to use.
    pub stop: &'a Stop,

    /// Set when the name matched several distinct stops.
    pub ambiguity: Option<AmbiguousStop>,
}

impl StopMatch<'_> {
    /// Check whether the name was ambiguous.
    pub fn is_ambiguous(&self) -> bool {
        self.ambiguity.is_some()
    }
}

/// Case-insensitive stop name → stops index.
///
/// Display names are not unique, so each name maps to every distinct stop
/// (by ID) that carries it, in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct StopLookup<'a> {
    by_name: HashMap<String, Vec<&'a Stop>>,
}

impl<'a> StopLookup<'a> {
    /// Build the index from every stop of every route.
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = &'a Route>,
    {
        let mut by_name: HashMap<String, Vec<&'a Stop>> = HashMap::new();

        for route in routes {
            for stop in route.stops() {
                let stops = by_name.entry(normalize(stop.name())).or_default();
                if !stops.contains(&stop) {
                    stops.push(stop);
                }
            }
        }

        debug!(names = by_name.len(), "built stop lookup");
        Self { by_name }
    }

    /// All stops with this name, ignoring case. Empty if none.
    pub fn get(&self, name: &str) -> &[&'a Stop] {
        self.by_name
            .get(&normalize(name))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve a name to a single stop.
    ///
    /// If several distinct stops share the name, the first one seen is used
    /// and the match carries an [`AmbiguousStop`].
    ///
    /// # Example
    ///
    /// ```
    /// use route_planner::domain::{Route, RouteId, Stop, StopId};
    /// use route_planner::stops::StopLookup;
    ///
    /// let stop = |id: &str, name: &str| Stop::new(StopId::new(id).unwrap(), name);
    /// let red = Route::new(
    ///     RouteId::new("Red").unwrap(),
    ///     "Red Line",
    ///     vec![stop("place-pktrm", "Park Street"), stop("place-dwnxg", "Downtown Crossing")],
    /// );
    ///
    /// let lookup = StopLookup::from_routes([&red]);
    /// let found = lookup.resolve("park street").unwrap();
    /// assert_eq!(found.stop.id().as_str(), "place-pktrm");
    /// assert!(!found.is_ambiguous());
    ///
    /// assert!(lookup.resolve("Hogwarts").is_err());
    /// ```
    pub fn resolve(&self, name: &str) -> Result<StopMatch<'a>, LookupError> {
        let (&stop, others) = self
            .get(name)
            .split_first()
            .ok_or_else(|| LookupError::UnknownStop(name.to_string()))?;

        let ambiguity = (!others.is_empty()).then(|| AmbiguousStop {
            name: name.to_string(),
            candidates: std::iter::once(stop)
                .chain(others.iter().copied())
                .map(|s| s.id().clone())
                .collect(),
        });

        Ok(StopMatch { stop, ambiguity })
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if the lookup is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}
