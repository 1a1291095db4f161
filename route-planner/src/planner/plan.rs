//! End-to-end route planning from stop names.

use tracing::debug;

use crate::catalog::{CatalogError, without_route};
use crate::domain::{Itinerary, Route, Stop};
use crate::network::TransitGraph;
use crate::stops::{AmbiguousStop, LookupError, StopLookup};

use super::config::{AmbiguityPolicy, PlannerConfig};
use super::itinerary::build_itinerary_with;
use super::search::{SearchError, find_shortest_path};

/// Error from planning a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A stop name didn't resolve
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// A stop name was ambiguous and the config rejects that
    #[error(transparent)]
    AmbiguousStop(#[from] AmbiguousStop),

    /// The route to avoid doesn't exist
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Path search or itinerary construction failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The stops are not connected by the remaining routes
    #[error("cannot find path between \"{start}\" and \"{finish}\"")]
    NoPathFound { start: Stop, finish: Stop },
}

/// Request to plan a journey between two named stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// Name of the stop to start from.
    pub start: String,

    /// Name of the stop to finish at.
    pub finish: String,

    /// Name of a route to leave out entirely.
    pub avoid: Option<String>,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(start: impl Into<String>, finish: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            finish: finish.into(),
            avoid: None,
        }
    }

    /// Leave out every route with this name.
    pub fn avoiding(mut self, route: impl Into<String>) -> Self {
        self.avoid = Some(route.into());
        self
    }
}

/// A planned journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<'a> {
    /// Every stop passed through, in order.
    pub path: Vec<&'a Stop>,

    /// Boarding and change instructions.
    pub itinerary: Itinerary<'a>,

    /// Stop names that matched several stops.
    pub warnings: Vec<AmbiguousStop>,
}

/// Route planner over a fixed collection of routes.
///
/// Stop names are resolved against every loaded route, including any the
/// request asks to avoid; a fresh graph is built per request.
#[derive(Debug)]
pub struct Planner<'a> {
    routes: &'a [Route],
    lookup: StopLookup<'a>,
    config: PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(routes: &'a [Route], config: PlannerConfig) -> Self {
        Self {
            routes,
            lookup: StopLookup::from_routes(routes),
            config,
        }
    }

    /// The stop name index.
    pub fn lookup(&self) -> &StopLookup<'a> {
        &self.lookup
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a journey.
    ///
    /// # Errors
    ///
    /// - [`PlanError::Lookup`] if a stop name is unknown.
    /// - [`PlanError::AmbiguousStop`] if a stop name is ambiguous and the
    ///   config says [`AmbiguityPolicy::Reject`].
    /// - [`PlanError::Catalog`] if the route to avoid doesn't exist.
    /// - [`PlanError::NoPathFound`] if the stops aren't connected once the
    ///   avoided route is gone.
    pub fn plan(&self, request: &PlanRequest) -> Result<Plan<'a>, PlanError> {
        let mut warnings = Vec::new();
        let start = self.resolve(&request.start, &mut warnings)?;
        let finish = self.resolve(&request.finish, &mut warnings)?;

        let routes = match request.avoid.as_deref() {
            Some(name) => without_route(self.routes, name)?,
            None => self.routes.iter().collect(),
        };
        let graph = TransitGraph::from_routes(routes);

        let path = match find_shortest_path(&graph, start, finish) {
            Ok(path) => path,
            // Only served by the avoided route
            Err(SearchError::InvalidEndpoint { .. }) => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        if path.is_empty() {
            return Err(PlanError::NoPathFound {
                start: start.clone(),
                finish: finish.clone(),
            });
        }

        let itinerary = build_itinerary_with(&graph, &path, self.config.route_choice)?;

        debug!(
            start = %start.id(),
            finish = %finish.id(),
            stops = path.len(),
            changes = itinerary.change_count(),
            "planned route"
        );

        Ok(Plan {
            path,
            itinerary,
            warnings,
        })
    }

    fn resolve(
        &self,
        name: &str,
        warnings: &mut Vec<AmbiguousStop>,
    ) -> Result<&'a Stop, PlanError> {
        let found = self.lookup.resolve(name)?;

        if let Some(ambiguity) = found.ambiguity {
            if self.config.ambiguity == AmbiguityPolicy::Reject {
                return Err(ambiguity.into());
            }
            debug!(
                stop_name = name,
                candidates = ambiguity.candidates.len(),
                chosen = %found.stop.id(),
                "ambiguous stop name"
            );
            warnings.push(ambiguity);
        }

        Ok(found.stop)
    }
}
