//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::domain::Route;

/// How to pick a route when the current one doesn't serve the next edge
/// and several others do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteChoice {
    /// Sort candidates by route ID and take the first.
    #[default]
    LowestId,

    /// Take the candidate that was added to the graph first.
    FirstLoaded,
}

impl RouteChoice {
    /// Pick one route from `candidates`, which are in graph load order.
    ///
    /// Returns `None` only if `candidates` is empty.
    pub fn pick<'a>(self, candidates: &[&'a Route]) -> Option<&'a Route> {
        match self {
            RouteChoice::LowestId => candidates.iter().copied().min_by(|a, b| a.id().cmp(b.id())),
            RouteChoice::FirstLoaded => candidates.first().copied(),
        }
    }
}

/// What to do when a stop name matches several distinct stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Use the first matching stop and report a warning.
    #[default]
    Proceed,

    /// Fail the plan.
    Reject,
}

/// Configuration parameters for route planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Tie-break for route selection in itineraries.
    pub route_choice: RouteChoice,

    /// Handling of ambiguous stop names.
    pub ambiguity: AmbiguityPolicy,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(route_choice: RouteChoice, ambiguity: AmbiguityPolicy) -> Self {
        Self {
            route_choice,
            ambiguity,
        }
    }

    /// Set the route tie-break.
    pub fn with_route_choice(mut self, route_choice: RouteChoice) -> Self {
        self.route_choice = route_choice;
        self
    }

    /// Set the ambiguity policy.
    pub fn with_ambiguity(mut self, ambiguity: AmbiguityPolicy) -> Self {
        self.ambiguity = ambiguity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteId;

    fn route(id: &str) -> Route {
        Route::new(RouteId::new(id).unwrap(), id, vec![])
    }

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.route_choice, RouteChoice::LowestId);
        assert_eq!(config.ambiguity, AmbiguityPolicy::Proceed);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(RouteChoice::FirstLoaded, AmbiguityPolicy::Reject);

        assert_eq!(config.route_choice, RouteChoice::FirstLoaded);
        assert_eq!(config.ambiguity, AmbiguityPolicy::Reject);
    }

    #[test]
    fn builder_methods() {
        let config = PlannerConfig::default()
            .with_route_choice(RouteChoice::FirstLoaded)
            .with_ambiguity(AmbiguityPolicy::Reject);

        assert_eq!(
            config,
            PlannerConfig::new(RouteChoice::FirstLoaded, AmbiguityPolicy::Reject)
        );
    }

    #[test]
    fn pick_lowest_id() {
        let (red, green, blue) = (route("Red"), route("Green"), route("Blue"));
        let picked = RouteChoice::LowestId.pick(&[&red, &green, &blue]);
        assert_eq!(picked, Some(&blue));
    }

    #[test]
    fn pick_first_loaded() {
        let (red, green) = (route("Red"), route("Green"));
        let picked = RouteChoice::FirstLoaded.pick(&[&red, &green]);
        assert_eq!(picked, Some(&red));
    }

    #[test]
    fn pick_from_nothing() {
        assert!(RouteChoice::LowestId.pick(&[]).is_none());
        assert!(RouteChoice::FirstLoaded.pick(&[]).is_none());
    }

    #[test]
    fn deserialize_partial() {
        let config: PlannerConfig = serde_json::from_str(r#"{"route_choice":"first_loaded"}"#).unwrap();
        assert_eq!(config.route_choice, RouteChoice::FirstLoaded);
        assert_eq!(config.ambiguity, AmbiguityPolicy::Proceed);

        let config: PlannerConfig = serde_json::from_str(r#"{"ambiguity":"reject"}"#).unwrap();
        assert_eq!(config.ambiguity, AmbiguityPolicy::Reject);
    }
}
