//! Route planning over the transit graph.
//!
//! Planning runs in two passes. [`find_shortest_path`] finds the fewest-hop
//! stop sequence between two stops; [`build_itinerary`] then walks that
//! sequence and collapses it into boarding and change points, staying on
//! the current route whenever it serves the next edge.
//!
//! [`Planner`] ties both passes to stop-name lookup and the avoid-route
//! filter.

mod config;
mod itinerary;
mod plan;
mod search;


pub use config::{AmbiguityPolicy, PlannerConfig, RouteChoice};
pub use itinerary::{build_itinerary, build_itinerary_with};
pub use plan::{Plan, PlanError, PlanRequest, Planner};
pub use search::{Endpoint, SearchError, find_shortest_path};
