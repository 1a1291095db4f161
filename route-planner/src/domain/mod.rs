//! Domain types for the route planner.
//!
//! Stops and routes are immutable values supplied by the data source. Their
//! identity is their ID; names are for display and need not be unique.

mod itinerary;
mod route;
mod stop;

pub use itinerary::{Itinerary, ItineraryEntry};
pub use route::{InvalidRouteId, Route, RouteId};
pub use stop::{InvalidStopId, Stop, StopId};
