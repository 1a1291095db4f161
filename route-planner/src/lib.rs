//! Transit route planner.
//!
//! Loads a collection of routes, each an ordered list of stops, and
//! answers: "which stops connect routes, and how do I get from this stop
//! to that one with the fewest stops?"

pub mod catalog;
pub mod domain;
pub mod network;
pub mod planner;
pub mod stops;
