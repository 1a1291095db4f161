//! Stops that connect more than one route.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::domain::{Route, Stop, StopId};

/// A stop served by two or more distinct routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection<'a> {
    /// The interchange stop.
    pub stop: &'a Stop,

    /// Every route calling at the stop, ordered by route name.
    #[serde(serialize_with = "serialize_route_ids")]
    pub routes: Vec<&'a Route>,
}

fn serialize_route_ids<S: Serializer>(routes: &[&Route], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(routes.iter().map(|r| r.id()))
}

/// Find all stops touched by more than one route.
///
/// Stops are grouped by ID. Each route is listed once per stop even if it
/// calls there repeatedly. Connections come out in order of first
/// appearance; use [`sorted_by_stop_name`] for display order.
pub fn find_connecting_stops<'a, I>(routes: I) -> Vec<Connection<'a>>
where
    I: IntoIterator<Item = &'a Route>,
{
    let mut routes: Vec<&'a Route> = routes.into_iter().collect();
    routes.sort_by(|a, b| a.name().cmp(b.name()));

    let mut order: Vec<&'a StopId> = Vec::new();
    let mut touching: HashMap<&'a StopId, Connection<'a>> = HashMap::new();

    for route in routes {
        for stop in route.stops() {
            let connection = touching.entry(stop.id()).or_insert_with(|| {
                order.push(stop.id());
                Connection {
                    stop,
                    routes: Vec::new(),
                }
            });
            if !connection.routes.contains(&route) {
                connection.routes.push(route);
            }
        }
    }

    let stop_count = order.len();
    let connections: Vec<Connection<'a>> = order
        .into_iter()
        .filter_map(|id| touching.remove(id))
        .filter(|c| c.routes.len() > 1)
        .collect();

    debug!(
        stops = stop_count,
        connections = connections.len(),
        "found connecting stops"
    );
    connections
}

/// Sort connections by stop name, then stop ID.
pub fn sorted_by_stop_name(mut connections: Vec<Connection<'_>>) -> Vec<Connection<'_>> {
    connections.sort_by(|a, b| {
        a.stop
            .name()
            .cmp(b.stop.name())
            .then_with(|| a.stop.id().cmp(b.stop.id()))
    });
    connections
}
