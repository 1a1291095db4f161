//! Turn a stop-by-stop path into boarding and change instructions.

use tracing::debug;

use crate::domain::{Itinerary, ItineraryEntry, Route, Stop};
use crate::network::TransitGraph;

use super::config::RouteChoice;
use super::search::SearchError;

/// Build an itinerary for `path` using the default route tie-break.
///
/// See [`build_itinerary_with`].
pub fn build_itinerary<'a>(
    graph: &TransitGraph<'a>,
    path: &[&'a Stop],
) -> Result<Itinerary<'a>, SearchError> {
    build_itinerary_with(graph, path, RouteChoice::default())
}

/// Build an itinerary for `path`, a sequence of adjacent stops.
///
/// Stays on the current route for as long as it serves the next edge, and
/// emits an entry only when boarding or changing. When the current route
/// doesn't continue and several others do, `choice` picks one. The last
/// entry is the destination with no route. A single-stop path gives just
/// that arrival entry.
///
/// # Errors
///
/// - [`SearchError::NoPathFound`] if `path` is empty.
/// - [`SearchError::NotAdjacent`] if two consecutive stops share no edge.
pub fn build_itinerary_with<'a>(
    graph: &TransitGraph<'a>,
    path: &[&'a Stop],
    choice: RouteChoice,
) -> Result<Itinerary<'a>, SearchError> {
    let Some(&finish) = path.last() else {
        return Err(SearchError::NoPathFound);
    };

    let mut current: Option<&'a Route> = None;
    let mut entries = Vec::new();

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let choices = graph.routes_between(from, to);

        if current.is_some_and(|route| choices.contains(&route)) {
            continue;
        }

        let next = choice
            .pick(&choices)
            .ok_or_else(|| SearchError::NotAdjacent {
                from: from.id().clone(),
                to: to.id().clone(),
            })?;
        current = Some(next);
        entries.push(ItineraryEntry::board(from, next));
    }

    entries.push(ItineraryEntry::arrive(finish));

    let itinerary = Itinerary::new(entries);
    debug!(
        stops = path.len(),
        changes = itinerary.change_count(),
        "built itinerary"
    );
    Ok(itinerary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteId, StopId};
    use crate::planner::find_shortest_path;

    fn stop(id: &str) -> Stop {
        Stop::new(StopId::new(id).unwrap(), id.to_uppercase())
    }

    fn route(id: &str, stops: &[&str]) -> Route {
        Route::new(
            RouteId::new(id).unwrap(),
            id,
            stops.iter().map(|s| stop(s)).collect(),
        )
    }

    /// (stop id, route id) pairs for compact assertions.
    fn summary(itinerary: &Itinerary<'_>) -> Vec<(String, Option<String>)> {
        itinerary
            .entries()
            .iter()
            .map(|e| {
                (
                    e.stop.id().to_string(),
                    e.route.map(|r| r.id().to_string()),
                )
            })
            .collect()
    }

    fn entry(stop: &str, route: Option<&str>) -> (String, Option<String>) {
        (stop.to_string(), route.map(str::to_string))
    }

    #[test]
    fn red_green_scenario() {
        let routes = vec![
            route("Red", &["a", "b", "c", "d"]),
            route("Green", &["x", "b", "c", "y"]),
        ];
        let graph = TransitGraph::from_routes(&routes);
        let path = find_shortest_path(&graph, &stop("a"), &stop("y")).unwrap();

        let itinerary = build_itinerary(&graph, &path).unwrap();

        // Red serves a-b and b-c; only Green serves c-y
        assert_eq!(
            summary(&itinerary),
            vec![
                entry("a", Some("Red")),
                entry("c", Some("Green")),
                entry("y", None),
            ]
        );
        assert_eq!(itinerary.change_count(), 1);
    }

    #[test]
    fn single_route_run_emits_one_entry() {
        let routes = vec![route("Orange", &["a", "b", "c", "d", "e"])];
        let graph = TransitGraph::from_routes(&routes);
        let path = find_shortest_path(&graph, &stop("a"), &stop("e")).unwrap();

        let itinerary = build_itinerary(&graph, &path).unwrap();
        assert_eq!(
            summary(&itinerary),
            vec![entry("a", Some("Orange")), entry("e", None)]
        );
    }

    #[test]
    fn single_stop_path() {
        let routes = vec![route("Red", &["a", "b"])];
        let graph = TransitGraph::from_routes(&routes);
        let a = graph.stop(&StopId::new("a").unwrap()).unwrap();

        let itinerary = build_itinerary(&graph, &[a]).unwrap();
        assert_eq!(summary(&itinerary), vec![entry("a", None)]);
    }

    #[test]
    fn empty_path_is_no_path() {
        let routes = vec![route("Red", &["a", "b"])];
        let graph = TransitGraph::from_routes(&routes);

        assert_eq!(
            build_itinerary(&graph, &[]).unwrap_err(),
            SearchError::NoPathFound
        );
    }

    #[test]
    fn disconnected_path_fails() {
        let routes = vec![route("Red", &["a", "b"]), route("Blue", &["x", "y"])];
        let graph = TransitGraph::from_routes(&routes);

        let path = find_shortest_path(&graph, &stop("a"), &stop("y")).unwrap();
        assert!(path.is_empty());
        assert_eq!(
            build_itinerary(&graph, &path).unwrap_err(),
            SearchError::NoPathFound
        );
    }

    #[test]
    fn non_adjacent_stops_rejected() {
        let routes = vec![route("Red", &["a", "b", "c"])];
        let graph = TransitGraph::from_routes(&routes);
        let a = graph.stop(&StopId::new("a").unwrap()).unwrap();
        let c = graph.stop(&StopId::new("c").unwrap()).unwrap();

        let err = build_itinerary(&graph, &[a, c]).unwrap_err();
        assert_eq!(err.to_string(), "stops a and c are not adjacent");
    }

    #[test]
    fn tie_break_policies() {
        // Zulu loaded first, Alpha has the lower ID; both serve every edge
        let routes = vec![route("Zulu", &["a", "b", "c"]), route("Alpha", &["a", "b", "c"])];
        let graph = TransitGraph::from_routes(&routes);
        let path = find_shortest_path(&graph, &stop("a"), &stop("c")).unwrap();

        let by_id = build_itinerary_with(&graph, &path, RouteChoice::LowestId).unwrap();
        assert_eq!(
            summary(&by_id),
            vec![entry("a", Some("Alpha")), entry("c", None)]
        );

        let by_load = build_itinerary_with(&graph, &path, RouteChoice::FirstLoaded).unwrap();
        assert_eq!(
            summary(&by_load),
            vec![entry("a", Some("Zulu")), entry("c", None)]
        );
    }

    #[test]
    fn stays_on_route_through_shared_section() {
        // Board Blue, ride through a section shared with Red, stay on Blue
        let routes = vec![
            route("Blue", &["a", "b", "c", "d"]),
            route("Red", &["q", "b", "c", "r"]),
        ];
        let graph = TransitGraph::from_routes(&routes);
        let path = find_shortest_path(&graph, &stop("a"), &stop("d")).unwrap();

        let itinerary = build_itinerary(&graph, &path).unwrap();
        assert_eq!(
            summary(&itinerary),
            vec![entry("a", Some("Blue")), entry("d", None)]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{RouteId, StopId};
    use proptest::prelude::*;

    proptest! {
        /// A path along one route emits one boarding entry plus arrival
        #[test]
        fn one_route_one_boarding(len in 2usize..12) {
            let stops: Vec<Stop> = (0..len)
                .map(|i| Stop::new(StopId::new(format!("s{i}")).unwrap(), format!("S{i}")))
                .collect();
            let line = Route::new(RouteId::new("line").unwrap(), "Line", stops);
            let graph = TransitGraph::from_routes([&line]);
            let path: Vec<&Stop> = line.stops().iter().collect();

            let itinerary = build_itinerary(&graph, &path).unwrap();
            prop_assert_eq!(itinerary.len(), 2);
            prop_assert_eq!(itinerary.change_count(), 0);
            prop_assert_eq!(itinerary.entries()[0].route, Some(&line));
        }

        /// Each entry's route serves the edge leaving that entry's stop
        #[test]
        fn boarded_route_serves_next_edge(
            lines in prop::collection::vec(prop::collection::vec(0u8..6, 2..5), 1..4)
        ) {
            let routes: Vec<Route> = lines
                .into_iter()
                .enumerate()
                .map(|(i, stops)| {
                    Route::new(
                        RouteId::new(format!("r{i}")).unwrap(),
                        format!("R{i}"),
                        stops
                            .into_iter()
                            .map(|s| Stop::new(StopId::new(format!("s{s}")).unwrap(), format!("S{s}")))
                            .collect(),
                    )
                })
                .collect();
            let graph = TransitGraph::from_routes(&routes);
            let path: Vec<&Stop> = routes[routes.len() - 1].stops().iter().collect();

            let itinerary = build_itinerary(&graph, &path).unwrap();
            prop_assert_eq!(itinerary.entries()[0].stop, path[0]);

            // Boarding entries appear in path order, each on a route serving
            // the edge that leaves its stop
            let mut cursor = 0;
            for e in itinerary.entries() {
                let Some(route) = e.route else { continue };
                let at = (cursor..path.len() - 1).find(|&k| {
                    path[k] == e.stop && graph.routes_between(path[k], path[k + 1]).contains(&route)
                });
                prop_assert!(at.is_some(), "no edge from {} on {}", e.stop.id(), route.id());
                cursor = at.unwrap() + 1;
            }
            prop_assert_eq!(itinerary.destination(), path.last().copied());
        }
    }
}
