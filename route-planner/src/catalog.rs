//! Queries over the loaded route collection.
//!
//! Route listing, longest/shortest selection, and the avoid-route filter
//! applied before a graph is built.

use serde::{Serialize, Serializer};

use crate::domain::Route;

/// Errors from route catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No route has this name
    #[error("no such route name: \"{0}\"")]
    UnknownRoute(String),
}

/// A route and its number of stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteSummary<'a> {
    #[serde(serialize_with = "serialize_route_name")]
    pub route: &'a Route,
    pub stop_count: usize,
}

impl<'a> RouteSummary<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self {
            route,
            stop_count: route.num_stops(),
        }
    }
}

fn serialize_route_name<S: Serializer>(route: &&Route, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(route.name())
}

/// Names of all routes, sorted.
pub fn route_names<'a, I>(routes: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Route>,
{
    let mut names: Vec<&'a str> = routes.into_iter().map(Route::name).collect();
    names.sort_unstable();
    names
}

/// The route with the most stops.
///
/// Among equally long routes the last one wins. `None` if there are no
/// routes.
pub fn longest_route<'a, I>(routes: I) -> Option<RouteSummary<'a>>
where
    I: IntoIterator<Item = &'a Route>,
{
    routes
        .into_iter()
        .max_by_key(|r| r.num_stops())
        .map(RouteSummary::new)
}

/// The route with the fewest stops.
///
/// Among equally short routes the first one wins. `None` if there are no
/// routes.
pub fn shortest_route<'a, I>(routes: I) -> Option<RouteSummary<'a>>
where
    I: IntoIterator<Item = &'a Route>,
{
    routes
        .into_iter()
        .min_by_key(|r| r.num_stops())
        .map(RouteSummary::new)
}

/// Drop every route called `name`, ignoring case.
///
/// An empty `name` keeps all routes.
///
/// # Errors
///
/// [`CatalogError::UnknownRoute`] if no route has that name.
pub fn without_route<'a, I>(routes: I, name: &str) -> Result<Vec<&'a Route>, CatalogError>
where
    I: IntoIterator<Item = &'a Route>,
{
    let routes: Vec<&'a Route> = routes.into_iter().collect();
    if name.is_empty() {
        return Ok(routes);
    }

    let avoid = name.to_lowercase();
    let before = routes.len();
    let kept: Vec<&'a Route> = routes
        .into_iter()
        .filter(|r| r.name().to_lowercase() != avoid)
        .collect();

    if kept.len() == before {
        return Err(CatalogError::UnknownRoute(name.to_string()));
    }
    Ok(kept)
}
