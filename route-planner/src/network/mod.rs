//! Transit graph over stops.
//!
//! Every pair of consecutive stops on a route contributes one edge labelled
//! with that route. Several routes may serve the same pair; each keeps its
//! own label (the graph is a multigraph). Edges are undirected for
//! traversal: a route travelling A→B also lets you go B→A.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use crate::domain::{Route, Stop, StopId};

/// Index of a stop node within a [`TransitGraph`].
pub(crate) type NodeIndex = usize;

/// Undirected multigraph of stops, edges labelled by route.
///
/// Stops and routes are borrowed from the caller's route collection; the
/// graph owns only its indices.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph<'a> {
    /// Node storage, in order of first appearance.
    stops: Vec<&'a Stop>,

    /// Stop ID → node index.
    index: HashMap<&'a StopId, NodeIndex>,

    /// Routes in the order they were added.
    routes: Vec<&'a Route>,

    /// Distinct neighbours of each node, in order of first appearance.
    neighbors: Vec<Vec<NodeIndex>>,

    /// Map from (from, to) to the indices (into `routes`) of every edge label.
    /// Stored in both directions for O(1) lookup.
    labels: HashMap<(NodeIndex, NodeIndex), Vec<usize>>,

    /// Number of labelled edges (parallel edges counted separately).
    edge_count: usize,
}

impl<'a> TransitGraph<'a> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a collection of routes.
    ///
    /// An empty collection yields an empty graph.
    ///
    /// # Example
    ///
    /// ```
    /// use route_planner::domain::{Route, RouteId, Stop, StopId};
    /// use route_planner::network::TransitGraph;
    ///
    /// let stop = |id: &str| Stop::new(StopId::new(id).unwrap(), id);
    /// let red = Route::new(RouteId::new("Red").unwrap(), "Red Line", vec![stop("a"), stop("b")]);
    ///
    /// let graph = TransitGraph::from_routes([&red]);
    /// assert_eq!(graph.stop_count(), 2);
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = &'a Route>,
    {
        let mut graph = Self::new();
        for route in routes {
            graph.add_route(route);
        }
        debug!(
            stops = graph.stop_count(),
            edges = graph.edge_count(),
            routes = graph.routes.len(),
            "built transit graph"
        );
        graph
    }

    /// Add every segment of a route as a labelled edge.
    ///
    /// Stops of a route with a single stop are still added as nodes.
    pub fn add_route(&mut self, route: &'a Route) {
        let route_idx = self.routes.len();
        self.routes.push(route);

        for stop in route.stops() {
            self.insert_stop(stop);
        }

        for (from, to) in route.segments() {
            let a = self.insert_stop(from);
            let b = self.insert_stop(to);
            self.add_edge(a, b, route_idx);
        }
    }

    fn insert_stop(&mut self, stop: &'a Stop) -> NodeIndex {
        match self.index.entry(stop.id()) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let idx = self.stops.len();
                self.stops.push(stop);
                self.neighbors.push(Vec::new());
                e.insert(idx);
                idx
            }
        }
    }

    fn add_edge(&mut self, a: NodeIndex, b: NodeIndex, route_idx: usize) {
        self.edge_count += 1;

        let labels = self.labels.entry((a, b)).or_default();
        let first_edge = labels.is_empty();
        labels.push(route_idx);

        if a == b {
            return;
        }

        self.labels.entry((b, a)).or_default().push(route_idx);

        if first_edge {
            self.neighbors[a].push(b);
            self.neighbors[b].push(a);
        }
    }

    /// Check whether a stop is a node of the graph.
    pub fn contains(&self, stop: &Stop) -> bool {
        self.index.contains_key(stop.id())
    }

    /// Look up a node by stop ID.
    pub fn stop(&self, id: &StopId) -> Option<&'a Stop> {
        self.index.get(id).map(|&idx| self.stops[idx])
    }

    /// All stops adjacent to `stop` on any route.
    ///
    /// Empty if the stop is not in the graph.
    pub fn neighbors(&self, stop: &Stop) -> impl Iterator<Item = &'a Stop> + '_ {
        self.index
            .get(stop.id())
            .map(|&idx| self.neighbors[idx].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&n| self.stops[n])
    }

    /// Routes with an edge between `a` and `b`, in either direction.
    ///
    /// Each route appears once, in the order routes were added to the graph.
    /// Empty if the stops are not adjacent.
    pub fn routes_between(&self, a: &Stop, b: &Stop) -> Vec<&'a Route> {
        let (Some(&from), Some(&to)) = (self.index.get(a.id()), self.index.get(b.id())) else {
            return Vec::new();
        };

        let mut route_indices = self.labels.get(&(from, to)).cloned().unwrap_or_default();
        route_indices.sort_unstable();
        route_indices.dedup();
        route_indices.into_iter().map(|r| self.routes[r]).collect()
    }

    /// Number of stop nodes.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of labelled edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub(crate) fn node_index(&self, id: &StopId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn node(&self, idx: NodeIndex) -> &'a Stop {
        self.stops[idx]
    }

    pub(crate) fn node_neighbors(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.neighbors[idx]
    }
}

/// Builder for creating a transit graph.
///
/// Provides a fluent API for adding routes.
#[derive(Debug, Default)]
pub struct TransitGraphBuilder<'a> {
    inner: TransitGraph<'a>,
}

impl<'a> TransitGraphBuilder<'a> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route.
    pub fn route(mut self, route: &'a Route) -> Self {
        self.inner.add_route(route);
        self
    }

    /// Add several routes.
    pub fn routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = &'a Route>,
    {
        for route in routes {
            self.inner.add_route(route);
        }
        self
    }

    /// Build the graph.
    pub fn build(self) -> TransitGraph<'a> {
        self.inner
    }
}
