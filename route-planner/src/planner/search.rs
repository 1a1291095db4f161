//! Shortest path search over the transit graph.
//!
//! Dijkstra's algorithm over a binary heap, where every edge costs one hop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::{debug, trace};

use crate::domain::{Stop, StopId};
use crate::network::{NodeIndex, TransitGraph};

/// Which end of a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Finish,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Finish => f.write_str("finish"),
        }
    }
}

/// Error from path search or itinerary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// An endpoint is not a node of the graph at all
    #[error("{endpoint} stop {stop} is not in the transit graph")]
    InvalidEndpoint { endpoint: Endpoint, stop: StopId },

    /// The path is empty: the endpoints are not connected
    #[error("no path found")]
    NoPathFound,

    /// Consecutive stops of a path share no edge
    #[error("stops {from} and {to} are not adjacent")]
    NotAdjacent { from: StopId, to: StopId },
}

/// Final distance and predecessor of a settled node.
#[derive(Debug, Clone, Copy)]
struct Settled {
    distance: usize,
    previous: Option<NodeIndex>,
}

/// Priority queue entry.
///
/// Ordered by distance only, with ties broken by insertion sequence so that
/// equal-distance entries pop first-pushed-first. The ordering is reversed
/// to make `BinaryHeap` a min-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    distance: usize,
    seq: u64,
    node: NodeIndex,
    previous: Option<NodeIndex>,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest path (fewest hops) from `start` to `finish`.
///
/// Returns the stops of the path in travel order, including both endpoints.
/// If `start == finish` the path is `[start]`. If `finish` is unreachable the
/// path is empty; callers must treat that as "no route".
///
/// When several shortest paths exist, which one is returned is stable for a
/// given graph but otherwise unspecified.
///
/// # Errors
///
/// [`SearchError::InvalidEndpoint`] if either stop is not in the graph.
pub fn find_shortest_path<'a>(
    graph: &TransitGraph<'a>,
    start: &Stop,
    finish: &Stop,
) -> Result<Vec<&'a Stop>, SearchError> {
    let start_idx = graph
        .node_index(start.id())
        .ok_or_else(|| SearchError::InvalidEndpoint {
            endpoint: Endpoint::Start,
            stop: start.id().clone(),
        })?;
    let finish_idx = graph
        .node_index(finish.id())
        .ok_or_else(|| SearchError::InvalidEndpoint {
            endpoint: Endpoint::Finish,
            stop: finish.id().clone(),
        })?;

    let mut records: Vec<Option<Settled>> = vec![None; graph.stop_count()];
    let mut queue = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut settled_count = 0;

    queue.push(QueueEntry {
        distance: 0,
        seq,
        node: start_idx,
        previous: None,
    });

    while let Some(QueueEntry {
        distance,
        node,
        previous,
        ..
    }) = queue.pop()
    {
        // Stale entry from an earlier relaxation
        if records[node].is_some() {
            continue;
        }

        records[node] = Some(Settled { distance, previous });
        settled_count += 1;

        trace!(
            stop = %graph.node(node).id(),
            distance,
            "settled stop"
        );

        if node == finish_idx {
            break;
        }

        for &neighbor in graph.node_neighbors(node) {
            if records[neighbor].is_none() {
                seq += 1;
                queue.push(QueueEntry {
                    distance: distance + 1,
                    seq,
                    node: neighbor,
                    previous: Some(node),
                });
            }
        }
    }

    let path: Vec<&'a Stop> = backtrack(&records, finish_idx)
        .into_iter()
        .map(|idx| graph.node(idx))
        .collect();

    debug!(
        start = %start.id(),
        finish = %finish.id(),
        settled = settled_count,
        hops = path.len().saturating_sub(1),
        found = !path.is_empty(),
        "shortest path search complete"
    );

    Ok(path)
}

/// Follow predecessor links back from `finish`.
///
/// Returns node indices in travel order, or an empty vec if `finish` was
/// never settled.
fn backtrack(records: &[Option<Settled>], finish: NodeIndex) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = finish;

    loop {
        let Some(settled) = records[current] else {
            return Vec::new();
        };
        path.push(current);
        match settled.previous {
            Some(previous) => current = previous,
            None => break,
        }
    }

    path.reverse();
    path
}
