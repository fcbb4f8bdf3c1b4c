//! Path engine: reachability, fewest-intersection and least-traffic searches
//! over a built [`Network`], plus statistics for a resulting path.
//!
//! Every query keeps its own visited/cost/predecessor state and only reads
//! the network, so one network can serve concurrent queries. Unknown
//! intersections and unreachable goals yield an empty path rather than an
//! error.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::block::{Block, Edge};
use crate::network::{IntersectionId, Network};

/// Aggregated statistics for a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PathInformation {
    pub total_length: f64,
    /// `total_traffic / total_length`, or `0` for an empty path.
    pub average_traffic_factor: f64,
    pub total_traffic: f64,
}

/// Every intersection reachable from `source`, in depth-first preorder.
///
/// `source` comes first and each reachable intersection appears once.
/// Neighbours are explored in edge-list order, matching a recursive DFS.
pub fn reachable_intersections(network: &Network, source: IntersectionId) -> Vec<IntersectionId> {
    if !network.contains(source) {
        return Vec::new();
    }

    let mut visited = vec![false; network.intersections().len()];
    let mut order = Vec::new();
    let mut stack = vec![source];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        order.push(current);

        // Reverse so the first edge in the list is explored first.
        for edge in network.edges(current).iter().rev() {
            if !visited[edge.target] {
                stack.push(edge.target);
            }
        }
    }

    debug!(source, reachable = order.len(), "reachability search finished");
    order
}

/// Path from `start` to `end` passing through the fewest intersections.
///
/// Returns `[start]` when both ends coincide and an empty path when `end`
/// cannot be reached.
pub fn minimize_intersections(
    network: &Network,
    start: IntersectionId,
    end: IntersectionId,
) -> Vec<IntersectionId> {
    if !network.contains(start) || !network.contains(end) {
        return Vec::new();
    }

    let count = network.intersections().len();
    let mut visited = vec![false; count];
    let mut parents: Vec<Option<IntersectionId>> = vec![None; count];
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            break;
        }
        for edge in network.edges(current) {
            let next = edge.target;
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parents[next] = Some(current);
            queue.push_back(next);
        }
    }

    if !visited[end] {
        debug!(start, end, "no fewest-intersection path");
        return Vec::new();
    }
    reconstruct_path(&parents, start, end)
}

/// Path from `start` to `end` with the least accumulated block traffic.
///
/// Dijkstra's algorithm with traffic as the edge weight; the search stops as
/// soon as `end` is settled. Equal-cost frontier entries are settled in
/// ascending intersection id order.
pub fn fastest_path(
    network: &Network,
    start: IntersectionId,
    end: IntersectionId,
) -> Vec<IntersectionId> {
    if !network.contains(start) || !network.contains(end) {
        return Vec::new();
    }
    if start == end {
        return vec![start];
    }

    let count = network.intersections().len();
    let mut costs = vec![f64::INFINITY; count];
    let mut parents: Vec<Option<IntersectionId>> = vec![None; count];
    let mut settled = vec![false; count];
    let mut frontier = BinaryHeap::new();

    costs[start] = 0.0;
    frontier.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = frontier.pop() {
        let current = entry.node;
        if settled[current] {
            continue;
        }
        settled[current] = true;

        if current == end {
            return reconstruct_path(&parents, start, end);
        }

        let current_cost = costs[current];
        for edge in network.edges(current) {
            let next = edge.target;
            if settled[next] {
                continue;
            }
            let Some(block) = network.block(edge.block) else {
                continue;
            };

            let next_cost = current_cost + block.traffic();
            if next_cost < costs[next] {
                costs[next] = next_cost;
                parents[next] = Some(current);
                frontier.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(start, end, "no least-traffic path");
    Vec::new()
}

/// Total length, total traffic and average traffic factor along `path`.
///
/// Consecutive intersections without a connecting block contribute nothing;
/// callers should pass paths produced by this module's searches.
pub fn path_information(network: &Network, path: &[IntersectionId]) -> PathInformation {
    let mut total_length = 0.0;
    let mut total_traffic = 0.0;

    for pair in path.windows(2) {
        let Some(block) = connecting_edge(network, pair[0], pair[1])
            .and_then(|edge| network.block(edge.block))
        else {
            continue;
        };
        total_length += block.length();
        total_traffic += block.traffic();
    }

    let average_traffic_factor = if total_length > 0.0 {
        total_traffic / total_length
    } else {
        0.0
    };

    PathInformation {
        total_length,
        average_traffic_factor,
        total_traffic,
    }
}

/// Lowest-traffic edge in `from`'s list that joins `from` and `to`.
///
/// Several blocks may join the same two intersections; the cheapest one is
/// the block [`fastest_path`] relaxes over. Ties keep edge-list order.
pub fn connecting_edge(network: &Network, from: IntersectionId, to: IntersectionId) -> Option<&Edge> {
    let traffic = |edge: &Edge| network.block(edge.block).map_or(f64::INFINITY, Block::traffic);

    network
        .edges(from)
        .iter()
        .filter(|edge| edge.connects(from, to))
        .min_by(|a, b| traffic(a).total_cmp(&traffic(b)))
}

fn reconstruct_path(
    parents: &[Option<IntersectionId>],
    start: IntersectionId,
    goal: IntersectionId,
) -> Vec<IntersectionId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: IntersectionId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: IntersectionId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
