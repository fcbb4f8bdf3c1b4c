use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use crate::block::{Block, BlockId, Edge};
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};

/// Index of an intersection inside a [`Network`].
pub type IntersectionId = usize;

/// Graph vertex: a deduplicated coordinate where blocks meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Intersection {
    pub id: IntersectionId,
    pub coordinate: Coordinate,
}

/// Road network: intersection arena, block records and per-intersection
/// edge lists.
///
/// `adjacency[i]` holds the edges leaving `intersections[i]` in insertion
/// order; every edge in it has `source == i`.
#[derive(Debug, Clone, Default)]
pub struct Network {
    intersections: Vec<Intersection>,
    index: HashMap<Coordinate, IntersectionId>,
    adjacency: Vec<Vec<Edge>>,
    blocks: Vec<Block>,
    capacity: Option<usize>,
}

impl Network {
    /// Create an unbounded network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network that refuses to grow past `capacity` intersections.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intersections: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            blocks: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Declared vertex count, if the network was sized up front.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Lookup the intersection at `coordinate`.
    pub fn find_intersection(&self, coordinate: Coordinate) -> Option<IntersectionId> {
        self.index.get(&coordinate).copied()
    }

    /// Return the intersection at `coordinate`, creating it when absent.
    pub fn add_intersection(&mut self, coordinate: Coordinate) -> Result<IntersectionId> {
        if let Some(id) = self.find_intersection(coordinate) {
            return Ok(id);
        }

        if let Some(capacity) = self.capacity {
            if self.intersections.len() >= capacity {
                warn!(capacity, %coordinate, "intersection capacity exceeded");
                return Err(Error::IntersectionCapacityExceeded { capacity });
            }
        }

        let id = self.intersections.len();
        self.intersections.push(Intersection { id, coordinate });
        self.index.insert(coordinate, id);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Register a block record and return its identifier.
    pub fn add_block(&mut self, block: Block) -> BlockId {
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    /// Append `edge` to the tail of the edge list of intersection `index`.
    pub fn add_edge(&mut self, index: IntersectionId, edge: Edge) -> Result<()> {
        let len = self.intersections.len();
        if index >= len || edge.target >= len {
            return Err(Error::IntersectionOutOfRange {
                index: index.max(edge.target),
                len,
            });
        }
        if edge.source != index {
            return Err(Error::EdgeSourceMismatch {
                slot: index,
                edge_source: edge.source,
            });
        }
        self.adjacency[index].push(edge);
        Ok(())
    }

    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections.get(id)
    }

    pub fn contains(&self, id: IntersectionId) -> bool {
        id < self.intersections.len()
    }

    /// Edges leaving `id`; unknown intersections have no outgoing edges.
    pub fn edges(&self, id: IntersectionId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Full adjacency table, indexed by intersection id.
    pub fn adjacency(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    /// Number of directed edges across all edge lists.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersections_are_canonical_per_coordinate() {
        let mut network = Network::new();
        let a = network.add_intersection(Coordinate::new(1, 2)).unwrap();
        let b = network.add_intersection(Coordinate::new(5, 2)).unwrap();
        let again = network.add_intersection(Coordinate::new(1, 2)).unwrap();

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(network.intersections().len(), 2);
        assert_eq!(network.find_intersection(Coordinate::new(5, 2)), Some(b));
        assert_eq!(network.find_intersection(Coordinate::new(9, 9)), None);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut network = Network::with_capacity(1);
        network.add_intersection(Coordinate::new(0, 0)).unwrap();
        network.add_intersection(Coordinate::new(0, 0)).unwrap();
        let error = network
            .add_intersection(Coordinate::new(1, 0))
            .expect_err("second distinct intersection exceeds capacity");
        assert!(matches!(
            error,
            Error::IntersectionCapacityExceeded { capacity: 1 }
        ));
    }

    #[test]
    fn edges_append_at_tail() {
        let mut network = Network::new();
        let a = network.add_intersection(Coordinate::new(0, 0)).unwrap();
        let b = network.add_intersection(Coordinate::new(1, 0)).unwrap();
        let c = network.add_intersection(Coordinate::new(2, 0)).unwrap();
        for (target, block) in [(b, 0), (c, 1)] {
            network
                .add_edge(
                    a,
                    Edge {
                        source: a,
                        target,
                        block,
                        reversed: false,
                    },
                )
                .unwrap();
        }

        let targets: Vec<_> = network.edges(a).iter().map(|edge| edge.target).collect();
        assert_eq!(targets, vec![b, c]);
        assert_eq!(network.edge_count(), 2);
        assert!(network.edges(42).is_empty());
    }

    #[test]
    fn edge_must_originate_at_its_slot() {
        let mut network = Network::new();
        let a = network.add_intersection(Coordinate::new(0, 0)).unwrap();
        let b = network.add_intersection(Coordinate::new(1, 0)).unwrap();
        let edge = Edge {
            source: b,
            target: a,
            block: 0,
            reversed: true,
        };
        assert!(matches!(
            network.add_edge(a, edge),
            Err(Error::EdgeSourceMismatch { .. })
        ));
        assert!(matches!(
            network.add_edge(7, edge),
            Err(Error::IntersectionOutOfRange { .. })
        ));
    }
}
