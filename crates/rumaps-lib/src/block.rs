use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::network::IntersectionId;

/// Index of a [`Block`] record inside a [`crate::Network`].
pub type BlockId = usize;

/// Physical street segment shared by both directed edges that traverse it.
///
/// The derived metrics start at zero and are filled in once by the map
/// builder after every block has been placed in the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub street_name: String,
    pub block_number: i64,
    pub road_size: f64,
    points: Vec<Coordinate>,
    length: f64,
    traffic_factor: f64,
    traffic: f64,
}

impl Block {
    pub(crate) fn new(
        street_name: String,
        block_number: i64,
        road_size: f64,
        points: Vec<Coordinate>,
    ) -> Self {
        Self {
            street_name,
            block_number,
            road_size,
            points,
            length: 0.0,
            traffic_factor: 0.0,
            traffic: 0.0,
        }
    }

    /// Shape points in the order they were described.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Blocks placed by the builder always carry at least two points.
    pub fn first_point(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn last_point(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Shape points oriented in the direction of travel of `edge`.
    pub fn shape_from(&self, edge: &Edge) -> Vec<Coordinate> {
        if edge.reversed {
            self.points.iter().rev().copied().collect()
        } else {
            self.points.clone()
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn traffic_factor(&self) -> f64 {
        self.traffic_factor
    }

    /// Accumulated cost of travelling the block: `length * traffic_factor`.
    pub fn traffic(&self) -> f64 {
        self.traffic
    }

    pub(crate) fn set_metrics(&mut self, length: f64, traffic_factor: f64) {
        self.length = length;
        self.traffic_factor = traffic_factor;
        self.traffic = length * traffic_factor;
    }
}

/// Directed view over a [`Block`] stored in an intersection's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: IntersectionId,
    pub target: IntersectionId,
    pub block: BlockId,
    /// `true` when the edge walks the block's shape points back to front.
    pub reversed: bool,
}

impl Edge {
    /// Whether the edge joins `a` and `b` in either direction.
    pub fn connects(&self, a: IntersectionId, b: IntersectionId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Sum of the Euclidean distances between consecutive shape points.
pub fn block_length(points: &[Coordinate]) -> f64 {
    points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}
