use std::path::PathBuf;

use thiserror::Error;

use crate::coordinate::Coordinate;

/// Convenient result alias for the RU Maps library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a block has too few shape points to form a street segment.
    #[error("block {block_number} on {street} has {points} shape point(s); at least 2 are required")]
    MalformedBlock {
        street: String,
        block_number: i64,
        points: usize,
    },

    /// Raised when construction needs more intersections than were declared.
    #[error("network was declared with {capacity} intersections but more are required")]
    IntersectionCapacityExceeded { capacity: usize },

    /// Raised when an intersection index does not exist in the network.
    #[error("intersection index {index} is out of range (network has {len})")]
    IntersectionOutOfRange { index: usize, len: usize },

    /// Raised when an edge is inserted into a list it does not originate from.
    #[error("edge from intersection {edge_source} cannot be stored under intersection {slot}")]
    EdgeSourceMismatch { slot: usize, edge_source: usize },

    /// Raised when a traffic model returns an unusable factor.
    #[error("traffic factor {factor} for block {block_number} on {street} is not a finite non-negative number")]
    InvalidTrafficFactor {
        street: String,
        block_number: i64,
        factor: f64,
    },

    /// Raised when no intersection exists at the requested coordinate.
    #[error("no intersection at {coordinate}")]
    UnknownIntersection { coordinate: Coordinate },

    /// Raised when no route could be found between two intersections.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: Coordinate, goal: Coordinate },

    /// Raised when a computed route plan lacks any intersections.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a map description cannot be parsed.
    #[error("map description line {line}: {message}")]
    MapParse { line: usize, message: String },

    /// Raised when a map file could not be read.
    #[error("failed to read map description from {path}")]
    MapRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
