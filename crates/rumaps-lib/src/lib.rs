//! RU Maps library entry points.
//!
//! This crate turns a parsed map description into a road network of
//! intersections and street blocks, and runs the path queries over it:
//! reachability, fewest-intersection routes, least-traffic routes and
//! per-path statistics. Higher-level consumers (the CLI) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod block;
pub mod builder;
pub mod coordinate;
pub mod error;
pub mod map_file;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod traffic;

pub use block::{block_length, Block, BlockId, Edge};
pub use builder::{build_network, MapBuilder, RawBlock};
pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use map_file::{load_map, load_network, parse_map, MapDescription, Street};
pub use network::{Intersection, IntersectionId, Network};
pub use output::{NetworkSummary, RouteRenderMode, RouteSummary};
pub use path::{
    connecting_edge, fastest_path, minimize_intersections, path_information,
    reachable_intersections, PathInformation,
};
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RouteRequest};
pub use traffic::{ConstantTraffic, GaussianTraffic, TrafficModel};
