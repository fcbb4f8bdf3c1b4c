use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::info;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::network::{IntersectionId, Network};
use crate::path::{fastest_path, minimize_intersections, path_information, PathInformation};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search: fewest intersections.
    FewestIntersections,
    /// Dijkstra's algorithm weighted by block traffic.
    #[default]
    LeastTraffic,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::FewestIntersections => "fewest-intersections",
            RouteAlgorithm::LeastTraffic => "least-traffic",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "fewest-intersections" | "bfs" => Ok(RouteAlgorithm::FewestIntersections),
            "least-traffic" | "dijkstra" => Ok(RouteAlgorithm::LeastTraffic),
            other => Err(format!("unknown route algorithm '{other}'")),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub start: Coordinate,
    pub goal: Coordinate,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for fewest-intersection routes.
    pub fn fewest_intersections(start: Coordinate, goal: Coordinate) -> Self {
        Self {
            start,
            goal,
            algorithm: RouteAlgorithm::FewestIntersections,
        }
    }

    /// Convenience constructor for least-traffic routes.
    pub fn least_traffic(start: Coordinate, goal: Coordinate) -> Self {
        Self {
            start,
            goal,
            algorithm: RouteAlgorithm::LeastTraffic,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: IntersectionId,
    pub goal: IntersectionId,
    pub steps: Vec<IntersectionId>,
    pub info: PathInformation,
}

impl RoutePlan {
    /// Number of blocks travelled in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Resolve a coordinate to an intersection, returning an error for unknown positions.
fn resolve_intersection(network: &Network, coordinate: Coordinate) -> Result<IntersectionId> {
    network
        .find_intersection(coordinate)
        .ok_or(Error::UnknownIntersection { coordinate })
}

/// Compute a route using the requested algorithm.
pub fn plan_route(network: &Network, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_intersection(network, request.start)?;
    let goal = resolve_intersection(network, request.goal)?;

    let steps = match request.algorithm {
        RouteAlgorithm::FewestIntersections => minimize_intersections(network, start, goal),
        RouteAlgorithm::LeastTraffic => fastest_path(network, start, goal),
    };
    if steps.is_empty() {
        return Err(Error::RouteNotFound {
            start: request.start,
            goal: request.goal,
        });
    }

    let info = path_information(network, &steps);
    info!(
        algorithm = %request.algorithm,
        hops = steps.len() - 1,
        total_traffic = info.total_traffic,
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start,
        goal,
        steps,
        info,
    })
}
