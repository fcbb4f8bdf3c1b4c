// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// loads the network once through `MapSource` and dispatches here.

pub mod reachable;
pub mod route;
pub mod stats;
pub mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use rumaps_lib::{
    load_map, ConstantTraffic, Coordinate, GaussianTraffic, IntersectionId, Network, TrafficModel,
};

/// Where the map comes from and how traffic factors are assigned.
#[derive(Debug, Clone)]
pub struct MapSource {
    pub path: PathBuf,
    /// Seed for the Gaussian traffic generator.
    pub seed: Option<u64>,
    /// Use one fixed factor for every block instead of random traffic.
    pub constant_traffic: Option<f64>,
}

impl MapSource {
    fn traffic_model(&self) -> Box<dyn TrafficModel> {
        match (self.constant_traffic, self.seed) {
            (Some(factor), _) => Box::new(ConstantTraffic(factor)),
            (None, Some(seed)) => Box::new(GaussianTraffic::seeded(seed)),
            (None, None) => Box::new(GaussianTraffic::from_entropy()),
        }
    }

    /// Parse the map description and build its network.
    pub fn load(&self) -> Result<Network> {
        let map = load_map(&self.path)
            .with_context(|| format!("failed to load map from {}", self.path.display()))?;
        debug!(
            path = %self.path.display(),
            streets = map.streets.len(),
            "map description loaded"
        );
        let mut traffic = self.traffic_model();
        map.build(traffic.as_mut())
            .with_context(|| format!("failed to build network from {}", self.path.display()))
    }
}

/// Resolve a coordinate to the intersection located there.
pub fn resolve(network: &Network, coordinate: Coordinate) -> Result<IntersectionId> {
    network
        .find_intersection(coordinate)
        .ok_or(rumaps_lib::Error::UnknownIntersection { coordinate })
        .context("coordinate does not name an intersection")
}
