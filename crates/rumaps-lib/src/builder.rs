use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::block::{block_length, Block, Edge};
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::network::Network;
use crate::traffic::TrafficModel;

/// Parsed block descriptor, before it is linked into a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub street_name: String,
    pub block_number: i64,
    pub road_size: f64,
    pub points: Vec<Coordinate>,
}

impl RawBlock {
    pub fn new(
        street_name: impl Into<String>,
        block_number: i64,
        road_size: f64,
        points: Vec<Coordinate>,
    ) -> Self {
        Self {
            street_name: street_name.into(),
            block_number,
            road_size,
            points,
        }
    }
}

/// Options controlling network construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapBuilder {
    capacity: Option<usize>,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the number of intersections the map contains; construction
    /// fails if the blocks describe more.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Link `raw_blocks` into a network and compute every block's metrics.
    pub fn build<I, T>(&self, raw_blocks: I, traffic: &mut T) -> Result<Network>
    where
        I: IntoIterator<Item = RawBlock>,
        T: TrafficModel + ?Sized,
    {
        let mut network = match self.capacity {
            Some(capacity) => Network::with_capacity(capacity),
            None => Network::new(),
        };

        for raw in raw_blocks {
            place_block(&mut network, raw)?;
        }

        for block in network.blocks_mut() {
            let length = block_length(block.points());
            let factor = traffic.traffic_factor(block);
            if !factor.is_finite() || factor < 0.0 {
                return Err(Error::InvalidTrafficFactor {
                    street: block.street_name.clone(),
                    block_number: block.block_number,
                    factor,
                });
            }
            block.set_metrics(length, factor);
        }

        info!(
            intersections = network.intersections().len(),
            blocks = network.blocks().len(),
            edges = network.edge_count(),
            "built road network"
        );
        Ok(network)
    }
}

/// Build an unbounded network from `raw_blocks` using `traffic` for factors.
pub fn build_network<I, T>(raw_blocks: I, traffic: &mut T) -> Result<Network>
where
    I: IntoIterator<Item = RawBlock>,
    T: TrafficModel + ?Sized,
{
    MapBuilder::new().build(raw_blocks, traffic)
}

fn place_block(network: &mut Network, raw: RawBlock) -> Result<()> {
    if raw.points.len() < 2 {
        return Err(Error::MalformedBlock {
            street: raw.street_name,
            block_number: raw.block_number,
            points: raw.points.len(),
        });
    }

    let start = network.add_intersection(raw.points[0])?;
    let end = network.add_intersection(raw.points[raw.points.len() - 1])?;
    debug!(
        street = %raw.street_name,
        block = raw.block_number,
        start,
        end,
        "placing block"
    );

    let block = network.add_block(Block::new(
        raw.street_name,
        raw.block_number,
        raw.road_size,
        raw.points,
    ));

    network.add_edge(
        start,
        Edge {
            source: start,
            target: end,
            block,
            reversed: false,
        },
    )?;
    network.add_edge(
        end,
        Edge {
            source: end,
            target: start,
            block,
            reversed: true,
        },
    )?;
    Ok(())
}
