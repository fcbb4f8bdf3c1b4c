#![allow(dead_code)]

use std::path::PathBuf;

use rumaps_lib::{load_network, Coordinate, GaussianTraffic, IntersectionId, Network};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn campus(seed: u64) -> Network {
    let path = fixtures_dir().join("campus.txt");
    load_network(&path, &mut GaussianTraffic::seeded(seed)).expect("campus fixture loads")
}

pub fn id_at(network: &Network, x: i64, y: i64) -> IntersectionId {
    network
        .find_intersection(Coordinate::new(x, y))
        .unwrap_or_else(|| panic!("intersection at ({x}, {y}) present"))
}

/// All-pairs cost matrix by Floyd-Warshall; `weight` maps a block id to an edge cost.
pub fn all_pairs(network: &Network, weight: impl Fn(usize) -> f64) -> Vec<Vec<f64>> {
    let n = network.intersections().len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
        for edge in network.edges(i) {
            let cost = weight(edge.block);
            if cost < row[edge.target] {
                row[edge.target] = cost;
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}
