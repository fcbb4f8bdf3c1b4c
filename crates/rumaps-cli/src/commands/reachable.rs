//! Reachable command handler: every intersection connected to a source.

use anyhow::Result;

use rumaps_lib::{reachable_intersections, Coordinate, Intersection, Network};

use crate::commands::resolve;
use crate::output::{render_reachable, OutputFormat};

/// Handle the reachable subcommand.
pub fn handle_reachable(network: &Network, at: Coordinate, format: OutputFormat) -> Result<()> {
    let source = resolve(network, at)?;
    let reachable: Vec<Intersection> = reachable_intersections(network, source)
        .into_iter()
        .filter_map(|id| network.intersection(id).copied())
        .collect();
    print!("{}", render_reachable(&reachable, format)?);
    Ok(())
}
