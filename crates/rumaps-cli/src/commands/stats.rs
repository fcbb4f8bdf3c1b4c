//! Stats command handler: totals for an explicit list of intersections.

use anyhow::Result;
use tracing::warn;

use rumaps_lib::{connecting_edge, path_information, Coordinate, Network};

use crate::commands::resolve;
use crate::output::{render_path_information, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the stats subcommand.
pub fn handle_stats(network: &Network, path: &[Coordinate], format: OutputFormat) -> Result<()> {
    let ids = path
        .iter()
        .map(|&coordinate| resolve(network, coordinate))
        .collect::<Result<Vec<_>>>()?;

    for pair in ids.windows(2) {
        if connecting_edge(network, pair[0], pair[1]).is_none() {
            warn!(from = pair[0], to = pair[1], "no block joins consecutive intersections");
        }
    }

    let info = path_information(network, &ids);
    print!(
        "{}",
        render_path_information(&info, format, &ColorPalette::detect())?
    );
    Ok(())
}
