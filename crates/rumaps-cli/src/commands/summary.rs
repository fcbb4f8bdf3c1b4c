//! Summary command handler: headline counts for the loaded map.

use anyhow::Result;

use rumaps_lib::{Network, NetworkSummary};

use crate::output::{render_network_summary, OutputFormat};

/// Handle the summary subcommand.
pub fn handle_summary(network: &Network, format: OutputFormat) -> Result<()> {
    let summary = NetworkSummary::from_network(network);
    print!("{}", render_network_summary(&summary, format)?);
    Ok(())
}
