//! Route command handler for computing paths between intersections.

use anyhow::{Context, Result};

use rumaps_lib::{plan_route, Coordinate, Network, RouteAlgorithm, RouteRequest, RouteSummary};

use crate::output::{render_route, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone, Copy)]
pub struct RouteCommandArgs {
    pub from: Coordinate,
    pub to: Coordinate,
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from,
            goal: self.to,
            algorithm: self.algorithm,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    network: &Network,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let plan = plan_route(network, &args.to_request())
        .with_context(|| format!("failed to plan route from {} to {}", args.from, args.to))?;
    let summary = RouteSummary::from_plan(network, &plan)?;
    print!(
        "{}",
        render_route(&summary, format, &ColorPalette::detect())?
    );
    Ok(())
}
