use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rumaps_cli::commands::reachable::handle_reachable;
use rumaps_cli::commands::route::{handle_route_command, RouteCommandArgs};
use rumaps_cli::commands::stats::handle_stats;
use rumaps_cli::commands::summary::handle_summary;
use rumaps_cli::commands::MapSource;
use rumaps_cli::output::OutputFormat;
use rumaps_lib::{Coordinate, RouteAlgorithm};

#[derive(Parser, Debug)]
#[command(author, version, about = "RU Maps road-network path search")]
struct Cli {
    /// Map description file to load.
    #[arg(long, env = "RUMAPS_MAP")]
    map: PathBuf,

    /// Seed for reproducible random traffic factors.
    #[arg(long, conflicts_with = "constant_traffic")]
    seed: Option<u64>,

    /// Give every block the same traffic factor instead of random ones.
    #[arg(long)]
    constant_traffic: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report intersection, street and block counts for the map.
    Summary,
    /// List every intersection reachable from a starting point.
    Reachable {
        /// Starting intersection as X,Y.
        #[arg(long)]
        at: Coordinate,
    },
    /// Compute a route between two intersections.
    Route {
        /// Starting intersection as X,Y.
        #[arg(long = "from")]
        from: Coordinate,
        /// Destination intersection as X,Y.
        #[arg(long = "to")]
        to: Coordinate,
        /// Search used to pick the route.
        #[arg(long, default_value_t = RouteAlgorithm::LeastTraffic)]
        algorithm: RouteAlgorithm,
    },
    /// Total length and traffic along a sequence of intersections.
    Stats {
        /// Intersections in travel order, each as X,Y.
        #[arg(long, num_args = 1.., required = true)]
        path: Vec<Coordinate>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = MapSource {
        path: cli.map,
        seed: cli.seed,
        constant_traffic: cli.constant_traffic,
    };
    let network = source.load()?;

    match cli.command {
        Command::Summary => handle_summary(&network, cli.format),
        Command::Reachable { at } => handle_reachable(&network, at, cli.format),
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route_command(
            &network,
            &RouteCommandArgs {
                from,
                to,
                algorithm,
            },
            cli.format,
        ),
        Command::Stats { path } => handle_stats(&network, &path, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
