//! Output formatting for command results.
//!
//! Text renderers return `String`s so handlers decide where they go; JSON
//! goes through serde with the library's serialisable summaries.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use rumaps_lib::{Intersection, NetworkSummary, PathInformation, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text with optional ANSI colors.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// Render a route summary.
pub fn render_route(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: &ColorPalette,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_route_text(summary, palette)),
        OutputFormat::Rich => Ok(summary.render(RouteRenderMode::RichText)),
        OutputFormat::Json => to_json(summary),
    }
}

fn render_route_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route from {} to {} ({} hops; algorithm: {}):",
        summary.start.coordinate, summary.goal.coordinate, summary.hops, summary.algorithm
    );

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let (tag_color, tag) = if step.index == 0 {
            (palette.tag_start, "STRT")
        } else if step.index == last {
            (palette.tag_goal, "GOAL")
        } else {
            (palette.tag_via, "VIA ")
        };
        let _ = write!(
            buffer,
            " {tag_color}{tag}{reset} {bold}{}{reset}",
            step.coordinate,
            reset = palette.reset,
            bold = palette.white_bold,
        );
        if let Some(street) = &step.via {
            let number = step
                .block_number
                .map(|number| format!(" #{number}"))
                .unwrap_or_default();
            let _ = write!(
                buffer,
                " {gray}via {street}{number}{reset}",
                gray = palette.gray,
                reset = palette.reset,
            );
        }
        buffer.push('\n');
    }

    buffer.push_str(&render_info_lines(&summary.info, palette));
    buffer
}

fn render_info_lines(info: &PathInformation, palette: &ColorPalette) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "\nTotal length: {}{:.2}{}",
        palette.green, info.total_length, palette.reset
    );
    let _ = writeln!(
        buffer,
        "Total traffic: {}{:.2}{}",
        palette.green, info.total_traffic, palette.reset
    );
    let _ = writeln!(
        buffer,
        "Average traffic factor: {}{:.3}{}",
        palette.green, info.average_traffic_factor, palette.reset
    );
    buffer
}

/// Render statistics for an explicit path.
pub fn render_path_information(
    info: &PathInformation,
    format: OutputFormat,
    palette: &ColorPalette,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(info),
        OutputFormat::Text | OutputFormat::Rich => {
            Ok(render_info_lines(info, palette).trim_start().to_string())
        }
    }
}

#[derive(Debug, Serialize)]
struct ReachableReport<'a> {
    source: &'a Intersection,
    count: usize,
    intersections: &'a [Intersection],
}

/// Render the result of a reachability query; `reachable[0]` is the source.
pub fn render_reachable(
    reachable: &[Intersection],
    format: OutputFormat,
) -> anyhow::Result<String> {
    let Some(source) = reachable.first() else {
        return Ok(String::new());
    };

    match format {
        OutputFormat::Json => to_json(&ReachableReport {
            source,
            count: reachable.len(),
            intersections: reachable,
        }),
        OutputFormat::Text | OutputFormat::Rich => {
            let mut buffer = String::new();
            let _ = writeln!(
                buffer,
                "{} intersections reachable from {}:",
                reachable.len(),
                source.coordinate
            );
            for intersection in reachable {
                let _ = writeln!(buffer, " - {}", intersection.coordinate);
            }
            Ok(buffer)
        }
    }
}

/// Render headline counts for the loaded network.
pub fn render_network_summary(
    summary: &NetworkSummary,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(summary),
        OutputFormat::Text | OutputFormat::Rich => Ok(summary.render()),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
