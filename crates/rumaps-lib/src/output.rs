use std::collections::BTreeSet;
use std::fmt::Write;

use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::network::{IntersectionId, Network};
use crate::path::{connecting_edge, PathInformation};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: IntersectionId,
    pub coordinate: Coordinate,
}

/// Intersection reached during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: IntersectionId,
    pub coordinate: Coordinate,
    /// Street of the block used to arrive here; `None` for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<i64>,
}

impl RouteStep {
    fn via_label(&self) -> String {
        match (&self.via, self.block_number) {
            (Some(street), Some(number)) => format!("{street} #{number}"),
            (Some(street), None) => street.clone(),
            _ => "start".to_string(),
        }
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
    #[serde(flatten)]
    pub info: PathInformation,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved coordinates and streets.
    pub fn from_plan(network: &Network, plan: &RoutePlan) -> Result<Self> {
        let (Some(&first), Some(&last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<IntersectionId> = None;
        for (index, &id) in plan.steps.iter().enumerate() {
            let coordinate = endpoint(network, id)?.coordinate;
            let block = previous
                .and_then(|from| connecting_edge(network, from, id))
                .and_then(|edge| network.block(edge.block));
            steps.push(RouteStep {
                index,
                id,
                coordinate,
                via: block.map(|block| block.street_name.clone()),
                block_number: block.map(|block| block.block_number),
            });
            previous = Some(id);
        }

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            start: endpoint(network, first)?,
            goal: endpoint(network, last)?,
            steps,
            info: plan.info,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, algorithm: {})",
            self.start.coordinate, self.goal.coordinate, self.hops, self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{:>3}: {} via {}",
                step.index,
                step.coordinate,
                step.via_label()
            );
        }
        let _ = writeln!(
            buffer,
            "length: {:.2}, traffic: {:.2}, average traffic factor: {:.3}",
            self.info.total_length, self.info.total_traffic, self.info.average_traffic_factor
        );
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} hops, algorithm: `{}`)",
            self.start.coordinate, self.goal.coordinate, self.hops, self.algorithm
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** via _{}_",
                step.index,
                step.coordinate,
                step.via_label()
            );
        }
        let _ = writeln!(
            buffer,
            "\nLength `{:.2}` · traffic `{:.2}` · factor `{:.3}`",
            self.info.total_length, self.info.total_traffic, self.info.average_traffic_factor
        );
        buffer
    }
}

fn endpoint(network: &Network, id: IntersectionId) -> Result<RouteEndpoint> {
    let intersection = network
        .intersection(id)
        .ok_or(Error::IntersectionOutOfRange {
            index: id,
            len: network.intersections().len(),
        })?;
    Ok(RouteEndpoint {
        id,
        coordinate: intersection.coordinate,
    })
}

/// Headline counts for a built network.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetworkSummary {
    pub intersections: usize,
    pub streets: usize,
    pub blocks: usize,
    pub edges: usize,
    pub total_length: f64,
    pub total_traffic: f64,
}

impl NetworkSummary {
    pub fn from_network(network: &Network) -> Self {
        let streets: BTreeSet<&str> = network
            .blocks()
            .iter()
            .map(|block| block.street_name.as_str())
            .collect();
        Self {
            intersections: network.intersections().len(),
            streets: streets.len(),
            blocks: network.blocks().len(),
            edges: network.edge_count(),
            total_length: network.blocks().iter().map(|block| block.length()).sum(),
            total_traffic: network.blocks().iter().map(|block| block.traffic()).sum(),
        }
    }

    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "intersections: {}", self.intersections);
        let _ = writeln!(buffer, "streets: {}", self.streets);
        let _ = writeln!(buffer, "blocks: {}", self.blocks);
        let _ = writeln!(buffer, "directed edges: {}", self.edges);
        let _ = writeln!(buffer, "total length: {:.2}", self.total_length);
        let _ = writeln!(buffer, "total traffic: {:.2}", self.total_traffic);
        buffer
    }
}
