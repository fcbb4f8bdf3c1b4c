//! Loader for the plain-text map description.
//!
//! The file starts with the intersection and street counts. Each street is a
//! name on its own line followed by its block count; each block is a block
//! number, a point count, a road width and then that many `x y` pairs.
//! Numbers are whitespace separated and may span lines freely.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::builder::{MapBuilder, RawBlock};
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::network::Network;
use crate::traffic::TrafficModel;

/// A street and its blocks, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Street {
    pub name: String,
    pub blocks: Vec<RawBlock>,
}

/// Parsed contents of a map description file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDescription {
    /// Number of distinct intersections the file declares.
    pub intersection_count: usize,
    pub streets: Vec<Street>,
}

impl MapDescription {
    /// All blocks of all streets, in file order.
    pub fn raw_blocks(&self) -> impl Iterator<Item = &RawBlock> {
        self.streets.iter().flat_map(|street| street.blocks.iter())
    }

    pub fn into_raw_blocks(self) -> impl Iterator<Item = RawBlock> {
        self.streets.into_iter().flat_map(|street| street.blocks)
    }

    /// Build a network sized to the declared intersection count.
    pub fn build<T>(self, traffic: &mut T) -> Result<Network>
    where
        T: TrafficModel + ?Sized,
    {
        MapBuilder::new()
            .with_capacity(self.intersection_count)
            .build(self.into_raw_blocks(), traffic)
    }
}

/// Read and parse the map description at `path`.
pub fn load_map(path: &Path) -> Result<MapDescription> {
    debug!(path = %path.display(), "loading map description");
    let text = fs::read_to_string(path).map_err(|source| Error::MapRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(&text)
}

/// Load the map at `path` and build its network.
pub fn load_network<T>(path: &Path, traffic: &mut T) -> Result<Network>
where
    T: TrafficModel + ?Sized,
{
    load_map(path)?.build(traffic)
}

/// Parse a map description held in memory.
pub fn parse_map(text: &str) -> Result<MapDescription> {
    let mut cursor = Cursor::new(text);

    let intersection_count: usize = cursor.number("intersection count")?;
    let street_count: usize = cursor.number("street count")?;

    let mut streets = Vec::with_capacity(street_count);
    for _ in 0..street_count {
        let name = cursor.line("street name")?;
        let block_count: usize = cursor.number("block count")?;

        let mut blocks = Vec::with_capacity(block_count);
        for _ in 0..block_count {
            let block_number: i64 = cursor.number("block number")?;
            let point_count: usize = cursor.number("point count")?;
            let road_size: f64 = cursor.number("road size")?;

            let mut points = Vec::with_capacity(point_count);
            for _ in 0..point_count {
                let x: i64 = cursor.number("x coordinate")?;
                let y: i64 = cursor.number("y coordinate")?;
                points.push(Coordinate::new(x, y));
            }

            blocks.push(RawBlock {
                street_name: name.clone(),
                block_number,
                road_size,
                points,
            });
        }

        streets.push(Street { name, blocks });
    }

    debug!(
        intersection_count,
        streets = streets.len(),
        "parsed map description"
    );
    Ok(MapDescription {
        intersection_count,
        streets,
    })
}

/// Token reader that also hands out whole lines for street names.
struct Cursor<'a> {
    lines: Vec<&'a str>,
    row: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            row: 0,
            col: 0,
        }
    }

    fn line_number(&self) -> usize {
        (self.row + 1).min(self.lines.len().max(1))
    }

    fn error(&self, message: String) -> Error {
        Error::MapParse {
            line: self.line_number(),
            message,
        }
    }

    fn token(&mut self) -> Option<&'a str> {
        while self.row < self.lines.len() {
            let rest = &self.lines[self.row][self.col..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                self.row += 1;
                self.col = 0;
                continue;
            }
            let start = self.col + (rest.len() - trimmed.len());
            let len = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            self.col = start + len;
            return Some(&self.lines[self.row][start..start + len]);
        }
        None
    }

    fn number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let Some(token) = self.token() else {
            return Err(self.error(format!("expected {what} but reached end of file")));
        };
        token
            .parse()
            .map_err(|_| self.error(format!("invalid {what} '{token}'")))
    }

    /// Rest of the current line, or the next non-blank line when the rest is
    /// empty.
    fn line(&mut self, what: &str) -> Result<String> {
        if self.row < self.lines.len() {
            let rest = self.lines[self.row][self.col..].trim();
            self.row += 1;
            self.col = 0;
            if !rest.is_empty() {
                return Ok(rest.to_string());
            }
        }
        while self.row < self.lines.len() {
            let candidate = self.lines[self.row].trim();
            self.row += 1;
            if !candidate.is_empty() {
                return Ok(candidate.to_string());
            }
        }
        Err(self.error(format!("expected {what} but reached end of file")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 2\n\
College Ave\n\
1\n\
1 3 2.5\n\
0 0\n\
3 4\n\
3 10\n\
\n\
Hamilton St\n\
1\n\
7 2 1.0\n\
3 10 9 10\n";

    #[test]
    fn parses_streets_and_blocks() {
        let map = parse_map(SAMPLE).unwrap();
        assert_eq!(map.intersection_count, 3);
        assert_eq!(map.streets.len(), 2);
        assert_eq!(map.streets[0].name, "College Ave");
        assert_eq!(map.streets[1].name, "Hamilton St");

        let blocks: Vec<_> = map.raw_blocks().collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].points.len(), 3);
        assert_eq!(blocks[0].road_size, 2.5);
        assert_eq!(blocks[1].block_number, 7);
        assert_eq!(blocks[1].street_name, "Hamilton St");
        assert_eq!(blocks[1].points[1], Coordinate::new(9, 10));
    }

    #[test]
    fn builds_network_with_declared_capacity() {
        let network = parse_map(SAMPLE)
            .unwrap()
            .build(&mut crate::traffic::ConstantTraffic(1.0))
            .unwrap();
        assert_eq!(network.capacity(), Some(3));
        assert_eq!(network.intersections().len(), 3);
    }

    #[test]
    fn builds_blocks_at_extreme_coordinates() {
        let text = "2 1\nEdge Rd\n1\n1 2 1.0\n-9223372036854775808 0\n9223372036854775807 0\n";
        let network = parse_map(text)
            .unwrap()
            .build(&mut crate::traffic::ConstantTraffic(1.0))
            .unwrap();
        let length = network.blocks()[0].length();
        assert!(length.is_finite());
        assert!((length - 2f64.powi(64)).abs() < 1e4);
    }

    #[test]
    fn reports_line_of_bad_token() {
        let error = parse_map("2 1\nMain\n1\n1 2 x\n").unwrap_err();
        match error {
            Error::MapParse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("road size"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_truncated_file() {
        let error = parse_map("2 1\nMain\n1\n1 2 1.0\n0 0\n").unwrap_err();
        assert!(matches!(error, Error::MapParse { .. }));
        assert!(error.to_string().contains("x coordinate"));
    }
}
