use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Integer map position as it appears in the map description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Calculate the Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `X,Y` (whitespace around either value is ignored).
impl FromStr for Coordinate {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let (x, y) = value
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y but found '{value}'"))?;
        let x = x
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("invalid x value '{}': {err}", x.trim()))?;
        let y = y
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("invalid y value '{}': {err}", y.trim()))?;
        Ok(Self { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(3, 4);
        assert!((a.distance_to(&b) - 5.0).abs() < f64::EPSILON);
        assert!((b.distance_to(&a) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_spans_full_integer_range() {
        let west = Coordinate::new(i64::MIN, 0);
        let east = Coordinate::new(i64::MAX, 0);
        let distance = west.distance_to(&east);
        assert!(distance.is_finite());
        assert!((distance - 2f64.powi(64)).abs() < 1e4);
        assert_eq!(east.distance_to(&west), distance);
    }

    #[test]
    fn parses_comma_separated_pairs() {
        assert_eq!("12, -4".parse::<Coordinate>(), Ok(Coordinate::new(12, -4)));
        assert!("12".parse::<Coordinate>().is_err());
        assert!("a,b".parse::<Coordinate>().is_err());
    }
}
