//! Logical pixel coordinates and their `"x,y"` key encoding.

use std::fmt;
use std::str::FromStr;

use crate::error::{RepixError, Result};

/// A logical pixel position in a sparse pixel map.
///
/// Ordering is by `x`, then `y`, which fixes the iteration order of every
/// map keyed by coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    /// Largest component a key may carry, so that `max + 1` still fits.
    pub const MAX_COMPONENT: u32 = u32::MAX - 1;

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Parse a `"x,y"` key. Both parts must be plain decimal digits.
    pub fn parse_key(key: &str) -> Result<Self> {
        let Some((x, y)) = key.split_once(',') else {
            return Err(bad_key(key));
        };

        Ok(Self::new(parse_component(key, x)?, parse_component(key, y)?))
    }

    /// Encode as a `"x,y"` key.
    pub fn to_key(self) -> String {
        self.to_string()
    }
}

impl FromStr for Coordinate {
    type Err = RepixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_key(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

fn parse_component(key: &str, part: &str) -> Result<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_key(key));
    }

    // "01" and "1" would name the same pixel.
    if part.len() > 1 && part.starts_with('0') {
        return Err(RepixError::Parse {
            message: format!("Coordinate '{}' has a leading zero", key),
            help: Some("Write components without leading zeros, e.g. \"7,0\"".to_string()),
        });
    }

    part.parse::<u32>()
        .ok()
        .filter(|&n| n <= Coordinate::MAX_COMPONENT)
        .ok_or_else(|| RepixError::Parse {
            message: format!("Coordinate '{}' is out of range", key),
            help: Some(format!("Components must not exceed {}", Coordinate::MAX_COMPONENT)),
        })
}

fn bad_key(key: &str) -> RepixError {
    RepixError::Parse {
        message: format!("Invalid coordinate key '{}'", key),
        help: Some("Keys are two non-negative integers separated by a comma, e.g. \"3,4\"".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        assert_eq!(Coordinate::parse_key("3,4").unwrap(), Coordinate::new(3, 4));
        assert_eq!(Coordinate::parse_key("0,0").unwrap(), Coordinate::new(0, 0));
        assert_eq!(
            Coordinate::parse_key("4294967294,1").unwrap(),
            Coordinate::new(u32::MAX - 1, 1)
        );
    }

    #[test]
    fn test_parse_key_rejects_bad_shapes() {
        for key in ["", "3", "3,", ",4", "3,4,5", "-1,2", "+1,2", " 1,2", "1, 2", "a,b", "1.5,2"] {
            assert!(
                matches!(Coordinate::parse_key(key), Err(RepixError::Parse { .. })),
                "expected parse error for {:?}",
                key
            );
        }
    }

    #[test]
    fn test_parse_key_overflow() {
        assert!(Coordinate::parse_key("4294967296,0").is_err());
        assert!(Coordinate::parse_key("4294967295,0").is_err());
        assert!(Coordinate::parse_key("0,4294967295").is_err());
    }

    #[test]
    fn test_parse_key_rejects_leading_zeros() {
        for key in ["01,2", "1,02", "007,0", "00,0"] {
            assert!(
                matches!(Coordinate::parse_key(key), Err(RepixError::Parse { .. })),
                "expected parse error for {:?}",
                key
            );
        }
        assert_eq!(Coordinate::parse_key("0,10").unwrap(), Coordinate::new(0, 10));
    }

    #[test]
    fn test_key_round_trip() {
        for key in ["0,0", "12,7", "100,2000"] {
            assert_eq!(Coordinate::parse_key(key).unwrap().to_key(), key);
        }
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let mut coords = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 5),
            Coordinate::new(0, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coordinate::new(0, 1), Coordinate::new(0, 5), Coordinate::new(1, 0)]
        );
    }
}
