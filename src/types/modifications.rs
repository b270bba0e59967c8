//! Caller-owned pixel overrides.

use std::collections::BTreeMap;

use super::{Colour, Coordinate};

/// A set of colour overrides applied on top of a base pixel map.
///
/// Lives across render calls; the pipeline only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModificationSet {
    overrides: BTreeMap<Coordinate, Colour>,
}

impl ModificationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint a coordinate, replacing any earlier override there.
    pub fn set(&mut self, coord: Coordinate, colour: Colour) {
        self.overrides.insert(coord, colour);
    }

    /// Drop the override at a coordinate.
    pub fn remove(&mut self, coord: Coordinate) -> Option<Colour> {
        self.overrides.remove(&coord)
    }

    /// Drop every override.
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    pub fn get(&self, coord: Coordinate) -> Option<Colour> {
        self.overrides.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.overrides.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Colour)> + '_ {
        self.overrides.iter().map(|(&c, &col)| (c, col))
    }
}

impl FromIterator<(Coordinate, Colour)> for ModificationSet {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Colour)>>(iter: I) -> Self {
        Self {
            overrides: iter.into_iter().collect(),
        }
    }
}
