//! Sparse coordinate to colour mapping.

use std::collections::BTreeMap;

use super::{Colour, Coordinate};

/// A sparse pixel map: each logical pixel that has a colour.
///
/// Entries iterate in ascending coordinate order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelMap {
    pixels: BTreeMap<Coordinate, Colour>,
}

impl PixelMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colour at a coordinate, returning the previous colour.
    pub fn insert(&mut self, coord: Coordinate, colour: Colour) -> Option<Colour> {
        self.pixels.insert(coord, colour)
    }

    pub fn get(&self, coord: Coordinate) -> Option<Colour> {
        self.pixels.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.pixels.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate over `(coordinate, colour)` pairs in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Colour)> + '_ {
        self.pixels.iter().map(|(&c, &col)| (c, col))
    }

    /// All coordinates, in coordinate order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.pixels.keys().copied()
    }

    /// All colours, in the same order as [`PixelMap::coordinates`].
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.pixels.values().copied()
    }

    /// Number of distinct colours used.
    pub fn distinct_colours(&self) -> usize {
        let mut colours: Vec<Colour> = self.colours().collect();
        colours.sort_unstable();
        colours.dedup();
        colours.len()
    }
}

impl FromIterator<(Coordinate, Colour)> for PixelMap {
    fn from_iter<I: IntoIterator<Item = (Coordinate, Colour)>>(iter: I) -> Self {
        Self {
            pixels: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Coordinate, Colour)> for PixelMap {
    fn extend<I: IntoIterator<Item = (Coordinate, Colour)>>(&mut self, iter: I) {
        self.pixels.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_is_coordinate_ordered() {
        let map: PixelMap = [
            (Coordinate::new(2, 0), Colour::WHITE),
            (Coordinate::new(0, 3), Colour::RED),
            (Coordinate::new(0, 1), Colour::BLACK),
        ]
        .into_iter()
        .collect();

        let coords: Vec<_> = map.coordinates().collect();
        assert_eq!(
            coords,
            vec![Coordinate::new(0, 1), Coordinate::new(0, 3), Coordinate::new(2, 0)]
        );
        let colours: Vec<_> = map.colours().collect();
        assert_eq!(colours, vec![Colour::BLACK, Colour::RED, Colour::WHITE]);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut map = PixelMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert(Coordinate::new(1, 1), Colour::BLACK), None);
        assert_eq!(
            map.insert(Coordinate::new(1, 1), Colour::WHITE),
            Some(Colour::BLACK)
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(Coordinate::new(1, 1)), Some(Colour::WHITE));
    }

    #[test]
    fn test_distinct_colours() {
        let map: PixelMap = [
            (Coordinate::new(0, 0), Colour::RED),
            (Coordinate::new(1, 0), Colour::RED),
            (Coordinate::new(2, 0), Colour::WHITE),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.distinct_colours(), 2);
    }
}
