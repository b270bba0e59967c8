use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{Colour, PixelMap};

/// Randomly reassign the map's colours to its coordinates.
///
/// The coordinate set and the multiset of colours are both preserved; only
/// which coordinate gets which colour changes. Coordinates are visited in
/// map order, so a seeded `rng` gives reproducible output.
pub fn shuffle<R: Rng + ?Sized>(map: &PixelMap, rng: &mut R) -> PixelMap {
    let mut colours: Vec<Colour> = map.colours().collect();
    colours.shuffle(rng);

    map.coordinates().zip(colours).collect()
}
