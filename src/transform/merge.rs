use crate::types::{ModificationSet, PixelMap};

/// Overlay `mods` onto `base`.
///
/// Every override replaces the base colour at its coordinate. Overrides at
/// coordinates the base does not have are added, which can grow the canvas.
pub fn merge(base: &PixelMap, mods: &ModificationSet) -> PixelMap {
    let mut merged = base.clone();
    merged.extend(mods.iter());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Coordinate};
    use pretty_assertions::assert_eq;

    fn base() -> PixelMap {
        [
            (Coordinate::new(0, 0), Colour::BLACK),
            (Coordinate::new(1, 0), Colour::WHITE),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_merge_empty_is_identity() {
        assert_eq!(merge(&base(), &ModificationSet::new()), base());
    }

    #[test]
    fn test_merge_overwrites_and_extends() {
        let mut mods = ModificationSet::new();
        mods.set(Coordinate::new(1, 0), Colour::RED);
        mods.set(Coordinate::new(4, 4), Colour::RED);

        let merged = merge(&base(), &mods);

        let keys: Vec<_> = merged.coordinates().collect();
        assert_eq!(
            keys,
            vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(4, 4)]
        );
        for (coord, colour) in mods.iter() {
            assert_eq!(merged.get(coord), Some(colour));
        }
        assert_eq!(merged.get(Coordinate::new(0, 0)), Some(Colour::BLACK));
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let original = base();
        let mut mods = ModificationSet::new();
        mods.set(Coordinate::new(0, 0), Colour::RED);

        let _ = merge(&original, &mods);

        assert_eq!(original, base());
        assert_eq!(mods.len(), 1);
    }
}
