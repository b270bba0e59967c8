//! Pixel map document parser.
//!
//! Decodes `{"pixels": {"x,y": [r, g, b], ...}}` documents into a
//! [`PixelMap`], and serialises maps back into the same shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RepixError, Result};
use crate::types::{Colour, Coordinate, ModificationSet, PixelMap};

/// Top-level document shape on the wire.
#[derive(Debug, Deserialize)]
struct RawDocument {
    pixels: Map<String, Value>,
}

#[derive(Debug, Serialize)]
struct RawDocumentOut {
    pixels: BTreeMap<String, [u8; 3]>,
}

/// Parse a pixel map document from raw bytes.
///
/// An empty `pixels` object parses successfully; emptiness is rejected
/// later, when bounds are computed.
pub fn parse_pixel_map(bytes: &[u8]) -> Result<PixelMap> {
    let doc: RawDocument = serde_json::from_slice(bytes).map_err(|e| RepixError::Parse {
        message: format!("Invalid pixel document: {}", e),
        help: Some("Expected a JSON object with a \"pixels\" mapping".to_string()),
    })?;

    parse_entries(&doc.pixels)
}

/// Parse a modification set from raw bytes.
///
/// Accepts either a full pixel document or a bare `{"x,y": [r, g, b]}`
/// mapping.
pub fn parse_modifications(bytes: &[u8]) -> Result<ModificationSet> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| RepixError::Parse {
        message: format!("Invalid modifications document: {}", e),
        help: None,
    })?;

    let Value::Object(mut root) = value else {
        return Err(RepixError::Parse {
            message: "Modifications must be a JSON object".to_string(),
            help: Some("Use {\"x,y\": [r, g, b]} or {\"pixels\": {...}}".to_string()),
        });
    };

    let entries = match root.remove("pixels") {
        Some(Value::Object(pixels)) => pixels,
        Some(_) => {
            return Err(RepixError::Parse {
                message: "\"pixels\" must be an object".to_string(),
                help: None,
            })
        }
        None => root,
    };

    Ok(parse_entries(&entries)?.iter().collect())
}

/// Serialise a pixel map as a pretty-printed document.
pub fn to_json(map: &PixelMap) -> Result<String> {
    let doc = RawDocumentOut {
        pixels: map
            .iter()
            .map(|(coord, colour)| (coord.to_key(), colour.to_rgb()))
            .collect(),
    };

    serde_json::to_string_pretty(&doc).map_err(|e| RepixError::Parse {
        message: format!("Failed to serialise pixel map: {}", e),
        help: None,
    })
}

fn parse_entries(entries: &Map<String, Value>) -> Result<PixelMap> {
    let mut map = PixelMap::new();

    for (key, value) in entries {
        let coord = Coordinate::parse_key(key)?;
        map.insert(coord, parse_colour(coord, value)?);
    }

    Ok(map)
}

/// Decode one `[r, g, b]` value.
///
/// Anything that is not an array of numbers is a parse error; arity and
/// range problems are colour errors.
fn parse_colour(coord: Coordinate, value: &Value) -> Result<Colour> {
    let Value::Array(items) = value else {
        return Err(RepixError::Parse {
            message: format!("Colour at '{}' is not an array: {}", coord, value),
            help: Some("Colours are written as [r, g, b]".to_string()),
        });
    };

    if let Some(bad) = items.iter().find(|v| !v.is_number()) {
        return Err(RepixError::Parse {
            message: format!("Colour at '{}' has a non-numeric component: {}", coord, bad),
            help: Some("Colours are written as [r, g, b]".to_string()),
        });
    }

    if items.len() != 3 {
        return Err(RepixError::InvalidColour {
            coordinate: coord,
            message: format!("expected 3 components, found {}", items.len()),
        });
    }

    let mut rgb = [0u8; 3];
    for (slot, item) in rgb.iter_mut().zip(items) {
        *slot = item
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| RepixError::InvalidColour {
                coordinate: coord,
                message: format!("component {} is not an integer in 0..=255", item),
            })?;
    }

    Ok(Colour::from(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map_of(entries: &[((u32, u32), [u8; 3])]) -> PixelMap {
        entries
            .iter()
            .map(|&((x, y), rgb)| (Coordinate::new(x, y), Colour::from(rgb)))
            .collect()
    }

    #[test]
    fn test_parse_simple_document() {
        let map = parse_pixel_map(br#"{"pixels": {"0,0": [0, 0, 0], "3,4": [1, 2, 3]}}"#).unwrap();
        assert_eq!(map, map_of(&[((0, 0), [0, 0, 0]), ((3, 4), [1, 2, 3])]));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let map = parse_pixel_map(br#"{"name": "punk", "pixels": {"1,1": [9, 9, 9]}}"#).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_parse_empty_pixels_is_allowed() {
        let map = parse_pixel_map(br#"{"pixels": {}}"#).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_pixel_map(b"{not json").unwrap_err();
        assert!(matches!(err, RepixError::Parse { .. }));
    }

    #[test]
    fn test_parse_missing_pixels() {
        let err = parse_pixel_map(br#"{"pics": {}}"#).unwrap_err();
        assert!(matches!(err, RepixError::Parse { .. }));
        assert!(err.to_string().contains("pixels"));
    }

    #[test]
    fn test_parse_bad_key() {
        let err = parse_pixel_map(br#"{"pixels": {"1;2": [0, 0, 0]}}"#).unwrap_err();
        assert!(matches!(err, RepixError::Parse { .. }));
        assert!(err.to_string().contains("1;2"));

        let err = parse_pixel_map(br#"{"pixels": {"-1,2": [0, 0, 0]}}"#).unwrap_err();
        assert!(matches!(err, RepixError::Parse { .. }));
    }

    #[test]
    fn test_parse_colour_not_array() {
        let err = parse_pixel_map(br##"{"pixels": {"0,0": "#ff0000"}}"##).unwrap_err();
        assert!(matches!(err, RepixError::Parse { .. }));

        let err = parse_pixel_map(br#"{"pixels": {"0,0": [1, "2", 3]}}"#).unwrap_err();
        assert!(matches!(err, RepixError::Parse { .. }));
    }

    #[test]
    fn test_parse_colour_wrong_arity() {
        let err = parse_pixel_map(br#"{"pixels": {"2,5": [1, 2]}}"#).unwrap_err();
        match err {
            RepixError::InvalidColour { coordinate, .. } => {
                assert_eq!(coordinate, Coordinate::new(2, 5));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_colour_out_of_range() {
        for doc in [
            br#"{"pixels": {"0,0": [256, 0, 0]}}"#.as_slice(),
            br#"{"pixels": {"0,0": [0, -1, 0]}}"#.as_slice(),
            br#"{"pixels": {"0,0": [0, 0, 1.5]}}"#.as_slice(),
        ] {
            let err = parse_pixel_map(doc).unwrap_err();
            assert!(matches!(err, RepixError::InvalidColour { .. }), "{err:?}");
        }
    }

    #[test]
    fn test_parse_rejects_aliased_keys() {
        let err = parse_pixel_map(br#"{"pixels": {"01,2": [1, 1, 1], "1,2": [2, 2, 2]}}"#).unwrap_err();
        assert!(matches!(err, RepixError::Parse { .. }));
        assert!(err.to_string().contains("01,2"));

        assert!(parse_pixel_map(br#"{"pixels": {"007,0": [1, 1, 1]}}"#).is_err());
        assert!(parse_modifications(br#"{"1,00": [1, 1, 1]}"#).is_err());
    }

    #[test]
    fn test_keys_round_trip_through_json() {
        let source = br#"{"pixels": {"0,0": [1, 2, 3], "12,7": [4, 5, 6], "100,2000": [7, 8, 9]}}"#;
        let map = parse_pixel_map(source).unwrap();
        let json = to_json(&map).unwrap();

        let value: Value = serde_json::from_str(&json).unwrap();
        let mut keys: Vec<&str> = value["pixels"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["0,0", "100,2000", "12,7"]);

        assert_eq!(parse_pixel_map(json.as_bytes()).unwrap(), map);
    }

    #[test]
    fn test_parse_modifications_bare_mapping() {
        let mods = parse_modifications(br#"{"1,1": [255, 255, 255]}"#).unwrap();
        assert_eq!(mods.get(Coordinate::new(1, 1)), Some(Colour::WHITE));
    }

    #[test]
    fn test_parse_modifications_wrapped() {
        let mods = parse_modifications(br#"{"pixels": {"0,2": [255, 0, 0]}}"#).unwrap();
        assert_eq!(mods.len(), 1);
        assert!(mods.contains(Coordinate::new(0, 2)));
    }

    #[test]
    fn test_parse_modifications_rejects_non_object() {
        assert!(parse_modifications(b"[1, 2, 3]").is_err());
        assert!(parse_modifications(br#"{"pixels": [1]}"#).is_err());
    }
}
