//! Randomized blob layout generation.

use meshex_model::{BlobId, ColorBlob};
use rand::Rng;

/// Produce one blob per input color, preserving input order.
///
/// Positions, sizes, and opacities are drawn uniformly from the generation
/// ranges; ids are freshly minted on every call. Colors pass through
/// untouched, so callers can regenerate a layout while keeping a palette.
pub fn generate_blobs(colors: &[String]) -> Vec<ColorBlob> {
    let mut rng = rand::rng();
    colors
        .iter()
        .map(|color| ColorBlob {
            id: BlobId::new(),
            color: color.clone(),
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            size: rng.random_range(40.0..80.0),
            opacity: rng.random_range(0.5..0.9),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn palette(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("#0000{i:02X}")).collect()
    }

    #[test]
    fn produces_one_blob_per_color_in_order() {
        let colors = palette(7);
        let blobs = generate_blobs(&colors);
        assert_eq!(blobs.len(), 7);
        for (blob, color) in blobs.iter().zip(&colors) {
            assert_eq!(&blob.color, color);
        }
    }

    #[test]
    fn stays_within_generation_ranges() {
        // Randomized output, so assert ranges over many draws rather than
        // exact values.
        for _ in 0..50 {
            for blob in generate_blobs(&palette(5)) {
                assert!((0.0..100.0).contains(&blob.x));
                assert!((0.0..100.0).contains(&blob.y));
                assert!((40.0..80.0).contains(&blob.size));
                assert!((0.5..0.9).contains(&blob.opacity));
            }
        }
    }

    #[test]
    fn ids_are_distinct_across_calls() {
        let mut seen = HashSet::new();
        for _ in 0..10 {
            for blob in generate_blobs(&palette(5)) {
                assert!(seen.insert(blob.id.to_uuid()));
            }
        }
    }

    #[test]
    fn empty_palette_yields_no_blobs() {
        assert!(generate_blobs(&[]).is_empty());
    }
}
