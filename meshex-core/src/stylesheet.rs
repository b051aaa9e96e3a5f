//! Gradient configuration to CSS background declaration.

use meshex_model::{alpha_byte, GradientConfig};

/// Serialize a configuration to its `background-color` /
/// `background-image` declaration pair.
///
/// Each blob becomes one `radial-gradient` layer in configuration order;
/// the first blob is the topmost painted layer. Opacity is folded into the
/// color as a trailing two-digit alpha byte. Blur and the grain overlay
/// are composed by callers, not here.
pub fn gradient_css(config: &GradientConfig) -> String {
    let layers: Vec<String> = config
        .blobs
        .iter()
        .map(|blob| {
            format!(
                "radial-gradient(circle at {}% {}%, {}{:02x} 0%, transparent {}%)",
                blob.x,
                blob.y,
                blob.color,
                alpha_byte(blob.opacity),
                blob.size
            )
        })
        .collect();

    format!(
        "background-color: {};\nbackground-image: {};",
        config.background_color,
        layers.join(",\n    ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshex_model::{BlobId, ColorBlob};

    fn blob(color: &str, x: f64, y: f64, size: f64, opacity: f64) -> ColorBlob {
        ColorBlob {
            id: BlobId::new(),
            color: color.to_string(),
            x,
            y,
            size,
            opacity,
        }
    }

    #[test]
    fn serializes_single_blob_exactly() {
        let config = GradientConfig {
            background_color: "#FFFFFF".to_string(),
            blobs: vec![blob("#FF0000", 10.0, 20.0, 50.0, 0.5)],
            noise: false,
            blur: 60,
        };
        assert_eq!(
            gradient_css(&config),
            "background-color: #FFFFFF;\nbackground-image: radial-gradient(circle at 10% 20%, #FF000080 0%, transparent 50%);"
        );
    }

    #[test]
    fn layers_follow_blob_order() {
        let config = GradientConfig {
            background_color: "#000000".to_string(),
            blobs: vec![
                blob("#AA0000", 0.0, 0.0, 40.0, 1.0),
                blob("#00BB00", 100.0, 100.0, 80.0, 0.9),
            ],
            noise: true,
            blur: 10,
        };
        let css = gradient_css(&config);
        assert_eq!(
            css,
            "background-color: #000000;\n\
             background-image: radial-gradient(circle at 0% 0%, #AA0000ff 0%, transparent 40%),\n    \
             radial-gradient(circle at 100% 100%, #00BB00e6 0%, transparent 80%);"
        );
        let first = css.find("#AA0000").unwrap();
        let second = css.find("#00BB00").unwrap();
        assert!(first < second);
    }

    #[test]
    fn output_is_deterministic_for_a_fixed_config() {
        let config = GradientConfig {
            background_color: "#FAFAFA".to_string(),
            blobs: vec![blob("#8EC5FC", 37.25, 61.5, 72.125, 0.55)],
            noise: true,
            blur: 90,
        };
        assert_eq!(gradient_css(&config), gradient_css(&config));
    }

    #[test]
    fn fractional_values_keep_their_shortest_decimal_form() {
        let config = GradientConfig {
            background_color: "#FFFFFF".to_string(),
            blobs: vec![blob("#123456", 12.5, 0.25, 64.75, 0.9)],
            noise: false,
            blur: 60,
        };
        let css = gradient_css(&config);
        assert!(css.contains("circle at 12.5% 0.25%"));
        assert!(css.contains("transparent 64.75%"));
        assert!(css.contains("#123456e6"));
    }

    #[test]
    fn no_blobs_serializes_an_empty_image_list() {
        let config = GradientConfig {
            background_color: "#FFFFFF".to_string(),
            blobs: Vec::new(),
            noise: false,
            blur: 60,
        };
        assert_eq!(
            gradient_css(&config),
            "background-color: #FFFFFF;\nbackground-image: ;"
        );
    }
}
