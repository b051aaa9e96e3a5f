//! Standalone HTML snippet export.

use meshex_model::GradientConfig;

use crate::stylesheet::gradient_css;

/// Grain texture referenced by the optional noise overlay.
pub const GRAIN_TEXTURE_URL: &str =
    "https://grainy-gradients.vercel.app/noise.svg";

/// Render a configuration as a self-contained HTML fragment.
///
/// The outer container carries the blur filter and the full CSS
/// declaration inline; the trailing style block scales the container up to
/// hide the blank edge the blur would otherwise expose at the container
/// boundary. The grain overlay is emitted only when `noise` is set and
/// never intercepts pointer input.
pub fn full_html(config: &GradientConfig) -> String {
    let css = gradient_css(config);
    let noise_overlay = if config.noise {
        format!(
            "<div class=\"noise\" style=\"position: absolute; inset: 0; opacity: 0.05; pointer-events: none; background-image: url('{GRAIN_TEXTURE_URL}');\"></div>"
        )
    } else {
        String::new()
    };

    format!(
        "<div class=\"mesh-gradient\" style=\"position: relative; width: 100%; height: 100vh; overflow: hidden; filter: blur({}px); {}\">\n  {}\n</div>\n<style>\n  body, html {{ margin: 0; padding: 0; }}\n  .mesh-gradient {{ transform: scale(1.1); /* Prevents white edges from blur */ }}\n</style>",
        config.blur, css, noise_overlay
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshex_model::{BlobId, ColorBlob};

    fn config(noise: bool) -> GradientConfig {
        GradientConfig {
            background_color: "#FFFFFF".to_string(),
            blobs: vec![ColorBlob {
                id: BlobId::new(),
                color: "#FF0000".to_string(),
                x: 10.0,
                y: 20.0,
                size: 50.0,
                opacity: 0.5,
            }],
            noise,
            blur: 60,
        }
    }

    #[test]
    fn embeds_the_css_declaration_verbatim() {
        let cfg = config(true);
        let html = full_html(&cfg);
        assert!(html.contains(&gradient_css(&cfg)));
        assert!(html.contains("filter: blur(60px);"));
    }

    #[test]
    fn grain_overlay_present_iff_noise() {
        assert!(full_html(&config(true)).contains(GRAIN_TEXTURE_URL));
        assert!(!full_html(&config(false)).contains(GRAIN_TEXTURE_URL));
        assert!(!full_html(&config(false)).contains("class=\"noise\""));
    }

    #[test]
    fn keeps_the_scale_compensation_rule() {
        let html = full_html(&config(false));
        assert!(html.contains(
            ".mesh-gradient { transform: scale(1.1); /* Prevents white edges from blur */ }"
        ));
        assert!(html.contains("body, html { margin: 0; padding: 0; }"));
    }

    #[test]
    fn renders_the_exact_fragment_without_noise() {
        let expected = "<div class=\"mesh-gradient\" style=\"position: relative; width: 100%; height: 100vh; overflow: hidden; filter: blur(60px); background-color: #FFFFFF;\nbackground-image: radial-gradient(circle at 10% 20%, #FF000080 0%, transparent 50%);\">\n  \n</div>\n<style>\n  body, html { margin: 0; padding: 0; }\n  .mesh-gradient { transform: scale(1.1); /* Prevents white edges from blur */ }\n</style>";
        assert_eq!(full_html(&config(false)), expected);
    }
}
