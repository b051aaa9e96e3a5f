//! Editor/UI focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in presentation layers.

pub use super::color::{alpha_byte, parse_hex_color, parse_hex_rgba};
pub use super::config::{
    ColorBlob, GradientConfig, BLUR_MAX, BLUR_MIN, DEFAULT_BACKGROUND,
    DEFAULT_BLUR, DEFAULT_MOOD, DEFAULT_NOISE, INITIAL_PALETTE, OPACITY_MAX,
    OPACITY_MIN, POSITION_MAX, POSITION_MIN, SIZE_MAX, SIZE_MIN,
};
pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::BlobId;
pub use super::theme::ColorTheme;
