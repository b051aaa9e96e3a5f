//! Core data model definitions shared across meshex crates.
#![allow(missing_docs)]

pub mod color;
pub mod config;
pub mod error;
pub mod ids;
pub mod prelude;
pub mod theme;

// Intentionally curated re-exports for downstream consumers.
pub use color::{alpha_byte, parse_hex_color, parse_hex_rgba};
pub use config::{
    ColorBlob, GradientConfig, BLUR_MAX, BLUR_MIN, DEFAULT_BACKGROUND,
    DEFAULT_BLUR, DEFAULT_MOOD, DEFAULT_NOISE, INITIAL_PALETTE, OPACITY_MAX,
    OPACITY_MIN, POSITION_MAX, POSITION_MIN, SIZE_MAX, SIZE_MIN,
};
pub use error::{ModelError, Result as ModelResult};
pub use ids::BlobId;
pub use theme::ColorTheme;
