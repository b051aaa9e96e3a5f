use super::ids::BlobId;

/// Solid base layer painted under every blob.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";
/// Gaussian blur applied to the composed blob layer, in pixels.
pub const DEFAULT_BLUR: u16 = 60;
pub const DEFAULT_NOISE: bool = true;
/// Palette a fresh session starts from; blob count is fixed to its length.
pub const INITIAL_PALETTE: [&str; 5] =
    ["#D1C4E9", "#B39DDB", "#9575CD", "#7E57C2", "#EDE7F6"];
/// Mood label shown before any suggestion has run.
pub const DEFAULT_MOOD: &str = "北欧落日";

// Control ranges. Editing surfaces clamp to these; the model itself does
// not enforce them. The size control floor (10) is intentionally below the
// generator floor (40).
pub const POSITION_MIN: f64 = 0.0;
pub const POSITION_MAX: f64 = 100.0;
pub const SIZE_MIN: f64 = 10.0;
pub const SIZE_MAX: f64 = 120.0;
pub const OPACITY_MIN: f64 = 0.0;
pub const OPACITY_MAX: f64 = 1.0;
pub const BLUR_MIN: u16 = 10;
pub const BLUR_MAX: u16 = 150;

/// One radial color spot contributing a layer to the composed background.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorBlob {
    pub id: BlobId,
    /// `#RRGGBB` hex string; alpha is derived from `opacity` on render.
    pub color: String,
    /// Horizontal position as a percentage of the container.
    pub x: f64,
    /// Vertical position as a percentage of the container.
    pub y: f64,
    /// Spread radius as a percentage of the container.
    pub size: f64,
    pub opacity: f64,
}

/// Full gradient state.
///
/// Blob order is CSS layer order: the first blob renders topmost because
/// `background-image` layers paint first-to-last, top layer first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientConfig {
    pub background_color: String,
    pub blobs: Vec<ColorBlob>,
    pub noise: bool,
    pub blur: u16,
}
