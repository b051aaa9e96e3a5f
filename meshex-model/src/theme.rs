/// A named palette: five blob colors plus a background color.
///
/// Produced by the palette suggestion service or by its fixed fallback.
/// Field values are consumed as-is; nothing checks hex shape or color
/// count before they reach a config.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTheme {
    pub name: String,
    pub colors: Vec<String>,
    pub background: String,
}
