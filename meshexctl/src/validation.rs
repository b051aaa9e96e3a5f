//! Input parsing for field edits.
//!
//! Typed input clamps to the control ranges here, at the edit boundary.
//! The model itself never validates, so this is the only place range
//! enforcement happens.

use anyhow::{anyhow, Result};
use meshex_model::{
    BLUR_MAX, BLUR_MIN, OPACITY_MAX, OPACITY_MIN, POSITION_MAX, POSITION_MIN,
    SIZE_MAX, SIZE_MIN,
};

pub fn parse_blur(input: &str) -> Result<u16> {
    let px: u16 = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("enter blur pixels as an integer"))?;
    Ok(px.clamp(BLUR_MIN, BLUR_MAX))
}

pub fn parse_position(input: &str) -> Result<f64> {
    parse_clamped(input, POSITION_MIN, POSITION_MAX, "enter a percentage 0-100")
}

pub fn parse_size(input: &str) -> Result<f64> {
    parse_clamped(input, SIZE_MIN, SIZE_MAX, "enter a size percentage 10-120")
}

pub fn parse_opacity(input: &str) -> Result<f64> {
    parse_clamped(input, OPACITY_MIN, OPACITY_MAX, "enter an opacity 0-1")
}

fn parse_clamped(
    input: &str,
    min: f64,
    max: f64,
    message: &'static str,
) -> Result<f64> {
    let value: f64 = input.trim().parse().map_err(|_| anyhow!(message))?;
    if !value.is_finite() {
        return Err(anyhow!(message));
    }
    Ok(value.clamp(min, max))
}

/// Accept `RRGGBB` or `#RRGGBB` and normalize to `#RRGGBB` uppercase.
pub fn normalize_hex(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(format!("#{}", digits.to_ascii_uppercase()))
    } else {
        Err(anyhow!("enter a color as #RRGGBB"))
    }
}
