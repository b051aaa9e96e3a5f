//! Palette suggestion providers.

mod gemini_api_provider;

pub use gemini_api_provider::GeminiApiProvider;

use async_trait::async_trait;
use meshex_model::ColorTheme;
use rand::Rng;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Missing API key")]
    MissingApiKey,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Empty response")]
    EmptyResponse,
}

/// Mood keywords a suggestion round seeds the service with.
pub const MOODS: [&str; 12] = [
    "北欧落日",
    "赛博霓虹",
    "清晨薄雾",
    "幽静森林",
    "棉花糖",
    "深海秘境",
    "黄金时刻",
    "薰衣草田",
    "极简主义",
    "奢华玫瑰金",
    "冰冻湖面",
    "沙漠之影",
];

/// Pick a mood keyword uniformly at random.
pub fn random_mood() -> &'static str {
    MOODS[rand::rng().random_range(0..MOODS.len())]
}

pub const FALLBACK_THEME_NAME: &str = "经典灵光";
pub const FALLBACK_COLORS: [&str; 5] =
    ["#E0C3FC", "#8EC5FC", "#FBC2EB", "#A18CD1", "#F6D365"];

/// Theme substituted whenever the suggestion service cannot deliver one.
pub fn fallback_theme() -> ColorTheme {
    ColorTheme {
        name: FALLBACK_THEME_NAME.to_string(),
        colors: FALLBACK_COLORS.iter().map(|c| c.to_string()).collect(),
        background: "#FFFFFF".to_string(),
    }
}

/// A service that turns a mood keyword into a color theme.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaletteProvider: Send + Sync {
    /// Ask the service for a theme seeded by a mood keyword.
    async fn request_theme(
        &self,
        mood: &str,
    ) -> Result<ColorTheme, ProviderError>;

    /// Infallible variant of [`request_theme`](Self::request_theme):
    /// failures are logged and resolved to the fixed fallback theme.
    async fn suggest(&self, mood: &str) -> ColorTheme {
        match self.request_theme(mood).await {
            Ok(theme) => theme,
            Err(err) => {
                warn!(
                    error = %err,
                    mood,
                    "palette suggestion failed; using fallback theme"
                );
                fallback_theme()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_theme_is_fully_populated() {
        let theme = fallback_theme();
        assert_eq!(theme.name, FALLBACK_THEME_NAME);
        assert_eq!(theme.colors.len(), 5);
        assert_eq!(theme.background, "#FFFFFF");
    }

    #[test]
    fn random_mood_draws_from_the_fixed_list() {
        for _ in 0..100 {
            assert!(MOODS.contains(&random_mood()));
        }
    }
}
