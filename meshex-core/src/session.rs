//! Editor session state and its command reducer.
//!
//! All mutation flows through [`Command`] values applied to one owned
//! [`GradientConfig`]; every application swaps the whole configuration so
//! no partially-updated state is ever observable.

use meshex_model::{
    BlobId, ColorBlob, ColorTheme, GradientConfig, DEFAULT_BACKGROUND,
    DEFAULT_BLUR, DEFAULT_MOOD, DEFAULT_NOISE, INITIAL_PALETTE,
};
use tracing::warn;

use crate::generator::generate_blobs;
use crate::providers::{
    fallback_theme, random_mood, PaletteProvider, ProviderError,
};

/// One discrete editor interaction.
///
/// Commands addressing a [`BlobId`] that is not part of the current
/// configuration are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetBackground(String),
    SetBlur(u16),
    SetNoise(bool),
    SetBlobColor(BlobId, String),
    SetBlobPosition(BlobId, f64, f64),
    SetBlobSize(BlobId, f64),
    SetBlobOpacity(BlobId, f64),
    /// Regenerate layout while keeping the current colors in order.
    Randomize,
    /// Return to the exact startup state, mood label included. Callers are
    /// expected to confirm with the user first.
    Reset,
}

/// The startup configuration: default background, blur, and noise with a
/// freshly randomized layout of the initial palette.
pub fn default_config() -> GradientConfig {
    GradientConfig {
        background_color: DEFAULT_BACKGROUND.to_string(),
        blobs: generate_blobs(&initial_palette()),
        noise: DEFAULT_NOISE,
        blur: DEFAULT_BLUR,
    }
}

fn initial_palette() -> Vec<String> {
    INITIAL_PALETTE.iter().map(|color| color.to_string()).collect()
}

/// Owner of the in-memory editor state for one interactive session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: GradientConfig,
    mood: String,
    suggesting: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            config: default_config(),
            mood: DEFAULT_MOOD.to_string(),
            suggesting: false,
        }
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    /// Mood label currently in effect for display.
    pub fn mood(&self) -> &str {
        &self.mood
    }

    /// Whether a suggestion request is outstanding. The triggering control
    /// is disabled while this is set; nothing queues a second request.
    pub fn is_suggesting(&self) -> bool {
        self.suggesting
    }

    /// Apply one command, replacing the configuration wholesale.
    pub fn apply(&mut self, command: Command) {
        let mut next = self.config.clone();
        match command {
            Command::SetBackground(color) => next.background_color = color,
            Command::SetBlur(px) => next.blur = px,
            Command::SetNoise(on) => next.noise = on,
            Command::SetBlobColor(id, color) => {
                update_blob(&mut next, id, |blob| blob.color = color);
            }
            Command::SetBlobPosition(id, x, y) => {
                update_blob(&mut next, id, |blob| {
                    blob.x = x;
                    blob.y = y;
                });
            }
            Command::SetBlobSize(id, size) => {
                update_blob(&mut next, id, |blob| blob.size = size);
            }
            Command::SetBlobOpacity(id, opacity) => {
                update_blob(&mut next, id, |blob| blob.opacity = opacity);
            }
            Command::Randomize => {
                let colors: Vec<String> = next
                    .blobs
                    .iter()
                    .map(|blob| blob.color.clone())
                    .collect();
                next.blobs = generate_blobs(&colors);
            }
            Command::Reset => {
                next = default_config();
                self.mood = DEFAULT_MOOD.to_string();
            }
        }
        self.config = next;
    }

    /// Start a suggestion round: marks the session as suggesting and picks
    /// the mood keyword to seed the service with. Returns `None` while a
    /// round is already outstanding.
    pub fn begin_suggestion(&mut self) -> Option<String> {
        if self.suggesting {
            return None;
        }
        self.suggesting = true;
        Some(random_mood().to_string())
    }

    /// Complete a suggestion round with the service outcome.
    ///
    /// On success the theme's colors and background replace the current
    /// ones with a fresh layout and the theme name becomes the mood label.
    /// On failure the fallback palette is applied instead, but the
    /// attempted keyword stays on display rather than the fallback theme's
    /// own name; label and palette intentionally disagree in that case.
    pub fn finish_suggestion(
        &mut self,
        attempted_mood: &str,
        outcome: Result<ColorTheme, ProviderError>,
    ) {
        self.suggesting = false;
        let theme = match outcome {
            Ok(theme) => {
                self.mood = theme.name.clone();
                theme
            }
            Err(err) => {
                warn!(
                    error = %err,
                    mood = attempted_mood,
                    "palette suggestion failed; applying fallback colors"
                );
                self.mood = attempted_mood.to_string();
                fallback_theme()
            }
        };

        let mut next = self.config.clone();
        next.background_color = theme.background;
        next.blobs = generate_blobs(&theme.colors);
        self.config = next;
    }

    /// Run one full suggestion round against a provider. Returns `None`
    /// when a round was already outstanding, otherwise the mood label now
    /// in effect.
    pub async fn suggest(
        &mut self,
        provider: &dyn PaletteProvider,
    ) -> Option<&str> {
        let mood = self.begin_suggestion()?;
        let outcome = provider.request_theme(&mood).await;
        self.finish_suggestion(&mood, outcome);
        Some(self.mood())
    }
}

fn update_blob(
    config: &mut GradientConfig,
    id: BlobId,
    update: impl FnOnce(&mut ColorBlob),
) {
    if let Some(blob) = config.blobs.iter_mut().find(|blob| blob.id == id) {
        update(blob);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{
        MockPaletteProvider, FALLBACK_COLORS, FALLBACK_THEME_NAME,
    };

    fn first_blob_id(session: &EditorSession) -> BlobId {
        session.config().blobs[0].id
    }

    #[test]
    fn starts_from_the_fixed_defaults() {
        let session = EditorSession::new();
        let config = session.config();
        assert_eq!(config.background_color, "#FFFFFF");
        assert_eq!(config.blur, 60);
        assert!(config.noise);
        assert_eq!(config.blobs.len(), INITIAL_PALETTE.len());
        for (blob, color) in config.blobs.iter().zip(INITIAL_PALETTE) {
            assert_eq!(blob.color, color);
        }
        assert_eq!(session.mood(), DEFAULT_MOOD);
    }

    #[test]
    fn scalar_commands_replace_the_named_field() {
        let mut session = EditorSession::new();
        session.apply(Command::SetBackground("#FAFAFA".into()));
        session.apply(Command::SetBlur(120));
        session.apply(Command::SetNoise(false));
        let config = session.config();
        assert_eq!(config.background_color, "#FAFAFA");
        assert_eq!(config.blur, 120);
        assert!(!config.noise);
    }

    #[test]
    fn blob_commands_address_by_id() {
        let mut session = EditorSession::new();
        let id = first_blob_id(&session);
        session.apply(Command::SetBlobPosition(id, 12.0, 34.0));
        session.apply(Command::SetBlobSize(id, 99.0));
        session.apply(Command::SetBlobOpacity(id, 0.25));
        session.apply(Command::SetBlobColor(id, "#101010".into()));
        let blob = &session.config().blobs[0];
        assert_eq!((blob.x, blob.y), (12.0, 34.0));
        assert_eq!(blob.size, 99.0);
        assert_eq!(blob.opacity, 0.25);
        assert_eq!(blob.color, "#101010");
        // Untouched siblings keep their values.
        assert_eq!(session.config().blobs[1].color, INITIAL_PALETTE[1]);
    }

    #[test]
    fn unknown_blob_id_is_a_no_op() {
        let mut session = EditorSession::new();
        let before = session.config().clone();
        session.apply(Command::SetBlobSize(BlobId::new(), 55.0));
        assert_eq!(session.config(), &before);
    }

    #[test]
    fn randomize_keeps_colors_and_order_but_mints_new_ids() {
        let mut session = EditorSession::new();
        let before: Vec<_> = session
            .config()
            .blobs
            .iter()
            .map(|blob| (blob.id, blob.color.clone()))
            .collect();
        session.apply(Command::Randomize);
        let after = session.config();
        assert_eq!(after.blobs.len(), before.len());
        for (blob, (old_id, old_color)) in after.blobs.iter().zip(&before) {
            assert_eq!(&blob.color, old_color);
            assert_ne!(&blob.id, old_id);
        }
    }

    #[test]
    fn reset_restores_defaults_and_mood() {
        let mut session = EditorSession::new();
        session.apply(Command::SetBackground("#000000".into()));
        session.apply(Command::SetBlur(150));
        session.apply(Command::SetNoise(false));
        session.finish_suggestion(
            "黄金时刻",
            Ok(ColorTheme {
                name: "黄金时刻".into(),
                colors: vec!["#111111".into(); 5],
                background: "#222222".into(),
            }),
        );
        session.apply(Command::Reset);
        let config = session.config();
        assert_eq!(config.background_color, "#FFFFFF");
        assert_eq!(config.blur, 60);
        assert!(config.noise);
        for (blob, color) in config.blobs.iter().zip(INITIAL_PALETTE) {
            assert_eq!(blob.color, color);
        }
        assert_eq!(session.mood(), DEFAULT_MOOD);
    }

    #[test]
    fn only_one_suggestion_round_at_a_time() {
        let mut session = EditorSession::new();
        let mood = session.begin_suggestion().expect("first round starts");
        assert!(session.is_suggesting());
        assert!(session.begin_suggestion().is_none());
        session.finish_suggestion("清晨薄雾", Err(ProviderError::EmptyResponse));
        assert!(!session.is_suggesting());
        assert!(crate::providers::MOODS.contains(&mood.as_str()));
    }

    #[test]
    fn successful_suggestion_applies_theme_and_name() {
        let mut session = EditorSession::new();
        let mood = session.begin_suggestion().unwrap();
        session.finish_suggestion(
            &mood,
            Ok(ColorTheme {
                name: "深海秘境".into(),
                colors: vec![
                    "#001122".into(),
                    "#112233".into(),
                    "#223344".into(),
                    "#334455".into(),
                    "#445566".into(),
                ],
                background: "#F0F4F8".into(),
            }),
        );
        let config = session.config();
        assert_eq!(session.mood(), "深海秘境");
        assert_eq!(config.background_color, "#F0F4F8");
        assert_eq!(config.blobs[2].color, "#223344");
    }

    #[test]
    fn failed_suggestion_keeps_attempted_mood_over_fallback_name() {
        let mut session = EditorSession::new();
        session.finish_suggestion(
            "沙漠之影",
            Err(ProviderError::ApiError("boom".into())),
        );
        let config = session.config();
        assert_eq!(session.mood(), "沙漠之影");
        assert_ne!(session.mood(), FALLBACK_THEME_NAME);
        for (blob, color) in config.blobs.iter().zip(FALLBACK_COLORS) {
            assert_eq!(blob.color, color);
        }
        assert_eq!(config.background_color, "#FFFFFF");
    }

    #[tokio::test]
    async fn suggest_drives_a_round_through_a_provider() {
        let mut provider = MockPaletteProvider::new();
        provider.expect_request_theme().times(1).returning(|_| {
            Ok(ColorTheme {
                name: "幽静森林".into(),
                colors: vec!["#0A3D2E".into(); 5],
                background: "#F2FFF9".into(),
            })
        });

        let mut session = EditorSession::new();
        let label = session.suggest(&provider).await.unwrap().to_string();
        assert_eq!(label, "幽静森林");
        assert!(!session.is_suggesting());
        assert_eq!(session.config().background_color, "#F2FFF9");
    }

    #[tokio::test]
    async fn suggest_falls_back_but_reports_the_attempted_mood() {
        let mut provider = MockPaletteProvider::new();
        provider
            .expect_request_theme()
            .times(1)
            .returning(|_| Err(ProviderError::RateLimited));

        let mut session = EditorSession::new();
        let label = session.suggest(&provider).await.unwrap().to_string();
        assert!(crate::providers::MOODS.contains(&label.as_str()));
        for (blob, color) in
            session.config().blobs.iter().zip(FALLBACK_COLORS)
        {
            assert_eq!(blob.color, color);
        }
    }
}
