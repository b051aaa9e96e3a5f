//! Core operations for the meshex gradient studio: randomized blob
//! generation, CSS/HTML serialization, the editor session state machine,
//! and the palette suggestion provider.
#![allow(missing_docs)]

pub mod export;
pub mod generator;
pub mod providers;
pub mod session;
pub mod stylesheet;

// Intentionally curated re-exports for downstream consumers.
pub use export::{full_html, GRAIN_TEXTURE_URL};
pub use generator::generate_blobs;
pub use providers::{
    fallback_theme, random_mood, GeminiApiProvider, PaletteProvider,
    ProviderError, FALLBACK_COLORS, FALLBACK_THEME_NAME, MOODS,
};
pub use session::{default_config, Command, EditorSession};
pub use stylesheet::gradient_css;
