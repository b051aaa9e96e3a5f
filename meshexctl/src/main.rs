//! meshexctl: interactive mesh gradient studio and export CLI.

mod clipboard;
mod menu;
mod tui;
mod validation;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use meshex_core::{
    default_config, fallback_theme, full_html, gradient_css, random_mood,
    Command as EditorCommand, EditorSession, GeminiApiProvider,
    PaletteProvider,
};
use meshex_model::{ColorTheme, BLUR_MAX, BLUR_MIN};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meshexctl", about = "Mesh gradient studio for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the interactive editor
    Edit {
        /// Start with the grain overlay disabled
        #[arg(long)]
        no_noise: bool,
        /// Starting blur in pixels (10-150)
        #[arg(long)]
        blur: Option<u16>,
    },
    /// Print or copy an export artifact for a freshly generated gradient
    Export {
        #[arg(long, value_enum, default_value = "css")]
        format: ExportFormat,
        /// Copy to the system clipboard instead of printing
        #[arg(long)]
        copy: bool,
    },
    /// Ask the palette service for a theme and print it
    Suggest {
        /// Mood keyword; picked at random from the fixed list when omitted
        #[arg(long)]
        mood: Option<String>,
        /// Print the theme as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Css,
    Html,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Edit { no_noise, blur } => {
            let mut session = EditorSession::new();
            if no_noise {
                session.apply(EditorCommand::SetNoise(false));
            }
            if let Some(px) = blur {
                session
                    .apply(EditorCommand::SetBlur(px.clamp(BLUR_MIN, BLUR_MAX)));
            }
            let provider = Arc::new(GeminiApiProvider::new());
            tui::run_editor(&mut session, provider)?;
        }
        Command::Export { format, copy } => {
            let config = default_config();
            let (text, label) = match format {
                ExportFormat::Css => (gradient_css(&config), "CSS"),
                ExportFormat::Html => (full_html(&config), "HTML"),
            };
            if copy {
                clipboard::copy_text(&text)?;
                println!("Copied {label} snippet to clipboard");
            } else {
                println!("{text}");
            }
        }
        Command::Suggest { mood, json } => {
            let provider = GeminiApiProvider::new();
            let attempted = mood.unwrap_or_else(|| random_mood().to_string());
            let (label, theme) = match provider.request_theme(&attempted).await
            {
                Ok(theme) => (theme.name.clone(), theme),
                Err(err) => {
                    warn!(
                        error = %err,
                        mood = attempted.as_str(),
                        "palette suggestion failed; using fallback theme"
                    );
                    // The attempted keyword stays on display even though
                    // the fallback palette is used.
                    (attempted.clone(), fallback_theme())
                }
            };
            print_theme(&label, &theme, json)?;
        }
    }

    Ok(())
}

fn print_theme(label: &str, theme: &ColorTheme, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(theme)?);
        return Ok(());
    }
    println!("Mood: {label}");
    println!("Theme: {}", theme.name);
    println!("Background: {}", theme.background);
    println!("Colors:");
    for color in &theme.colors {
        println!("  {color}");
    }
    Ok(())
}
