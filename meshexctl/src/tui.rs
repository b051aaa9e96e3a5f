//! Full-screen editor built on ratatui.
//!
//! Navigation and editing follow a two-mode loop: Navigate moves over the
//! field list, Editing captures typed input for one field. Suggestion
//! requests run on the tokio runtime and deliver their outcome back to the
//! event loop over a channel, so the interface never blocks on the
//! network.

use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use anyhow::{anyhow, Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use meshex_core::{
    full_html, gradient_css, Command, EditorSession, GeminiApiProvider,
    PaletteProvider, ProviderError,
};
use meshex_model::{parse_hex_color, ColorTheme};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use tokio::sync::mpsc;

use crate::clipboard;
use crate::menu::{
    build_items, field_type_hint, help_text, item_category, menu_label,
    BlobField, MenuItem,
};
use crate::validation;

/// How long a "copied" badge stays visible.
const COPIED_BADGE_TTL: Duration = Duration::from_secs(2);

type SuggestionOutcome = (String, Result<ColorTheme, ProviderError>);

/// Source of key/input events so tests can drive the TUI without a real tty.
trait EventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>>;
    fn is_scripted(&self) -> bool {
        false
    }
}

struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Scripted event source driven by a simple line-oriented DSL:
///   down|up|left|right|enter|space|esc|<single char>|type:<text>
/// Lines beginning with # are ignored. Blank lines are skipped.
/// When events are exhausted, we fail fast to avoid hangs.
struct ScriptEventSource {
    events: Vec<Event>,
    cursor: usize,
    exhausted_at: Option<Instant>,
    trace: Option<File>,
}

impl ScriptEventSource {
    fn from_path(path: PathBuf, trace_path: Option<PathBuf>) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .context("read scripted TUI input")?;
        let mut events = Vec::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut push_key = |code: KeyCode, modifiers: KeyModifiers| {
                events.push(Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: event::KeyEventKind::Press,
                    state: event::KeyEventState::NONE,
                }));
            };

            match line {
                "down" => push_key(KeyCode::Down, KeyModifiers::NONE),
                "up" => push_key(KeyCode::Up, KeyModifiers::NONE),
                "left" => push_key(KeyCode::Left, KeyModifiers::NONE),
                "right" => push_key(KeyCode::Right, KeyModifiers::NONE),
                "enter" => push_key(KeyCode::Enter, KeyModifiers::NONE),
                "space" => push_key(KeyCode::Char(' '), KeyModifiers::NONE),
                "esc" => push_key(KeyCode::Esc, KeyModifiers::NONE),
                _ => {
                    if let Some(rest) = line.strip_prefix("type:") {
                        for ch in rest.chars() {
                            push_key(KeyCode::Char(ch), KeyModifiers::NONE);
                        }
                    } else if line.chars().count() == 1 {
                        let ch = line.chars().next().unwrap();
                        push_key(KeyCode::Char(ch), KeyModifiers::NONE);
                    } else {
                        return Err(anyhow!(
                            "unrecognized TUI script token at line {}: {}",
                            idx + 1,
                            line
                        ));
                    }
                }
            }
        }

        let trace = trace_path
            .map(|p| File::create(p).context("create tui trace file"))
            .transpose()?;

        Ok(Self {
            events,
            cursor: 0,
            exhausted_at: None,
            trace,
        })
    }
}

impl EventSource for ScriptEventSource {
    fn next(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        if self.cursor >= self.events.len() {
            // Allow a short grace period before failing to avoid tight loop.
            match self.exhausted_at {
                Some(ea) => {
                    if ea.elapsed() > Duration::from_secs(1) {
                        return Err(anyhow!(
                            "scripted TUI input exhausted before the editor quit"
                        ));
                    }
                }
                None => self.exhausted_at = Some(Instant::now()),
            }
            std::thread::sleep(Duration::from_millis(25));
            return Ok(None);
        }

        let ev = self.events[self.cursor].clone();
        self.cursor += 1;

        if let Some(trace) = self.trace.as_mut() {
            let _ = writeln!(trace, "{:?}", ev);
        }

        Ok(Some(ev))
    }

    fn is_scripted(&self) -> bool {
        true
    }
}

fn event_source_from_env() -> Result<Box<dyn EventSource>> {
    if let Ok(path) = std::env::var("MESHEX_TUI_SCRIPT") {
        let trace = std::env::var("MESHEX_TUI_TRACE").ok();
        let src = ScriptEventSource::from_path(
            PathBuf::from(path),
            trace.map(PathBuf::from),
        )?;
        Ok(Box::new(src))
    } else {
        Ok(Box::new(CrosstermEventSource))
    }
}

enum Mode {
    Navigate,
    Editing(MenuItem),
}

enum MessageKind {
    Info,
    Success,
    Error,
}

struct StatusMessage {
    kind: MessageKind,
    text: String,
}

#[derive(Clone, Copy)]
enum CopyKind {
    Css,
    Html,
}

struct AppState {
    items: Vec<MenuItem>,
    selected: usize,
    mode: Mode,
    input: String,
    message: Option<StatusMessage>,
    pending_reset: bool,
    copied_css_at: Option<Instant>,
    copied_html_at: Option<Instant>,
}

impl AppState {
    fn new(blob_count: usize) -> Self {
        Self {
            items: build_items(blob_count),
            selected: 0,
            mode: Mode::Navigate,
            input: String::new(),
            message: None,
            pending_reset: false,
            copied_css_at: None,
            copied_html_at: None,
        }
    }

    fn jump_next_category(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let current_cat = item_category(self.items[self.selected]);
        let mut idx = self.selected + 1;
        // Skip the rest of the current category.
        while idx < self.items.len()
            && item_category(self.items[idx]) == current_cat
        {
            idx += 1;
        }
        if idx >= self.items.len() {
            return;
        }
        // Rewind to the first item in the next category block.
        let next_cat = item_category(self.items[idx]);
        while idx > 0 && item_category(self.items[idx - 1]) == next_cat {
            idx -= 1;
        }
        self.selected = idx;
    }

    fn jump_prev_category(&mut self) {
        if self.items.is_empty() || self.selected == 0 {
            return;
        }
        let current_cat = item_category(self.items[self.selected]);
        // Move to the first item of the current category.
        let mut idx = self.selected;
        while idx > 0 && item_category(self.items[idx - 1]) == current_cat {
            idx -= 1;
        }
        if idx == 0 {
            return; // no previous category
        }
        // Step to the last item of the previous category, then rewind to
        // the first item of that block.
        idx -= 1;
        let prev_cat = item_category(self.items[idx]);
        while idx > 0 && item_category(self.items[idx - 1]) == prev_cat {
            idx -= 1;
        }
        self.selected = idx;
    }

    fn set_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.message = Some(StatusMessage {
            kind,
            text: text.into(),
        });
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn expire_copied(&mut self) {
        if self
            .copied_css_at
            .is_some_and(|at| at.elapsed() >= COPIED_BADGE_TTL)
        {
            self.copied_css_at = None;
        }
        if self
            .copied_html_at
            .is_some_and(|at| at.elapsed() >= COPIED_BADGE_TTL)
        {
            self.copied_html_at = None;
        }
    }

    fn mode_name(&self) -> &'static str {
        match self.mode {
            Mode::Navigate => "Navigate",
            Mode::Editing(_) => "Editing",
        }
    }
}

/// Run the interactive editor until the user quits.
pub fn run_editor(
    session: &mut EditorSession,
    provider: Arc<GeminiApiProvider>,
) -> Result<()> {
    let mut source = event_source_from_env()?;
    let scripted = source.is_scripted();

    let mut stdout = io::stdout();
    if !scripted {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(session.config().blobs.len());
    let result = run_app(
        &mut terminal,
        session,
        &mut app,
        &mut *source,
        &provider,
        &tx,
        &mut rx,
    );

    if !scripted {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    result
}

#[allow(clippy::too_many_arguments)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut EditorSession,
    app: &mut AppState,
    source: &mut dyn EventSource,
    provider: &Arc<GeminiApiProvider>,
    tx: &mpsc::UnboundedSender<SuggestionOutcome>,
    rx: &mut mpsc::UnboundedReceiver<SuggestionOutcome>,
) -> Result<()> {
    loop {
        while let Ok((mood, outcome)) = rx.try_recv() {
            session.finish_suggestion(&mood, outcome);
            app.set_message(
                MessageKind::Success,
                format!("Mood now {}", session.mood()),
            );
        }
        app.expire_copied();

        terminal.draw(|f| render(f, session, app))?;

        if let Some(ev) = source.next(Duration::from_millis(150))? {
            match ev {
                Event::Key(key) => {
                    if handle_key(key, session, app, provider, tx)? {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => {
                    // redrawn on next loop automatically
                }
                _ => {}
            }
        }
    }
}

fn handle_key(
    key: KeyEvent,
    session: &mut EditorSession,
    app: &mut AppState,
    provider: &Arc<GeminiApiProvider>,
    tx: &mpsc::UnboundedSender<SuggestionOutcome>,
) -> Result<bool> {
    match app.mode {
        Mode::Navigate => {
            // Destructive reset needs a second press; any other key
            // declines it and leaves the state untouched.
            if let KeyCode::Char('x') = key.code {
                if app.pending_reset {
                    app.pending_reset = false;
                    session.apply(Command::Reset);
                    app.set_message(
                        MessageKind::Success,
                        "Reset to the startup defaults",
                    );
                } else {
                    app.pending_reset = true;
                    app.set_message(
                        MessageKind::Error,
                        "Reset discards all changes; press x again to confirm",
                    );
                }
                return Ok(false);
            }
            app.pending_reset = false;

            match key.code {
                KeyCode::Char('q') => return Ok(true),
                KeyCode::Char('r') => {
                    session.apply(Command::Randomize);
                    app.set_message(MessageKind::Success, "Layout randomized");
                }
                KeyCode::Char('g') => {
                    start_suggestion(session, app, provider, tx);
                }
                KeyCode::Char('c') => {
                    copy_artifact(session, app, CopyKind::Css);
                }
                KeyCode::Char('y') => {
                    copy_artifact(session, app, CopyKind::Html);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if !app.items.is_empty() {
                        app.selected = (app.selected + 1) % app.items.len();
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if !app.items.is_empty() {
                        if app.selected == 0 {
                            app.selected = app.items.len() - 1;
                        } else {
                            app.selected -= 1;
                        }
                    }
                }
                KeyCode::Char(']') => {
                    app.jump_next_category();
                }
                KeyCode::Char('[') => {
                    app.jump_prev_category();
                }
                KeyCode::Enter => {
                    if app.items.is_empty() {
                        return Ok(false);
                    }
                    let item = app.items[app.selected];
                    if item == MenuItem::Noise {
                        toggle_noise(session, app);
                        return Ok(false);
                    }
                    app.input = current_value(item, session);
                    app.mode = Mode::Editing(item);
                    app.clear_message();
                }
                KeyCode::Char(' ') => {
                    if app.items.get(app.selected) == Some(&MenuItem::Noise) {
                        toggle_noise(session, app);
                    }
                }
                _ => {}
            }
        }
        Mode::Editing(item) => match key.code {
            KeyCode::Esc => {
                app.mode = Mode::Navigate;
                app.input.clear();
                app.clear_message();
            }
            KeyCode::Enter => {
                let input = app.input.trim().to_string();
                match apply_input(item, &input, session) {
                    Ok(()) => {
                        app.mode = Mode::Navigate;
                        app.input.clear();
                        app.set_message(MessageKind::Success, "Saved");
                    }
                    Err(err) => {
                        app.set_message(MessageKind::Error, err.to_string());
                    }
                }
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.input.push(c);
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                app.input.pop();
            }
            _ => {}
        },
    }

    Ok(false)
}

fn toggle_noise(session: &mut EditorSession, app: &mut AppState) {
    let next = !session.config().noise;
    session.apply(Command::SetNoise(next));
    app.set_message(
        MessageKind::Success,
        if next { "Grain on" } else { "Grain off" },
    );
}

fn start_suggestion(
    session: &mut EditorSession,
    app: &mut AppState,
    provider: &Arc<GeminiApiProvider>,
    tx: &mpsc::UnboundedSender<SuggestionOutcome>,
) {
    let Some(mood) = session.begin_suggestion() else {
        app.set_message(
            MessageKind::Info,
            "A suggestion is already generating",
        );
        return;
    };
    app.set_message(
        MessageKind::Info,
        format!("Generating palette for {mood}..."),
    );
    let provider = Arc::clone(provider);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = provider.request_theme(&mood).await;
        let _ = tx.send((mood, outcome));
    });
}

fn copy_artifact(
    session: &EditorSession,
    app: &mut AppState,
    kind: CopyKind,
) {
    let (text, label) = match kind {
        CopyKind::Css => (gradient_css(session.config()), "CSS"),
        CopyKind::Html => (full_html(session.config()), "HTML"),
    };
    match clipboard::copy_text(&text) {
        Ok(()) => {
            match kind {
                CopyKind::Css => app.copied_css_at = Some(Instant::now()),
                CopyKind::Html => app.copied_html_at = Some(Instant::now()),
            }
            app.set_message(
                MessageKind::Success,
                format!("{label} copied to clipboard"),
            );
        }
        Err(err) => {
            app.set_message(MessageKind::Error, format!("Copy failed: {err:#}"));
        }
    }
}

fn current_value(item: MenuItem, session: &EditorSession) -> String {
    let config = session.config();
    match item {
        MenuItem::Background => config.background_color.clone(),
        MenuItem::Blur => config.blur.to_string(),
        MenuItem::Noise => config.noise.to_string(),
        MenuItem::Blob(index, field) => match config.blobs.get(index) {
            Some(blob) => match field {
                BlobField::Color => blob.color.clone(),
                BlobField::X => blob.x.to_string(),
                BlobField::Y => blob.y.to_string(),
                BlobField::Size => blob.size.to_string(),
                BlobField::Opacity => blob.opacity.to_string(),
            },
            None => String::new(),
        },
    }
}

fn apply_input(
    item: MenuItem,
    input: &str,
    session: &mut EditorSession,
) -> Result<()> {
    match item {
        MenuItem::Background => {
            let color = validation::normalize_hex(input)?;
            session.apply(Command::SetBackground(color));
        }
        MenuItem::Blur => {
            session.apply(Command::SetBlur(validation::parse_blur(input)?));
        }
        MenuItem::Noise => {
            // toggled in navigate mode, never edited
        }
        MenuItem::Blob(index, field) => {
            let blob = session
                .config()
                .blobs
                .get(index)
                .ok_or_else(|| anyhow!("node {} no longer exists", index + 1))?;
            let id = blob.id;
            let (x, y) = (blob.x, blob.y);
            match field {
                BlobField::Color => {
                    let color = validation::normalize_hex(input)?;
                    session.apply(Command::SetBlobColor(id, color));
                }
                BlobField::X => {
                    let value = validation::parse_position(input)?;
                    session.apply(Command::SetBlobPosition(id, value, y));
                }
                BlobField::Y => {
                    let value = validation::parse_position(input)?;
                    session.apply(Command::SetBlobPosition(id, x, value));
                }
                BlobField::Size => {
                    let value = validation::parse_size(input)?;
                    session.apply(Command::SetBlobSize(id, value));
                }
                BlobField::Opacity => {
                    let value = validation::parse_opacity(input)?;
                    session.apply(Command::SetBlobOpacity(id, value));
                }
            }
        }
    }
    Ok(())
}

fn swatch_style(color: &str) -> Style {
    match parse_hex_color(color) {
        Ok((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
        // Malformed theme values still render, just without a swatch color.
        Err(_) => Style::default().fg(Color::DarkGray),
    }
}

fn render(f: &mut Frame, session: &EditorSession, app: &AppState) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)].as_ref())
        .split(f.size());

    // Top: field list on the left, preview + help stacked on the right.
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [Constraint::Percentage(45), Constraint::Percentage(55)].as_ref(),
        )
        .split(vertical[0]);
    let list_area = main[0];
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [Constraint::Percentage(62), Constraint::Percentage(38)].as_ref(),
        )
        .split(main[1]);
    let preview_area = right[0];
    let help_area = right[1];

    // Field list with category headers
    let mut list_items: Vec<ListItem> = Vec::new();
    let mut selected_row: Option<usize> = None;
    let mut last_category: Option<&str> = None;

    for (idx, item) in app.items.iter().enumerate() {
        let category = item_category(*item);
        if Some(category) != last_category {
            let header = ListItem::new(Line::from(vec![Span::styled(
                category.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]));
            list_items.push(header);
            last_category = Some(category);
        }

        let row_label = menu_label(session, *item);
        let style = match item {
            MenuItem::Noise => {
                if session.config().noise {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                }
            }
            MenuItem::Background | MenuItem::Blob(_, BlobField::Color) => {
                let color = match item {
                    MenuItem::Background => {
                        session.config().background_color.as_str()
                    }
                    MenuItem::Blob(index, _) => session
                        .config()
                        .blobs
                        .get(*index)
                        .map(|blob| blob.color.as_str())
                        .unwrap_or(""),
                    _ => "",
                };
                swatch_style(color)
            }
            _ => Style::default(),
        };

        let row_index = list_items.len();
        if idx == app.selected {
            selected_row = Some(row_index);
        }
        let text = format!("  {row_label}");
        list_items.push(ListItem::new(text).style(style));
    }

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(format!(
                    "Fields ({} nodes)",
                    session.config().blobs.len()
                ))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::new()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ratatui::widgets::ListState::default();
    if !app.items.is_empty() {
        // Highlight the row for the selected field, skipping headers.
        list_state.select(selected_row.or(Some(0)));
    }
    f.render_stateful_widget(list, list_area, &mut list_state);

    // Preview panel
    let config = session.config();
    let mut preview_lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Mood: ", Style::default().fg(Color::Gray)),
            Span::styled(
                session.mood().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if session.is_suggesting() {
                    "  (generating...)"
                } else {
                    ""
                },
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("██████ ", swatch_style(&config.background_color)),
            Span::raw(format!("background {}", config.background_color)),
        ]),
    ];
    for (idx, blob) in config.blobs.iter().enumerate() {
        preview_lines.push(Line::from(vec![
            Span::styled("██████ ", swatch_style(&blob.color)),
            Span::raw(format!(
                "{} at {:.0}%,{:.0}% size {:.0}% opacity {:.2}",
                blob.color, blob.x, blob.y, blob.size, blob.opacity
            )),
            Span::styled(
                format!("  [{}]", idx + 1),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    preview_lines.push(Line::default());
    preview_lines.push(Line::from(Span::styled(
        format!(
            "blur {}px, grain {}",
            config.blur,
            if config.noise { "on" } else { "off" }
        ),
        Style::default().fg(Color::Gray),
    )));
    let mut badges: Vec<Span> = Vec::new();
    if app.copied_css_at.is_some() {
        badges.push(Span::styled(
            "CSS copied ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if app.copied_html_at.is_some() {
        badges.push(Span::styled(
            "HTML copied ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if !badges.is_empty() {
        preview_lines.push(Line::from(badges));
    }

    let preview = Paragraph::new(preview_lines)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(Wrap { trim: true });
    f.render_widget(preview, preview_area);

    // Help / legend pane in bottom-right
    let selected_item = app.items.get(app.selected).copied();
    let mut help_lines = vec![
        Line::from(Span::styled(
            "Keys:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("↑/↓, j/k  Move cursor"),
        Line::from("Enter     Edit field / toggle"),
        Line::from("Space     Toggle grain"),
        Line::from("[ / ]     Prev/next category"),
        Line::from("r         Randomize layout"),
        Line::from("g         AI palette suggestion"),
        Line::from("c / y     Copy CSS / HTML"),
        Line::from("x         Reset (press twice)"),
        Line::from("q         Quit"),
    ];
    if let Some(item) = selected_item {
        help_lines.push(Line::default());
        help_lines.push(Line::from(Span::styled(
            field_type_hint(item),
            Style::default().fg(Color::Gray),
        )));
        help_lines.push(Line::from(Span::styled(
            help_text(item),
            Style::default().fg(Color::White),
        )));
    }
    let help_widget = Paragraph::new(help_lines)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    f.render_widget(help_widget, help_area);

    // Bottom status bar
    let status_text = match &app.mode {
        Mode::Navigate => format!(
            "{} mode • Enter edit • r randomize • g suggest • c/y copy • x reset • q quit",
            app.mode_name()
        ),
        Mode::Editing(_) => {
            format!("Editing: type, Enter save, Esc cancel | {}", app.input)
        }
    };
    let (message_text, message_style) = if let Some(msg) = &app.message {
        let style = match msg.kind {
            MessageKind::Info => Style::default().fg(Color::Gray),
            MessageKind::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            MessageKind::Error => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        };
        (msg.text.as_str(), style)
    } else {
        ("", Style::default().fg(Color::DarkGray))
    };
    let status_line =
        Line::from(Span::styled(status_text, Style::default().fg(Color::Gray)));
    let message_line =
        Line::from(Span::styled(message_text.to_string(), message_style));
    let bottom = Paragraph::new(vec![status_line, message_line])
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(bottom, vertical[1]);
}
