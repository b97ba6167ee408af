//! Demo host for the tagline editor.
//!
//! Owns the authoritative tag sequence, applies the editor's `Add`/`Delete`
//! events, and shows the resulting sequence. Run with `--allow-new` to permit
//! free-text tags.

use std::io;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tracing::info;

use tagline::ui::{self, HitMap};
use tagline::{EditorConfig, EditorEvent, Result, Settings, Tag, TagEditor, TagKind};

/// Command-line options for the demo.
#[derive(Debug, Parser)]
#[command(name = "tagline-demo", about = "Editable tag-list input demo")]
struct Cli {
    /// Permit synthesizing tags from free text.
    #[arg(long)]
    allow_new: bool,

    /// Commit the pending query when the editor loses focus.
    #[arg(long)]
    add_on_blur: bool,

    /// Path to a settings file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

/// The demo application: the external owner of the tag sequence.
struct DemoApp {
    tags: Vec<Tag>,
    pool: Vec<Tag>,
    editor: TagEditor,
    hits: HitMap,
    should_quit: bool,
}

impl DemoApp {
    fn new(config: EditorConfig) -> Result<Self> {
        let tags = vec![
            Tag::with_id("184", "Belgium"),
            Tag::with_id("86", "Hungary"),
        ];
        let editor = TagEditor::new(config, &tags)?;
        Ok(Self {
            tags,
            pool: country_pool(),
            editor,
            hits: HitMap::default(),
            should_quit: false,
        })
    }

    /// Apply editor events to the authoritative sequence.
    fn apply(&mut self, events: Vec<EditorEvent>) {
        for event in events {
            match event {
                EditorEvent::Add { tag, position } => {
                    let position = position.min(self.tags.len());
                    info!(name = %tag.name, position, "host inserting tag");
                    self.tags.insert(position, tag);
                }
                EditorEvent::Delete { position } => {
                    if position < self.tags.len() {
                        info!(position, "host removing tag");
                        self.tags.remove(position);
                    }
                }
                EditorEvent::InputChanged(query) => {
                    info!(%query, "query changed");
                }
                EditorEvent::DelimiterTriggered { ch, cursor } => {
                    info!(%ch, cursor, "delimiter triggered");
                }
                EditorEvent::Focused | EditorEvent::Blurred => {}
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,
            (KeyCode::Esc, _) => {
                if self.editor.is_focused() {
                    let events = self.editor.blur(&self.pool);
                    self.apply(events);
                } else {
                    self.should_quit = true;
                }
            }
            _ => {
                if !self.editor.is_focused() {
                    let events = self.editor.focus();
                    self.apply(events);
                }
                let events = self.editor.handle_key(key, &self.tags, &self.pool);
                self.apply(events);
            }
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(index) = self.hits.suggestion_at(mouse.column, mouse.row) {
            // Adding from a click must not blur the edit point.
            let events = self.editor.click_suggestion(index, &self.pool);
            self.apply(events);
        } else if self.hits.container_contains(mouse.column, mouse.row) {
            if !self.editor.is_focused() {
                let events = self.editor.focus();
                self.apply(events);
            }
        } else if self.editor.is_focused() {
            let events = self.editor.blur(&self.pool);
            self.apply(events);
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(6),
            ])
            .split(frame.area());

        let help = Paragraph::new(
            "Type to search, Tab/Enter to add, Backspace to remove, arrows to move. Esc to blur/quit.",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[0]);

        self.hits = ui::render(frame, chunks[1], &self.editor, &self.tags);

        let output: Vec<Line> = self
            .tags
            .iter()
            .map(|tag| Line::from(format!("- {}", tag.name)))
            .collect();
        let output = Paragraph::new(output).block(
            Block::default()
                .title(" Sequence ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(output, chunks[2]);
    }
}

/// A small suggestion pool in the spirit of the country picker demo.
fn country_pool() -> Vec<Tag> {
    let countries = [
        "Austria",
        "Belgium",
        "France",
        "Germany",
        "Hungary",
        "Netherlands",
        "New Zealand",
        "San Marino",
        "Spain",
        "Sweden",
        "Switzerland",
        "United Kingdom",
    ];
    let mut pool: Vec<Tag> = countries.iter().copied().map(Tag::new).collect();
    pool.push(Tag::new("Europe").kind(TagKind::Group));
    pool.push(Tag::new("Eurozone").kind(TagKind::Group));
    pool
}

fn run(mut app: DemoApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DemoApp,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.draw(frame))?;

        match event::read()? {
            Event::Key(key) => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tagline::logging::init()?;

    let settings_path = cli
        .config
        .or_else(Settings::default_path)
        .context("could not determine a settings path")?;
    let settings = Settings::load_or_default(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;

    let mut config = settings.editor_config()?;
    config.allow_new |= cli.allow_new;
    config.add_on_blur |= cli.add_on_blur;
    if config.no_suggestions_text.is_none() {
        config.no_suggestions_text = Some("No suggestions found".to_string());
    }

    let app = DemoApp::new(config)?;
    let result = run(app);
    info!("tagline demo shutting down");
    Ok(result?)
}
