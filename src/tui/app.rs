use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::io::store::MatchStore;
use crate::model::config::UiConfig;
use crate::model::fixture::Match;
use crate::model::form::{FormField, MatchForm};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// The add/edit form is open
    Form,
    /// A yes/no confirmation is pending
    Confirm,
}

/// What a submitted form does with its match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPurpose {
    Add,
    Edit { index: usize },
}

/// State of the open add/edit form
#[derive(Debug, Clone)]
pub struct FormState {
    pub purpose: FormPurpose,
    pub form: MatchForm,
    /// Field receiving keystrokes
    pub focus: FormField,
    /// Byte offset of the cursor within the focused field
    pub cursor: usize,
}

impl FormState {
    pub fn new(purpose: FormPurpose, form: MatchForm) -> Self {
        let cursor = form.get(FormField::HomeTeam).len();
        FormState {
            purpose,
            form,
            focus: FormField::HomeTeam,
            cursor,
        }
    }

    /// Move focus to `field`, cursor at the end of its text
    pub fn focus_field(&mut self, field: FormField) {
        self.focus = field;
        self.cursor = self.form.get(field).len();
    }

    pub fn title(&self) -> &'static str {
        match self.purpose {
            FormPurpose::Add => "Add Match",
            FormPurpose::Edit { .. } => "Edit Match",
        }
    }
}

/// Action awaiting a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteMatch { index: usize },
    DeleteAll,
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: String,
    pub prompt: String,
    pub action: ConfirmAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// A blocking message popup. Any dismiss key returns to the mode underneath.
#[derive(Debug, Clone)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub body: String,
}

/// Main application state
pub struct App {
    pub store: MatchStore,
    pub matches: Vec<Match>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Selected row (index into `matches`)
    pub cursor: usize,
    /// First visible row of the table
    pub scroll_offset: usize,
    pub form_state: Option<FormState>,
    pub confirm_state: Option<ConfirmState>,
    pub message: Option<Message>,
    /// Help overlay visible
    pub show_help: bool,
    /// Last outcome, shown in the status row
    pub status_message: Option<String>,
}

impl App {
    /// Load the match list from `store` and build the initial state. A file
    /// that cannot be read starts the list empty behind a warning, since the
    /// next save replaces it.
    pub fn new(store: MatchStore, ui: &UiConfig) -> Self {
        match store.try_load() {
            Ok(matches) => Self::with_matches(store, matches.unwrap_or_default(), ui),
            Err(e) => {
                warn!(error = %e, "starting with an empty match list");
                let mut app = Self::with_matches(store, Vec::new(), ui);
                app.show_message(
                    MessageKind::Warning,
                    "Unreadable File",
                    format!("{}. Saving a match will replace it.", e),
                );
                app
            }
        }
    }

    pub fn with_matches(store: MatchStore, matches: Vec<Match>, ui: &UiConfig) -> Self {
        App {
            store,
            matches,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(ui),
            show_key_hints: ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            form_state: None,
            confirm_state: None,
            message: None,
            show_help: false,
            status_message: None,
        }
    }

    /// Index of the selected row, or None when the list is empty
    pub fn selected_index(&self) -> Option<usize> {
        if self.matches.is_empty() {
            None
        } else {
            Some(self.cursor.min(self.matches.len() - 1))
        }
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.selected_index().map(|i| &self.matches[i])
    }

    /// Keep the cursor on a valid row after the list shrinks
    pub fn clamp_cursor(&mut self) {
        if self.matches.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.matches.len() - 1);
        }
    }

    pub fn show_message(&mut self, kind: MessageKind, title: &str, body: impl Into<String>) {
        self.message = Some(Message {
            kind,
            title: title.to_string(),
            body: body.into(),
        });
    }
}

/// Run the TUI application
pub fn run(store: MatchStore, ui: &UiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(store, ui);
    info!(path = %app.store.path().display(), count = app.matches.len(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
