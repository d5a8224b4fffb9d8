use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::form::MatchForm;
use crate::tui::app::{App, ConfirmAction, ConfirmState, FormPurpose, FormState, MessageKind, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::PageDown) => move_cursor(app, 10),
        (_, KeyCode::PageUp) => move_cursor(app, -10),
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.matches.len().saturating_sub(1);
        }

        // Actions
        (KeyModifiers::NONE, KeyCode::Char('a')) => open_add_form(app),
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => open_edit_form(app),
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Char('x')) | (_, KeyCode::Delete) => {
            request_delete(app)
        }
        (_, KeyCode::Char('D')) => request_delete_all(app),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    if app.matches.is_empty() {
        app.cursor = 0;
        return;
    }
    let max = app.matches.len() - 1;
    app.cursor = app.cursor.saturating_add_signed(delta).min(max);
}

pub(super) fn open_add_form(app: &mut App) {
    app.form_state = Some(FormState::new(FormPurpose::Add, MatchForm::empty()));
    app.mode = Mode::Form;
}

pub(super) fn open_edit_form(app: &mut App) {
    let index = match app.selected_index() {
        Some(i) => i,
        None => {
            app.show_message(
                MessageKind::Warning,
                "No Selection",
                "Please select a match to edit.",
            );
            return;
        }
    };
    let form = MatchForm::from_match(&app.matches[index]);
    app.form_state = Some(FormState::new(FormPurpose::Edit { index }, form));
    app.mode = Mode::Form;
}

pub(super) fn request_delete(app: &mut App) {
    let (index, title) = match app.selected_index() {
        Some(i) => (i, app.matches[i].title()),
        None => {
            app.show_message(
                MessageKind::Warning,
                "No Selection",
                "Please select a match to delete.",
            );
            return;
        }
    };
    app.confirm_state = Some(ConfirmState {
        title: "Confirm Delete".into(),
        prompt: format!("Delete {}?", title),
        action: ConfirmAction::DeleteMatch { index },
    });
    app.mode = Mode::Confirm;
}

pub(super) fn request_delete_all(app: &mut App) {
    if app.matches.is_empty() {
        app.show_message(
            MessageKind::Info,
            "No Matches",
            "There are no matches to delete.",
        );
        return;
    }
    app.confirm_state = Some(ConfirmState {
        title: "Confirm Delete All".into(),
        prompt: "This will delete ALL matches. Continue?".into(),
        action: ConfirmAction::DeleteAll,
    });
    app.mode = Mode::Confirm;
}
