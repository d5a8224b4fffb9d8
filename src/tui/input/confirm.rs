use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::fixture_ops;
use crate::tui::app::{App, ConfirmAction, MessageKind, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('y' | 'Y')) => {
            let state = app.confirm_state.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                match state.action {
                    ConfirmAction::DeleteMatch { index } => confirm_delete_match(app, index),
                    ConfirmAction::DeleteAll => confirm_delete_all(app),
                }
            }
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('n' | 'N')) | (_, KeyCode::Esc) => {
            app.confirm_state = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_delete_match(app: &mut App, index: usize) {
    match fixture_ops::remove_match(&app.store, &mut app.matches, index) {
        Ok(removed) => {
            app.clamp_cursor();
            app.status_message = Some(format!("deleted {}", removed.title()));
            app.show_message(MessageKind::Info, "Deleted", "Match deleted successfully!");
        }
        Err(e) => app.show_message(MessageKind::Error, "Delete Failed", e.to_string()),
    }
}

fn confirm_delete_all(app: &mut App) {
    match fixture_ops::clear_matches(&app.store, &mut app.matches) {
        Ok(count) => {
            app.clamp_cursor();
            app.scroll_offset = 0;
            app.status_message = Some(format!(
                "deleted {} match{}",
                count,
                if count == 1 { "" } else { "es" }
            ));
            app.show_message(
                MessageKind::Info,
                "Deleted",
                "All matches deleted successfully!",
            );
        }
        Err(e) => app.show_message(MessageKind::Error, "Delete Failed", e.to_string()),
    }
}
