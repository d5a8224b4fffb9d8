use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::form::{FormError, FormField};
use crate::ops::fixture_ops;
use crate::ops::validate::DATE_EXAMPLE;
use crate::tui::app::{App, FormPurpose, FormState, MessageKind, Mode};
use crate::util::unicode;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let fs = match &mut app.form_state {
        Some(fs) => fs,
        None => {
            app.mode = Mode::Navigate;
            return;
        }
    };

    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.form_state = None;
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => submit_form(app),

        // Field focus
        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            let next = fs.focus.next();
            fs.focus_field(next);
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            let prev = fs.focus.prev();
            fs.focus_field(prev);
        }

        // Cursor movement
        (_, KeyCode::Left) => {
            if let Some(pos) = unicode::prev_grapheme_boundary(fs.form.get(fs.focus), fs.cursor) {
                fs.cursor = pos;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(pos) = unicode::next_grapheme_boundary(fs.form.get(fs.focus), fs.cursor) {
                fs.cursor = pos;
            }
        }
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => {
            fs.cursor = 0;
        }
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            fs.cursor = fs.form.get(fs.focus).len();
        }

        // Editing
        (_, KeyCode::Backspace) => delete_before_cursor(fs),
        (_, KeyCode::Delete) => delete_at_cursor(fs),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            fs.form.set(fs.focus, String::new());
            fs.cursor = 0;
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => insert_char(fs, c),
        _ => {}
    }
}

fn insert_char(fs: &mut FormState, c: char) {
    let mut text = fs.form.get(fs.focus).to_string();
    let at = fs.cursor.min(text.len());
    text.insert(at, c);
    fs.form.set(fs.focus, text);
    fs.cursor = at + c.len_utf8();
}

fn delete_before_cursor(fs: &mut FormState) {
    let mut text = fs.form.get(fs.focus).to_string();
    let end = fs.cursor.min(text.len());
    if let Some(start) = unicode::prev_grapheme_boundary(&text, end) {
        text.replace_range(start..end, "");
        fs.form.set(fs.focus, text);
        fs.cursor = start;
    }
}

fn delete_at_cursor(fs: &mut FormState) {
    let mut text = fs.form.get(fs.focus).to_string();
    let start = fs.cursor.min(text.len());
    if let Some(end) = unicode::next_grapheme_boundary(&text, start) {
        text.replace_range(start..end, "");
        fs.form.set(fs.focus, text);
    }
}

/// Validate the form and apply it. On any failure the form stays open with
/// what the user typed.
fn submit_form(app: &mut App) {
    let (purpose, validated) = match &app.form_state {
        Some(fs) => (fs.purpose, fs.form.validate()),
        None => return,
    };

    let m = match validated {
        Ok(m) => m,
        Err(FormError::InvalidDate { .. }) => {
            if let Some(fs) = &mut app.form_state {
                fs.focus_field(FormField::FixtureDate);
            }
            app.show_message(
                MessageKind::Error,
                "Invalid Date",
                format!(
                    "Please enter the date in ddmmyyyy format (e.g., {}).",
                    DATE_EXAMPLE
                ),
            );
            return;
        }
    };

    let title = m.title();
    let result = match purpose {
        FormPurpose::Add => fixture_ops::add_match(&app.store, &mut app.matches, m)
            .map(|()| (app.matches.len() - 1, "Match added successfully!", "added")),
        FormPurpose::Edit { index } => {
            fixture_ops::replace_match(&app.store, &mut app.matches, index, m)
                .map(|()| (index, "Match updated successfully!", "updated"))
        }
    };

    match result {
        Ok((row, body, verb)) => {
            app.form_state = None;
            app.mode = Mode::Navigate;
            app.cursor = row;
            app.status_message = Some(format!("{} {}", verb, title));
            app.show_message(MessageKind::Info, "Success", body);
        }
        Err(e) => {
            app.show_message(MessageKind::Error, "Save Failed", e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MatchStore;
    use crate::model::config::UiConfig;
    use crate::model::form::MatchForm;

    fn app_in_form() -> App {
        let mut app = App::with_matches(
            MatchStore::new("/nonexistent/matches.json"),
            Vec::new(),
            &UiConfig::default(),
        );
        app.form_state = Some(FormState::new(FormPurpose::Add, MatchForm::empty()));
        app.mode = Mode::Form;
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_form(app, key(KeyCode::Char(c)));
        }
    }

    fn fs(app: &App) -> &FormState {
        app.form_state.as_ref().unwrap()
    }

    #[test]
    fn typing_updates_logo_live() {
        let mut app = app_in_form();
        type_str(&mut app, "Real Madrid");
        assert_eq!(fs(&app).form.home_team, "Real Madrid");
        assert_eq!(fs(&app).form.home_logo, "/logos/Real_Madrid.png");
        assert_eq!(fs(&app).cursor, "Real Madrid".len());
    }

    #[test]
    fn cursor_editing_mid_field() {
        let mut app = app_in_form();
        type_str(&mut app, "Kln");
        handle_form(&mut app, key(KeyCode::Left));
        handle_form(&mut app, key(KeyCode::Left));
        type_str(&mut app, "ö");
        assert_eq!(fs(&app).form.home_team, "Köln");

        handle_form(&mut app, key(KeyCode::Home));
        handle_form(&mut app, key(KeyCode::Delete));
        assert_eq!(fs(&app).form.home_team, "öln");

        handle_form(&mut app, key(KeyCode::End));
        handle_form(&mut app, key(KeyCode::Backspace));
        assert_eq!(fs(&app).form.home_team, "öl");
        assert_eq!(fs(&app).cursor, "öl".len());
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut app = app_in_form();
        handle_form(&mut app, key(KeyCode::Backspace));
        assert_eq!(fs(&app).form.home_team, "");
        assert_eq!(fs(&app).cursor, 0);
    }

    #[test]
    fn tab_cycles_fields() {
        let mut app = app_in_form();
        handle_form(&mut app, key(KeyCode::Tab));
        assert_eq!(fs(&app).focus, FormField::AwayTeam);
        handle_form(&mut app, key(KeyCode::BackTab));
        handle_form(&mut app, key(KeyCode::BackTab));
        assert_eq!(fs(&app).focus, FormField::AwayLogo);
    }

    #[test]
    fn typed_logo_is_not_overwritten() {
        let mut app = app_in_form();
        type_str(&mut app, "Ajax");
        for _ in 0..5 {
            handle_form(&mut app, key(KeyCode::Tab));
        }
        assert_eq!(fs(&app).focus, FormField::HomeLogo);
        handle_form(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        type_str(&mut app, "/img/ajax.svg");
        assert!(fs(&app).form.home_logo_touched);

        handle_form(&mut app, key(KeyCode::Tab));
        handle_form(&mut app, key(KeyCode::Tab));
        type_str(&mut app, " Amsterdam");
        assert_eq!(fs(&app).form.home_team, "Ajax Amsterdam");
        assert_eq!(fs(&app).form.home_logo, "/img/ajax.svg");
    }

    #[test]
    fn escape_discards_form() {
        let mut app = app_in_form();
        type_str(&mut app, "Ajax");
        handle_form(&mut app, key(KeyCode::Esc));
        assert!(app.form_state.is_none());
        assert_eq!(app.mode, Mode::Navigate);
    }
}
