use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};

/// Handle a key event, dispatching on the focused panel.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global bindings that work in every focus state.
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.quit();
            return;
        }
        KeyCode::Char('s') if ctrl => {
            app.save_defaults();
            return;
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.focus {
        Focus::Tree => handle_tree_key(app, key),
        Focus::Diff => handle_diff_key(app, key),
        Focus::IncludeField | Focus::ExcludeField => handle_field_key(app, key),
    }
}

fn handle_tree_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Char('l') | KeyCode::Right => app.expand_selected(),
        KeyCode::Char('h') | KeyCode::Left => app.collapse_selected(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        _ => {}
    }
}

fn handle_diff_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => app.diff_scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.diff_scroll_up(1),
        _ => {}
    }
}

fn handle_field_key(app: &mut App, key: KeyEvent) {
    let now = Instant::now();
    match key.code {
        KeyCode::Esc => {
            app.focus = Focus::Tree;
            return;
        }
        _ => {}
    }
    let Some(field) = app.focused_field_mut() else {
        return;
    };
    match key.code {
        // Ctrl-chords are reserved for global bindings, never typed text.
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            field.insert_char(c);
            app.filter_edited(now);
        }
        KeyCode::Backspace => {
            field.delete_char();
            app.filter_edited(now);
        }
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.cursor_home(),
        KeyCode::End => field.cursor_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::entry::{ChangeType, FileEntry};
    use std::time::Duration;

    fn make_app(paths: &[&str]) -> App {
        let entries = paths
            .iter()
            .map(|p| FileEntry::new(*p, "", ChangeType::Modified))
            .collect();
        App::new(entries, AppConfig::default(), String::new(), String::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn q_quits_from_tree_focus() {
        let mut app = make_app(&["a.txt"]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn q_types_into_a_focused_field() {
        let mut app = make_app(&["a.txt"]);
        app.focus = Focus::ExcludeField;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.exclude_field.value, "q");
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = make_app(&["a.txt"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Diff);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Tree);
    }

    #[test]
    fn ctrl_chords_do_not_type_into_fields() {
        let mut app = make_app(&["a.txt"]);
        app.focus = Focus::IncludeField;
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.include_field.value, "");
    }

    #[test]
    fn esc_returns_from_field_to_tree() {
        let mut app = make_app(&["a.txt"]);
        app.focus = Focus::IncludeField;
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::Tree);
    }

    #[test]
    fn space_toggles_selected_row() {
        let mut app = make_app(&["a.txt"]);
        press(&mut app, KeyCode::Char('j')); // onto the file row
        press(&mut app, KeyCode::Char(' '));
        assert!(app.entries.is_hidden(0));
    }

    #[test]
    fn typed_filter_takes_effect_after_debounce() {
        let mut app = make_app(&["src/a.rs", "docs/b.md"]);
        app.focus = Focus::ExcludeField;
        for c in "docs".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(!app.entries.is_hidden(1));
        app.on_tick(Instant::now() + Duration::from_millis(250));
        assert!(app.entries.is_hidden(1));
    }

    #[test]
    fn help_overlay_swallows_tree_keys() {
        let mut app = make_app(&["a.txt"]);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.view.selected_index, 0);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
