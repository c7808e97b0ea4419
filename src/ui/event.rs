use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, InputMode, Tab};

/// Applies one key press to the app. Returns `true` when the user asked to quit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    // Ctrl-C quits from any mode; other control chords are ignored.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return key.code == KeyCode::Char('c');
    }

    match app.input_mode {
        InputMode::Normal => {
            app.status = None;
            handle_normal_key(app, key.code)
        }
        InputMode::Searching | InputMode::Prompting => {
            match key.code {
                KeyCode::Enter => app.submit_input(),
                KeyCode::Esc => app.cancel_input(),
                KeyCode::Backspace => app.handle_backspace(),
                KeyCode::Char(c) => app.handle_input(c),
                _ => {}
            }
            false
        }
    }
}

fn handle_normal_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.set_tab(Tab::NAV[index]);
        }
        KeyCode::Esc => app.go_back(),
        KeyCode::Up => app.previous(),
        KeyCode::Down => app.next(),
        code => handle_tab_key(app, code),
    }
    false
}

fn handle_tab_key(app: &mut App, code: KeyCode) {
    match (app.active_tab, code) {
        (Tab::Home, KeyCode::Left) => app.move_category(-1),
        (Tab::Home, KeyCode::Right) => app.move_category(1),
        (Tab::Home, KeyCode::Enter) => app.open_selected_category(),
        (Tab::Home, KeyCode::Char('e')) => app.set_tab(Tab::Expenses),
        (Tab::Home | Tab::Catalog, KeyCode::Char('/')) => app.start_search(),

        (Tab::Catalog, KeyCode::Backspace) => app.go_back(),
        (Tab::Catalog, KeyCode::Char('s')) => app.cycle_stock_filter(),
        (Tab::Catalog, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('f')) => {
            app.toggle_selected_favorite()
        }

        (Tab::Expenses, KeyCode::Backspace) => app.go_back(),
        (Tab::Expenses, KeyCode::Char('a')) => app.add_expense(),

        (Tab::Favorites, KeyCode::Enter) if app.favorites.is_empty() => app.set_tab(Tab::Catalog),
        (Tab::Favorites, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('f')) => {
            app.toggle_selected_favorite()
        }

        (Tab::Ai, KeyCode::Char('i') | KeyCode::Enter) => app.start_prompt(),
        (Tab::Ai, KeyCode::Char('g')) => app.generate(),

        (Tab::Profile, KeyCode::Enter) => app.open_menu_item(),
        (Tab::Profile, KeyCode::Char('l')) => app.logout(),
        _ => {}
    }
}
