use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use reclami_core::{AppState, Column, Focus, Msg};

use super::ui::layout::ScreenLayout;

/// What the event loop should do with a terminal event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Dispatch(Msg),
    Quit,
}

/// Maps a terminal event onto a core message, given the current focus and screen layout.
pub fn map_event(event: &Event, state: &AppState, layout: &ScreenLayout) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, state),
        Event::Mouse(mouse) => map_mouse(mouse, layout).map(Action::Dispatch),
        Event::Paste(text) if state.focus() == Focus::Input => {
            let mut query = state.query().to_string();
            query.push_str(&text.replace(['\r', '\n'], " "));
            Some(Action::Dispatch(Msg::QueryChanged(query)))
        }
        _ => None,
    }
}

fn map_key(key: &KeyEvent, state: &AppState) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::Dispatch(Msg::FocusNext)),
        KeyCode::BackTab => return Some(Action::Dispatch(Msg::FocusPrev)),
        _ => {}
    }

    let msg = match state.focus() {
        Focus::Input => map_input_key(key, state.query(), ctrl)?,
        Focus::SearchButton => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Msg::SearchSubmitted,
            _ => return None,
        },
        Focus::Table => map_table_key(key.code)?,
    };
    Some(Action::Dispatch(msg))
}

fn map_input_key(key: &KeyEvent, query: &str, ctrl: bool) -> Option<Msg> {
    match key.code {
        KeyCode::Enter => Some(Msg::SearchSubmitted),
        KeyCode::Char('u') if ctrl => Some(Msg::QueryChanged(String::new())),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => {
            let mut next = query.to_string();
            next.push(ch);
            Some(Msg::QueryChanged(next))
        }
        KeyCode::Backspace => {
            let mut next = query.to_string();
            next.pop()?;
            Some(Msg::QueryChanged(next))
        }
        _ => None,
    }
}

fn map_table_key(code: KeyCode) -> Option<Msg> {
    let msg = match code {
        KeyCode::Down | KeyCode::Char('j') => Msg::SelectNextRow,
        KeyCode::Up | KeyCode::Char('k') => Msg::SelectPrevRow,
        KeyCode::Right | KeyCode::PageDown => Msg::NextPage,
        KeyCode::Left | KeyCode::PageUp => Msg::PrevPage,
        KeyCode::Char('s') => Msg::CyclePageSize,
        KeyCode::Char(digit @ '1'..='6') => {
            let index = digit.to_digit(10)? as usize - 1;
            Msg::SortToggled(Column::from_index(index)?)
        }
        _ => return None,
    };
    Some(msg)
}

fn map_mouse(mouse: &MouseEvent, layout: &ScreenLayout) -> Option<Msg> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let position = Position::new(mouse.column, mouse.row);
    if layout.button.contains(position) {
        Some(Msg::SearchSubmitted)
    } else if layout.input.contains(position) {
        Some(Msg::FocusChanged(Focus::Input))
    } else if layout.table.contains(position) {
        Some(Msg::FocusChanged(Focus::Table))
    } else {
        None
    }
}
