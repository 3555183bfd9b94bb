use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::BUTTON_WIDTH;

/// Screen regions, top to bottom. Shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub button: Rect,
    pub status: Rect,
    pub table: Rect,
    pub footer: Rect,
    pub hints: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [title, search, status, table, footer, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let [input, button] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(BUTTON_WIDTH)])
            .spacing(1)
            .areas(search);

    ScreenLayout {
        title,
        input,
        button,
        status,
        table,
        footer,
        hints,
    }
}
