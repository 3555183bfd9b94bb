use ratatui::layout::{Alignment, Constraint, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;
use reclami_core::{AppViewModel, Column, Focus, PageSize, SortDirection};

use super::constants::*;
use super::layout::screen_layout;

/// Draws the whole screen from the view model. Holds no state of its own.
pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let layout = screen_layout(frame.area());

    frame.render_widget(
        Paragraph::new(Line::styled(
            TITLE,
            Style::new().add_modifier(Modifier::BOLD),
        )),
        layout.title,
    );
    render_input(frame, layout.input, view);
    render_button(frame, layout.button, view);
    render_status(frame, layout.status, view);
    render_table(frame, layout.table, view);
    render_footer(frame, layout.footer, view);
    frame.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::new().fg(Color::DarkGray)),
        layout.hints,
    );
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::new().fg(Color::Cyan)
    } else {
        Style::new().fg(Color::DarkGray)
    }
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let focused = view.focus == Focus::Input;
    let inner_width = area.width.saturating_sub(2);
    let text_width = u16::try_from(Line::raw(view.query.as_str()).width()).unwrap_or(u16::MAX);
    // Keep the end of the text, where the cursor lives, in view.
    let offset = text_width.saturating_sub(inner_width.saturating_sub(1));

    let input = Paragraph::new(view.query.as_str())
        .scroll((0, offset))
        .block(
            Block::bordered()
                .title(INPUT_LABEL)
                .border_style(border_style(focused)),
        );
    frame.render_widget(input, area);

    if focused && area.width > 2 && area.height > 2 {
        frame.set_cursor_position(Position::new(
            area.x + 1 + (text_width - offset),
            area.y + 1,
        ));
    }
}

fn render_button(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let focused = view.focus == Focus::SearchButton;
    let label_style = if focused {
        Style::new().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::new().add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::styled(BUTTON_LABEL, label_style))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(border_style(focused)));
    frame.render_widget(button, area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let line = if view.loading {
        Line::styled(LOADING_TEXT, Style::new().fg(Color::Yellow))
    } else if let Some(error) = &view.error {
        Line::styled(error.as_str(), Style::new().fg(Color::Red))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn header_title(column: Column, sort: Option<(Column, SortDirection)>) -> String {
    match sort {
        Some((sorted, SortDirection::Ascending)) if sorted == column => {
            format!("{} ▲", column_title(column))
        }
        Some((sorted, SortDirection::Descending)) if sorted == column => {
            format!("{} ▼", column_title(column))
        }
        _ => column_title(column).to_string(),
    }
}

fn render_table(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let focused = view.focus == Focus::Table;
    let mut block = Block::bordered().border_style(border_style(focused));
    let inner = block.inner(area);

    let header = Row::new(Column::ALL.map(|column| Cell::from(header_title(column, view.sort))))
        .style(
            Style::new()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Black)
                .bg(Color::Rgb(0xf5, 0xf5, 0xf5)),
        );
    let rows = view
        .rows
        .iter()
        .map(|row| Row::new(Column::ALL.map(|column| Cell::from(row.cell(column)))));

    let selected = if focused { view.selected } else { None };
    // One line of the inner area belongs to the header.
    let capacity = usize::from(inner.height.saturating_sub(1));
    let offset = match selected {
        Some(index) if capacity > 0 && index >= capacity => index + 1 - capacity,
        _ => 0,
    };
    let hidden_below = view.rows.len().saturating_sub(offset + capacity);

    if let Some(hint) = scroll_hint(offset, hidden_below, focused) {
        block = block.title_bottom(Line::from(hint).right_aligned());
    }

    let table = Table::new(rows, COLUMN_WEIGHTS.map(Constraint::Fill))
        .header(header)
        .block(block)
        .row_highlight_style(Style::new().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default()
        .with_offset(offset)
        .with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);

    if view.rows.is_empty() {
        let overlay = if view.loading { LOADING_TEXT } else { NO_ROWS_TEXT };
        let body = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1).min(1),
            ..inner
        };
        frame.render_widget(
            Paragraph::new(overlay)
                .alignment(Alignment::Center)
                .style(Style::new().fg(Color::DarkGray)),
            body,
        );
    }
}

/// Tells how many rows of the page are scrolled out of the table area.
fn scroll_hint(hidden_above: usize, hidden_below: usize, focused: bool) -> Option<String> {
    let hint = match (hidden_above, hidden_below) {
        (0, 0) => return None,
        (above, 0) => format!(" ↑ {above} more "),
        (0, below) => format!(" ↓ {below} more "),
        (above, below) => format!(" ↑ {above} · ↓ {below} more "),
    };
    if focused {
        Some(hint)
    } else {
        Some(format!("{hint}({SCROLL_HINT}) "))
    }
}

fn arrow_style(enabled: bool) -> Style {
    if enabled {
        Style::new().add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(Color::DarkGray)
    }
}

fn render_footer(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut spans = vec![Span::raw(ROWS_PER_PAGE_LABEL), Span::raw(" ")];
    for size in PageSize::ALL {
        let label = format!(" {} ", size.rows());
        if size == view.page_size {
            spans.push(Span::styled(label, Style::new().add_modifier(Modifier::REVERSED)));
        } else {
            spans.push(Span::raw(label));
        }
    }
    spans.push(Span::raw(format!(
        "   {}–{} of {}   ",
        view.first_row, view.last_row, view.total_rows
    )));
    spans.push(Span::styled("◀", arrow_style(view.has_prev_page())));
    spans.push(Span::raw(" "));
    spans.push(Span::styled("▶", arrow_style(view.has_next_page())));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        area,
    );
}
