// Row list rendering.
// Numbered rows with a checkmark column and the move-to-front highlight.

use std::time::Instant;

use ratatui::{prelude::*, widgets::*};

use crate::state::{ListScreen, Row};

/// Build the list item for one row.
fn row_item(row: &Row, selected: bool, highlighted: bool) -> ListItem<'static> {
    let check = if selected {
        Span::styled(" ✓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::raw("  ")
    };
    let label = Span::styled(
        format!("{:>3}", row.value),
        Style::default().fg(Color::White),
    );

    let item = ListItem::new(Line::from(vec![Span::raw(" "), label, check]));
    if highlighted {
        item.style(Style::default().bg(Color::Blue))
    } else {
        item
    }
}

/// Render the rows of the screen.
pub fn render_rows(frame: &mut Frame, screen: &mut ListScreen, area: Rect) {
    let now = Instant::now();
    let items: Vec<ListItem> = screen
        .rows
        .rows()
        .iter()
        .map(|row| {
            row_item(
                row,
                screen.rows.is_selected(row.id),
                screen.is_highlighted(row.id, now),
            )
        })
        .collect();

    let selected_count = screen.rows.selected_ids().len();
    let title = format!(" Rows ({}, {} selected) ", screen.rows.len(), selected_count);

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut screen.list_state);
}
