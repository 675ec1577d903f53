// UI module for rendering the TUI.
// Header bar, row list, status bar, and help overlay.

mod list;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::StatusLevel;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    app.list_area = chunks[1];
    list::render_rows(frame, &mut app.screen, chunks[1]);

    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Title on the left, shuffle action on the right.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Span::styled(
        format!(" {}", app.title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, inner);

    let action = Paragraph::new(Line::from(vec![
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::styled(" Shuffle ", Style::default().fg(Color::White)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(action, inner);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => {
            let color = match status.level {
                StatusLevel::Info => Color::White,
                StatusLevel::Warn => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(Span::styled(
                format!(" {}", status.display()),
                Style::default().fg(color),
            ))
        }
        None => Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
            Span::styled("s", Style::default().fg(Color::Yellow)),
            Span::styled(" shuffle  ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" help  ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let width = 44u16.min(area.width);
    let height = 13u16.min(area.height);
    let modal_area = Rect::new(
        area.width.saturating_sub(width) / 2,
        area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let bindings = [
        ("↑/k ↓/j", "Move cursor"),
        ("PgUp PgDn", "Move one page"),
        ("g/Home G/End", "First / last row"),
        ("Enter/Space", "Select row"),
        ("Click", "Select row"),
        ("s", "Shuffle rows"),
        ("?", "Toggle help"),
        ("q/Esc", "Quit"),
    ];
    let mut lines: Vec<Line> = bindings
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<14}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*desc),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " Selecting a row moves it to the top",
        Style::default().fg(Color::DarkGray),
    ));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help "),
    );
    frame.render_widget(help, modal_area);
}
