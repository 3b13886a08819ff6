use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};
use tasksweep_core::Priority;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Task table
            Constraint::Length(3), // Input / status
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("TASKSWEEP")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, chunks[0]);

    draw_task_table(f, app, chunks[1]);
    draw_input_bar(f, app, chunks[2]);

    let help = match app.input_mode {
        InputMode::Normal => {
            "a: Add | Space: Complete | d: Delete | s: Sweep | j/k: Navigate | q: Quit"
        }
        InputMode::Adding => "Enter: Submit | Esc: Cancel | e.g. Pay rent due:2026-09-01 pri:h",
        InputMode::ConfirmDelete(_) => "y: Delete | n/Esc: Keep",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

fn draw_task_table(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|task| {
            let priority_style = match task.priority {
                Priority::High => Style::default().fg(Color::Red),
                Priority::Medium => Style::default().fg(Color::Yellow),
                Priority::Low => Style::default().fg(Color::Green),
            };

            let (status_str, base_style) = if task.completed {
                (
                    "✔ Completed",
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("☐ Pending", Style::default())
            };

            let due_str = task
                .due
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());

            let row = Row::new(vec![
                Span::raw(task.id.to_string()),
                Span::styled(task.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(task.description.clone()),
                Span::raw(due_str),
                Span::styled(task.priority.label(), priority_style),
                Span::raw(status_str),
            ])
            .style(base_style);

            // The task the sweep just finished gets a green flash.
            if app.highlight == Some(task.id) {
                row.style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),      // ID
            Constraint::Min(15),        // Title
            Constraint::Percentage(30), // Description
            Constraint::Length(10),     // Due
            Constraint::Length(8),      // Priority
            Constraint::Length(12),     // Status
        ],
    )
    .header(
        Row::new(vec!["ID", "Title", "Description", "Due", "Priority", "Status"])
            .style(Style::default().fg(Color::Yellow)),
    )
    .block(
        Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_input_bar(f: &mut Frame, app: &App, area: Rect) {
    match app.input_mode {
        InputMode::Adding => {
            let input = Paragraph::new(app.input.as_str()).block(
                Block::default()
                    .title(" New Task ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
            f.render_widget(input, area);

            let prefix: String = app.input.chars().take(app.cursor_position).collect();
            f.set_cursor_position((area.x + 1 + prefix.width() as u16, area.y + 1));

            // A validation error replaces the status line below the cursor.
            if let Some(status) = &app.status {
                let err = Paragraph::new(Line::from(Span::styled(
                    status.as_str(),
                    Style::default().fg(Color::Red),
                )))
                .alignment(Alignment::Right);
                let inner = Rect {
                    x: area.x + 1,
                    y: area.y + area.height.saturating_sub(1),
                    width: area.width.saturating_sub(2),
                    height: 1,
                };
                f.render_widget(err, inner);
            }
        }
        _ => {
            let (text, style) = match &app.status {
                Some(status) => (
                    status.as_str(),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                None if app.sweep.is_running() => (
                    "Sweeping...",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                None => ("", Style::default()),
            };
            let status_bar = Paragraph::new(Span::styled(text, style)).block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
            f.render_widget(status_bar, area);
        }
    }
}
