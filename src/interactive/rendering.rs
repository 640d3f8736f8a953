//! TUI rendering with ratatui
//!
//! The 6×5 grid on the left, letter summary and messages on the right.

use super::app::{App, MessageStyle};
use crate::core::{Cell, MAX_ROWS, Verdict};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(15),    // Main content
            Constraint::Length(3),  // Prompt
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Grid
            Constraint::Percentage(55), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDIE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    let base = match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::Red),
        Verdict::Unevaluated => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    base.add_modifier(Modifier::BOLD)
}

fn tile(cell: &Cell) -> Span<'static> {
    match cell.letter() {
        Some(letter) => Span::styled(format!(" {letter} "), verdict_style(cell.verdict())),
        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.controller.session().grid();
    let accepting = app.controller.phase() == GameStatus::InProgress;

    let mut lines = Vec::with_capacity(MAX_ROWS * 2);
    for (i, row) in grid.rows().iter().enumerate() {
        let marker = if accepting && i + 1 == grid.current_row() {
            Span::styled("▶ ", Style::default().fg(Color::Cyan))
        } else {
            Span::raw("  ")
        };

        let mut spans = vec![marker];
        for cell in row.cells() {
            spans.push(tile(cell));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.letter_summary();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| match summary.get(&letter) {
                    Some(&verdict) if verdict != Verdict::Unevaluated => {
                        Span::styled(format!("{letter} "), verdict_style(verdict))
                    }
                    _ => Span::raw(format!("{letter} ")),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.controller.session().attempts();
    let percent = (attempts * 100 / MAX_ROWS) as u16;

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{attempts}/{MAX_ROWS}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.controller.phase() {
        GameStatus::AwaitingWord if app.controller.is_fetch_pending() => (
            " Fetching word... ",
            String::new(),
            Color::DarkGray,
        ),
        GameStatus::AwaitingWord => (
            " No word loaded | F5 to try again ",
            app.controller.session().grid().active_row().text(),
            Color::Red,
        ),
        GameStatus::InProgress => (
            " Type your guess | Backspace to erase | F5 new word | Esc to quit ",
            app.controller.session().grid().active_row().text(),
            Color::Yellow,
        ),
        GameStatus::Won => (
            " 🎉 CONGRATULATIONS! 🎉 | Enter or 'n' to play again, 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        GameStatus::Lost => (
            " GAME OVER | Enter or 'n' to play again, 'q' to quit ",
            app.controller
                .session()
                .terminal_message()
                .unwrap_or_default(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Status: {}", app.controller.phase()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let row = Paragraph::new(format!(
        "Row: {}/{MAX_ROWS}",
        app.controller.session().grid().current_row()
    ))
    .alignment(Alignment::Center);
    f.render_widget(row, chunks[1]);

    let fetch_text = if app.controller.is_fetch_pending() {
        "⏳ fetching"
    } else {
        "Esc: Quit"
    };
    let fetch = Paragraph::new(fetch_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(fetch, chunks[2]);
}
