//! TUI rendering with ratatui
//!
//! Board, score/timer panels and outcome popups.

use super::app::{App, Screen};
use crate::core::CellColor;
use crate::engine::{COLS, ROWS, STREAK_TARGET};
use crate::output::formatters::format_clock;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + side panels
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // Score
            Constraint::Percentage(50), // Board
            Constraint::Percentage(25), // Timer
        ])
        .split(chunks[1]);

    render_score_panel(f, app, main_chunks[0]);
    render_board(f, app, main_chunks[1]);
    render_timer_panel(f, app, main_chunks[2]);

    render_status(f, app, chunks[2]);

    match app.screen {
        Screen::Start => render_start_popup(f),
        Screen::RoundWon => {
            render_outcome_popup(f, app, "CONGRATS", "You got the word", "Next Word", Color::Green);
        }
        Screen::RoundLost => {
            render_outcome_popup(
                f,
                app,
                "OH NO!",
                "The correct word is",
                "Next Word",
                Color::Red,
            );
        }
        Screen::GameWon => {
            render_outcome_popup(
                f,
                app,
                "YOU WON!",
                "You got the word",
                "Play Again",
                Color::Yellow,
            );
        }
        Screen::GameLost => {
            render_outcome_popup(
                f,
                app,
                "GAME OVER!",
                "The correct word is",
                "Play Again",
                Color::Red,
            );
        }
        Screen::Playing => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE RUSH - Guess the 5-letter word")
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

const fn cell_style(color: CellColor) -> Style {
    match color {
        CellColor::Green => Style::new().fg(Color::Black).bg(Color::Green),
        CellColor::Yellow => Style::new().fg(Color::Black).bg(Color::Yellow),
        CellColor::Neutral => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(ROWS * 2);

    for row in 0..ROWS {
        let mut spans = Vec::with_capacity(COLS * 2);
        for col in 0..COLS {
            let cell = app.engine.grid().cell(row, col);
            let letter = cell.letter().map_or(' ', |c| c.to_ascii_uppercase());

            let mut style = cell_style(cell.color());
            if app.screen == Screen::Playing && app.focus == (row, col) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::raw(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_score_panel(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::raw(""),
        Line::styled(
            format!("{}", app.engine.score()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::from(format!("Streak {}/{STREAK_TARGET}", app.engine.win_streak()))
            .alignment(Alignment::Center),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(panel, area);
}

fn render_timer_panel(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.countdown.remaining();
    let clock_style = if remaining <= 30 && app.countdown.is_running() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    let content = vec![
        Line::raw(""),
        Line::styled(format_clock(remaining), clock_style).alignment(Alignment::Center),
    ];

    let panel = Paragraph::new(content).block(
        Block::default()
            .title(" Timer ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(panel, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(status) = &app.status {
        status.clone()
    } else {
        match app.screen {
            Screen::Start => "Enter: start | q: quit".to_string(),
            Screen::Playing => "Type letters to fill the row | Esc: quit".to_string(),
            _ => "Enter: continue | q: quit".to_string(),
        }
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(status, area);
}

fn render_start_popup(f: &mut Frame) {
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::styled(
            "WORDLE RUSH",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::raw("1. Type letters to fill the focused cell"),
        Line::raw("2. Completing a row scores it against the word"),
        Line::raw("3. Get the word right = +2 points"),
        Line::raw("4. Get the word wrong = -1 point"),
        Line::raw(format!("5. Get {STREAK_TARGET} words in a row = win the game")),
        Line::raw("6. Score down to 0 = lose the game"),
        Line::raw("7. Beat the timer each round"),
        Line::raw(""),
        Line::raw("Good luck. You got this!").alignment(Alignment::Center),
        Line::raw(""),
        Line::styled("[ Enter: Start Game ]", Style::default().fg(Color::Green))
            .alignment(Alignment::Center),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );

    f.render_widget(popup, area);
}

fn render_outcome_popup(
    f: &mut Frame,
    app: &App,
    title: &str,
    subtitle: &str,
    button: &str,
    color: Color,
) {
    let area = centered_rect(40, 35, f.area());
    f.render_widget(Clear, area);

    let revealed = app.revealed.as_deref().unwrap_or("?????");

    let lines = vec![
        Line::raw(""),
        Line::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::raw(subtitle.to_string()).alignment(Alignment::Center),
        Line::styled(
            format!("\"{revealed}\""),
            Style::default().add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::styled(
            format!("[ Enter: {button} ]"),
            Style::default().fg(Color::Green),
        )
        .alignment(Alignment::Center),
    ];

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(popup, area);
}

/// Centered sub-rectangle taking the given percentages of the area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
