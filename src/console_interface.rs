use crate::core::{Direction, GameStatus, Grid, UserAction};
use crate::input::classify_drag;
use crate::models::GameRenderState;
use crate::session::TurnReport;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io;

const TILE_WIDTH: usize = 7;

pub fn setup_terminal()
-> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        io::stdout(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        let score_paragraph = Paragraph::new(format!("Score: {}", state.score))
            .block(Block::default().borders(Borders::ALL).title("2048"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(score_paragraph, chunks[0]);

        let board_paragraph = Paragraph::new(render_board_lines(&state.grid))
            .block(Block::default().borders(Borders::ALL).title("Board"))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[1]);

        let mut instructions =
            "Controls: WASD, arrow keys or drag with the mouse | R restart | Q quit".to_string();
        if let Some(TurnReport::Moved { direction, score_delta, .. }) = &state.last_turn {
            instructions = format!("{} | Last: {} +{}", instructions, direction, score_delta);
        }

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);

        if let Some((title, actions)) = overlay_message(state.status, state.can_continue) {
            let area = centered_rect(40, 5, f.area());
            let overlay = Paragraph::new(vec![
                Line::from(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(actions),
            ])
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White).bg(Color::DarkGray))
            .alignment(Alignment::Center);
            f.render_widget(Clear, area);
            f.render_widget(overlay, area);
        }
    })?;
    Ok(())
}

/// Title and key hints for the end-of-game overlay, or `None` while playing.
pub fn overlay_message(
    status: GameStatus,
    can_continue: bool,
) -> Option<(&'static str, &'static str)> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Won if can_continue => {
            Some(("You Win!", "C keep playing | R try again | Q quit"))
        }
        GameStatus::Won => Some(("You Win!", "R try again | Q quit")),
        GameStatus::Lost => Some(("Game Over!", "R try again | Q quit")),
    }
}

/// Each grid row becomes three text lines so tiles read as blocks.
pub fn render_board_lines(grid: &Grid) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for row in grid.rows() {
        let mut pad = Vec::new();
        let mut label = Vec::new();
        for &value in row {
            let style = tile_style(value);
            let text = if value == 0 { String::new() } else { value.to_string() };
            pad.push(Span::styled(" ".repeat(TILE_WIDTH), style));
            pad.push(Span::raw(" "));
            label.push(Span::styled(format!("{:^width$}", text, width = TILE_WIDTH), style));
            label.push(Span::raw(" "));
        }
        lines.push(Line::from(pad.clone()));
        lines.push(Line::from(label));
        lines.push(Line::from(pad));
        lines.push(Line::from(""));
    }
    lines
}

fn tile_style(value: u32) -> Style {
    let (bg, fg) = match value {
        0 => (Color::Rgb(205, 193, 180), Color::Black),
        2 => (Color::Rgb(238, 228, 218), Color::Rgb(119, 110, 101)),
        4 => (Color::Rgb(237, 224, 200), Color::Rgb(119, 110, 101)),
        8 => (Color::Rgb(242, 177, 121), Color::White),
        16 => (Color::Rgb(245, 149, 99), Color::White),
        32 => (Color::Rgb(246, 124, 95), Color::White),
        64 => (Color::Rgb(246, 94, 59), Color::White),
        128 => (Color::Rgb(237, 207, 114), Color::White),
        256 => (Color::Rgb(237, 204, 97), Color::White),
        512 => (Color::Rgb(237, 200, 80), Color::White),
        1024 => (Color::Rgb(237, 197, 63), Color::White),
        2048 => (Color::Rgb(237, 194, 46), Color::White),
        _ => (Color::Rgb(60, 58, 50), Color::White),
    };
    Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

/// Where the left mouse button went down, so the release can be read as a swipe.
#[derive(Default)]
pub struct DragTracker {
    start: Option<(u16, u16)>,
}

pub fn input_for_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Restart),
        KeyCode::Char('c') | KeyCode::Char('C') => {
            ConsoleInput::UserAction(UserAction::KeepPlaying)
        }
        _ => ConsoleInput::Unknown,
    }
}

pub fn input_for_mouse(
    mouse: MouseEvent,
    drag: &mut DragTracker,
    swipe_threshold: f32,
) -> ConsoleInput {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            drag.start = Some((mouse.column, mouse.row));
            ConsoleInput::Unknown
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(start) = drag.start.take() else {
                return ConsoleInput::Unknown;
            };
            match classify_drag(start, (mouse.column, mouse.row), swipe_threshold) {
                Some(direction) => ConsoleInput::UserAction(UserAction::Move(direction)),
                None => ConsoleInput::Unknown,
            }
        }
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input(
    drag: &mut DragTracker,
    swipe_threshold: f32,
) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        return Ok(match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => input_for_key(code),
            Event::Mouse(mouse) => input_for_mouse(mouse, drag, swipe_threshold),
            _ => ConsoleInput::Unknown,
        });
    }
    Ok(ConsoleInput::Timeout)
}
