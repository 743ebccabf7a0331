#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board coordinates are checked to be non-negative and on the board before casting
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use crate::app::App;
use crate::components::Position;
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::shapes::TetrominoType;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

// Each cell is 2 characters wide and 1 tall to look roughly square
const CELL_WIDTH: u16 = 2;
const BOARD_OUTER_WIDTH: u16 = BOARD_WIDTH as u16 * CELL_WIDTH + 2;
const BOARD_OUTER_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;
const MIN_INFO_WIDTH: u16 = 20;

#[must_use]
pub fn tetromino_color(tetromino_type: TetrominoType) -> Color {
    match tetromino_type {
        TetrominoType::I => Color::Cyan,
        TetrominoType::J => Color::Blue,
        TetrominoType::L => Color::Rgb(255, 165, 0),
        TetrominoType::O => Color::Yellow,
        TetrominoType::S => Color::Green,
        TetrominoType::T => Color::Magenta,
        TetrominoType::Z => Color::Red,
    }
}

pub fn render(f: &mut Frame, app: &App) {
    let min_total_width = BOARD_OUTER_WIDTH + MIN_INFO_WIDTH;
    let min_total_height = BOARD_OUTER_HEIGHT + 2;

    if f.area().width < min_total_width || f.area().height < min_total_height {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("blockdrop"));

        let warning_area = centered_rect(50, 30, f.area());
        f.render_widget(warning_text, warning_area);
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_OUTER_WIDTH),
            Constraint::Min(MIN_INFO_WIDTH),
        ])
        .split(f.area());

    let game_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                  // Title
            Constraint::Length(BOARD_OUTER_HEIGHT), // Game board
            Constraint::Fill(1),
        ])
        .split(main_layout[0]);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(6), // Next piece
            Constraint::Length(3), // Score
            Constraint::Length(3), // Status
            Constraint::Min(5),    // Controls
        ])
        .split(main_layout[1]);

    let title = Paragraph::new("BLOCKDROP")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, game_layout[0]);

    render_game_board(f, app, game_layout[1]);

    let info_title = Paragraph::new("INFO")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, info_layout[0]);

    render_next_tetromino(f, app, info_layout[1]);

    let stats = format!(
        "Score: {}\nLines: {}",
        app.session.score(),
        app.session.lines_cleared()
    );
    f.render_widget(
        Paragraph::new(stats).wrap(Wrap { trim: true }),
        info_layout[2],
    );

    if let Some(final_score) = app.final_score {
        let status = Paragraph::new(format!(
            "GAME OVER! Final score: {final_score}\nPress Enter to restart"
        ))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
        f.render_widget(status, info_layout[3]);
    }

    let controls = Paragraph::new(
        "Controls:\n\
        ←/→ or A/D: Move left/right\n\
        ↓ or S: Move down\n\
        ↑, W or Space: Rotate\n\
        Enter: Restart after game over\n\
        Q or Esc: Quit\n\
        ",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[4]);
}

fn render_game_board(f: &mut Frame, app: &App, area: Rect) {
    let inner_area = Block::default().borders(Borders::ALL).inner(area);
    f.render_widget(Block::default().borders(Borders::ALL), area);

    let board = app.session.board();
    for row in 0..board.rows() as i32 {
        for col in 0..board.cols() as i32 {
            match board.cell(col, row) {
                Some(tetromino_type) => draw_cell(
                    f,
                    inner_area,
                    Position::new(col, row),
                    tetromino_color(tetromino_type),
                ),
                None if app.config.show_grid => {
                    draw_grid_dot(f, inner_area, Position::new(col, row));
                }
                None => {}
            }
        }
    }

    if app.is_game_over() {
        let game_over = Paragraph::new("GAME OVER")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let game_over_area = Rect {
            x: inner_area.x,
            y: inner_area.y + inner_area.height / 2,
            width: inner_area.width,
            height: 1,
        };

        f.render_widget(game_over, game_over_area);
    } else {
        let current = app.session.current();
        let color = tetromino_color(current.tetromino_type());
        for block in current.blocks() {
            // Blocks above row 0 are still entering the board
            if block.y >= 0 {
                draw_cell(f, inner_area, block, color);
            }
        }
    }
}

pub fn render_next_tetromino(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Next");
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let blocks = app.session.next_blocks();
    let min_x = blocks.iter().map(|b| b.x).min().unwrap_or(0);
    let min_y = blocks.iter().map(|b| b.y).min().unwrap_or(0);
    let color = tetromino_color(app.session.next_type());

    for block in blocks {
        let preview = Position::new(block.x - min_x + 1, block.y - min_y);
        draw_cell(f, inner_area, preview, color);
    }
}

// Paints one board cell, clipped to `area`
fn draw_cell(f: &mut Frame, area: Rect, position: Position, color: Color) {
    if position.x < 0 || position.y < 0 {
        return;
    }

    let x = area.left() + position.x as u16 * CELL_WIDTH;
    let y = area.top() + position.y as u16;
    if y >= area.bottom() {
        return;
    }

    for dx in 0..CELL_WIDTH {
        if x + dx >= area.right() {
            break;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((x + dx, y)) {
            cell.set_symbol("█");
            cell.set_fg(color);
            cell.set_bg(Color::Black);
        }
    }
}

fn draw_grid_dot(f: &mut Frame, area: Rect, position: Position) {
    let x = area.left() + position.x as u16 * CELL_WIDTH;
    let y = area.top() + position.y as u16;
    if x < area.right() && y < area.bottom() {
        if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
            cell.set_symbol("·");
            cell.set_fg(Color::DarkGray);
        }
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}
