use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use gridfall::{Cell, RenderedGrid};

use crate::app::App;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();

    // Two characters per cell plus borders
    let board_height = app.grid.height() as u16 + 2;
    let board_width = app.grid.width() as u16 * 2 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(18),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let info_area = horizontal_chunks[2];

    render_board(f, &app.grid, board_area);
    render_info(f, app, info_area);

    if app.game_over {
        render_game_over_overlay(f, app, board_area);
    }
}

fn render_board(f: &mut Frame, grid: &RenderedGrid, area: Rect) {
    let board_lines: Vec<Line> = grid
        .rows()
        .iter()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| match cell {
                    Cell::Empty => {
                        if (x + y) % 2 == 0 {
                            Span::styled("░░", Style::default().fg(Color::DarkGray))
                        } else {
                            Span::styled("  ", Style::default())
                        }
                    }
                    Cell::Filled => Span::styled("██", Style::default().fg(Color::Cyan)),
                    Cell::GameOver => Span::styled("XX", Style::default().fg(Color::Red)),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board_widget =
        Paragraph::new(board_lines).block(Block::default().borders(Borders::ALL).title("gridfall"));

    f.render_widget(board_widget, area);
}

fn render_info(f: &mut Frame, app: &App, area: Rect) {
    let info_text = vec![
        Line::from(vec![Span::styled("Score", Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw(app.session.score().to_string())]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("A/← left")]),
        Line::from(vec![Span::raw("D/→ right")]),
        Line::from(vec![Span::raw("S/↓ down")]),
        Line::from(vec![Span::raw("W/↑ rotate")]),
        Line::from(vec![Span::raw("R restart")]),
        Line::from(vec![Span::raw("Q quit")]),
    ];

    let info_widget = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(info_widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

fn render_game_over_overlay(f: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(80, 60, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::styled("Game Over!", Style::default().fg(Color::Red))]),
        Line::from(vec![Span::raw(format!("Score: {}", app.session.score()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("R restart")]),
        Line::from(vec![Span::raw("Q quit")]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}
