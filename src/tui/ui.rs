//! UI rendering using ratatui
//!
//! Two screens:
//! - Menu: title and options
//! - Playing: header, rack, grid, word list, feedback

use crate::app::{App, AppCoordinator, MenuOption, Screen};
use crate::game::{Coordinate, Dictionary, DictionaryStatus, Orientation};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Menu { selected } => {
            render_menu(frame, *selected, coordinator.dictionary());
        }
        Screen::Playing { app } => {
            render_game(frame, app);
        }
    }
}

/// Render the main menu
fn render_menu(frame: &mut Frame, selected: usize, dictionary: &Dictionary) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Logo
            Constraint::Length(2), // Dictionary status
            Constraint::Length(1), // Spacer
            Constraint::Min(4),    // Menu options
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
  ____    _    ____    _    _   _    _
 / ___|  / \  | __ )  / \  | \ | |  / \
| |     / _ \ |  _ \ / _ \ |  \| | / _ \
| |___ / ___ \| |_) / ___ \| |\  |/ ___ \
 \____/_/   \_\____/_/   \_\_| \_/_/   \_\
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let (status_text, status_color) = format_dictionary_status(&dictionary.status());
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[3]);

    let footer = Paragraph::new("↑↓ Navigate  Enter Select  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the in-game screen
fn render_game(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Rack
            Constraint::Min(6),    // Grid and words
            Constraint::Length(1), // Feedback
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);
    render_rack(frame, layout[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Grid
            Constraint::Length(24), // Words
        ])
        .split(layout[2]);

    render_grid(frame, body[0], app);
    render_words(frame, body[1], app);

    let (feedback_text, feedback_color) = format_feedback(&app.feedback);
    let feedback = Paragraph::new(feedback_text)
        .style(Style::default().fg(feedback_color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[3]);

    let help = if app.moving.is_some() {
        "←↑↓→ Move  Enter Drop  Esc Cancel  r Return  S Spin"
    } else {
        "←↑↓→ Move  Tab Rack  Enter Place  m Pick up  r Return  s/S Spin  Esc Menu  q Quit"
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);

    if app.is_won() {
        render_win_banner(frame, area);
    }
}

/// Header: title | tile counts | dictionary status
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Title
            Constraint::Min(20),    // Counts
            Constraint::Length(28), // Dictionary
        ])
        .split(inner);

    let title = Paragraph::new("CABANA")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let counts = Paragraph::new(format!(
        "Pile: {}  Rack: {}  Board: {}  Spin: {}",
        app.game.reserve_len(),
        app.game.rack().len(),
        app.game.board().len(),
        app.game.spin_policy()
    ))
    .style(Style::default().fg(Color::Cyan).bold())
    .alignment(Alignment::Center);
    frame.render_widget(counts, header_layout[1]);

    let (status_text, status_color) = format_dictionary_status(&app.game.dictionary().status());
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Right);
    frame.render_widget(status, header_layout[2]);
}

/// Rack: the player's unplaced tiles, selected slot highlighted
fn render_rack(frame: &mut Frame, area: Rect, app: &App) {
    let tiles = app.game.rack().tiles();
    let spans: Vec<Span> = if tiles.is_empty() {
        vec![Span::styled("(empty)", Style::default().fg(Color::DarkGray))]
    } else {
        tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| {
                let mut style = if tile.is_new {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::White)
                };
                if i == app.rack_selected && app.moving.is_none() {
                    style = style.fg(Color::Black).bg(Color::Yellow).bold();
                }
                Span::styled(format!(" {} ", tile.letter), style)
            })
            .collect()
    };

    let rack = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Rack"),
        );
    frame.render_widget(rack, area);
}

/// Grid: two columns per cell, valid tiles in green
fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.game.board();
    let lines: Vec<Line> = (0..board.height())
        .map(|y| {
            let spans: Vec<Span> = (0..board.width())
                .map(|x| {
                    let at = Coordinate::new(x, y);
                    let (text, mut style) = match board.get(at) {
                        Some(tile) => {
                            let style = if app.moving == Some(at) {
                                Style::default().fg(Color::Magenta).bold()
                            } else if app.game.evaluation().is_valid(at) {
                                Style::default().fg(Color::Green).bold()
                            } else if tile.is_new {
                                Style::default().fg(Color::Cyan)
                            } else {
                                Style::default().fg(Color::White)
                            };
                            (format!("{} ", tile.letter), style)
                        }
                        None => ("· ".to_string(), Style::default().fg(Color::DarkGray)),
                    };
                    if at == app.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(text, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(if board.is_empty() {
                "Board (Enter places the selected tile)".to_string()
            } else {
                format!("Board ({}, {})", app.cursor.x, app.cursor.y)
            }),
    );
    frame.render_widget(grid, area);
}

/// Words: every run on the board, in scan order
fn render_words(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .game
        .evaluation()
        .runs
        .iter()
        .map(|checked| {
            let (mark, color) = if checked.valid {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            let arrow = match checked.run.orientation {
                Orientation::Horizontal => "→",
                Orientation::Vertical => "↓",
            };
            ListItem::new(format!("{} {} {}", mark, arrow, checked.run.word))
                .style(Style::default().fg(color))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Words"),
    );
    frame.render_widget(list, area);
}

/// Centered banner drawn over the board once the game is won
fn render_win_banner(frame: &mut Frame, area: Rect) {
    let banner = centered_rect(area, 30, 5);
    frame.render_widget(Clear, banner);

    let text = vec![
        Line::from(Span::styled(
            "YOU WIN!",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc menu  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(widget, banner);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn format_dictionary_status(status: &DictionaryStatus) -> (String, Color) {
    match status {
        DictionaryStatus::Loading => ("Dictionary: loading...".to_string(), Color::Yellow),
        DictionaryStatus::Ready { words } => (format!("Dictionary: {} words", words), Color::Green),
        DictionaryStatus::Unavailable { .. } => {
            ("Dictionary: 2-letter only".to_string(), Color::Red)
        }
    }
}

/// Format feedback with appropriate color
fn format_feedback(feedback: &str) -> (String, Color) {
    if feedback.is_empty() {
        return (String::new(), Color::White);
    }

    let color = if feedback.starts_with("YOU WIN") {
        Color::Yellow
    } else if feedback.starts_with("BOOGIE") {
        Color::Magenta
    } else if feedback.starts_with("SPIN") {
        Color::Cyan
    } else {
        Color::Red
    };

    (feedback.to_string(), color)
}
