//! TUI rendering with ratatui
//!
//! The board, the on-screen keyboard and the message log.

use super::app::{App, MessageStyle, NEW_WORD_HINT};
use super::board::{Tile, keyboard_keys};
use crate::core::{Alphabet, Verdict};
use crate::input::{VIRTUAL_DELETE, VIRTUAL_ENTER};
use crate::output::formatters::upper_tr;
use crate::session::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::rc::Rc;

const HELP: &str = "Enter: gönder | Backspace: sil | Tab: mod | Ctrl+N: yeni kelime | Esc: çıkış";

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = screen_layout(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_help(f, chunks[4]);

    if app.notice.is_some() {
        render_notice(f, app);
    }
}

/// Header, board, keyboard, messages and help areas
pub(super) fn screen_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(4),     // Messages
            Constraint::Length(1),  // Help
        ])
        .split(area)
}

fn key_label(name: &str) -> String {
    match name {
        VIRTUAL_ENTER => "ENTER".to_string(),
        VIRTUAL_DELETE => "SİL".to_string(),
        letter => letter.chars().map(upper_tr).collect(),
    }
}

/// Where each on-screen key is drawn inside the keyboard area
///
/// Rows are centered below the top border; keys that do not fit are left out.
pub(super) fn key_cells(alphabet: &Alphabet, area: Rect) -> Vec<(Rect, String)> {
    let mut cells = Vec::new();
    for (offset, row) in (1..).zip(keyboard_keys(alphabet)) {
        let y = area.y.saturating_add(offset);
        if y >= area.bottom() {
            break;
        }
        let widths: Vec<u16> = row
            .iter()
            .map(|key| u16::try_from(key_label(key).chars().count() + 2).unwrap_or(u16::MAX))
            .collect();
        let total = widths.iter().fold(0u16, |sum, &w| sum.saturating_add(w));
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        for (key, width) in row.into_iter().zip(widths) {
            if x.saturating_add(width) > area.right() {
                break;
            }
            cells.push((Rect::new(x, y, width, 1), key));
            x += width;
        }
    }
    cells
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mode = app.board.mode();
    let title = format!("KELİME  |  mod: {mode} ({} harf)", mode.word_length());
    let header = Paragraph::new(title)
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

fn tile_style(tile: &Tile) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match tile.verdict {
        Some(Verdict::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Verdict::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None if tile.fixed => base.fg(Color::Cyan).bg(Color::Black),
        None => base.fg(Color::White),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.loading {
        vec![Line::from("Kelime listesi yükleniyor...")]
    } else {
        app.board
            .tiles()
            .iter()
            .flat_map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .flat_map(|tile| {
                        let text = tile
                            .letter
                            .map_or_else(|| " · ".to_string(), |c| format!(" {} ", upper_tr(c)));
                        [Span::styled(text, tile_style(tile)), Span::raw(" ")]
                    })
                    .collect();
                [Line::from(spans), Line::from("")]
            })
            .collect()
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(Block::default().borders(Borders::TOP), area);

    for (cell, key) in key_cells(app.router.alphabet(), area) {
        let mut letters = key.chars();
        let letter = match (letters.next(), letters.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        let style = match letter {
            Some(c) if app.board.is_disabled(c) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            Some(_) => Style::default().fg(Color::White),
            None => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        };
        let label = Paragraph::new(format!(" {} ", key_label(&key))).style(style);
        f.render_widget(label, cell);
    }
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
        List::new(messages).block(Block::default().title(" Mesajlar ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_notice(f: &mut Frame, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };
    let area = centered_rect(60, 9, f.area());

    let mut lines: Vec<Line> = notice
        .to_string()
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        NEW_WORD_HINT,
        Style::default().fg(Color::DarkGray),
    )));

    let color = match notice.outcome {
        Outcome::Won => Color::Green,
        Outcome::Exhausted => Color::Red,
    };
    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rect of `percent_x` width and `height` rows, centered in `r`
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
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
