/// Memory game renderer: four pads in a diamond, score and status text.
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::game::{MemoryGame, RoundOutcome};
use super::sequence::Direction;
use super::turn::Turn;

const PAD_W: u16 = 9;
const PAD_H: u16 = 3;

pub fn draw(frame: &mut Frame, game: &MemoryGame) {
    let area = frame.area();

    // Pads, lit green while the system blinks them, white on a player
    // keypress, dim grey otherwise.
    for dir in Direction::ALL {
        let style = if game.lit() == Some(dir) {
            Style::default().bg(Color::Green)
        } else if game.flash() == Some(dir) {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let pad = Block::default().borders(Borders::ALL).style(style);
        frame.render_widget(pad, pad_rect(area, dir).intersection(area));
    }

    // Center square, the player's "home" position.
    let home = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White));
    frame.render_widget(home, home_rect(area).intersection(area));

    // Score counts completed rounds, like the original's big counter.
    let score_rect = Rect::new(area.x, area.y, area.width.min(20), 1);
    frame.render_widget(
        Paragraph::new(format!("Score: {}", game.score())),
        score_rect,
    );

    // Status and hint lines along the bottom.
    if area.height >= 2 {
        let status_rect = Rect::new(area.x, area.bottom() - 2, area.width, 1);
        frame.render_widget(
            Paragraph::new(status_line(game)).alignment(Alignment::Center),
            status_rect,
        );
        let hint_rect = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new("Arrow keys to play, Esc or q to quit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            hint_rect,
        );
    }
}

fn status_line(game: &MemoryGame) -> String {
    let turn = match game.turn() {
        Turn::System => "Watch the sequence...".to_string(),
        Turn::Player => {
            let (entered, total) = game.progress();
            format!("Your turn! Repeat the sequence ({entered}/{total})")
        }
    };
    match game.outcome() {
        Some(RoundOutcome::Correct) => format!("Correct! {turn}"),
        Some(RoundOutcome::Wrong) => format!("Wrong, back to the start. {turn}"),
        None => turn,
    }
}

/// Pad positions mirror the original layout: one pad per compass point
/// around the center of the screen.
fn pad_rect(area: Rect, dir: Direction) -> Rect {
    let cx = area.x + area.width / 2;
    let cy = area.y + area.height / 2;
    // Terminal cells are roughly twice as tall as wide, so the diamond
    // needs a wider horizontal spread to look square.
    let dx = (area.width / 4).max(PAD_W);
    let dy = (area.height / 4).max(PAD_H);
    let (px, py) = match dir {
        Direction::Up => (cx, cy.saturating_sub(dy)),
        Direction::Right => (cx.saturating_add(dx), cy),
        Direction::Down => (cx, cy.saturating_add(dy)),
        Direction::Left => (cx.saturating_sub(dx), cy),
    };
    Rect::new(
        px.saturating_sub(PAD_W / 2),
        py.saturating_sub(PAD_H / 2),
        PAD_W,
        PAD_H,
    )
}

fn home_rect(area: Rect) -> Rect {
    let cx = area.x + area.width / 2;
    let cy = area.y + area.height / 2;
    let w = PAD_W + 2;
    let h = PAD_H + 2;
    Rect::new(cx.saturating_sub(w / 2), cy.saturating_sub(h / 2), w, h)
}
