use crate::game::{Outcome, Phase, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, player_color, BoardGeometry};

pub fn render(frame: &mut Frame, snapshot: &Snapshot, message: &Option<String>) -> BoardGeometry {
    let (_, board_height) = board_widget::board_size(snapshot.columns, snapshot.rows);
    let scores_height = u16::try_from(snapshot.players.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                  // Header
            Constraint::Min(board_height),                          // Board
            Constraint::Length(scores_height),                      // Scores
            Constraint::Length(3),                                  // Message
            Constraint::Length(3),                                  // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    let geometry = board_widget::render_board(frame, snapshot, chunks[1]);
    render_scores(frame, snapshot, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, snapshot, chunks[4]);
    geometry
}

fn render_header(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (status, color) = match (&snapshot.phase, &snapshot.outcome) {
        (Phase::Finished, Some(Outcome::Winner { player, .. })) => {
            let winner = snapshot.player(*player);
            (
                format!("{} wins!", winner.map_or("?", |p| p.name.as_str())),
                winner.map_or(Color::White, |p| player_color(&p.color)),
            )
        }
        (Phase::Finished, _) => ("It's a draw!".to_string(), Color::White),
        (Phase::Uninitialized, _) => ("Waiting to start".to_string(), Color::DarkGray),
        (Phase::Playing, _) => match snapshot.current() {
            Some(player) => (
                format!("Current Player: {}", player.name),
                player_color(&player.color),
            ),
            None => (String::new(), Color::White),
        },
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_scores(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = snapshot
        .players
        .iter()
        .map(|player| {
            let marker = if snapshot.current_player == Some(player.id)
                && snapshot.phase == Phase::Playing
            {
                "▶ "
            } else {
                "  "
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("● {:<12}", player.name),
                    Style::default().fg(player_color(&player.color)),
                ),
                Span::styled(
                    format!("{:>3}", player.score),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let scores = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scores"));

    frame.render_widget(scores, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let undo_style = if snapshot.undo_available {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(vec![
        Span::raw("←/→ or mouse: Aim  |  Enter/click/1-9: Drop  |  "),
        Span::styled("U: Undo", undo_style),
        Span::raw("  |  R: Restart  |  Q: Quit"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
