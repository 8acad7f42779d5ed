use crate::game::{Game, Outcome};
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::board_widget::BoardGeometry;
use super::input::{self, Action};

/// Terminal front end. Owns the game and forwards decoded input to it; it
/// never touches game state except through the `Game::on_*` entry points.
pub struct App {
    game: Game,
    geometry: Option<BoardGeometry>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Wrap a started game, aiming at the middle column.
    pub fn new(mut game: Game) -> Self {
        let middle = game.board().width() / 2;
        game.on_column_hovered(Some(middle));
        App {
            game,
            geometry: None,
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            let snapshot = self.game.snapshot();
            let message = &self.message;
            let mut geometry = None;
            terminal
                .draw(|f| geometry = Some(super::game_view::render(f, &snapshot, message)))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            self.geometry = geometry;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            let action = match event::read()? {
                Event::Key(key) => input::key_action(key),
                Event::Mouse(mouse) => self
                    .geometry
                    .as_ref()
                    .and_then(|geometry| input::mouse_action(mouse, geometry)),
                _ => None,
            };
            if let Some(action) = action {
                self.apply(action);
            }
        }
        Ok(())
    }

    /// Apply one decoded action. Rejected game actions change nothing.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::HoverLeft => {
                let col = self.game.hovered_column().unwrap_or(0).saturating_sub(1);
                self.game.on_column_hovered(Some(col));
            }
            Action::HoverRight => {
                let last = self.game.board().width() - 1;
                let col = self
                    .game
                    .hovered_column()
                    .map_or(0, |col| (col + 1).min(last));
                self.game.on_column_hovered(Some(col));
            }
            Action::Hover(column) => {
                self.game.on_column_hovered(column);
            }
            Action::DropHovered => {
                if let Some(col) = self.game.hovered_column() {
                    self.drop_piece(col);
                }
            }
            Action::Drop(col) => {
                if col < self.game.board().width() {
                    self.game.on_column_hovered(Some(col));
                }
                self.drop_piece(col);
            }
            Action::Undo => {
                if self.game.on_undo_requested() {
                    self.message = None;
                }
            }
            Action::Restart => {
                if self.game.on_restart_requested() {
                    self.message = Some("New round started!".to_string());
                }
            }
        }
    }

    fn drop_piece(&mut self, column: usize) {
        if !self.game.on_column_selected(column) {
            return;
        }
        self.message = match self.game.outcome() {
            Some(Outcome::Winner { .. }) => self
                .game
                .winner()
                .map(|player| format!("{} wins! Press 'r' for another round.", player.name())),
            Some(Outcome::Draw) => Some("It's a draw! Press 'r' for another round.".to_string()),
            None => None,
        };
    }
}
