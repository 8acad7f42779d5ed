use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{ConfigError, GameError, MoveError};

use super::snapshot::{PlayerSummary, Snapshot};
use super::win::winning_line_through;
use super::{Board, MatchState, Outcome, Phase, Player, PlayerId, PlayerRegistry, SlotPos};

/// Result of a successful drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResult {
    pub slot: SlotPos,
    /// Set when the drop ended the round.
    pub outcome: Option<Outcome>,
}

/// The game aggregate: board, players, turn state and phase.
///
/// Every operation either applies completely or returns an error and leaves
/// the game untouched. The `on_*` methods are the adapter-facing entry points;
/// they turn rejected actions into silent no-ops and report whether anything
/// changed so the caller knows to redraw.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: PlayerRegistry,
    match_state: MatchState,
    phase: Phase,
    outcome: Option<Outcome>,
    hovered_column: Option<usize>,
}

impl Game {
    /// Build a new session from a validated configuration. Scores start at
    /// zero; the game stays `Uninitialized` until [`Game::start`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = new_board(&config)?;
        let players = PlayerRegistry::from_config(&config.players);

        Ok(Game {
            config,
            board,
            players,
            match_state: MatchState::new(),
            phase: Phase::Uninitialized,
            outcome: None,
            hovered_column: None,
        })
    }

    /// Begin the first round.
    pub fn start(&mut self) -> Result<(), MoveError> {
        match self.phase {
            Phase::Uninitialized => {
                self.reset_round();
                info!(
                    columns = self.board.width(),
                    rows = self.board.height(),
                    players = self.players.len(),
                    "game started"
                );
                Ok(())
            }
            phase @ (Phase::Playing | Phase::Finished) => Err(MoveError::InvalidPhase {
                action: "start",
                phase,
            }),
        }
    }

    /// Drop the current player's piece into `column`.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropResult, MoveError> {
        match self.phase {
            Phase::Playing => {}
            phase @ (Phase::Uninitialized | Phase::Finished) => {
                return Err(MoveError::InvalidPhase {
                    action: "drop a piece",
                    phase,
                })
            }
        }
        if column >= self.board.width() {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        let slot = self
            .board
            .available_slot_in_column(column)
            .map(|slot| slot.pos())
            .ok_or(MoveError::ColumnFull { column })?;

        let player = self.current_player_id();
        self.board
            .occupy(slot, player)
            .expect("available slot lies on the board");
        self.match_state.record_move(slot);
        debug!(player = %player, row = slot.row, col = slot.col, "piece dropped");

        if let Some(line) = winning_line_through(&self.board, slot) {
            self.players.award_point(line.player);
            self.finish(Outcome::Winner {
                player: line.player,
                line: line.slots,
            });
        } else if self.board.is_full() {
            self.finish(Outcome::Draw);
        } else {
            self.match_state.advance(self.players.len());
        }

        Ok(DropResult {
            slot,
            outcome: self.outcome.clone(),
        })
    }

    /// Take back the last drop. Only one level deep, and only mid-round.
    pub fn undo(&mut self) -> Result<SlotPos, MoveError> {
        match self.phase {
            Phase::Playing => {}
            phase @ (Phase::Uninitialized | Phase::Finished) => {
                return Err(MoveError::InvalidPhase {
                    action: "undo",
                    phase,
                })
            }
        }
        let slot = self
            .match_state
            .take_last_move()
            .ok_or(MoveError::NothingToUndo)?;

        self.board
            .vacate(slot)
            .expect("recorded move lies on the board");
        self.match_state.rewind(self.players.len());
        debug!(row = slot.row, col = slot.col, "move undone");
        Ok(slot)
    }

    /// Start a fresh round with the same configuration. Scores are kept.
    pub fn restart(&mut self) -> Result<(), MoveError> {
        match self.phase {
            Phase::Playing | Phase::Finished => {
                self.reset_round();
                info!("round restarted");
                Ok(())
            }
            phase @ Phase::Uninitialized => Err(MoveError::InvalidPhase {
                action: "restart",
                phase,
            }),
        }
    }

    pub fn current_player(&self) -> Result<&Player, GameError> {
        if self.phase == Phase::Uninitialized {
            return Err(GameError::NotStarted);
        }
        Ok(self
            .players
            .by_index(self.match_state.current_player_index())
            .expect("current player index stays within the registry"))
    }

    pub fn on_column_selected(&mut self, column: usize) -> bool {
        self.drop_piece(column)
            .map_err(|err| debug!(%err, "drop ignored"))
            .is_ok()
    }

    pub fn on_undo_requested(&mut self) -> bool {
        self.undo()
            .map_err(|err| debug!(%err, "undo ignored"))
            .is_ok()
    }

    pub fn on_restart_requested(&mut self) -> bool {
        self.restart()
            .map_err(|err| debug!(%err, "restart ignored"))
            .is_ok()
    }

    /// Track the column under the pointer. Returns true if it changed.
    pub fn on_column_hovered(&mut self, column: Option<usize>) -> bool {
        let column = column.filter(|&col| col < self.board.width());
        if self.hovered_column == column {
            return false;
        }
        self.hovered_column = column;
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The winner of a finished round; `None` while playing or on a draw.
    pub fn winner(&self) -> Option<&Player> {
        self.outcome
            .as_ref()
            .and_then(Outcome::winner)
            .and_then(|id| self.players.get(id))
    }

    pub fn hovered_column(&self) -> Option<usize> {
        self.hovered_column
    }

    pub fn can_undo(&self) -> bool {
        self.phase == Phase::Playing && self.match_state.last_move().is_some()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let hint = match (self.phase, self.hovered_column) {
            (Phase::Playing, Some(col)) => self
                .board
                .available_slot_in_column(col)
                .map(|slot| slot.pos()),
            _ => None,
        };

        Snapshot {
            columns: self.board.width(),
            rows: self.board.height(),
            slots: self.board.slots().map(|slot| slot.occupant()).collect(),
            hovered_column: self.hovered_column,
            hint,
            phase: self.phase,
            current_player: self.current_player().ok().map(Player::id),
            outcome: self.outcome.clone(),
            players: self
                .players
                .iter()
                .map(|player| PlayerSummary {
                    id: player.id(),
                    color: player.color().to_string(),
                    name: player.name(),
                    score: player.score(),
                })
                .collect(),
            undo_available: self.can_undo(),
        }
    }

    fn current_player_id(&self) -> PlayerId {
        PlayerId::new(self.match_state.current_player_index() + 1)
    }

    fn finish(&mut self, outcome: Outcome) {
        match &outcome {
            Outcome::Winner { player, .. } => {
                let score = self.players.get(*player).map_or(0, Player::score);
                info!(player = %player, score, "round won");
            }
            Outcome::Draw => info!("round drawn"),
        }
        self.outcome = Some(outcome);
        self.phase = Phase::Finished;
    }

    fn reset_round(&mut self) {
        self.board = new_board(&self.config).expect("board size validated at construction");
        self.match_state = MatchState::new();
        self.outcome = None;
        self.phase = Phase::Playing;
    }
}

fn new_board(config: &GameConfig) -> Result<Board, ConfigError> {
    Board::new(config.board.columns, config.board.rows).map_err(|_| {
        ConfigError::InvalidBoardSize {
            columns: config.board.columns,
            rows: config.board.rows,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;

    const RED: PlayerId = PlayerId::new(1);
    const YELLOW: PlayerId = PlayerId::new(2);

    fn started() -> Game {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.start().unwrap();
        game
    }

    fn play(game: &mut Game, columns: &[usize]) {
        for &col in columns {
            game.drop_piece(col).unwrap();
        }
    }

    /// Fills the default board with no four-in-a-row. Columns 0, 1, 4, 5 end
    /// up bottom-up red/yellow alternating, columns 2, 3, 6 yellow/red.
    fn draw_sequence() -> Vec<usize> {
        let pair = |a: usize, b: usize| [a, b, b, a, a, b, b, a, a, b, b, a];
        let mut moves = Vec::new();
        moves.extend(pair(0, 2));
        moves.extend(pair(1, 3));
        moves.extend(pair(4, 6));
        moves.extend([5; 6]);
        moves
    }

    #[test]
    fn test_new_game_is_uninitialized() {
        let game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(game.phase(), Phase::Uninitialized);
        assert_eq!(game.current_player(), Err(GameError::NotStarted));
        assert!(!game.can_undo());
    }

    #[test]
    fn test_invalid_configuration_is_fatal() {
        let mut config = GameConfig::default();
        config.players.pop();
        assert!(matches!(
            Game::new(config),
            Err(ConfigError::TooFewPlayers(1))
        ));

        let mut config = GameConfig::default();
        config.board.rows = 0;
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn test_actions_rejected_before_start() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        assert!(matches!(
            game.drop_piece(0),
            Err(MoveError::InvalidPhase { phase: Phase::Uninitialized, .. })
        ));
        assert!(game.undo().is_err());
        assert!(game.restart().is_err());
        assert!(game.board().is_empty());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut game = started();
        play(&mut game, &[3]);
        assert!(game.start().is_err());
        assert!(!game.board().is_empty());
    }

    #[test]
    fn test_drop_piece() {
        let mut game = started();
        assert_eq!(game.current_player().unwrap().id(), RED);

        let result = game.drop_piece(3).unwrap();
        assert_eq!(result.slot, SlotPos::new(5, 3));
        assert_eq!(result.outcome, None);
        assert_eq!(game.board().occupant(5, 3), Some(RED));
        assert_eq!(game.current_player().unwrap().id(), YELLOW);
        assert_eq!(game.match_state().last_move(), Some(SlotPos::new(5, 3)));
    }

    #[test]
    fn test_drop_into_full_column_changes_nothing() {
        let mut game = started();
        play(&mut game, &[0, 0, 0, 0, 0, 0]);
        let board = game.board().clone();
        let state = *game.match_state();

        assert_eq!(game.drop_piece(0), Err(MoveError::ColumnFull { column: 0 }));
        assert!(!game.on_column_selected(0));
        assert_eq!(game.board(), &board);
        assert_eq!(game.match_state(), &state);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_drop_out_of_range_changes_nothing() {
        let mut game = started();
        assert_eq!(
            game.drop_piece(7),
            Err(MoveError::ColumnOutOfRange { column: 7 })
        );
        assert!(game.board().is_empty());
        assert_eq!(game.match_state().current_player_index(), 0);
    }

    #[test]
    fn test_vertical_win_scenario() {
        let mut game = started();
        // Red stacks column 3 while yellow stacks column 4
        play(&mut game, &[3, 4, 3, 4, 3, 4]);
        assert_eq!(game.phase(), Phase::Playing);

        let result = game.drop_piece(3).unwrap();
        assert_eq!(result.outcome.as_ref().and_then(Outcome::winner), Some(RED));
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.winner().unwrap().id(), RED);
        assert_eq!(game.winner().unwrap().score(), 1);
        assert_eq!(game.players().get(YELLOW).unwrap().score(), 0);
    }

    #[test]
    fn test_finished_game_rejects_moves_and_undo() {
        let mut game = started();
        play(&mut game, &[3, 4, 3, 4, 3, 4, 3]);
        let board = game.board().clone();

        assert!(matches!(
            game.drop_piece(0),
            Err(MoveError::InvalidPhase { phase: Phase::Finished, .. })
        ));
        assert!(matches!(
            game.undo(),
            Err(MoveError::InvalidPhase { phase: Phase::Finished, .. })
        ));
        assert!(!game.can_undo());
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_horizontal_win_by_second_player() {
        let mut game = started();
        play(&mut game, &[0, 1, 0, 2, 0, 3, 6]);
        let result = game.drop_piece(4).unwrap();
        let line = match result.outcome {
            Some(Outcome::Winner { player, line }) => {
                assert_eq!(player, YELLOW);
                line
            }
            other => panic!("expected a winner, got {other:?}"),
        };
        assert_eq!(
            line,
            (1..5).map(|col| SlotPos::new(5, col)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_diagonal_win() {
        let mut game = started();
        // Red builds / from (5,0) to (2,3)
        play(&mut game, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6]);
        assert_eq!(game.phase(), Phase::Playing);
        game.drop_piece(3).unwrap();
        assert_eq!(game.winner().map(Player::id), Some(RED));
    }

    #[test]
    fn test_draw_scenario() {
        let mut game = started();
        let moves = draw_sequence();
        assert_eq!(moves.len(), 42);

        for (i, &col) in moves.iter().enumerate() {
            assert_eq!(game.phase(), Phase::Playing, "game ended early at move {i}");
            game.drop_piece(col).unwrap();
        }

        assert!(game.board().is_full());
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.outcome(), Some(&Outcome::Draw));
        assert!(game.winner().is_none());
        assert!(game.players().iter().all(|p| p.score() == 0));
    }

    #[test]
    fn test_undo_reverses_one_drop() {
        let mut game = started();
        game.drop_piece(0).unwrap();

        assert_eq!(game.undo(), Ok(SlotPos::new(5, 0)));
        assert!(game.board().is_empty());
        assert_eq!(game.match_state().current_player_index(), 0);
        assert_eq!(game.match_state().last_move(), None);

        // Second consecutive undo is a no-op
        assert_eq!(game.undo(), Err(MoveError::NothingToUndo));
        assert!(!game.on_undo_requested());
        assert_eq!(game.match_state().current_player_index(), 0);
    }

    #[test]
    fn test_undo_mid_game_restores_previous_state() {
        let mut game = started();
        play(&mut game, &[3, 3, 4]);
        let board = game.board().clone();
        let index = game.match_state().current_player_index();

        game.drop_piece(3).unwrap();
        game.undo().unwrap();

        assert_eq!(game.board(), &board);
        assert_eq!(game.match_state().current_player_index(), index);
        assert!(!game.can_undo());

        // Play resumes with the same player
        game.drop_piece(5).unwrap();
        assert_eq!(game.board().occupant(5, 5), Some(YELLOW));
    }

    #[test]
    fn test_restart_keeps_scores() {
        let mut game = started();
        play(&mut game, &[3, 4, 3, 4, 3, 4, 3]);
        assert_eq!(game.players().get(RED).unwrap().score(), 1);

        assert!(game.on_restart_requested());
        assert_eq!(game.phase(), Phase::Playing);
        assert!(game.board().is_empty());
        assert_eq!(game.match_state().current_player_index(), 0);
        assert_eq!(game.match_state().last_move(), None);
        assert!(game.outcome().is_none());
        assert_eq!(game.players().get(RED).unwrap().score(), 1);

        // Yellow takes the second round
        play(&mut game, &[0, 4, 0, 4, 0, 4, 1, 4]);
        assert_eq!(game.winner().map(Player::id), Some(YELLOW));
        assert_eq!(game.players().get(RED).unwrap().score(), 1);
        assert_eq!(game.players().get(YELLOW).unwrap().score(), 1);
    }

    #[test]
    fn test_restart_mid_round() {
        let mut game = started();
        play(&mut game, &[2, 2, 2]);
        game.restart().unwrap();
        assert!(game.board().is_empty());
        assert_eq!(game.current_player().unwrap().id(), RED);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_new_session_resets_scores() {
        let mut game = started();
        play(&mut game, &[3, 4, 3, 4, 3, 4, 3]);
        let game = Game::new(game.config().clone()).unwrap();
        assert!(game.players().iter().all(|p| p.score() == 0));
    }

    #[test]
    fn test_three_players_cycle() {
        let config = GameConfig {
            players: vec![
                PlayerConfig::new("red", None),
                PlayerConfig::new("yellow", None),
                PlayerConfig::new("green", None),
            ],
            ..GameConfig::default()
        };
        let mut game = Game::new(config).unwrap();
        game.start().unwrap();

        let mut seen = Vec::new();
        for col in [0, 1, 2, 3] {
            seen.push(game.current_player().unwrap().id().get());
            game.drop_piece(col).unwrap();
        }
        assert_eq!(seen, vec![1, 2, 3, 1]);

        // Undo rewinds to the player who made the move
        game.undo().unwrap();
        assert_eq!(game.current_player().unwrap().id().get(), 1);
    }

    #[test]
    fn test_first_player_undo_wraps_index() {
        let config = GameConfig {
            players: vec![
                PlayerConfig::new("red", None),
                PlayerConfig::new("yellow", None),
                PlayerConfig::new("green", None),
            ],
            ..GameConfig::default()
        };
        let mut game = Game::new(config).unwrap();
        game.start().unwrap();
        play(&mut game, &[0, 1, 2]);
        assert_eq!(game.match_state().current_player_index(), 0);
        game.undo().unwrap();
        assert_eq!(game.match_state().current_player_index(), 2);
    }

    #[test]
    fn test_small_board_draw() {
        let config = GameConfig {
            board: crate::config::BoardConfig { columns: 2, rows: 2 },
            ..GameConfig::default()
        };
        let mut game = Game::new(config).unwrap();
        game.start().unwrap();
        play(&mut game, &[0, 0, 1, 1]);
        assert_eq!(game.outcome(), Some(&Outcome::Draw));
    }

    #[test]
    fn test_hover_hint_follows_column() {
        let mut game = started();
        assert!(game.snapshot().hint.is_none());

        assert!(game.on_column_hovered(Some(2)));
        assert!(!game.on_column_hovered(Some(2)));
        assert_eq!(game.snapshot().hint, Some(SlotPos::new(5, 2)));

        game.on_column_selected(2);
        assert_eq!(game.snapshot().hint, Some(SlotPos::new(4, 2)));

        assert!(game.on_column_hovered(Some(9)));
        assert_eq!(game.hovered_column(), None);
    }

    #[test]
    fn test_hover_hint_absent_when_column_full_or_finished() {
        let mut game = started();
        game.on_column_hovered(Some(0));
        play(&mut game, &[0, 0, 0, 0, 0, 0]);
        assert_eq!(game.snapshot().hint, None);

        game.on_column_hovered(Some(3));
        play(&mut game, &[3, 4, 3, 4, 3, 4, 3]);
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.snapshot().hint, None);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = started();
        play(&mut game, &[1]);
        let snapshot = game.snapshot();

        assert_eq!((snapshot.columns, snapshot.rows), (7, 6));
        assert_eq!(snapshot.occupant(5, 1), Some(RED));
        assert_eq!(snapshot.occupant(5, 0), None);
        assert_eq!(snapshot.phase, Phase::Playing);
        assert_eq!(snapshot.current_player, Some(YELLOW));
        assert!(snapshot.undo_available);
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.players[0].name, "Red");
        assert_eq!(snapshot.players[1].color, "#FFFF00");
    }
}
