use std::fmt;

use super::board::Board;
use super::player::{Mark, PlayerId, Registry};
use super::turn::TurnState;
use super::win::{Outcome, WinDetector};
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError, RegistrationError};

/// A validated move against a specific turn of a specific game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub column: usize,
    /// Row the mark lands on (0 is the bottom).
    pub row: usize,
    pub player: PlayerId,
    pub mark: Mark,
    /// Turn the move was validated against.
    pub turn: u32,
}

/// Coarse lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    WaitingForPlayers { registered: usize },
    InProgress,
    Terminal,
}

/// Read-only summary of a game for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StatusView {
    pub phase: Phase,
    pub active_mark: Option<Mark>,
    pub active_player: Option<PlayerId>,
    pub turn: u32,
    pub outcome: Outcome,
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.phase, self.outcome, self.active_mark) {
            (Phase::WaitingForPlayers { registered }, _, _) => {
                write!(f, "waiting for players ({registered}/2)")
            }
            (_, Outcome::Win(mark), _) => write!(f, "{mark} wins on turn {}", self.turn),
            (_, Outcome::Draw, _) => write!(f, "draw on turn {}", self.turn),
            (_, Outcome::Ongoing, Some(mark)) => write!(f, "turn {}: {mark} to move", self.turn),
            (_, Outcome::Ongoing, None) => write!(f, "turn {}", self.turn),
        }
    }
}

/// One Connect Four game: board, seated players, turn tracking, and the
/// win rule. Each instance owns all of its state.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: Registry,
    turn: TurnState,
    detector: WinDetector,
}

impl Game {
    /// Create an empty game from a config that already passed validation.
    pub(crate) fn new(config: GameConfig) -> Self {
        Game {
            config,
            board: Board::new(config.width, config.height),
            players: Registry::new(),
            turn: TurnState::new(),
            detector: WinDetector::new(config.win_length),
        }
    }

    /// Validate `config` and create an empty game.
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Registry {
        &self.players
    }

    pub fn mark_of(&self, player: PlayerId) -> Option<Mark> {
        self.players.mark_of(player)
    }

    pub fn outcome(&self) -> Outcome {
        self.turn.outcome()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.turn.is_terminal()
    }

    /// Seat a player and return the mark assigned to them. The game starts
    /// once the second player is seated.
    pub fn register(&mut self, player: PlayerId) -> Result<Mark, RegistrationError> {
        let mark = self.players.register(player).inspect_err(|e| {
            tracing::debug!(%player, error = %e, "registration rejected");
        })?;
        tracing::info!(%player, %mark, "player registered");
        if self.players.is_full() {
            self.turn.start();
            tracing::info!("both players registered, game started");
        }
        Ok(mark)
    }

    /// Columns that can still take a mark, empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Check a move without changing anything.
    pub fn validate_move(&self, column: usize, player: PlayerId) -> Result<Move, MoveError> {
        let Some(active) = self.turn.active() else {
            return Err(MoveError::WaitingForPlayers);
        };
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.width() {
            return Err(MoveError::InvalidColumn {
                column,
                width: self.board.width(),
            });
        }
        if self.players.player(active) != Some(player) {
            return Err(MoveError::NotYourTurn(player));
        }
        let row = self
            .board
            .landing_row(column)
            .ok_or(MoveError::ColumnFull(column))?;

        Ok(Move {
            column,
            row,
            player,
            mark: active,
            turn: self.turn.turn(),
        })
    }

    /// Drop `player`'s mark into `column`: validate, apply, evaluate, and
    /// advance the turn in one step.
    pub fn play(&mut self, column: usize, player: PlayerId) -> Result<Outcome, MoveError> {
        let mv = self.validate_move(column, player).inspect_err(|e| {
            tracing::debug!(%player, column, error = %e, "move rejected");
        })?;
        self.apply(mv)
    }

    fn apply(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        if mv.turn != self.turn.turn() || self.turn.active() != Some(mv.mark) {
            return Err(inconsistency(format!(
                "stale move for turn {} applied on turn {}",
                mv.turn,
                self.turn.turn()
            )));
        }
        if let Err(e) = self.board.place(mv.row, mv.column, mv.mark) {
            tracing::error!(error = %e, column = mv.column, row = mv.row, "board rejected a validated move");
            return Err(e);
        }
        tracing::debug!(
            player = %mv.player,
            mark = %mv.mark,
            column = mv.column,
            row = mv.row,
            turn = mv.turn,
            "move applied"
        );

        let outcome = self.detector.evaluate(&self.board, &mv);
        if outcome.is_terminal() {
            self.turn.finish(outcome);
            tracing::info!(?outcome, turn = mv.turn, "game over");
        } else {
            self.turn.advance();
        }
        Ok(outcome)
    }

    /// Summary of the game. Never mutates anything.
    pub fn status(&self) -> StatusView {
        let phase = if !self.players.is_full() {
            Phase::WaitingForPlayers {
                registered: self.players.len(),
            }
        } else if self.is_terminal() {
            Phase::Terminal
        } else {
            Phase::InProgress
        };
        let active_mark = self.turn.active();
        StatusView {
            phase,
            active_mark,
            active_player: active_mark.and_then(|m| self.players.player(m)),
            turn: self.turn.turn(),
            outcome: self.turn.outcome(),
        }
    }
}

fn inconsistency(message: String) -> MoveError {
    tracing::error!(%message, "internal inconsistency");
    MoveError::InternalInconsistency(message)
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
