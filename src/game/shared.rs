use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::board::Board;
use super::player::{Mark, PlayerId};
use super::state::{Game, StatusView};
use super::win::Outcome;
use crate::error::{MoveError, RegistrationError};

/// Cloneable handle to one game for multi-threaded coordinators.
///
/// Every operation holds the game's lock for its whole duration, so a move is
/// validated and applied without another caller observing or changing the
/// game in between. Separate handles created with [`SharedGame::new`] never
/// share state.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        SharedGame {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    pub fn register(&self, player: PlayerId) -> Result<Mark, RegistrationError> {
        self.lock().register(player)
    }

    pub fn play(&self, column: usize, player: PlayerId) -> Result<Outcome, MoveError> {
        self.lock().play(column, player)
    }

    pub fn status(&self) -> StatusView {
        self.lock().status()
    }

    /// Owned snapshot of the board
    pub fn board(&self) -> Board {
        self.lock().board().clone()
    }

    /// Run a read-only closure against the game under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&*self.lock())
    }

    // Game never holds a half-applied move, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        Self::new(game)
    }
}
