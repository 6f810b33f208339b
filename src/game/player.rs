use std::fmt;

use uuid::Uuid;

use super::board::Cell;
use crate::error::RegistrationError;

/// Opaque identifier a coordinator assigns to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generate a fresh random identifier.
    pub fn new_v4() -> Self {
        PlayerId(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        PlayerId(id)
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        PlayerId(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The token a seated player drops. Player1 plays `X`, Player2 plays `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the other mark
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    /// Icon used when rendering the board
    pub fn icon(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    fn slot(self) -> usize {
        match self {
            Mark::X => 0,
            Mark::O => 1,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.icon())
    }
}

/// The two player slots of one game. Slots never change once filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    slots: [Option<PlayerId>; 2],
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a player in the first open slot and return its mark.
    pub fn register(&mut self, player: PlayerId) -> Result<Mark, RegistrationError> {
        if self.mark_of(player).is_some() {
            return Err(RegistrationError::AlreadyRegistered(player));
        }
        let mark = [Mark::X, Mark::O]
            .into_iter()
            .find(|m| self.slots[m.slot()].is_none())
            .ok_or(RegistrationError::RegistrationFull)?;
        self.slots[mark.slot()] = Some(player);
        Ok(mark)
    }

    /// Number of occupied slots (0, 1 or 2).
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == 2
    }

    /// Player seated under the given mark.
    pub fn player(&self, mark: Mark) -> Option<PlayerId> {
        self.slots[mark.slot()]
    }

    /// Mark held by the given player, if seated.
    pub fn mark_of(&self, player: PlayerId) -> Option<Mark> {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|m| self.slots[m.slot()] == Some(player))
    }
}
