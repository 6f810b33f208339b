use super::player::Mark;
use super::win::Outcome;

/// Whose turn it is, how many turns have passed, and how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    active: Option<Mark>,
    turn: u32,
    outcome: Outcome,
}

impl TurnState {
    pub fn new() -> Self {
        TurnState {
            active: None,
            turn: 0,
            outcome: Outcome::Ongoing,
        }
    }

    /// Hand the first turn to Player1.
    pub fn start(&mut self) {
        if self.active.is_none() {
            self.active = Some(Mark::X);
        }
    }

    pub fn active(&self) -> Option<Mark> {
        self.active
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Move on to the next turn after a non-terminal move.
    pub fn advance(&mut self) {
        if self.is_terminal() {
            return;
        }
        self.turn += 1;
        self.active = self.active.map(Mark::other);
    }

    /// Freeze the state with a terminal outcome.
    pub fn finish(&mut self, outcome: Outcome) {
        if !self.is_terminal() {
            self.outcome = outcome;
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
