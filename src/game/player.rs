use super::cell::{CellId, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The row this player sows from
    pub fn side(self) -> Side {
        match self {
            Player::One => Side::Left,
            Player::Two => Side::Right,
        }
    }

    /// The store this player scores into
    pub fn store(self) -> CellId {
        CellId::Store(self.side())
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Final result of a game. Ties are reported distinctly, never folded into
/// either player winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}
