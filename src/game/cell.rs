use std::fmt;
use std::str::FromStr;

use crate::error::IdentifierError;

/// The two rows of the board. Player One owns the left row, Player Two the
/// right row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Side letter as it appears in identifiers ("3L", "4R")
    pub fn letter(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

/// A playable pocket: side plus position 1-6.
///
/// Positions count with the direction of play, so position 6 is sown first
/// on each row and position 1 is the last pocket before the owner's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PocketId {
    side: Side,
    pos: u8,
}

impl PocketId {
    /// Create a pocket identifier. Returns `None` unless `pos` is 1-6.
    pub fn new(side: Side, pos: u8) -> Option<PocketId> {
        if (1..=6).contains(&pos) {
            Some(PocketId { side, pos })
        } else {
            None
        }
    }

    pub fn side(self) -> Side {
        self.side
    }

    pub fn pos(self) -> u8 {
        self.pos
    }

    /// The directly opposite pocket: position p maps to 7 - p on the other
    /// side, so "3L" faces "4R" and "1R" faces "6L".
    pub fn opposite(self) -> PocketId {
        PocketId {
            side: self.side.other(),
            pos: 7 - self.pos,
        }
    }
}

impl fmt::Display for PocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pos, self.side.letter())
    }
}

/// Any cell a stone can land in: a pocket or one of the two stores.
///
/// The textual form is the game's addressing scheme: "1L".."6L" and
/// "1R".."6R" for pockets, "1S" for the left store and "2S" for the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellId {
    Pocket(PocketId),
    Store(Side),
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellId::Pocket(p) => write!(f, "{p}"),
            CellId::Store(Side::Left) => write!(f, "1S"),
            CellId::Store(Side::Right) => write!(f, "2S"),
        }
    }
}

impl FromStr for CellId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<CellId, IdentifierError> {
        let mut chars = s.chars();
        let (first, second) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a, b.to_ascii_uppercase()),
            _ => return Err(IdentifierError::WrongLength(s.to_string())),
        };

        match second {
            'L' | 'R' => {
                let side = if second == 'L' { Side::Left } else { Side::Right };
                let pos = first
                    .to_digit(10)
                    .filter(|d| (1..=6).contains(d))
                    .ok_or(IdentifierError::InvalidPosition(first))?;
                Ok(CellId::Pocket(PocketId { side, pos: pos as u8 }))
            }
            'S' => match first {
                '1' => Ok(CellId::Store(Side::Left)),
                '2' => Ok(CellId::Store(Side::Right)),
                _ => Err(IdentifierError::InvalidPosition(first)),
            },
            other => Err(IdentifierError::InvalidSide(other)),
        }
    }
}

/// A single stone-holding cell. Pockets and stores share this representation;
/// only the board decides which ids are playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    stones: u32,
}

impl Cell {
    pub fn new(stones: u32) -> Cell {
        Cell { stones }
    }

    pub fn stones(&self) -> u32 {
        self.stones
    }

    pub fn is_empty(&self) -> bool {
        self.stones == 0
    }

    pub fn add(&mut self, n: u32) {
        self.stones += n;
    }

    /// Remove `n` stones. The board only removes what sowing logic guarantees
    /// is present; going negative is a caller bug, so fail loudly.
    pub fn remove(&mut self, n: u32) {
        assert!(
            n <= self.stones,
            "removed {n} stones from a cell holding {}",
            self.stones
        );
        self.stones -= n;
    }
}

impl fmt::Display for Cell {
    /// Two-character field for fixed-width board printing: single digits get
    /// a trailing space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stones > 9 {
            write!(f, "{}", self.stones)
        } else {
            write!(f, "{} ", self.stones)
        }
    }
}
