use super::cell::{Cell, CellId, PocketId, Side};
use super::player::{GameOutcome, Player};
use crate::error::MoveError;

pub const POCKETS_PER_SIDE: usize = 6;
pub const DEFAULT_STONES: u32 = 4;

/// Total cells in the arena: two rows of six pockets plus two stores.
const CELLS: usize = 14;
/// Cells one sow can target: everything except the opponent's store.
const RING: usize = 13;

/// The mancala board.
///
/// All fourteen cells live in a single arena laid out in counter-clockwise
/// ring order: left pockets 6L..1L (indices 0-5), the left store 1S (6),
/// right pockets 6R..1R (7-12), the right store 2S (13). Side views and
/// totals are derived from this arena; nothing else holds cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
    stones_per_pocket: u32,
}

fn index(id: CellId) -> usize {
    match id {
        CellId::Pocket(p) => match p.side() {
            Side::Left => 6 - p.pos() as usize,
            Side::Right => 13 - p.pos() as usize,
        },
        CellId::Store(Side::Left) => 6,
        CellId::Store(Side::Right) => 13,
    }
}

fn id_at(idx: usize) -> CellId {
    match idx {
        0..=5 => CellId::Pocket(
            PocketId::new(Side::Left, (6 - idx) as u8).expect("left arena position is 1-6"),
        ),
        6 => CellId::Store(Side::Left),
        7..=12 => CellId::Pocket(
            PocketId::new(Side::Right, (13 - idx) as u8).expect("right arena position is 1-6"),
        ),
        13 => CellId::Store(Side::Right),
        _ => unreachable!("arena index out of range"),
    }
}

impl Board {
    /// Create a board with every pocket holding the default four stones.
    pub fn new() -> Self {
        Self::with_stones(DEFAULT_STONES)
    }

    /// Create a board with `stones_per_pocket` stones in every pocket and
    /// both stores empty.
    pub fn with_stones(stones_per_pocket: u32) -> Self {
        let mut cells = [Cell::new(stones_per_pocket); CELLS];
        cells[index(CellId::Store(Side::Left))] = Cell::new(0);
        cells[index(CellId::Store(Side::Right))] = Cell::new(0);
        Board {
            cells,
            stones_per_pocket,
        }
    }

    /// Stone count of any cell.
    pub fn stones(&self, id: CellId) -> u32 {
        self.cells[index(id)].stones()
    }

    /// The cell itself, for fixed-width display.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[index(id)]
    }

    fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[index(id)]
    }

    /// Store count for one side.
    pub fn store(&self, side: Side) -> u32 {
        self.stones(CellId::Store(side))
    }

    /// Pocket counts for one side, indexed by position (element 0 is
    /// position 1). Enough for any renderer to reproduce the layout.
    pub fn side_counts(&self, side: Side) -> [u32; POCKETS_PER_SIDE] {
        let mut counts = [0; POCKETS_PER_SIDE];
        for (i, count) in counts.iter_mut().enumerate() {
            let id = PocketId::new(side, (i + 1) as u8).expect("side position is 1-6");
            *count = self.stones(CellId::Pocket(id));
        }
        counts
    }

    /// Sum of the six pockets on one side, stores excluded.
    pub fn side_total(&self, side: Side) -> u32 {
        self.side_counts(side).iter().sum()
    }

    /// Every stone on the board, pockets and stores. Conserved at
    /// 12 x stones_per_pocket throughout a game.
    pub fn total(&self) -> u32 {
        self.cells.iter().map(Cell::stones).sum()
    }

    /// The expected conserved total for this board.
    pub fn expected_total(&self) -> u32 {
        self.stones_per_pocket * 2 * POCKETS_PER_SIDE as u32
    }

    /// The ordered sowing targets starting from `start`: its immediate
    /// counter-clockwise neighbor first, then around the ring and back to
    /// `start` itself as the last element. The sower's own store appears
    /// exactly once; the opponent's store never appears.
    pub fn pocket_order(&self, start: PocketId) -> Vec<CellId> {
        let skip = CellId::Store(start.side().other());
        let mut order = Vec::with_capacity(RING);
        let mut idx = index(CellId::Pocket(start));
        while order.len() < RING {
            idx = (idx + 1) % CELLS;
            let id = id_at(idx);
            if id != skip {
                order.push(id);
            }
        }
        order
    }

    /// Sow every stone from `start`, one per ring target, wrapping as long
    /// as the source still holds stones. Returns the last cell that
    /// received a stone; that cell decides free turns and captures.
    ///
    /// A sow long enough to wrap passes through the source pocket (one
    /// stone in, one stone out) and keeps flowing, so the source always
    /// finishes empty and the landing cell is never the source.
    pub fn sow(&mut self, start: PocketId) -> Result<CellId, MoveError> {
        let source = CellId::Pocket(start);
        if self.cells[index(source)].is_empty() {
            return Err(MoveError::EmptyPocket(start));
        }

        let order = self.pocket_order(start);
        let mut last = source;
        let mut i = 0;
        while !self.cells[index(source)].is_empty() {
            let target = order[i];
            self.cell_mut(target).add(1);
            last = target;
            self.cell_mut(source).remove(1);
            i = (i + 1) % order.len();
        }
        Ok(last)
    }

    /// Capture: claim the landing pocket's stone plus everything in the
    /// directly opposite pocket into the landing side's store. Returns the
    /// number of stones captured; zero (and no mutation) if the opposite
    /// pocket is empty.
    pub fn steal(&mut self, landing: PocketId) -> u32 {
        let opposite = CellId::Pocket(landing.opposite());
        let across = self.stones(opposite);
        if across == 0 {
            return 0;
        }

        let landed = self.stones(CellId::Pocket(landing));
        self.cell_mut(CellId::Pocket(landing)).remove(landed);
        self.cell_mut(opposite).remove(across);
        self.cell_mut(CellId::Store(landing.side())).add(landed + across);
        landed + across
    }

    /// The game ends as soon as either side has no playable pockets.
    pub fn game_over(&self) -> bool {
        self.side_total(Side::Left) == 0 || self.side_total(Side::Right) == 0
    }

    /// End-of-game sweep: move every remaining pocket stone into its
    /// owner's store, zeroing the pockets. Call exactly once, after
    /// `game_over` turns true and before declaring a winner.
    pub fn sweep(&mut self) {
        for side in [Side::Left, Side::Right] {
            let mut swept = 0;
            for pos in 1..=POCKETS_PER_SIDE as u8 {
                let id = CellId::Pocket(
                    PocketId::new(side, pos).expect("sweep position is 1-6"),
                );
                let n = self.stones(id);
                self.cell_mut(id).remove(n);
                swept += n;
            }
            self.cell_mut(CellId::Store(side)).add(swept);
        }
    }

    /// Compare final store counts.
    pub fn winner(&self) -> GameOutcome {
        use std::cmp::Ordering;
        match self.store(Side::Left).cmp(&self.store(Side::Right)) {
            Ordering::Greater => GameOutcome::Winner(Player::One),
            Ordering::Less => GameOutcome::Winner(Player::Two),
            Ordering::Equal => GameOutcome::Tie,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_stones(&mut self, id: CellId, n: u32) {
        self.cells[index(id)] = Cell::new(n);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
