use super::board::Board;
use super::cell::CellId;
use super::player::{GameOutcome, Player};
use crate::error::MoveError;

/// What a single applied move did, beyond mutating the board. The caller
/// uses this for feedback; whose turn it now is lives on the state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The last stone landed in the mover's own store: same player goes again.
    ExtraTurn,
    /// The last stone landed alone in one of the mover's empty pockets and
    /// the opposite pocket was occupied: both were claimed into the mover's
    /// store, and play passed to the other player.
    Capture { captured: u32 },
    /// Play passed to the other player.
    Switched,
}

/// The full game as an explicit state machine: board, whose turn it is, and
/// the recorded outcome once the game ends. `apply_move` is the only
/// transition; invalid input never mutates the board, so a driving loop can
/// simply re-prompt on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with the default four stones per pocket.
    pub fn initial() -> Self {
        Self::with_stones(super::board::DEFAULT_STONES)
    }

    /// Create initial game state with a custom pocket count.
    pub fn with_stones(stones_per_pocket: u32) -> Self {
        GameState {
            board: Board::with_stones(stones_per_pocket),
            current_player: Player::One, // Player 1 starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply the move named by a textual identifier such as "3L".
    ///
    /// Validation happens up front: the token must parse, name a pocket (not
    /// a store) on the current player's side, and that pocket must be
    /// non-empty; after the game ends every move is rejected. Then the
    /// pocket is sown and the landing cell decides the rule to apply: the
    /// mover's own store grants an extra turn; landing alone in an own-side
    /// pocket with a non-empty opposite pocket captures both and passes the
    /// turn; anything else just passes the turn. Landing on the opponent's
    /// side never captures, even with exactly one stone.
    ///
    /// When the move empties either row the remaining stones are swept into
    /// their owners' stores and the outcome is recorded; the state is
    /// read-only from then on.
    pub fn apply_move(&mut self, input: &str) -> Result<TurnOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let id: CellId = input.trim().parse()?;
        let CellId::Pocket(start) = id else {
            return Err(MoveError::NotAPocket(id));
        };
        if start.side() != self.current_player.side() {
            return Err(MoveError::WrongSide(start));
        }

        let landed = self.board.sow(start)?;

        let outcome = match landed {
            CellId::Store(side) if side == self.current_player.side() => TurnOutcome::ExtraTurn,
            CellId::Pocket(p)
                if p.side() == self.current_player.side()
                    && self.board.stones(landed) == 1
                    && self.board.stones(CellId::Pocket(p.opposite())) != 0 =>
            {
                let captured = self.board.steal(p);
                self.current_player = self.current_player.other();
                TurnOutcome::Capture { captured }
            }
            _ => {
                self.current_player = self.current_player.other();
                TurnOutcome::Switched
            }
        };

        if self.board.game_over() {
            self.board.sweep();
            self.outcome = Some(self.board.winner());
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{PocketId, Side};

    fn id(s: &str) -> CellId {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.board().total(), 48);
    }

    #[test]
    fn test_switch_after_plain_move() {
        let mut state = GameState::initial();
        let outcome = state.apply_move("3L").unwrap();
        assert_eq!(outcome, TurnOutcome::Switched);
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.board().stones(id("6R")), 5);
    }

    #[test]
    fn test_free_turn_on_own_store_landing() {
        let mut state = GameState::initial();
        // 4L's fourth stone lands in Player 1's store.
        let outcome = state.apply_move("4L").unwrap();
        assert_eq!(outcome, TurnOutcome::ExtraTurn);
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.board().store(Side::Left), 1);
    }

    #[test]
    fn test_capture_on_lone_landing() {
        let mut state = GameState::initial();
        let board = board_mut(&mut state);
        // 2L holds one stone; it will land alone in the empty 1L, facing a
        // loaded 6R.
        board.set_stones(id("2L"), 1);
        board.set_stones(id("1L"), 0);
        board.set_stones(id("6R"), 5);

        let outcome = state.apply_move("2L").unwrap();
        assert_eq!(outcome, TurnOutcome::Capture { captured: 6 });
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.board().stones(id("1L")), 0);
        assert_eq!(state.board().stones(id("6R")), 0);
        assert_eq!(state.board().store(Side::Left), 6);
    }

    #[test]
    fn test_no_capture_when_opposite_is_empty() {
        let mut state = GameState::initial();
        let board = board_mut(&mut state);
        board.set_stones(id("2L"), 1);
        board.set_stones(id("1L"), 0);
        board.set_stones(id("6R"), 0);

        let outcome = state.apply_move("2L").unwrap();
        assert_eq!(outcome, TurnOutcome::Switched);
        assert_eq!(state.board().stones(id("1L")), 1);
        assert_eq!(state.board().store(Side::Left), 0);
    }

    #[test]
    fn test_no_capture_across_the_boundary() {
        // A sow from 1L spills onto the opponent's row; landing alone there
        // must not capture.
        let mut state = GameState::initial();
        let board = board_mut(&mut state);
        board.set_stones(id("1L"), 2);
        board.set_stones(id("6R"), 0);

        let outcome = state.apply_move("1L").unwrap();
        assert_eq!(outcome, TurnOutcome::Switched);
        assert_eq!(state.board().stones(id("6R")), 1);
        assert_eq!(state.board().store(Side::Left), 1);
        // 6R faces 1L, which is now empty anyway, but the side guard is what
        // blocks the steal before any pocket inspection matters.
        assert_eq!(state.board().store(Side::Right), 0);
    }

    #[test]
    fn test_rejects_wrong_side_without_mutation() {
        let mut state = GameState::initial();
        let before = state.clone();
        assert!(matches!(
            state.apply_move("3R"),
            Err(MoveError::WrongSide(_))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejects_store_and_garbage_without_mutation() {
        let mut state = GameState::initial();
        let before = state.clone();
        assert!(matches!(state.apply_move("1S"), Err(MoveError::NotAPocket(_))));
        assert!(matches!(state.apply_move("9Q"), Err(MoveError::Identifier(_))));
        assert!(matches!(state.apply_move(""), Err(MoveError::Identifier(_))));
        assert_eq!(state, before);
    }

    #[test]
    fn test_rejects_empty_pocket_without_mutation() {
        let mut state = GameState::initial();
        board_mut(&mut state).set_stones(id("5L"), 0);
        let before = state.clone();
        assert!(matches!(
            state.apply_move("5L"),
            Err(MoveError::EmptyPocket(_))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_input_is_trimmed_and_case_insensitive() {
        let mut state = GameState::initial();
        assert_eq!(state.apply_move(" 3l ").unwrap(), TurnOutcome::Switched);
    }

    #[test]
    fn test_game_ends_with_sweep_and_outcome() {
        let mut state = GameState::initial();
        let board = board_mut(&mut state);
        // Player 1's last stone sits in 1L; everything else is on the right.
        for pos in 1..=6 {
            board.set_stones(id(&format!("{pos}L")), 0);
            board.set_stones(id(&format!("{pos}R")), 7);
        }
        board.set_stones(id("1L"), 1);
        board.set_stones(id("1S"), 5);
        assert_eq!(state.board().total(), 48);

        // The stone drops into 1S, which would grant an extra turn, but the
        // left row is now empty: game over, sweep the right row into 2S.
        let outcome = state.apply_move("1L").unwrap();
        assert_eq!(outcome, TurnOutcome::ExtraTurn);
        assert!(state.is_terminal());
        assert_eq!(state.board().side_total(Side::Left), 0);
        assert_eq!(state.board().side_total(Side::Right), 0);
        assert_eq!(state.board().store(Side::Left), 6);
        assert_eq!(state.board().store(Side::Right), 42);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Two)));
        assert_eq!(state.board().total(), 48);

        assert!(matches!(state.apply_move("3R"), Err(MoveError::GameOver)));
    }

    #[test]
    fn test_tie_outcome() {
        let mut state = GameState::initial();
        let board = board_mut(&mut state);
        for pos in 1..=6 {
            board.set_stones(id(&format!("{pos}L")), 0);
            board.set_stones(id(&format!("{pos}R")), 0);
        }
        board.set_stones(id("1L"), 1);
        board.set_stones(id("1S"), 23);
        board.set_stones(id("2S"), 24);

        // The single stone drops into 1S and both rows are empty: 24 apiece.
        let outcome = state.apply_move("1L").unwrap();
        assert_eq!(outcome, TurnOutcome::ExtraTurn);
        assert_eq!(state.outcome(), Some(GameOutcome::Tie));
        assert_eq!(state.board().store(Side::Left), 24);
        assert_eq!(state.board().store(Side::Right), 24);
    }

    #[test]
    fn test_scripted_opening_conserves_stones() {
        // A deterministic opening exchange, hand-checked against the ring.
        let mut state = GameState::initial();
        assert_eq!(state.apply_move("4L").unwrap(), TurnOutcome::ExtraTurn);
        assert_eq!(state.apply_move("6L").unwrap(), TurnOutcome::Switched);
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.apply_move("4R").unwrap(), TurnOutcome::ExtraTurn);
        assert_eq!(state.apply_move("6R").unwrap(), TurnOutcome::Switched);
        assert_eq!(state.current_player(), Player::One);

        assert_eq!(state.board().store(Side::Left), 1);
        assert_eq!(state.board().store(Side::Right), 1);
        assert_eq!(state.board().total(), 48);
        assert!(!state.is_terminal());
    }

    // Tests drive the private board through the public state; this keeps the
    // setup honest about which invariants it bends.
    fn board_mut(state: &mut GameState) -> &mut Board {
        &mut state.board
    }

    #[test]
    fn test_capture_guard_requires_exactly_one_stone() {
        let mut state = GameState::initial();
        let board = board_mut(&mut state);
        // 3L lands its last stone in 1L, which already holds stones.
        board.set_stones(id("3L"), 2);
        let outcome = state.apply_move("3L").unwrap();
        assert_eq!(outcome, TurnOutcome::Switched);
        assert_eq!(state.board().stones(id("1L")), 5);
        assert_eq!(state.board().store(Side::Left), 0);
    }

    #[test]
    fn test_pocket_id_helper() {
        assert_eq!(
            id("4L"),
            CellId::Pocket(PocketId::new(Side::Left, 4).unwrap())
        );
    }
}
