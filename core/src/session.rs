use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    InProgress,
    Won,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }

    fn of(board: &Board) -> Self {
        if board.has_won() {
            Self::Won
        } else {
            Self::InProgress
        }
    }
}

/// One game of Lights Out: the board plus the moves that produced it.
///
/// The board itself accepts flips forever; the session stops accepting them
/// once every light is off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    moves: Vec<Target>,
    state: SessionState,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        let state = SessionState::of(&board);
        if state.is_finished() {
            log::debug!("Session started on a board with no lit cells");
        }
        Self {
            board,
            moves: Vec::new(),
            state,
        }
    }

    pub fn generate(generator: impl BoardGenerator, config: BoardConfig) -> Self {
        Self::new(generator.generate(config))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn moves(&self) -> &[Target] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn flip(&mut self, target: Target) -> Result<FlipOutcome> {
        self.check_not_finished()?;

        if self.board.iter_plus(target).next().is_none() {
            return Ok(FlipOutcome::NoChange);
        }

        self.board = self.board.flip_around(target);
        self.moves.push(target);

        self.state = SessionState::of(&self.board);
        Ok(if self.state.is_finished() {
            log::debug!("Board cleared after {} moves", self.moves.len());
            FlipOutcome::Won
        } else {
            FlipOutcome::Flipped
        })
    }

    /// Flips the cell addressed by a `"y-x"` key.
    pub fn flip_key(&mut self, key: &str) -> Result<FlipOutcome> {
        let key: CellKey = key.parse()?;
        self.flip(key.target())
    }

    /// Reverts the last move, returning the target it flipped.
    ///
    /// A won game is final, so undo is refused once the board is cleared.
    pub fn undo(&mut self) -> Result<Option<Target>> {
        self.check_not_finished()?;

        let Some(target) = self.moves.pop() else {
            return Ok(None);
        };
        self.board = self.board.flip_around(target);
        self.state = SessionState::of(&self.board);
        Ok(Some(target))
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(rows: &[&str]) -> GameSession {
        GameSession::new(Board::from_rows(rows).unwrap())
    }

    #[test]
    fn solving_move_transitions_to_won() {
        let mut game = session(&[".O.", "OOO", ".O."]);
        assert_eq!(game.state(), SessionState::default());
        assert_eq!(game.state(), SessionState::InProgress);

        assert_eq!(game.flip((1, 1)).unwrap(), FlipOutcome::Won);
        assert_eq!(game.state(), SessionState::Won);
        assert!(game.board().has_won());
        assert_eq!(game.moves(), &[(1, 1)]);
    }

    #[test]
    fn won_session_rejects_further_flips() {
        let mut game = session(&["O"]);
        game.flip((0, 0)).unwrap();

        assert_eq!(game.flip((0, 0)), Err(GameError::AlreadyEnded));
        assert_eq!(game.flip((7, 7)), Err(GameError::AlreadyEnded));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn dark_board_starts_won() {
        let game = GameSession::generate(RandomBoardGenerator::new(3), BoardConfig::new((2, 2), 0.0));
        assert!(game.is_finished());
        assert_eq!(game.size(), (2, 2));
    }

    #[test]
    fn off_board_flip_is_not_recorded() {
        let mut game = session(&["O.", ".."]);

        assert_eq!(game.flip((4, 4)).unwrap(), FlipOutcome::NoChange);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board(), &Board::from_rows(&["O.", ".."]).unwrap());
    }

    #[test]
    fn flip_that_only_reaches_neighbor_counts() {
        let mut game = session(&["O.", ".."]);

        let outcome = game.flip((-1, 0)).unwrap();

        assert_eq!(outcome, FlipOutcome::Won);
        assert!(outcome.has_update());
    }

    #[test]
    fn flip_key_uses_row_dash_col() {
        let mut game = session(&["...", "...", "O.."]);

        assert_eq!(game.flip_key("0-2").unwrap(), FlipOutcome::Flipped);
        assert_eq!(game.board(), &Board::from_rows(&[".OO", "..O", "O.."]).unwrap());
        assert_eq!(game.flip_key("zero"), Err(GameError::InvalidCellKey));
    }

    #[test]
    fn undo_replays_moves_backwards() {
        let start = Board::from_rows(&["O.O", "...", "O.."]).unwrap();
        let mut game = GameSession::new(start.clone());

        game.flip((0, 0)).unwrap();
        game.flip((2, 1)).unwrap();
        assert_eq!(game.undo(), Ok(Some((2, 1))));
        assert_eq!(game.undo(), Ok(Some((0, 0))));
        assert_eq!(game.undo(), Ok(None));
        assert_eq!(game.board(), &start);
    }

    #[test]
    fn won_session_refuses_undo() {
        let mut game = session(&["O"]);
        game.flip((0, 0)).unwrap();

        assert_eq!(game.undo(), Err(GameError::AlreadyEnded));
        assert_eq!(game.state(), SessionState::Won);
        assert_eq!(game.moves(), &[(0, 0)]);
        assert!(game.board().has_won());
    }
}
