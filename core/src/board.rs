use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use rand::{Rng, prelude::*};
use serde::{Deserialize, Serialize};

use crate::*;

const LIT: char = 'O';
const UNLIT: char = '.';

/// Lights Out board, `true` is lit.
///
/// Dimensions are fixed at construction. Transitions go through
/// [`Board::flip_around`], which leaves the original value untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// Lights each cell independently with probability `config.chance_lit`.
    pub fn random<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        Self::from_draws(config, || rng.random::<f64>())
    }

    /// Lights a cell when its draw from `draw`, taken in row-major order, is below
    /// `config.chance_lit`.
    pub fn from_draws(config: BoardConfig, mut draw: impl FnMut() -> f64) -> Self {
        let chance = config.chance_lit;
        let cells =
            Array2::from_shape_simple_fn(config.size.to_nd_index(), || draw() < chance);
        Self { cells }
    }

    pub fn unlit(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (nrows, ncols) = cells.dim();
        let fits = |len: usize| len > 0 && Coord::try_from(len).is_ok();
        if !fits(nrows) || !fits(ncols) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    /// Parses rows written with `O` for lit and `.` for unlit cells.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |row| row.chars().count());
        let mut flat = Vec::with_capacity(rows.len() * ncols);

        for row in rows {
            let before = flat.len();
            for symbol in row.chars() {
                flat.push(match symbol {
                    LIT => true,
                    UNLIT => false,
                    other => return Err(GameError::InvalidCellSymbol(other)),
                });
            }
            if flat.len() - before != ncols {
                return Err(GameError::InvalidBoardShape);
            }
        }

        let cells = Array2::from_shape_vec((rows.len(), ncols), flat)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_cells(cells)
    }

    /// `(nrows, ncols)`
    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn contains(&self, target: Target) -> bool {
        to_in_bounds(target, self.size()).is_some()
    }

    /// Lit state at `target`, `None` when off the board.
    pub fn is_lit(&self, target: Target) -> Option<bool> {
        to_in_bounds(target, self.size()).map(|coords| self[coords])
    }

    pub fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = bool> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }

    /// Board after toggling `target` and its orthogonal neighbors.
    ///
    /// Candidates outside the board are skipped, including the center itself.
    pub fn flip_around(&self, target: Target) -> Self {
        let mut next = self.clone();
        next.flip_around_in_place(target);
        next
    }

    /// In-place form of [`Board::flip_around`], returns how many cells changed.
    pub fn flip_around_in_place(&mut self, target: Target) -> CellCount {
        let mut flipped = 0;
        for coords in self.iter_plus(target) {
            let cell = &mut self.cells[coords.to_nd_index()];
            *cell = !*cell;
            flipped += 1;
        }
        flipped
    }

    /// True once every cell is unlit.
    pub fn has_won(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn iter_plus(&self, target: Target) -> PlusIter {
        PlusIter::new(target, self.size())
    }
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for lit in row {
                write!(f, "{}", if lit { LIT } else { UNLIT })?;
            }
        }
        Ok(())
    }
}
