#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod session;
mod types;

/// Shape of a board and how likely each cell is to start lit.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// `(nrows, ncols)`
    pub size: Coord2,
    pub chance_lit: f64,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, chance_lit: f64) -> Self {
        Self { size, chance_lit }
    }

    pub fn new((nrows, ncols): Coord2, chance_lit: f64) -> Self {
        let size = (nrows.max(1), ncols.max(1));
        if size != (nrows, ncols) {
            log::warn!("Board size {nrows}x{ncols} is empty, using {}x{}", size.0, size.1);
        }

        let clamped = if chance_lit.is_nan() {
            0.0
        } else {
            chance_lit.clamp(0.0, 1.0)
        };
        if clamped != chance_lit {
            log::warn!("Chance {chance_lit} is outside [0, 1], using {clamped}");
        }

        Self::new_unchecked(size, clamped)
    }

    pub const fn nrows(&self) -> Coord {
        self.size.0
    }

    pub const fn ncols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked((5, 5), 0.25)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    NoChange,
    Flipped,
    Won,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flipped => true,
            Self::Won => true,
        }
    }
}
