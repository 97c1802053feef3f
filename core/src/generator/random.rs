use super::*;

/// Purely random generation, every cell lit independently with the configured chance.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let board = Board::random(config, &mut rng);

        log::debug!(
            "Generated {}x{} board from seed {}, {} of {} cells lit",
            config.nrows(),
            config.ncols(),
            self.seed,
            board.lit_count(),
            config.total_cells()
        );
        board
    }
}
