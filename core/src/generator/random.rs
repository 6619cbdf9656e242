use hashbrown::HashSet;

use super::*;

/// Places the configured number of mines uniformly at random, without
/// replacement, over the whole grid. The same seed reproduces the same board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        // config guarantees mines < total cells, so the rejection loop ends
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut picked: HashSet<Pos> = HashSet::with_capacity(config.mines as usize);
        while picked.len() < config.mines as usize {
            let x = rng.random_range(0..config.width);
            let y = rng.random_range(0..config.height);
            picked.insert((x, y));
        }

        let positions: Vec<Pos> = picked.into_iter().collect();
        log::debug!(
            "placed {} mines on a {}x{} board (seed {})",
            positions.len(),
            config.width,
            config.height,
            self.seed
        );
        Board::from_mine_positions(config.width, config.height, &positions)
    }
}
