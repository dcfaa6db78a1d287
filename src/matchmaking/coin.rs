//! Injectable randomness for seating the first participant.

use crate::board::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the unbiased coin flip used for the first joiner.
pub trait CoinFlip: Send {
    fn flip(&mut self) -> Player;
}

/// Coin backed by a seedable RNG.
#[derive(Debug)]
pub struct RandomCoin {
    rng: StdRng,
    seed: u64,
}

impl RandomCoin {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl CoinFlip for RandomCoin {
    fn flip(&mut self) -> Player {
        if self.rng.random_bool(0.5) {
            Player::Crosses
        } else {
            Player::Circles
        }
    }
}

/// Coin that always lands the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedCoin(pub Player);

impl CoinFlip for FixedCoin {
    fn flip(&mut self) -> Player {
        self.0
    }
}
