//! Fluent construction of games.

use crate::board::Player;
use crate::config::{GameConfig, LeavePolicy};
use crate::machine::Game;
use crate::matchmaking::CoinFlip;

/// Builder for [`Game`] with a fluent API.
///
/// # Example
///
/// ```
/// use tictactoe_engine::board::Player;
/// use tictactoe_engine::builder::GameBuilder;
/// use tictactoe_engine::matchmaking::FixedCoin;
///
/// let game = GameBuilder::new()
///     .starting_player(Player::Crosses)
///     .coin(FixedCoin(Player::Circles))
///     .build();
///
/// assert_eq!(game.state_name(), "waiting");
/// assert_eq!(game.context().current_mover(), Player::Crosses);
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    coin: Option<Box<dyn CoinFlip>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn starting_player(mut self, player: Player) -> Self {
        self.config.starting_player = player;
        self
    }

    pub fn leave_policy(mut self, policy: LeavePolicy) -> Self {
        self.config.leave_policy = policy;
        self
    }

    /// Seed the default coin. Ignored when [`coin`](Self::coin) is set.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Supply the first-seat coin flip.
    pub fn coin(mut self, coin: impl CoinFlip + 'static) -> Self {
        self.coin = Some(Box::new(coin));
        self
    }

    pub fn build(self) -> Game {
        match self.coin {
            Some(coin) => Game::with_coin(self.config, coin),
            None => Game::new(self.config),
        }
    }
}
