//! The game machine: owns one game's context and sequences events through it.

use super::context::{EndReason, GameContext};
use super::error::GameError;
use super::event::GameEvent;
use super::phase::Phase;
use super::transition::{game_transitions, Transition};
use crate::board::{has_winner, Player};
use crate::config::{GameConfig, LeavePolicy};
use crate::core::{State, StateHistory, StateTransition};
use crate::enforcement::validate_move;
use crate::matchmaking::{decide_seat, CoinFlip, ParticipantId, RandomCoin, SeatDecision};
use crate::snapshot::Snapshot;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Identifier of a game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Result of feeding one external event to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Event accepted; phase unchanged.
    Stayed(Phase),
    /// Event accepted and the phase moved on.
    Transitioned { from: Phase, to: Phase },
}

impl StepResult {
    pub fn phase(&self) -> Phase {
        match self {
            StepResult::Stayed(phase) => *phase,
            StepResult::Transitioned { to, .. } => *to,
        }
    }
}

/// A single tic-tac-toe game.
///
/// Created per game, driven by [`Game::send`], dropped when the caller is
/// done with it.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::board::Player;
/// use tictactoe_engine::machine::{Game, GameEvent, Phase};
/// use tictactoe_engine::matchmaking::FixedCoin;
/// use tictactoe_engine::GameConfig;
///
/// let mut game = Game::with_coin(GameConfig::default(), Box::new(FixedCoin(Player::Crosses)));
///
/// game.send(GameEvent::join("alice")).unwrap();
/// let step = game.send(GameEvent::join("bob")).unwrap();
///
/// assert_eq!(step.phase(), Phase::Playing);
/// assert_eq!(game.context().crosses_player_id().unwrap().as_str(), "alice");
/// assert_eq!(game.context().circles_player_id().unwrap().as_str(), "bob");
/// ```
pub struct Game {
    id: GameId,
    phase: Phase,
    context: GameContext,
    leave_policy: LeavePolicy,
    coin: Box<dyn CoinFlip>,
    transitions: Vec<Transition>,
    history: StateHistory<Phase>,
}

impl Game {
    /// New game in `waiting`, with a coin seeded from the config.
    pub fn new(config: GameConfig) -> Self {
        let coin = match config.seed {
            Some(seed) => RandomCoin::with_seed(seed),
            None => RandomCoin::from_entropy(),
        };
        Self::with_coin(config, Box::new(coin))
    }

    /// New game whose first-seat coin flip is supplied by the caller.
    pub fn with_coin(config: GameConfig, coin: Box<dyn CoinFlip>) -> Self {
        let id = GameId::new();
        debug!(game = %id, starting = %config.starting_player, "game created");
        Self {
            id,
            phase: Phase::Waiting,
            context: GameContext::new(config.starting_player),
            leave_policy: config.leave_policy,
            coin,
            transitions: game_transitions(),
            history: StateHistory::new(),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Observable phase name: `waiting`, `playing` or `ended`.
    pub fn state_name(&self) -> &'static str {
        self.phase.name()
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_final()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Process one external event to completion.
    ///
    /// Events raised while handling it are drained before this returns, and
    /// guarded transitions are settled after each one. A rejected external
    /// event leaves the game exactly as it was.
    #[instrument(skip(self), fields(game = %self.id, phase = self.phase.name()))]
    pub fn send(&mut self, event: GameEvent) -> Result<StepResult, GameError> {
        let start = self.phase;
        let mut queue = VecDeque::from([event]);
        let mut external = true;

        while let Some(event) = queue.pop_front() {
            let kind = event.kind();
            match self.handle(event) {
                Ok(raised) => {
                    debug!(event = kind, raised = raised.len(), "event accepted");
                    queue.extend(raised);
                }
                Err(err) if external => {
                    debug!(event = kind, error = %err, "event rejected");
                    return Err(err);
                }
                Err(err) => {
                    debug!(event = kind, error = %err, "raised event dropped");
                }
            }
            external = false;
            self.settle();
        }

        Ok(if self.phase == start {
            StepResult::Stayed(start)
        } else {
            StepResult::Transitioned {
                from: start,
                to: self.phase,
            }
        })
    }

    fn handle(&mut self, event: GameEvent) -> Result<Vec<GameEvent>, GameError> {
        match (self.phase, event) {
            (Phase::Ended, event) => Err(GameError::GameOver {
                event: event.kind(),
            }),

            (Phase::Waiting, GameEvent::PlayerJoin { participant }) => self.join(participant),
            (Phase::Playing, GameEvent::PlayerJoin { participant }) => {
                Err(GameError::NoOpenSeat { participant })
            }

            (phase, GameEvent::PlayerLeave { player }) => self.leave(phase, player),

            (Phase::Playing, GameEvent::Move { row, col }) => self.play(row, col),
            (Phase::Playing, GameEvent::CheckWinner { player }) => {
                self.check_winner(player);
                Ok(Vec::new())
            }
            (Phase::Playing, GameEvent::Winner { player }) => {
                self.context.conclude(Some(player), EndReason::Declared);
                Ok(Vec::new())
            }
            (Phase::Playing, GameEvent::Forfeit { player }) => {
                self.context
                    .conclude(Some(player.opponent()), EndReason::Forfeit);
                Ok(Vec::new())
            }

            (
                Phase::Waiting,
                event @ (GameEvent::Move { .. }
                | GameEvent::CheckWinner { .. }
                | GameEvent::Winner { .. }
                | GameEvent::Forfeit { .. }),
            ) => Err(GameError::InvalidTransition {
                event: event.kind(),
                phase: Phase::Waiting.name(),
            }),
        }
    }

    fn join(&mut self, participant: ParticipantId) -> Result<Vec<GameEvent>, GameError> {
        if let Some(player) = self.context.seat_of(&participant) {
            return Err(GameError::AlreadySeated {
                participant,
                player,
            });
        }

        let decision = decide_seat(
            self.context.crosses_player_id().is_some(),
            self.context.circles_player_id().is_some(),
            self.coin.as_mut(),
        );

        match decision {
            SeatDecision::Full => Err(GameError::NoOpenSeat { participant }),
            SeatDecision::Seat { player, startable } => {
                info!(participant = %participant, %player, "participant seated");
                self.context.seat(player, participant);
                if startable {
                    self.context.reset_turn();
                }
                Ok(Vec::new())
            }
        }
    }

    fn leave(&mut self, phase: Phase, player: Player) -> Result<Vec<GameEvent>, GameError> {
        let Some(participant) = self.context.vacate(player) else {
            return Err(GameError::SeatEmpty(player));
        };
        info!(participant = %participant, %player, "participant left");

        if phase == Phase::Playing {
            match self.leave_policy {
                LeavePolicy::Forfeit => self
                    .context
                    .conclude(Some(player.opponent()), EndReason::Forfeit),
                LeavePolicy::Abandon => self.context.conclude(None, EndReason::Abandoned),
            }
        }
        Ok(Vec::new())
    }

    fn play(&mut self, row: i64, col: i64) -> Result<Vec<GameEvent>, GameError> {
        let pos = validate_move(self.context.board(), row, col).map_err(GameError::InvalidMove)?;
        let mover = self.context.apply_move(pos);
        debug!(%mover, row, col, turn = self.context.turn(), "move applied");
        Ok(vec![GameEvent::CheckWinner { player: mover }])
    }

    fn check_winner(&mut self, player: Player) {
        if has_winner(self.context.board(), player) {
            self.context
                .conclude(Some(player), EndReason::LineCompleted);
        } else if self.context.board().is_full() {
            self.context.conclude(None, EndReason::BoardFull);
        }
    }

    /// Fire guarded transitions until none applies.
    fn settle(&mut self) {
        loop {
            let Some((from, to, label)) = self
                .transitions
                .iter()
                .find(|t| t.can_execute(self.phase, &self.context))
                .map(|t| (t.from, t.to, t.guard.label()))
            else {
                break;
            };
            self.history = self.history.record(StateTransition {
                from,
                to,
                timestamp: Utc::now(),
                turn: self.context.turn(),
            });
            self.phase = to;
            info!(
                from = from.name(),
                to = to.name(),
                guard = label,
                winner = ?self.context.winner(),
                "phase changed"
            );
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchmaking::FixedCoin;

    fn game(starting: Player, first_seat: Player) -> Game {
        let config = GameConfig {
            starting_player: starting,
            ..GameConfig::default()
        };
        Game::with_coin(config, Box::new(FixedCoin(first_seat)))
    }

    fn started() -> Game {
        let mut game = game(Player::Circles, Player::Crosses);
        game.send(GameEvent::join("alice")).unwrap();
        game.send(GameEvent::join("bob")).unwrap();
        game
    }

    #[test]
    fn first_join_waits() {
        let mut game = game(Player::Circles, Player::Circles);

        let step = game.send(GameEvent::join("alice")).unwrap();

        assert_eq!(step, StepResult::Stayed(Phase::Waiting));
        assert_eq!(game.context().seated_count(), 1);
        assert_eq!(game.context().seat_of(&"alice".into()), Some(Player::Circles));
    }

    #[test]
    fn second_join_starts_game() {
        let mut game = game(Player::Circles, Player::Circles);
        game.send(GameEvent::join("alice")).unwrap();

        let step = game.send(GameEvent::join("bob")).unwrap();

        assert_eq!(
            step,
            StepResult::Transitioned {
                from: Phase::Waiting,
                to: Phase::Playing
            }
        );
        assert_eq!(game.context().seat_of(&"bob".into()), Some(Player::Crosses));
        assert_eq!(game.context().turn(), 0);
        assert_eq!(game.history().get_path(), vec![&Phase::Waiting, &Phase::Playing]);
    }

    #[test]
    fn rejoin_by_seated_participant_is_rejected() {
        let mut game = game(Player::Circles, Player::Crosses);
        game.send(GameEvent::join("alice")).unwrap();

        let err = game.send(GameEvent::join("alice")).unwrap_err();

        assert_eq!(
            err,
            GameError::AlreadySeated {
                participant: "alice".into(),
                player: Player::Crosses
            }
        );
        assert_eq!(game.context().seated_count(), 1);
    }

    #[test]
    fn third_join_is_rejected() {
        let mut game = started();
        let before = game.context().clone();

        let err = game.send(GameEvent::join("carol")).unwrap_err();

        assert!(matches!(err, GameError::NoOpenSeat { .. }));
        assert_eq!(game.context(), &before);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn move_before_start_is_rejected() {
        let mut game = game(Player::Circles, Player::Crosses);

        let err = game.send(GameEvent::play(0, 0)).unwrap_err();

        assert_eq!(
            err,
            GameError::InvalidTransition {
                event: "move",
                phase: "waiting"
            }
        );
    }

    #[test]
    fn waiting_rejects_out_of_band_events() {
        let mut game = game(Player::Circles, Player::Crosses);
        game.send(GameEvent::join("alice")).unwrap();
        let before = game.context().clone();

        for event in [
            GameEvent::Winner {
                player: Player::Crosses,
            },
            GameEvent::Forfeit {
                player: Player::Crosses,
            },
            GameEvent::CheckWinner {
                player: Player::Crosses,
            },
            GameEvent::play(0, 0),
        ] {
            let kind = event.kind();
            assert_eq!(
                game.send(event),
                Err(GameError::InvalidTransition {
                    event: kind,
                    phase: "waiting"
                })
            );
        }

        assert_eq!(game.context(), &before);
        assert_eq!(game.phase(), Phase::Waiting);
        assert!(game.history().transitions().is_empty());
    }

    #[test]
    fn leave_while_waiting_frees_seat() {
        let mut game = game(Player::Circles, Player::Crosses);
        game.send(GameEvent::join("alice")).unwrap();

        game.send(GameEvent::PlayerLeave {
            player: Player::Crosses,
        })
        .unwrap();
        assert_eq!(game.context().seated_count(), 0);

        let err = game
            .send(GameEvent::PlayerLeave {
                player: Player::Crosses,
            })
            .unwrap_err();
        assert_eq!(err, GameError::SeatEmpty(Player::Crosses));
    }

    #[test]
    fn moves_alternate_from_starting_player() {
        let mut game = started();

        game.send(GameEvent::play(0, 0)).unwrap();
        game.send(GameEvent::play(1, 1)).unwrap();

        let board = game.context().board();
        assert_eq!(board.rows()[0][0], Some(Player::Circles));
        assert_eq!(board.rows()[1][1], Some(Player::Crosses));
        assert_eq!(game.context().turn(), 2);
    }

    #[test]
    fn occupied_cell_is_rejected_without_change() {
        let mut game = started();
        game.send(GameEvent::play(1, 1)).unwrap();
        let before = game.context().clone();

        let err = game.send(GameEvent::play(1, 1)).unwrap_err();

        assert!(matches!(err, GameError::InvalidMove(_)));
        assert_eq!(game.context(), &before);
    }

    #[test]
    fn completed_line_ends_game() {
        let mut game = started();
        // circles: top row; crosses: middle row
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.send(GameEvent::play(row, col)).unwrap();
        }

        let step = game.send(GameEvent::play(0, 2)).unwrap();

        assert_eq!(
            step,
            StepResult::Transitioned {
                from: Phase::Playing,
                to: Phase::Ended
            }
        );
        assert_eq!(game.context().winner(), Some(Player::Circles));
        assert_eq!(game.context().end_reason(), Some(EndReason::LineCompleted));
        assert!(game.is_over());
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let mut game = started();
        // O X O
        // O X X
        // X O O
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ] {
            game.send(GameEvent::play(row, col)).unwrap();
        }

        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.context().winner(), None);
        assert_eq!(game.context().end_reason(), Some(EndReason::BoardFull));
    }

    #[test]
    fn declared_winner_is_trusted() {
        let mut game = started();

        game.send(GameEvent::Winner {
            player: Player::Crosses,
        })
        .unwrap();

        assert_eq!(game.context().winner(), Some(Player::Crosses));
        assert_eq!(game.context().end_reason(), Some(EndReason::Declared));
    }

    #[test]
    fn check_winner_rederives_result() {
        let mut game = started();

        let step = game
            .send(GameEvent::CheckWinner {
                player: Player::Circles,
            })
            .unwrap();

        assert_eq!(step, StepResult::Stayed(Phase::Playing));
        assert_eq!(game.context().winner(), None);
    }

    #[test]
    fn forfeit_hands_win_to_opponent() {
        let mut game = started();

        game.send(GameEvent::Forfeit {
            player: Player::Circles,
        })
        .unwrap();

        assert_eq!(game.context().winner(), Some(Player::Crosses));
        assert_eq!(game.context().end_reason(), Some(EndReason::Forfeit));
    }

    #[test]
    fn leaving_mid_game_forfeits_by_default() {
        let mut game = started();

        game.send(GameEvent::PlayerLeave {
            player: Player::Crosses,
        })
        .unwrap();

        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.context().winner(), Some(Player::Circles));
        assert_eq!(game.context().crosses_player_id(), None);
    }

    #[test]
    fn leaving_mid_game_can_abandon() {
        let config = GameConfig {
            leave_policy: LeavePolicy::Abandon,
            ..GameConfig::default()
        };
        let mut game = Game::with_coin(config, Box::new(FixedCoin(Player::Crosses)));
        game.send(GameEvent::join("alice")).unwrap();
        game.send(GameEvent::join("bob")).unwrap();

        game.send(GameEvent::PlayerLeave {
            player: Player::Circles,
        })
        .unwrap();

        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.context().winner(), None);
        assert_eq!(game.context().end_reason(), Some(EndReason::Abandoned));
    }

    #[test]
    fn ended_game_rejects_everything() {
        let mut game = started();
        game.send(GameEvent::Winner {
            player: Player::Circles,
        })
        .unwrap();
        let before = game.context().clone();

        for event in [
            GameEvent::play(2, 2),
            GameEvent::join("carol"),
            GameEvent::Winner {
                player: Player::Crosses,
            },
            GameEvent::PlayerLeave {
                player: Player::Crosses,
            },
        ] {
            let kind = event.kind();
            assert_eq!(game.send(event), Err(GameError::GameOver { event: kind }));
        }
        assert_eq!(game.context(), &before);
    }

    #[test]
    fn seeded_games_seat_identically() {
        let config = GameConfig {
            seed: Some(1234),
            ..GameConfig::default()
        };
        let mut a = Game::new(config.clone());
        let mut b = Game::new(config);

        a.send(GameEvent::join("alice")).unwrap();
        b.send(GameEvent::join("alice")).unwrap();

        assert_eq!(
            a.context().seat_of(&"alice".into()),
            b.context().seat_of(&"alice".into())
        );
        assert_ne!(a.id(), b.id());
    }
}
