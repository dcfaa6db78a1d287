//! Game context: everything the machine knows about one game.

use crate::board::{Board, Player, Position};
use crate::matchmaking::ParticipantId;
use serde::{Deserialize, Serialize};

/// Why a game reached its terminal phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The mover completed a line.
    LineCompleted,
    /// A winner was asserted from outside the engine.
    Declared,
    /// All nine cells filled with no line: a draw.
    BoardFull,
    /// A participant forfeited (explicitly or by leaving).
    Forfeit,
    /// A participant left and the game was called off.
    Abandoned,
}

/// Authoritative state of a single game.
///
/// Only the owning [`Game`](super::Game) mutates it; collaborators get
/// shared references or serialized snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    board: Board,
    turn: u32,
    starting_player: Player,
    crosses_player_id: Option<ParticipantId>,
    circles_player_id: Option<ParticipantId>,
    winner: Option<Player>,
    end_reason: Option<EndReason>,
}

impl GameContext {
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            turn: 0,
            starting_player,
            crosses_player_id: None,
            circles_player_id: None,
            winner: None,
            end_reason: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves made so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    pub fn crosses_player_id(&self) -> Option<&ParticipantId> {
        self.crosses_player_id.as_ref()
    }

    pub fn circles_player_id(&self) -> Option<&ParticipantId> {
        self.circles_player_id.as_ref()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn participant(&self, player: Player) -> Option<&ParticipantId> {
        match player {
            Player::Crosses => self.crosses_player_id(),
            Player::Circles => self.circles_player_id(),
        }
    }

    /// Marker held by `participant`, if seated.
    pub fn seat_of(&self, participant: &ParticipantId) -> Option<Player> {
        [Player::Crosses, Player::Circles]
            .into_iter()
            .find(|&p| self.participant(p) == Some(participant))
    }

    pub fn seated_count(&self) -> usize {
        usize::from(self.crosses_player_id.is_some()) + usize::from(self.circles_player_id.is_some())
    }

    pub fn both_seated(&self) -> bool {
        self.seated_count() == 2
    }

    /// Player eligible to move on the current turn.
    pub fn current_mover(&self) -> Player {
        Player::for_turn(self.turn, self.starting_player)
    }

    pub fn is_concluded(&self) -> bool {
        self.end_reason.is_some()
    }

    fn slot_mut(&mut self, player: Player) -> &mut Option<ParticipantId> {
        match player {
            Player::Crosses => &mut self.crosses_player_id,
            Player::Circles => &mut self.circles_player_id,
        }
    }

    pub(crate) fn seat(&mut self, player: Player, participant: ParticipantId) {
        debug_assert!(
            self.seat_of(&participant).is_none(),
            "participant seated twice"
        );
        *self.slot_mut(player) = Some(participant);
    }

    /// Clear the seat held as `player`, returning who sat there.
    pub(crate) fn vacate(&mut self, player: Player) -> Option<ParticipantId> {
        self.slot_mut(player).take()
    }

    pub(crate) fn reset_turn(&mut self) {
        self.turn = 0;
    }

    /// Place the current mover at `pos` and advance the turn.
    ///
    /// `pos` must already have been validated as empty.
    pub(crate) fn apply_move(&mut self, pos: Position) -> Player {
        let mover = self.current_mover();
        let placed = self.board.set_cell(pos, mover);
        debug_assert!(placed.is_ok(), "move applied to occupied cell");
        self.turn += 1;
        mover
    }

    pub(crate) fn conclude(&mut self, winner: Option<Player>, reason: EndReason) {
        if self.end_reason.is_none() {
            self.winner = winner;
            self.end_reason = Some(reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_blank() {
        let ctx = GameContext::new(Player::Circles);
        assert_eq!(ctx.turn(), 0);
        assert_eq!(ctx.seated_count(), 0);
        assert_eq!(ctx.winner(), None);
        assert_eq!(ctx.board(), &Board::new());
        assert_eq!(ctx.current_mover(), Player::Circles);
    }

    #[test]
    fn seat_and_vacate() {
        let mut ctx = GameContext::new(Player::Circles);
        let alice = ParticipantId::from("alice");

        ctx.seat(Player::Crosses, alice.clone());
        assert_eq!(ctx.seat_of(&alice), Some(Player::Crosses));
        assert_eq!(ctx.participant(Player::Crosses), Some(&alice));

        assert_eq!(ctx.vacate(Player::Crosses), Some(alice.clone()));
        assert_eq!(ctx.seat_of(&alice), None);
        assert_eq!(ctx.vacate(Player::Crosses), None);
    }

    #[test]
    fn apply_move_alternates_movers() {
        let mut ctx = GameContext::new(Player::Circles);

        assert_eq!(ctx.apply_move(Position::new(0, 0).unwrap()), Player::Circles);
        assert_eq!(ctx.apply_move(Position::new(0, 1).unwrap()), Player::Crosses);
        assert_eq!(ctx.turn(), 2);
    }

    #[test]
    fn conclude_is_sticky() {
        let mut ctx = GameContext::new(Player::Circles);
        ctx.conclude(Some(Player::Crosses), EndReason::LineCompleted);
        ctx.conclude(None, EndReason::BoardFull);

        assert_eq!(ctx.winner(), Some(Player::Crosses));
        assert_eq!(ctx.end_reason(), Some(EndReason::LineCompleted));
    }
}
