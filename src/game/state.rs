//! Game state types.

use serde::Serialize;

use crate::card::Card;
use crate::deck::DeckHandle;
use crate::hand::Hand;
use crate::result::Winner;
use crate::score;

/// Phase of a round.
///
/// Within a round the phase only moves forward: initial, playing, ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No cards dealt yet.
    Initial,
    /// Hands dealt, waiting for the player.
    Playing,
    /// Round over; the winner can be read.
    Ended,
}

/// Immutable snapshot of a game session.
///
/// Scores are always derived from the hands held in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    phase: Phase,
    player_hand: Hand,
    house_hand: Hand,
    player_score: u32,
    house_score: u32,
    deck: DeckHandle,
}

impl GameState {
    /// Creates the initial state: no cards, scores 0/0, no deck yet.
    #[must_use]
    pub fn new() -> Self {
        Self::restore(Phase::Initial, Hand::new(), Hand::new(), DeckHandle::default())
    }

    /// Rebuilds a snapshot from its parts, deriving both scores.
    #[must_use]
    pub fn restore(phase: Phase, player_hand: Hand, house_hand: Hand, deck: DeckHandle) -> Self {
        Self {
            phase,
            player_score: player_hand.score(),
            house_score: house_hand.score(),
            player_hand,
            house_hand,
            deck,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the house's hand.
    #[must_use]
    pub const fn house_hand(&self) -> &Hand {
        &self.house_hand
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Returns the house's score.
    #[must_use]
    pub const fn house_score(&self) -> u32 {
        self.house_score
    }

    /// Returns the deck handle.
    #[must_use]
    pub const fn deck(&self) -> &DeckHandle {
        &self.deck
    }

    /// Returns the remote deck id, if a deck has been opened.
    #[must_use]
    pub fn deck_id(&self) -> Option<&str> {
        self.deck.deck_id.as_deref()
    }

    /// Returns the undrawn card count of the remote deck.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.deck.remaining
    }

    /// Returns the winner once the round has ended.
    #[must_use]
    pub const fn winner(&self) -> Option<Winner> {
        match self.phase {
            Phase::Ended => Some(score::determine_winner(
                self.player_score,
                self.house_score,
            )),
            Phase::Initial | Phase::Playing => None,
        }
    }

    pub(super) fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub(super) fn with_hands(mut self, player_hand: Hand, house_hand: Hand) -> Self {
        self.player_score = player_hand.score();
        self.house_score = house_hand.score();
        self.player_hand = player_hand;
        self.house_hand = house_hand;
        self
    }

    pub(super) fn with_player_card(mut self, card: Card) -> Self {
        self.player_hand.add_card(card);
        self.player_score = self.player_hand.score();
        self
    }

    pub(super) fn with_deck(mut self, deck: DeckHandle) -> Self {
        self.deck = deck;
        self
    }

    pub(super) fn with_remaining(mut self, remaining: usize) -> Self {
        self.deck.remaining = remaining;
        self
    }

    pub(super) fn check_game_over(self) -> Self {
        if score::is_game_over(self.player_score, self.house_score) {
            self.with_phase(Phase::Ended)
        } else {
            self
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
