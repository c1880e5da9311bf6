use tracing::{info, warn};

use crate::card::Card;
use crate::deck::{self, DeckHandle};
use crate::error::{GameError, SupplyError};
use crate::hand::Hand;
use crate::supply::CardSupply;

use super::{Game, GameState, Phase};

/// Cards dealt at the start of a round: two each.
const DEAL_SIZE: usize = 4;

/// A state transition, carrying any cards already fetched for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a round with freshly dealt hands.
    StartGame {
        /// Player's two cards.
        player_cards: Vec<Card>,
        /// House's two cards.
        house_cards: Vec<Card>,
        /// Deck the cards came from.
        deck_id: String,
        /// Undrawn cards left in the deck.
        remaining: usize,
    },
    /// Add a card to the player's hand.
    Hit {
        /// The drawn card.
        card: Card,
        /// Undrawn cards left in the deck.
        remaining: usize,
    },
    /// End the round.
    Stand,
}

/// Folds an action into a state, producing the next snapshot.
///
/// Pure: any cards the action needs are fetched before it is built.
#[must_use]
pub fn reduce(state: &GameState, action: Action) -> GameState {
    let state = state.clone();
    match action {
        Action::StartGame {
            player_cards,
            house_cards,
            deck_id,
            remaining,
        } => state
            .with_phase(Phase::Playing)
            .with_hands(Hand::from_cards(player_cards), Hand::from_cards(house_cards))
            .with_deck(DeckHandle::existing(deck_id, remaining)),
        Action::Hit { card, remaining } => state
            .with_player_card(card)
            .with_remaining(remaining)
            .check_game_over(),
        Action::Stand => state.with_phase(Phase::Ended),
    }
}

impl<S: CardSupply> Game<S> {
    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.state.phase() == Phase::Playing {
            Ok(())
        } else {
            Err(GameError::InvalidPhase)
        }
    }

    /// Starts a new round: deals two cards to the player, then two to the
    /// house. Valid in any phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards cannot be drawn. The state is left
    /// unchanged.
    pub async fn start_game(&mut self) -> Result<(), GameError> {
        let acquired = deck::acquire_cards(&self.supply, &self.state, DEAL_SIZE)
            .await
            .inspect_err(|err| warn!(%err, "start game failed"))?;

        let mut player_cards = acquired.cards;
        let house_cards = player_cards.split_off(2);

        self.apply(Action::StartGame {
            player_cards,
            house_cards,
            deck_id: acquired.deck_id,
            remaining: acquired.remaining,
        });

        info!(
            player_score = self.state.player_score(),
            house_score = self.state.house_score(),
            remaining = self.state.remaining(),
            "round started"
        );
        Ok(())
    }

    /// Player action: Hit (draw one card).
    ///
    /// Ends the round if either score reaches 21 or more.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played, no deck has been
    /// opened, or the card cannot be drawn. The state is left unchanged.
    pub async fn hit(&mut self) -> Result<Card, GameError> {
        self.ensure_playing()?;
        if self.state.deck_id().is_none() {
            return Err(GameError::DeckUninitialized);
        }

        let acquired = deck::acquire_cards(&self.supply, &self.state, 1)
            .await
            .inspect_err(|err| warn!(%err, "hit failed"))?;

        let card = acquired
            .cards
            .into_iter()
            .next()
            .ok_or(SupplyError::ShortDraw {
                requested: 1,
                received: 0,
            })?;

        self.apply(Action::Hit {
            card: card.clone(),
            remaining: acquired.remaining,
        });

        if self.state.phase() == Phase::Ended {
            info!(player_score = self.state.player_score(), "round ended on hit");
        }
        Ok(card)
    }

    /// Player action: Stand (end the round).
    ///
    /// The house draws no further cards; read the result with
    /// [`Game::winner`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not being played.
    pub fn stand(&mut self) -> Result<(), GameError> {
        self.ensure_playing()?;
        self.apply(Action::Stand);
        info!(winner = ?self.state.winner(), "player stood");
        Ok(())
    }
}
