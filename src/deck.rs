//! Deck supply management.
//!
//! [`acquire_cards`] always hands back exactly the number of cards asked
//! for. When the remote deck is empty it is reshuffled first; when it holds
//! fewer cards than needed, the rest of it is drawn, every card not held by
//! the player or the house is returned, the deck is reshuffled and the
//! shortfall is drawn.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::card::{Card, DECK_SIZE, standard_codes};
use crate::error::{GameError, SupplyError};
use crate::game::GameState;
use crate::supply::{CardSupply, DrawResponse};

/// The remote deck a session draws from.
///
/// `deck_id` is `None` until the first deal. `remaining` mirrors the
/// service's count of undrawn cards as of the last draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckHandle {
    /// Remote deck identifier.
    pub deck_id: Option<String>,
    /// Undrawn cards left in the remote deck.
    pub remaining: usize,
}

impl DeckHandle {
    /// Creates a handle for an existing remote deck.
    #[must_use]
    pub fn existing(deck_id: impl Into<String>, remaining: usize) -> Self {
        Self {
            deck_id: Some(deck_id.into()),
            remaining,
        }
    }
}

impl Default for DeckHandle {
    fn default() -> Self {
        Self {
            deck_id: None,
            remaining: DECK_SIZE,
        }
    }
}

/// Cards handed out by [`acquire_cards`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acquired {
    /// Exactly the requested number of cards, in draw order.
    pub cards: Vec<Card>,
    /// Undrawn cards left in the remote deck.
    pub remaining: usize,
    /// Deck the cards came from.
    pub deck_id: String,
}

impl From<DrawResponse> for Acquired {
    fn from(response: DrawResponse) -> Self {
        Self {
            cards: response.cards,
            remaining: response.remaining,
            deck_id: response.deck_id,
        }
    }
}

/// Returns the standard card codes not held in either hand.
///
/// ```
/// use bjdeck::{Card, Rank, Suit, deck::create_discard_pile};
///
/// let player = [Card::new(Rank::Ace, Suit::Hearts)];
/// let pile = create_discard_pile(&player, &[]);
/// assert_eq!(pile.len(), 51);
/// assert!(!pile.contains(&"AH".to_owned()));
/// ```
#[must_use]
pub fn create_discard_pile(player_cards: &[Card], house_cards: &[Card]) -> Vec<String> {
    let held: HashSet<&str> = player_cards
        .iter()
        .chain(house_cards)
        .map(|card| card.code.as_str())
        .collect();

    standard_codes()
        .into_iter()
        .filter(|code| !held.contains(code.as_str()))
        .collect()
}

/// Draws exactly `count` cards for the given state.
///
/// # Errors
///
/// Returns [`GameError::Supply`] if any service call fails; cards drawn by
/// earlier steps are not given back. Returns [`GameError::DeckUninitialized`]
/// only if an existing-deck path runs without a deck id.
pub async fn acquire_cards<S>(
    supply: &S,
    state: &GameState,
    count: usize,
) -> Result<Acquired, GameError>
where
    S: CardSupply,
{
    if state.deck().deck_id.is_some() {
        handle_existing_deck(supply, state, count).await
    } else {
        create_new_deck(supply, count).await
    }
}

/// Draws `count` cards from a brand-new deck.
///
/// # Errors
///
/// Returns [`GameError::Supply`] if the draw fails.
pub async fn create_new_deck<S>(supply: &S, count: usize) -> Result<Acquired, GameError>
where
    S: CardSupply,
{
    let response = draw_exact(supply, None, count).await?;
    info!(deck_id = %response.deck_id, remaining = response.remaining, "opened new deck");
    Ok(response.into())
}

/// Draws `count` cards from the state's deck, recovering when it runs low.
///
/// # Errors
///
/// Returns [`GameError::DeckUninitialized`] if the state has no deck id, or
/// [`GameError::Supply`] if a service call fails.
pub async fn handle_existing_deck<S>(
    supply: &S,
    state: &GameState,
    count: usize,
) -> Result<Acquired, GameError>
where
    S: CardSupply,
{
    let deck_id = state
        .deck()
        .deck_id
        .as_deref()
        .ok_or(GameError::DeckUninitialized)?;
    let remaining = state.deck().remaining;

    if remaining == 0 {
        handle_empty_deck(supply, deck_id, count).await
    } else if remaining < count {
        handle_insufficient_cards(supply, state, count).await
    } else {
        Ok(draw_exact(supply, Some(deck_id), count).await?.into())
    }
}

/// Reshuffles an exhausted deck and draws `count` cards from it.
///
/// # Errors
///
/// Returns [`GameError::Supply`] if the shuffle or the draw fails.
pub async fn handle_empty_deck<S>(
    supply: &S,
    deck_id: &str,
    count: usize,
) -> Result<Acquired, GameError>
where
    S: CardSupply,
{
    info!(deck_id, "deck exhausted, reshuffling");
    supply.shuffle(deck_id).await?;
    Ok(draw_exact(supply, Some(deck_id), count).await?.into())
}

/// Draws what is left of the deck, then returns the discard pile,
/// reshuffles and draws the shortfall.
///
/// The cards of the first draw come first in the result.
///
/// # Errors
///
/// Returns [`GameError::DeckUninitialized`] if the state has no deck id, or
/// [`GameError::Supply`] if a service call fails.
pub async fn handle_insufficient_cards<S>(
    supply: &S,
    state: &GameState,
    count: usize,
) -> Result<Acquired, GameError>
where
    S: CardSupply,
{
    let deck_id = state
        .deck()
        .deck_id
        .as_deref()
        .ok_or(GameError::DeckUninitialized)?;
    let remaining = state.deck().remaining;

    info!(deck_id, remaining, requested = count, "not enough cards, recovering discard pile");

    let first = draw_exact(supply, Some(deck_id), remaining).await?;

    let discard_pile = create_discard_pile(state.player_hand().cards(), state.house_hand().cards());
    debug!(deck_id, returned = discard_pile.len(), "returning discard pile");
    supply.return_cards(deck_id, &discard_pile).await?;
    supply.shuffle(deck_id).await?;

    let second = draw_exact(supply, Some(deck_id), count - first.cards.len()).await?;

    let mut cards = first.cards;
    cards.extend(second.cards);

    Ok(Acquired {
        cards,
        remaining: second.remaining,
        deck_id: deck_id.to_owned(),
    })
}

async fn draw_exact<S>(
    supply: &S,
    deck_id: Option<&str>,
    count: usize,
) -> Result<DrawResponse, SupplyError>
where
    S: CardSupply,
{
    let response = supply.draw(deck_id, count).await?;
    if response.cards.len() != count {
        return Err(SupplyError::ShortDraw {
            requested: count,
            received: response.cards.len(),
        });
    }
    debug!(deck_id = %response.deck_id, count, remaining = response.remaining, "drew cards");
    Ok(response)
}
