//! In-process deck service.

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{CardSupply, DrawResponse};
use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::SupplyError;
use crate::options::SupplyOptions;
use crate::sync::Mutex;

/// A server-side deck: undrawn cards (top of the deck last) plus the codes
/// currently dealt out.
#[derive(Debug)]
struct LocalDeck {
    cards: Vec<Card>,
    drawn: HashSet<String>,
}

#[derive(Debug)]
struct Inner {
    decks: HashMap<String, LocalDeck>,
    next_id: u64,
    rng: ChaCha8Rng,
}

/// Card supply that keeps its decks in memory, behaving like the remote
/// deck service.
///
/// Drawing more cards than a deck holds is reported as an unsuccessful draw.
/// A reshuffle gathers every card of the deck, dealt or not, and shuffles
/// them, as the remote service does.
#[derive(Debug)]
pub struct LocalSupply {
    inner: Mutex<Inner>,
}

impl LocalSupply {
    /// Creates an empty service with the given shuffle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Mutex::new(Inner {
                decks: HashMap::new(),
                next_id: 0,
                rng: ChaCha8Rng::seed_from_u64(seed),
            }),
        }
    }

    /// Creates a service seeded from `options.seed`.
    #[must_use]
    pub fn from_options(options: &SupplyOptions) -> Self {
        Self::new(options.seed)
    }

    /// Returns how many undrawn cards the deck holds, or `None` for an
    /// unknown deck.
    #[must_use]
    pub fn remaining(&self, deck_id: &str) -> Option<usize> {
        self.inner.lock().decks.get(deck_id).map(|deck| deck.cards.len())
    }

    /// Replaces the undrawn cards of a deck. The first card is drawn first.
    ///
    /// Returns `false` if the deck does not exist.
    #[must_use]
    pub fn stack_deck(&self, deck_id: &str, draws: Vec<Card>) -> bool {
        let mut inner = self.inner.lock();
        let Some(deck) = inner.decks.get_mut(deck_id) else {
            return false;
        };

        let stacked: HashSet<&str> = draws.iter().map(|card| card.code.as_str()).collect();
        deck.drawn = full_deck()
            .into_iter()
            .map(|card| card.code)
            .filter(|code| !stacked.contains(code.as_str()))
            .collect();
        deck.cards = draws;
        deck.cards.reverse();
        true
    }

    fn draw_now(&self, deck_id: Option<&str>, count: usize) -> Result<DrawResponse, SupplyError> {
        let mut inner = self.inner.lock();
        let Inner {
            decks,
            next_id,
            rng,
        } = &mut *inner;

        let deck_id = match deck_id {
            Some(id) => id.to_owned(),
            None => {
                let id = format!("local-{next_id:04}");
                *next_id += 1;
                let mut cards = full_deck();
                cards.shuffle(rng);
                decks.insert(
                    id.clone(),
                    LocalDeck {
                        cards,
                        drawn: HashSet::new(),
                    },
                );
                debug!(deck_id = %id, "created local deck");
                id
            }
        };

        let deck = decks
            .get_mut(&deck_id)
            .ok_or(SupplyError::Unsuccessful { operation: "draw" })?;

        if deck.cards.len() < count {
            return Err(SupplyError::Unsuccessful { operation: "draw" });
        }

        let cards: Vec<Card> = (0..count).filter_map(|_| deck.cards.pop()).collect();
        deck.drawn
            .extend(cards.iter().map(|card| card.code.clone()));

        Ok(DrawResponse {
            cards,
            remaining: deck.cards.len(),
            deck_id,
        })
    }

    fn shuffle_now(&self, deck_id: &str) -> Result<(), SupplyError> {
        let mut inner = self.inner.lock();
        let Inner { decks, rng, .. } = &mut *inner;

        let deck = decks.get_mut(deck_id).ok_or(SupplyError::Unsuccessful {
            operation: "shuffle",
        })?;

        deck.drawn.clear();
        deck.cards = full_deck();
        deck.cards.shuffle(rng);
        Ok(())
    }

    fn return_now(&self, deck_id: &str, codes: &[String]) -> Result<(), SupplyError> {
        let mut inner = self.inner.lock();
        let deck = inner
            .decks
            .get_mut(deck_id)
            .ok_or(SupplyError::Unsuccessful { operation: "return" })?;

        for code in codes {
            if !deck.drawn.remove(code) {
                continue;
            }
            if let Some(card) = Card::from_code(code) {
                deck.cards.push(card);
            }
        }
        Ok(())
    }
}

impl Default for LocalSupply {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CardSupply for LocalSupply {
    async fn draw(&self, deck_id: Option<&str>, count: usize) -> Result<DrawResponse, SupplyError> {
        self.draw_now(deck_id, count)
    }

    async fn shuffle(&self, deck_id: &str) -> Result<(), SupplyError> {
        self.shuffle_now(deck_id)
    }

    async fn return_cards(&self, deck_id: &str, codes: &[String]) -> Result<(), SupplyError> {
        self.return_now(deck_id, codes)
    }
}

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}
