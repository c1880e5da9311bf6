//! Shared test helpers: a scripted card supply that records every call.

#![expect(dead_code, reason = "each test crate uses a different subset of the helpers")]

use std::collections::VecDeque;
use std::sync::Mutex;

use bjdeck::{Card, CardSupply, DrawResponse, Rank, Suit, SupplyError};

pub const DECK_ID: &str = "test-deck-id";

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Draw {
        deck_id: Option<String>,
        count: usize,
    },
    Shuffle(String),
    Return {
        deck_id: String,
        codes: Vec<String>,
    },
}

#[derive(Debug, Default)]
struct Script {
    calls: Vec<Call>,
    cards: VecDeque<Card>,
    remaining: usize,
    after_shuffle: usize,
    fail_draw_at: Option<usize>,
    fail_shuffle: bool,
    fail_return: bool,
    short_draw: bool,
}

/// Card supply that hands out queued cards (twos of clubs once the queue is
/// empty) and tracks a remaining counter.
#[derive(Debug)]
pub struct FakeSupply {
    script: Mutex<Script>,
}

impl FakeSupply {
    pub fn new(remaining: usize) -> Self {
        Self {
            script: Mutex::new(Script {
                remaining,
                after_shuffle: 52,
                ..Script::default()
            }),
        }
    }

    pub fn with_cards(self, cards: Vec<Card>) -> Self {
        self.script.lock().unwrap().cards = cards.into();
        self
    }

    /// Sets the deck size reported after a reshuffle.
    pub fn with_after_shuffle(self, after_shuffle: usize) -> Self {
        self.script.lock().unwrap().after_shuffle = after_shuffle;
        self
    }

    /// Fails the draw with the given zero-based index.
    pub fn failing_draw(self, index: usize) -> Self {
        self.script.lock().unwrap().fail_draw_at = Some(index);
        self
    }

    pub fn failing_shuffle(self) -> Self {
        self.script.lock().unwrap().fail_shuffle = true;
        self
    }

    pub fn failing_return(self) -> Self {
        self.script.lock().unwrap().fail_return = true;
        self
    }

    /// Every draw hands out one card fewer than requested.
    pub fn short_draws(self) -> Self {
        self.script.lock().unwrap().short_draw = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn draw_sizes(&self) -> Vec<usize> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Draw { count, .. } => Some(count),
                _ => None,
            })
            .collect()
    }

    pub fn shuffle_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Shuffle(_)))
            .count()
    }

    pub fn returned(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Return { codes, .. } => Some(codes),
                _ => None,
            })
            .collect()
    }
}

impl CardSupply for FakeSupply {
    async fn draw(&self, deck_id: Option<&str>, count: usize) -> Result<DrawResponse, SupplyError> {
        let mut script = self.script.lock().unwrap();
        let index = script
            .calls
            .iter()
            .filter(|call| matches!(call, Call::Draw { .. }))
            .count();
        script.calls.push(Call::Draw {
            deck_id: deck_id.map(str::to_owned),
            count,
        });

        if script.fail_draw_at == Some(index) {
            return Err(SupplyError::Status {
                operation: "draw",
                status: 500,
            });
        }

        if deck_id.is_none() {
            script.remaining = 52;
        }

        let handed = if script.short_draw {
            count.saturating_sub(1)
        } else {
            count
        };
        let cards = (0..handed)
            .map(|_| {
                script
                    .cards
                    .pop_front()
                    .unwrap_or_else(|| card(Rank::Two, Suit::Clubs))
            })
            .collect();
        script.remaining = script.remaining.saturating_sub(count);

        Ok(DrawResponse {
            cards,
            deck_id: deck_id.unwrap_or(DECK_ID).to_owned(),
            remaining: script.remaining,
        })
    }

    async fn shuffle(&self, deck_id: &str) -> Result<(), SupplyError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Shuffle(deck_id.to_owned()));
        if script.fail_shuffle {
            return Err(SupplyError::Unsuccessful {
                operation: "shuffle",
            });
        }
        script.remaining = script.after_shuffle;
        Ok(())
    }

    async fn return_cards(&self, deck_id: &str, codes: &[String]) -> Result<(), SupplyError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call::Return {
            deck_id: deck_id.to_owned(),
            codes: codes.to_vec(),
        });
        if script.fail_return {
            return Err(SupplyError::Unsuccessful { operation: "return" });
        }
        Ok(())
    }
}
