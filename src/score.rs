//! Hand scoring and round resolution.
//!
//! Every function here is pure: no I/O, no shared state.

use crate::card::Card;
use crate::result::Winner;

/// Highest score that does not bust.
pub const BLACKJACK: u32 = 21;

/// Points an ace loses when it drops from 11 to 1.
const ACE_ADJUSTMENT: u32 = 10;

/// Calculates the score of a hand.
///
/// Aces count 11 at first; while the total is over 21 they are downgraded to
/// 1, one at a time, until the hand no longer busts or no aces are left.
///
/// ```
/// use bjdeck::{Card, Rank, Suit, score::calculate_score};
///
/// let hand = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Diamonds),
/// ];
/// assert_eq!(calculate_score(&hand), 12);
/// ```
#[must_use]
pub fn calculate_score(cards: &[Card]) -> u32 {
    let mut score: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        score += u32::from(card.value());
    }

    adjust_for_aces(score, aces)
}

const fn adjust_for_aces(mut score: u32, mut aces: u32) -> u32 {
    while score > BLACKJACK && aces > 0 {
        score -= ACE_ADJUSTMENT;
        aces -= 1;
    }
    score
}

/// Returns whether a score is over 21.
#[must_use]
pub const fn is_bust(score: u32) -> bool {
    score > BLACKJACK
}

/// Returns whether the cards are a natural: exactly two cards worth 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_score(cards) == BLACKJACK
}

/// Returns whether the round stops: either side has reached 21 or more.
#[must_use]
pub const fn is_game_over(player_score: u32, house_score: u32) -> bool {
    player_score >= BLACKJACK || house_score >= BLACKJACK
}

/// Decides the winner from final scores.
///
/// A busted player loses even if the house also busted; busts are checked
/// before the scores are compared.
#[must_use]
pub const fn determine_winner(player_score: u32, house_score: u32) -> Winner {
    if is_bust(player_score) {
        return Winner::House;
    }
    if is_bust(house_score) {
        return Winner::Player;
    }
    if player_score == house_score {
        Winner::Tie
    } else if player_score > house_score {
        Winner::Player
    } else {
        Winner::House
    }
}
