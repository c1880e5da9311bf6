//! Card types and the standard 52-card code set.

use serde::{Deserialize, Serialize};

/// Host serving the deck service's card artwork.
const IMAGE_HOST: &str = "https://deckofcardsapi.com/static/img";

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit letter used in card codes.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// Card rank, encoded on the wire the way the deck service spells it
/// (`"ACE"`, `"2"` .. `"10"`, `"JACK"`, `"QUEEN"`, `"KING"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace.
    #[serde(rename = "ACE")]
    Ace,
    /// Two.
    #[serde(rename = "2")]
    Two,
    /// Three.
    #[serde(rename = "3")]
    Three,
    /// Four.
    #[serde(rename = "4")]
    Four,
    /// Five.
    #[serde(rename = "5")]
    Five,
    /// Six.
    #[serde(rename = "6")]
    Six,
    /// Seven.
    #[serde(rename = "7")]
    Seven,
    /// Eight.
    #[serde(rename = "8")]
    Eight,
    /// Nine.
    #[serde(rename = "9")]
    Nine,
    /// Ten.
    #[serde(rename = "10")]
    Ten,
    /// Jack.
    #[serde(rename = "JACK")]
    Jack,
    /// Queen.
    #[serde(rename = "QUEEN")]
    Queen,
    /// King.
    #[serde(rename = "KING")]
    King,
}

impl Rank {
    /// All ranks from ace to king.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the blackjack value of the rank, counting an ace as 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns the rank token used in card codes. The ten is `0`.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => '0',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// Image references for a card. Opaque to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardImages {
    /// SVG artwork URL.
    pub svg: String,
    /// PNG artwork URL.
    pub png: String,
}

/// A playing card as handed out by the deck service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank and suit token, e.g. `"AH"` or `"0S"`.
    pub code: String,
    /// The rank of the card.
    #[serde(rename = "value")]
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Primary image URL.
    #[serde(default)]
    pub image: String,
    /// Alternate image formats.
    #[serde(default)]
    pub images: CardImages,
}

impl Card {
    /// Creates a card with its canonical code and the service's image URLs.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let code = code_for(rank, suit);
        Self {
            image: format!("{IMAGE_HOST}/{code}.png"),
            images: CardImages {
                svg: format!("{IMAGE_HOST}/{code}.svg"),
                png: format!("{IMAGE_HOST}/{code}.png"),
            },
            code,
            rank,
            suit,
        }
    }

    /// Parses a card code such as `"KD"` back into a card.
    ///
    /// Returns `None` for codes outside the standard deck.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let (token, letter) = (chars.next()?, chars.next()?);
        if chars.next().is_some() {
            return None;
        }
        let rank = Rank::ALL.into_iter().find(|r| r.token() == token)?;
        let suit = Suit::ALL.into_iter().find(|s| s.letter() == letter)?;
        Some(Self::new(rank, suit))
    }

    /// Returns the blackjack value of the card, counting an ace as 11.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Builds the code for a rank and suit.
#[must_use]
pub fn code_for(rank: Rank, suit: Suit) -> String {
    let mut code = String::with_capacity(2);
    code.push(rank.token());
    code.push(suit.letter());
    code
}

/// Returns the 52 standard card codes, suit by suit.
#[must_use]
pub fn standard_codes() -> Vec<String> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| code_for(rank, suit)))
        .collect()
}
