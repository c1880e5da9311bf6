//! Round result types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Winner of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    /// Player wins (house busts or player has the higher score).
    Player,
    /// House wins (player busts or house has the higher score).
    House,
    /// Equal scores with nobody bust.
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::House => "house",
            Self::Tie => "tie",
        })
    }
}
