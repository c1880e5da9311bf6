//! Game engine and state management.

use crate::result::Winner;

mod actions;
pub mod session;
pub mod state;

pub use actions::{Action, reduce};
pub use session::GameHandle;
pub use state::{GameState, Phase};

/// A single game session: the card supply plus the current state snapshot.
///
/// Actions that draw cards take `&mut self`, so a session can only run one
/// action at a time. Share a session across tasks with [`GameHandle`].
///
/// # Example
///
/// ```no_run
/// use bjdeck::{Game, LocalSupply};
///
/// # async fn run() -> Result<(), bjdeck::GameError> {
/// let mut game = Game::new(LocalSupply::new(42));
/// game.start_game().await?;
/// game.hit().await?;
/// game.stand()?;
/// println!("{:?}", game.winner());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Game<S> {
    supply: S,
    state: GameState,
}

impl<S> Game<S> {
    /// Creates a session in the initial state.
    #[must_use]
    pub fn new(supply: S) -> Self {
        Self::with_state(supply, GameState::new())
    }

    /// Creates a session resuming from an existing snapshot.
    #[must_use]
    pub const fn with_state(supply: S, state: GameState) -> Self {
        Self { supply, state }
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the winner once the round has ended.
    #[must_use]
    pub const fn winner(&self) -> Option<Winner> {
        self.state.winner()
    }

    /// Returns the card supply.
    #[must_use]
    pub const fn supply(&self) -> &S {
        &self.supply
    }

    fn apply(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
    }
}
