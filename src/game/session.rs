//! Session actor.
//!
//! A [`GameHandle`] owns nothing but a command channel; the [`Game`] itself
//! lives on a spawned task that runs one command to completion before
//! reading the next, so actions on a shared session never interleave.

use tokio::sync::{mpsc, oneshot};
use tracing::info;

use crate::card::Card;
use crate::error::GameError;
use crate::supply::CardSupply;

use super::{Game, GameState};

const COMMAND_BUFFER: usize = 32;

enum Command {
    StartGame {
        reply: oneshot::Sender<Result<GameState, GameError>>,
    },
    Hit {
        reply: oneshot::Sender<Result<(Card, GameState), GameError>>,
    },
    Stand {
        reply: oneshot::Sender<Result<GameState, GameError>>,
    },
    Snapshot {
        reply: oneshot::Sender<GameState>,
    },
}

/// Cloneable handle to a game session running on its own task.
#[derive(Debug, Clone)]
pub struct GameHandle {
    tx: mpsc::Sender<Command>,
}

impl GameHandle {
    /// Moves the session onto a new tokio task.
    ///
    /// The task exits once every handle has been dropped.
    #[must_use]
    pub fn spawn<S>(game: Game<S>) -> Self
    where
        S: CardSupply + Send + Sync + 'static,
    {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(run(game, rx));
        Self { tx }
    }

    /// Starts a new round and returns the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns the action's error, or [`GameError::SessionClosed`] if the
    /// session task is gone.
    pub async fn start_game(&self) -> Result<GameState, GameError> {
        self.request(|reply| Command::StartGame { reply }).await?
    }

    /// Draws a card for the player, returning it with the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns the action's error, or [`GameError::SessionClosed`] if the
    /// session task is gone.
    pub async fn hit(&self) -> Result<(Card, GameState), GameError> {
        self.request(|reply| Command::Hit { reply }).await?
    }

    /// Ends the round and returns the final snapshot.
    ///
    /// # Errors
    ///
    /// Returns the action's error, or [`GameError::SessionClosed`] if the
    /// session task is gone.
    pub async fn stand(&self) -> Result<GameState, GameError> {
        self.request(|reply| Command::Stand { reply }).await?
    }

    /// Returns the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SessionClosed`] if the session task is gone.
    pub async fn state(&self) -> Result<GameState, GameError> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, GameError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(command(reply))
            .await
            .map_err(|_| GameError::SessionClosed)?;
        response.await.map_err(|_| GameError::SessionClosed)
    }
}

async fn run<S: CardSupply>(mut game: Game<S>, mut rx: mpsc::Receiver<Command>) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::StartGame { reply } => {
                let result = game.start_game().await.map(|()| game.state().clone());
                let _ = reply.send(result);
            }
            Command::Hit { reply } => {
                let result = game.hit().await.map(|card| (card, game.state().clone()));
                let _ = reply.send(result);
            }
            Command::Stand { reply } => {
                let result = game.stand().map(|()| game.state().clone());
                let _ = reply.send(result);
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(game.state().clone());
            }
        }
    }
    info!("game session exiting (command channel closed)");
}
