//! The engine facade the presentation layer drives.
//!
//! [`GameEngine`] wraps a [`GameState`](crate::core::GameState) and turns
//! user intents (place a mark, reset, jump through history, reconfigure)
//! into state transitions, notifying a [`GameObserver`](crate::events::GameObserver)
//! when a game starts or ends.

mod game;

pub use game::{GameEngine, MoveOutcome};
