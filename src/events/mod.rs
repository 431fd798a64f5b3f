//! Outbound notifications from the engine to the presentation layer.
//!
//! The engine never renders anything. It tells an observer when a fresh
//! game starts and when a game ends, and the observer decides what to do:
//! show a toast, update a scoreboard, log.
//!
//! ## Key Components
//!
//! - [`GameObserver`]: the two hooks, `on_reset` and `on_game_end`
//! - [`GameEvent`]: the same notifications as data
//! - [`EventLog`]: observer that records events for later draining
//!
//! ## Example Usage
//!
//! ```
//! use tictactoe_pro::core::GameConfig;
//! use tictactoe_pro::engine::GameEngine;
//! use tictactoe_pro::events::{EventLog, GameEvent};
//!
//! let mut engine = GameEngine::new(GameConfig::default(), EventLog::new());
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.apply_move(cell).unwrap();
//! }
//!
//! let events = engine.observer_mut().drain();
//! assert_eq!(events.len(), 1);
//! assert!(matches!(events[0], GameEvent::GameEnded { .. }));
//! ```

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver};
