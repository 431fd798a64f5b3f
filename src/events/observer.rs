//! Observer hooks the engine calls on resets and game ends.

use crate::core::GameConfig;
use crate::rules::GameResult;

use super::event::GameEvent;

/// Receiver of outbound engine notifications.
///
/// Both hooks default to doing nothing, so an observer only implements
/// what it cares about. The engine guarantees `on_game_end` fires once per
/// transition into a won or drawn state and never otherwise.
pub trait GameObserver {
    /// A new game started (reset or reconfigure).
    fn on_reset(&mut self, _config: &GameConfig) {}

    /// A move ended the game.
    fn on_game_end(&mut self, _result: &GameResult) {}
}

/// No-op observer.
impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_reset(&mut self, config: &GameConfig) {
        (**self).on_reset(config);
    }

    fn on_game_end(&mut self, result: &GameResult) {
        (**self).on_game_end(result);
    }
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_reset(&mut self, config: &GameConfig) {
        (**self).on_reset(config);
    }

    fn on_game_end(&mut self, result: &GameResult) {
        (**self).on_game_end(result);
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: GameObserver, B: GameObserver> GameObserver for (A, B) {
    fn on_reset(&mut self, config: &GameConfig) {
        self.0.on_reset(config);
        self.1.on_reset(config);
    }

    fn on_game_end(&mut self, result: &GameResult) {
        self.0.on_game_end(result);
        self.1.on_game_end(result);
    }
}

/// Observer that records every notification in order.
///
/// The presentation layer drains it after each intent to show toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of game-end notifications recorded.
    #[must_use]
    pub fn game_end_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_game_end()).count()
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventLog {
    fn on_reset(&mut self, config: &GameConfig) {
        self.events.push(GameEvent::Reset { config: *config });
    }

    fn on_game_end(&mut self, result: &GameResult) {
        self.events.push(GameEvent::GameEnded { result: *result });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[derive(Default)]
    struct Counter {
        resets: usize,
        ends: usize,
    }

    impl GameObserver for Counter {
        fn on_reset(&mut self, _config: &GameConfig) {
            self.resets += 1;
        }

        fn on_game_end(&mut self, _result: &GameResult) {
            self.ends += 1;
        }
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_reset(&GameConfig::default());
        log.on_game_end(&GameResult::Draw);

        assert_eq!(
            log.events(),
            &[
                GameEvent::Reset {
                    config: GameConfig::default()
                },
                GameEvent::GameEnded {
                    result: GameResult::Draw
                },
            ]
        );
        assert_eq!(log.game_end_count(), 1);

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_pair_fans_out() {
        let mut pair = (Counter::default(), EventLog::new());
        pair.on_game_end(&GameResult::Winner(PlayerId::new(0)));
        pair.on_reset(&GameConfig::default());

        assert_eq!(pair.0.ends, 1);
        assert_eq!(pair.0.resets, 1);
        assert_eq!(pair.1.events().len(), 2);
    }

    fn announce_draw<O: GameObserver>(mut observer: O) {
        observer.on_reset(&GameConfig::default());
        observer.on_game_end(&GameResult::Draw);
    }

    #[test]
    fn test_borrowed_and_boxed_observers() {
        let mut counter = Counter::default();
        announce_draw(&mut counter);
        assert_eq!(counter.resets, 1);
        assert_eq!(counter.ends, 1);

        let boxed: Box<dyn GameObserver> = Box::new(Counter::default());
        announce_draw(boxed);
    }

    #[test]
    fn test_unit_observer_is_silent() {
        announce_draw(());
    }
}
