//! Player identification and per-player counters.
//!
//! ## PlayerId
//!
//! A player is an opaque, ordered identifier. The mark a player places on
//! the board *is* its `PlayerId`; how a mark looks (X, O, ...) is decided by
//! the presentation layer, see [`crate::render::MarkTable`].
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier, 0-based in turn order.
///
/// `PlayerId(0)` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who moves after `self` in a game of `player_count` players.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self::for_turn(self.index() + 1, player_count)
    }

    /// The player to move at turn `turn` (0-based) of a `player_count` game.
    ///
    /// ```
    /// use tictactoe_pro::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(0, 3), PlayerId::new(0));
    /// assert_eq!(PlayerId::for_turn(4, 3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn for_turn(turn: usize, player_count: usize) -> Self {
        debug_assert!(player_count > 0);
        Self((turn % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use tictactoe_pro::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_default(2);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, `None` if the player is not tracked.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Grow the map to at least `player_count` entries.
    ///
    /// Existing entries are kept; the map never shrinks, so counters for
    /// players that drop out of a later configuration survive.
    pub fn grow_to(&mut self, player_count: usize)
    where
        T: Default,
    {
        if player_count > self.data.len() {
            self.data.resize_with(player_count, T::default);
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
