//! User preferences that outlive a session.
//!
//! - [`PreferenceStore`]: string values by key
//! - [`MemoryStore`] / [`JsonFileStore`]: in-process and file-backed stores
//! - [`DarkMode`]: the theme choice stored under [`DARK_MODE_KEY`]

mod dark_mode;
mod store;

pub use dark_mode::{DarkMode, Theme, DARK_MODE_KEY};
pub use store::{JsonFileStore, MemoryStore, PreferenceStore};
