//! Key/value preference storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::PreferenceError;

/// String preferences stored by key.
pub trait PreferenceStore {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// Preferences that live only as long as the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Preferences kept in a JSON object file, rewritten on every `set`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: FxHashMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file is an empty store; the file
    /// is created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| PreferenceError::Json {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => FxHashMap::default(),
            Err(source) => return Err(PreferenceError::Io { path, source }),
        };
        debug!(path = %path.display(), entries = values.len(), "opened preference file");
        Ok(Self { path, values })
    }

    /// Like [`JsonFileStore::open`], but a file that is not valid JSON is
    /// treated as empty and replaced on the next `set`.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        match Self::open(path) {
            Err(PreferenceError::Json { path, source }) => {
                warn!(path = %path.display(), %source, "ignoring unreadable preference file");
                Ok(Self {
                    path,
                    values: FxHashMap::default(),
                })
            }
            other => other,
        }
    }

    /// File backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PreferenceError> {
        let text = serde_json::to_string_pretty(&self.values).map_err(|source| {
            PreferenceError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        let io_error = |source: std::io::Error| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };

        // Write beside the target and rename, so readers never see a partial file.
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, text).map_err(io_error)?;
        fs::rename(&tmp, &self.path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            io_error(source)
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let previous = self.values.insert(key.to_owned(), value.to_owned());
        if let Err(err) = self.save() {
            match previous {
                Some(old) => self.values.insert(key.to_owned(), old),
                None => self.values.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}
