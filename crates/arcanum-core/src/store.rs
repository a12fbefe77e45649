//! Keyed JSON persistence for session state.
//!
//! Each key maps to a `<key>.json` file in the session directory. Loads are
//! forgiving: a missing or corrupt file yields `None` and the caller falls
//! back to its documented defaults. Saves are synchronous and whole-value;
//! the engine treats the store as an external sink, never a coordination
//! point.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CoreResult;

/// A directory-backed key-value store for serialized session state.
#[derive(Debug, Clone)]
pub struct StateStore {
    root: PathBuf,
}

impl StateStore {
    /// Open a store rooted at the given directory, creating it if absent.
    pub fn open(root: &Path) -> CoreResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// The directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the value stored under `key`.
    ///
    /// Returns `None` when the file is missing or does not parse as the
    /// expected type. Corrupt state is substituted, not surfaced.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = fs::read_to_string(self.path_for(key)).ok()?;
        serde_json::from_str(&text).ok()
    }

    /// Serialize `value` and write it under `key`, replacing any prior value.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> CoreResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}
