//! Best score per difficulty and the key-value store it lives in.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;
use crate::game::Difficulty;

pub const HIGH_SCORES_KEY: &str = "highScores";

/// String-keyed, string-valued storage, the same shape as a browser's local
/// storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// Keeps every entry in one pretty-printed JSON object on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        // A corrupt file is replaced rather than blocking the write.
        let mut entries = self.read_all().unwrap_or_default();
        entries.insert(key.to_string(), value);
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Serialises as `{"Easy":n,"Medium":n,"Hard":n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    best: BTreeMap<Difficulty, u32>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self {
            best: Difficulty::ALL.iter().map(|&diff| (diff, 0)).collect(),
        }
    }
}

impl HighScores {
    /// Reads the table from `store`. Anything missing or unreadable counts as
    /// zero.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let raw = match store.get(HIGH_SCORES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!("Failed to read high scores, starting from zero: {}", e);
                return Self::default();
            }
        };
        match serde_json::from_str::<HighScores>(&raw) {
            Ok(stored) => {
                let mut scores = Self::default();
                scores.best.extend(stored.best);
                scores
            }
            Err(e) => {
                warn!("Ignoring malformed high scores: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        store.set(HIGH_SCORES_KEY, serde_json::to_string(self)?)
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.best.get(&difficulty).copied().unwrap_or(0)
    }

    /// Keeps `score` if it beats the stored best. Returns whether it did.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        if score <= self.get(difficulty) {
            return false;
        }
        info!("New {} high score: {}", difficulty, score);
        self.best.insert(difficulty, score);
        true
    }
}
