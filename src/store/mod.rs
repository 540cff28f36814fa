//! JSON-file-backed log storage.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use thiserror::Error;

use crate::input::{InputSource, StdinSource};
use crate::models::{Entry, Tags};

/// Tags accepted on an entry unless overridden at construction.
pub const ALLOWED_TAGS: &[&str] = &["development", "life"];

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid tag(s): {}; allowed tags are: {}", invalid.join(", "), allowed.join(", "))]
    InvalidTags {
        invalid: Vec<String>,
        allowed: Vec<String>,
    },

    #[error("failed to read entry text: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to write log file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to encode log: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The life log: an append-only JSON array of entries in a single file.
///
/// Each append is a full read-modify-write cycle over the backing file.
/// There is no locking; concurrent invocations racing on one file are
/// last-writer-wins.
pub struct LogStore {
    path: PathBuf,
    allowed_tags: Vec<String>,
    input: Box<dyn InputSource>,
}

impl LogStore {
    /// Open a store over the given file with the default allowed-tag set
    /// and stdin-backed interactive input.
    ///
    /// The file is not touched until the first append; it need not exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_input(path, StdinSource)
    }

    /// Open a store that reads missing entry text from `input` instead of
    /// stdin.
    pub fn with_input(path: impl Into<PathBuf>, input: impl InputSource + 'static) -> Self {
        Self {
            path: path.into(),
            allowed_tags: ALLOWED_TAGS.iter().map(|t| t.to_string()).collect(),
            input: Box::new(input),
        }
    }

    /// Replace the allowed-tag set.
    pub fn with_allowed_tags(mut self, tags: &[&str]) -> Self {
        self.allowed_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Read all entries from the backing file.
    ///
    /// A missing file and a file that fails to parse both yield an empty
    /// log rather than an error.
    pub fn load(&self) -> Vec<Entry> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!("could not read {}: {err}; starting empty", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    "{} is not a valid entry array: {err}; starting empty",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Append one entry and persist the full log.
    ///
    /// Tags are validated against the allowed set first; invalid tags fail
    /// the append before any prompt or file write. When `data` is `None`
    /// the entry text comes from the store's input source. An empty tag
    /// list stores no tags at all.
    pub fn append(&mut self, data: Option<String>, tags: Option<Tags>) -> Result<Entry, StoreError> {
        let tags = match tags {
            Some(tags) => {
                let tags = tags.into_vec();
                self.check_tags(&tags)?;
                if tags.is_empty() {
                    None
                } else {
                    Some(tags)
                }
            }
            None => None,
        };

        let data = match data {
            Some(data) => data,
            None => self.input.read_data().map_err(StoreError::Input)?,
        };

        let entry = Entry {
            timestamp: Local::now(),
            data,
            tags,
        };

        let mut entries = self.load();
        entries.push(entry.clone());
        self.persist(&entries)?;

        Ok(entry)
    }

    fn check_tags(&self, tags: &[String]) -> Result<(), StoreError> {
        let invalid: Vec<String> = tags
            .iter()
            .filter(|tag| !self.allowed_tags.contains(*tag))
            .cloned()
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(StoreError::InvalidTags {
                invalid,
                allowed: self.allowed_tags.clone(),
            })
        }
    }

    fn persist(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).map_err(StoreError::Write)?;
        tracing::debug!("wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
