use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One logged record.
///
/// Entries are immutable once written: the tool only ever appends. The
/// timestamp is local wall-clock time at append, serialized as an
/// ISO-8601 / RFC 3339 string with UTC offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub timestamp: DateTime<Local>,
    /// The entry text.
    pub data: String,
    /// Tags on the entry. Omitted from the JSON when absent; never
    /// present as an empty list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Tags supplied to an append: one bare tag or a list of tags.
///
/// A bare string normalizes to a one-element list, so `"life"` and
/// `["life"]` mean the same thing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    One(String),
    Many(Vec<String>),
}

impl Tags {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(tag) => vec![tag],
            Self::Many(tags) => tags,
        }
    }
}

impl From<&str> for Tags {
    fn from(tag: &str) -> Self {
        Self::One(tag.to_string())
    }
}

impl From<String> for Tags {
    fn from(tag: String) -> Self {
        Self::One(tag)
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Self::Many(tags)
    }
}
