//! Snippet value types

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A named unit of text stored under a unique keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub keyword: String,
    pub message: String,
    #[serde(default)]
    pub hidden: bool,
}

impl Snippet {
    pub fn new(keyword: impl Into<String>, message: impl Into<String>, hidden: bool) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
            hidden,
        }
    }
}

impl std::fmt::Display for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.keyword, self.message)?;
        if self.hidden {
            write!(f, " (hidden)")?;
        }
        Ok(())
    }
}

/// One row of a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct SearchHit {
    #[tabled(rename = "Keyword")]
    pub keyword: String,
    #[tabled(rename = "Message")]
    pub message: String,
}

impl SearchHit {
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
        }
    }
}
