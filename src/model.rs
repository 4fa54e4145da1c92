//! Value objects returned by a DICT server
//!
//! Plain data holders populated by the connection layer from parsed
//! reply atoms.

use serde::{Deserialize, Serialize};

/// A dictionary database offered by the server
///
/// The special names `*` (all databases) and `!` (first database with a
/// hit) are opaque tokens passed through to the server, not interpreted
/// by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Short name used in commands (e.g. `wn`)
    pub name: String,

    /// Human-readable description (e.g. `WordNet (r) 3.0`)
    pub description: String,
}

impl Database {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The `*` pseudo-database: search all databases
    pub fn all() -> Self {
        Self::new("*", "All databases")
    }

    /// The `!` pseudo-database: first database with a hit
    pub fn first_match() -> Self {
        Self::new("!", "First database with a match")
    }
}

/// A matching strategy offered by the server (e.g. `exact`, `prefix`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingStrategy {
    /// Short name used in commands
    pub name: String,

    /// Human-readable description
    pub description: String,
}

impl MatchingStrategy {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A single definition returned by a DEFINE exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Name of the database the definition came from
    pub database: String,

    /// Description of that database, as reported in the 151 status line
    pub database_description: String,

    /// Raw body lines, in server order, without the terminating sentinel
    pub body: Vec<String>,
}

impl Definition {
    /// Create an empty definition for the given source database
    pub fn new(database: impl Into<String>, database_description: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            database_description: database_description.into(),
            body: Vec::new(),
        }
    }

    /// Append one raw body line
    pub fn append_line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    /// The full definition text, body lines joined with newlines
    pub fn text(&self) -> String {
        self.body.join("\n")
    }
}
