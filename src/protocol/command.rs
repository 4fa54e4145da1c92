//! Command definitions
//!
//! Represents the commands this client sends.

/// An outbound DICT command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up definitions of a word in a database
    Define { database: String, word: String },

    /// List words matching a pattern under a strategy
    Match {
        database: String,
        strategy: String,
        word: String,
    },

    /// List the databases the server offers
    ShowDatabases,

    /// List the matching strategies the server offers
    ShowStrategies,

    /// End the session
    Quit,
}

impl Command {
    /// Encode the command as a CRLF-terminated wire line
    ///
    /// The word is always sent double-quoted so patterns containing
    /// spaces survive server-side tokenization. Database and strategy
    /// names (including the `*` and `!` pseudo-databases) are sent as-is.
    pub fn wire_line(&self) -> String {
        match self {
            Command::Define { database, word } => {
                format!("DEFINE {database} \"{word}\"\r\n")
            }
            Command::Match {
                database,
                strategy,
                word,
            } => {
                format!("MATCH {database} {strategy} \"{word}\"\r\n")
            }
            Command::ShowDatabases => "SHOW DB\r\n".to_string(),
            Command::ShowStrategies => "SHOW STRAT\r\n".to_string(),
            Command::Quit => "QUIT\r\n".to_string(),
        }
    }
}
