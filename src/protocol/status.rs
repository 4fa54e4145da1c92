//! Status line parsing
//!
//! Every DICT reply begins with a status line: a 3-digit code followed by
//! free-text detail. The code drives all client-side branching.

use std::io::BufRead;

use crate::error::{DictError, Result};

/// Reply codes this client understands
///
/// Closed enumeration of the codes used by the four exchanges plus the
/// session banner; anything else is carried as `Other` and rejected at
/// the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    /// 110: n databases present
    DatabasesPresent,
    /// 111: n strategies available
    StrategiesPresent,
    /// 150: n definitions retrieved
    DefinitionsFollow,
    /// 151: definition header, body follows
    DefinitionHeader,
    /// 152: n matches found
    MatchesFollow,
    /// 220: server ready
    Ready,
    /// 221: closing connection
    Closing,
    /// 250: ok, exchange complete
    Ok,
    /// 550: invalid database
    InvalidDatabase,
    /// 551: invalid strategy
    InvalidStrategy,
    /// 552: no match
    NoMatch,
    /// 554: no databases present
    NoDatabases,
    /// 555: no strategies available
    NoStrategies,
    /// Any code outside the set above
    Other(u16),
}

impl ReplyCode {
    /// The numeric wire code
    pub fn code(self) -> u16 {
        match self {
            ReplyCode::DatabasesPresent => 110,
            ReplyCode::StrategiesPresent => 111,
            ReplyCode::DefinitionsFollow => 150,
            ReplyCode::DefinitionHeader => 151,
            ReplyCode::MatchesFollow => 152,
            ReplyCode::Ready => 220,
            ReplyCode::Closing => 221,
            ReplyCode::Ok => 250,
            ReplyCode::InvalidDatabase => 550,
            ReplyCode::InvalidStrategy => 551,
            ReplyCode::NoMatch => 552,
            ReplyCode::NoDatabases => 554,
            ReplyCode::NoStrategies => 555,
            ReplyCode::Other(code) => code,
        }
    }
}

impl From<u16> for ReplyCode {
    fn from(code: u16) -> Self {
        match code {
            110 => ReplyCode::DatabasesPresent,
            111 => ReplyCode::StrategiesPresent,
            150 => ReplyCode::DefinitionsFollow,
            151 => ReplyCode::DefinitionHeader,
            152 => ReplyCode::MatchesFollow,
            220 => ReplyCode::Ready,
            221 => ReplyCode::Closing,
            250 => ReplyCode::Ok,
            550 => ReplyCode::InvalidDatabase,
            551 => ReplyCode::InvalidStrategy,
            552 => ReplyCode::NoMatch,
            554 => ReplyCode::NoDatabases,
            555 => ReplyCode::NoStrategies,
            other => ReplyCode::Other(other),
        }
    }
}

/// A parsed status line
///
/// Ephemeral: consumed immediately by the exchange that read it.
#[derive(Debug, Clone)]
pub struct Status {
    /// The 3-digit reply code
    pub code: ReplyCode,

    /// Free-text detail after the code (may be empty)
    pub detail: String,
}

impl Status {
    /// Read one status line from the reply stream
    ///
    /// Fails with `MalformedResponse` if the stream ends before a line is
    /// available, and with `Protocol` on a transport-level read failure.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Status> {
        let mut line = String::new();
        let n = reader
            .read_line(&mut line)
            .map_err(|e| DictError::Protocol(format!("read failed while awaiting status: {e}")))?;
        if n == 0 {
            return Err(DictError::MalformedResponse(
                "end of stream while awaiting a status line".to_string(),
            ));
        }
        Status::parse(line.trim_end_matches(['\r', '\n']))
    }

    /// Parse a status line already stripped of its line terminator
    pub fn parse(line: &str) -> Result<Status> {
        let bytes = line.as_bytes();
        if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
            return Err(DictError::MalformedResponse(format!(
                "not a status line: {line:?}"
            )));
        }
        // A bare "250" is legal; otherwise the code must be followed by a space
        if bytes.len() > 3 && bytes[3] != b' ' {
            return Err(DictError::MalformedResponse(format!(
                "not a status line: {line:?}"
            )));
        }

        let code: u16 = line[..3]
            .parse()
            .map_err(|_| DictError::MalformedResponse(format!("bad status code in {line:?}")))?;
        let detail = if line.len() > 4 { &line[4..] } else { "" };

        Ok(Status {
            code: ReplyCode::from(code),
            detail: detail.to_string(),
        })
    }
}
