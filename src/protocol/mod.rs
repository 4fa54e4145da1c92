//! Protocol Module
//!
//! Defines the DICT wire protocol (RFC 2229) as seen by the client.
//!
//! ## Protocol Format (text, CRLF line-based)
//!
//! Every exchange is one command line out, one or more reply lines back.
//! Reply lines are either status lines (3-digit code + free text) or raw
//! body lines; multi-line bodies end with a lone `.` sentinel line.
//!
//! ### Commands
//! ```text
//! DEFINE <db> "<word>"         150 + n x (151 + body + .) + 250 | 550 | 552
//! MATCH <db> <strat> "<word>"  152 + body + . + 250            | 550 | 551 | 552
//! SHOW DB                      110 + body + . + 250            | 554
//! SHOW STRAT                   111 + body + . + 250            | 555
//! QUIT                         221
//! ```
//!
//! ### Status Codes
//! - 110: n databases present
//! - 111: n strategies present
//! - 150: n definitions retrieved
//! - 151: definition header (word, database, description)
//! - 152: n matches found
//! - 220: server ready (connection banner)
//! - 221: closing connection
//! - 250: ok (exchange complete)
//! - 550: invalid database
//! - 551: invalid strategy
//! - 552: no match
//! - 554: no databases present
//! - 555: no strategies available

mod atoms;
mod command;
mod status;

pub use atoms::split_atoms;
pub use command::Command;
pub use status::{ReplyCode, Status};
