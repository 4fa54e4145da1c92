//! Protocol Tests
//!
//! Tests for atom splitting, status-line parsing and command encoding.

use std::io::Cursor;

use dictum::protocol::{split_atoms, Command, ReplyCode, Status};
use dictum::DictError;

// =============================================================================
// Atom Splitter Tests
// =============================================================================

#[test]
fn test_split_plain_atoms() {
    assert_eq!(
        split_atoms("110 3 databases present"),
        vec!["110", "3", "databases", "present"]
    );
}

#[test]
fn test_split_quoted_atom_keeps_spaces() {
    assert_eq!(
        split_atoms("151 word db \"A longer description\""),
        vec!["151", "word", "db", "A longer description"]
    );
}

#[test]
fn test_split_quoted_atom_mid_line() {
    assert_eq!(
        split_atoms("web1 \"The Web's Dictionary\" extra"),
        vec!["web1", "The Web's Dictionary", "extra"]
    );
}

#[test]
fn test_split_unmatched_quote_is_one_trailing_atom() {
    assert_eq!(
        split_atoms("550 \"no closing quote here"),
        vec!["550", "no closing quote here"]
    );
}

#[test]
fn test_split_empty_line() {
    assert!(split_atoms("").is_empty());
    assert!(split_atoms("   ").is_empty());
}

#[test]
fn test_split_collapses_repeated_whitespace() {
    assert_eq!(split_atoms("a   b\tc"), vec!["a", "b", "c"]);
}

#[test]
fn test_split_empty_quoted_atom() {
    assert_eq!(split_atoms("db \"\""), vec!["db", ""]);
}

// =============================================================================
// Status Parser Tests
// =============================================================================

#[test]
fn test_parse_status_with_detail() {
    let status = Status::parse("220 dict.example ready").unwrap();
    assert_eq!(status.code, ReplyCode::Ready);
    assert_eq!(status.detail, "dict.example ready");
}

#[test]
fn test_parse_bare_status() {
    let status = Status::parse("250").unwrap();
    assert_eq!(status.code, ReplyCode::Ok);
    assert_eq!(status.detail, "");
}

#[test]
fn test_parse_unknown_code() {
    let status = Status::parse("420 server busy").unwrap();
    assert_eq!(status.code, ReplyCode::Other(420));
    assert_eq!(status.code.code(), 420);
}

#[test]
fn test_parse_rejects_text_first() {
    assert!(matches!(
        Status::parse("ready 220"),
        Err(DictError::MalformedResponse(_))
    ));
}

#[test]
fn test_parse_rejects_short_code() {
    assert!(matches!(
        Status::parse("22"),
        Err(DictError::MalformedResponse(_))
    ));
}

#[test]
fn test_parse_rejects_code_without_separator() {
    assert!(matches!(
        Status::parse("250ok"),
        Err(DictError::MalformedResponse(_))
    ));
}

#[test]
fn test_read_from_strips_crlf() {
    let mut input = Cursor::new(b"150 2 definitions retrieved\r\n".to_vec());
    let status = Status::read_from(&mut input).unwrap();
    assert_eq!(status.code, ReplyCode::DefinitionsFollow);
    assert_eq!(status.detail, "2 definitions retrieved");
}

#[test]
fn test_read_from_empty_stream_is_malformed() {
    let mut input = Cursor::new(Vec::new());
    assert!(matches!(
        Status::read_from(&mut input),
        Err(DictError::MalformedResponse(_))
    ));
}

// =============================================================================
// Reply Code Tests
// =============================================================================

#[test]
fn test_reply_code_round_trip() {
    for code in [110, 111, 150, 151, 152, 220, 221, 250, 550, 551, 552, 554, 555] {
        assert_eq!(ReplyCode::from(code).code(), code);
    }
}

#[test]
fn test_reply_code_other_round_trip() {
    assert_eq!(ReplyCode::from(599), ReplyCode::Other(599));
    assert_eq!(ReplyCode::Other(599).code(), 599);
}

// =============================================================================
// Command Encoding Tests
// =============================================================================

#[test]
fn test_encode_define() {
    let cmd = Command::Define {
        database: "wn".to_string(),
        word: "lattice".to_string(),
    };
    assert_eq!(cmd.wire_line(), "DEFINE wn \"lattice\"\r\n");
}

#[test]
fn test_encode_match() {
    let cmd = Command::Match {
        database: "*".to_string(),
        strategy: "prefix".to_string(),
        word: "lat".to_string(),
    };
    assert_eq!(cmd.wire_line(), "MATCH * prefix \"lat\"\r\n");
}

#[test]
fn test_encode_word_with_spaces_stays_quoted() {
    let cmd = Command::Define {
        database: "!".to_string(),
        word: "vis major".to_string(),
    };
    assert_eq!(cmd.wire_line(), "DEFINE ! \"vis major\"\r\n");
}

#[test]
fn test_encode_show_and_quit() {
    assert_eq!(Command::ShowDatabases.wire_line(), "SHOW DB\r\n");
    assert_eq!(Command::ShowStrategies.wire_line(), "SHOW STRAT\r\n");
    assert_eq!(Command::Quit.wire_line(), "QUIT\r\n");
}
