//! # dictum
//!
//! A synchronous client for the DICT protocol (RFC 2229):
//! - One TCP connection, one blocking exchange at a time
//! - Typed reply-code dispatch with "no results" kept distinct from errors
//! - Lenient atom tokenization of quoted reply fields
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DictConnection                            │
//! │        (handshake, define / match / show, QUIT)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Status Parser                               │
//! │           (3-digit reply code + detail)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Atom     │          │    Value    │
//!   │  Splitter   │          │   Objects   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod net;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DictError, Result};
pub use config::{Config, DEFAULT_PORT};
pub use model::{Database, Definition, MatchingStrategy};
pub use net::DictConnection;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dictum
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
