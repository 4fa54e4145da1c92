//! Dictionary Connection
//!
//! Drives a single DICT session: handshake, the four request/reply
//! exchanges, and the QUIT shutdown.

use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use parking_lot::Mutex;

use crate::config::{Config, DEFAULT_PORT};
use crate::error::{DictError, Result};
use crate::model::{Database, Definition, MatchingStrategy};
use crate::protocol::{split_atoms, Command, ReplyCode, Status};

/// A connection to a DICT server
///
/// One logical session per instance. All operations lock the underlying
/// stream for the full exchange, so a shared connection serializes its
/// callers rather than interleaving replies. Not reconnectable after
/// [`close`](DictConnection::close).
#[derive(Debug)]
pub struct DictConnection {
    /// Reader/writer pair; one exchange holds the lock at a time
    inner: Mutex<Inner>,

    /// Peer address for logging
    peer_addr: String,
}

#[derive(Debug)]
struct Inner {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
    open: bool,
}

impl DictConnection {
    /// Connect to a DICT server and complete the 220 handshake
    ///
    /// The host is resolved before any socket is opened; an unresolvable
    /// host fails early with a `Connection` error.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let config = Config::builder().host(host).port(port).build();
        Self::connect_with(&config)
    }

    /// Connect using the default DICT port (2628)
    pub fn connect_default(host: &str) -> Result<Self> {
        Self::connect(host, DEFAULT_PORT)
    }

    /// Connect using an explicit [`Config`]
    ///
    /// Socket read/write timeouts from the config are applied before the
    /// handshake; a value of 0 leaves the socket fully blocking.
    pub fn connect_with(config: &Config) -> Result<Self> {
        let host = config.host.as_str();
        let port = config.port;

        // Resolve first: an unknown host is a different failure from an
        // unreachable server, and must not open a socket at all.
        let addrs: Vec<_> = (host, port)
            .to_socket_addrs()
            .map_err(|e| DictError::Connection(format!("invalid host {host:?}: {e}")))?
            .collect();
        if addrs.is_empty() {
            return Err(DictError::Connection(format!(
                "invalid host {host:?}: no addresses"
            )));
        }

        let stream = TcpStream::connect(&addrs[..]).map_err(|e| {
            DictError::Connection(format!("cannot connect to {host}:{port}: {e}"))
        })?;

        Self::handshake(stream, config)
    }

    /// Complete the session banner exchange over an open stream
    fn handshake(stream: TcpStream, config: &Config) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        let setup = |e: std::io::Error| DictError::Connection(format!("socket setup failed: {e}"));

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true).map_err(setup)?;

        if config.read_timeout_ms > 0 {
            stream
                .set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))
                .map_err(setup)?;
        }
        if config.write_timeout_ms > 0 {
            stream
                .set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))
                .map_err(setup)?;
        }

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone().map_err(setup)?;
        let mut reader = BufReader::new(read_stream);
        let writer = BufWriter::new(stream);

        // The server speaks first: require the 220 banner
        let banner = Status::read_from(&mut reader)
            .map_err(|e| DictError::Connection(format!("handshake failed: {e}")))?;
        if banner.code != ReplyCode::Ready {
            return Err(DictError::Connection(format!(
                "server refused session ({}): {}",
                banner.code.code(),
                banner.detail
            )));
        }

        tracing::debug!("connected to {}: {}", peer_addr, banner.detail);

        Ok(Self {
            inner: Mutex::new(Inner {
                reader,
                writer,
                open: true,
            }),
            peer_addr,
        })
    }

    /// Retrieve all definitions of a word from a database
    ///
    /// Returns definitions in server order. The 550 (invalid database)
    /// and 552 (no match) replies are not errors; they yield an empty
    /// collection.
    pub fn define(&self, word: &str, database: &Database) -> Result<Vec<Definition>> {
        let mut inner = self.inner.lock();
        inner.require_open()?;
        inner.send(&Command::Define {
            database: database.name.clone(),
            word: word.to_string(),
        })?;

        let status = inner.read_status()?;
        match status.code {
            ReplyCode::InvalidDatabase | ReplyCode::NoMatch => {
                tracing::debug!(
                    "no definitions for {:?} in {}: {}",
                    word,
                    database.name,
                    status.detail
                );
                Ok(Vec::new())
            }
            ReplyCode::DefinitionsFollow => {
                let count = leading_count(&status.detail)?;
                let mut definitions = Vec::with_capacity(count);

                for _ in 0..count {
                    let header = inner.read_status()?;
                    if header.code != ReplyCode::DefinitionHeader {
                        return Err(DictError::Protocol(format!(
                            "expected 151 definition header, got {}: {}",
                            header.code.code(),
                            header.detail
                        )));
                    }

                    let atoms = split_atoms(&header.detail);
                    if atoms.len() < 2 {
                        return Err(DictError::Protocol(format!(
                            "definition header missing fields: {:?}",
                            header.detail
                        )));
                    }
                    let mut definition = Definition::new(&atoms[0], &atoms[1]);

                    // Body runs until the sentinel, which is discarded
                    loop {
                        let line = inner.read_raw_line()?;
                        if line == "." {
                            break;
                        }
                        definition.append_line(line);
                    }
                    definitions.push(definition);
                }

                inner.expect_final_ok()?;
                tracing::debug!("{} definitions for {:?}", definitions.len(), word);
                Ok(definitions)
            }
            other => Err(DictError::Protocol(format!(
                "unexpected reply to DEFINE ({}): {}",
                other.code(),
                status.detail
            ))),
        }
    }

    /// List words matching a pattern under a strategy
    ///
    /// Returns a duplicate-free list in server order. The 550, 551
    /// (invalid strategy) and 552 replies yield an empty list.
    pub fn match_words(
        &self,
        word: &str,
        strategy: &MatchingStrategy,
        database: &Database,
    ) -> Result<Vec<String>> {
        let mut inner = self.inner.lock();
        inner.require_open()?;
        inner.send(&Command::Match {
            database: database.name.clone(),
            strategy: strategy.name.clone(),
            word: word.to_string(),
        })?;

        let status = inner.read_status()?;
        match status.code {
            ReplyCode::InvalidDatabase | ReplyCode::InvalidStrategy | ReplyCode::NoMatch => {
                tracing::debug!("no matches for {:?}: {}", word, status.detail);
                Ok(Vec::new())
            }
            ReplyCode::MatchesFollow => {
                let mut seen = HashSet::new();
                let mut matches = Vec::new();

                loop {
                    let line = inner.read_raw_line()?;
                    if line == "." {
                        break;
                    }
                    // Match lines are `<database> <word>`
                    let atoms = split_atoms(&line);
                    let matched = atoms.get(1).ok_or_else(|| {
                        DictError::Protocol(format!("match line missing word: {line:?}"))
                    })?;
                    if seen.insert(matched.clone()) {
                        matches.push(matched.clone());
                    }
                }

                inner.expect_final_ok()?;
                tracing::debug!("{} matches for {:?}", matches.len(), word);
                Ok(matches)
            }
            other => Err(DictError::Protocol(format!(
                "unexpected reply to MATCH ({}): {}",
                other.code(),
                status.detail
            ))),
        }
    }

    /// List the databases the server offers, keyed by name
    ///
    /// Duplicate names are last-write-wins. The 554 (no databases) reply
    /// yields an empty map.
    pub fn databases(&self) -> Result<HashMap<String, Database>> {
        let mut inner = self.inner.lock();
        inner.require_open()?;
        inner.send(&Command::ShowDatabases)?;

        let status = inner.read_status()?;
        match status.code {
            ReplyCode::NoDatabases => Ok(HashMap::new()),
            ReplyCode::DatabasesPresent => {
                let mut databases = HashMap::new();

                loop {
                    let line = inner.read_raw_line()?;
                    if line == "." {
                        break;
                    }
                    let atoms = split_atoms(&line);
                    if atoms.len() < 2 {
                        return Err(DictError::Protocol(format!(
                            "database line missing fields: {line:?}"
                        )));
                    }
                    let database = Database::new(&atoms[0], &atoms[1]);
                    databases.insert(database.name.clone(), database);
                }

                inner.expect_final_ok()?;
                tracing::debug!("server offers {} databases", databases.len());
                Ok(databases)
            }
            other => Err(DictError::Protocol(format!(
                "unexpected reply to SHOW DB ({}): {}",
                other.code(),
                status.detail
            ))),
        }
    }

    /// List the matching strategies the server offers
    ///
    /// Returns a duplicate-free list in server order (identity by
    /// strategy name). The 555 (no strategies) reply yields an empty
    /// list.
    pub fn strategies(&self) -> Result<Vec<MatchingStrategy>> {
        let mut inner = self.inner.lock();
        inner.require_open()?;
        inner.send(&Command::ShowStrategies)?;

        let status = inner.read_status()?;
        match status.code {
            ReplyCode::NoStrategies => Ok(Vec::new()),
            ReplyCode::StrategiesPresent => {
                let mut strategies: Vec<MatchingStrategy> = Vec::new();

                loop {
                    let line = inner.read_raw_line()?;
                    if line == "." {
                        break;
                    }
                    let atoms = split_atoms(&line);
                    if atoms.len() < 2 {
                        return Err(DictError::Protocol(format!(
                            "strategy line missing fields: {line:?}"
                        )));
                    }
                    if !strategies.iter().any(|s| s.name == atoms[0]) {
                        strategies.push(MatchingStrategy::new(&atoms[0], &atoms[1]));
                    }
                }

                inner.expect_final_ok()?;
                tracing::debug!("server offers {} strategies", strategies.len());
                Ok(strategies)
            }
            _ => Err(DictError::Protocol(
                "unexpected server response".to_string(),
            )),
        }
    }

    /// Send QUIT and shut the connection down
    ///
    /// Best-effort: every failure in the QUIT exchange or the socket
    /// shutdown is swallowed, so this is safe on an already-broken
    /// connection and idempotent on an already-closed one.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        if !inner.open {
            return;
        }
        inner.open = false;

        if let Err(e) = Self::quit(&mut inner) {
            tracing::debug!("QUIT exchange with {} failed: {}", self.peer_addr, e);
        } else {
            tracing::debug!("closed connection to {}", self.peer_addr);
        }
    }

    fn quit(inner: &mut Inner) -> Result<()> {
        inner.send(&Command::Quit)?;
        let reply = inner.read_raw_line()?;
        if reply.starts_with("221") {
            inner
                .writer
                .get_ref()
                .shutdown(Shutdown::Both)
                .map_err(|e| DictError::Protocol(format!("socket shutdown failed: {e}")))?;
        }
        Ok(())
    }

    /// The peer address this connection was established to
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Drop for DictConnection {
    fn drop(&mut self) {
        self.close();
    }
}

impl Inner {
    fn require_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(DictError::Protocol("connection is closed".to_string()))
        }
    }

    /// Write one command line and flush it
    fn send(&mut self, command: &Command) -> Result<()> {
        let line = command.wire_line();
        tracing::trace!("send: {}", line.trim_end());
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| DictError::Protocol(format!("write failed: {e}")))
    }

    fn read_status(&mut self) -> Result<Status> {
        let status = Status::read_from(&mut self.reader)?;
        tracing::trace!("recv: {} {}", status.code.code(), status.detail);
        Ok(status)
    }

    /// Read one raw reply line, stripped of its CR/LF terminator
    fn read_raw_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = self
            .reader
            .read_line(&mut line)
            .map_err(|e| DictError::Protocol(format!("read failed mid-exchange: {e}")))?;
        if n == 0 {
            return Err(DictError::Protocol(
                "server closed the stream mid-exchange".to_string(),
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Require the 250 that closes every successful exchange
    fn expect_final_ok(&mut self) -> Result<()> {
        let status = self.read_status()?;
        if status.code != ReplyCode::Ok {
            return Err(DictError::Protocol(format!(
                "expected 250 completing the exchange, got {}: {}",
                status.code.code(),
                status.detail
            )));
        }
        Ok(())
    }
}

/// Parse the leading count atom of a `150 n definitions retrieved` detail
fn leading_count(detail: &str) -> Result<usize> {
    let atoms = split_atoms(detail);
    atoms
        .first()
        .and_then(|a| a.parse().ok())
        .ok_or_else(|| DictError::Protocol(format!("bad definition count in {detail:?}")))
}
