//! dictum CLI
//!
//! Command-line interface for querying a DICT server.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use dictum::{Config, Database, DictConnection, MatchingStrategy, Result};

/// dictum CLI
#[derive(Parser, Debug)]
#[command(name = "dictum")]
#[command(about = "DICT protocol (RFC 2229) dictionary client")]
#[command(version)]
struct Args {
    /// DICT server hostname
    #[arg(short = 'H', long, default_value = "dict.org")]
    host: String,

    /// DICT server port
    #[arg(short, long, default_value = "2628")]
    port: u16,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up definitions of a word
    Define {
        /// The word to define
        word: String,

        /// Database to search (`*` = all, `!` = first with a hit)
        #[arg(short, long, default_value = "*")]
        db: String,
    },

    /// List words matching a pattern
    Match {
        /// The pattern to match
        word: String,

        /// Matching strategy to use
        #[arg(short, long, default_value = "prefix")]
        strategy: String,

        /// Database to search (`*` = all, `!` = first with a hit)
        #[arg(short, long, default_value = "*")]
        db: String,
    },

    /// List the databases the server offers
    Dbs,

    /// List the matching strategies the server offers
    Strategies,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::builder()
        .host(args.host.as_str())
        .port(args.port)
        .build();

    let conn = DictConnection::connect_with(&config)?;

    match &args.command {
        Commands::Define { word, db } => {
            let database = Database::new(db, "");
            let definitions = conn.define(word, &database)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&definitions).unwrap());
            } else if definitions.is_empty() {
                println!("No definitions found for {word:?}");
            } else {
                for definition in &definitions {
                    println!(
                        "--- {} ({})",
                        definition.database, definition.database_description
                    );
                    println!("{}", definition.text());
                }
            }
        }
        Commands::Match { word, strategy, db } => {
            let database = Database::new(db, "");
            let strategy = MatchingStrategy::new(strategy, "");
            let matches = conn.match_words(word, &strategy, &database)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&matches).unwrap());
            } else if matches.is_empty() {
                println!("No matches found for {word:?}");
            } else {
                for matched in &matches {
                    println!("{matched}");
                }
            }
        }
        Commands::Dbs => {
            let databases = conn.databases()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&databases).unwrap());
            } else if databases.is_empty() {
                println!("Server offers no databases");
            } else {
                let mut names: Vec<_> = databases.keys().collect();
                names.sort();
                for name in names {
                    println!("{:<16} {}", name, databases[name].description);
                }
            }
        }
        Commands::Strategies => {
            let strategies = conn.strategies()?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&strategies).unwrap());
            } else if strategies.is_empty() {
                println!("Server offers no matching strategies");
            } else {
                for strategy in &strategies {
                    println!("{:<16} {}", strategy.name, strategy.description);
                }
            }
        }
    }

    conn.close();
    Ok(())
}
