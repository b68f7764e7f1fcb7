//! Terminal adapter for the catalogue engine.
//!
//! Reads one command per line from stdin, forwards it to a
//! [`CatalogController`], and redraws the catalog after each command.
//!
//! # Commands
//!
//! - `search <text>`: Apply a title search
//! - `category <name>`: Filter by category (`All` clears it)
//! - `sort <column>`: Sort by `title`, `price`, `category` or `rating`
//! - `page <n>`: Jump to page `n`
//! - `next` / `prev`: Move one page
//! - `reset`: Clear the query and reload
//! - `quit`: Exit
//!
//! # Data Sources
//!
//! `--file` reads the catalog envelope from disk; otherwise records are fetched
//! from the configured `source_url`.

#![allow(clippy::multiple_crate_versions)]

use catalogue::observability::init_tracing;
use catalogue::source::{DataSource, FileSource};
use catalogue::ui::render;
use catalogue::{CatalogController, CatalogError, Config, Result, SortColumn};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Browse a product catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "catalogue", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read records from a JSON file instead of the configured URL.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

const USAGE: &str =
    "commands: search <text> | category <name|All> | sort <column> | page <n> | next | prev | reset | quit";

/// A parsed input line.
#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Category(String),
    Sort(SortColumn),
    Page(usize),
    Next,
    Prev,
    Reset,
    Quit,
}

impl Command {
    fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match verb {
            "search" => Ok(Self::Search(rest.to_string())),
            "category" => Ok(Self::Category(rest.to_string())),
            "sort" => rest.parse().map(Self::Sort).map_err(|e: CatalogError| e.to_string()),
            "page" => rest
                .parse()
                .map(Self::Page)
                .map_err(|_| format!("Not a page number: {rest}")),
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            "reset" => Ok(Self::Reset),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command: {other}\n{USAGE}")),
        }
    }
}

fn open_source(cli: &Cli, config: &Config) -> Result<Box<dyn DataSource>> {
    match &cli.file {
        Some(path) => Ok(Box::new(FileSource::new(path))),
        None => open_remote(config),
    }
}

#[cfg(feature = "http")]
fn open_remote(config: &Config) -> Result<Box<dyn DataSource>> {
    Ok(Box::new(catalogue::source::HttpSource::new(&config.source_url)?))
}

#[cfg(not(feature = "http"))]
fn open_remote(_config: &Config) -> Result<Box<dyn DataSource>> {
    Err(CatalogError::Config(
        "built without the http feature; pass --file".to_string(),
    ))
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    init_tracing(&config);
    tracing::info!(page_size = config.page_size, "starting catalogue");

    let source = open_source(&cli, &config)?;
    let mut catalog = CatalogController::new(config, source);
    catalog.initialize().await;
    render(&catalog.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        let view = catalog.view();
        match command {
            Command::Search(text) => catalog.submit_search(&text).await,
            Command::Category(name) => {
                if let Err(e) = catalog.change_category(&name).await {
                    eprintln!("{e}");
                    continue;
                }
            }
            Command::Sort(column) => catalog.sort_by(column).await,
            Command::Page(n) => catalog.select_page(n).await,
            Command::Next if view.has_next() => catalog.select_page(view.current_page + 1).await,
            Command::Prev if view.has_previous() => catalog.select_page(view.current_page - 1).await,
            Command::Next | Command::Prev => {
                eprintln!("No more pages");
                continue;
            }
            Command::Reset => catalog.reset().await,
            Command::Quit => break,
        }

        render(&catalog.view());
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            Command::parse("search  apple "),
            Ok(Command::Search("apple".to_string()))
        );
        assert_eq!(
            Command::parse("category home-decoration"),
            Ok(Command::Category("home-decoration".to_string()))
        );
        assert_eq!(Command::parse("sort Price"), Ok(Command::Sort(SortColumn::Price)));
        assert_eq!(Command::parse("page 3"), Ok(Command::Page(3)));
        assert_eq!(Command::parse("next"), Ok(Command::Next));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(Command::parse("page two").is_err());
        assert!(Command::parse("sort weight").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn cli_accepts_config_and_file() {
        let cli = Cli::parse_from(["catalogue", "--config", "c.toml", "--file", "p.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.file, Some(PathBuf::from("p.json")));
    }
}
