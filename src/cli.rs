// src/cli.rs
//
// Command line front end: one JSON document per looked-up term on stdout,
// progress and logs on stderr.
use std::{ io::{ self, Write }, path::PathBuf, process::ExitCode };

use clap::Parser;

use crate::{
    config::{ ClientOptions, consts::STORE_DIR },
    lookup::Dictionary,
    progress::Progress,
    scrape::Scraper,
    store::{ EntryStore, FileStore, NullStore },
};

#[derive(Parser, Debug)]
#[command(name = "dict_scrape", version, about = "Look up dictionary entries and print them as JSON")]
pub struct Args {
    /// Language slug: en, uk, en-tw, en-cn, cn-en
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Directory for stored entries
    #[arg(long, default_value = STORE_DIR, conflicts_with = "no_store")]
    pub store: PathBuf,

    /// Neither read nor write stored entries
    #[arg(long)]
    pub no_store: bool,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Terms to look up
    #[arg(required = true)]
    pub entries: Vec<String>,
}

/// Prints aggregate sub-page progress to stderr.
struct StderrProgress {
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("fetching {total} linked page(s)");
    }

    fn item_done(&mut self, index: usize, url: &str) {
        eprintln!("  [{}/{}] {url}", index + 1, self.total);
    }

    fn item_failed(&mut self, index: usize, url: &str) {
        eprintln!("  [{}/{}] {url} (skipped)", index + 1, self.total);
    }
}

pub fn run(args: Args) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let store: Box<dyn EntryStore> = if args.no_store {
        Box::new(NullStore)
    } else {
        Box::new(FileStore::new(&args.store))
    };
    let scraper = Scraper::new(ClientOptions::from_env())?;
    let dict = Dictionary::with_scraper(scraper, store);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;

    for term in &args.entries {
        let mut progress = StderrProgress { total: 0 };
        match dict.lookup_with_progress(&args.lang, term, &mut progress) {
            Ok(entry) => {
                let json = if args.compact {
                    serde_json::to_string(&entry)?
                } else {
                    serde_json::to_string_pretty(&entry)?
                };
                writeln!(out, "{json}")?;
            }
            Err(e) => {
                eprintln!("{term}: {e}");
                failed += 1;
            }
        }
    }

    Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let a = Args::try_parse_from(["dict_scrape", "hello"]).unwrap();
        assert_eq!(a.lang, "en");
        assert_eq!(a.store, PathBuf::from(STORE_DIR));
        assert!(!a.no_store && !a.compact);
        assert_eq!(a.entries, ["hello"]);
    }

    #[test]
    fn flags_and_many_terms() {
        let a = Args::try_parse_from([
            "dict_scrape", "--lang", "cn-en", "--no-store", "--compact", "--log-level", "debug", "跑", "走",
        ])
        .unwrap();
        assert_eq!(a.lang, "cn-en");
        assert!(a.no_store && a.compact);
        assert_eq!(a.log_level, "debug");
        assert_eq!(a.entries, ["跑", "走"]);
    }

    #[test]
    fn needs_a_term_and_rejects_conflicts() {
        assert!(Args::try_parse_from(["dict_scrape"]).is_err());
        assert!(Args::try_parse_from(["dict_scrape", "--store", "x", "--no-store", "a"]).is_err());
    }
}
