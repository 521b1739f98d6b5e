// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cache;
pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod lang;
pub mod lookup;
pub mod model;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::LookupError;
pub use lookup::Dictionary;
pub use model::Entry;
pub use scrape::Scraper;
