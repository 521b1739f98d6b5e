//! # Page parsers
//!
//! One module per kind of upstream page. Each one encodes *where the data
//! lives in the HTML* and *how to pull it out tolerantly*; none of them touches
//! the network, the cache or the store.
//!
//! ## What lives here
//! - **Pure HTML parsing** of fetched pages into `model` types.
//! - **Selector choice & precedence**, including the ordered fallbacks the
//!   entry page needs (primary block → looser scan), where a later strategy
//!   only runs if the earlier one found nothing.
//!
//! ## What does **not** live here
//! - **Fetching/caching** (`fetch::Fetcher`) and **persistence** (`store`).
//! - **Cross-page merging**: the aggregate lookup in `scrape` decides which
//!   pages to read and how to combine them.
//!
//! ## Typical call chain
//! ```text
//! lookup::Dictionary → scrape::Scraper → fetch::Fetcher → specs::<page>::parse
//! ```
//!
//! ## Testing notes
//! - Parsers are tested offline against inline snippets and `tests/fixtures/`.
//! - Keep selectors resilient to whitespace and attribute order; upstream
//!   markup differs between language pairs.
//!
//! ## Current pages
//! - `entry` – a dictionary entry page (headword, pos, pronunciations, definitions).
//! - `verbs` – a conjugation table page.
//! - `xref`  – links from a reverse-bilingual landing page into the forward dictionary.
pub mod entry;
pub mod verbs;
pub mod xref;
