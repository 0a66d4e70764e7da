//! # Quiz Site
//!
//! A minimal static site generator for quiz collections. A data directory of
//! JSON documents becomes a plain HTML site: one index page linking to one
//! page per quiz.
//!
//! ```text
//! data/index.json   [{"title": "HTML", "file": "html.json"}, ...]
//! data/html.json    {"title": "HTML", "questions": [{"question", "answers": [{"answer", "correct"}]}]}
//!        ↓
//! dist/index.html   <ul> of links, in index order
//! dist/html.html    one section per question, one list item per answer
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 1. Load      index.json          → JSON array        (abort if not an array)
//! 2. Validate  array elements      → IndexEntry        (abort if none valid)
//! 3. Filter    IndexEntry          → ValidatedEntry    (abort if none exist + validate)
//! 4. Render    ValidatedEntry      → dist/*.html       (per-page skip, never abort)
//! ```
//!
//! Malformed data is skipped at the smallest level that contains it: a bad
//! answer drops the answer, a bad question drops the question, a bad document
//! drops the page. Only the three checks above stop a build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | Orchestrates the stages, returns a [`pipeline::BuildReport`] or an abort reason |
//! | [`validate`] | Structural rules for index entries, documents, questions and answers |
//! | [`loader`] | Reads and parses JSON, collapsing failures to `None` |
//! | [`filter`] | Parallel existence + validity check that keeps index order |
//! | [`generate`] | Writes the index and quiz pages, one [`generate::PageOutcome`] each |
//! | [`render`] | Maud templates: validated data → HTML markup |
//! | [`fs`] | [`fs::Filesystem`] trait and the local implementation |
//! | [`config`] | Input/output paths and `config.toml` site settings |
//! | [`types`] | Data model shared across stages |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## No Caching Between Stages
//!
//! The existence filter and the page renderer each load the quiz document
//! themselves. Each stage can be tested in isolation, and a build never claims
//! more consistency than it has: a file that changes between the two reads is
//! judged again at render time.
//!
//! ## Parallel Fan-Out with Rayon
//!
//! Existence checks and page renders run on rayon's thread pool with no cap.
//! The data sets are small and each unit touches a distinct file. Collecting
//! through indexed parallel iterators keeps results in index order.
//!
//! ## Deterministic Output
//!
//! Pages contain nothing but the input data and configuration, so rebuilding
//! unchanged input overwrites `dist/` with byte-identical files.

pub mod config;
pub mod filter;
pub mod fs;
pub mod generate;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
