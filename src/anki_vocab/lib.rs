//! # anki-vocab Architecture
//!
//! anki-vocab turns a vocabulary CSV into an Anki deck package (`.apkg`). The crate is a
//! small library with a thin CLI on top: everything that reads rows, builds notes and
//! assembles the deck lives here, the binary only parses arguments and prints messages.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints messages, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds the packager and the id source                     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The row → note → deck → package pipeline                 │
//! │  - Collects progress as `CmdMessage`s, never prints         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Packaging Layer (package.rs)                               │
//! │  - Abstract Packager trait                                  │
//! │  - AnkiPackager (genanki-rs), MemoryPackager (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline
//!
//! [`parser`] reads the CSV into [`model::VocabRow`]s, [`notes`] maps each row onto the
//! card template from [`template`], [`deck`] collects the notes, and a
//! [`package::Packager`] serializes the deck. Identifiers for the template and the deck are
//! drawn from an injected [`ids::IdSource`], so tests can pin them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: The deck generation pipeline and its result types
//! - [`config`]: Optional per-user defaults (`config.json`)
//! - [`deck`]: Deck assembly
//! - [`error`]: Error types
//! - [`ids`]: Model and deck identifier generation
//! - [`model`]: Core data types (`VocabRow`, `CardTemplate`, `VocabNote`, `Deck`)
//! - [`notes`]: Row to note mapping
//! - [`package`]: Package serialization
//! - [`parser`]: CSV row extraction and defaulting
//! - [`template`]: The vocabulary card template

pub mod api;
pub mod commands;
pub mod config;
pub mod deck;
pub mod error;
pub mod ids;
pub mod model;
pub mod notes;
pub mod package;
pub mod parser;
pub mod template;
