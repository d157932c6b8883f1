//! # moviesearch Architecture
//!
//! moviesearch is a **UI-agnostic movie search library**: a filter form's state,
//! the predicate pipeline that narrows a catalogue, and the pagination that
//! slices the result. The bundled terminal client is one way to drive it; a web
//! or GUI front end would drive the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and shell lines, renders tables         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - MovieSearchApi: owns filter state, results, page         │
//! │  - Named transitions: edit, search, reset, change page      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over Rust types                               │
//! │  - edit, search (predicates), paginate, reset, config       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: get_all()                               │
//! │  - SampleStore (compiled in), InMemoryStore (tests)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Search Lifecycle
//!
//! Editing a field only changes [`filters::FilterState`]. Results change on two
//! events: `search`, which runs the predicate pipeline once, and `reset`, which
//! restores the whole catalogue directly. Both send the view back to page 1.
//!
//! ## Module Overview
//!
//! - [`api`]: the page controller
//! - [`commands`]: business logic for each transition
//! - [`filters`]: filter state and field edits
//! - [`dates`]: release-date parsing and ranges
//! - [`store`]: catalogue sources
//! - [`model`]: `Movie` and the sort selector
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod filters;
pub mod model;
pub mod store;
