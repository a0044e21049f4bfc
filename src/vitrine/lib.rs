//! # Vitrine Architecture
//!
//! Vitrine is a **UI-agnostic catalog-browsing library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (query.rs, filter.rs, session.rs)                   │
//! │  - Search-string parsing, record predicates, pagination     │
//! │  - Deterministic, synchronous, side-effect-free             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecordStore trait                               │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, engine, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could serve a web gallery, a TUI, or any other client.
//!
//! ## The Browsing Engine
//!
//! The engine turns a raw search string plus a typed [`filter::FilterSet`]
//! into a deterministic, paginated subset of the catalog:
//!
//! 1. [`query::parse`] splits the string into free-text terms and
//!    structured tokens (`chain:ethereum`, `type:image`, `#1234`).
//! 2. [`filter::matches`] is the pure per-record predicate; all active
//!    constraints are ANDed.
//! 3. [`session::Session`] owns the incremental "load more" state: a
//!    fixed page size, an Idle/Fetching gate so at most one fetch is ever
//!    in flight, and ticket-correlated completions so a query change
//!    mid-fetch can never apply stale results.
//!
//! ## Testing Strategy
//!
//! 1. **Engine and commands**: thorough unit tests in `#[cfg(test)]`
//!    modules beside the code, driven by `InMemoryStore` fixtures. This is
//!    where the lion's share of testing lives.
//! 2. **API** (`api.rs`): mock tests verifying correct dispatch.
//! 3. **CLI**: end-to-end binary tests in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: Search-string parsing into a structured query
//! - [`filter`]: Typed filter object and the record predicate
//! - [`session`]: Pagination state machine with simulated fetch latency
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`AssetRecord`, `TraitAttribute`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod session;
pub mod store;
