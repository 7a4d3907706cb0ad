//! # Atelier Architecture
//!
//! Atelier is a **UI-agnostic project file store**. This is not a CLI
//! application that happens to have some library code — it's a library that
//! happens to have a CLI client.
//!
//! The store is the single source of truth for a playground-style
//! workspace: a flat, path-keyed set of files, the tab bar and active
//! selection, an append-only version history per file, and line-anchored
//! comments. Everything a view needs (the sorted/filtered tree, a version
//! diff) is *derived* from that state by pure functions.
//!
//! ## The Three-Layer Architecture
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
//! │  - Normalizes textual inputs into typed values              │
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
//! │  Storage Layer (store/)                                     │
//! │  - ProjectStore over an abstract StorageBackend             │
//! │  - JsonBackend (snapshots), MemBackend (testing/embedding)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Never Crash the Input Loop
//!
//! Store operations that run on hot UI paths — a debounced write landing
//! after the file was deleted in another panel, a tab click racing a
//! rename — report the missing target through their return value instead
//! of an error. Hard errors are reserved for invalid input on explicit
//! actions and for backend I/O failures.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business
//!    logic against the in-memory store. The lion's share of testing.
//! 2. **API** (`api.rs`): dispatch and input-normalization tests.
//! 3. **CLI**: end-to-end tests under `tests/` driving the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`FileEntry`, `Version`, `Comment`)
//! - [`tree`]: The derived display tree and its sort keys
//! - [`diff`]: Positional line diff between version snapshots
//! - [`language`]: Extension → language lookup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod diff;
pub mod error;
pub mod language;
pub mod model;
pub mod store;
pub mod tree;
