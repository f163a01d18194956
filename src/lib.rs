//! # Notas Architecture
//!
//! Notas is a **UI-agnostic note-keeping library**. There is no binary in
//! this crate: a CLI, a test harness, or any other frontend is an
//! external caller of the same API, and the only place that knows about
//! stdout, stderr, or exit codes.
//!
//! ## The Two-Layer Core
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Frontend (external)                                        │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store.rs, export.rs)                          │
//! │  - Owns the note directory, performs every file operation   │
//! │  - The sole error boundary: I/O failures come back as       │
//! │    Result values, never as panics                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer (model.rs)                                     │
//! │  - The `Note` value type and its stored text form           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage Format
//!
//! Each note is one file, `<dir>/<name>.txt`, written by `save`:
//!
//! ```text
//! Fecha: 2024-07-01 09:30:00
//!
//! the note body
//! ```
//!
//! Editing a note first copies the current file to a sibling
//! `<name>_bak.txt`. A single backup generation is retained; the next
//! edit overwrites it. The JSON export lands in `notas.json` in the
//! working directory.
//!
//! Two long-standing behaviors of this format are kept on purpose and
//! pinned by tests: `search` scans every file in the directory (backups
//! included) and reports each match with its last four characters
//! stripped, and `edit` writes the new body verbatim, so an edited note
//! loses its `Fecha:` header.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the store inward, code takes regular Rust arguments, returns
//! [`error::Result`], **never** writes to stdout or stderr, and **never**
//! calls `std::process::exit`. Storage failures are ordinary values the
//! caller must check. Operations with a yes/no outcome (`delete`) or a
//! checked rejection (`edit`) say so in their return type.
//!
//! ## Module Overview
//!
//! - [`model`]: the `Note` value type
//! - [`store`]: the note directory and every file operation on it
//! - [`export`]: JSON export of the stored notes
//! - [`config`]: configuration file support
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod store;
