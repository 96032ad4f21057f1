//! # redis-cli-cs Architecture
//!
//! redis-cli-cs turns a Redis connection string into a `redis-cli` invocation:
//!
//! ```text
//! redis-cli-cs redis://:secret@example.com:37890/11 --bigkeys
//!   => redis-cli -a secret -h example.com -p 37890 -n 11 --bigkeys
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints help and errors                 │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client Layer (client.rs)                                   │
//! │  - Maps a ConnectionString onto redis-cli flags             │
//! │  - Renders and launches the external process                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (parser.rs, model.rs)                                 │
//! │  - Pure parsing of the URI into a ConnectionString          │
//! │  - No I/O, no logging, no shared state                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parsing Rules
//!
//! The parser never validates what follows the `redis://` prefix. It only
//! splits on separators:
//!
//! - user-info ends at the **last** `@`, so passwords may contain `@`
//! - the password starts after the **first** `:` of the user-info
//! - the path starts after the **first** `/` of the host part, further `/` stay in the path
//! - the port starts after the **first** `:` of the host, further `:` stay in the port
//!
//! Empty and missing fields are the same thing: `redis://:@host` and `redis://host`
//! produce identical values.
//!
//! ## Module Overview
//!
//! - [`parser`]: The URI parser
//! - [`model`]: The `ConnectionString` value type
//! - [`client`]: External client command line
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal output for the binary (not part of the lib API)

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
