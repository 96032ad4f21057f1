//! # CLI Behavior
//!
//! `redis-cli-cs <CONNECTION_STRING> [CLIENT_ARGS]...`
//!
//! For the overall architecture, see the crate-level documentation in [`rediscs`].
//!
//! ### Naked Execution (`redis-cli-cs`)
//!
//! Running without a connection string prints help and exits successfully.
//!
//! ### Launch
//!
//! `redis-cli-cs redis://:secret@example.com:37890/11 --bigkeys` prints
//! `Executing... redis-cli -a secret -h example.com -p 37890 -n 11 --bigkeys`
//! and then runs it, exiting with the client's status.
//!
//! ### Looking Without Launching
//!
//! - `--dry-run` prints the command line only.
//! - `--inspect` prints the parsed fields as JSON.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and exit codes
//! - `render`: Output formatting (colors, messages)
//! - `setup`: Argument parsing via clap, help text

mod commands;
pub mod render;
pub mod setup;

pub use commands::run;
