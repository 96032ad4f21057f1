//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides the process exit code
//! - Handles argument parsing
//!
//! ## Flow
//!
//! 1. Parse arguments with clap; no connection string means "print help"
//! 2. Initialize logging (`-v` switches to debug)
//! 3. Parse the connection string, failing fast on malformed input
//! 4. Resolve the client program: `--client`, then config.json, then `redis-cli`
//! 5. Print, inspect or launch, returning the client's exit code
//!
//! Our own options must come before the connection string. Every token after
//! it, flags included, belongs to the client.

use super::render::{print_command_line, print_connection_json, print_executing};
use super::setup::{print_help, Cli};
use clap::Parser;
use log::debug;
use rediscs::client::ClientCommand;
use rediscs::config::RediscsConfig;
use rediscs::error::Result;
use rediscs::model::ConnectionString;
use rediscs::parser;
use std::process::ExitStatus;

/// Exit code used when the client was stopped by a signal.
const SIGNALED_EXIT_CODE: i32 = 1;

/// Runs the CLI and returns the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(raw) = cli.connection_string() else {
        print_help();
        return Ok(0);
    };

    let connection = parser::parse(raw)?;
    debug!("Parsed connection string {}", connection);

    if cli.inspect {
        return handle_inspect(&connection);
    }

    let config = RediscsConfig::load_or_default();
    let program = cli.client.clone().unwrap_or_else(|| config.client.clone());
    let command = ClientCommand::for_connection(program, &connection, cli.client_args());

    if cli.dry_run {
        print_command_line(&command);
        return Ok(0);
    }

    handle_launch(&command, &config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn handle_inspect(connection: &ConnectionString) -> Result<i32> {
    print_connection_json(connection)?;
    Ok(0)
}

fn handle_launch(command: &ClientCommand, config: &RediscsConfig) -> Result<i32> {
    if config.echo_command {
        print_executing(command);
    }
    let status = command.run()?;
    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(SIGNALED_EXIT_CODE)
}
