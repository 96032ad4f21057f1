use colored::Colorize;
use rediscs::client::ClientCommand;
use rediscs::error::{RediscsError, Result};
use rediscs::model::ConnectionString;
use std::io::IsTerminal;

const EXECUTING_LABEL: &str = "Executing...";

pub fn print_executing(command: &ClientCommand) {
    let use_color = std::io::stdout().is_terminal();
    println!("{}", render_executing(command, use_color));
}

fn render_executing(command: &ClientCommand, use_color: bool) -> String {
    let line = command.command_line();
    if use_color {
        format!("{} {}", EXECUTING_LABEL.dimmed(), line)
    } else {
        format!("{} {}", EXECUTING_LABEL, line)
    }
}

pub fn print_command_line(command: &ClientCommand) {
    println!("{}", command.command_line());
}

pub fn print_connection_json(connection: &ConnectionString) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(connection)?);
    Ok(())
}

pub fn print_error(error: &RediscsError) {
    let use_color = std::io::stderr().is_terminal();
    eprintln!("{}", render_error(error, use_color));
}

fn render_error(error: &RediscsError, use_color: bool) -> String {
    let message = format!("Error: {}", error);
    if use_color {
        message.red().to_string()
    } else {
        message
    }
}
