use crate::error::{RediscsError, Result};
use crate::model::ConnectionString;
use log::debug;
use std::process::{Command, ExitStatus};

/// The Redis CLI client program.
pub const DEFAULT_CLIENT: &str = "redis-cli";

const PASSWORD_FLAG: &str = "-a";
const HOSTNAME_FLAG: &str = "-h";
const PORT_FLAG: &str = "-p";
const DATABASE_FLAG: &str = "-n";

/// A client program plus the arguments it is launched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCommand {
    program: String,
    args: Vec<String>,
}

impl ClientCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Maps the connection string onto redis-cli flags, then appends `passthrough`.
    ///
    /// Empty fields produce no flag. The username is not forwarded.
    pub fn for_connection<I, S>(
        program: impl Into<String>,
        connection: &ConnectionString,
        passthrough: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut command = Self::new(program);
        command.push_option(PASSWORD_FLAG, connection.password());
        command.push_option(HOSTNAME_FLAG, connection.hostname());
        command.push_option(PORT_FLAG, connection.port());
        command.push_option(DATABASE_FLAG, connection.path());
        command
            .args
            .extend(passthrough.into_iter().map(Into::into));
        command
    }

    fn push_option(&mut self, flag: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Renders the command as a single line, quoting tokens that contain a space.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_token)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Launches the client with inherited stdio and waits for it to exit.
    ///
    /// The program is executed directly, not through a shell.
    pub fn run(&self) -> Result<ExitStatus> {
        debug!(
            "Launching {} with {} argument(s)",
            self.program,
            self.args.len()
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|e| {
                RediscsError::Client(format!("Failed to launch '{}': {}", self.program, e))
            })?;

        debug!("{} exited with {}", self.program, status);
        Ok(status)
    }
}

fn quote_token(token: &str) -> String {
    if token.contains(' ') {
        format!("\"{}\"", token)
    } else {
        token.to_string()
    }
}
