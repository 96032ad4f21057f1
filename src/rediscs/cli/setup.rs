use clap::{CommandFactory, Parser};

const EXAMPLES: &str = "\
Examples:
  redis-cli-cs redis://:foobar@example.com:37890/11
  redis-cli-cs redis://:foobar@example.com:37890/11 --bigkeys --latency-history";

#[derive(Parser, Debug)]
#[command(
    name = "redis-cli-cs",
    bin_name = "redis-cli-cs",
    version,
    about = "Redis CLI client connection string (URI) connector",
    long_about = None,
    override_usage = "redis-cli-cs [OPTIONS] [CONNECTION_STRING] [CLIENT_ARGS]...",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Client program to launch (default: redis-cli, or `client` from config.json)
    #[arg(long, value_name = "PROGRAM", help_heading = "Options")]
    pub client: Option<String>,

    /// Print the client command line without running it
    #[arg(long, help_heading = "Options")]
    pub dry_run: bool,

    /// Print the parsed connection string as JSON and exit
    #[arg(long, conflicts_with = "dry_run", help_heading = "Options")]
    pub inspect: bool,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Redis connection string (e.g. redis://:password@host:6379/0), then
    /// extra arguments handed to the client as-is
    #[arg(
        value_name = "CONNECTION_STRING",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// The first positional token. Everything after it belongs to the client.
    pub fn connection_string(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn client_args(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }
}

/// Returns the full help text, examples included
pub fn get_help() -> String {
    Cli::command().render_help().to_string()
}

pub fn print_help() {
    print!("{}", get_help());
}
