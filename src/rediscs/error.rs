use thiserror::Error;

/// Reasons a connection string is rejected by the parser.
///
/// Anything that starts with the scheme is accepted, so these are the only two.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty Redis connection string.")]
    EmptyInput,

    #[error("Redis connection string must start with the Redis URI scheme (redis://).")]
    MissingScheme,
}

#[derive(Error, Debug)]
pub enum RediscsError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Client error: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, RediscsError>;
