use crate::error::ParseError;
use crate::parser::{self, REDIS_SCHEME};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const REDACTED_PASSWORD: &str = "***";

/// A parsed Redis connection string.
///
/// Built in one go by [`parser::parse`] and read-only afterwards. Every field
/// may be empty; an empty field and a field missing from the URI look the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectionString {
    scheme: &'static str,
    username: String,
    password: String,
    hostname: String,
    port: String,
    // The Redis database index
    path: String,
}

impl ConnectionString {
    pub(crate) fn new(
        username: &str,
        password: &str,
        hostname: &str,
        port: &str,
        path: &str,
    ) -> Self {
        Self {
            scheme: REDIS_SCHEME,
            username: username.to_string(),
            password: password.to_string(),
            hostname: hostname.to_string(),
            port: port.to_string(),
            path: path.to_string(),
        }
    }

    pub fn scheme(&self) -> &str {
        self.scheme
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Rebuilds the shortest URI that parses back to the same fields.
    ///
    /// Empty optional parts are left out, so `redis://:@:/` comes back as `redis://`.
    pub fn to_uri(&self) -> String {
        self.render(&self.password)
    }

    fn render(&self, password: &str) -> String {
        let mut uri = String::from(self.scheme);
        if !self.username.is_empty() || !password.is_empty() {
            uri.push_str(&self.username);
            if !password.is_empty() {
                uri.push(':');
                uri.push_str(password);
            }
            uri.push('@');
        }
        uri.push_str(&self.hostname);
        if !self.port.is_empty() {
            uri.push(':');
            uri.push_str(&self.port);
        }
        if !self.path.is_empty() {
            uri.push('/');
            uri.push_str(&self.path);
        }
        uri
    }
}

/// Renders the URI with the password masked. Safe for log lines.
impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            REDACTED_PASSWORD
        };
        f.write_str(&self.render(password))
    }
}

impl FromStr for ConnectionString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}
