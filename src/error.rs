// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Transport failure or non-success HTTP status.
    Http(String),
    /// Response body was not the JSON shape we expect.
    Parse(String),
    /// The provider answered but reported a failure in its own status block.
    Api { code: String, message: String },
    Timeout(Duration),
    /// The windowing runtime failed to start or crashed.
    Window(String),
}

impl Error {
    /// Short category name, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Config(_) => "config",
            Error::Http(_) => "http",
            Error::Parse(_) => "parse",
            Error::Api { .. } => "api",
            Error::Timeout(_) => "timeout",
            Error::Window(_) => "window",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Api { code, message } => write!(f, "API Error {}: {}", code, message),
            Error::Timeout(after) => write!(f, "Request timed out after {:?}", after),
            Error::Window(e) => write!(f, "Window Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Window(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
