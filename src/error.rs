// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested key path is absent from the label tree.
    /// Fallback policy is the caller's decision, not ours.
    MissingKey(String),

    /// Requested path resolves to a subtree instead of a leaf string,
    /// or tries to descend through a leaf. A caller usage error.
    ShapeMismatch(String),

    /// A leaf in a locale file holds an empty string.
    EmptyLabel(String),

    /// Locale is not among the loaded bundles.
    UnknownLocale(String),

    Io(String),
    Parse(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingKey(path) => write!(f, "Missing translation key: {}", path),
            Error::ShapeMismatch(path) => {
                write!(f, "Key path does not end at a leaf string: {}", path)
            }
            Error::EmptyLabel(path) => write!(f, "Empty label at key: {}", path),
            Error::UnknownLocale(locale) => write!(f, "Unknown locale: {}", locale),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
