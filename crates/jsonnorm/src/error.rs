use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    /// The input is not syntactically valid JSON. `input` is the text exactly
    /// as the caller supplied it.
    ///
    /// Documents nested more than 128 levels deep are also reported here, with
    /// a "recursion limit exceeded" source, even when they are otherwise valid.
    #[error("failed to parse JSON at line {}, column {}", .source.line(), .source.column())]
    Parse {
        input: String,
        source: serde_json::Error,
    },

    #[error("expected a JSON string or null, found {found}")]
    InputType { found: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize JSON")]
    Serialize(#[source] serde_json::Error),
}

impl Error {
    /// The original input of a parse failure, unmodified.
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::Parse { input, .. } => Some(input),
            _ => None,
        }
    }

    pub fn into_input(self) -> Option<String> {
        match self {
            Error::Parse { input, .. } => Some(input),
            _ => None,
        }
    }

    /// One-based line of a parse failure.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Parse { source, .. } => Some(source.line()),
            _ => None,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match self {
            Error::Parse { source, .. } => Some(source.column()),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
