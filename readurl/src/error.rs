use std::{error::Error, fmt::Write, io};

use thiserror::Error;

/// Everything that can go wrong while fetching a URL, collapsed into one
/// description.
#[derive(Debug, Error)]
#[error("{description}")]
pub struct FetchError {
    description: String,
}

impl FetchError {
    /// Joins `err` and its `source()` chain, skipping causes already folded
    /// into the text.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !description.contains(&text) {
                _ = write!(description, ": {text}");
            }
            source = cause.source();
        }

        Self {
            description: description.replace(['\r', '\n'], " "),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_error(&err)
    }
}

impl From<io::Error> for FetchError {
    fn from(err: io::Error) -> Self {
        Self::from_error(&err)
    }
}
