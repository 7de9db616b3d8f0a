//! Error type for the `hop` command surface.
//!
//! The fuzzy core never fails; everything here comes from the filesystem,
//! configuration, or from asking to jump when nothing matches.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("workspace: {0}")]
    Workspace(String),

    #[error("config: {0}")]
    Config(String),

    #[error("invalid ignore pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("serialization failed: {0}")]
    Serialize(String),

    #[error(
        "no directory matches '{query}'\n\n\
         Suggestions:\n\
         - Use fewer characters; every query char must appear in order\n\
         - Scan deeper: hop pick --depth 5 {query}\n\
         - List what was scanned: hop find ''"
    )]
    NoMatch { query: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialize(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialize(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_mentions_query() {
        let msg = Error::NoMatch {
            query: "infra".to_string(),
        }
        .to_string();
        assert!(msg.starts_with("no directory matches 'infra'"));
        assert!(msg.contains("--depth"));
    }

    #[test]
    fn io_error_shows_path() {
        let err = Error::io(
            "/nope",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "/nope: missing");
    }
}
