//! Errors raised while reading content collections

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON front-matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unterminated JSON front-matter")]
    UnterminatedJson,

    #[error("missing publish date")]
    MissingDate,

    #[error("unrecognized publish date {0:?}")]
    InvalidDate(String),
}
