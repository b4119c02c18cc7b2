use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid site config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("docs directory {0:?} does not exist")]
    MissingDocsDir(PathBuf),
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
