use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use timeline_core::Metadata;
use timeline_logging::timeline_debug;

use crate::frontmatter::parse_metadata;
use crate::page::PageLike;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("front matter is not a mapping")]
    NotAMapping,
}

/// Read and parse the metadata of one Markdown file.
pub fn read_metadata(path: &Path) -> Result<Metadata, MetadataError> {
    let text = fs::read_to_string(path).map_err(|source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_metadata(&text)
}

/// Like [`read_metadata`], but any failure yields an empty mapping.
pub fn extract_from_path(path: &Path) -> Metadata {
    match read_metadata(path) {
        Ok(meta) => meta,
        Err(err) => {
            timeline_debug!("Ignoring metadata of {:?}: {}", path, err);
            Metadata::new()
        }
    }
}

/// Metadata for a host page: the host's own mapping when it has one,
/// otherwise whatever the source file declares.
pub fn extract_metadata<P: PageLike + ?Sized>(page: &P) -> Metadata {
    extract_metadata_in(page, None)
}

/// [`extract_metadata`] with relative source paths read from `docs_dir`.
pub fn extract_metadata_in<P: PageLike + ?Sized>(page: &P, docs_dir: Option<&Path>) -> Metadata {
    if let Some(meta) = page.meta().filter(|m| !m.is_empty()) {
        return meta.clone();
    }
    match page.source_path() {
        Some(path) => extract_from_path(&resolve_source(docs_dir, path)),
        None => Metadata::new(),
    }
}

/// Join a docs-relative source path onto `docs_dir`; absolute paths and
/// sites without a docs dir keep the path as given.
pub fn resolve_source(docs_dir: Option<&Path>, path: &Path) -> PathBuf {
    match docs_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
