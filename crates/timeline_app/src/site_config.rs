//! Site configuration read from the generator's `mkdocs.yml`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use timeline_logging::{timeline_info, timeline_warn};

use crate::error::AppError;

pub const DEFAULT_CONFIG_FILE: &str = "mkdocs.yml";
const DEFAULT_DOCS_DIR: &str = "docs";

/// Only the keys the timeline cares about; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct RawSiteConfig {
    #[serde(default)]
    site_name: Option<String>,
    #[serde(default)]
    docs_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: Option<String>,
    /// Resolved against the directory holding the config file.
    pub docs_dir: PathBuf,
}

impl SiteConfig {
    fn from_raw(raw: RawSiteConfig, base: &Path) -> Self {
        let docs_dir = raw
            .docs_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR));
        Self {
            site_name: raw.site_name,
            docs_dir: base.join(docs_dir),
        }
    }
}

/// Load `path`. A missing file falls back to defaults; a malformed one is
/// an error.
pub fn load_site_config(path: &Path) -> Result<SiteConfig, AppError> {
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            timeline_warn!("Site config {:?} not found; using defaults", path);
            return Ok(SiteConfig::from_raw(RawSiteConfig::default(), base));
        }
        Err(source) => {
            return Err(AppError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let raw: RawSiteConfig = if text.trim().is_empty() {
        RawSiteConfig::default()
    } else {
        serde_yaml::from_str(&text).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?
    };
    let config = SiteConfig::from_raw(raw, base);
    timeline_info!("Loaded site config from {:?}", path);
    Ok(config)
}
