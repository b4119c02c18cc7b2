//! Timeline engine: page discovery, metadata extraction and template wiring.
mod collect;
mod frontmatter;
mod metadata;
mod page;
mod plugin;

pub use collect::{
    gather_pages, recent_and_upcoming, scan_markdown_files, timeline_view, url_for_source,
};
pub use frontmatter::parse_metadata;
pub use metadata::{
    extract_from_path, extract_metadata, extract_metadata_in, read_metadata, resolve_source,
    MetadataError,
};
pub use page::{BuildConfig, NavItem, Navigation, Page, PageLike, SiteContext};
pub use plugin::{
    define_env, DEFAULT_LIMIT, FORMAT_DATE, FORMAT_DUE, FORMAT_THREADS, RECENT_AND_UPCOMING,
    TIMELINE_VIEW,
};
