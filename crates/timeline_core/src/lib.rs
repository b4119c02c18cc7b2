//! Timeline core: pure date coercion, row assembly and display formatting.
mod assemble;
mod config;
mod date;
mod format;
mod item;
mod limit;
mod meta;
mod view;

pub use assemble::{
    assemble, build_item, collect_items, finish, sort_items, DEFAULT_TITLE, DEFAULT_TYPE,
};
pub use config::{
    ParseSortOrderError, SortOrder, TimelineConfig, DEFAULT_DATE_FORMATS, DEFAULT_RECENT_DAYS,
};
pub use date::{coerce_date, days_between, parse_date_str};
pub use format::{
    format_date_long, format_due_short, format_threads, html_escape, ordinal_suffix,
    slugify_thread, ThreadStyle, DEFAULT_SLUG,
};
pub use item::{Candidate, TimelineItem};
pub use limit::Limit;
pub use meta::{
    meta_text, normalize_threads, scalar_to_string, Metadata, KEY_CODE, KEY_DATE, KEY_DUE,
    KEY_THREADS, KEY_TITLE, KEY_TYPE,
};
pub use view::{build_view, group_by_day, week_start, DayGroup, TimelineView, ViewRow};
