use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};

/// Days in the past an item may lie and still count as "recent".
pub const DEFAULT_RECENT_DAYS: i64 = 14;

/// Date patterns accepted in page metadata, tried in order.
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Direction in which timeline rows are ordered by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order {0:?} (expected \"asc\" or \"desc\")")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// Knobs for timeline assembly. Passed explicitly instead of living in globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Items dated more than this many days ago are dropped.
    pub recent_days: i64,
    /// `chrono` format strings accepted for `date` and `due`.
    pub date_formats: Vec<String>,
    pub order: SortOrder,
    /// Fixed "today"; `None` reads the local clock.
    pub today: Option<NaiveDate>,
    /// Also walk the docs directory for pages the host did not hand over.
    pub scan_docs_dir: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            recent_days: DEFAULT_RECENT_DAYS,
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
            order: SortOrder::default(),
            today: None,
            scan_docs_dir: true,
        }
    }
}

impl TimelineConfig {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}
