use chrono::NaiveDate;
use serde::Serialize;

use crate::meta::Metadata;

/// A page ready for timeline assembly: host-known title and URL plus the
/// metadata extracted from its source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Candidate {
    pub title: Option<String>,
    pub url: String,
    pub meta: Metadata,
}

impl Candidate {
    pub fn new(title: Option<String>, url: impl Into<String>, meta: Metadata) -> Self {
        Self {
            title,
            url: url.into(),
            meta,
        }
    }
}

/// One dated row of the "recent and upcoming" timeline.
///
/// Serialized for templates with dates in `YYYY-MM-DD` form and `kind`
/// exposed as `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    pub title: String,
    pub url: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
    pub threads: Vec<String>,
    pub due: Option<NaiveDate>,
    /// Days from today to `date`; negative in the past.
    pub delta: i64,
}
