use chrono::NaiveDate;
use timeline_logging::timeline_trace;

use crate::config::{SortOrder, TimelineConfig};
use crate::date::{coerce_date, days_between};
use crate::item::{Candidate, TimelineItem};
use crate::limit::Limit;
use crate::meta::{
    meta_text, normalize_threads, KEY_CODE, KEY_DATE, KEY_DUE, KEY_THREADS, KEY_TITLE, KEY_TYPE,
};

pub const DEFAULT_TYPE: &str = "General";
pub const DEFAULT_TITLE: &str = "Untitled";

/// Turn one candidate into a row, or `None` when it has no usable `date` or
/// falls outside the recency window.
pub fn build_item(
    candidate: Candidate,
    today: NaiveDate,
    config: &TimelineConfig,
) -> Option<TimelineItem> {
    let Candidate { title, url, meta } = candidate;

    let Some(date) = meta
        .get(KEY_DATE)
        .and_then(|v| coerce_date(v, &config.date_formats))
    else {
        timeline_trace!("Skipping {:?}: no parseable date", url);
        return None;
    };

    let delta = days_between(today, date);
    if delta < config.recent_days.saturating_neg() {
        timeline_trace!("Skipping {:?}: {} days old", url, -delta);
        return None;
    }

    let title = title
        .filter(|t| !t.trim().is_empty())
        .or_else(|| meta_text(&meta, KEY_TITLE))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    Some(TimelineItem {
        title,
        url,
        date,
        kind: meta_text(&meta, KEY_TYPE).unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        code: meta_text(&meta, KEY_CODE).unwrap_or_default(),
        threads: normalize_threads(meta.get(KEY_THREADS)),
        due: meta
            .get(KEY_DUE)
            .and_then(|v| coerce_date(v, &config.date_formats)),
        delta,
    })
}

/// Build rows for every candidate that qualifies, preserving input order.
pub fn collect_items<I>(candidates: I, config: &TimelineConfig) -> Vec<TimelineItem>
where
    I: IntoIterator<Item = Candidate>,
{
    let today = config.today();
    candidates
        .into_iter()
        .filter_map(|c| build_item(c, today, config))
        .collect()
}

/// Stable sort by date; rows sharing a date keep their relative order.
pub fn sort_items(items: &mut [TimelineItem], order: SortOrder) {
    match order {
        SortOrder::Ascending => items.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Descending => items.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// Sort and truncate already collected rows.
pub fn finish(
    mut items: Vec<TimelineItem>,
    limit: Limit,
    config: &TimelineConfig,
) -> Vec<TimelineItem> {
    sort_items(&mut items, config.order);
    limit.apply(&mut items);
    items
}

/// Full pipeline over pre-extracted candidates.
pub fn assemble<I>(candidates: I, limit: Limit, config: &TimelineConfig) -> Vec<TimelineItem>
where
    I: IntoIterator<Item = Candidate>,
{
    finish(collect_items(candidates, config), limit, config)
}
