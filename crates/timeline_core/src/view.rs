//! Now / Past / Due-soon partition of a course timeline.
//!
//! Mirrors the behaviour of the interactive timeline table so a template can
//! render the same tabs without client-side scripting.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::format::format_due_short;
use crate::item::TimelineItem;

/// A timeline row plus view-only flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRow {
    #[serde(flatten)]
    pub item: TimelineItem,
    /// The row has a due date strictly after today.
    pub due_upcoming: bool,
}

/// Consecutive rows sharing a date, under a `Tue, 1/13` style heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub heading: String,
    pub rows: Vec<ViewRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineView {
    pub today: NaiveDate,
    /// Monday of the current week; the boundary between "now" and "past".
    pub week_start: NaiveDate,
    /// Today is after every dated row.
    pub course_over: bool,
    pub has_past: bool,
    pub now: Vec<DayGroup>,
    pub past: Vec<DayGroup>,
    /// Rows due after today, by due date; not grouped.
    pub due_soon: Vec<ViewRow>,
}

/// Most recent Monday, or `today` itself when it is a Monday.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let since_monday = i64::from(today.weekday().num_days_from_monday());
    today - Duration::days(since_monday)
}

pub fn build_view(items: &[TimelineItem], today: NaiveDate) -> TimelineView {
    let week_start = week_start(today);
    let course_over = items
        .iter()
        .map(|i| i.date)
        .max()
        .map_or(true, |last| today > last);

    let rows: Vec<ViewRow> = items
        .iter()
        .cloned()
        .map(|item| ViewRow {
            due_upcoming: item.due.is_some_and(|due| due > today),
            item,
        })
        .collect();

    let mut due_soon: Vec<ViewRow> = rows.iter().filter(|r| r.due_upcoming).cloned().collect();
    due_soon.sort_by(|a, b| {
        a.item
            .due
            .cmp(&b.item.due)
            .then_with(|| a.item.code.cmp(&b.item.code))
    });

    let (mut now, mut past): (Vec<ViewRow>, Vec<ViewRow>) = if course_over {
        (rows, Vec::new())
    } else {
        rows.into_iter().partition(|r| r.item.date >= week_start)
    };
    now.sort_by(|a, b| {
        a.item
            .date
            .cmp(&b.item.date)
            .then_with(|| a.item.code.cmp(&b.item.code))
    });
    past.sort_by(|a, b| b.item.date.cmp(&a.item.date));

    TimelineView {
        today,
        week_start,
        course_over,
        has_past: !past.is_empty(),
        now: group_by_day(now),
        past: group_by_day(past),
        due_soon,
    }
}

/// Group runs of rows with equal dates. Input order is kept; only adjacent
/// rows are merged.
pub fn group_by_day(rows: Vec<ViewRow>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for row in rows {
        match groups.last_mut() {
            Some(group) if group.date == row.item.date => group.rows.push(row),
            _ => groups.push(DayGroup {
                date: row.item.date,
                heading: format_due_short(row.item.date),
                rows: vec![row],
            }),
        }
    }
    groups
}
