//! Template registration: timeline macros and display filters for Tera.
//!
//! Call [`define_env`] once per build. Templates then use
//!
//! ```text
//! {% for item in get_recent_and_upcoming(limit=5) %}
//!   {{ item.date | format_date }} {{ item.threads | format_threads }}
//! {% endfor %}
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tera::{Filter, Tera, Value};
use timeline_core::{
    format_date_long, format_due_short, format_threads, parse_date_str, Limit, SortOrder,
    ThreadStyle, TimelineConfig,
};
use timeline_logging::timeline_debug;

use crate::collect::{recent_and_upcoming, timeline_view};
use crate::page::{PageLike, SiteContext};

pub const RECENT_AND_UPCOMING: &str = "get_recent_and_upcoming";
pub const TIMELINE_VIEW: &str = "get_timeline_view";
pub const FORMAT_THREADS: &str = "format_threads";
pub const FORMAT_DATE: &str = "format_date";
pub const FORMAT_DUE: &str = "format_due";

/// Rows returned when a template does not pass `limit`.
pub const DEFAULT_LIMIT: i64 = 5;

/// Register the timeline macros and filters on `tera`.
pub fn define_env<P>(tera: &mut Tera, site: Arc<SiteContext<P>>, config: TimelineConfig)
where
    P: PageLike + Send + Sync + 'static,
{
    let recent_site = Arc::clone(&site);
    let recent_config = config.clone();
    tera.register_function(
        RECENT_AND_UPCOMING,
        move |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let limit = args
                .get("limit")
                .map(Limit::from_json)
                .unwrap_or_else(|| Limit::new(DEFAULT_LIMIT));
            let order = sort_order_arg(args, recent_config.order);
            let config = recent_config.clone().with_order(order);
            to_template_value(&recent_and_upcoming(&*recent_site, limit, &config))
        },
    );

    let view_site = Arc::clone(&site);
    let view_config = config.clone();
    tera.register_function(
        TIMELINE_VIEW,
        move |_args: &HashMap<String, Value>| -> tera::Result<Value> {
            to_template_value(&timeline_view(&*view_site, &view_config))
        },
    );

    tera.register_filter(FORMAT_THREADS, ThreadsFilter);
    tera.register_filter(
        FORMAT_DATE,
        DateFilter {
            formats: config.date_formats.clone(),
            render: format_date_long,
        },
    );
    tera.register_filter(
        FORMAT_DUE,
        DateFilter {
            formats: config.date_formats,
            render: format_due_short,
        },
    );
}

fn sort_order_arg(args: &HashMap<String, Value>, fallback: SortOrder) -> SortOrder {
    match args.get("order").and_then(Value::as_str) {
        Some(name) => name.parse().unwrap_or_else(|err| {
            timeline_debug!("{}; keeping {}", err, fallback);
            fallback
        }),
        None => fallback,
    }
}

fn to_template_value<T: Serialize>(value: &T) -> tera::Result<Value> {
    tera::to_value(value)
        .map_err(|err| tera::Error::msg(format!("timeline serialization failed: {err}")))
}

/// `{{ threads | format_threads(style="plain") }}`. Output is markup and
/// marked safe; labels are escaped by the formatter.
struct ThreadsFilter;

impl Filter for ThreadsFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let style = args
            .get("style")
            .and_then(Value::as_str)
            .and_then(ThreadStyle::from_name)
            .unwrap_or_default();
        let threads = thread_labels(value);
        Ok(Value::String(format_threads(Some(&threads[..]), style)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

fn thread_labels(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) => s.split(',').map(str::to_string).collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect(),
        other => vec![other.to_string()],
    }
}

/// Renders a `YYYY-MM-DD` (or other accepted) date string; anything that is
/// not a date passes through untouched.
struct DateFilter {
    formats: Vec<String>,
    render: fn(NaiveDate) -> String,
}

impl Filter for DateFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        match value.as_str().and_then(|s| parse_date_str(s, &self.formats)) {
            Some(date) => Ok(Value::String((self.render)(date))),
            None => Ok(value.clone()),
        }
    }
}
