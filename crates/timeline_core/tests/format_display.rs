use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use timeline_core::{format_date_long, format_due_short, format_threads, ThreadStyle};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_or_missing_threads_render_nothing() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(format_threads(Some(&empty[..]), ThreadStyle::Pill), "");
    assert_eq!(format_threads::<String>(None, ThreadStyle::Pill), "");
    assert_eq!(format_threads(Some(&["  ", ""][..]), ThreadStyle::Plain), "");
}

#[test]
fn single_thread_renders_one_pill() {
    assert_eq!(
        format_threads(Some(&["API Design"][..]), ThreadStyle::Pill),
        r#"<span class="thread-pill thread-pill--api-design">API Design</span>"#
    );
}

#[test]
fn pill_labels_are_escaped() {
    let html = format_threads(Some(&["<b>Q&A</b>", "Git"][..]), ThreadStyle::Pill);
    assert_eq!(
        html,
        concat!(
            r#"<span class="thread-pill thread-pill--bqab">&lt;b&gt;Q&amp;A&lt;/b&gt;</span>"#,
            " ",
            r#"<span class="thread-pill thread-pill--git">Git</span>"#,
        )
    );
}

#[test]
fn plain_style_uses_backticks() {
    assert_eq!(
        format_threads(Some(&[" Git ", "Testing"][..]), ThreadStyle::Plain),
        "`Git`, `Testing`"
    );
}

#[test]
fn long_date_has_weekday_month_and_ordinal() {
    assert_eq!(format_date_long(ymd(2026, 1, 9)), "Friday, January 9th");
    assert_eq!(format_date_long(ymd(2026, 1, 1)), "Thursday, January 1st");
    assert_eq!(format_date_long(ymd(2026, 1, 22)), "Thursday, January 22nd");
    assert_eq!(format_date_long(ymd(2026, 1, 13)), "Tuesday, January 13th");
}

#[test]
fn short_due_has_no_leading_zeros() {
    assert_eq!(format_due_short(ymd(2026, 1, 13)), "Tue, 1/13");
    assert_eq!(format_due_short(ymd(2026, 11, 5)), "Thu, 11/5");
}
