use std::sync::{Arc, Once};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_yaml::Value;
use tera::{Context, Tera};
use timeline_core::{Metadata, TimelineConfig};
use timeline_engine::{define_env, Page, SiteContext};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(timeline_logging::initialize_for_tests);
}

fn dated_page(url: &str, date: &str, threads: &str) -> Page {
    let mut meta = Metadata::new();
    meta.insert("date".into(), Value::from(date));
    meta.insert("code".into(), Value::from(url.trim_end_matches('/').to_uppercase()));
    meta.insert("threads".into(), Value::from(threads));
    Page::new().with_url(url).with_title(url.trim_end_matches('/')).with_meta(meta)
}

fn tera_with(pages: Vec<Page>, template: &str) -> Tera {
    let site = SiteContext {
        pages: Some(pages),
        ..SiteContext::default()
    };
    let config =
        TimelineConfig::default().with_today(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap());

    let mut tera = Tera::default();
    define_env(&mut tera, Arc::new(site), config);
    tera.add_raw_template("page", template).unwrap();
    tera
}

fn render(tera: &Tera) -> String {
    tera.render("page", &Context::new()).unwrap()
}

fn pages() -> Vec<Page> {
    vec![
        dated_page("rd02/", "2026-01-13", "Git"),
        dated_page("ex01/", "2026-01-09", "API Design, Testing"),
        dated_page("rd01/", "2026-01-12", ""),
    ]
}

#[test]
fn macro_returns_sorted_rows_with_default_limit() {
    init_logging();
    let tera = tera_with(
        pages(),
        "{% for item in get_recent_and_upcoming() %}{{ item.url }}={{ item.delta }};{% endfor %}",
    );
    assert_eq!(render(&tera), "ex01/=1;rd01/=4;rd02/=5;");
}

#[test]
fn macro_honours_limit_and_order_arguments() {
    init_logging();
    let tera = tera_with(
        pages(),
        r#"{% for item in get_recent_and_upcoming(limit=2, order="desc") %}{{ item.code }} {% endfor %}"#,
    );
    assert_eq!(render(&tera), "RD02 RD01 ");

    let tera = tera_with(
        pages(),
        r#"{{ get_recent_and_upcoming(limit="many") | length }}|{{ get_recent_and_upcoming(limit=0) | length }}"#,
    );
    assert_eq!(render(&tera), "3|3");
}

#[test]
fn filters_render_dates_and_pills() {
    init_logging();
    let tera = tera_with(
        pages(),
        concat!(
            "{% for item in get_recent_and_upcoming(limit=1) %}",
            "{{ item.date | format_date }} / {{ item.date | format_due }} / ",
            "{{ item.threads | format_threads }} / {{ item.threads | format_threads(style=\"plain\") }}",
            "{% endfor %}",
        ),
    );
    assert_eq!(
        render(&tera),
        concat!(
            "Friday, January 9th / Fri, 1/9 / ",
            r#"<span class="thread-pill thread-pill--api-design">API Design</span> "#,
            r#"<span class="thread-pill thread-pill--testing">Testing</span>"#,
            " / `API Design`, `Testing`",
        )
    );
}

#[test]
fn filters_tolerate_non_dates_and_empty_threads() {
    init_logging();
    let tera = tera_with(
        Vec::new(),
        r#"[{{ "soon" | format_date }}][{{ "" | format_threads }}][{{ get_recent_and_upcoming() | length }}]"#,
    );
    assert_eq!(render(&tera), "[soon][][0]");
}

#[test]
fn view_macro_exposes_tabs() {
    init_logging();
    let tera = tera_with(
        pages(),
        concat!(
            "{% set view = get_timeline_view() %}",
            "{{ view.week_start }} {{ view.course_over }} ",
            "{% for group in view.now %}[{{ group.heading }}:{% for row in group.rows %}{{ row.code }}{% endfor %}]{% endfor %}",
        ),
    );
    assert_eq!(
        render(&tera),
        "2026-01-05 false [Fri, 1/9:EX01][Mon, 1/12:RD01][Tue, 1/13:RD02]"
    );
}
