use chrono::{Datelike, NaiveDate};

/// Slug used when a tag has no characters left after slugification.
pub const DEFAULT_SLUG: &str = "thread";

/// How thread tags are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadStyle {
    /// `<span class="thread-pill thread-pill--{slug}">Tag</span>`, space separated.
    #[default]
    Pill,
    /// `` `Tag` ``, comma separated.
    Plain,
}

impl ThreadStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pill" | "pills" => Some(ThreadStyle::Pill),
            "plain" | "code" => Some(ThreadStyle::Plain),
            _ => None,
        }
    }
}

pub fn format_threads<S: AsRef<str>>(threads: Option<&[S]>, style: ThreadStyle) -> String {
    let Some(threads) = threads else {
        return String::new();
    };
    let tags = threads
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty());

    match style {
        ThreadStyle::Pill => tags
            .map(|tag| {
                format!(
                    "<span class=\"thread-pill thread-pill--{slug}\">{label}</span>",
                    slug = slugify_thread(tag),
                    label = html_escape(tag),
                )
            })
            .collect::<Vec<_>>()
            .join(" "),
        ThreadStyle::Plain => tags
            .map(|tag| format!("`{tag}`"))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// CSS-safe slug: lowercase ASCII letters, digits and single hyphens.
pub fn slugify_thread(tag: &str) -> String {
    let mut slug = String::with_capacity(tag.len());
    let mut prev_hyphen = false;
    for c in tag.to_lowercase().chars() {
        let c = if c == '_' || c.is_whitespace() { '-' } else { c };
        if c == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            prev_hyphen = false;
        }
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// HTML-escape a string for safe insertion into element content or attributes.
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// `Friday, January 9th`
pub fn format_date_long(date: NaiveDate) -> String {
    let day = date.day();
    format!("{}{}{}", date.format("%A, %B "), day, ordinal_suffix(day))
}

/// `Tue, 1/13`
pub fn format_due_short(date: NaiveDate) -> String {
    format!("{}, {}/{}", date.format("%a"), date.month(), date.day())
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slugify_thread("API Design"), "api-design");
        assert_eq!(slugify_thread("unit_testing  basics"), "unit-testing-basics");
        assert_eq!(slugify_thread("  C++ & Rust!  "), "c-rust");
        assert_eq!(slugify_thread("--Git--"), "git");
    }

    #[test]
    fn empty_slug_uses_placeholder() {
        assert_eq!(slugify_thread("???"), DEFAULT_SLUG);
        assert_eq!(slugify_thread("日本"), DEFAULT_SLUG);
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }
}
