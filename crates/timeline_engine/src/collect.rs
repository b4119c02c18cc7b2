use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use chrono::NaiveDate;
use timeline_core::{
    build_item, build_view, finish, Candidate, Limit, TimelineConfig, TimelineItem, TimelineView,
};
use timeline_logging::{timeline_debug, timeline_trace};
use walkdir::WalkDir;

use crate::metadata::{extract_from_path, extract_metadata_in};
use crate::page::{PageLike, SiteContext};

/// Identity used to drop pages reachable through more than one host source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PageKey {
    Path(PathBuf),
    Url(String),
    Identity(usize),
}

fn page_key<P: PageLike>(site: &SiteContext<P>, page: &P) -> PageKey {
    if let Some(path) = page.source_path() {
        return PageKey::Path(site.resolve_source(path));
    }
    if let Some(url) = page.url().filter(|u| !u.is_empty()) {
        return PageKey::Url(url.to_string());
    }
    PageKey::Identity(page as *const P as usize)
}

/// Pages from explicit pages, site pages and navigation, in that order.
/// The first occurrence of a page wins.
pub fn gather_pages<P: PageLike>(site: &SiteContext<P>) -> Vec<&P> {
    let explicit = site.pages.iter().flatten();
    let site_wide = site.site_pages.iter().flatten();
    let nav = site
        .navigation
        .as_ref()
        .map(|n| n.pages())
        .unwrap_or_default();

    let mut seen = HashSet::new();
    explicit
        .chain(site_wide)
        .chain(nav)
        .filter(|page| seen.insert(page_key(site, *page)))
        .collect()
}

/// All `.md` files below `docs_dir`, in a stable order. Unreadable entries
/// are skipped.
pub fn scan_markdown_files(docs_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(docs_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                timeline_debug!("Skipping unreadable docs entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("md"))
        .collect()
}

/// Rendered URL of a docs file when the site uses directory URLs:
/// `index.md` is `""`, `a/index.md` is `a/`, `a/b.md` is `a/b/`.
pub fn url_for_source(docs_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(docs_dir).unwrap_or(path);
    let mut parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let Some(file) = parts.pop() else {
        return String::new();
    };
    let stem = file.strip_suffix(".md").unwrap_or(&file);
    if !matches!(stem, "index" | "README") {
        parts.push(stem.to_string());
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!("{}/", parts.join("/"))
    }
}

fn candidate_for<P: PageLike>(site: &SiteContext<P>, page: &P) -> Candidate {
    Candidate::new(
        page.title().map(str::to_string),
        page.url().unwrap_or_default(),
        extract_metadata_in(page, site.docs_dir()),
    )
}

/// Rows for docs files the host never handed over.
fn docs_dir_items(
    docs_dir: &Path,
    seen_paths: &HashSet<PathBuf>,
    existing: &[TimelineItem],
    today: NaiveDate,
    config: &TimelineConfig,
) -> Vec<TimelineItem> {
    let mut urls: HashSet<String> = existing.iter().map(|i| i.url.clone()).collect();
    let mut extra = Vec::new();
    for path in scan_markdown_files(docs_dir) {
        if seen_paths.contains(&path) {
            continue;
        }
        let url = url_for_source(docs_dir, &path);
        if urls.contains(&url) {
            timeline_trace!("Skipping {:?}: url {:?} already listed", path, url);
            continue;
        }
        let candidate = Candidate::new(None, url.clone(), extract_from_path(&path));
        if let Some(item) = build_item(candidate, today, config) {
            urls.insert(url);
            extra.push(item);
        }
    }
    extra
}

fn collect_site_items<P: PageLike>(
    site: &SiteContext<P>,
    config: &TimelineConfig,
) -> Vec<TimelineItem> {
    let today = config.today();
    let pages = gather_pages(site);

    let mut items: Vec<TimelineItem> = pages
        .iter()
        .filter_map(|page| build_item(candidate_for(site, *page), today, config))
        .collect();

    if config.scan_docs_dir {
        if let Some(docs_dir) = site.docs_dir() {
            let seen_paths: HashSet<PathBuf> = pages
                .iter()
                .filter_map(|p| p.source_path())
                .map(|path| site.resolve_source(path))
                .collect();
            let extra = docs_dir_items(docs_dir, &seen_paths, &items, today, config);
            items.extend(extra);
        }
    }

    timeline_debug!(
        "Collected {} dated timeline items from {} host pages",
        items.len(),
        pages.len()
    );
    items
}

/// Dated pages within the recency window, sorted and truncated.
pub fn recent_and_upcoming<P: PageLike>(
    site: &SiteContext<P>,
    limit: Limit,
    config: &TimelineConfig,
) -> Vec<TimelineItem> {
    finish(collect_site_items(site, config), limit, config)
}

/// Now / Past / Due-soon view over every dated page, regardless of age.
pub fn timeline_view<P: PageLike>(site: &SiteContext<P>, config: &TimelineConfig) -> TimelineView {
    let today = config.today();
    let unbounded = TimelineConfig {
        recent_days: i64::MAX,
        today: Some(today),
        ..config.clone()
    };
    let items = finish(collect_site_items(site, &unbounded), Limit::UNLIMITED, &unbounded);
    build_view(&items, today)
}
