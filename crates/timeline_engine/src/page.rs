//! Host-side page and navigation model.
//!
//! A site generator hands over whatever it knows about its pages. Every
//! accessor is optional so partially populated pages still work.

use std::path::{Path, PathBuf};

use timeline_core::Metadata;

use crate::metadata::resolve_source;

/// Narrow view of a host page. Each capability may be missing independently.
pub trait PageLike {
    fn title(&self) -> Option<&str> {
        None
    }

    fn url(&self) -> Option<&str> {
        None
    }

    /// Metadata the host already parsed, if any.
    fn meta(&self) -> Option<&Metadata> {
        None
    }

    /// Absolute or docs-relative path of the Markdown source.
    fn source_path(&self) -> Option<&Path> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub title: Option<String>,
    pub url: Option<String>,
    pub meta: Option<Metadata>,
    pub source_path: Option<PathBuf>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_meta(mut self, meta: Metadata) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }
}

impl PageLike for Page {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn meta(&self) -> Option<&Metadata> {
        self.meta.as_ref()
    }

    fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

/// A node of the site navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub enum NavItem<P = Page> {
    Page(P),
    Section {
        title: String,
        children: Vec<NavItem<P>>,
    },
    /// External or non-page entry; never part of the timeline.
    Link { title: String, url: String },
}

/// Site navigation as a host exposes it.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation<P = Page> {
    /// The host already flattened its navigation into a page list.
    Flat(Vec<P>),
    Tree(Vec<NavItem<P>>),
}

impl<P> Navigation<P> {
    /// Every page in navigation order, descending into sections.
    pub fn pages(&self) -> Vec<&P> {
        match self {
            Navigation::Flat(pages) => pages.iter().collect(),
            Navigation::Tree(items) => {
                let mut out = Vec::new();
                walk_nav(items, &mut out);
                out
            }
        }
    }
}

fn walk_nav<'a, P>(items: &'a [NavItem<P>], out: &mut Vec<&'a P>) {
    for item in items {
        match item {
            NavItem::Page(page) => out.push(page),
            NavItem::Section { children, .. } => walk_nav(children, out),
            NavItem::Link { .. } => {}
        }
    }
}

/// Build settings the timeline reads from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub docs_dir: Option<PathBuf>,
}

/// Everything a host may expose to the timeline at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContext<P = Page> {
    /// Pages explicitly handed to the plugin.
    pub pages: Option<Vec<P>>,
    /// The site-wide page collection.
    pub site_pages: Option<Vec<P>>,
    pub navigation: Option<Navigation<P>>,
    pub config: Option<BuildConfig>,
}

impl<P> Default for SiteContext<P> {
    fn default() -> Self {
        Self {
            pages: None,
            site_pages: None,
            navigation: None,
            config: None,
        }
    }
}

impl<P> SiteContext<P> {
    pub fn docs_dir(&self) -> Option<&Path> {
        self.config.as_ref().and_then(|c| c.docs_dir.as_deref())
    }

    /// Where a page's source actually lives; relative paths are taken as
    /// relative to the docs dir.
    pub fn resolve_source(&self, path: &Path) -> PathBuf {
        resolve_source(self.docs_dir(), path)
    }
}
