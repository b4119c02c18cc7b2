//! Stand-in host: builds a site context from a docs directory and renders
//! the timeline either through a template or as JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tera::{Context, Tera};
use timeline_core::{Limit, TimelineConfig};
use timeline_engine::{define_env, recent_and_upcoming, timeline_view, BuildConfig, SiteContext};
use timeline_logging::timeline_info;

use crate::error::AppError;
use crate::site_config::SiteConfig;

const TEMPLATE_NAME: &str = "timeline";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Items,
    View,
}

pub struct RenderRequest {
    pub site: SiteConfig,
    pub timeline: TimelineConfig,
    pub limit: Limit,
    pub template: Option<PathBuf>,
    pub output: Output,
}

fn site_context(site: &SiteConfig) -> Result<SiteContext, AppError> {
    if !site.docs_dir.is_dir() {
        return Err(AppError::MissingDocsDir(site.docs_dir.clone()));
    }
    Ok(SiteContext {
        config: Some(BuildConfig {
            docs_dir: Some(site.docs_dir.clone()),
        }),
        ..SiteContext::default()
    })
}

pub fn run(request: RenderRequest) -> Result<String, AppError> {
    let context = site_context(&request.site)?;
    timeline_info!("Scanning {:?}", request.site.docs_dir);

    match &request.template {
        Some(path) => render_template(path, context, &request),
        None => match request.output {
            Output::Items => {
                let items = recent_and_upcoming(&context, request.limit, &request.timeline);
                Ok(serde_json::to_string_pretty(&items)?)
            }
            Output::View => {
                let view = timeline_view(&context, &request.timeline);
                Ok(serde_json::to_string_pretty(&view)?)
            }
        },
    }
}

fn render_template(
    path: &Path,
    context: SiteContext,
    request: &RenderRequest,
) -> Result<String, AppError> {
    let source = fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tera = Tera::default();
    define_env(&mut tera, Arc::new(context), request.timeline.clone());
    tera.add_raw_template(TEMPLATE_NAME, &source)?;

    let mut vars = Context::new();
    if let Some(name) = &request.site.site_name {
        vars.insert("site_name", name);
    }
    Ok(tera.render(TEMPLATE_NAME, &vars)?)
}
