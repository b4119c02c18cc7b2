#![forbid(unsafe_code)]

mod error;
mod render;
mod site_config;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use timeline_core::{Limit, SortOrder, TimelineConfig, DEFAULT_RECENT_DAYS};
use timeline_logging::{timeline_error, LogDestination};

use crate::render::{Output, RenderRequest};
use crate::site_config::{load_site_config, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "docs-timeline")]
#[command(about = "Recent and upcoming items of a Markdown documentation site", long_about = None)]
struct Cli {
    /// Site config file; `docs_dir` is read from it
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Override the docs directory from the site config
    #[arg(long)]
    docs_dir: Option<PathBuf>,
    /// Maximum number of items; zero or negative means all
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,
    /// Sort direction by date: asc or desc
    #[arg(long, default_value = "asc")]
    order: SortOrder,
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
    /// How many days back an item still counts as recent
    #[arg(
        long,
        default_value_t = DEFAULT_RECENT_DAYS,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    recent_days: i64,
    /// Render this Tera template instead of printing JSON
    #[arg(long)]
    template: Option<PathBuf>,
    /// Print the now/past/due-soon view instead of the item list
    #[arg(long)]
    view: bool,
    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    log: LogTarget,
    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogTarget {
    Terminal,
    /// `docs-timeline.log` in the current directory
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    timeline_logging::initialize(cli.log.into(), level);

    let mut site = load_site_config(&cli.config)?;
    if let Some(docs_dir) = cli.docs_dir {
        site.docs_dir = docs_dir;
    }

    let timeline = TimelineConfig {
        recent_days: cli.recent_days,
        order: cli.order,
        today: cli.today,
        ..TimelineConfig::default()
    };

    let output = render::run(RenderRequest {
        site,
        timeline,
        limit: Limit::from(cli.limit),
        template: cli.template,
        output: if cli.view { Output::View } else { Output::Items },
    })
    .inspect_err(|err| timeline_error!("Timeline rendering failed: {}", err))?;
    println!("{output}");
    Ok(())
}
