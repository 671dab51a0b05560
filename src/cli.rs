use crate::chart::render_svg;
use crate::daily::collect_daily;
use crate::git::GitRepo;
use crate::output::{output_json, output_ndjson, output_summary, write_svg};
use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "daily-churn")]
#[command(about = "Chart lines added and removed per day as an SVG")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        env = "INPUT_DAYS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "How many days to include"
    )]
    pub days: u32,

    #[arg(long, env = "INPUT_BRANCH", help = "Branch/ref to analyze")]
    pub branch: Option<String>,

    #[arg(long, env = "INPUT_OUT", default_value = "daily-churn.svg", help = "Output SVG path")]
    pub out: PathBuf,

    #[arg(
        long,
        env = "INPUT_WIDTH",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "SVG width in pixels"
    )]
    pub width: u32,

    #[arg(
        long,
        env = "INPUT_HEIGHT",
        default_value_t = 320,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "SVG height in pixels"
    )]
    pub height: u32,

    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Print the daily series as JSON instead of writing the chart")]
    pub json: bool,

    #[arg(long, conflicts_with = "json", help = "Print one JSON object per day")]
    pub ndjson: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init_tracing(self.verbose);

        let repo = GitRepo::open(self.repo.as_ref()).context("Failed to open git repository")?;
        let branch = self.branch.as_deref().filter(|b| !b.is_empty());

        let machine_output = self.json || self.ndjson;
        let show_progress = !machine_output && Term::stderr().is_term();

        let days = collect_daily(&repo, self.days, branch, show_progress)
            .context("Failed to collect daily churn")?;
        info!(days = days.len(), "aggregated history");

        if self.json {
            return output_json(&days, &repo, branch);
        }
        if self.ndjson {
            return output_ndjson(&days);
        }

        let svg = render_svg(&days, self.width, self.height);
        write_svg(&self.out, &svg)?;
        output_summary(&days, &self.out)
    }
}
