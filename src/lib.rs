//! Daily code churn charts.
//!
//! [`daily::aggregate`] folds `git log --numstat` output into a gap-free
//! series of [`model::DayStat`]s and [`chart::render_svg`] draws that series
//! as a dual bar chart, added lines above the baseline and removed lines below.

pub mod chart;
pub mod cli;
pub mod daily;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod output;
pub mod util;

pub use chart::render_svg;
pub use daily::{aggregate, collect_daily};
pub use error::{ChurnError, Result};
pub use model::DayStat;
