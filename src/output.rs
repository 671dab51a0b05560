use crate::git::GitRepo;
use crate::model::{ChurnOutput, DayStat, Totals, SCHEMA_VERSION};
use crate::util::human;
use anyhow::{Context, Result};
use chrono::Utc;
use console::style;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn output_json(days: &[DayStat], repo: &GitRepo, branch: Option<&str>) -> Result<()> {
    let output = ChurnOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        branch: branch.map(str::to_string),
        days: days.len() as u32,
        totals: Totals::of(days),
        entries: days.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(days: &[DayStat]) -> Result<()> {
    for day in days {
        println!("{}", serde_json::to_string(day)?);
    }
    Ok(())
}

/// Write `svg` to `path`, creating missing parent directories.
pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }
    fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = svg.len(), "wrote chart");
    Ok(())
}

pub fn output_summary(days: &[DayStat], path: &Path) -> Result<()> {
    let totals = Totals::of(days);
    let busiest = days.iter().filter(|d| d.churn() > 0).max_by_key(|d| d.churn());
    let active = days.iter().filter(|d| d.churn() > 0).count();

    println!("Wrote {}", style(path.display()).bold());
    println!(
        "{} days, {} active: {} {}",
        days.len(),
        active,
        style(format!("+{}", human(totals.added))).green(),
        style(format!("-{}", human(totals.removed))).red()
    );
    if let Some(day) = busiest {
        println!(
            "Busiest day: {} ({} lines)",
            style(day.date.format("%Y-%m-%d")).dim(),
            style(human(day.churn())).cyan()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_svg_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/chart.svg");
        write_svg(&path, "<svg></svg>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg></svg>");
    }

    #[test]
    fn write_svg_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        write_svg(&path, "old").unwrap();
        write_svg(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
