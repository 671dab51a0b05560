use crate::daily::DATE_MARKER;
use crate::error::{ChurnError, Result};
use gix::discover;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Arguments for the numstat query over the last `days` days.
    pub fn log_args(days: u32, branch: Option<&str>) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            format!("--since={days}.days"),
            "--date=short".to_string(),
            format!("--pretty=format:{DATE_MARKER}%ad"),
            "--numstat".to_string(),
        ];
        if let Some(b) = branch.filter(|b| !b.is_empty()) {
            args.push(b.to_string());
        }
        args
    }

    /// Run `git log --numstat` and return its complete stdout.
    pub fn log_numstat(&self, days: u32, branch: Option<&str>) -> Result<String> {
        let args = Self::log_args(days, branch);
        info!(repo = %self.path.display(), ?args, "running git log");

        let started = Instant::now();
        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.path)
            .output()
            .map_err(|e| ChurnError::GitLog(e.to_string()))?;

        debug!(
            elapsed = %humantime::format_duration(round_millis(started.elapsed())),
            bytes = output.stdout.len(),
            "git log finished"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChurnError::GitLog(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Same as [`GitRepo::log_numstat`], with a spinner on stderr while git runs.
    pub fn log_numstat_with_progress(
        &self,
        days: u32,
        branch: Option<&str>,
        show_progress: bool,
    ) -> Result<String> {
        if !show_progress {
            return self.log_numstat(days, branch);
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Reading {days} days of history..."));
        pb.enable_steady_tick(Duration::from_millis(100));

        let result = self.log_numstat(days, branch);
        pb.finish_and_clear();
        result
    }
}

fn round_millis(d: Duration) -> Duration {
    Duration::from_millis(d.as_millis() as u64)
}
