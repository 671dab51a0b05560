use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Lines added and removed on one calendar day (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStat {
    pub date: NaiveDate,
    pub added: u64,
    pub removed: u64,
}

impl DayStat {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            added: 0,
            removed: 0,
        }
    }

    pub fn churn(&self) -> u64 {
        self.added + self.removed
    }
}

/// Sum of added and removed lines over a sequence of days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub added: u64,
    pub removed: u64,
}

impl Totals {
    pub fn of(days: &[DayStat]) -> Self {
        days.iter().fold(Self::default(), |acc, d| Self {
            added: acc.added + d.added,
            removed: acc.removed + d.removed,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub branch: Option<String>,
    pub days: u32,
    pub totals: Totals,
    pub entries: Vec<DayStat>,
}
