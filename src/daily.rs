use crate::error::Result;
use crate::git::GitRepo;
use crate::model::DayStat;
use chrono::{Days, NaiveDate, Utc};
use std::collections::HashMap;
use tracing::debug;

/// Prefix `git log --pretty=format:@@@%ad` puts in front of each commit date.
pub const DATE_MARKER: &str = "@@@";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Run the log query against `repo` and aggregate it into a window of `days`
/// ending today (UTC).
pub fn collect_daily(
    repo: &GitRepo,
    days: u32,
    branch: Option<&str>,
    show_progress: bool,
) -> Result<Vec<DayStat>> {
    let log = repo.log_numstat_with_progress(days, branch, show_progress)?;
    let today = Utc::now().date_naive();
    Ok(aggregate(&log, days, today))
}

/// Fold numstat output into one `DayStat` per date from `today - (days - 1)`
/// through `today`. Dates without commits are zero-filled.
pub fn aggregate(log: &str, days: u32, today: NaiveDate) -> Vec<DayStat> {
    let totals = parse_numstat(log);
    fill_range(&totals, days, today)
}

/// Per-date `(added, removed)` totals. Lines that don't fit the grammar are skipped.
pub fn parse_numstat(log: &str) -> HashMap<NaiveDate, (u64, u64)> {
    let mut totals: HashMap<NaiveDate, (u64, u64)> = HashMap::new();
    let mut current: Option<NaiveDate> = None;
    let mut skipped = 0usize;

    for line in log.lines() {
        if let Some(rest) = line.strip_prefix(DATE_MARKER) {
            current = NaiveDate::parse_from_str(rest.trim(), DATE_FORMAT).ok();
            if current.is_none() {
                debug!(marker = line, "unrecognised date marker");
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let Some(date) = current else {
            skipped += 1;
            continue;
        };
        match parse_counts(line) {
            Some((added, removed)) => {
                let entry = totals.entry(date).or_insert((0, 0));
                entry.0 += added;
                entry.1 += removed;
            }
            None => skipped += 1,
        }
    }

    debug!(dates = totals.len(), skipped, "parsed numstat log");
    totals
}

/// `<added>\t<removed>\t<path>`; binary entries (`-`) and junk yield `None`.
fn parse_counts(line: &str) -> Option<(u64, u64)> {
    let mut fields = line.split('\t');
    let added = fields.next()?;
    let removed = fields.next()?;
    fields.next()?;

    if added == "-" || removed == "-" {
        return None;
    }
    Some((added.parse().ok()?, removed.parse().ok()?))
}

fn fill_range(totals: &HashMap<NaiveDate, (u64, u64)>, days: u32, today: NaiveDate) -> Vec<DayStat> {
    let Some(start) = days
        .checked_sub(1)
        .and_then(|back| today.checked_sub_days(Days::new(back as u64)))
    else {
        return Vec::new();
    };

    start
        .iter_days()
        .take(days as usize)
        .map(|date| match totals.get(&date) {
            Some(&(added, removed)) => DayStat { date, added, removed },
            None => DayStat::empty(date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn sums_lines_under_one_marker() {
        let log = "@@@2024-01-01\n3\t1\tpath1\n5\t0\tpath2\n";
        let days = aggregate(log, 1, date("2024-01-01"));
        assert_eq!(
            days,
            vec![DayStat {
                date: date("2024-01-01"),
                added: 8,
                removed: 1
            }]
        );
    }

    #[test]
    fn window_is_continuous_and_ends_today() {
        let today = date("2024-03-02");
        let days = aggregate("", 5, today);

        assert_eq!(days.len(), 5);
        assert_eq!(days[0].date, date("2024-02-27"));
        assert_eq!(days.last().map(|d| d.date), Some(today));
        for pair in days.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn missing_dates_are_zero_filled() {
        let log = "@@@2024-01-03\n4\t2\ta.rs\n";
        let days = aggregate(log, 3, date("2024-01-03"));

        assert_eq!(days[0], DayStat::empty(date("2024-01-01")));
        assert_eq!(days[1], DayStat::empty(date("2024-01-02")));
        assert_eq!((days[2].added, days[2].removed), (4, 2));
    }

    #[test]
    fn repeated_markers_for_same_date_accumulate() {
        let log = "@@@2024-01-02\n1\t1\ta\n\n@@@2024-01-01\n7\t0\tb\n@@@2024-01-02\n2\t3\tc\n";
        let days = aggregate(log, 2, date("2024-01-02"));

        assert_eq!((days[0].added, days[0].removed), (7, 0));
        assert_eq!((days[1].added, days[1].removed), (3, 4));
    }

    #[test]
    fn binary_entries_contribute_nothing() {
        let log = "@@@2024-01-01\n-\t-\timage.png\n2\t1\tsrc/lib.rs\n";
        let totals = parse_numstat(log);
        assert_eq!(totals.get(&date("2024-01-01")), Some(&(2, 1)));

        let only_binary = parse_numstat("@@@2024-01-01\n-\t-\tlogo.png\n");
        assert!(only_binary.is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped_without_stopping() {
        let log = "@@@2024-01-01\nabc\t1\tx\n4\t\n2\t2\tok.rs\nnot a numstat line\n1\t-3\tneg\n";
        let totals = parse_numstat(log);
        assert_eq!(totals.get(&date("2024-01-01")), Some(&(2, 2)));
    }

    #[test]
    fn lines_before_first_marker_are_ignored() {
        let log = "10\t10\torphan.rs\n@@@2024-01-01\n1\t0\ta.rs\n";
        let totals = parse_numstat(log);
        assert_eq!(totals.get(&date("2024-01-01")), Some(&(1, 0)));
        assert_eq!(totals.len(), 1);
    }

    #[test]
    fn marker_date_is_trimmed_and_bad_dates_clear_context() {
        let log = "@@@  2024-01-01 \r\n1\t1\ta\n@@@not-a-date\n9\t9\tb\n";
        let totals = parse_numstat(log);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get(&date("2024-01-01")), Some(&(1, 1)));
    }

    #[test]
    fn dates_outside_the_window_are_dropped() {
        let log = "@@@2023-12-01\n100\t100\told.rs\n@@@2024-01-10\n1\t0\tnew.rs\n";
        let days = aggregate(log, 3, date("2024-01-10"));
        assert_eq!(days.iter().map(|d| d.added).sum::<u64>(), 1);
    }

    #[test]
    fn zero_days_is_empty() {
        assert!(aggregate("@@@2024-01-01\n1\t1\ta\n", 0, date("2024-01-01")).is_empty());
    }
}
