// src/domain/report.rs

use crate::domain::record::AttendanceRecord;
use crate::domain::rules::RuleTable;

/// A record plus the category the rule table assigned it. Immutable once
/// classified; a new upload builds a fresh batch from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord {
    pub record: AttendanceRecord,
    pub category: String,
}

/// Aggregate stats over the rows whose duration could be computed.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSummary {
    pub tracked: usize,
    pub untracked: usize,
    pub mean_minutes: Option<f64>,
    pub min_minutes: Option<f64>,
    pub max_minutes: Option<f64>,
}

/// All records that landed in one category, for the per-category tables.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub label: String,
    pub records: Vec<ClassifiedRecord>,
}

/// Everything the presentation layer needs: classified rows in input order,
/// per-category counts in rule-declaration order (zero counts included, so
/// rendering never special-cases an absent category), grouped rows, and the
/// duration summary.
#[derive(Debug, Clone)]
pub struct AttendanceReport {
    pub records: Vec<ClassifiedRecord>,
    pub counts: Vec<(String, usize)>,
    pub groups: Vec<CategoryGroup>,
    pub durations: DurationSummary,
}

impl AttendanceReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn count_for(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Classify every record against the table. Pure: the input is untouched and
/// re-running on the same input yields the same report.
pub fn classify_batch(records: &[AttendanceRecord], table: &RuleTable) -> AttendanceReport {
    let classified: Vec<ClassifiedRecord> = records
        .iter()
        .map(|record| ClassifiedRecord {
            category: table.classify(record).to_string(),
            record: record.clone(),
        })
        .collect();

    let mut groups: Vec<CategoryGroup> = table
        .labels()
        .into_iter()
        .map(|label| CategoryGroup {
            label: label.to_string(),
            records: Vec::new(),
        })
        .collect();

    for rec in &classified {
        // classify() only hands out labels(), so the lookup always succeeds.
        if let Some(group) = groups.iter_mut().find(|g| g.label == rec.category) {
            group.records.push(rec.clone());
        }
    }

    let counts = groups
        .iter()
        .map(|g| (g.label.clone(), g.records.len()))
        .collect();

    AttendanceReport {
        records: classified,
        counts,
        groups,
        durations: summarize_durations(records),
    }
}

fn summarize_durations(records: &[AttendanceRecord]) -> DurationSummary {
    let tracked: Vec<f64> = records.iter().filter_map(|r| r.duration_minutes).collect();
    let untracked = records.len() - tracked.len();

    if tracked.is_empty() {
        return DurationSummary {
            tracked: 0,
            untracked,
            mean_minutes: None,
            min_minutes: None,
            max_minutes: None,
        };
    }

    let sum: f64 = tracked.iter().sum();
    let min = tracked.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = tracked.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    DurationSummary {
        tracked: tracked.len(),
        untracked,
        mean_minutes: Some(sum / tracked.len() as f64),
        min_minutes: Some(min),
        max_minutes: Some(max),
    }
}
