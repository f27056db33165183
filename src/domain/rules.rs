// src/domain/rules.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::record::AttendanceRecord;

/// Duration window with per-edge inclusivity. All bounds optional; a band
/// with no bounds matches any non-null duration.
#[derive(Debug, Clone, Deserialize)]
pub struct DurationBand {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default = "default_true")]
    pub min_inclusive: bool,
    #[serde(default = "default_true")]
    pub max_inclusive: bool,
}

fn default_true() -> bool {
    true
}

impl DurationBand {
    fn contains(&self, minutes: f64) -> bool {
        if let Some(min) = self.min {
            let above = if self.min_inclusive {
                minutes >= min
            } else {
                minutes > min
            };
            if !above {
                return false;
            }
        }
        if let Some(max) = self.max {
            let below = if self.max_inclusive {
                minutes <= max
            } else {
                minutes < max
            };
            if !below {
                return false;
            }
        }
        true
    }
}

/// One classification rule. Deployments disagree on cutoffs and on which
/// disclaimer answers count, so both are data here, not code.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub label: String,
    /// Accepted disclaimer-response values (trimmed, case-insensitive).
    /// None skips the response check entirely.
    #[serde(default)]
    pub responded: Option<Vec<String>>,
    /// Duration window. A rule with a band never matches a null duration.
    #[serde(default)]
    pub duration: Option<DurationBand>,
}

impl Rule {
    pub fn matches(&self, responded: Option<&str>, duration_minutes: Option<f64>) -> bool {
        if let Some(accepted) = &self.responded {
            let Some(actual) = responded else {
                return false;
            };
            let actual = actual.trim();
            if !accepted.iter().any(|v| v.eq_ignore_ascii_case(actual)) {
                return false;
            }
        }

        if let Some(band) = &self.duration {
            // A numeric comparison against a null duration never matches.
            let Some(minutes) = duration_minutes else {
                return false;
            };
            if !band.contains(minutes) {
                return false;
            }
        }

        true
    }
}

/// Ordered rule list evaluated top to bottom; first match wins and
/// `default_label` catches everything else. The order of rules determines
/// the precedence between overlapping windows.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<Rule>,
    pub default_label: String,
}

impl RuleTable {
    /// The label for one record. Always returns something: either the first
    /// matching rule's label or the default.
    pub fn classify(&self, record: &AttendanceRecord) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.matches(record.responded.as_deref(), record.duration_minutes))
            .map(|rule| rule.label.as_str())
            .unwrap_or(&self.default_label)
    }

    /// Every label a record can receive, in declaration order. The default
    /// label is appended unless some rule already uses it.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !labels.contains(&rule.label.as_str()) {
                labels.push(&rule.label);
            }
        }
        if !labels.contains(&self.default_label.as_str()) {
            labels.push(&self.default_label);
        }
        labels
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|e| format!("read {}: {e}", path.display()))?;
        serde_json::from_str(&text).map_err(|e| format!("parse {}: {e}", path.display()))
    }
}

impl Default for RuleTable {
    /// The threshold scheme most sessions were scored with. Deployments with
    /// different cutoffs override this via config/rules.json.
    fn default() -> Self {
        let accepted = || Some(vec!["OK".to_string(), "Yes".to_string()]);

        RuleTable {
            rules: vec![
                Rule {
                    label: "Qualified".to_string(),
                    responded: accepted(),
                    duration: Some(DurationBand {
                        min: Some(110.0),
                        max: None,
                        min_inclusive: false,
                        max_inclusive: true,
                    }),
                },
                Rule {
                    label: "Potentially Present".to_string(),
                    responded: accepted(),
                    duration: Some(DurationBand {
                        min: Some(80.0),
                        max: Some(110.0),
                        min_inclusive: true,
                        max_inclusive: true,
                    }),
                },
                Rule {
                    label: "No Response".to_string(),
                    responded: None,
                    duration: Some(DurationBand {
                        min: Some(80.0),
                        max: None,
                        min_inclusive: false,
                        max_inclusive: true,
                    }),
                },
            ],
            default_label: "Absent".to_string(),
        }
    }
}
