use serde::Serialize;
use std::collections::BTreeMap;

/// Parsed battery fields for a single request.
///
/// Labels are whatever the utility emits (`state`, `percentage`,
/// `time to empty`, ...). There is no fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TelemetrySnapshot {
    fields: BTreeMap<String, String>,
}

impl TelemetrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, trimming both sides. A repeated label replaces the earlier value.
    pub fn insert(&mut self, label: &str, value: &str) {
        self.fields
            .insert(label.trim().to_string(), value.trim().to_string());
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON object of label to value.
    pub fn to_json(&self) -> Vec<u8> {
        // A map of strings always serializes.
        serde_json::to_vec(&self.fields).unwrap_or_else(|_| b"{}".to_vec())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for TelemetrySnapshot {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (label, value) in iter {
            snapshot.insert(label, value);
        }
        snapshot
    }
}

/// Parses `label: value` lines into a snapshot.
///
/// Each line is split on its first `:`. Blank lines and lines without a colon
/// are skipped.
///
/// # Example
///
/// ```
/// # use battery_beacon::telemetry::parse_snapshot;
/// let snapshot = parse_snapshot("  state:  charging\nnoise\npercentage: 80%\n");
/// assert_eq!(snapshot.get("state"), Some("charging"));
/// assert_eq!(snapshot.get("percentage"), Some("80%"));
/// assert_eq!(snapshot.len(), 2);
/// ```
pub fn parse_snapshot(text: &str) -> TelemetrySnapshot {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_keeps_later_colons() {
        let snapshot = parse_snapshot("updated: Sat 18 Oct 2026 09:12:44\n");
        assert_eq!(snapshot.get("updated"), Some("Sat 18 Oct 2026 09:12:44"));
    }

    #[test]
    fn empty_input_gives_empty_snapshot() {
        assert!(parse_snapshot("").is_empty());
        assert!(parse_snapshot("\n\n   \n").is_empty());
    }

    #[test]
    fn json_is_flat_object() {
        let snapshot = parse_snapshot("state: full\n");
        assert_eq!(snapshot.to_json(), br#"{"state":"full"}"#.to_vec());
    }
}
