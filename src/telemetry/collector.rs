use std::process::{Command, Stdio};

use crate::config::CollectorConfig;
use crate::error::CollectorError;
use crate::telemetry::snapshot::{parse_snapshot, TelemetrySnapshot};

/// Anything that can produce a battery snapshot on demand.
///
/// Calls are synchronous and block the caller until the snapshot is ready.
pub trait TelemetrySource {
    fn collect(&self) -> Result<TelemetrySnapshot, CollectorError>;
}

/// Runs the power utility as a subprocess and parses its standard output.
#[derive(Debug, Clone)]
pub struct CommandCollector {
    program: String,
    args: Vec<String>,
    /// Only lines containing one of these are parsed. Empty keeps every line.
    fields: Vec<String>,
}

impl CommandCollector {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn from_config(config: &CollectorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            fields: config.fields.clone(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    fn keep_line(&self, line: &str) -> bool {
        self.fields.is_empty() || self.fields.iter().any(|f| line.contains(f.as_str()))
    }
}

impl TelemetrySource for CommandCollector {
    fn collect(&self) -> Result<TelemetrySnapshot, CollectorError> {
        // output() drains stdout and waits on the child, so it is reaped on every path below.
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| CollectorError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CollectorError::Exit {
                program: self.program.clone(),
                status: output.status,
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| CollectorError::Decode {
            program: self.program.clone(),
        })?;

        let filtered: String = text
            .lines()
            .filter(|line| self.keep_line(line))
            .flat_map(|line| [line, "\n"])
            .collect();
        let snapshot = parse_snapshot(&filtered);

        tracing::debug!(
            program = %self.program,
            fields = snapshot.len(),
            "Collected battery telemetry"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_keeps_everything() {
        let collector = CommandCollector::new("upower");
        assert!(collector.keep_line("vendor: ACME"));
    }

    #[test]
    fn filter_matches_substrings() {
        let collector = CommandCollector::new("upower").fields(["state", "percentage"]);
        assert!(collector.keep_line("    state:               charging"));
        assert!(collector.keep_line("    percentage:          71%"));
        assert!(!collector.keep_line("    vendor:              ACME"));
    }
}
