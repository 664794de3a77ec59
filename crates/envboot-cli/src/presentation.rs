//! Rendering of the final environment and run summaries.

use envboot_core::{BootstrapReport, StepOutcome, VariableRecord, VariableSet};

use crate::commands::OutputFormat;

/// Render store entries in the requested format.
pub fn render_entries(entries: &[(String, String)], format: OutputFormat) -> String {
    match format {
        OutputFormat::Env => entries
            .iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect(),
        OutputFormat::Json => {
            let records: Vec<VariableRecord> = entries
                .iter()
                .map(|(key, value)| VariableRecord::new(key.as_str(), value.as_str()))
                .collect();
            // Serializing plain strings cannot fail
            let mut json = serde_json::to_string_pretty(&records).unwrap_or_default();
            json.push('\n');
            json
        }
    }
}

/// One line per step, e.g. `global: applied 3 variables`.
pub fn summarize(report: &BootstrapReport) -> Vec<String> {
    [
        (VariableSet::Global, &report.global),
        (VariableSet::Shared, &report.shared),
    ]
    .into_iter()
    .map(|(set, outcome)| match outcome {
        StepOutcome::Applied { count } => format!("{set}: applied {count} variables"),
        StepOutcome::Failed(failure) => format!("{set}: not applied ({failure})"),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use envboot_core::{SourcePortError, StepFailure};

    fn entries() -> Vec<(String, String)> {
        vec![
            ("host".to_string(), "api.local".to_string()),
            ("port".to_string(), "8443".to_string()),
        ]
    }

    #[test]
    fn test_render_env() {
        assert_eq!(
            render_entries(&entries(), OutputFormat::Env),
            "host=api.local\nport=8443\n"
        );
    }

    #[test]
    fn test_render_json_round_trips_as_document() {
        let json = render_entries(&entries(), OutputFormat::Json);
        let records = envboot_core::parse_document(&json).unwrap();
        assert_eq!(records[0], VariableRecord::new("host", "api.local"));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_summarize() {
        let report = BootstrapReport {
            global: StepOutcome::Applied { count: 3 },
            shared: StepOutcome::Failed(StepFailure::Source(SourcePortError::RateLimited {
                url: "u".to_string(),
            })),
        };
        let lines = summarize(&report);
        assert_eq!(lines[0], "global: applied 3 variables");
        assert!(lines[1].starts_with("shared: not applied (Rate limit exceeded"));
    }
}
