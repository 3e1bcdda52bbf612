//! Settings for a metrics run, as given on the command line.

use std::fmt;
use std::str::FromStr;

/// Output format for a [`MetricsReport`](crate::report::MetricsReport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "text" | "txt" => Ok(ReportFormat::Text),
            other => Err(format!("Unknown format: {other}. Use 'json' or 'text'.")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Json => f.write_str("json"),
            ReportFormat::Text => f.write_str("text"),
        }
    }
}

/// Options controlling how an ontology is loaded and reported.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub format: ReportFormat,
    /// Include the expressivity explanation in the report.
    pub explain: bool,
    /// Base IRI for resolving relative IRIs in the input.
    pub base_iri: Option<String>,
}
