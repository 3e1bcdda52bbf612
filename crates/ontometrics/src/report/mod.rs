pub mod json;
pub mod text;

use crate::metrics::OntologyMetrics;

/// Metrics for one ontology, ready to be written out.
#[derive(Debug, Clone)]
pub struct MetricsReport {
    /// Where the ontology came from, usually a file path.
    pub source: String,
    pub metrics: OntologyMetrics,
    /// Expressivity explanation, when requested.
    pub explanation: Option<String>,
}

impl MetricsReport {
    pub fn new(source: impl Into<String>, metrics: OntologyMetrics) -> Self {
        Self {
            source: source.into(),
            metrics,
            explanation: None,
        }
    }

    /// Attach the explanation of the metrics' own expressivity code.
    pub fn with_explanation(mut self) -> Self {
        self.explanation = Some(self.metrics.explain_expressivity());
        self
    }
}

/// Trait for writing metrics reports in different output formats.
pub trait ReportEmitter {
    /// Write one report.
    fn emit(&mut self, report: &MetricsReport) -> std::io::Result<()>;
    /// Flush any buffered output.
    fn flush(&mut self) -> std::io::Result<()>;
}
