use std::io::Write;

use serde::Serialize;

use super::{MetricsReport, ReportEmitter};
use crate::metrics::OntologyMetrics;

#[derive(Serialize)]
struct JsonReport<'a> {
    ontology_metrics: &'a OntologyMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    expressivity_explanation: Option<&'a str>,
}

/// Pretty-printed JSON under a top-level `"ontology_metrics"` key.
pub struct JsonEmitter<W: Write> {
    writer: W,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportEmitter for JsonEmitter<W> {
    fn emit(&mut self, report: &MetricsReport) -> std::io::Result<()> {
        let body = JsonReport {
            ontology_metrics: &report.metrics,
            expressivity_explanation: report.explanation.as_deref(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &body)?;
        writeln!(self.writer)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
