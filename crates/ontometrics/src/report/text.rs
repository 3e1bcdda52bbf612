use std::io::Write;

use super::{MetricsReport, ReportEmitter};
use crate::metrics::{DL_CONSTRUCTS, DL_EXPRESSIVITY};

/// Human-readable `name: value` listing with aligned values.
pub struct TextEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TextEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportEmitter for TextEmitter<W> {
    fn emit(&mut self, report: &MetricsReport) -> std::io::Result<()> {
        let counters = report.metrics.counts().entries();
        let constructs = report.metrics.constructs().entries();
        let width = counters
            .iter()
            .map(|(name, _)| name.len())
            .chain(std::iter::once(DL_EXPRESSIVITY.len()))
            .max()
            .unwrap_or(0);

        writeln!(self.writer, "# {}", report.source)?;
        for (name, value) in &counters {
            writeln!(self.writer, "{:<width$}  {value}", format!("{name}:"), width = width + 1)?;
        }
        writeln!(
            self.writer,
            "{:<width$}  {}",
            format!("{DL_EXPRESSIVITY}:"),
            report.metrics.expressivity(),
            width = width + 1
        )?;

        writeln!(self.writer, "{DL_CONSTRUCTS}:")?;
        let flag_width = constructs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        for (key, flag) in &constructs {
            writeln!(self.writer, "  {:<flag_width$}  {flag}", format!("{key}:"), flag_width = flag_width + 1)?;
        }

        if let Some(explanation) = &report.explanation {
            writeln!(self.writer, "Explanation:")?;
            for line in explanation.lines() {
                writeln!(self.writer, "  {line}")?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
