use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use ontometrics::loader::load_path;
use ontometrics::logging::{init_tracing, Verbosity};
use ontometrics::metrics::{compute_metrics, explain};
use ontometrics::options::{ReportFormat, ReportOptions};
use ontometrics::report::json::JsonEmitter;
use ontometrics::report::text::TextEmitter;
use ontometrics::report::{MetricsReport, ReportEmitter};

/// Compute structural metrics and DL expressivity for an ontology.
#[derive(Parser)]
#[command(name = "ontometrics", version, about)]
struct Cli {
    /// Ontology file in Turtle (.ttl) or N-Triples (.nt) syntax.
    #[arg(required_unless_present = "explain_code")]
    input: Option<PathBuf>,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: json, text.
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Include an explanation of the expressivity code.
    #[arg(long)]
    explain: bool,

    /// Only explain the given expressivity code (e.g. "SRT") and exit.
    #[arg(long, value_name = "CODE", conflicts_with = "input")]
    explain_code: Option<String>,

    /// Base IRI for resolving relative IRIs in the input.
    #[arg(short, long, value_name = "IRI")]
    base_iri: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn report_options(&self) -> Result<ReportOptions, String> {
        Ok(ReportOptions {
            format: self.format.parse::<ReportFormat>()?,
            explain: self.explain,
            base_iri: self.base_iri.clone(),
        })
    }
}

fn open_output(path: Option<&PathBuf>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = cli.report_options()?;

    if let Some(code) = &cli.explain_code {
        let text = explain(code)?;
        let mut writer = open_output(cli.output.as_ref())?;
        writeln!(writer, "{text}")?;
        writer.flush()?;
        return Ok(());
    }

    let input = cli.input.as_ref().ok_or("no input file given")?;
    info!(input = %input.display(), "loading ontology");
    let graph = load_path(input, options.base_iri.as_deref())?;
    let metrics = compute_metrics(&graph);

    let mut report = MetricsReport::new(input.display().to_string(), metrics);
    if options.explain {
        report = report.with_explanation();
    }

    let writer = open_output(cli.output.as_ref())?;
    match options.format {
        ReportFormat::Json => {
            let mut emitter = JsonEmitter::new(writer);
            emitter.emit(&report)?;
            emitter.flush()?;
        }
        ReportFormat::Text => {
            let mut emitter = TextEmitter::new(writer);
            emitter.emit(&report)?;
            emitter.flush()?;
        }
    }

    // Summary goes to stderr (unless quiet)
    if !cli.quiet {
        let expressivity = report.metrics.expressivity().code();
        eprintln!(
            "Computed {} axioms ({} logical) from {}, expressivity {}",
            report.metrics.counts().axioms,
            report.metrics.logical_axioms(),
            report.source,
            if expressivity.is_empty() { "-" } else { expressivity.as_str() }
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(Verbosity::from_flags(cli.verbose, cli.quiet));
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
