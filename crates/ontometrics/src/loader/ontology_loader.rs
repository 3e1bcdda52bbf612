//! Parse ontology text into a [`Graph`].

use std::path::Path;

use oxigraph::io::{RdfParseError, RdfParser};
use oxigraph::model::{Graph, Triple};
use thiserror::Error;
use tracing::debug;

use super::format::OntologyFormat;

/// Errors that can occur during loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported ontology file {path}: expected a .ttl (Turtle) or .nt file")]
    UnsupportedExtension { path: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid {format} input: {source}")]
    Parse {
        format: OntologyFormat,
        #[source]
        source: RdfParseError,
    },
    #[error("invalid base IRI {iri}: {message}")]
    InvalidBaseIri { iri: String, message: String },
}

/// Parse `text` in the declared format.
///
/// Parsing is all-or-nothing: the first syntax error is returned and no
/// partial graph is produced. `base_iri` resolves relative IRIs.
pub fn parse_str(
    text: &str,
    format: OntologyFormat,
    base_iri: Option<&str>,
) -> Result<Graph, LoadError> {
    let mut parser = RdfParser::from_format(format.rdf_format());
    if let Some(iri) = base_iri {
        parser = parser
            .with_base_iri(iri)
            .map_err(|e| LoadError::InvalidBaseIri {
                iri: iri.to_string(),
                message: e.to_string(),
            })?;
    }

    let mut graph = Graph::new();
    for quad in parser.for_reader(text.as_bytes()) {
        let quad = quad.map_err(|source| LoadError::Parse { format, source })?;
        graph.insert(&Triple::from(quad));
    }

    debug!(%format, triples = graph.len(), "parsed ontology");
    Ok(graph)
}

/// Check the extension, read the file and parse it.
pub fn load_path(path: &Path, base_iri: Option<&str>) -> Result<Graph, LoadError> {
    let format = OntologyFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedExtension {
        path: path.display().to_string(),
    })?;
    debug!(path = %path.display(), %format, "loading ontology");
    let content = std::fs::read_to_string(path)?;
    parse_str(&content, format, base_iri)
}
