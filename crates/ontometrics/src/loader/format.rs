//! Serialization tags accepted by the loader.

use std::fmt;
use std::path::Path;

use oxigraph::io::RdfFormat;

/// Textual ontology serializations the loader can parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OntologyFormat {
    #[default]
    Turtle,
    /// N-Triples is the line-based subset of Turtle.
    NTriples,
}

impl OntologyFormat {
    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "ttl" => Some(OntologyFormat::Turtle),
            "nt" => Some(OntologyFormat::NTriples),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            OntologyFormat::Turtle => "ttl",
            OntologyFormat::NTriples => "nt",
        }
    }

    pub(crate) fn rdf_format(self) -> RdfFormat {
        match self {
            OntologyFormat::Turtle => RdfFormat::Turtle,
            OntologyFormat::NTriples => RdfFormat::NTriples,
        }
    }
}

impl fmt::Display for OntologyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OntologyFormat::Turtle => f.write_str("turtle"),
            OntologyFormat::NTriples => f.write_str("ntriples"),
        }
    }
}
