//! Structural metrics and description-logic expressivity for RDF/OWL
//! ontologies.
//!
//! Load a graph with [`loader::load_path`] or [`loader::parse_str`], then pass
//! it to [`metrics::compute_metrics`].

pub mod loader;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod options;
pub mod report;

pub use loader::{LoadError, OntologyFormat};
pub use metrics::{compute_metrics, explain, ExplainError, OntologyMetrics};
pub use model::graph::TripleStore;
pub use model::{Graph, Term, Triple};
