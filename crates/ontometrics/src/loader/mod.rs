pub mod format;
pub mod ontology_loader;

pub use format::OntologyFormat;
pub use ontology_loader::{load_path, parse_str, LoadError};
