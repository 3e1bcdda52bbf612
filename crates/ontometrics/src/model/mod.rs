pub mod graph;
pub mod ontology;

pub use oxigraph::model::{BlankNode, Graph, Literal, NamedNode, Term, Triple};
