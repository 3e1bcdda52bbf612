//! Ontology metrics engine.
//!
//! A read-only pass over a [`TripleStore`] producing named counters, a
//! description-logic expressivity code and construct presence flags.
//! [`compute_metrics`] is deterministic: the same store always yields an equal
//! [`OntologyMetrics`].

pub mod constructs;
pub mod counts;
pub mod expressivity;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::model::graph::TripleStore;

pub use constructs::{detect_constructs, DlConstructs};
pub use counts::{compute_counts, AxiomCounts};
pub use expressivity::{compute_expressivity, explain, ExplainError, Expressivity, ExpressivityLetter};

pub const DL_EXPRESSIVITY: &str = "DL Expressivity";
pub const DL_CONSTRUCTS: &str = "DL Constructs";

/// Result of one metrics computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyMetrics {
    counts: AxiomCounts,
    expressivity: Expressivity,
    constructs: DlConstructs,
}

impl OntologyMetrics {
    pub fn counts(&self) -> &AxiomCounts {
        &self.counts
    }

    pub fn expressivity(&self) -> &Expressivity {
        &self.expressivity
    }

    pub fn constructs(&self) -> &DlConstructs {
        &self.constructs
    }

    /// Counter or total by report name, e.g. `"Logical axioms"`.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts.get(name)
    }

    pub fn logical_axioms(&self) -> usize {
        self.counts.logical_axioms()
    }

    pub fn declaration_axioms(&self) -> usize {
        self.counts.declaration_axioms()
    }

    /// Explanation lines for this result's expressivity code.
    pub fn explain_expressivity(&self) -> String {
        self.expressivity.explain()
    }
}

/// Serializes as one flat object: counters in report order, then the
/// expressivity code, then the construct flags.
impl Serialize for OntologyMetrics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.counts.entries();
        let mut map = serializer.serialize_map(Some(entries.len() + 2))?;
        for (name, value) in entries {
            map.serialize_entry(name, &value)?;
        }
        map.serialize_entry(DL_EXPRESSIVITY, &self.expressivity.code())?;
        map.serialize_entry(DL_CONSTRUCTS, &self.constructs)?;
        map.end()
    }
}

/// Compute every metric for `store`.
pub fn compute_metrics<S: TripleStore + ?Sized>(store: &S) -> OntologyMetrics {
    let counts = compute_counts(store);
    let constructs = detect_constructs(store);
    let expressivity = Expressivity::from_constructs(&constructs);

    debug!(
        axioms = counts.axioms,
        logical_axioms = counts.logical_axioms(),
        expressivity = %expressivity,
        "computed ontology metrics"
    );

    OntologyMetrics {
        counts,
        expressivity,
        constructs,
    }
}

/// Expressivity code of `store` together with its explanation text.
pub fn explain_expressivity<S: TripleStore + ?Sized>(store: &S) -> (String, String) {
    let expressivity = Expressivity::from_constructs(&detect_constructs(store));
    (expressivity.code(), expressivity.explain())
}
