//! Pattern lookup over RDF statements.
//!
//! [`TripleStore`] is the read-only seam the metrics engine queries through.
//! It is implemented for oxigraph's in-memory [`Graph`], which the loader
//! produces.

use std::iter;

use oxigraph::model::{Graph, NamedNodeRef, TermRef, TripleRef};

/// Read access to a set of RDF statements.
///
/// Any position of a pattern may be `None`, which matches every value.
pub trait TripleStore {
    /// Number of distinct statements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every statement matching the pattern.
    fn triples_matching<'a>(
        &'a self,
        subject: Option<TermRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> Box<dyn Iterator<Item = TripleRef<'a>> + 'a>;

    /// True as soon as one statement matches.
    fn contains_match<'a>(
        &'a self,
        subject: Option<TermRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> bool {
        self.triples_matching(subject, predicate, object)
            .next()
            .is_some()
    }

    fn count_matching<'a>(
        &'a self,
        subject: Option<TermRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> usize {
        self.triples_matching(subject, predicate, object).count()
    }
}

impl TripleStore for Graph {
    fn len(&self) -> usize {
        Graph::len(self)
    }

    fn triples_matching<'a>(
        &'a self,
        subject: Option<TermRef<'a>>,
        predicate: Option<NamedNodeRef<'a>>,
        object: Option<TermRef<'a>>,
    ) -> Box<dyn Iterator<Item = TripleRef<'a>> + 'a> {
        // Start from the graph's own index on the first bound position.
        let candidates: Box<dyn Iterator<Item = TripleRef<'a>> + 'a> =
            match (subject, predicate, object) {
                (Some(TermRef::NamedNode(node)), _, _) => Box::new(self.triples_for_subject(node)),
                (Some(TermRef::BlankNode(node)), _, _) => Box::new(self.triples_for_subject(node)),
                // Literals never occur in subject position.
                (Some(_), _, _) => return Box::new(iter::empty()),
                (None, Some(p), _) => Box::new(self.triples_for_predicate(p)),
                (None, None, Some(o)) => Box::new(self.triples_for_object(o)),
                (None, None, None) => Box::new(self.iter()),
            };

        Box::new(candidates.filter(move |t| {
            predicate.is_none_or(|p| t.predicate == p)
                && object.is_none_or(|o| t.object == o)
                && subject.is_none_or(|s| TermRef::from(t.subject) == s)
        }))
    }
}
