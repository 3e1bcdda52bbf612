//! Axiom and declaration counters.
//!
//! Several counters read the same statements under different headings:
//! `rdfs:subPropertyOf` feeds the object, data and annotation sub-property
//! counters, `rdfs:domain`/`rdfs:range` feed all three domain/range pairs, and
//! the assertion counters are plain statement totals. The graph alone does not
//! say which kind of property a statement is about, so these overlaps are kept
//! as-is.

use oxigraph::model::{NamedNodeRef, TermRef, TripleRef};

use crate::model::graph::TripleStore;
use crate::model::ontology::{owl, rdf, rdfs};

pub const AXIOMS: &str = "Axioms";
pub const LOGICAL_AXIOMS: &str = "Logical axioms";
pub const DECLARATION_AXIOMS: &str = "Declaration axioms count";
pub const HIDDEN_GCI_COUNT: &str = "Hidden GCI Count";

/// Every counter computed for one graph.
///
/// The two totals, [`logical_axioms`](Self::logical_axioms) and
/// [`declaration_axioms`](Self::declaration_axioms), are derived on each call
/// and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxiomCounts {
    pub axioms: usize,

    pub classes: usize,
    pub object_properties: usize,
    pub data_properties: usize,
    pub individuals: usize,
    pub annotation_properties: usize,

    pub sub_class_of: usize,
    pub equivalent_classes: usize,
    pub disjoint_classes: usize,
    pub gci: usize,

    pub sub_object_property_of: usize,
    pub equivalent_object_properties: usize,
    pub inverse_object_properties: usize,
    pub disjoint_object_properties: usize,
    pub functional_object_property: usize,
    pub inverse_functional_object_property: usize,
    pub transitive_object_property: usize,
    pub symmetric_object_property: usize,
    pub asymmetric_object_property: usize,
    pub reflexive_object_property: usize,
    pub irreflexive_object_property: usize,
    pub object_property_domain: usize,
    pub object_property_range: usize,
    pub sub_property_chain_of: usize,

    pub sub_data_property_of: usize,
    pub equivalent_data_properties: usize,
    pub disjoint_data_properties: usize,
    pub functional_data_property: usize,
    pub data_property_domain: usize,
    pub data_property_range: usize,

    pub class_assertion: usize,
    pub object_property_assertion: usize,
    pub data_property_assertion: usize,
    pub negative_object_property_assertion: usize,
    pub negative_data_property_assertion: usize,
    pub same_individual: usize,
    pub different_individuals: usize,

    pub annotation_assertion: usize,
    pub annotation_property_domain: usize,
    pub annotation_property_range: usize,
    pub sub_annotation_property_of: usize,
}

impl AxiomCounts {
    /// Hidden GCI detection is not implemented yet; always 0.
    pub fn hidden_gci(&self) -> usize {
        0
    }

    /// Sum of the logical axiom counters.
    pub fn logical_axioms(&self) -> usize {
        self.sub_class_of
            + self.equivalent_classes
            + self.disjoint_classes
            + self.gci
            + self.sub_object_property_of
            + self.equivalent_object_properties
            + self.inverse_object_properties
            + self.disjoint_object_properties
            + self.functional_object_property
            + self.inverse_functional_object_property
            + self.transitive_object_property
            + self.symmetric_object_property
            + self.asymmetric_object_property
            + self.reflexive_object_property
            + self.irreflexive_object_property
            + self.object_property_domain
            + self.object_property_range
            + self.sub_data_property_of
            + self.equivalent_data_properties
            + self.disjoint_data_properties
            + self.functional_data_property
            + self.data_property_domain
            + self.data_property_range
            + self.class_assertion
            + self.object_property_assertion
            + self.data_property_assertion
            + self.negative_object_property_assertion
            + self.negative_data_property_assertion
            + self.same_individual
            + self.different_individuals
    }

    /// Sum of the five declaration counters.
    pub fn declaration_axioms(&self) -> usize {
        self.classes
            + self.object_properties
            + self.data_properties
            + self.individuals
            + self.annotation_properties
    }

    /// Every counter by name, totals included, in report order.
    pub fn entries(&self) -> Vec<(&'static str, usize)> {
        vec![
            (AXIOMS, self.axioms),
            (LOGICAL_AXIOMS, self.logical_axioms()),
            (DECLARATION_AXIOMS, self.declaration_axioms()),
            ("Class count", self.classes),
            ("Object Property count", self.object_properties),
            ("Data Property count", self.data_properties),
            ("Individual count", self.individuals),
            ("Annotation Property count", self.annotation_properties),
            ("SubClassOf", self.sub_class_of),
            ("EquivalentClasses", self.equivalent_classes),
            ("DisjointClasses", self.disjoint_classes),
            ("GCI Count", self.gci),
            (HIDDEN_GCI_COUNT, self.hidden_gci()),
            ("SubObjectPropertyOf", self.sub_object_property_of),
            ("EquivalentObjectProperties", self.equivalent_object_properties),
            ("InverseObjectProperties", self.inverse_object_properties),
            ("DisjointObjectProperties", self.disjoint_object_properties),
            ("FunctionalObjectProperty", self.functional_object_property),
            (
                "InverseFunctionalObjectProperty",
                self.inverse_functional_object_property,
            ),
            ("TransitiveObjectProperty", self.transitive_object_property),
            ("SymmetricObjectProperty", self.symmetric_object_property),
            ("AsymmetricObjectProperty", self.asymmetric_object_property),
            ("ReflexiveObjectProperty", self.reflexive_object_property),
            ("IrreflexiveObjectProperty", self.irreflexive_object_property),
            ("ObjectPropertyDomain", self.object_property_domain),
            ("ObjectPropertyRange", self.object_property_range),
            ("SubPropertyChainOf", self.sub_property_chain_of),
            ("SubDataPropertyOf", self.sub_data_property_of),
            ("EquivalentDataProperties", self.equivalent_data_properties),
            ("DisjointDataProperties", self.disjoint_data_properties),
            ("FunctionalDataProperty", self.functional_data_property),
            ("DataPropertyDomain", self.data_property_domain),
            ("DataPropertyRange", self.data_property_range),
            ("ClassAssertion", self.class_assertion),
            ("ObjectPropertyAssertion", self.object_property_assertion),
            ("DataPropertyAssertion", self.data_property_assertion),
            (
                "NegativeObjectPropertyAssertion",
                self.negative_object_property_assertion,
            ),
            (
                "NegativeDataPropertyAssertion",
                self.negative_data_property_assertion,
            ),
            ("SameIndividual", self.same_individual),
            ("DifferentIndividuals", self.different_individuals),
            ("AnnotationAssertion", self.annotation_assertion),
            ("AnnotationPropertyDomain", self.annotation_property_domain),
            ("AnnotationPropertyRange", self.annotation_property_range),
            ("SubAnnotationPropertyOf", self.sub_annotation_property_of),
        ]
    }

    /// Look up a counter or total by its report name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// Count every axiom category in `store`.
pub fn compute_counts<S: TripleStore + ?Sized>(store: &S) -> AxiomCounts {
    let total = store.len();
    let sub_property_of = count_predicate(store, rdfs::SUB_PROPERTY_OF);
    let domain = count_predicate(store, rdfs::DOMAIN);
    let range = count_predicate(store, rdfs::RANGE);
    let equivalent_property = count_predicate(store, owl::EQUIVALENT_PROPERTY);
    let property_disjoint = count_predicate(store, owl::PROPERTY_DISJOINT_WITH);
    let functional = count_type(store, owl::FUNCTIONAL_PROPERTY);
    let source_individual = count_predicate(store, owl::SOURCE_INDIVIDUAL);

    AxiomCounts {
        axioms: total,

        classes: count_type(store, owl::CLASS),
        object_properties: count_type(store, owl::OBJECT_PROPERTY),
        data_properties: count_type(store, owl::DATATYPE_PROPERTY),
        individuals: count_type(store, owl::NAMED_INDIVIDUAL),
        annotation_properties: count_type(store, owl::ANNOTATION_PROPERTY),

        sub_class_of: count_predicate(store, rdfs::SUB_CLASS_OF),
        equivalent_classes: count_predicate(store, owl::EQUIVALENT_CLASS),
        disjoint_classes: count_predicate(store, owl::DISJOINT_WITH),
        gci: count_gci(store),

        sub_object_property_of: sub_property_of,
        equivalent_object_properties: equivalent_property,
        inverse_object_properties: count_predicate(store, owl::INVERSE_OF),
        disjoint_object_properties: property_disjoint,
        functional_object_property: functional,
        inverse_functional_object_property: count_type(store, owl::INVERSE_FUNCTIONAL_PROPERTY),
        transitive_object_property: count_type(store, owl::TRANSITIVE_PROPERTY),
        symmetric_object_property: count_type(store, owl::SYMMETRIC_PROPERTY),
        asymmetric_object_property: count_type(store, owl::ASYMMETRIC_PROPERTY),
        reflexive_object_property: count_type(store, owl::REFLEXIVE_PROPERTY),
        irreflexive_object_property: count_type(store, owl::IRREFLEXIVE_PROPERTY),
        object_property_domain: domain,
        object_property_range: range,
        sub_property_chain_of: count_predicate(store, owl::PROPERTY_CHAIN_AXIOM),

        sub_data_property_of: sub_property_of,
        equivalent_data_properties: equivalent_property,
        disjoint_data_properties: property_disjoint,
        functional_data_property: functional,
        data_property_domain: domain,
        data_property_range: range,

        class_assertion: count_predicate(store, rdf::TYPE),
        object_property_assertion: total,
        data_property_assertion: total,
        negative_object_property_assertion: source_individual,
        negative_data_property_assertion: source_individual,
        same_individual: count_predicate(store, owl::SAME_AS),
        different_individuals: count_predicate(store, owl::DIFFERENT_FROM),

        annotation_assertion: total,
        annotation_property_domain: domain,
        annotation_property_range: range,
        sub_annotation_property_of: sub_property_of,
    }
}

fn count_predicate<S: TripleStore + ?Sized>(store: &S, predicate: NamedNodeRef<'_>) -> usize {
    store.count_matching(None, Some(predicate), None)
}

fn count_type<S: TripleStore + ?Sized>(store: &S, class: NamedNodeRef<'_>) -> usize {
    store.count_matching(None, Some(rdf::TYPE), Some(class.into()))
}

/// Structural GCI heuristic over `rdfs:subClassOf` statements.
///
/// A statement counts when either side is not an IRI, or when either side
/// appears in any other statement. This over-approximates: a declared named
/// class already appears elsewhere. The axiom itself is never the "other"
/// statement, so an isolated `A subClassOf B` between IRIs is not counted;
/// the Python service counted every subClassOf statement here.
fn count_gci<S: TripleStore + ?Sized>(store: &S) -> usize {
    store
        .triples_matching(None, Some(rdfs::SUB_CLASS_OF), None)
        .filter(|axiom| is_gci_candidate(store, *axiom))
        .count()
}

fn is_gci_candidate<S: TripleStore + ?Sized>(store: &S, axiom: TripleRef<'_>) -> bool {
    let subject = TermRef::from(axiom.subject);
    !subject.is_named_node()
        || !axiom.object.is_named_node()
        || appears_elsewhere(store, subject, axiom)
        || appears_elsewhere(store, axiom.object, axiom)
}

fn appears_elsewhere<'a, S: TripleStore + ?Sized>(
    store: &'a S,
    term: TermRef<'a>,
    axiom: TripleRef<'a>,
) -> bool {
    store
        .triples_matching(Some(term), None, None)
        .chain(store.triples_matching(None, None, Some(term)))
        .any(|other| other != axiom)
}
