use std::path::Path;

use ontometrics::loader::load_path;
use ontometrics::metrics::counts::{
    compute_counts, AxiomCounts, AXIOMS, DECLARATION_AXIOMS, HIDDEN_GCI_COUNT, LOGICAL_AXIOMS,
};
use ontometrics::model::ontology::{owl, rdf, rdfs};
use ontometrics::model::{BlankNode, NamedNode};
use ontometrics::{Graph, Triple};
use oxigraph::model::NamedNodeRef;

fn ex(local: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.org/{local}"))
}

fn blank(id: &str) -> BlankNode {
    BlankNode::new_unchecked(id)
}

fn typed(subject: &str, class: NamedNodeRef<'_>) -> Triple {
    Triple::new(ex(subject), rdf::TYPE, class.into_owned())
}

fn graph<const N: usize>(triples: [Triple; N]) -> Graph {
    let mut g = Graph::new();
    for triple in &triples {
        g.insert(triple);
    }
    g
}

#[test]
fn empty_graph_counts_are_zero() {
    let counts = compute_counts(&Graph::new());
    assert_eq!(counts, AxiomCounts::default());
    for (name, value) in counts.entries() {
        assert_eq!(value, 0, "{name} should be 0");
    }
}

#[test]
fn single_class_declaration() {
    let counts = compute_counts(&graph([typed("C1", owl::CLASS)]));
    assert_eq!(counts.axioms, 1);
    assert_eq!(counts.classes, 1);
    assert_eq!(counts.declaration_axioms(), 1);
    assert_eq!(counts.class_assertion, 1);
    // ClassAssertion plus the two statement-total assertion counters.
    assert_eq!(counts.logical_axioms(), 3);
}

#[test]
fn declarations_are_counted_by_type() {
    let counts = compute_counts(&graph([
        typed("C1", owl::CLASS),
        typed("C2", owl::CLASS),
        typed("p", owl::OBJECT_PROPERTY),
        typed("d", owl::DATATYPE_PROPERTY),
        typed("i", owl::NAMED_INDIVIDUAL),
        typed("a", owl::ANNOTATION_PROPERTY),
    ]));
    assert_eq!(counts.classes, 2);
    assert_eq!(counts.object_properties, 1);
    assert_eq!(counts.data_properties, 1);
    assert_eq!(counts.individuals, 1);
    assert_eq!(counts.annotation_properties, 1);
    assert_eq!(counts.declaration_axioms(), 6);
}

#[test]
fn sub_property_of_is_counted_under_every_heading() {
    let counts = compute_counts(&graph([
        Triple::new(ex("p"), rdfs::SUB_PROPERTY_OF, ex("q")),
        Triple::new(ex("q"), rdfs::SUB_PROPERTY_OF, ex("r")),
    ]));
    assert_eq!(counts.sub_object_property_of, 2);
    assert_eq!(counts.sub_data_property_of, 2);
    assert_eq!(counts.sub_annotation_property_of, 2);
}

#[test]
fn domain_and_range_are_counted_under_every_heading() {
    let counts = compute_counts(&graph([
        Triple::new(ex("p"), rdfs::DOMAIN, ex("C")),
        Triple::new(ex("p"), rdfs::RANGE, ex("D")),
        Triple::new(ex("q"), rdfs::RANGE, ex("D")),
    ]));
    assert_eq!(counts.object_property_domain, 1);
    assert_eq!(counts.data_property_domain, 1);
    assert_eq!(counts.annotation_property_domain, 1);
    assert_eq!(counts.object_property_range, 2);
    assert_eq!(counts.data_property_range, 2);
    assert_eq!(counts.annotation_property_range, 2);
}

#[test]
fn property_axioms() {
    let counts = compute_counts(&graph([
        Triple::new(ex("p"), owl::EQUIVALENT_PROPERTY, ex("q")),
        Triple::new(ex("p"), owl::PROPERTY_DISJOINT_WITH, ex("r")),
        Triple::new(ex("p"), owl::INVERSE_OF, ex("s")),
        Triple::new(ex("p"), owl::PROPERTY_CHAIN_AXIOM, blank("l")),
        typed("p", owl::FUNCTIONAL_PROPERTY),
        typed("p", owl::TRANSITIVE_PROPERTY),
        typed("q", owl::SYMMETRIC_PROPERTY),
        typed("r", owl::ASYMMETRIC_PROPERTY),
        typed("r", owl::REFLEXIVE_PROPERTY),
        typed("s", owl::IRREFLEXIVE_PROPERTY),
        typed("s", owl::INVERSE_FUNCTIONAL_PROPERTY),
    ]));
    assert_eq!(counts.equivalent_object_properties, 1);
    assert_eq!(counts.equivalent_data_properties, 1);
    assert_eq!(counts.disjoint_object_properties, 1);
    assert_eq!(counts.disjoint_data_properties, 1);
    assert_eq!(counts.inverse_object_properties, 1);
    assert_eq!(counts.sub_property_chain_of, 1);
    assert_eq!(counts.functional_object_property, 1);
    assert_eq!(counts.functional_data_property, 1);
    assert_eq!(counts.transitive_object_property, 1);
    assert_eq!(counts.symmetric_object_property, 1);
    assert_eq!(counts.asymmetric_object_property, 1);
    assert_eq!(counts.reflexive_object_property, 1);
    assert_eq!(counts.irreflexive_object_property, 1);
    assert_eq!(counts.inverse_functional_object_property, 1);
}

#[test]
fn individual_axioms() {
    let counts = compute_counts(&graph([
        Triple::new(ex("a"), owl::SAME_AS, ex("b")),
        Triple::new(ex("a"), owl::DIFFERENT_FROM, ex("c")),
        Triple::new(blank("n"), owl::SOURCE_INDIVIDUAL, ex("a")),
    ]));
    assert_eq!(counts.same_individual, 1);
    assert_eq!(counts.different_individuals, 1);
    assert_eq!(counts.negative_object_property_assertion, 1);
    assert_eq!(counts.negative_data_property_assertion, 1);
    assert_eq!(counts.object_property_assertion, 3);
    assert_eq!(counts.data_property_assertion, 3);
    assert_eq!(counts.annotation_assertion, 3);
}

// ---------------------------------------------------------------------------
// GCI heuristic
// ---------------------------------------------------------------------------

#[test]
fn isolated_named_subclass_is_not_gci() {
    let counts = compute_counts(&graph([Triple::new(ex("A"), rdfs::SUB_CLASS_OF, ex("B"))]));
    assert_eq!(counts.sub_class_of, 1);
    assert_eq!(counts.gci, 0);
}

#[test]
fn anonymous_subclass_is_gci() {
    let counts = compute_counts(&graph([Triple::new(blank("x"), rdfs::SUB_CLASS_OF, ex("B"))]));
    assert_eq!(counts.gci, 1);
}

#[test]
fn anonymous_superclass_is_gci() {
    let counts = compute_counts(&graph([Triple::new(ex("A"), rdfs::SUB_CLASS_OF, blank("x"))]));
    assert_eq!(counts.gci, 1);
}

#[test]
fn named_term_used_elsewhere_is_gci() {
    let counts = compute_counts(&graph([
        Triple::new(ex("A"), rdfs::SUB_CLASS_OF, ex("B")),
        Triple::new(ex("C"), rdfs::SUB_CLASS_OF, ex("D")),
        typed("A", owl::CLASS),
    ]));
    assert_eq!(counts.sub_class_of, 2);
    assert_eq!(counts.gci, 1);
}

#[test]
fn shared_superclass_marks_both_axioms() {
    // B is the object of two subClassOf statements, so each sees the other.
    let counts = compute_counts(&graph([
        Triple::new(ex("A"), rdfs::SUB_CLASS_OF, ex("B")),
        Triple::new(ex("C"), rdfs::SUB_CLASS_OF, ex("B")),
    ]));
    assert_eq!(counts.gci, 2);
}

#[test]
fn hidden_gci_is_always_zero() {
    let counts = compute_counts(&graph([
        Triple::new(blank("x"), rdfs::SUB_CLASS_OF, ex("B")),
        Triple::new(blank("x"), owl::INTERSECTION_OF, blank("l")),
    ]));
    assert_eq!(counts.gci, 1);
    assert_eq!(counts.hidden_gci(), 0);
    assert_eq!(counts.get(HIDDEN_GCI_COUNT), Some(0));
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[test]
fn logical_axioms_with_three_constituents() {
    let counts = AxiomCounts {
        sub_class_of: 2,
        gci: 1,
        same_individual: 4,
        classes: 9,
        ..AxiomCounts::default()
    };
    assert_eq!(counts.logical_axioms(), 7);
    assert_eq!(counts.declaration_axioms(), 9);
}

#[test]
fn logical_axioms_from_graph_with_three_constituents() {
    // owl:sameAs feeds SameIndividual and the two statement-total counters.
    let counts = compute_counts(&graph([Triple::new(ex("a"), owl::SAME_AS, ex("b"))]));
    assert_eq!(counts.same_individual, 1);
    assert_eq!(counts.object_property_assertion, 1);
    assert_eq!(counts.data_property_assertion, 1);
    assert_eq!(counts.logical_axioms(), 3);
}

#[test]
fn totals_exclude_non_logical_counters() {
    let counts = AxiomCounts {
        axioms: 100,
        sub_property_chain_of: 5,
        annotation_assertion: 7,
        annotation_property_domain: 1,
        annotation_property_range: 1,
        sub_annotation_property_of: 1,
        ..AxiomCounts::default()
    };
    assert_eq!(counts.logical_axioms(), 0);
    assert_eq!(counts.declaration_axioms(), 0);
}

#[test]
fn totals_follow_changed_counters() {
    let mut counts = AxiomCounts {
        sub_class_of: 1,
        ..AxiomCounts::default()
    };
    assert_eq!(counts.logical_axioms(), 1);
    counts.disjoint_classes = 2;
    assert_eq!(counts.logical_axioms(), 3);
    assert_eq!(counts.get(LOGICAL_AXIOMS), Some(3));
}

// ---------------------------------------------------------------------------
// Named access and fixture
// ---------------------------------------------------------------------------

#[test]
fn entries_start_with_totals_and_have_unique_names() {
    let counts = AxiomCounts::default();
    let names: Vec<&str> = counts.entries().into_iter().map(|(name, _)| name).collect();
    assert_eq!(&names[..3], &[AXIOMS, LOGICAL_AXIOMS, DECLARATION_AXIOMS]);
    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), names.len());
    assert_eq!(names.len(), 44);
}

#[test]
fn get_unknown_name() {
    assert_eq!(AxiomCounts::default().get("Nominals"), None);
}

#[test]
fn family_fixture_counts() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/family.ttl");
    let counts = compute_counts(&load_path(&path, None).unwrap());

    assert_eq!(counts.axioms, 30);
    assert_eq!(counts.classes, 4);
    assert_eq!(counts.object_properties, 3);
    assert_eq!(counts.data_properties, 1);
    assert_eq!(counts.individuals, 2);
    assert_eq!(counts.annotation_properties, 0);
    assert_eq!(counts.declaration_axioms(), 10);

    assert_eq!(counts.sub_class_of, 3);
    assert_eq!(counts.equivalent_classes, 1);
    assert_eq!(counts.disjoint_classes, 1);
    assert_eq!(counts.gci, 3);

    assert_eq!(counts.sub_object_property_of, 1);
    assert_eq!(counts.inverse_object_properties, 1);
    assert_eq!(counts.transitive_object_property, 1);
    assert_eq!(counts.functional_data_property, 1);
    assert_eq!(counts.object_property_domain, 1);
    assert_eq!(counts.object_property_range, 2);

    assert_eq!(counts.class_assertion, 15);
    assert_eq!(counts.different_individuals, 1);
    assert_eq!(counts.logical_axioms(), 96);
}
