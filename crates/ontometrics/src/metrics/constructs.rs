//! Presence tests for the description-logic constructs an ontology uses.

use oxigraph::model::{NamedNodeRef, TermRef};
use serde::Serialize;

use crate::model::graph::TripleStore;
use crate::model::ontology::{owl, rdf, rdfs};

/// One flag per construct category. Every flag is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DlConstructs {
    #[serde(rename = "is_unionExists")]
    pub union: bool,
    #[serde(rename = "is_intersectionExists")]
    pub intersection: bool,
    #[serde(rename = "is_complementExists")]
    pub complement: bool,
    #[serde(rename = "is_existentialRestrictionExists")]
    pub existential_restriction: bool,
    #[serde(rename = "is_universalRestrictionExists")]
    pub universal_restriction: bool,
    #[serde(rename = "is_objectPropertyExists")]
    pub object_property: bool,
    #[serde(rename = "is_dataPropertyExists")]
    pub data_property: bool,
    #[serde(rename = "is_functionalPropertyExists")]
    pub functional_property: bool,
    #[serde(rename = "is_inverseFunctionalPropertyExists")]
    pub inverse_functional_property: bool,
    #[serde(rename = "is_cardinalityRestrictionExists")]
    pub cardinality_restriction: bool,
    #[serde(rename = "is_roleHierarchyExists")]
    pub role_hierarchy: bool,
    #[serde(rename = "is_roleCompositionExists")]
    pub role_composition: bool,
    #[serde(rename = "is_reflexivePropertyExists")]
    pub reflexive_property: bool,
    #[serde(rename = "is_irreflexivePropertyExists")]
    pub irreflexive_property: bool,
    #[serde(rename = "is_transitivePropertyExists")]
    pub transitive_property: bool,
    #[serde(rename = "is_symmetricPropertyExists")]
    pub symmetric_property: bool,
    #[serde(rename = "is_asymmetricPropertyExists")]
    pub asymmetric_property: bool,
    #[serde(rename = "is_inversePropertyExists")]
    pub inverse_property: bool,
    #[serde(rename = "is_qualifiedCardinalityRestrictionExists")]
    pub qualified_cardinality_restriction: bool,
}

impl DlConstructs {
    /// `(key, flag)` pairs in serialization order.
    pub fn entries(&self) -> [(&'static str, bool); 19] {
        [
            ("is_unionExists", self.union),
            ("is_intersectionExists", self.intersection),
            ("is_complementExists", self.complement),
            ("is_existentialRestrictionExists", self.existential_restriction),
            ("is_universalRestrictionExists", self.universal_restriction),
            ("is_objectPropertyExists", self.object_property),
            ("is_dataPropertyExists", self.data_property),
            ("is_functionalPropertyExists", self.functional_property),
            (
                "is_inverseFunctionalPropertyExists",
                self.inverse_functional_property,
            ),
            ("is_cardinalityRestrictionExists", self.cardinality_restriction),
            ("is_roleHierarchyExists", self.role_hierarchy),
            ("is_roleCompositionExists", self.role_composition),
            ("is_reflexivePropertyExists", self.reflexive_property),
            ("is_irreflexivePropertyExists", self.irreflexive_property),
            ("is_transitivePropertyExists", self.transitive_property),
            ("is_symmetricPropertyExists", self.symmetric_property),
            ("is_asymmetricPropertyExists", self.asymmetric_property),
            ("is_inversePropertyExists", self.inverse_property),
            (
                "is_qualifiedCardinalityRestrictionExists",
                self.qualified_cardinality_restriction,
            ),
        ]
    }

    /// Look up a flag by its serialized key.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, flag)| flag)
    }

    pub fn any(&self) -> bool {
        self.entries().iter().any(|(_, flag)| *flag)
    }
}

/// Run every presence test against `store`.
pub fn detect_constructs<S: TripleStore + ?Sized>(store: &S) -> DlConstructs {
    DlConstructs {
        union: has_predicate(store, owl::UNION_OF),
        intersection: has_predicate(store, owl::INTERSECTION_OF),
        complement: has_predicate(store, owl::COMPLEMENT_OF),
        existential_restriction: has_predicate(store, owl::SOME_VALUES_FROM),
        universal_restriction: has_predicate(store, owl::ALL_VALUES_FROM),
        object_property: has_type(store, owl::OBJECT_PROPERTY),
        data_property: has_type(store, owl::DATATYPE_PROPERTY),
        functional_property: has_type(store, owl::FUNCTIONAL_PROPERTY),
        inverse_functional_property: has_type(store, owl::INVERSE_FUNCTIONAL_PROPERTY),
        cardinality_restriction: has_predicate(store, owl::MAX_CARDINALITY)
            || has_predicate(store, owl::MIN_CARDINALITY)
            || has_predicate(store, owl::CARDINALITY),
        role_hierarchy: has_predicate(store, rdfs::SUB_PROPERTY_OF),
        role_composition: has_predicate(store, owl::PROPERTY_CHAIN_AXIOM),
        reflexive_property: has_type(store, owl::REFLEXIVE_PROPERTY),
        irreflexive_property: has_type(store, owl::IRREFLEXIVE_PROPERTY),
        transitive_property: has_type(store, owl::TRANSITIVE_PROPERTY),
        symmetric_property: has_type(store, owl::SYMMETRIC_PROPERTY),
        asymmetric_property: has_type(store, owl::ASYMMETRIC_PROPERTY),
        inverse_property: has_predicate(store, owl::INVERSE_OF),
        qualified_cardinality_restriction: has_qualified_restriction(store),
    }
}

fn has_predicate<S: TripleStore + ?Sized>(store: &S, predicate: NamedNodeRef<'_>) -> bool {
    store.contains_match(None, Some(predicate), None)
}

fn has_type<S: TripleStore + ?Sized>(store: &S, class: NamedNodeRef<'_>) -> bool {
    store.contains_match(None, Some(rdf::TYPE), Some(class.into()))
}

/// A restriction node carrying `owl:onProperty` together with a
/// `someValuesFrom` or `allValuesFrom` filler. Stops at the first match.
fn has_qualified_restriction<S: TripleStore + ?Sized>(store: &S) -> bool {
    store
        .triples_matching(None, Some(owl::ON_PROPERTY), None)
        .any(|restriction| {
            let node = Some(TermRef::from(restriction.subject));
            store.contains_match(node, Some(owl::SOME_VALUES_FROM), None)
                || store.contains_match(node, Some(owl::ALL_VALUES_FROM), None)
        })
}
