//! RDF vocabulary constants used by the metrics engine.
//!
//! - `rdf`, `rdfs` -- re-exported from oxigraph's vocabulary module
//! - `owl` -- OWL 2 class constructors, property characteristics and axioms

pub use oxigraph::model::vocab::{rdf, rdfs};

macro_rules! vocabulary {
    ($ns:literal; $($(#[$meta:meta])* $name:ident = $local:literal,)*) => {
        $(
            $(#[$meta])*
            pub const $name: NamedNodeRef<'static> =
                NamedNodeRef::new_unchecked(concat!($ns, $local));
        )*
    };
}

/// Web Ontology Language (`owl:` prefix)
pub mod owl {
    use oxigraph::model::NamedNodeRef;

    vocabulary! { "http://www.w3.org/2002/07/owl#";
        // Declarations
        CLASS = "Class",
        OBJECT_PROPERTY = "ObjectProperty",
        DATATYPE_PROPERTY = "DatatypeProperty",
        NAMED_INDIVIDUAL = "NamedIndividual",
        ANNOTATION_PROPERTY = "AnnotationProperty",

        // Property characteristics
        FUNCTIONAL_PROPERTY = "FunctionalProperty",
        INVERSE_FUNCTIONAL_PROPERTY = "InverseFunctionalProperty",
        TRANSITIVE_PROPERTY = "TransitiveProperty",
        SYMMETRIC_PROPERTY = "SymmetricProperty",
        ASYMMETRIC_PROPERTY = "AsymmetricProperty",
        REFLEXIVE_PROPERTY = "ReflexiveProperty",
        IRREFLEXIVE_PROPERTY = "IrreflexiveProperty",

        // Class constructors
        UNION_OF = "unionOf",
        INTERSECTION_OF = "intersectionOf",
        COMPLEMENT_OF = "complementOf",

        // Restrictions
        ON_PROPERTY = "onProperty",
        SOME_VALUES_FROM = "someValuesFrom",
        ALL_VALUES_FROM = "allValuesFrom",
        MAX_CARDINALITY = "maxCardinality",
        MIN_CARDINALITY = "minCardinality",
        CARDINALITY = "cardinality",

        // Class axioms
        EQUIVALENT_CLASS = "equivalentClass",
        DISJOINT_WITH = "disjointWith",

        // Property axioms
        EQUIVALENT_PROPERTY = "equivalentProperty",
        PROPERTY_DISJOINT_WITH = "propertyDisjointWith",
        INVERSE_OF = "inverseOf",
        PROPERTY_CHAIN_AXIOM = "propertyChainAxiom",

        // Individual axioms
        SAME_AS = "sameAs",
        DIFFERENT_FROM = "differentFrom",
        /// Marks a negative property assertion.
        SOURCE_INDIVIDUAL = "sourceIndividual",
    }
}
