//! Description-logic expressivity codes.
//!
//! An expressivity code is the sorted set of letters naming the constructs an
//! ontology uses, e.g. `"CEFHNRSTU"`. Letters come from [`DlConstructs`]; the
//! letter table and its explanations are fixed.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use super::constructs::{detect_constructs, DlConstructs};
use crate::model::graph::TripleStore;

/// Failure to explain an expressivity code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    #[error("no explanation for expressivity letter '{letter}'")]
    UnknownLetter { letter: char },
}

/// One letter of an expressivity code.
///
/// Variants are declared in alphabetical order so that the derived `Ord`
/// matches the order of the letters themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpressivityLetter {
    A,
    C,
    D,
    E,
    F,
    H,
    I,
    N,
    /// Nominals. Present in the table but never produced by detection.
    O,
    Q,
    R,
    S,
    T,
    U,
    X,
    Y,
}

impl ExpressivityLetter {
    pub const ALL: [ExpressivityLetter; 16] = [
        ExpressivityLetter::A,
        ExpressivityLetter::C,
        ExpressivityLetter::D,
        ExpressivityLetter::E,
        ExpressivityLetter::F,
        ExpressivityLetter::H,
        ExpressivityLetter::I,
        ExpressivityLetter::N,
        ExpressivityLetter::O,
        ExpressivityLetter::Q,
        ExpressivityLetter::R,
        ExpressivityLetter::S,
        ExpressivityLetter::T,
        ExpressivityLetter::U,
        ExpressivityLetter::X,
        ExpressivityLetter::Y,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|letter| letter.as_char() == c)
    }

    pub fn as_char(self) -> char {
        match self {
            ExpressivityLetter::A => 'A',
            ExpressivityLetter::C => 'C',
            ExpressivityLetter::D => 'D',
            ExpressivityLetter::E => 'E',
            ExpressivityLetter::F => 'F',
            ExpressivityLetter::H => 'H',
            ExpressivityLetter::I => 'I',
            ExpressivityLetter::N => 'N',
            ExpressivityLetter::O => 'O',
            ExpressivityLetter::Q => 'Q',
            ExpressivityLetter::R => 'R',
            ExpressivityLetter::S => 'S',
            ExpressivityLetter::T => 'T',
            ExpressivityLetter::U => 'U',
            ExpressivityLetter::X => 'X',
            ExpressivityLetter::Y => 'Y',
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            ExpressivityLetter::A => {
                "Asymmetric properties: Properties that cannot be true in both directions."
            }
            ExpressivityLetter::C => {
                "Complex class constructors: Intersection, union, and complement of concepts."
            }
            ExpressivityLetter::D => {
                "Datatype properties: Properties that link individuals to data values."
            }
            ExpressivityLetter::E => {
                "Existential restrictions: Restrictions that require some relationship to exist."
            }
            ExpressivityLetter::F => {
                "Functional properties: Properties that have at most one value for each individual."
            }
            ExpressivityLetter::H => "Role hierarchies: Subproperties that form a hierarchy.",
            ExpressivityLetter::I => {
                "Inverse properties: Properties that are the inverse of other properties."
            }
            ExpressivityLetter::N => {
                "Cardinality restrictions: Restrictions on the number of values a property can have."
            }
            ExpressivityLetter::O => "Nominals: Enumerated classes of specific individuals.",
            ExpressivityLetter::Q => {
                "Qualified cardinality restrictions: Cardinality restrictions with specific value types."
            }
            ExpressivityLetter::R => {
                "Role constructors: Complex role constructs, including composition and hierarchy."
            }
            ExpressivityLetter::S => {
                "Symmetric properties: Properties that are true in both directions."
            }
            ExpressivityLetter::T => {
                "Transitive properties: Properties that imply the same property over chains of relationships."
            }
            ExpressivityLetter::U => "Union of concepts: The disjunction of multiple concepts.",
            ExpressivityLetter::X => {
                "Reflexive properties: Properties that relate individuals to themselves."
            }
            ExpressivityLetter::Y => {
                "Irreflexive properties: Properties that do not relate individuals to themselves."
            }
        }
    }
}

impl fmt::Display for ExpressivityLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Sorted, duplicate-free set of expressivity letters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expressivity {
    letters: BTreeSet<ExpressivityLetter>,
}

impl Expressivity {
    /// Map construct flags to letters. Several flags share a letter.
    pub fn from_constructs(constructs: &DlConstructs) -> Self {
        use ExpressivityLetter as L;

        let rules = [
            (constructs.union, L::U),
            (constructs.intersection, L::C),
            (constructs.complement, L::C),
            (constructs.existential_restriction, L::E),
            (constructs.universal_restriction, L::E),
            (constructs.object_property, L::R),
            (constructs.data_property, L::D),
            (constructs.functional_property, L::F),
            (constructs.inverse_functional_property, L::I),
            (constructs.cardinality_restriction, L::N),
            (constructs.role_hierarchy, L::H),
            (constructs.role_composition, L::R),
            (constructs.reflexive_property, L::X),
            (constructs.irreflexive_property, L::Y),
            (constructs.transitive_property, L::T),
            (constructs.symmetric_property, L::S),
            (constructs.asymmetric_property, L::A),
            (constructs.inverse_property, L::I),
            (constructs.qualified_cardinality_restriction, L::Q),
        ];

        rules
            .into_iter()
            .filter_map(|(present, letter)| present.then_some(letter))
            .collect()
    }

    pub fn contains(&self, letter: ExpressivityLetter) -> bool {
        self.letters.contains(&letter)
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Letters in ascending order.
    pub fn letters(&self) -> impl Iterator<Item = ExpressivityLetter> + '_ {
        self.letters.iter().copied()
    }

    pub fn code(&self) -> String {
        self.to_string()
    }

    /// One explanation line per letter, ascending.
    pub fn explain(&self) -> String {
        self.letters()
            .map(ExpressivityLetter::explanation)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<ExpressivityLetter> for Expressivity {
    fn from_iter<I: IntoIterator<Item = ExpressivityLetter>>(iter: I) -> Self {
        Self {
            letters: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Expressivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Expressivity code of `store`, e.g. `"RT"`. Empty for an empty store.
pub fn compute_expressivity<S: TripleStore + ?Sized>(store: &S) -> String {
    Expressivity::from_constructs(&detect_constructs(store)).code()
}

/// Explain each letter of `code`, one line per letter in input order.
///
/// Fails on the first letter that has no entry in the table.
pub fn explain(code: &str) -> Result<String, ExplainError> {
    let lines = code
        .chars()
        .map(|c| {
            ExpressivityLetter::from_char(c)
                .map(ExpressivityLetter::explanation)
                .ok_or(ExplainError::UnknownLetter { letter: c })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
