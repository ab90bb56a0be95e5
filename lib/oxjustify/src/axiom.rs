//! Axiom types.
//!
//! Axioms are the basic statements of a knowledge base. The pipeline
//! interprets subsumptions, disjointness constraints and class assertions;
//! the remaining kinds pass through augmentation untouched but participate
//! in explanation search as ordinary members of the axiom universe.

use crate::entity::{Individual, ObjectProperty, OwlClass};
use crate::expression::ClassExpression;
use std::fmt;

/// An axiom of the knowledge base.
///
/// Axioms are immutable and compared by structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    /// SubClassOf(sub, super) - sub is a subclass of super
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },

    /// EquivalentClasses(C1, C2, ...) - all classes are equivalent
    EquivalentClasses(Vec<ClassExpression>),

    /// DisjointClasses(C1, C2, ...) - classes have no common instances
    DisjointClasses(Vec<ClassExpression>),

    /// SubObjectPropertyOf(sub, super)
    SubObjectPropertyOf {
        sub_property: ObjectProperty,
        super_property: ObjectProperty,
    },

    /// ClassAssertion(C, a) - a is an instance of C
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },

    /// ObjectPropertyAssertion(P, a, b) - (a, b) is in P
    ObjectPropertyAssertion {
        property: ObjectProperty,
        source: Individual,
        target: Individual,
    },

    /// Declaration(Class(C))
    DeclareClass(OwlClass),

    /// Declaration(ObjectProperty(P))
    DeclareObjectProperty(ObjectProperty),

    /// Declaration(NamedIndividual(a))
    DeclareNamedIndividual(Individual),
}

impl Axiom {
    /// Creates a SubClassOf axiom.
    pub fn subclass_of(sub: impl Into<ClassExpression>, sup: impl Into<ClassExpression>) -> Self {
        Self::SubClassOf {
            sub_class: sub.into(),
            super_class: sup.into(),
        }
    }

    /// Creates a ClassAssertion axiom.
    pub fn class_assertion(
        class: impl Into<ClassExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::ClassAssertion {
            class: class.into(),
            individual: individual.into(),
        }
    }

    /// Creates a DisjointClasses axiom.
    pub fn disjoint_classes(classes: Vec<ClassExpression>) -> Self {
        Self::DisjointClasses(classes)
    }

    /// Creates an ObjectPropertyAssertion axiom.
    pub fn object_property_assertion(
        property: impl Into<ObjectProperty>,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) -> Self {
        Self::ObjectPropertyAssertion {
            property: property.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns the structural kind of this axiom.
    pub fn kind(&self) -> AxiomKind {
        match self {
            Self::SubClassOf { .. } => AxiomKind::SubClassOf,
            Self::EquivalentClasses(_) => AxiomKind::EquivalentClasses,
            Self::DisjointClasses(_) => AxiomKind::DisjointClasses,
            Self::SubObjectPropertyOf { .. } => AxiomKind::SubObjectPropertyOf,
            Self::ClassAssertion { .. } => AxiomKind::ClassAssertion,
            Self::ObjectPropertyAssertion { .. } => AxiomKind::ObjectPropertyAssertion,
            Self::DeclareClass(_) | Self::DeclareObjectProperty(_) | Self::DeclareNamedIndividual(_) => {
                AxiomKind::Declaration
            }
        }
    }

    /// Returns true if this axiom carries logical content.
    ///
    /// Declarations only introduce names; every other kind constrains the
    /// models of the knowledge base and is a candidate for explanation.
    pub fn is_logical(&self) -> bool {
        self.kind() != AxiomKind::Declaration
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubClassOf {
                sub_class,
                super_class,
            } => write!(f, "SubClassOf({sub_class} {super_class})"),
            Self::EquivalentClasses(classes) => {
                write!(f, "EquivalentClasses(")?;
                fmt_list(f, classes)?;
                write!(f, ")")
            }
            Self::DisjointClasses(classes) => {
                write!(f, "DisjointClasses(")?;
                fmt_list(f, classes)?;
                write!(f, ")")
            }
            Self::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => write!(f, "SubObjectPropertyOf({sub_property} {super_property})"),
            Self::ClassAssertion { class, individual } => {
                write!(f, "ClassAssertion({class} {individual})")
            }
            Self::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => write!(f, "ObjectPropertyAssertion({property} {source} {target})"),
            Self::DeclareClass(c) => write!(f, "Declaration(Class({c}))"),
            Self::DeclareObjectProperty(p) => write!(f, "Declaration(ObjectProperty({p}))"),
            Self::DeclareNamedIndividual(i) => write!(f, "Declaration(NamedIndividual({i}))"),
        }
    }
}

fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[ClassExpression]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// The structural kind of an axiom.
///
/// The ordering groups related kinds together; the explanation search sorts
/// its candidate universe by kind so that contraction removes structurally
/// related axioms as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxiomKind {
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    SubObjectPropertyOf,
    ClassAssertion,
    ObjectPropertyAssertion,
    Declaration,
}
