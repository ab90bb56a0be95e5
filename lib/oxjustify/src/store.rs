//! Axiom store - a deduplicated, order-preserving collection of axioms.

use crate::axiom::{Axiom, AxiomKind};
use crate::entity::Individual;
use crate::expression::ClassExpression;
use rustc_hash::FxHashSet;
use std::fmt;

/// A deduplicated collection of axioms.
///
/// Insertion order is preserved so that iteration, and therefore every
/// derived artifact (augmentation output, explanation reports), is
/// reproducible across runs on the same input. Duplicate insertions are
/// silently suppressed.
#[derive(Debug, Clone, Default)]
pub struct AxiomStore {
    axioms: Vec<Axiom>,
    index: FxHashSet<Axiom>,
}

impl AxiomStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of axioms in the store.
    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    /// Returns true if the store contains no axiom.
    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    /// Adds an axiom to the store.
    ///
    /// Returns true if the axiom was not already present.
    pub fn insert(&mut self, axiom: Axiom) -> bool {
        if self.index.insert(axiom.clone()) {
            self.axioms.push(axiom);
            true
        } else {
            false
        }
    }

    /// Checks if an axiom is in the store.
    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.index.contains(axiom)
    }

    /// Returns all axioms in insertion order.
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Returns an iterator over axioms in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Axiom> {
        self.axioms.iter()
    }

    /// Returns an iterator over the logical axioms of the store.
    pub fn logical_axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter().filter(|a| a.is_logical())
    }

    /// Returns an iterator over the axioms of a given kind.
    pub fn axioms_of_kind(&self, kind: AxiomKind) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter().filter(move |a| a.kind() == kind)
    }

    /// Returns the (sub, super) pairs of all SubClassOf axioms.
    pub fn subclass_axioms(&self) -> impl Iterator<Item = (&ClassExpression, &ClassExpression)> {
        self.axioms.iter().filter_map(|a| match a {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => Some((sub_class, super_class)),
            _ => None,
        })
    }

    /// Returns the member lists of all DisjointClasses axioms.
    pub fn disjoint_classes_axioms(&self) -> impl Iterator<Item = &[ClassExpression]> {
        self.axioms.iter().filter_map(|a| match a {
            Axiom::DisjointClasses(classes) => Some(classes.as_slice()),
            _ => None,
        })
    }

    /// Returns the (class, individual) pairs of all ClassAssertion axioms.
    pub fn class_assertions(&self) -> impl Iterator<Item = (&ClassExpression, &Individual)> {
        self.axioms.iter().filter_map(|a| match a {
            Axiom::ClassAssertion { class, individual } => Some((class, individual)),
            _ => None,
        })
    }

    /// Returns the individuals directly asserted to belong to a class expression.
    pub fn individuals_asserted_in<'a>(
        &'a self,
        class: &'a ClassExpression,
    ) -> impl Iterator<Item = &'a Individual> {
        self.class_assertions()
            .filter_map(move |(c, individual)| (c == class).then_some(individual))
    }

    /// Merges axioms into the store, returning how many were new.
    pub fn merge(&mut self, axioms: impl IntoIterator<Item = Axiom>) -> usize {
        axioms
            .into_iter()
            .filter(|axiom| self.insert(axiom.clone()))
            .count()
    }
}

impl FromIterator<Axiom> for AxiomStore {
    fn from_iter<I: IntoIterator<Item = Axiom>>(iter: I) -> Self {
        let mut store = Self::new();
        store.merge(iter);
        store
    }
}

impl Extend<Axiom> for AxiomStore {
    fn extend<I: IntoIterator<Item = Axiom>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

impl<'a> IntoIterator for &'a AxiomStore {
    type Item = &'a Axiom;
    type IntoIter = std::slice::Iter<'a, Axiom>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AxiomStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AxiomStore [{} axioms]", self.axioms.len())
    }
}
