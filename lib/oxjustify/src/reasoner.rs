//! The external reasoner contract.
//!
//! The augmentation and explanation pipeline does not implement description
//! logic satisfiability itself. It consumes a [`Reasoner`] supplied by the
//! embedding application - typically a binding to a tableau reasoner - and
//! a [`ReasonerFactory`] able to mint a fresh, independent instance for each
//! entailment check of the explanation search.

use crate::axiom::Axiom;
use crate::entity::OwlClass;
use crate::error::ReasonerError;
use crate::store::AxiomStore;

/// A description logic reasoner over an axiom store.
pub trait Reasoner {
    /// Checks whether the store is consistent (has at least one model).
    fn is_consistent(&mut self, store: &AxiomStore) -> Result<bool, ReasonerError>;

    /// Returns the unsatisfiable named classes of the store, owl:Nothing
    /// excluded.
    ///
    /// A non-empty result means the store is incoherent.
    fn unsatisfiable_classes(&mut self, store: &AxiomStore) -> Result<Vec<OwlClass>, ReasonerError>;

    /// Returns the base inferred axioms of the store.
    ///
    /// Implementations are expected to restrict the result to class
    /// assertions, subsumptions and object property assertions; other
    /// inferred kinds are outside the augmentation contract.
    fn inferred_axioms(&mut self, store: &AxiomStore) -> Result<Vec<Axiom>, ReasonerError>;

    /// Checks whether the axioms of the store entail the target axiom.
    fn entails(&mut self, store: &AxiomStore, target: &Axiom) -> Result<bool, ReasonerError>;
}

/// Produces fresh, mutually independent [`Reasoner`] instances.
///
/// The explanation search creates one reasoner per entailment check so that
/// no solver state leaks from one check into the next. Implementations must
/// not share mutable state between the instances they hand out.
pub trait ReasonerFactory {
    /// The reasoner type this factory produces.
    type Reasoner: Reasoner;

    /// Creates a fresh reasoner instance.
    fn create_reasoner(&self) -> Self::Reasoner;
}

impl<R: Reasoner, F: Fn() -> R> ReasonerFactory for F {
    type Reasoner = R;

    fn create_reasoner(&self) -> R {
        self()
    }
}
