//! Shared test fixtures: a structural reasoner over subsumption reachability.

#![allow(dead_code)]

use oxjustify::{
    Axiom, AxiomStore, ClassExpression, Individual, OwlClass, Reasoner, ReasonerError,
};
use oxrdf::NamedNode;
use rustc_hash::{FxHashMap, FxHashSet};

/// A configurable mock reasoner.
///
/// Entailment is purely structural: a subsumption holds if its superclass is
/// reachable from its subclass through the candidate store's SubClassOf
/// axioms, a class assertion holds if the individual is asserted into a
/// class from which the target class is reachable, and any other axiom holds
/// only if literally present. `fail_on` forces an oracle error for one
/// specific target, to exercise failure isolation.
#[derive(Debug, Clone)]
pub struct TestReasoner {
    pub consistent: bool,
    pub unsatisfiable: Vec<OwlClass>,
    pub inferred: Vec<Axiom>,
    pub fail_on: Option<Axiom>,
}

impl TestReasoner {
    pub fn new() -> Self {
        Self {
            consistent: true,
            unsatisfiable: Vec::new(),
            inferred: Vec::new(),
            fail_on: None,
        }
    }
}

impl Reasoner for TestReasoner {
    fn is_consistent(&mut self, _store: &AxiomStore) -> Result<bool, ReasonerError> {
        Ok(self.consistent)
    }

    fn unsatisfiable_classes(&mut self, _store: &AxiomStore) -> Result<Vec<OwlClass>, ReasonerError> {
        Ok(self.unsatisfiable.clone())
    }

    fn inferred_axioms(&mut self, _store: &AxiomStore) -> Result<Vec<Axiom>, ReasonerError> {
        Ok(self.inferred.clone())
    }

    fn entails(&mut self, store: &AxiomStore, target: &Axiom) -> Result<bool, ReasonerError> {
        if self.fail_on.as_ref() == Some(target) {
            return Err(ReasonerError::Internal("forced oracle failure".into()));
        }
        Ok(match target {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => reachable(store, sub_class, super_class),
            Axiom::ClassAssertion { class, individual } => store
                .class_assertions()
                .any(|(asserted, i)| i == individual && reachable(store, asserted, class)),
            _ => store.contains(target),
        })
    }
}

fn reachable(store: &AxiomStore, from: &ClassExpression, to: &ClassExpression) -> bool {
    if from == to {
        return true;
    }
    let mut supers: FxHashMap<&ClassExpression, Vec<&ClassExpression>> = FxHashMap::default();
    for (sub, sup) in store.subclass_axioms() {
        supers.entry(sub).or_default().push(sup);
    }
    let mut stack = vec![from];
    let mut visited: FxHashSet<&ClassExpression> = stack.iter().copied().collect();
    while let Some(class) = stack.pop() {
        if class == to {
            return true;
        }
        for &next in supers.get(class).into_iter().flatten() {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }
    false
}

pub fn class(suffix: &str) -> ClassExpression {
    ClassExpression::class(NamedNode::new_unchecked(format!(
        "http://example.com/{suffix}"
    )))
}

pub fn owl_class(suffix: &str) -> OwlClass {
    OwlClass::new(NamedNode::new_unchecked(format!(
        "http://example.com/{suffix}"
    )))
}

pub fn individual(suffix: &str) -> Individual {
    Individual::Named(NamedNode::new_unchecked(format!(
        "http://example.com/{suffix}"
    )))
}
