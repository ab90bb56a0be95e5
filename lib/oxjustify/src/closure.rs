//! Transitive closure of the subsumption relation.

use crate::axiom::Axiom;
use crate::expression::ClassExpression;
use crate::store::AxiomStore;
use rustc_hash::{FxHashMap, FxHashSet};

/// Computes the transitive closure of the SubClassOf axioms in the store.
///
/// Returns a `SubClassOf(sub, sup)` axiom for every pair where a chain
/// `sub ⊑ c1 ⊑ ... ⊑ sup` exists through the store's subsumption axioms and
/// the pair is not already asserted. The traversal is an iterative
/// depth-first walk with an explicit stack and a per-start visited set, so
/// subsumption cycles terminate and each reachable superclass is processed
/// at most once per starting class. Results follow store order, keeping the
/// output deterministic.
pub fn subsumption_closure(store: &AxiomStore) -> Vec<Axiom> {
    let mut direct_supers: FxHashMap<&ClassExpression, Vec<&ClassExpression>> =
        FxHashMap::default();
    for (sub, sup) in store.subclass_axioms() {
        direct_supers.entry(sub).or_default().push(sup);
    }

    let mut derived = Vec::new();
    let mut started: FxHashSet<&ClassExpression> = FxHashSet::default();
    for (sub, _) in store.subclass_axioms() {
        if !started.insert(sub) {
            continue;
        }
        let Some(direct) = direct_supers.get(sub) else {
            continue;
        };
        let mut stack: Vec<&ClassExpression> = direct.clone();
        let mut visited: FxHashSet<&ClassExpression> = stack.iter().copied().collect();
        while let Some(reached) = stack.pop() {
            let axiom = Axiom::SubClassOf {
                sub_class: sub.clone(),
                super_class: reached.clone(),
            };
            if !store.contains(&axiom) {
                derived.push(axiom);
            }
            if let Some(next_supers) = direct_supers.get(reached) {
                for &next in next_supers {
                    if visited.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }
    }
    derived
}
