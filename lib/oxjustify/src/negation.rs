//! Negative class assertions derived from disjointness constraints.

use crate::axiom::Axiom;
use crate::expression::ClassExpression;
use crate::store::AxiomStore;
use rustc_hash::FxHashSet;

/// Derives negative class assertions from the disjointness constraints of
/// the store.
///
/// Each two-member `DisjointClasses(a, b)` axiom decomposes into the
/// implications `a ⊑ ¬b` and `b ⊑ ¬a`. For every individual directly
/// asserted to belong to an implication's left side, a `ClassAssertion`
/// placing that individual in the negation normal form of the right side is
/// derived, unless already present. Disjointness axioms with more or fewer
/// than two members do not decompose this way and are left untouched.
///
/// An implication whose sides mention the complement of owl:Nothing is
/// skipped: asserting an individual into a doubly negated bottom carries no
/// information.
pub fn derive_negative_assertions(store: &AxiomStore) -> Vec<Axiom> {
    let not_nothing = ClassExpression::complement(ClassExpression::nothing());
    let mut derived = Vec::new();
    let mut seen: FxHashSet<Axiom> = FxHashSet::default();

    for members in store.disjoint_classes_axioms() {
        let [a, b] = members else {
            tracing::debug!(
                members = members.len(),
                "skipping disjointness axiom that does not decompose into two implications"
            );
            continue;
        };
        for (sub, negated) in [(a, b), (b, a)] {
            let super_class = ClassExpression::complement(negated.clone());
            if mentions(sub, &not_nothing) || mentions(&super_class, &not_nothing) {
                continue;
            }
            let derived_class = super_class.nnf();
            for individual in store.individuals_asserted_in(sub) {
                let assertion = Axiom::ClassAssertion {
                    class: derived_class.clone(),
                    individual: individual.clone(),
                };
                if !store.contains(&assertion) && seen.insert(assertion.clone()) {
                    derived.push(assertion);
                }
            }
        }
    }
    derived
}

/// Checks whether `needle` occurs anywhere inside `expression`.
fn mentions(expression: &ClassExpression, needle: &ClassExpression) -> bool {
    if expression == needle {
        return true;
    }
    match expression {
        ClassExpression::Class(_) => false,
        ClassExpression::ObjectComplementOf(inner) => mentions(inner, needle),
        ClassExpression::ObjectIntersectionOf(operands)
        | ClassExpression::ObjectUnionOf(operands) => {
            operands.iter().any(|operand| mentions(operand, needle))
        }
        ClassExpression::ObjectSomeValuesFrom { filler, .. }
        | ClassExpression::ObjectAllValuesFrom { filler, .. } => mentions(filler, needle),
        ClassExpression::ObjectMinCardinality { filler, .. }
        | ClassExpression::ObjectMaxCardinality { filler, .. } => filler
            .as_ref()
            .is_some_and(|filler| mentions(filler, needle)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Individual;
    use oxrdf::NamedNode;

    fn class(suffix: &str) -> ClassExpression {
        ClassExpression::class(NamedNode::new_unchecked(format!(
            "http://example.com/{suffix}"
        )))
    }

    fn individual(suffix: &str) -> Individual {
        Individual::Named(NamedNode::new_unchecked(format!(
            "http://example.com/{suffix}"
        )))
    }

    fn store_of(axioms: Vec<Axiom>) -> AxiomStore {
        axioms.into_iter().collect()
    }

    #[test]
    fn test_derives_negated_membership() {
        let store = store_of(vec![
            Axiom::disjoint_classes(vec![class("A"), class("B")]),
            Axiom::class_assertion(class("A"), individual("x")),
        ]);
        let derived = derive_negative_assertions(&store);
        assert_eq!(
            derived,
            vec![Axiom::class_assertion(
                ClassExpression::complement(class("B")),
                individual("x"),
            )]
        );
    }

    #[test]
    fn test_derives_both_directions() {
        let store = store_of(vec![
            Axiom::disjoint_classes(vec![class("A"), class("B")]),
            Axiom::class_assertion(class("A"), individual("x")),
            Axiom::class_assertion(class("B"), individual("y")),
        ]);
        let derived = derive_negative_assertions(&store);
        assert!(derived.contains(&Axiom::class_assertion(
            ClassExpression::complement(class("B")),
            individual("x"),
        )));
        assert!(derived.contains(&Axiom::class_assertion(
            ClassExpression::complement(class("A")),
            individual("y"),
        )));
        // x is not placed in the complement of its own class by this pair.
        assert!(!derived.contains(&Axiom::class_assertion(
            ClassExpression::complement(class("A")),
            individual("x"),
        )));
        assert_eq!(derived.len(), 2);
    }

    #[test]
    fn test_negated_side_is_normalized() {
        let not_b = ClassExpression::complement(class("B"));
        let store = store_of(vec![
            Axiom::disjoint_classes(vec![class("A"), not_b]),
            Axiom::class_assertion(class("A"), individual("x")),
        ]);
        let derived = derive_negative_assertions(&store);
        // The complement of the second side collapses back to B.
        assert!(derived.contains(&Axiom::class_assertion(class("B"), individual("x"))));
    }

    #[test]
    fn test_skips_complement_of_nothing() {
        let top_as_negated_bottom = ClassExpression::complement(ClassExpression::nothing());
        let store = store_of(vec![
            Axiom::disjoint_classes(vec![class("A"), top_as_negated_bottom]),
            Axiom::class_assertion(class("A"), individual("x")),
        ]);
        let derived = derive_negative_assertions(&store);
        assert!(derived.is_empty());
    }

    #[test]
    fn test_nary_disjointness_is_left_untouched() {
        let store = store_of(vec![
            Axiom::disjoint_classes(vec![class("A"), class("B"), class("C")]),
            Axiom::class_assertion(class("A"), individual("x")),
        ]);
        let derived = derive_negative_assertions(&store);
        assert!(derived.is_empty());
    }

    #[test]
    fn test_existing_assertions_are_not_rederived() {
        let not_b = ClassExpression::complement(class("B"));
        let store = store_of(vec![
            Axiom::disjoint_classes(vec![class("A"), class("B")]),
            Axiom::class_assertion(class("A"), individual("x")),
            Axiom::class_assertion(not_b, individual("x")),
        ]);
        let derived = derive_negative_assertions(&store);
        assert!(derived.is_empty());
    }
}
