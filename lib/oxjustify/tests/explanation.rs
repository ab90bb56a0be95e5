//! End-to-end explanation scenarios.

mod support;

use oxjustify::{
    augment, explain, explain_all, Axiom, AxiomStore, ExplanationConfig, ExplanationOutcome,
    Justification, Reasoner,
};
use support::{class, individual, TestReasoner};

fn assert_locally_minimal(justification: &Justification, target: &Axiom) {
    let mut oracle = TestReasoner::new();
    let full: AxiomStore = justification.iter().cloned().collect();
    assert!(
        oracle.entails(&full, target).unwrap(),
        "justification does not entail its target"
    );
    for removed in justification {
        let rest: AxiomStore = justification
            .iter()
            .filter(|axiom| *axiom != removed)
            .cloned()
            .collect();
        assert!(
            !oracle.entails(&rest, target).unwrap(),
            "justification not minimal: {removed} is redundant"
        );
    }
}

#[test]
fn test_derived_subsumption_has_minimal_justification() {
    // The universe of an augmented chain: the explicit A⊑C is itself
    // sufficient, as is the pair {A⊑B, B⊑C}; either answer is accepted as
    // long as it is locally minimal.
    let universe: AxiomStore = [
        Axiom::subclass_of(class("A"), class("B")),
        Axiom::subclass_of(class("B"), class("C")),
        Axiom::subclass_of(class("A"), class("C")),
    ]
    .into_iter()
    .collect();
    let target = Axiom::subclass_of(class("A"), class("C"));

    let justification = explain(
        &target,
        &universe,
        &TestReasoner::new,
        &ExplanationConfig::default(),
    )
    .unwrap()
    .expect("target is entailed");

    assert_locally_minimal(&justification, &target);
}

#[test]
fn test_unrelated_axioms_are_contracted_away() {
    let universe: AxiomStore = [
        Axiom::subclass_of(class("A"), class("B")),
        Axiom::subclass_of(class("B"), class("C")),
        Axiom::class_assertion(class("A"), individual("x")),
        Axiom::subclass_of(class("D"), class("E")),
        Axiom::class_assertion(class("E"), individual("y")),
    ]
    .into_iter()
    .collect();
    let target = Axiom::subclass_of(class("A"), class("C"));

    let justification = explain(
        &target,
        &universe,
        &TestReasoner::new,
        &ExplanationConfig::default(),
    )
    .unwrap()
    .expect("target is entailed");

    assert_locally_minimal(&justification, &target);
    assert!(!justification.contains(&Axiom::subclass_of(class("D"), class("E"))));
    assert!(!justification.contains(&Axiom::class_assertion(class("E"), individual("y"))));
}

#[test]
fn test_batch_isolation_of_oracle_failures() {
    let universe: AxiomStore = [
        Axiom::subclass_of(class("A"), class("B")),
        Axiom::subclass_of(class("B"), class("C")),
        Axiom::subclass_of(class("A"), class("C")),
    ]
    .into_iter()
    .collect();
    let poisoned = Axiom::subclass_of(class("B"), class("C"));

    let factory = {
        let poisoned = poisoned.clone();
        move || {
            let mut reasoner = TestReasoner::new();
            reasoner.fail_on = Some(poisoned.clone());
            reasoner
        }
    };
    let report = explain_all(&universe, &factory, &ExplanationConfig::default());

    assert_eq!(report.len(), 3);
    let failed: Vec<_> = report.failed().map(|(axiom, _)| axiom.clone()).collect();
    assert_eq!(failed, vec![poisoned]);
    // The sibling searches still succeed.
    assert_eq!(report.explained().count(), 2);
}

#[test]
fn test_declarations_are_not_explanation_targets() {
    let universe: AxiomStore = [
        Axiom::DeclareClass(support::owl_class("A")),
        Axiom::subclass_of(class("A"), class("B")),
    ]
    .into_iter()
    .collect();

    let report = explain_all(&universe, &TestReasoner::new, &ExplanationConfig::default());

    assert_eq!(report.len(), 1);
    let (target, outcome) = report.iter().next().unwrap();
    assert_eq!(target, &Axiom::subclass_of(class("A"), class("B")));
    assert!(matches!(outcome, ExplanationOutcome::Explained(_)));
}

#[test]
fn test_augment_then_explain_every_axiom() {
    let base: AxiomStore = [
        Axiom::subclass_of(class("A"), class("B")),
        Axiom::subclass_of(class("B"), class("C")),
        Axiom::class_assertion(class("A"), individual("x")),
        Axiom::disjoint_classes(vec![class("B"), class("D")]),
        Axiom::class_assertion(class("D"), individual("y")),
    ]
    .into_iter()
    .collect();

    let universe = augment(&base, &mut TestReasoner::new()).unwrap();
    let report = explain_all(&universe, &TestReasoner::new, &ExplanationConfig::default());

    assert_eq!(report.len(), universe.len());
    for (target, outcome) in report.iter() {
        match outcome {
            ExplanationOutcome::Explained(justification) => {
                assert_locally_minimal(justification, target);
            }
            other => panic!("no justification for {target}: {other:?}"),
        }
    }
}
