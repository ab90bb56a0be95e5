//! Batch explanation of every logical axiom in a store.

use crate::axiom::Axiom;
use crate::error::ExplanationError;
use crate::explain::{explain, ExplanationConfig, Justification};
use crate::reasoner::ReasonerFactory;
use crate::store::AxiomStore;
use std::fmt;

/// The outcome of one explanation search.
#[derive(Debug, Clone)]
pub enum ExplanationOutcome {
    /// A locally minimal justification was found.
    Explained(Justification),
    /// The oracle does not consider the target entailed by the universe.
    NotEntailed,
    /// The search for this target was abandoned.
    Failed(ExplanationError),
}

/// The per-target results of a batch explanation run.
#[derive(Debug, Clone, Default)]
pub struct ExplanationReport {
    entries: Vec<(Axiom, ExplanationOutcome)>,
}

impl ExplanationReport {
    /// Returns the number of targets processed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no target was processed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over targets and their outcomes, in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&Axiom, &ExplanationOutcome)> {
        self.entries.iter().map(|(axiom, outcome)| (axiom, outcome))
    }

    /// Returns the targets with a justification.
    pub fn explained(&self) -> impl Iterator<Item = (&Axiom, &Justification)> {
        self.entries.iter().filter_map(|(axiom, outcome)| match outcome {
            ExplanationOutcome::Explained(justification) => Some((axiom, justification)),
            _ => None,
        })
    }

    /// Returns the targets whose search was abandoned.
    pub fn failed(&self) -> impl Iterator<Item = (&Axiom, &ExplanationError)> {
        self.entries.iter().filter_map(|(axiom, outcome)| match outcome {
            ExplanationOutcome::Failed(error) => Some((axiom, error)),
            _ => None,
        })
    }
}

impl fmt::Display for ExplanationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let explained = self.explained().count();
        let failed = self.failed().count();
        write!(
            f,
            "ExplanationReport(targets={}, explained={explained}, failed={failed})",
            self.entries.len()
        )
    }
}

/// Searches a justification for every logical axiom of the universe.
///
/// Targets are processed sequentially in store order. A failed search is
/// recorded and the batch moves on to the next target; one pathological
/// axiom or crashing oracle call never aborts the run.
pub fn explain_all<F: ReasonerFactory>(
    universe: &AxiomStore,
    factory: &F,
    config: &ExplanationConfig,
) -> ExplanationReport {
    let mut entries = Vec::new();
    for target in universe.logical_axioms() {
        let outcome = match explain(target, universe, factory, config) {
            Ok(Some(justification)) => {
                tracing::debug!(%target, size = justification.len(), "justification found");
                ExplanationOutcome::Explained(justification)
            }
            Ok(None) => {
                tracing::debug!(%target, "target not entailed by its own universe");
                ExplanationOutcome::NotEntailed
            }
            Err(error) => {
                tracing::debug!(%target, %error, "explanation abandoned");
                ExplanationOutcome::Failed(error)
            }
        };
        entries.push((target.clone(), outcome));
    }
    ExplanationReport { entries }
}
