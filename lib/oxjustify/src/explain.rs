//! Black-box minimal justification search.

use crate::axiom::Axiom;
use crate::error::ExplanationError;
use crate::reasoner::{Reasoner, ReasonerFactory};
use crate::store::AxiomStore;
use std::fmt;
use std::time::{Duration, Instant};

/// Configuration for the explanation search.
#[derive(Debug, Clone, Default)]
pub struct ExplanationConfig {
    /// Maximum wall clock time for a single search (None = unlimited).
    ///
    /// The deadline is checked before every entailment check; expiry
    /// abandons the search for the current target only.
    pub timeout: Option<Duration>,
}

/// A minimal justification for an entailed axiom.
///
/// The justification entails its target, and removing any single member
/// breaks the entailment (local minimality; it is not necessarily the
/// globally smallest such subset). The member order follows the universe
/// the search ran against, so reports are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Justification {
    axioms: Vec<Axiom>,
}

impl Justification {
    fn new(axioms: Vec<Axiom>) -> Self {
        Self { axioms }
    }

    /// Returns the number of axioms in the justification.
    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    /// Returns true if the justification is empty.
    ///
    /// An empty justification means the target is a tautology, entailed by
    /// the empty axiom set.
    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    /// Returns the axioms of the justification.
    pub fn axioms(&self) -> &[Axiom] {
        &self.axioms
    }

    /// Checks if an axiom is part of the justification.
    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }

    /// Returns an iterator over the axioms of the justification.
    pub fn iter(&self) -> std::slice::Iter<'_, Axiom> {
        self.axioms.iter()
    }
}

impl<'a> IntoIterator for &'a Justification {
    type Item = &'a Axiom;
    type IntoIter = std::slice::Iter<'a, Axiom>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, axiom) in self.axioms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{axiom}")?;
        }
        write!(f, "}}")
    }
}

/// Searches for one minimal justification of a target axiom.
///
/// The candidate universe is the full axiom store the target was derived
/// from. Before any contraction the full universe is checked against the
/// oracle; if it does not entail the target the search returns `Ok(None)`
/// rather than an incorrect subset. Otherwise the universe is contracted by
/// divide and conquer: the working set is split into chunks (halves first),
/// each chunk's complement and then each chunk alone is tested, the search
/// recurses into any entailing proper subset, and the granularity doubles
/// when no chunk at the current size can be dropped. Once single axioms can
/// no longer be removed the working set is locally minimal.
///
/// Candidates are grouped by structural kind before contraction so that
/// related axioms (all class assertions, all subsumptions, ...) tend to be
/// dropped as a unit. This is a search heuristic, not a correctness
/// requirement.
///
/// Every entailment check runs against a freshly built candidate store
/// evaluated by a fresh reasoner from the factory, so no solver state leaks
/// between checks.
pub fn explain<F: ReasonerFactory>(
    target: &Axiom,
    universe: &AxiomStore,
    factory: &F,
    config: &ExplanationConfig,
) -> Result<Option<Justification>, ExplanationError> {
    if !target.is_logical() {
        return Err(ExplanationError::NonLogicalTarget);
    }
    let deadline = config.timeout.map(|timeout| Instant::now() + timeout);

    let mut current: Vec<&Axiom> = universe.iter().collect();
    current.sort_by_key(|axiom| axiom.kind());

    if !check(factory, &current, target, deadline)? {
        return Ok(None);
    }
    if check(factory, &[], target, deadline)? {
        return Ok(Some(Justification::new(Vec::new())));
    }

    let mut granularity = 2;
    while current.len() >= 2 {
        let chunk_size = current.len().div_ceil(granularity);
        let chunks: Vec<Vec<&Axiom>> = current
            .chunks(chunk_size)
            .map(<[&Axiom]>::to_vec)
            .collect();

        let mut reduced = false;

        // Dropping a chunk keeps more context in the working set, so the
        // complements are tried first.
        for removed in 0..chunks.len() {
            let complement: Vec<&Axiom> = chunks
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != removed)
                .flat_map(|(_, chunk)| chunk.iter().copied())
                .collect();
            if complement.len() < current.len() && check(factory, &complement, target, deadline)? {
                current = complement;
                granularity = (granularity - 1).max(2);
                reduced = true;
                break;
            }
        }
        if reduced {
            continue;
        }

        for chunk in &chunks {
            if chunk.len() < current.len() && check(factory, chunk, target, deadline)? {
                current = chunk.clone();
                granularity = 2;
                reduced = true;
                break;
            }
        }
        if reduced {
            continue;
        }

        if granularity >= current.len() {
            break;
        }
        granularity = (granularity * 2).min(current.len());
    }

    Ok(Some(Justification::new(
        current.into_iter().cloned().collect(),
    )))
}

fn check<F: ReasonerFactory>(
    factory: &F,
    candidate: &[&Axiom],
    target: &Axiom,
    deadline: Option<Instant>,
) -> Result<bool, ExplanationError> {
    if let Some(deadline) = deadline {
        if Instant::now() >= deadline {
            return Err(ExplanationError::Timeout);
        }
    }
    let store: AxiomStore = candidate.iter().map(|&axiom| axiom.clone()).collect();
    let mut reasoner = factory.create_reasoner();
    let entailed = reasoner.entails(&store, target)?;
    tracing::trace!(candidates = store.len(), entailed, "entailment check");
    Ok(entailed)
}
