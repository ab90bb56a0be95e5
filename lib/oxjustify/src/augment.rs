//! The augmentation pipeline.

use crate::closure::subsumption_closure;
use crate::error::AugmentationError;
use crate::negation::derive_negative_assertions;
use crate::reasoner::Reasoner;
use crate::store::AxiomStore;

/// Augments a base knowledge base with derived facts.
///
/// The pipeline runs a single deterministic pass:
///
/// 1. the base store must be consistent and coherent, otherwise augmentation
///    aborts without deriving anything;
/// 2. the reasoner's base inferred axioms are merged into a fresh store
///    together with every axiom of the base;
/// 3. negative class assertions are derived from disjointness constraints;
/// 4. the transitive closure of subsumption is materialized.
///
/// Steps 3 and 4 each run once, in this order; the pipeline does not iterate
/// them to a fixpoint, so a membership fact that only becomes explicit
/// through closure does not feed back into negative assertion derivation.
/// The augmented store is a superset of the base: axioms are only ever
/// added, never removed or rewritten.
pub fn augment<R: Reasoner>(
    base: &AxiomStore,
    reasoner: &mut R,
) -> Result<AxiomStore, AugmentationError> {
    if !reasoner.is_consistent(base)? {
        return Err(AugmentationError::InconsistentBase);
    }
    let unsatisfiable = reasoner.unsatisfiable_classes(base)?;
    if !unsatisfiable.is_empty() {
        return Err(AugmentationError::IncoherentBase { unsatisfiable });
    }

    let mut augmented = base.clone();

    let inferred = reasoner.inferred_axioms(base)?;
    let added = augmented.merge(inferred);
    tracing::debug!(added, "merged reasoner base inferences");

    let added = augmented.merge(derive_negative_assertions(&augmented));
    tracing::debug!(added, "derived negative class assertions");

    let added = augmented.merge(subsumption_closure(&augmented));
    tracing::debug!(added, "materialized subsumption closure");

    Ok(augmented)
}
