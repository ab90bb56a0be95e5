//! Error types for augmentation and explanation.

use crate::entity::OwlClass;

/// Error surfaced by an external [`Reasoner`](crate::Reasoner) implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReasonerError {
    /// The reasoner exceeded its configured time budget.
    #[error("reasoning timed out")]
    Timeout,
    /// The knowledge base uses a construct the reasoner does not support.
    #[error("unsupported construct: {0}")]
    Unsupported(String),
    /// Any other reasoner-internal failure.
    #[error("{0}")]
    Internal(String),
}

/// Error returned when the augmentation pipeline aborts.
///
/// All variants are terminal for the pipeline: no derived facts are produced
/// against a base that fails its checks.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AugmentationError {
    /// The base knowledge base is inconsistent.
    #[error("the base knowledge base is inconsistent")]
    InconsistentBase,
    /// The base knowledge base has unsatisfiable classes other than owl:Nothing.
    #[error("the base knowledge base is incoherent ({} unsatisfiable classes)", unsatisfiable.len())]
    IncoherentBase {
        /// The unsatisfiable non-bottom classes the reasoner reported.
        unsatisfiable: Vec<OwlClass>,
    },
    /// The reasoner failed while checking or augmenting the base.
    #[error("reasoner failure: {0}")]
    Reasoner(#[from] ReasonerError),
}

/// Error abandoning the explanation search for a single target axiom.
///
/// These failures are local: the batch driver records them and continues
/// with its remaining targets.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExplanationError {
    /// The target axiom carries no logical content (e.g. a declaration).
    #[error("the target axiom is not a logical axiom")]
    NonLogicalTarget,
    /// The search exceeded its configured time budget.
    #[error("explanation search timed out")]
    Timeout,
    /// An entailment check failed.
    #[error("entailment oracle failure: {0}")]
    Oracle(#[from] ReasonerError),
}
