//! Knowledge base augmentation and minimal entailment justifications.
//!
//! This crate takes a consistent, coherent knowledge base of OWL 2 axioms,
//! augments it with derived facts and computes, for each entailed axiom, one
//! minimal justification - a subset of axioms that still entails it and from
//! which no member can be removed. It provides:
//! - An axiom data model (class expressions, axioms, deduplicated stores)
//! - Augmentation: reasoner-supplied base inferences, negative class
//!   assertions derived from disjointness, transitive closure of subsumption
//! - Black-box justification search by divide and conquer contraction
//!   against an entailment oracle
//!
//! Description logic reasoning itself stays external: callers supply a
//! [`Reasoner`] implementation and a [`ReasonerFactory`] minting a fresh
//! instance per entailment check. Ontology parsing and serialization are out
//! of scope; stores are built programmatically.
//!
//! # Example
//! ```
//! use oxjustify::{Axiom, AxiomStore, ClassExpression};
//! use oxrdf::NamedNode;
//!
//! let a = ClassExpression::class(NamedNode::new("http://example.com/A")?);
//! let b = ClassExpression::class(NamedNode::new("http://example.com/B")?);
//! let c = ClassExpression::class(NamedNode::new("http://example.com/C")?);
//!
//! let mut store = AxiomStore::new();
//! store.insert(Axiom::subclass_of(a.clone(), b.clone()));
//! store.insert(Axiom::subclass_of(b, c.clone()));
//! store.merge(oxjustify::subsumption_closure(&store));
//! assert!(store.contains(&Axiom::subclass_of(a, c)));
//! # Ok::<_, oxiri::IriParseError>(())
//! ```

mod augment;
mod axiom;
mod closure;
mod driver;
mod entity;
mod error;
mod explain;
mod expression;
mod negation;
mod reasoner;
mod store;
pub mod vocab;

pub use augment::augment;
pub use axiom::{Axiom, AxiomKind};
pub use closure::subsumption_closure;
pub use driver::{explain_all, ExplanationOutcome, ExplanationReport};
pub use entity::{Individual, ObjectProperty, OwlClass};
pub use error::{AugmentationError, ExplanationError, ReasonerError};
pub use explain::{explain, ExplanationConfig, Justification};
pub use expression::ClassExpression;
pub use negation::derive_negative_assertions;
pub use reasoner::{Reasoner, ReasonerFactory};
pub use store::AxiomStore;
