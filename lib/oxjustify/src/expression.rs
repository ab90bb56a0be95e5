//! Class expressions and their negation normal form.

use crate::entity::{ObjectProperty, OwlClass};
use crate::vocab::owl;
use std::fmt;

/// An OWL 2 class expression.
///
/// Class expressions describe sets of individuals through various
/// constructors. Expressions are immutable value objects compared and hashed
/// structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// A named class (atomic class)
    Class(OwlClass),

    /// ObjectComplementOf(C) - complement of a class
    ObjectComplementOf(Box<ClassExpression>),

    /// ObjectIntersectionOf(C1, ..., Cn) - intersection of classes
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// ObjectUnionOf(C1, ..., Cn) - union of classes
    ObjectUnionOf(Vec<ClassExpression>),

    /// ObjectSomeValuesFrom(P, C) - existential restriction
    ObjectSomeValuesFrom {
        property: ObjectProperty,
        filler: Box<ClassExpression>,
    },

    /// ObjectAllValuesFrom(P, C) - universal restriction
    ObjectAllValuesFrom {
        property: ObjectProperty,
        filler: Box<ClassExpression>,
    },

    /// ObjectMinCardinality(n, P) or ObjectMinCardinality(n, P, C)
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectProperty,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectMaxCardinality(n, P) or ObjectMaxCardinality(n, P, C)
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectProperty,
        filler: Option<Box<ClassExpression>>,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    pub fn class(c: impl Into<OwlClass>) -> Self {
        Self::Class(c.into())
    }

    /// The universal top concept, owl:Thing.
    pub fn thing() -> Self {
        Self::Class(OwlClass::new(owl::THING.into_owned()))
    }

    /// The universal bottom concept, owl:Nothing.
    pub fn nothing() -> Self {
        Self::Class(OwlClass::new(owl::NOTHING.into_owned()))
    }

    /// Creates the complement of a class expression.
    pub fn complement(c: ClassExpression) -> Self {
        Self::ObjectComplementOf(Box::new(c))
    }

    /// Creates an intersection of classes.
    pub fn intersection(classes: Vec<ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(classes)
    }

    /// Creates a union of classes.
    pub fn union(classes: Vec<ClassExpression>) -> Self {
        Self::ObjectUnionOf(classes)
    }

    /// Creates an existential restriction.
    pub fn some_values_from(property: impl Into<ObjectProperty>, filler: ClassExpression) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Creates a universal restriction.
    pub fn all_values_from(property: impl Into<ObjectProperty>, filler: ClassExpression) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Returns true if this is a named class.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the named class if this is one.
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the negation normal form of this expression.
    ///
    /// In negation normal form complements apply only to named classes.
    /// Nested complements are eliminated, intersections and unions are
    /// rewritten by De Morgan's laws, and quantifiers and cardinality
    /// restrictions by their duals.
    pub fn nnf(&self) -> Self {
        match self {
            Self::Class(_) => self.clone(),
            Self::ObjectComplementOf(inner) => inner.negation_nnf(),
            Self::ObjectIntersectionOf(operands) => {
                Self::ObjectIntersectionOf(operands.iter().map(Self::nnf).collect())
            }
            Self::ObjectUnionOf(operands) => {
                Self::ObjectUnionOf(operands.iter().map(Self::nnf).collect())
            }
            Self::ObjectSomeValuesFrom { property, filler } => Self::ObjectSomeValuesFrom {
                property: property.clone(),
                filler: Box::new(filler.nnf()),
            },
            Self::ObjectAllValuesFrom { property, filler } => Self::ObjectAllValuesFrom {
                property: property.clone(),
                filler: Box::new(filler.nnf()),
            },
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => Self::ObjectMinCardinality {
                cardinality: *cardinality,
                property: property.clone(),
                filler: filler.as_ref().map(|f| Box::new(f.nnf())),
            },
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => Self::ObjectMaxCardinality {
                cardinality: *cardinality,
                property: property.clone(),
                filler: filler.as_ref().map(|f| Box::new(f.nnf())),
            },
        }
    }

    /// Returns the negation normal form of the complement of this expression.
    fn negation_nnf(&self) -> Self {
        match self {
            Self::Class(_) => Self::complement(self.clone()),
            Self::ObjectComplementOf(inner) => inner.nnf(),
            Self::ObjectIntersectionOf(operands) => {
                Self::ObjectUnionOf(operands.iter().map(Self::negation_nnf).collect())
            }
            Self::ObjectUnionOf(operands) => {
                Self::ObjectIntersectionOf(operands.iter().map(Self::negation_nnf).collect())
            }
            Self::ObjectSomeValuesFrom { property, filler } => Self::ObjectAllValuesFrom {
                property: property.clone(),
                filler: Box::new(filler.negation_nnf()),
            },
            Self::ObjectAllValuesFrom { property, filler } => Self::ObjectSomeValuesFrom {
                property: property.clone(),
                filler: Box::new(filler.negation_nnf()),
            },
            // The cardinality duals keep the filler positive:
            // not(>= n P.C) is (<= n-1 P.C), and not(>= 0 P.C) is bottom.
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => {
                if *cardinality == 0 {
                    Self::nothing()
                } else {
                    Self::ObjectMaxCardinality {
                        cardinality: cardinality - 1,
                        property: property.clone(),
                        filler: filler.as_ref().map(|f| Box::new(f.nnf())),
                    }
                }
            }
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => Self::ObjectMinCardinality {
                cardinality: cardinality + 1,
                property: property.clone(),
                filler: filler.as_ref().map(|f| Box::new(f.nnf())),
            },
        }
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(c: OwlClass) -> Self {
        Self::Class(c)
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(c) => write!(f, "{c}"),
            Self::ObjectComplementOf(inner) => write!(f, "ObjectComplementOf({inner})"),
            Self::ObjectIntersectionOf(operands) => {
                write!(f, "ObjectIntersectionOf(")?;
                fmt_operands(f, operands)?;
                write!(f, ")")
            }
            Self::ObjectUnionOf(operands) => {
                write!(f, "ObjectUnionOf(")?;
                fmt_operands(f, operands)?;
                write!(f, ")")
            }
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => {
                write!(f, "ObjectMinCardinality({cardinality} {property}")?;
                if let Some(filler) = filler {
                    write!(f, " {filler}")?;
                }
                write!(f, ")")
            }
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => {
                write!(f, "ObjectMaxCardinality({cardinality} {property}")?;
                if let Some(filler) = filler {
                    write!(f, " {filler}")?;
                }
                write!(f, ")")
            }
        }
    }
}

fn fmt_operands(f: &mut fmt::Formatter<'_>, operands: &[ClassExpression]) -> fmt::Result {
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{operand}")?;
    }
    Ok(())
}
