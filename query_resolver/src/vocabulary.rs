//! Operator and combinator vocabulary
//!
//! The closed sets of comparison operators and boolean combinators a filter
//! level may be configured with, and which operand shapes each operator
//! accepts.

use crate::errors::ConditionError;
use serde::{Deserialize, Serialize};

/// Comparison operators applied to the field entries of one filter level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "=")]
    Eq, // =
    #[serde(rename = "<>")]
    Ne, // <>
    #[serde(rename = "<=")]
    Lte, // <=
    #[serde(rename = ">=")]
    Gte, // >=
    #[serde(rename = "<")]
    Lt, // <
    #[serde(rename = ">")]
    Gt, // >
    #[serde(rename = "LIKE")]
    Like, // LIKE
    #[serde(rename = "BETWEEN")]
    Between, // BETWEEN
}

/// Boolean combinators joining sibling conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Combinator {
    #[default]
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

/// Operand shapes an operator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandShape {
    pub scalar: bool,
    pub list: bool,
    /// Exact number of list elements, if fixed
    pub list_arity: Option<usize>,
}

/// Every operator, in the order they are reported in errors
pub const OPERATORS: [Operator; 8] = [
    Operator::Eq,
    Operator::Ne,
    Operator::Lte,
    Operator::Gte,
    Operator::Lt,
    Operator::Gt,
    Operator::Like,
    Operator::Between,
];

pub const COMBINATORS: [Combinator; 2] = [Combinator::And, Combinator::Or];

const SCALAR_ONLY: OperandShape = OperandShape {
    scalar: true,
    list: false,
    list_arity: None,
};

const SCALAR_OR_LIST: OperandShape = OperandShape {
    scalar: true,
    list: true,
    list_arity: None,
};

const PAIR_ONLY: OperandShape = OperandShape {
    scalar: false,
    list: true,
    list_arity: Some(2),
};

/// Permitted operand shape per operator. LIKE is scalar-only.
pub const OPERAND_SHAPES: [(Operator, OperandShape); 8] = [
    (Operator::Eq, SCALAR_OR_LIST),
    (Operator::Ne, SCALAR_OR_LIST),
    (Operator::Lte, SCALAR_ONLY),
    (Operator::Gte, SCALAR_ONLY),
    (Operator::Lt, SCALAR_ONLY),
    (Operator::Gt, SCALAR_ONLY),
    (Operator::Like, SCALAR_ONLY),
    (Operator::Between, PAIR_ONLY),
];

impl Operator {
    /// Convert operator to SQL token
    pub fn to_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Lte => "<=",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Like => "LIKE",
            Operator::Between => "BETWEEN",
        }
    }

    /// Look up the operand shapes this operator accepts
    pub fn operand_shape(&self) -> OperandShape {
        OPERAND_SHAPES
            .iter()
            .find(|(operator, _)| operator == self)
            .map(|(_, shape)| *shape)
            .unwrap_or(SCALAR_ONLY)
    }

    /// Check that a scalar operand is accepted
    pub fn check_scalar(&self) -> Result<(), ConditionError> {
        if self.operand_shape().scalar {
            Ok(())
        } else {
            Err(ConditionError::InvalidOperandForOperator {
                operator: self.to_sql(),
                reason: "needs an array as its value",
            })
        }
    }

    /// Check that a list operand of `len` elements is accepted
    pub fn check_list(&self, len: usize) -> Result<(), ConditionError> {
        let shape = self.operand_shape();
        if !shape.list {
            return Err(ConditionError::InvalidOperandForOperator {
                operator: self.to_sql(),
                reason: "cannot have an array as its value",
            });
        }

        match shape.list_arity {
            Some(arity) if arity != len => Err(ConditionError::InvalidBetweenArity(len)),
            _ => Ok(()),
        }
    }
}

impl Combinator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_sql())
    }
}

impl std::fmt::Display for Combinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_sql())
    }
}

fn allowed_list<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate an `@operator` token. Matching is exact.
pub fn validate_operator(token: &str) -> Result<Operator, ConditionError> {
    OPERATORS
        .iter()
        .find(|operator| operator.to_sql() == token)
        .copied()
        .ok_or_else(|| ConditionError::InvalidConfig {
            key: "@operator",
            value: token.to_string(),
            allowed: allowed_list(&OPERATORS),
        })
}

/// Validate an `@type` token. Matching is exact.
pub fn validate_combinator(token: &str) -> Result<Combinator, ConditionError> {
    COMBINATORS
        .iter()
        .find(|combinator| combinator.to_sql() == token)
        .copied()
        .ok_or_else(|| ConditionError::InvalidConfig {
            key: "@type",
            value: token.to_string(),
            allowed: allowed_list(&COMBINATORS),
        })
}

impl std::str::FromStr for Operator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_operator(s)
    }
}

impl std::str::FromStr for Combinator {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_combinator(s)
    }
}
