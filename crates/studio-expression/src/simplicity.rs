//! Decides whether a complex expression has a simplified form.
//!
//! The accepted subset is: `true`, `false`, `null`, a single relation, or a
//! logical tuple of relations. Each relation operand must be a primitive or a
//! single lookup with a plain key. This is the only gate in front of
//! [`to_simple`](crate::to_simple). The converter relies on it and handles
//! exactly these shapes.

use crate::expression::{DataLookupFunc, Expression, LogicalTupleFunc, RelationFunc};
use serde_json::Value;
use thiserror::Error;

/// Why an expression falls outside the simplified subset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotSimpleReason {
    #[error("top-level value is not a condition")]
    NotACondition,

    #[error("function \"{0}\" is not supported")]
    UnsupportedFunction(String),

    #[error("unrecognized expression shape")]
    Unrecognized,

    #[error("logical tuples need at least two members")]
    TooFewMembers,

    #[error("logical tuples cannot be nested")]
    NestedLogicalTuple,

    #[error("logical tuple members must be relations")]
    LogicalMemberNotRelation,

    #[error("lookup key must be a plain string")]
    ComplexLookupKey,

    #[error("relation operand must be a primitive or a single lookup")]
    UnsupportedOperand,
}

/// Returns `Ok(())` when `expr` is in the simplified subset, otherwise the
/// first reason it is not.
pub fn check_simple(expr: &Expression) -> Result<(), NotSimpleReason> {
    match expr {
        Expression::Null | Expression::Bool(_) => Ok(()),
        Expression::Relation(relation) => check_relation(relation),
        Expression::LogicalTuple(tuple) => check_logical_tuple(tuple),
        Expression::Number(_)
        | Expression::String(_)
        | Expression::DataLookup(_)
        | Expression::KeyLookup(_) => Err(NotSimpleReason::NotACondition),
        Expression::Func { name, .. } => Err(NotSimpleReason::UnsupportedFunction(name.clone())),
        Expression::Unrecognized(_) => Err(NotSimpleReason::Unrecognized),
    }
}

/// Returns `true` when `expr` can be converted with [`to_simple`](crate::to_simple).
pub fn is_simple(expr: &Expression) -> bool {
    match check_simple(expr) {
        Ok(()) => true,
        Err(reason) => {
            tracing::debug!(%reason, expression = %expr, "expression cannot be simplified");
            false
        }
    }
}

/// [`is_simple`] on a raw JSON value.
pub fn is_simple_json(value: &Value) -> bool {
    is_simple(&Expression::from_json(value))
}

/// Returns `true` when `expr` may stand as a relation operand.
pub fn is_simple_value(expr: &Expression) -> bool {
    check_value(expr).is_ok()
}

fn check_logical_tuple(tuple: &LogicalTupleFunc) -> Result<(), NotSimpleReason> {
    if tuple.members.len() < 2 {
        return Err(NotSimpleReason::TooFewMembers);
    }
    for member in &tuple.members {
        match member {
            Expression::Relation(relation) => check_relation(relation)?,
            Expression::LogicalTuple(_) => return Err(NotSimpleReason::NestedLogicalTuple),
            Expression::Func { name, .. } => {
                return Err(NotSimpleReason::UnsupportedFunction(name.clone()));
            }
            _ => return Err(NotSimpleReason::LogicalMemberNotRelation),
        }
    }
    Ok(())
}

fn check_relation(relation: &RelationFunc) -> Result<(), NotSimpleReason> {
    check_value(&relation.first)?;
    check_value(&relation.second)
}

fn check_value(expr: &Expression) -> Result<(), NotSimpleReason> {
    match expr {
        Expression::Null | Expression::Bool(_) | Expression::Number(_) | Expression::String(_) => {
            Ok(())
        }
        Expression::DataLookup(lookup) => check_lookup(lookup),
        Expression::KeyLookup(_) => Ok(()),
        Expression::Relation(_) | Expression::LogicalTuple(_) => {
            Err(NotSimpleReason::UnsupportedOperand)
        }
        Expression::Func { name, .. } => Err(NotSimpleReason::UnsupportedFunction(name.clone())),
        Expression::Unrecognized(_) => Err(NotSimpleReason::Unrecognized),
    }
}

fn check_lookup(lookup: &DataLookupFunc) -> Result<(), NotSimpleReason> {
    match lookup {
        DataLookupFunc::Component(key) | DataLookupFunc::DataModel(key) => match key.as_ref() {
            Expression::String(_) => Ok(()),
            _ => Err(NotSimpleReason::ComplexLookupKey),
        },
        DataLookupFunc::GatewayAction => Ok(()),
    }
}
