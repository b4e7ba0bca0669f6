//! Complex → simplified.

use crate::error::ConversionError;
use crate::expression::{DataLookupFunc, Expression, KeyLookupFunc, RelationFunc};
use crate::simplicity::{check_simple, NotSimpleReason};
use crate::simplified::{
    SimpleLogicalExpression, SimpleSubexpression, SimpleSubexpressionValue, SimplifiedExpression,
};
use crate::types::LogicalOperator;
use serde_json::Value;

/// Converts a simple expression into its simplified form.
///
/// A single relation becomes a one-element logical expression with the
/// default operator, and `null` becomes an empty one.
#[tracing::instrument(level = "trace", skip_all)]
pub fn to_simple(expr: &Expression) -> Result<SimplifiedExpression, ConversionError> {
    check_simple(expr).map_err(|reason| not_simple(expr, reason))?;

    match expr {
        Expression::Bool(b) => Ok(SimplifiedExpression::Boolean(*b)),
        Expression::Null => Ok(SimplifiedExpression::empty()),
        Expression::Relation(relation) => Ok(SimplifiedExpression::Logical(
            SimpleLogicalExpression::new(
                LogicalOperator::default(),
                vec![convert_relation(relation)?],
            ),
        )),
        Expression::LogicalTuple(tuple) => {
            let subexpressions = tuple
                .members
                .iter()
                .map(|member| match member {
                    Expression::Relation(relation) => convert_relation(relation),
                    other => Err(not_simple(other, NotSimpleReason::LogicalMemberNotRelation)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SimplifiedExpression::Logical(SimpleLogicalExpression::new(
                tuple.operator,
                subexpressions,
            )))
        }
        other => Err(not_simple(other, NotSimpleReason::NotACondition)),
    }
}

/// [`to_simple`] on a raw JSON value.
pub fn to_simple_json(value: &Value) -> Result<SimplifiedExpression, ConversionError> {
    to_simple(&Expression::from_json(value))
}

fn convert_relation(relation: &RelationFunc) -> Result<SimpleSubexpression, ConversionError> {
    Ok(SimpleSubexpression::new(
        relation.operator,
        convert_value(&relation.first)?,
        convert_value(&relation.second)?,
    ))
}

fn convert_value(expr: &Expression) -> Result<SimpleSubexpressionValue, ConversionError> {
    let value = match expr {
        Expression::DataLookup(DataLookupFunc::Component(key)) => {
            SimpleSubexpressionValue::Component {
                id: lookup_key(key)?,
            }
        }
        Expression::DataLookup(DataLookupFunc::DataModel(key)) => {
            SimpleSubexpressionValue::DataModel {
                path: lookup_key(key)?,
            }
        }
        Expression::DataLookup(DataLookupFunc::GatewayAction) => {
            SimpleSubexpressionValue::GatewayAction
        }
        Expression::KeyLookup(KeyLookupFunc::InstanceContext(key)) => {
            SimpleSubexpressionValue::InstanceContext { key: *key }
        }
        Expression::String(value) => SimpleSubexpressionValue::String {
            value: value.clone(),
        },
        Expression::Number(value) => SimpleSubexpressionValue::Number {
            value: value.clone(),
        },
        Expression::Bool(value) => SimpleSubexpressionValue::Boolean { value: *value },
        Expression::Null
        | Expression::Relation(_)
        | Expression::LogicalTuple(_)
        | Expression::Func { .. }
        | Expression::Unrecognized(_) => SimpleSubexpressionValue::Null,
    };
    Ok(value)
}

fn lookup_key(key: &Expression) -> Result<String, ConversionError> {
    match key {
        Expression::String(key) => Ok(key.clone()),
        other => Err(not_simple(other, NotSimpleReason::ComplexLookupKey)),
    }
}

fn not_simple(expr: &Expression, reason: NotSimpleReason) -> ConversionError {
    ConversionError::NotSimple {
        expression: expr.to_string(),
        reason,
    }
}
