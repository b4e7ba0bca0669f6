//! Simplified → complex.

use crate::expression::{DataLookupFunc, Expression, KeyLookupFunc, LogicalTupleFunc};
use crate::simplified::{
    SimpleLogicalExpression, SimpleSubexpression, SimpleSubexpressionValue, SimplifiedExpression,
};
use serde_json::Value;

/// Converts a simplified expression back into the complex form.
///
/// No subexpressions give `null`. A single subexpression gives a bare
/// relation and the logical operator is dropped.
#[tracing::instrument(level = "trace", skip_all)]
pub fn to_complex(simple: &SimplifiedExpression) -> Expression {
    match simple {
        SimplifiedExpression::Boolean(b) => Expression::Bool(*b),
        SimplifiedExpression::Logical(logical) => logical_to_complex(logical),
    }
}

/// [`to_complex`] producing the JSON wire form.
pub fn to_complex_json(simple: &SimplifiedExpression) -> Value {
    to_complex(simple).to_json()
}

fn logical_to_complex(logical: &SimpleLogicalExpression) -> Expression {
    match logical.subexpressions.as_slice() {
        [] => Expression::Null,
        [single] => relation_to_complex(single),
        subexpressions => Expression::LogicalTuple(LogicalTupleFunc {
            operator: logical.logical_operator,
            members: subexpressions.iter().map(relation_to_complex).collect(),
        }),
    }
}

fn relation_to_complex(subexpression: &SimpleSubexpression) -> Expression {
    Expression::relation(
        subexpression.relational_operator,
        value_to_complex(&subexpression.first_operand),
        value_to_complex(&subexpression.second_operand),
    )
}

/// Converts one operand into its complex form.
pub fn value_to_complex(value: &SimpleSubexpressionValue) -> Expression {
    match value {
        SimpleSubexpressionValue::Component { id } => Expression::component(id.clone()),
        SimpleSubexpressionValue::DataModel { path } => Expression::data_model(path.clone()),
        SimpleSubexpressionValue::InstanceContext { key } => {
            Expression::KeyLookup(KeyLookupFunc::InstanceContext(*key))
        }
        SimpleSubexpressionValue::GatewayAction => {
            Expression::DataLookup(DataLookupFunc::GatewayAction)
        }
        SimpleSubexpressionValue::GatewayActionContext { key } => {
            Expression::String(key.as_str().to_string())
        }
        SimpleSubexpressionValue::String { value } => Expression::String(value.clone()),
        SimpleSubexpressionValue::Number { value } => Expression::Number(value.clone()),
        SimpleSubexpressionValue::Boolean { value } => Expression::Bool(*value),
        SimpleSubexpressionValue::Null => Expression::Null,
    }
}
