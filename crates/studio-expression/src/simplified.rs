//! The simplified form edited by the structured expression editor.
//!
//! A simplified expression is either a boolean literal or a single flat
//! AND/OR of relations. The JSON shape uses camelCase keys and a `type` tag on
//! operand values, e.g. `{"type": "dataModel", "path": "a.b"}`.

use crate::types::{
    GatewayActionContext, InstanceContextKey, LogicalOperator, RelationalOperator,
    SimpleSubexpressionValueType,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimplifiedExpression {
    Boolean(bool),
    Logical(SimpleLogicalExpression),
}

/// A flat AND/OR of relations.
///
/// An empty `subexpressions` list stands for `null`. `logical_operator` only
/// matters when there is more than one subexpression.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleLogicalExpression {
    pub logical_operator: LogicalOperator,
    pub subexpressions: Vec<SimpleSubexpression>,
}

/// One relation between two operands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSubexpression {
    pub relational_operator: RelationalOperator,
    pub first_operand: SimpleSubexpressionValue,
    pub second_operand: SimpleSubexpressionValue,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SimpleSubexpressionValue {
    Component {
        id: String,
    },
    DataModel {
        path: String,
    },
    InstanceContext {
        key: InstanceContextKey,
    },
    GatewayAction,
    GatewayActionContext {
        key: GatewayActionContext,
    },
    String {
        value: String,
    },
    Number {
        value: Number,
    },
    Boolean {
        value: bool,
    },
    #[default]
    Null,
}

/// Selects one side of a [`SimpleSubexpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operand {
    First,
    Second,
}

impl SimplifiedExpression {
    /// The simplified form of `null`.
    pub fn empty() -> Self {
        SimplifiedExpression::Logical(SimpleLogicalExpression::default())
    }

    pub fn as_logical(&self) -> Option<&SimpleLogicalExpression> {
        match self {
            SimplifiedExpression::Logical(logical) => Some(logical),
            SimplifiedExpression::Boolean(_) => None,
        }
    }
}

impl From<bool> for SimplifiedExpression {
    fn from(b: bool) -> Self {
        SimplifiedExpression::Boolean(b)
    }
}

impl From<SimpleLogicalExpression> for SimplifiedExpression {
    fn from(logical: SimpleLogicalExpression) -> Self {
        SimplifiedExpression::Logical(logical)
    }
}

impl SimpleLogicalExpression {
    pub fn new(logical_operator: LogicalOperator, subexpressions: Vec<SimpleSubexpression>) -> Self {
        Self {
            logical_operator,
            subexpressions,
        }
    }

    /// Returns `true` when this stands for the complex literal `null`.
    pub fn is_null(&self) -> bool {
        self.subexpressions.is_empty()
    }
}

impl SimpleSubexpression {
    pub fn new(
        relational_operator: RelationalOperator,
        first_operand: SimpleSubexpressionValue,
        second_operand: SimpleSubexpressionValue,
    ) -> Self {
        Self {
            relational_operator,
            first_operand,
            second_operand,
        }
    }

    pub fn operand(&self, operand: Operand) -> &SimpleSubexpressionValue {
        match operand {
            Operand::First => &self.first_operand,
            Operand::Second => &self.second_operand,
        }
    }

    pub fn operand_mut(&mut self, operand: Operand) -> &mut SimpleSubexpressionValue {
        match operand {
            Operand::First => &mut self.first_operand,
            Operand::Second => &mut self.second_operand,
        }
    }
}

impl SimpleSubexpressionValue {
    pub fn kind(&self) -> SimpleSubexpressionValueType {
        match self {
            SimpleSubexpressionValue::Component { .. } => SimpleSubexpressionValueType::Component,
            SimpleSubexpressionValue::DataModel { .. } => SimpleSubexpressionValueType::DataModel,
            SimpleSubexpressionValue::InstanceContext { .. } => {
                SimpleSubexpressionValueType::InstanceContext
            }
            SimpleSubexpressionValue::GatewayAction => SimpleSubexpressionValueType::GatewayAction,
            SimpleSubexpressionValue::GatewayActionContext { .. } => {
                SimpleSubexpressionValueType::GatewayActionContext
            }
            SimpleSubexpressionValue::String { .. } => SimpleSubexpressionValueType::String,
            SimpleSubexpressionValue::Number { .. } => SimpleSubexpressionValueType::Number,
            SimpleSubexpressionValue::Boolean { .. } => SimpleSubexpressionValueType::Boolean,
            SimpleSubexpressionValue::Null => SimpleSubexpressionValueType::Null,
        }
    }

    pub fn component(id: impl Into<String>) -> Self {
        SimpleSubexpressionValue::Component { id: id.into() }
    }

    pub fn data_model(path: impl Into<String>) -> Self {
        SimpleSubexpressionValue::DataModel { path: path.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        SimpleSubexpressionValue::String {
            value: value.into(),
        }
    }

    pub fn number(value: impl Into<Number>) -> Self {
        SimpleSubexpressionValue::Number {
            value: value.into(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        SimpleSubexpressionValue::Boolean { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_json_shape() {
        let cases = [
            (SimpleSubexpressionValue::component("c1"), json!({"type": "component", "id": "c1"})),
            (SimpleSubexpressionValue::data_model("a.b"), json!({"type": "dataModel", "path": "a.b"})),
            (
                SimpleSubexpressionValue::InstanceContext {
                    key: InstanceContextKey::AppId,
                },
                json!({"type": "instanceContext", "key": "appId"}),
            ),
            (SimpleSubexpressionValue::GatewayAction, json!({"type": "gatewayAction"})),
            (
                SimpleSubexpressionValue::GatewayActionContext {
                    key: GatewayActionContext::Pay,
                },
                json!({"type": "gatewayActionContext", "key": "pay"}),
            ),
            (SimpleSubexpressionValue::string("x"), json!({"type": "string", "value": "x"})),
            (SimpleSubexpressionValue::number(4), json!({"type": "number", "value": 4})),
            (SimpleSubexpressionValue::boolean(true), json!({"type": "boolean", "value": true})),
            (SimpleSubexpressionValue::Null, json!({"type": "null"})),
        ];
        for (value, expected) in cases {
            assert_eq!(serde_json::to_value(&value).unwrap(), expected);
            let back: SimpleSubexpressionValue = serde_json::from_value(expected).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_expression_json_shape() {
        let expr = SimplifiedExpression::Logical(SimpleLogicalExpression::new(
            LogicalOperator::Or,
            vec![SimpleSubexpression::new(
                RelationalOperator::GreaterThanOrEq,
                SimpleSubexpressionValue::component("age"),
                SimpleSubexpressionValue::number(18),
            )],
        ));
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(
            json,
            json!({
                "logicalOperator": "or",
                "subexpressions": [{
                    "relationalOperator": "greaterThanEq",
                    "firstOperand": {"type": "component", "id": "age"},
                    "secondOperand": {"type": "number", "value": 18}
                }]
            })
        );

        let back: SimplifiedExpression = serde_json::from_value(json).unwrap();
        assert_eq!(back, expr);
        let literal: SimplifiedExpression = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(literal, SimplifiedExpression::Boolean(false));
    }

    #[test]
    fn test_kind_matches_tag() {
        let values = [
            SimpleSubexpressionValue::component(""),
            SimpleSubexpressionValue::data_model(""),
            SimpleSubexpressionValue::GatewayAction,
            SimpleSubexpressionValue::string(""),
            SimpleSubexpressionValue::number(0),
            SimpleSubexpressionValue::boolean(false),
            SimpleSubexpressionValue::Null,
        ];
        for value in values {
            let json = serde_json::to_value(&value).unwrap();
            assert_eq!(json["type"], json!(value.kind().as_str()));
        }
    }

    #[test]
    fn test_default_subexpression() {
        let sub = SimpleSubexpression::default();
        assert_eq!(sub.relational_operator, RelationalOperator::Equals);
        assert_eq!(sub.first_operand, SimpleSubexpressionValue::Null);
        assert_eq!(sub.second_operand, SimpleSubexpressionValue::Null);
        assert!(SimpleLogicalExpression::default().is_null());
    }
}
