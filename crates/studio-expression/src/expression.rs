//! The complex (persisted) form of an expression.
//!
//! On the wire an expression is a plain JSON value: a literal, or an array of
//! the form `[name, ...args]`. [`Expression::from_json`] classifies that value
//! exactly once. Everything downstream matches on [`Expression`] instead of
//! re-inspecting array shapes.

use crate::error::ConversionError;
use crate::types::{
    DataLookupSource, InstanceContextKey, KeyLookupSource, LogicalOperator, RelationalOperator,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// A parsed complex expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// `[relationalOperator, a, b]`
    Relation(Box<RelationFunc>),
    /// `[logicalOperator, member, ...]`. Built for any member count so that
    /// short tuples can be rejected by name.
    LogicalTuple(LogicalTupleFunc),
    DataLookup(DataLookupFunc),
    KeyLookup(KeyLookupFunc),
    /// Any other `[name, ...args]` call, e.g. `["startsWith", a, b]` or
    /// `["if", cond, then]`. Also catches known names used with the wrong
    /// number of arguments.
    Func { name: String, args: Vec<Expression> },
    /// Values with no meaning in the grammar: `[]`, arrays whose head is not
    /// a string, and objects. Kept so they serialize back unchanged.
    Unrecognized(Value),
}

/// `[relationalOperator, first, second]`
#[derive(Debug, Clone, PartialEq)]
pub struct RelationFunc {
    pub operator: RelationalOperator,
    pub first: Expression,
    pub second: Expression,
}

/// `[logicalOperator, member, member, ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalTupleFunc {
    pub operator: LogicalOperator,
    pub members: Vec<Expression>,
}

/// A lookup of an externally sourced value.
#[derive(Debug, Clone, PartialEq)]
pub enum DataLookupFunc {
    /// `["component", id]`
    Component(Box<Expression>),
    /// `["dataModel", path]`
    DataModel(Box<Expression>),
    /// `["gatewayAction"]`
    GatewayAction,
}

impl DataLookupFunc {
    pub fn source(&self) -> DataLookupSource {
        match self {
            DataLookupFunc::Component(_) => DataLookupSource::Component,
            DataLookupFunc::DataModel(_) => DataLookupSource::DataModel,
            DataLookupFunc::GatewayAction => DataLookupSource::GatewayAction,
        }
    }

    pub fn key(&self) -> Option<&Expression> {
        match self {
            DataLookupFunc::Component(key) | DataLookupFunc::DataModel(key) => Some(key),
            DataLookupFunc::GatewayAction => None,
        }
    }
}

/// A lookup whose key is one of a fixed set of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLookupFunc {
    /// `["instanceContext", key]`
    InstanceContext(InstanceContextKey),
}

impl KeyLookupFunc {
    pub fn source(&self) -> KeyLookupSource {
        match self {
            KeyLookupFunc::InstanceContext(_) => KeyLookupSource::InstanceContext,
        }
    }
}

impl Expression {
    /// Classifies a JSON value. Never fails: anything outside the known
    /// shapes ends up as [`Expression::Func`] or [`Expression::Unrecognized`].
    pub fn from_json(value: &Value) -> Expression {
        match value {
            Value::Null => Expression::Null,
            Value::Bool(b) => Expression::Bool(*b),
            Value::Number(n) => Expression::Number(n.clone()),
            Value::String(s) => Expression::String(s.clone()),
            Value::Array(items) => Self::from_array(value, items),
            Value::Object(_) => Expression::Unrecognized(value.clone()),
        }
    }

    fn from_array(value: &Value, items: &[Value]) -> Expression {
        let Some((Value::String(name), rest)) = items.split_first() else {
            return Expression::Unrecognized(value.clone());
        };
        let name = name.as_str();

        if let Some(operator) = RelationalOperator::parse(name) {
            if let [first, second] = rest {
                return Expression::Relation(Box::new(RelationFunc {
                    operator,
                    first: Self::from_json(first),
                    second: Self::from_json(second),
                }));
            }
        } else if let Some(operator) = LogicalOperator::parse(name) {
            return Expression::LogicalTuple(LogicalTupleFunc {
                operator,
                members: rest.iter().map(Self::from_json).collect(),
            });
        } else if let Some(source) = DataLookupSource::parse(name) {
            match (source, rest) {
                (DataLookupSource::Component, [key]) => {
                    return Expression::DataLookup(DataLookupFunc::Component(Box::new(
                        Self::from_json(key),
                    )));
                }
                (DataLookupSource::DataModel, [key]) => {
                    return Expression::DataLookup(DataLookupFunc::DataModel(Box::new(
                        Self::from_json(key),
                    )));
                }
                (DataLookupSource::GatewayAction, []) => {
                    return Expression::DataLookup(DataLookupFunc::GatewayAction);
                }
                _ => {}
            }
        } else if let Some(KeyLookupSource::InstanceContext) = KeyLookupSource::parse(name) {
            if let [Value::String(key)] = rest {
                if let Some(key) = InstanceContextKey::parse(key) {
                    return Expression::KeyLookup(KeyLookupFunc::InstanceContext(key));
                }
            }
        }

        Expression::Func {
            name: name.to_string(),
            args: rest.iter().map(Self::from_json).collect(),
        }
    }

    /// Produces the wire form of the expression.
    pub fn to_json(&self) -> Value {
        match self {
            Expression::Null => Value::Null,
            Expression::Bool(b) => Value::Bool(*b),
            Expression::Number(n) => Value::Number(n.clone()),
            Expression::String(s) => Value::String(s.clone()),
            Expression::Relation(relation) => Value::Array(vec![
                Value::String(relation.operator.as_str().to_string()),
                relation.first.to_json(),
                relation.second.to_json(),
            ]),
            Expression::LogicalTuple(tuple) => {
                let mut items = Vec::with_capacity(tuple.members.len() + 1);
                items.push(Value::String(tuple.operator.as_str().to_string()));
                items.extend(tuple.members.iter().map(Expression::to_json));
                Value::Array(items)
            }
            Expression::DataLookup(lookup) => {
                let mut items = vec![Value::String(lookup.source().as_str().to_string())];
                if let Some(key) = lookup.key() {
                    items.push(key.to_json());
                }
                Value::Array(items)
            }
            Expression::KeyLookup(lookup) => {
                let KeyLookupFunc::InstanceContext(key) = lookup;
                Value::Array(vec![
                    Value::String(lookup.source().as_str().to_string()),
                    Value::String(key.as_str().to_string()),
                ])
            }
            Expression::Func { name, args } => {
                let mut items = Vec::with_capacity(args.len() + 1);
                items.push(Value::String(name.clone()));
                items.extend(args.iter().map(Expression::to_json));
                Value::Array(items)
            }
            Expression::Unrecognized(value) => value.clone(),
        }
    }

    /// Returns `true` for `null`, booleans, numbers and strings.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Expression::Null | Expression::Bool(_) | Expression::Number(_) | Expression::String(_)
        )
    }

    pub fn relation(
        operator: RelationalOperator,
        first: Expression,
        second: Expression,
    ) -> Expression {
        Expression::Relation(Box::new(RelationFunc {
            operator,
            first,
            second,
        }))
    }

    pub fn component(id: impl Into<String>) -> Expression {
        Expression::DataLookup(DataLookupFunc::Component(Box::new(Expression::String(
            id.into(),
        ))))
    }

    pub fn data_model(path: impl Into<String>) -> Expression {
        Expression::DataLookup(DataLookupFunc::DataModel(Box::new(Expression::String(
            path.into(),
        ))))
    }

    pub fn instance_context(key: InstanceContextKey) -> Expression {
        Expression::KeyLookup(KeyLookupFunc::InstanceContext(key))
    }
}

/// Parses an expression from JSON text.
pub fn parse_expression_str(text: &str) -> Result<Expression, ConversionError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(Expression::from_json(&value))
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::from_json(&value)
    }
}

impl From<&Value> for Expression {
    fn from(value: &Value) -> Self {
        Expression::from_json(value)
    }
}

impl From<&Expression> for Value {
    fn from(expr: &Expression) -> Self {
        expr.to_json()
    }
}

impl From<Expression> for Value {
    fn from(expr: Expression) -> Self {
        expr.to_json()
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Expression::Bool(b)
    }
}

impl From<&str> for Expression {
    fn from(s: &str) -> Self {
        Expression::String(s.to_string())
    }
}

impl From<String> for Expression {
    fn from(s: String) -> Self {
        Expression::String(s)
    }
}

impl From<i64> for Expression {
    fn from(n: i64) -> Self {
        Expression::Number(Number::from(n))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Expression::from_json(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literals() {
        assert_eq!(Expression::from_json(&json!(null)), Expression::Null);
        assert_eq!(Expression::from_json(&json!(true)), Expression::Bool(true));
        assert_eq!(Expression::from_json(&json!(3)), Expression::from(3i64));
        assert_eq!(Expression::from_json(&json!("a")), Expression::from("a"));
    }

    #[test]
    fn test_relation() {
        let expr = Expression::from_json(&json!(["equals", ["dataModel", "a.b"], 1]));
        assert_eq!(
            expr,
            Expression::relation(
                RelationalOperator::Equals,
                Expression::data_model("a.b"),
                Expression::from(1i64)
            )
        );
    }

    #[test]
    fn test_relation_with_wrong_arity_is_a_plain_call() {
        let expr = Expression::from_json(&json!(["equals", 1]));
        assert!(matches!(expr, Expression::Func { ref name, ref args } if name == "equals" && args.len() == 1));
    }

    #[test]
    fn test_logical_tuple_any_arity() {
        let expr = Expression::from_json(&json!(["and", true, false]));
        assert!(matches!(expr, Expression::LogicalTuple(ref t) if t.members.len() == 2));
        let expr = Expression::from_json(&json!(["or", true]));
        assert!(matches!(expr, Expression::LogicalTuple(ref t) if t.members.len() == 1));
        assert_eq!(Expression::from_json(&json!(["and"])).to_json(), json!(["and"]));
    }

    #[test]
    fn test_lookups() {
        assert_eq!(
            Expression::from_json(&json!(["component", "c1"])),
            Expression::component("c1")
        );
        assert_eq!(
            Expression::from_json(&json!(["gatewayAction"])),
            Expression::DataLookup(DataLookupFunc::GatewayAction)
        );
        assert_eq!(
            Expression::from_json(&json!(["instanceContext", "appId"])),
            Expression::instance_context(InstanceContextKey::AppId)
        );
        assert!(matches!(
            Expression::from_json(&json!(["instanceContext", "nope"])),
            Expression::Func { .. }
        ));
        assert!(matches!(
            Expression::from_json(&json!(["dataModel", "a", "b"])),
            Expression::Func { .. }
        ));
    }

    #[test]
    fn test_unrecognized() {
        assert!(matches!(Expression::from_json(&json!([])), Expression::Unrecognized(_)));
        assert!(matches!(Expression::from_json(&json!([1, 2])), Expression::Unrecognized(_)));
        assert!(matches!(Expression::from_json(&json!({"a": 1})), Expression::Unrecognized(_)));
    }

    #[test]
    fn test_to_json_preserves_shape() {
        let inputs = [
            json!(null),
            json!(["equals", ["component", "c"], 2.5]),
            json!(["or", ["equals", 1, 1], ["notEquals", ["instanceContext", "instanceId"], null]]),
            json!(["gatewayAction"]),
            json!(["if", ["startsWith", "a", "b"], "x", "else", "y"]),
            json!(["component", ["dataModel", "nested"]]),
            json!([1, "x"]),
            json!({"key": "value"}),
        ];
        for input in inputs {
            assert_eq!(Expression::from_json(&input).to_json(), input);
        }
    }

    #[test]
    fn test_serde() {
        let expr: Expression = serde_json::from_value(json!(["lessThan", 1, 2])).unwrap();
        assert!(matches!(expr, Expression::Relation(_)));
        assert_eq!(serde_json::to_value(&expr).unwrap(), json!(["lessThan", 1, 2]));
    }

    #[test]
    fn test_parse_expression_str() {
        let expr = parse_expression_str(r#"["equals", ["component", "x"], true]"#).unwrap();
        assert!(matches!(expr, Expression::Relation(_)));
        assert!(parse_expression_str("[\"equals\"").is_err());
    }

    #[test]
    fn test_float_literal_is_exact() {
        let expr = parse_expression_str(r#"["lessThan", ["component", "c"], -998530265.6696119]"#)
            .unwrap();
        let Expression::Relation(relation) = &expr else {
            panic!("expected a relation, got {}", expr);
        };
        assert_eq!(relation.second.to_json(), json!(-998530265.6696119));
        assert_eq!(expr.to_string(), r#"["lessThan",["component","c"],-998530265.6696119]"#);
    }
}
