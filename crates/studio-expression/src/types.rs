//! Vocabulary shared by the recognizer, the converters and the validator.
//!
//! Every operator name, lookup source and value kind the crate understands is
//! declared here once. The wire names returned by `as_str` are the exact
//! strings that appear in the JSON form of an expression.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators that may head a relation, e.g. `["equals", a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationalOperator {
    #[default]
    Equals,
    NotEquals,
    GreaterThan,
    #[serde(rename = "greaterThanEq")]
    GreaterThanOrEq,
    LessThan,
    #[serde(rename = "lessThanEq")]
    LessThanOrEq,
}

impl RelationalOperator {
    pub const ALL: [RelationalOperator; 6] = [
        RelationalOperator::Equals,
        RelationalOperator::NotEquals,
        RelationalOperator::GreaterThan,
        RelationalOperator::GreaterThanOrEq,
        RelationalOperator::LessThan,
        RelationalOperator::LessThanOrEq,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RelationalOperator::Equals => "equals",
            RelationalOperator::NotEquals => "notEquals",
            RelationalOperator::GreaterThan => "greaterThan",
            RelationalOperator::GreaterThanOrEq => "greaterThanEq",
            RelationalOperator::LessThan => "lessThan",
            RelationalOperator::LessThanOrEq => "lessThanEq",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == s)
    }

    /// Returns `true` for the strictly numeric comparisons (`>`, `>=`, `<`, `<=`).
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            RelationalOperator::GreaterThan
                | RelationalOperator::GreaterThanOrEq
                | RelationalOperator::LessThan
                | RelationalOperator::LessThanOrEq
        )
    }
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators that join two or more relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub const ALL: [LogicalOperator; 2] = [LogicalOperator::And, LogicalOperator::Or];

    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == s)
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sources of externally provided values.
///
/// `component` and `dataModel` take a string key. `gatewayAction` takes none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataLookupSource {
    Component,
    DataModel,
    GatewayAction,
}

impl DataLookupSource {
    pub const ALL: [DataLookupSource; 3] = [
        DataLookupSource::Component,
        DataLookupSource::DataModel,
        DataLookupSource::GatewayAction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DataLookupSource::Component => "component",
            DataLookupSource::DataModel => "dataModel",
            DataLookupSource::GatewayAction => "gatewayAction",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.as_str() == s)
    }
}

impl fmt::Display for DataLookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sources whose key is drawn from a fixed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyLookupSource {
    InstanceContext,
}

impl KeyLookupSource {
    pub const ALL: [KeyLookupSource; 1] = [KeyLookupSource::InstanceContext];

    pub fn as_str(self) -> &'static str {
        match self {
            KeyLookupSource::InstanceContext => "instanceContext",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.as_str() == s)
    }
}

impl fmt::Display for KeyLookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys accepted by `["instanceContext", key]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstanceContextKey {
    #[default]
    InstanceOwnerPartyId,
    InstanceId,
    AppId,
    InstanceOwnerPartyType,
}

impl InstanceContextKey {
    pub const ALL: [InstanceContextKey; 4] = [
        InstanceContextKey::InstanceOwnerPartyId,
        InstanceContextKey::InstanceId,
        InstanceContextKey::AppId,
        InstanceContextKey::InstanceOwnerPartyType,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstanceContextKey::InstanceOwnerPartyId => "instanceOwnerPartyId",
            InstanceContextKey::InstanceId => "instanceId",
            InstanceContextKey::AppId => "appId",
            InstanceContextKey::InstanceOwnerPartyType => "instanceOwnerPartyType",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }
}

impl fmt::Display for InstanceContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action names a `["gatewayAction"]` lookup may be compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GatewayActionContext {
    #[default]
    Sign,
    Pay,
    Confirm,
    Reject,
}

impl GatewayActionContext {
    pub const ALL: [GatewayActionContext; 4] = [
        GatewayActionContext::Sign,
        GatewayActionContext::Pay,
        GatewayActionContext::Confirm,
        GatewayActionContext::Reject,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GatewayActionContext::Sign => "sign",
            GatewayActionContext::Pay => "pay",
            GatewayActionContext::Confirm => "confirm",
            GatewayActionContext::Reject => "reject",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == s)
    }
}

impl fmt::Display for GatewayActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of [`SimpleSubexpressionValue`](crate::SimpleSubexpressionValue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SimpleSubexpressionValueType {
    Component,
    DataModel,
    InstanceContext,
    GatewayAction,
    GatewayActionContext,
    String,
    Number,
    Boolean,
    Null,
}

impl SimpleSubexpressionValueType {
    pub const ALL: [SimpleSubexpressionValueType; 9] = [
        SimpleSubexpressionValueType::Component,
        SimpleSubexpressionValueType::DataModel,
        SimpleSubexpressionValueType::InstanceContext,
        SimpleSubexpressionValueType::GatewayAction,
        SimpleSubexpressionValueType::GatewayActionContext,
        SimpleSubexpressionValueType::String,
        SimpleSubexpressionValueType::Number,
        SimpleSubexpressionValueType::Boolean,
        SimpleSubexpressionValueType::Null,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SimpleSubexpressionValueType::Component => "component",
            SimpleSubexpressionValueType::DataModel => "dataModel",
            SimpleSubexpressionValueType::InstanceContext => "instanceContext",
            SimpleSubexpressionValueType::GatewayAction => "gatewayAction",
            SimpleSubexpressionValueType::GatewayActionContext => "gatewayActionContext",
            SimpleSubexpressionValueType::String => "string",
            SimpleSubexpressionValueType::Number => "number",
            SimpleSubexpressionValueType::Boolean => "boolean",
            SimpleSubexpressionValueType::Null => "null",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl fmt::Display for SimpleSubexpressionValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
