//! Static checks on simplified subexpressions.
//!
//! These are user-input problems, so they are returned as data rather than as
//! `Err`. The editor blocks saving while any are present.

use crate::simplified::{
    Operand, SimpleSubexpression, SimpleSubexpressionValue, SimplifiedExpression,
};
use crate::types::DataLookupSource;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// A numeric comparison (`>`, `>=`, `<`, `<=`) with a boolean operand.
    NumericRelationOperatorWithWrongType,
    /// The first operand is a component or data model lookup with an empty key.
    InvalidFirstOperand,
    /// The second operand is a component or data model lookup with an empty key.
    InvalidSecondOperand,
}

impl ErrorKind {
    /// Stable identifier, usable as a localization key.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NumericRelationOperatorWithWrongType => {
                "numericRelationOperatorWithWrongType"
            }
            ErrorKind::InvalidFirstOperand => "invalidFirstOperand",
            ErrorKind::InvalidSecondOperand => "invalidSecondOperand",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The keys currently available per lookup source in the host document.
///
/// Deserializes from `{"component": [...], "dataModel": [...], "gatewayAction": [...]}`.
/// Missing sources are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupOptions {
    pub component: Vec<String>,
    pub data_model: Vec<String>,
    pub gateway_action: Vec<String>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_components<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.component.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_data_model_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_model.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn keys(&self, source: DataLookupSource) -> &[String] {
        match source {
            DataLookupSource::Component => &self.component,
            DataLookupSource::DataModel => &self.data_model,
            DataLookupSource::GatewayAction => &self.gateway_action,
        }
    }

    pub fn contains(&self, source: DataLookupSource, key: &str) -> bool {
        self.keys(source).iter().any(|k| k == key)
    }
}

/// Finds the errors in one subexpression.
///
/// The result is ordered: the operator/type mismatch first, then the first
/// operand, then the second. Only emptiness of lookup keys is checked here.
/// Whether a key exists in `lookup_options` is reported separately by
/// [`find_unresolved_references`]. `lookup_options` is accepted so callers
/// can pass the same options to both checks; it does not affect the result.
#[tracing::instrument(level = "trace", skip_all)]
pub fn find_errors(
    subexpression: &SimpleSubexpression,
    _lookup_options: &LookupOptions,
) -> Vec<ErrorKind> {
    let mut errors = Vec::new();
    if has_numeric_operator_with_wrong_type(subexpression) {
        errors.push(ErrorKind::NumericRelationOperatorWithWrongType);
    }
    if is_empty_reference(&subexpression.first_operand) {
        errors.push(ErrorKind::InvalidFirstOperand);
    }
    if is_empty_reference(&subexpression.second_operand) {
        errors.push(ErrorKind::InvalidSecondOperand);
    }
    errors
}

/// Runs [`find_errors`] on every subexpression and returns those that have
/// errors, with their index.
pub fn find_expression_errors(
    expression: &SimplifiedExpression,
    lookup_options: &LookupOptions,
) -> Vec<(usize, Vec<ErrorKind>)> {
    let Some(logical) = expression.as_logical() else {
        return Vec::new();
    };
    logical
        .subexpressions
        .iter()
        .enumerate()
        .map(|(index, sub)| (index, find_errors(sub, lookup_options)))
        .filter(|(_, errors)| !errors.is_empty())
        .collect()
}

/// Returns `true` when no subexpression has errors.
pub fn can_be_saved(expression: &SimplifiedExpression, lookup_options: &LookupOptions) -> bool {
    find_expression_errors(expression, lookup_options).is_empty()
}

/// Lists the operands that name a component or data model field missing from
/// `lookup_options`. Empty keys are left to [`find_errors`].
pub fn find_unresolved_references(
    subexpression: &SimpleSubexpression,
    lookup_options: &LookupOptions,
) -> Vec<Operand> {
    [Operand::First, Operand::Second]
        .into_iter()
        .filter(|&operand| {
            match subexpression.operand(operand) {
                SimpleSubexpressionValue::Component { id } if !id.is_empty() => {
                    !lookup_options.contains(DataLookupSource::Component, id)
                }
                SimpleSubexpressionValue::DataModel { path } if !path.is_empty() => {
                    !lookup_options.contains(DataLookupSource::DataModel, path)
                }
                _ => false,
            }
        })
        .collect()
}

// String operands are not flagged here.
fn has_numeric_operator_with_wrong_type(subexpression: &SimpleSubexpression) -> bool {
    subexpression.relational_operator.is_numeric()
        && (is_boolean(&subexpression.first_operand) || is_boolean(&subexpression.second_operand))
}

fn is_boolean(value: &SimpleSubexpressionValue) -> bool {
    matches!(value, SimpleSubexpressionValue::Boolean { .. })
}

fn is_empty_reference(value: &SimpleSubexpressionValue) -> bool {
    match value {
        SimpleSubexpressionValue::Component { id } => id.is_empty(),
        SimpleSubexpressionValue::DataModel { path } => path.is_empty(),
        SimpleSubexpressionValue::InstanceContext { .. }
        | SimpleSubexpressionValue::GatewayAction
        | SimpleSubexpressionValue::GatewayActionContext { .. }
        | SimpleSubexpressionValue::String { .. }
        | SimpleSubexpressionValue::Number { .. }
        | SimpleSubexpressionValue::Boolean { .. }
        | SimpleSubexpressionValue::Null => false,
    }
}
