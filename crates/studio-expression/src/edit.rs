//! Mutations the structured editor applies to a simplified expression
//! between loading and saving it.

use crate::error::EditError;
use crate::simplified::{
    Operand, SimpleLogicalExpression, SimpleSubexpression, SimpleSubexpressionValue,
    SimplifiedExpression,
};
use crate::types::{
    GatewayActionContext, InstanceContextKey, LogicalOperator, RelationalOperator,
    SimpleSubexpressionValueType,
};
use serde_json::Number;

impl SimplifiedExpression {
    /// Turns a boolean literal into an empty logical expression so that
    /// subexpressions can be added. Logical expressions are returned as is.
    pub fn into_logical(self) -> SimpleLogicalExpression {
        match self {
            SimplifiedExpression::Logical(logical) => logical,
            SimplifiedExpression::Boolean(_) => SimpleLogicalExpression::default(),
        }
    }
}

impl SimpleLogicalExpression {
    pub fn add_subexpression(&mut self, subexpression: SimpleSubexpression) {
        self.subexpressions.push(subexpression);
    }

    pub fn remove_subexpression(&mut self, index: usize) -> Result<SimpleSubexpression, EditError> {
        self.check_index(index)?;
        Ok(self.subexpressions.remove(index))
    }

    pub fn replace_subexpression(
        &mut self,
        index: usize,
        subexpression: SimpleSubexpression,
    ) -> Result<(), EditError> {
        self.check_index(index)?;
        self.subexpressions[index] = subexpression;
        Ok(())
    }

    pub fn set_logical_operator(&mut self, operator: LogicalOperator) {
        self.logical_operator = operator;
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.subexpressions.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfRange {
                index,
                len: self.subexpressions.len(),
            })
        }
    }
}

impl SimpleSubexpression {
    pub fn set_relational_operator(&mut self, operator: RelationalOperator) {
        self.relational_operator = operator;
    }

    pub fn set_operand(&mut self, operand: Operand, value: SimpleSubexpressionValue) {
        *self.operand_mut(operand) = value;
    }

    /// Switches an operand to another kind. The current value is kept when it
    /// already has that kind, otherwise it is reset to the kind's default.
    pub fn change_operand_type(&mut self, operand: Operand, kind: SimpleSubexpressionValueType) {
        let slot = self.operand_mut(operand);
        if slot.kind() != kind {
            *slot = SimpleSubexpressionValue::default_for(kind);
        }
    }
}

impl SimpleSubexpressionValue {
    /// The value a freshly selected operand kind starts with.
    pub fn default_for(kind: SimpleSubexpressionValueType) -> Self {
        match kind {
            SimpleSubexpressionValueType::Component => {
                SimpleSubexpressionValue::Component { id: String::new() }
            }
            SimpleSubexpressionValueType::DataModel => SimpleSubexpressionValue::DataModel {
                path: String::new(),
            },
            SimpleSubexpressionValueType::InstanceContext => {
                SimpleSubexpressionValue::InstanceContext {
                    key: InstanceContextKey::default(),
                }
            }
            SimpleSubexpressionValueType::GatewayAction => SimpleSubexpressionValue::GatewayAction,
            SimpleSubexpressionValueType::GatewayActionContext => {
                SimpleSubexpressionValue::GatewayActionContext {
                    key: GatewayActionContext::default(),
                }
            }
            SimpleSubexpressionValueType::String => SimpleSubexpressionValue::String {
                value: String::new(),
            },
            SimpleSubexpressionValueType::Number => SimpleSubexpressionValue::Number {
                value: Number::from(0),
            },
            SimpleSubexpressionValueType::Boolean => {
                SimpleSubexpressionValue::Boolean { value: false }
            }
            SimpleSubexpressionValueType::Null => SimpleSubexpressionValue::Null,
        }
    }
}
