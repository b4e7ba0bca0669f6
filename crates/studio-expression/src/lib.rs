//! Condition expressions for a low-code app builder.
//!
//! # Overview
//!
//! Conditions such as "hide this field when X equals Y" are stored as JSON
//! arrays of the form `[function, ...args]`, e.g.
//! `["equals", ["dataModel", "Person.Age"], 18]`. This is the *complex* form.
//! The structured editor works on a restricted, flat *simplified* form: a
//! boolean, or one AND/OR of relations between two operands.
//!
//! This crate recognizes which complex expressions have a simplified form
//! ([`is_simple`]), converts in both directions ([`to_simple`],
//! [`to_complex`]), and statically validates simplified relations
//! ([`find_errors`]). It never evaluates expressions.
//!
//! # Example
//!
//! ```
//! use studio_expression::{is_simple_json, to_complex_json, to_simple_json};
//! use serde_json::json;
//!
//! let expr = json!(["equals", ["dataModel", "My.Model.Field"], "yes"]);
//! assert!(is_simple_json(&expr));
//!
//! let simple = to_simple_json(&expr).unwrap();
//! assert_eq!(to_complex_json(&simple), expr);
//! ```

pub mod convert;
pub mod edit;
pub mod error;
pub mod expression;
pub mod simplicity;
pub mod simplified;
pub mod types;
pub mod validate;

pub use convert::{to_complex, to_complex_json, to_simple, to_simple_json, value_to_complex};
pub use error::{ConversionError, EditError};
pub use expression::{
    parse_expression_str, DataLookupFunc, Expression, KeyLookupFunc, LogicalTupleFunc,
    RelationFunc,
};
pub use simplicity::{check_simple, is_simple, is_simple_json, is_simple_value, NotSimpleReason};
pub use simplified::{
    Operand, SimpleLogicalExpression, SimpleSubexpression, SimpleSubexpressionValue,
    SimplifiedExpression,
};
pub use types::{
    DataLookupSource, GatewayActionContext, InstanceContextKey, KeyLookupSource, LogicalOperator,
    RelationalOperator, SimpleSubexpressionValueType,
};
pub use validate::{
    can_be_saved, find_errors, find_expression_errors, find_unresolved_references, ErrorKind,
    LookupOptions,
};
