//! Integration tests for the semantic validator.

use studio_expression::{
    can_be_saved, find_errors, find_expression_errors, ErrorKind, LogicalOperator, LookupOptions,
    RelationalOperator, SimpleLogicalExpression, SimpleSubexpression, SimpleSubexpressionValue,
    SimplifiedExpression,
};

fn sub(
    op: RelationalOperator,
    first: SimpleSubexpressionValue,
    second: SimpleSubexpressionValue,
) -> SimpleSubexpression {
    SimpleSubexpression::new(op, first, second)
}

fn errors(
    op: RelationalOperator,
    first: SimpleSubexpressionValue,
    second: SimpleSubexpressionValue,
) -> Vec<ErrorKind> {
    find_errors(&sub(op, first, second), &LookupOptions::default())
}

#[test]
fn test_valid_subexpression_has_no_errors() {
    assert_eq!(
        errors(
            RelationalOperator::Equals,
            SimpleSubexpressionValue::number(1),
            SimpleSubexpressionValue::number(2)
        ),
        vec![]
    );
}

#[test]
fn test_numeric_operator_with_boolean() {
    assert_eq!(
        errors(
            RelationalOperator::GreaterThan,
            SimpleSubexpressionValue::number(1),
            SimpleSubexpressionValue::boolean(false)
        ),
        vec![ErrorKind::NumericRelationOperatorWithWrongType]
    );
    for op in [
        RelationalOperator::GreaterThanOrEq,
        RelationalOperator::LessThan,
        RelationalOperator::LessThanOrEq,
    ] {
        assert_eq!(
            errors(
                op,
                SimpleSubexpressionValue::boolean(true),
                SimpleSubexpressionValue::boolean(true)
            ),
            vec![ErrorKind::NumericRelationOperatorWithWrongType],
            "operator {}",
            op
        );
    }
}

#[test]
fn test_equality_operators_accept_booleans() {
    for op in [RelationalOperator::Equals, RelationalOperator::NotEquals] {
        assert!(errors(
            op,
            SimpleSubexpressionValue::boolean(true),
            SimpleSubexpressionValue::component("c")
        )
        .is_empty());
    }
}

#[test]
fn test_numeric_operator_with_string_is_not_flagged() {
    assert!(errors(
        RelationalOperator::LessThan,
        SimpleSubexpressionValue::string("a"),
        SimpleSubexpressionValue::number(1)
    )
    .is_empty());
}

#[test]
fn test_empty_data_model_path() {
    assert_eq!(
        errors(
            RelationalOperator::Equals,
            SimpleSubexpressionValue::data_model(""),
            SimpleSubexpressionValue::number(2)
        ),
        vec![ErrorKind::InvalidFirstOperand]
    );
}

#[test]
fn test_both_operands_empty() {
    assert_eq!(
        errors(
            RelationalOperator::Equals,
            SimpleSubexpressionValue::component(""),
            SimpleSubexpressionValue::data_model("")
        ),
        vec![ErrorKind::InvalidFirstOperand, ErrorKind::InvalidSecondOperand]
    );
}

#[test]
fn test_error_order_is_fixed() {
    assert_eq!(
        errors(
            RelationalOperator::GreaterThan,
            SimpleSubexpressionValue::component(""),
            SimpleSubexpressionValue::boolean(true)
        ),
        vec![
            ErrorKind::NumericRelationOperatorWithWrongType,
            ErrorKind::InvalidFirstOperand
        ]
    );
    assert_eq!(
        errors(
            RelationalOperator::LessThanOrEq,
            SimpleSubexpressionValue::boolean(false),
            SimpleSubexpressionValue::data_model("")
        ),
        vec![
            ErrorKind::NumericRelationOperatorWithWrongType,
            ErrorKind::InvalidSecondOperand
        ]
    );
}

#[test]
fn test_existence_is_not_checked() {
    let options = LookupOptions::new().with_components(["other"]);
    let result = find_errors(
        &sub(
            RelationalOperator::Equals,
            SimpleSubexpressionValue::component("missing"),
            SimpleSubexpressionValue::Null,
        ),
        &options,
    );
    assert!(result.is_empty());
}

#[test]
fn test_expression_level_checks() {
    let expr = SimplifiedExpression::Logical(SimpleLogicalExpression::new(
        LogicalOperator::Or,
        vec![
            sub(
                RelationalOperator::Equals,
                SimpleSubexpressionValue::component("c"),
                SimpleSubexpressionValue::number(1),
            ),
            sub(
                RelationalOperator::Equals,
                SimpleSubexpressionValue::data_model(""),
                SimpleSubexpressionValue::number(1),
            ),
        ],
    ));
    let options = LookupOptions::default();
    assert_eq!(
        find_expression_errors(&expr, &options),
        vec![(1, vec![ErrorKind::InvalidFirstOperand])]
    );
    assert!(!can_be_saved(&expr, &options));
    assert!(can_be_saved(&SimplifiedExpression::Boolean(true), &options));
    assert!(can_be_saved(&SimplifiedExpression::empty(), &options));
}
