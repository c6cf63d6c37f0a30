/*
 * Arithmetic, comparison and logic through the standard operator table.
 */

use funclang::Value;

#[macro_use]
mod cases;

test_case! {
    name: addition,
    input: "2 + 3",
    value: { Value::number(5.0) },
}

test_case! {
    name: multiplication_binds_tighter,
    input: "2 + 3 * 4",
    value: { Value::number(14.0) },
}

test_case! {
    name: groups_override_precedence,
    input: "(2 + 3) * 4",
    value: { Value::number(20.0) },
}

test_case! {
    name: mixed_chain,
    input: "10 + 10 - (15 - 15 * 20 / 20 * (20 / 10)) / 5",
    value: { Value::number(23.0) },
}

test_case! {
    name: subtraction_is_left_associative,
    input: "100 - 10 - 1",
    value: { Value::number(89.0) },
}

test_case! {
    name: division_is_floating_point,
    input: "7 / 2",
    value: { Value::number(3.5) },
}

test_case! {
    name: negative_literal,
    input: "-2500",
    value: { Value::number(-2500.0) },
}

test_case! {
    name: negated_group,
    input: "-(4 - 10)",
    value: { Value::number(6.0) },
}

test_case! {
    name: quoted_operands_are_coerced,
    input: "'5' + '8'",
    value: { Value::number(13.0) },
}

test_case! {
    name: comparison_below_arithmetic,
    input: "1 + 1 >= 2",
    value: { Value::boolean(true) },
}

test_case! {
    name: strict_comparison,
    input: "5 > 8",
    value: { Value::boolean(false) },
}

test_case! {
    name: equality_is_type_sensitive,
    input: "5 == '5'",
    value: { Value::boolean(false) },
}

test_case! {
    name: equality_after_conversion,
    input: "5 == '5' as number",
    value: { Value::boolean(true) },
}

test_case! {
    name: and_binds_tighter_than_or,
    input: "1 > 2 && 1 > 2 || 2 > 1",
    value: { Value::boolean(true) },
}

test_case! {
    name: logic_on_booleans_from_text,
    input: "'true' && 'False'",
    value: { Value::boolean(false) },
}
