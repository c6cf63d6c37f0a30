/*
 * Function calls and the `->` chain operator.
 */

use funclang::Value;

#[macro_use]
mod cases;

test_case! {
    name: chained_add,
    input: "add(4, 8)->add(5)",
    value: { Value::number(17.0) },
}

test_case! {
    name: chained_subtract,
    input: "add(10)->subtract(3, 2)",
    value: { Value::number(5.0) },
}

test_case! {
    name: chain_on_literal,
    input: "12->add(5)",
    value: { Value::number(17.0) },
}

test_case! {
    name: chain_on_group,
    input: "floor((2 * 3)->add(1.5))",
    value: { Value::number(7.0) },
}

test_case! {
    name: chain_binds_tighter_than_operators,
    input: "1 + 2->add(3)",
    value: { Value::number(6.0) },
}

test_case! {
    name: negation_covers_the_whole_chain,
    input: "-add(1)->add(1)",
    value: { Value::number(-2.0) },
}

test_case! {
    name: zero_argument_call,
    input: "add()",
    value: { Value::number(0.0) },
}

test_case! {
    name: arguments_are_full_expressions,
    input: "floor(7 / 2 + 0.75)",
    value: { Value::number(4.0) },
}

test_case! {
    name: nested_calls_as_arguments,
    input: "add(add(1, 2), subtract(5)->add(10))",
    value: { Value::number(8.0) },
}

test_case! {
    name: rand_with_equal_bounds,
    input: "rand(4, 4)->add(1)",
    value: { Value::number(5.0) },
}

test_case! {
    name: rand_with_one_argument_is_null,
    input: "rand(4)",
    value: { Value::Null },
}

#[test]
fn rand_stays_in_bounds() {
    for _ in 0..50 {
        let Ok(Value::Number(n)) = cases::run("rand(-2, 2)") else {
            panic!("rand(-2, 2) must return a number");
        };
        assert!((-2.0..2.0).contains(&n), "{n} outside [-2, 2)");
    }
    let Ok(Value::Number(n)) = cases::run("rand()") else {
        panic!("rand() must return a number");
    };
    assert!((0.0..1.0).contains(&n));
}
