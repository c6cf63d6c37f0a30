#![allow(dead_code)]

use funclang::{Engine, Error, OperatorTable, Runtime, Value, register_demo_functions};
use once_cell::sync::Lazy;

/// One engine over the standard table, shared by every test in the binary.
pub static ENGINE: Lazy<Engine> =
    Lazy::new(|| Engine::new(OperatorTable::standard()).expect("standard table compiles"));

/// Evaluate `input` against a fresh runtime with the demo functions.
pub fn run(input: &str) -> Result<Value, Error> {
    let mut runtime = Runtime::new();
    register_demo_functions(&mut runtime).expect("demo functions register");
    ENGINE.execute(input, &mut runtime)
}

macro_rules! test_case {
    (name: $name:ident, input: $input:expr, value: { $value:expr } $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(crate::cases::run($input), Ok($value));
        }
    };
    (name: $name:ident, input: $input:expr, error: { $error:expr } $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(crate::cases::run($input), Err($error));
        }
    };
}
