//! Demo functions installed by the console program.
//!
//! concat, join, repeat, add, subtract, floor, rand

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::api::Error;
use crate::casting::to_number;
use crate::context::Runtime;
use crate::values::Value;
use crate::{String, ToString, Vec, format};

/// Longest text `repeat` will build, in bytes.
pub const MAX_REPEAT_BYTES: usize = 1 << 24;

// ============================================================================
// Text
// ============================================================================

/// Display forms of every argument, concatenated.
fn concat(_this: Option<Value>, args: Vec<Value>) -> Result<Value, Error> {
    let mut out = String::new();
    for arg in &args {
        out.push_str(&arg.to_string());
    }
    Ok(Value::Text(out))
}

/// `join(sep, a, b, ...)`. Null with fewer than two arguments.
fn join(_this: Option<Value>, args: Vec<Value>) -> Result<Value, Error> {
    let Some((separator, rest)) = args.split_first() else {
        return Ok(Value::Null);
    };
    if rest.is_empty() {
        return Ok(Value::Null);
    }
    let separator = separator.to_string();
    let parts: Vec<String> = rest.iter().map(ToString::to_string).collect();
    Ok(Value::Text(parts.join(&separator)))
}

/// `repeat(text, count)`. Null unless called with exactly two arguments.
///
/// The count rounds half to even; negative and NaN counts repeat nothing.
/// Results longer than [`MAX_REPEAT_BYTES`] are refused.
fn repeat(_this: Option<Value>, args: Vec<Value>) -> Result<Value, Error> {
    let [text, count] = args.as_slice() else {
        return Ok(Value::Null);
    };
    let text = text.to_string();
    let count = to_number(count)?.round_ties_even();
    let count = if count > 0.0 { count as usize } else { 0 };
    match text.len().checked_mul(count) {
        Some(len) if len <= MAX_REPEAT_BYTES => Ok(Value::Text(text.repeat(count))),
        _ => Err(Error::host(format!(
            "repeat count {count} exceeds the {MAX_REPEAT_BYTES} byte limit"
        ))),
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

fn receiver_total(this: Option<&Value>) -> Result<f64, Error> {
    match this {
        Some(value) => to_number(value),
        None => Ok(0.0),
    }
}

/// Adds every argument onto the receiver (0 when called unchained).
fn add(this: Option<Value>, args: Vec<Value>) -> Result<Value, Error> {
    let mut total = receiver_total(this.as_ref())?;
    for arg in &args {
        total += to_number(arg)?;
    }
    Ok(Value::Number(total))
}

/// Subtracts every argument from the receiver (0 when called unchained).
fn subtract(this: Option<Value>, args: Vec<Value>) -> Result<Value, Error> {
    let mut total = receiver_total(this.as_ref())?;
    for arg in &args {
        total -= to_number(arg)?;
    }
    Ok(Value::Number(total))
}

fn floor(_this: Option<Value>, args: Vec<Value>) -> Result<Value, Error> {
    let Some(value) = args.first() else {
        return Err(Error::host("floor expects 1 argument, got 0"));
    };
    Ok(Value::Number(to_number(value)?.floor()))
}

// ============================================================================
// Random
// ============================================================================

/// Whole number argument, rounded half to even.
fn whole(value: &Value) -> Result<i32, Error> {
    let n = to_number(value)?.round_ties_even();
    if (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&n) {
        Ok(n as i32)
    } else {
        Err(Error::host(format!("{value} is not a valid rand bound")))
    }
}

/// `rand()` is a float in `[0, 1)`; `rand(min, max)` an integer in
/// `[min, max)`, or `min` when both bounds are equal. Null otherwise.
fn random(rng: &mut impl Rng, args: &[Value]) -> Result<Value, Error> {
    match args {
        [] => Ok(Value::Number(rng.gen_range(0.0..1.0))),
        [min, max] => {
            let (min, max) = (whole(min)?, whole(max)?);
            if min > max {
                return Err(Error::host(format!(
                    "rand bounds are reversed: {min} > {max}"
                )));
            }
            if min == max {
                return Ok(Value::Number(f64::from(min)));
            }
            Ok(Value::Number(f64::from(rng.gen_range(min..max))))
        }
        _ => Ok(Value::Null),
    }
}

/// Register the demo functions in `runtime`.
///
/// Fails if any of the names is already taken.
pub fn register_demo_functions<C, O>(runtime: &mut Runtime<'_, C, O>) -> Result<(), Error> {
    runtime.register("concat", concat)?;
    runtime.register("join", join)?;
    runtime.register("repeat", repeat)?;
    runtime.register("add", add)?;
    runtime.register("subtract", subtract)?;
    runtime.register("floor", floor)?;

    let mut rng = StdRng::from_entropy();
    runtime.register(
        "rand",
        move |_this: Option<Value>, args: Vec<Value>| -> Result<Value, Error> {
            random(&mut rng, &args)
        },
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_concat() {
        let result = concat(None, vec![Value::text("a"), Value::number(1.5), Value::boolean(true)]);
        assert_eq!(result.unwrap(), Value::text("a1.5true"));
        assert_eq!(concat(None, vec![]).unwrap(), Value::text(""));
    }

    #[test]
    fn test_join() {
        let result = join(
            None,
            vec![Value::text(", "), Value::text("a"), Value::number(2.0)],
        );
        assert_eq!(result.unwrap(), Value::text("a, 2"));
        assert_eq!(join(None, vec![Value::text(",")]).unwrap(), Value::Null);
        assert_eq!(join(None, vec![]).unwrap(), Value::Null);
    }

    #[test]
    fn test_repeat() {
        let result = repeat(None, vec![Value::text("ab"), Value::number(3.0)]);
        assert_eq!(result.unwrap(), Value::text("ababab"));

        let from_text = repeat(None, vec![Value::text("x"), Value::text("2")]);
        assert_eq!(from_text.unwrap(), Value::text("xx"));

        assert_eq!(
            repeat(None, vec![Value::text("x"), Value::number(-1.0)]).unwrap(),
            Value::text("")
        );
        assert_eq!(repeat(None, vec![Value::text("x")]).unwrap(), Value::Null);
    }

    #[test]
    fn test_repeat_rounds_half_to_even() {
        let times = |count: f64| repeat(None, vec![Value::text("x"), Value::number(count)]);
        assert_eq!(times(2.5).unwrap(), Value::text("xx"));
        assert_eq!(times(2.6).unwrap(), Value::text("xxx"));
        assert_eq!(times(3.5).unwrap(), Value::text("xxxx"));
        assert_eq!(times(0.4).unwrap(), Value::text(""));
        assert_eq!(times(f64::NAN).unwrap(), Value::text(""));
    }

    #[test]
    fn test_repeat_refuses_huge_results() {
        let huge = repeat(
            None,
            vec![Value::text("ab"), Value::number(10000000000000000000.0)],
        );
        assert!(matches!(huge, Err(Error::Runtime(_))));

        let over_limit = repeat(
            None,
            vec![Value::text("x"), Value::number((MAX_REPEAT_BYTES + 1) as f64)],
        );
        assert!(over_limit.is_err());

        // Empty text never grows.
        let empty = repeat(None, vec![Value::text(""), Value::number(1e30)]);
        assert_eq!(empty.unwrap(), Value::text(""));
    }

    #[test]
    fn test_add_and_subtract_accumulate_onto_receiver() {
        assert_eq!(
            add(None, vec![Value::number(2.0), Value::text("3")]).unwrap(),
            Value::number(5.0)
        );
        assert_eq!(
            add(Some(Value::number(12.0)), vec![Value::number(5.0)]).unwrap(),
            Value::number(17.0)
        );
        assert_eq!(
            subtract(Some(Value::number(12.0)), vec![Value::number(5.0), Value::number(1.0)])
                .unwrap(),
            Value::number(6.0)
        );
        assert_eq!(
            subtract(None, vec![Value::number(4.0)]).unwrap(),
            Value::number(-4.0)
        );
    }

    #[test]
    fn test_floor() {
        assert_eq!(
            floor(None, vec![Value::number(2.7)]).unwrap(),
            Value::number(2.0)
        );
        assert_eq!(
            floor(None, vec![Value::text("-2.5")]).unwrap(),
            Value::number(-3.0)
        );
        assert!(floor(None, vec![]).is_err());
    }

    // ========================================================================
    // Random
    // ========================================================================

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_rand_without_arguments_is_unit_interval() {
        let mut rng = seeded();
        for _ in 0..100 {
            let Value::Number(n) = random(&mut rng, &[]).unwrap() else {
                panic!("rand() must return a number");
            };
            assert!((0.0..1.0).contains(&n), "{n} outside [0, 1)");
        }
    }

    #[test]
    fn test_rand_with_bounds_is_whole_and_half_open() {
        let mut rng = seeded();
        let bounds = [Value::number(3.0), Value::text("6")];
        for _ in 0..100 {
            let Value::Number(n) = random(&mut rng, &bounds).unwrap() else {
                panic!("rand(min, max) must return a number");
            };
            assert!((3.0..6.0).contains(&n), "{n} outside [3, 6)");
            assert_eq!(n.fract(), 0.0);
        }
        assert_eq!(
            random(&mut rng, &[Value::number(4.0), Value::number(4.0)]).unwrap(),
            Value::number(4.0)
        );
        assert!(random(&mut rng, &[Value::number(5.0), Value::number(1.0)]).is_err());
        assert!(random(&mut rng, &[Value::number(0.0), Value::number(1e12)]).is_err());
    }

    #[test]
    fn test_rand_other_arity_is_null() {
        let mut rng = seeded();
        assert_eq!(random(&mut rng, &[Value::number(1.0)]).unwrap(), Value::Null);
        let three = [Value::number(1.0), Value::number(2.0), Value::number(3.0)];
        assert_eq!(random(&mut rng, &three).unwrap(), Value::Null);
    }

    #[test]
    fn test_registration_rejects_duplicates() {
        let mut runtime = Runtime::new();
        register_demo_functions(&mut runtime).unwrap();
        assert_eq!(
            runtime.function_names(),
            vec!["add", "concat", "floor", "join", "rand", "repeat", "subtract"]
        );
        assert!(register_demo_functions(&mut runtime).is_err());
    }
}
