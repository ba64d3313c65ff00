use std::{cell::RefCell, collections::HashMap, fs, path::Path};

use postfixer::{
    Bindings, Expression,
    error::{Error, ErrorKind, ProviderError},
    interpreter::provider::{from_fn, parse_binding},
    parse_and_evaluate, try_parse_and_evaluate,
};
use tracing_test::traced_test;
use walkdir::WalkDir;

const DELTA: f64 = 1e-10;

fn bindings(pairs: &[(&str, f64)]) -> Bindings {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

fn assert_value(src: &str, pairs: &[(&str, f64)], expected: f64) {
    match try_parse_and_evaluate(src, &mut bindings(pairs)) {
        Ok(value) => assert!((value - expected).abs() < DELTA,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, pairs: &[(&str, f64)], kind: ErrorKind) {
    match try_parse_and_evaluate(src, &mut bindings(pairs)) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with {e}"),
    }
}

#[test]
fn simple_and_complex_expressions() {
    assert_value("2 + 3", &[], 5.0);
    assert_value("10", &[], 10.0);
    assert_value("4 + (10 * (20 - 19 * (30 + 1))) + 7 * (2 - 1)", &[], -5679.0);
    assert_value("3 * (4 * (1 + 2 * 3 / 2) - 4) / 1 + 2", &[], 38.0);
    assert_value("99.9 / 1", &[], 99.9);
}

#[test]
fn whitespace_inside_numbers() {
    assert_value("1 0 0 +  1  2  3  .     4", &[], 223.4);
}

#[test]
fn functions_and_variables() {
    assert_value("sin(0) + cos(0) + sqrt(4)", &[], 3.0);
    assert_value("sin(cos(0))", &[], 1.0_f64.sin());
    assert_value("sin(1 + 2 * 3)", &[], 7.0_f64.sin());
    assert_value("x + 5", &[("x", 3.0)], 8.0);
    assert_value("a + b * c", &[("a", 1.0), ("b", 2.0), ("c", 3.0)], 7.0);
    assert_value("variableName + 10", &[("variableName", 5.0)], 15.0);
    assert_value("sin(x)", &[("x", 0.0)], 0.0);
    assert_value("x + sin(y)", &[("x", 1.0), ("y", 0.0)], 1.0);
    assert_value("x1 + x2", &[("x1", 1.0), ("x2", 2.0)], 3.0);
}

#[test]
fn failures_by_kind() {
    assert_failure("99.9 / 0", &[], ErrorKind::DivisionByZero);
    assert_failure("1 + 2 - 3 +", &[], ErrorKind::InsufficientOperands);
    assert_failure("1 + (2 - 3) + (4 * (1 + 3)))", &[], ErrorKind::UnbalancedBrackets);
    assert_failure("2 + )3(", &[], ErrorKind::UnbalancedBrackets);
    assert_failure("sqrt(x)", &[("x", -4.0)], ErrorKind::NegativeSqrt);
    assert_failure("sqrt(-4)", &[], ErrorKind::InsufficientOperands);
    assert_failure("", &[], ErrorKind::OperandCountMismatch);
    assert_failure("invalidFunc(5)", &[], ErrorKind::ProviderRejected);
    assert_failure("invalidFunc(5)", &[("invalidFunc", 1.0)], ErrorKind::OperandCountMismatch);
}

#[test]
fn unbalanced_brackets_fail_before_the_provider_is_asked() {
    let mut asked = Vec::new();
    let mut provider = from_fn(|name: &str| {
        asked.push(name.to_string());
        Ok(1.0)
    });
    let err = try_parse_and_evaluate("(x + 1))", &mut provider).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnbalancedBrackets);
    drop(provider);
    assert!(asked.is_empty());
}

#[test]
fn uppercase_function_name_is_a_variable() {
    let asked = RefCell::new(Vec::new());
    let mut provider = from_fn(|name: &str| {
        asked.borrow_mut().push(name.to_string());
        Ok(1.0)
    });

    assert_eq!(try_parse_and_evaluate("SIN", &mut provider).unwrap(), 1.0);
    let err = try_parse_and_evaluate("SIN(0)", &mut provider).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OperandCountMismatch);
    assert_eq!(*asked.borrow(), ["SIN", "SIN"]);
}

#[test]
fn provider_is_asked_once_per_distinct_variable() {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut provider = from_fn(|name: &str| {
        *counts.entry(name.to_string()).or_default() += 1;
        Ok(2.0)
    });
    assert_eq!(try_parse_and_evaluate("x * x + y * x - y", &mut provider).unwrap(), 6.0);
    drop(provider);
    assert_eq!(counts, HashMap::from([("x".to_string(), 1), ("y".to_string(), 1)]));
}

#[test]
fn provider_rejection_propagates() {
    let mut provider = from_fn(|name: &str| Err(ProviderError::Unbound { name: name.to_string() }));
    match try_parse_and_evaluate("1 + q", &mut provider) {
        Err(Error::Provider(ProviderError::Unbound { name })) => assert_eq!(name, "q"),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn nan_binding_is_still_a_result() {
    let value = parse_and_evaluate("x + 1", &mut bindings(&[("x", f64::NAN)]));
    assert!(value.is_some_and(f64::is_nan));
}

#[test]
fn compiled_expression_can_be_reused() {
    let expression = Expression::parse("(a + b) / 2").unwrap();
    assert_eq!(expression.variables(), ["a", "b"]);
    assert_eq!(expression.tokens().len(), 7);
    assert_eq!(expression.evaluate_with(&bindings(&[("a", 1.0), ("b", 3.0)])).unwrap(), 2.0);
    assert_eq!(expression.evaluate_with(&bindings(&[("a", 4.0), ("b", 6.0)])).unwrap(), 5.0);
}

#[test]
#[traced_test]
fn failures_are_reported_and_collapse_to_none() {
    assert_eq!(parse_and_evaluate("1 / 0", &mut Bindings::new()), None);
    assert!(logs_contain("Error: division by zero"));

    assert_eq!(parse_and_evaluate("(1", &mut Bindings::new()), None);
    assert!(logs_contain("Error: unbalanced brackets"));

    assert_eq!(parse_and_evaluate("2 * 21", &mut Bindings::new()), Some(42.0));
}

/// A fixture line reads `expression => expected`, optionally followed by
/// `| name=value ...` bindings. `expected` is a number or `error`.
fn check_fixture_line(path: &Path, number: usize, line: &str) {
    let (case, presets) = line.split_once(" | ").unwrap_or((line, ""));
    let (expression, expected) =
        case.split_once("=>")
            .unwrap_or_else(|| panic!("{}:{number}: missing '=>'", path.display()));

    let mut values = Bindings::new();
    for binding in presets.split_whitespace() {
        let (name, value) = parse_binding(binding).unwrap_or_else(|e| {
                                                      panic!("{}:{number}: {e}", path.display())
                                                  });
        values.insert(name, value);
    }

    let result = try_parse_and_evaluate(expression, &mut values);
    match expected.trim() {
        "error" => assert!(result.is_err(),
                           "{}:{number}: {expression:?} should fail, got {result:?}",
                           path.display()),
        number_text => {
            let expected: f64 = number_text.parse()
                                           .unwrap_or_else(|_| panic!("{}:{number}: bad value",
                                                                      path.display()));
            match result {
                Ok(value) => assert!((value - expected).abs() < DELTA,
                                     "{}:{number}: {expression:?} gave {value}, expected {expected}",
                                     path.display()),
                Err(e) => panic!("{}:{number}: {expression:?} failed: {e}", path.display()),
            }
        },
    }
}

#[test]
fn fixture_files_evaluate_as_listed() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut count = 0;

    for entry in WalkDir::new(&root).into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            check_fixture_line(path, i + 1, line);
        }
    }

    assert!(count > 0, "No fixture cases found in {}", root.display());
}
