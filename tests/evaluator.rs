use postfixer::{
    Bindings,
    error::RuntimeError,
    interpreter::{
        converter::to_postfix,
        evaluator::{binary::apply_operator, core::evaluate, function::apply_function},
        lexer::tokenize,
    },
    token::{Function, Operator, Token},
};

const DELTA: f64 = 1e-10;

fn eval(src: &str, bindings: &[(&str, f64)]) -> Result<f64, RuntimeError> {
    let postfix = to_postfix(&tokenize(src)).unwrap_or_else(|e| panic!("{src:?}: {e}"));
    let bindings: Bindings = bindings.iter().map(|(k, v)| ((*k).to_string(), *v)).collect();
    evaluate(&postfix, &bindings)
}

fn assert_value(src: &str, bindings: &[(&str, f64)], expected: f64) {
    match eval(src, bindings) {
        Ok(value) => assert!((value - expected).abs() < DELTA,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

#[test]
fn arithmetic_operators() {
    assert_value("2 + 3", &[], 5.0);
    assert_value("2 - 3", &[], -1.0);
    assert_value("2 * 3", &[], 6.0);
    assert_value("3 / 2", &[], 1.5);
}

#[test]
fn left_operand_is_the_one_pushed_first() {
    let postfix = [Token::number("8"), Token::number("2"), Token::operator(Operator::Div)];
    assert_eq!(evaluate(&postfix, &Bindings::new()), Ok(4.0));

    let postfix = [Token::number("2"), Token::number("8"), Token::operator(Operator::Sub)];
    assert_eq!(evaluate(&postfix, &Bindings::new()), Ok(-6.0));
}

#[test]
fn precedence_and_associativity() {
    assert_value("8 - 4 - 2", &[], 2.0);
    assert_value("16 / 4 / 2", &[], 2.0);
    assert_value("2 + 3 * 4", &[], 14.0);
    assert_value("(2 + 3) * 4", &[], 20.0);
}

#[test]
fn functions() {
    assert_value("sin(0)", &[], 0.0);
    assert_value("cos(0)", &[], 1.0);
    assert_value("sqrt(16)", &[], 4.0);
    assert_value("sqrt(0)", &[], 0.0);
    assert_value("sin(1 + 2 * 3)", &[], 7.0_f64.sin());
    assert_value("sin(cos(0))", &[], 1.0_f64.sin());
}

#[test]
fn variables_come_from_bindings() {
    assert_value("x + 5", &[("x", 3.0)], 8.0);
    assert_value("a + b * c", &[("a", 1.0), ("b", 2.0), ("c", 3.0)], 7.0);
    assert_value("sqrt(x * x)", &[("x", 12.5)], 12.5);
}

#[test]
fn unbound_variable() {
    assert_eq!(eval("x + 1", &[("y", 1.0)]),
               Err(RuntimeError::UnboundVariable { name: "x".to_string() }));
}

#[test]
fn division_by_zero_never_yields_infinity() {
    assert_eq!(eval("1 / 0", &[]), Err(RuntimeError::DivisionByZero));
    assert_eq!(eval("99.9 / 0.0", &[]), Err(RuntimeError::DivisionByZero));
    assert_eq!(eval("1 / (2 - 2)", &[]), Err(RuntimeError::DivisionByZero));
    assert_eq!(eval("1 / z", &[("z", -0.0)]), Err(RuntimeError::DivisionByZero));
    assert_eq!(apply_operator(Operator::Div, 0.0, 0.0), Err(RuntimeError::DivisionByZero));
}

#[test]
fn negative_square_root() {
    assert_eq!(eval("sqrt(x)", &[("x", -4.0)]), Err(RuntimeError::NegativeSqrt { value: -4.0 }));
    assert_eq!(apply_function(Function::Sqrt, -0.5),
               Err(RuntimeError::NegativeSqrt { value: -0.5 }));
    assert_eq!(apply_function(Function::Sqrt, 9.0), Ok(3.0));
}

#[test]
fn operator_without_enough_operands() {
    assert_eq!(eval("1 + 2 - 3 +", &[]),
               Err(RuntimeError::InsufficientOperands { operator: Operator::Add }));
    // There is no unary minus.
    assert_eq!(eval("sqrt(-4)", &[]),
               Err(RuntimeError::InsufficientOperands { operator: Operator::Sub }));
    assert_eq!(eval("*", &[]), Err(RuntimeError::InsufficientOperands { operator: Operator::Mul }));
}

#[test]
fn function_without_argument() {
    let postfix = [Token::function(Function::Cos)];
    assert_eq!(evaluate(&postfix, &Bindings::new()),
               Err(RuntimeError::InsufficientArguments { function: Function::Cos }));
}

#[test]
fn exactly_one_value_must_remain() {
    assert_eq!(eval("", &[]), Err(RuntimeError::OperandCountMismatch { count: 0 }));
    assert_eq!(eval("1 2", &[]), Ok(12.0));
    assert_eq!(eval("x (y)", &[("x", 1.0), ("y", 2.0)]),
               Err(RuntimeError::OperandCountMismatch { count: 2 }));
    assert_eq!(eval("SIN(0)", &[("SIN", 1.0)]),
               Err(RuntimeError::OperandCountMismatch { count: 2 }));
}

#[test]
fn hand_built_number_must_parse() {
    let postfix = [Token::number("1,5")];
    assert_eq!(evaluate(&postfix, &Bindings::new()),
               Err(RuntimeError::InvalidNumber { literal: "1,5".to_string() }));
}

#[test]
fn parentheses_in_postfix_are_ignored() {
    let postfix = [Token::left_paren(), Token::number("7"), Token::right_paren()];
    assert_eq!(evaluate(&postfix, &Bindings::new()), Ok(7.0));
}
