use mathexpr::{
    Config, EvalError, Kind, Value, dispatch,
    interpreter::{
        dispatch::{
            collection::{broadcast2, size},
            core::OPERATION_NAMES,
            lookup,
            promote::promote_pair,
        },
        value::{big::parse_decimal, unit::Unit},
    },
};
use num_complex::Complex64;
use pretty_assertions::assert_eq;

fn call(name: &str, args: &[Value]) -> Result<Value, EvalError> {
    dispatch(name, args, &Config::default())
}

fn ok(name: &str, args: &[Value]) -> Value {
    call(name, args).unwrap_or_else(|e| panic!("{name} failed: {e}"))
}

fn n(x: f64) -> Value {
    Value::Number(x)
}

fn big(text: &str) -> Value {
    Value::BigNumber(parse_decimal(text).unwrap())
}

fn c(re: f64, im: f64) -> Value {
    Value::Complex(Complex64::new(re, im))
}

fn quantity(value: f64, unit: &str) -> Value {
    let unit = Unit::parse(unit).unwrap();
    Value::Unit(unit.with_si_value(value * unit.si_value()))
}

fn array(items: &[Value]) -> Value {
    Value::from(items.to_vec())
}

fn close(value: &Value, expected: f64) -> bool {
    matches!(value, Value::Number(x) if (x - expected).abs() < 1e-12)
}

#[test]
fn every_operation_is_registered_once() {
    for name in OPERATION_NAMES {
        assert_eq!(lookup(name).map(|operation| operation.name), Some(*name));
    }
    let mut names = OPERATION_NAMES.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), OPERATION_NAMES.len());
}

#[test]
fn promotion_is_one_directional() {
    assert_eq!(promote_pair(&n(0.5), &big("0.25")), Some((big("0.5"), big("0.25"))));
    assert_eq!(promote_pair(&big("1"), &c(0.0, 1.0)), Some((c(1.0, 0.0), c(0.0, 1.0))));
    assert_eq!(promote_pair(&n(f64::NAN), &big("1")).map(|(x, y)| (x.kind(), y.kind())),
               Some((Kind::Number, Kind::Number)));
    assert_eq!(promote_pair(&Value::from("a"), &n(1.0)), None);
}

#[test]
fn mixed_kinds_are_promoted() {
    assert_eq!(ok("add", &[n(2.0), Value::Boolean(true)]), n(3.0));
    assert_eq!(ok("add", &[n(0.5), big("0.25")]), big("0.75"));
    assert_eq!(ok("multiply", &[c(1.0, 1.0), n(2.0)]), c(2.0, 2.0));
    assert_eq!(ok("add", &[big("1"), c(0.0, 1.0)]), c(1.0, 1.0));
    assert_eq!(ok("or", &[big("0"), Value::Boolean(true)]), Value::Boolean(true));
}

#[test]
fn big_numbers_downgrade_without_a_rule() {
    assert_eq!(ok("pow", &[big("2"), big("10")]), big("1024"));
    assert!(close(&ok("pow", &[big("2"), big("0.5")]), std::f64::consts::SQRT_2));
    assert_eq!(ok("sqrt", &[big("2.25")]), big("1.5"));
    assert_eq!(ok("factorial", &[big("5")]), big("120"));
}

#[test]
fn huge_big_powers_fall_back_to_numbers() {
    let exact = ok("pow", &[big("10"), big("1000")]);
    assert_eq!(exact, big(&format!("1{}", "0".repeat(1000))));

    assert_eq!(ok("pow", &[big("10"), big("10000000")]), n(f64::INFINITY));
    assert_eq!(ok("pow", &[big("0.5"), big("1000000000")]), n(0.0));
    assert_eq!(ok("pow", &[big("-2"), big("4294967297")]), n(f64::NEG_INFINITY));
}

#[test]
fn arithmetic_edge_cases() {
    assert_eq!(ok("mod", &[n(-7.0), n(3.0)]), n(2.0));
    assert_eq!(ok("mod", &[big("-7"), big("3")]), big("2"));
    assert!(matches!(ok("pow", &[n(-8.0), n(1.0 / 3.0)]), Value::Complex(_)));
    assert_eq!(ok("pow", &[c(0.0, 1.0), n(2.0)]), c(-1.0, 0.0));

    for zero in [n(0.0), big("0"), c(0.0, 0.0)] {
        assert!(matches!(call("divide", &[n(1.0), zero]), Err(EvalError::DivisionByZero { .. })));
    }
    assert!(matches!(call("pow", &[big("0"), big("-1")]), Err(EvalError::DivisionByZero { .. })));
}

#[test]
fn comparisons() {
    assert_eq!(ok("equal", &[n(0.1 + 0.2), n(0.3)]), Value::Boolean(true));
    assert_eq!(ok("equal", &[big("0.3"), big("0.30000000000000001")]), Value::Boolean(false));
    assert_eq!(ok("unequal", &[Value::from("a"), Value::from("b")]), Value::Boolean(true));
    assert_eq!(ok("smaller", &[n(f64::NAN), n(1.0)]), Value::Boolean(false));
    assert_eq!(ok("larger", &[n(f64::NAN), n(1.0)]), Value::Boolean(false));
    assert_eq!(ok("largerEq", &[quantity(1.0, "m"), quantity(100.0, "cm")]), Value::Boolean(true));

    assert_eq!(ok("compare", &[n(1.0), n(2.0)]), n(-1.0));
    assert_eq!(ok("compare", &[n(f64::NAN), n(1.0)]), n(1.0));
    assert_eq!(ok("compare", &[Value::from("b"), Value::from("a")]), n(1.0));
    assert_eq!(ok("compare", &[big("1"), n(1.0)]), n(0.0));
}

#[test]
fn epsilon_comes_from_the_configuration() {
    let loose = Config::default().with_epsilon(1e-3);
    assert_eq!(dispatch("equal", &[n(1.0), n(1.0005)], &loose), Ok(Value::Boolean(true)));
    assert_eq!(ok("equal", &[n(1.0), n(1.0005)]), Value::Boolean(false));
}

#[test]
fn logic() {
    assert_eq!(ok("and", &[n(1.0), n(0.0)]), Value::Boolean(false));
    assert_eq!(ok("xor", &[Value::Boolean(true), Value::Boolean(false)]), Value::Boolean(true));
    assert_eq!(ok("not", &[array(&[n(0.0), n(2.0)])]),
               array(&[Value::Boolean(true), Value::Boolean(false)]));
}

#[test]
fn broadcasting() {
    let matrix = array(&[array(&[n(1.0), n(2.0)]), array(&[n(3.0), n(4.0)])]);
    assert_eq!(ok("add", &[matrix.clone(), n(1.0)]),
               array(&[array(&[n(2.0), n(3.0)]), array(&[n(4.0), n(5.0)])]));
    assert_eq!(ok("subtract", &[n(10.0), array(&[n(1.0), n(2.0)])]), array(&[n(9.0), n(8.0)]));
    assert_eq!(ok("sqrt", &[array(&[n(4.0), n(-1.0)])]), array(&[n(2.0), c(0.0, 1.0)]));
    assert_eq!(size(&matrix).unwrap(), vec![2, 2]);

    let error = broadcast2("add", &array(&[n(1.0)]), &array(&[n(1.0), n(2.0)]), &|x, _| Ok(x.clone()));
    assert!(matches!(error, Err(EvalError::DimensionMismatch { .. })));

    let ragged = array(&[array(&[n(1.0)]), array(&[n(1.0), n(2.0)])]);
    assert!(matches!(call("transpose", &[ragged]), Err(EvalError::DimensionMismatch { .. })));
}

#[test]
fn units() {
    assert_eq!(ok("add", &[quantity(5.0, "cm"), quantity(2.0, "mm")]).to_string(), "5.2 cm");
    assert_eq!(ok("multiply", &[n(3.0), quantity(2.0, "kg")]).to_string(), "6 kg");
    assert_eq!(ok("divide", &[quantity(1.0, "km"), quantity(250.0, "m")]), n(4.0));
    assert_eq!(ok("to", &[quantity(90.0, "deg"), Value::Unit(Unit::parse("rad").unwrap())])
                   .to_string(),
               "1.5707963267949 rad");

    assert!(matches!(call("add", &[quantity(1.0, "m"), quantity(1.0, "s")]),
                     Err(EvalError::DimensionMismatch { .. })));
    assert!(matches!(call("to", &[quantity(1.0, "m"), Value::Unit(Unit::parse("kg").unwrap())]),
                     Err(EvalError::DimensionMismatch { .. })));
    assert!(matches!(call("to", &[quantity(1.0, "m"), quantity(2.0, "cm")]),
                     Err(EvalError::InvalidArgument { .. })));
}

#[test]
fn unsupported_kinds_are_named() {
    let error = call("add", &[Value::from("a"), quantity(1.0, "m")]).unwrap_err();
    assert_eq!(error,
               EvalError::UnsupportedType { name:  "add".to_string(),
                                            kinds: vec![Kind::String, Kind::Unit], });
    assert_eq!(error.to_string(), "Function add(string, unit) is not supported");
    assert!(matches!(call("sqrt", &[Value::from("4")]), Err(EvalError::UnsupportedType { .. })));
}

#[test]
fn arity_is_checked() {
    assert_eq!(call("add", &[n(1.0)]),
               Err(EvalError::Arguments { name:     "add".to_string(),
                                          given:    1,
                                          expected: "2".to_string(), }));
    assert!(matches!(call("log", &[n(1.0), n(2.0), n(3.0)]),
                     Err(EvalError::Arguments { given: 3, ref expected, .. }) if expected == "1 or 2"));
    assert_eq!(call("frobnicate", &[]),
               Err(EvalError::UndefinedFunction { name: "frobnicate".to_string() }));
}

#[test]
fn builtin_functions() {
    assert_eq!(ok("abs", &[c(3.0, 4.0)]), n(5.0));
    assert_eq!(ok("abs", &[big("-2.5")]), big("2.5"));
    assert_eq!(ok("exp", &[n(0.0)]), n(1.0));
    assert!(close(&ok("sin", &[quantity(90.0, "deg")]), 1.0));
    assert!(close(&ok("log", &[n(100.0), n(10.0)]), 2.0));
    assert_eq!(ok("log", &[n(0.0)]), n(f64::NEG_INFINITY));

    assert_eq!(ok("round", &[n(-2.5)]), n(-3.0));
    assert_eq!(ok("round", &[big("2.5")]), big("3"));
    assert_eq!(ok("round", &[big("2.71828"), n(2.0)]), big("2.72"));
    assert!(matches!(call("round", &[n(1.0), n(0.5)]), Err(EvalError::InvalidArgument { .. })));
    assert_eq!(ok("floor", &[c(1.5, -1.5)]), c(1.0, -2.0));
    assert_eq!(ok("ceil", &[big("-1.5")]), big("-1"));
}

#[test]
fn conversions() {
    assert_eq!(ok("re", &[c(1.0, 2.0)]), n(1.0));
    assert_eq!(ok("im", &[n(7.0)]), n(0.0));
    assert_eq!(ok("conj", &[c(1.0, 2.0)]), c(1.0, -2.0));
    assert_eq!(ok("number", &[Value::from("12.5")]), n(12.5));
    assert_eq!(ok("number", &[big("0.5")]), n(0.5));
    assert!(matches!(call("number", &[Value::from("abc")]), Err(EvalError::InvalidArgument { .. })));
    assert_eq!(ok("bignumber", &[n(0.1)]), big("0.1"));
    assert_eq!(ok("complex", &[n(1.0), n(2.0)]), c(1.0, 2.0));
    assert_eq!(ok("string", &[c(3.0, -4.0)]), Value::from("3 - 4i"));
    assert_eq!(ok("string", &[Value::from("x")]), Value::from("x"));
    assert_eq!(ok("size", &[n(1.0)]), array(&[]));
}
