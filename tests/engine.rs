use mathexpr::{
    Config, Engine, Error, EvalError, Kind, ParseError, Scope, Value, compile, dispatch,
    interpreter::scope::MAX_CALL_DEPTH, parse,
};
use pretty_assertions::assert_eq;

fn eval(engine: &mut Engine, source: &str) -> Value {
    engine.eval(source)
          .unwrap_or_else(|e| panic!("{source:?} failed: {e}"))
          .unwrap_or_else(|| panic!("{source:?} produced no value"))
}

fn shown(source: &str) -> String {
    eval(&mut Engine::new(), source).to_string()
}

fn eval_error(source: &str) -> EvalError {
    match Engine::new().eval(source) {
        Err(Error::Eval(e)) => e,
        other => panic!("{source:?} should fail during evaluation, got {other:?}"),
    }
}

#[test]
fn literal_numbers_evaluate_to_themselves() {
    for n in ["0", "42", "3.5", ".25", "1e3", "2.5E-4"] {
        let expected = n.parse::<f64>().unwrap();
        assert_eq!(eval(&mut Engine::new(), n), Value::Number(expected));
    }
}

#[test]
fn operators_match_direct_dispatch() {
    let config = Config::default();
    let cases = [("+", "add"),
                 ("-", "subtract"),
                 ("*", "multiply"),
                 ("/", "divide"),
                 ("%", "mod"),
                 ("^", "pow"),
                 ("<", "smaller"),
                 (">=", "largerEq"),
                 ("==", "equal"),
                 ("!=", "unequal")];

    for (op, name) in cases {
        for (a, b) in [(7.0, 2.0), (1.5, 3.0), (2.0, 2.0)] {
            let source = format!("{a} {op} {b}");
            let direct = dispatch(name, &[Value::Number(a), Value::Number(b)], &config).unwrap();
            assert_eq!(eval(&mut Engine::new(), &source), direct, "{source}");
        }
    }
}

#[test]
fn compiled_expressions_are_deterministic() {
    let expression = compile(&parse("x * y + 1").unwrap(), Config::default());

    let mut first = Scope::new();
    let mut second = Scope::new();
    for scope in [&mut first, &mut second] {
        scope.set("x", 3.0);
        scope.set("y", 4.0);
    }

    let a = expression.evaluate(&mut first).unwrap();
    let b = expression.evaluate(&mut second).unwrap();
    assert_eq!(a, Some(Value::Number(13.0)));
    assert_eq!(a, b);
    assert_eq!(expression.evaluate(&mut first).unwrap(), a);
}

#[test]
fn scope_mutation_order() {
    let mut engine = Engine::new();
    engine.set("x", 1.0);
    engine.set("x", 2.0);
    assert_eq!(engine.get("x"), Some(&Value::Number(2.0)));

    engine.remove("x");
    assert_eq!(engine.get("x"), None);
    assert_eq!(engine.remove("x"), None);

    for name in ["a", "b", "c"] {
        engine.set(name, true);
    }
    engine.clear();
    assert!(engine.scope().is_empty());
    assert!(engine.get("a").is_none());
}

#[test]
fn broadcasting_matches_element_wise_dispatch() {
    let config = Config::default();
    let elements = [1.0, -2.0, 3.5];
    let collection = Value::from(elements.iter().copied().map(Value::Number).collect::<Vec<_>>());

    for name in ["add", "multiply", "pow", "larger"] {
        let result = dispatch(name, &[collection.clone(), Value::Number(2.0)], &config).unwrap();
        let expected = elements.iter()
                               .map(|&x| dispatch(name, &[Value::Number(x), Value::Number(2.0)], &config))
                               .collect::<Result<Vec<_>, _>>()
                               .unwrap();
        assert_eq!(result, Value::from(expected), "{name}");
    }
}

#[test]
fn assignment_persists_in_the_scope() {
    let mut engine = Engine::new();
    assert_eq!(eval(&mut engine, "x = 7 / 2"), Value::Number(3.5));
    assert_eq!(engine.get("x"), Some(&Value::Number(3.5)));
    assert_eq!(eval(&mut engine, "x + 3"), Value::Number(6.5));
}

#[test]
fn function_definitions() {
    let mut engine = Engine::new();
    let f = eval(&mut engine, "function f(x, y) = x^y");
    assert_eq!(f.kind(), Kind::Function);
    assert_eq!(f.to_string(), "f(x, y)");
    assert_eq!(eval(&mut engine, "f(2, 3)"), Value::Number(8.0));

    eval(&mut engine, "g(x) = 2x + 1");
    assert_eq!(eval(&mut engine, "g(f(2, 2))"), Value::Number(9.0));
}

#[test]
fn functions_see_globals_and_keep_parameters_local() {
    let mut engine = Engine::new();
    eval(&mut engine, "a = 10");
    eval(&mut engine, "h(x) = x + a");
    assert_eq!(eval(&mut engine, "h(1)"), Value::Number(11.0));

    eval(&mut engine, "a = 20");
    assert_eq!(eval(&mut engine, "h(1)"), Value::Number(21.0));
    assert!(engine.get("x").is_none());
}

#[test]
fn implicit_multiplication() {
    assert_eq!(shown("2 3"), "6");
    assert_eq!(shown("x = 3; 2 x^2"), "18");
    assert_eq!(shown("2(1 + 2)"), "6");
}

#[test]
fn builtins_are_values() {
    let mut engine = Engine::new();
    eval(&mut engine, "root = sqrt");
    assert_eq!(eval(&mut engine, "root(16)"), Value::Number(4.0));
}

#[test]
fn units_and_complex_numbers() {
    assert_eq!(shown("2 inch in cm"), "5.08 cm");
    assert_eq!(shown("2 inch to cm"), "5.08 cm");
    assert_eq!(shown("sqrt(-4)"), "2i");
    assert_eq!(shown("(1 + 2i) * (1 - 2i)"), "5");
    assert_eq!(shown("5 cm + 2 mm"), "5.2 cm");

    let Value::Number(c) = eval(&mut Engine::new(), "cos(45 deg)") else {
        panic!("cos of an angle is a number");
    };
    assert!((c - 0.707_106_781_186_547_6).abs() < 1e-12);
}

#[test]
fn big_numbers_are_exact() {
    let mut engine = Engine::with_config(Config::bignumber());
    assert_eq!(eval(&mut engine, "0.1 + 0.2").to_string(), "0.3");
    assert_eq!(eval(&mut engine, "0.1 + 0.2 == 0.3"), Value::Boolean(true));
    assert_eq!(eval(&mut engine, "1 / 3").to_string(), "0.33333333333333333333");
    assert_eq!(eval(&mut engine, "25!").to_string(), "15511210043330985984000000");

    let mut plain = Engine::new();
    assert_eq!(eval(&mut plain, "0.1 + 0.2").to_string(), "0.30000000000000004");
    assert_eq!(eval(&mut plain, "0.1 + 0.2 == 0.3"), Value::Boolean(true));
}

#[test]
fn configuration_is_captured_at_compile_time() {
    let engine = Engine::with_config(Config::bignumber());
    let expression = engine.compile("2 * 0.5").unwrap();

    let mut scope = Scope::new();
    let value = expression.evaluate(&mut scope).unwrap().unwrap();
    assert_eq!(value.kind(), Kind::BigNumber);
    assert_eq!(value.to_string(), "1");
}

#[test]
fn host_functions() {
    let mut engine = Engine::new();
    engine.set("twice",
               Value::native("twice", |args| match args {
                   [Value::Number(n)] => Ok(Value::Number(2.0 * n)),
                   _ => Err(EvalError::invalid("twice", "expected one number")),
               }));

    assert_eq!(eval(&mut engine, "twice(21)"), Value::Number(42.0));
    assert!(matches!(engine.eval("twice(\"a\")"),
                     Err(Error::Eval(EvalError::InvalidArgument { .. }))));
}

#[test]
fn collections_and_indexing() {
    assert_eq!(shown("[1, 2, 3] * 2"), "[2, 4, 6]");
    assert_eq!(shown("[1, 2; 3, 4]'"), "[[1, 3], [2, 4]]");
    assert_eq!(shown("m = [1, 2; 3, 4]; m[2, 1]"), "3");
    assert_eq!(shown("v = [10, 20, 30]; v[3]"), "30");
    assert_eq!(shown("size([1, 2, 3; 4, 5, 6])"), "[2, 3]");
    assert_eq!(shown("\"abc\"[2]"), "\"b\"");
}

#[test]
fn empty_source_has_no_value() {
    let mut engine = Engine::new();
    assert_eq!(engine.eval("").unwrap(), None);
    assert_eq!(engine.eval("\n ; # just a comment").unwrap(), None);
}

#[test]
fn undefined_names_fail() {
    assert_eq!(eval_error("x + y"), EvalError::UndefinedSymbol { name: "x".to_string() });
    assert_eq!(eval_error("frobnicate(1)"),
               EvalError::UndefinedFunction { name: "frobnicate".to_string() });
}

#[test]
fn string_and_unit_are_unsupported() {
    assert_eq!(eval_error("\"a\" + 5 cm"),
               EvalError::UnsupportedType { name:  "add".to_string(),
                                            kinds: vec![Kind::String, Kind::Unit], });
    assert!(matches!(eval_error("\"a\" + 1"), EvalError::UnsupportedType { .. }));
    assert_eq!(shown("\"a\" + \"b\""), "\"ab\"");
}

#[test]
fn evaluation_errors() {
    assert!(matches!(eval_error("[1, 2] + [1, 2, 3]"), EvalError::DimensionMismatch { .. }));
    assert!(matches!(eval_error("5 cm + 2 kg"), EvalError::DimensionMismatch { .. }));
    assert!(matches!(eval_error("[1, 2; 3]"), EvalError::DimensionMismatch { .. }));
    assert!(matches!(eval_error("1 / 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_error("5 % 0"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_error("a = 2; a(1)"),
                     EvalError::NotCallable { kind: Kind::Number, .. }));
    assert!(matches!(eval_error("sqrt(1, 2)"), EvalError::Arguments { given: 2, .. }));
    assert!(matches!(eval_error("f(x) = x; f(1, 2)"), EvalError::Arguments { .. }));
    assert_eq!(eval_error("[1, 2][3]"), EvalError::IndexOutOfRange { index: 3, size: 2 });
    assert!(matches!(eval_error("2.5!"), EvalError::InvalidArgument { .. }));
}

#[test]
fn runaway_recursion_is_reported() {
    let limit = EvalError::RecursionLimit { limit: MAX_CALL_DEPTH };
    assert_eq!(eval_error("f(x) = f(x); f(1)"), limit);
    assert_eq!(eval_error("f(x) = 1 + f(x); f(1)"), limit);
    assert_eq!(eval_error("g(x) = 2 * (1 + g(x)); g(1)"), limit);
    assert_eq!(eval_error("h(x) = -----h(x); h(1)"), limit);
    assert_eq!(eval_error(&format!("k(x) = {}k(x); k(1)", "-".repeat(60))), limit);
    assert_eq!(eval_error("a(x) = [b(x), 1]; b(x) = sqrt(a(x)) + 1; a(1)"), limit);

    let mut engine = Engine::new();
    assert!(engine.eval("f(x) = f(x) * 2; f(1)").is_err());
    assert_eq!(eval(&mut engine, "f = 3; f + 1"), Value::Number(4.0));
}

#[test]
fn syntax_errors() {
    assert!(matches!(Engine::new().eval("1 +"), Err(Error::Parse(_))));
    assert!(matches!(Engine::new().eval("1 < 2 < 3"),
                     Err(Error::Parse(ParseError::ChainedComparison { .. }))));
    assert!(matches!(Engine::new().eval("2 $ 3"), Err(Error::Lex(_))));
    assert!(matches!(Engine::new().eval("\"open"), Err(Error::Lex(_))));
}
