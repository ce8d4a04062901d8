//! Evaluation tests.
//!
//! Compiles arithmetic expressions and runs the chunk on a minimal stack
//! machine, checking the result against direct evaluation.

use ember_core::{Chunk, OpCode, Value, compile};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Runs `chunk` until `Return` and yields the value left on the stack.
fn run(chunk: &Chunk) -> f64 {
    let code = chunk.code();
    let mut stack: Vec<f64> = Vec::new();
    let mut ip = 0;

    loop {
        let op = OpCode::try_from(code[ip]).expect("valid opcode");
        ip += 1;
        match op {
            OpCode::Constant => {
                let Value::Number(n) = *chunk.constant(code[ip]).expect("constant in pool");
                ip += 1;
                stack.push(n);
            }
            OpCode::Negate => {
                let a = stack.pop().expect("operand");
                stack.push(-a);
            }
            OpCode::Add | OpCode::Subtract | OpCode::Multiply | OpCode::Divide => {
                let b = stack.pop().expect("right operand");
                let a = stack.pop().expect("left operand");
                stack.push(match op {
                    OpCode::Add => a + b,
                    OpCode::Subtract => a - b,
                    OpCode::Multiply => a * b,
                    _ => a / b,
                });
            }
            OpCode::Return => {
                assert_eq!(stack.len(), 1, "stack should hold exactly the result");
                return stack[0];
            }
        }
    }
}

fn eval(src: &str) -> f64 {
    let mut chunk = Chunk::new();
    compile(src, &mut chunk).unwrap_or_else(|err| panic!("{src:?} failed to compile: {err}"));
    assert_eq!(chunk.code().len(), chunk.lines().len());
    run(&chunk)
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval("1 + 2 * 3"), 7.0);
    assert_eq!(eval("(1 + 2) * 3"), 9.0);
    assert_eq!(eval("-5"), -5.0);
    assert_eq!(eval("10 - 4 - 3"), 3.0);
    assert_eq!(eval("64 / 8 / 2"), 4.0);
    assert_eq!(eval("-2 * -3"), 6.0);
    assert_eq!(eval("-(2 + 3) * 4"), -20.0);
    assert_eq!(eval("1.5 + 2.25"), 3.75);
}

#[test]
fn test_multiline_expression() {
    assert_eq!(eval("1 +\n  2 // two\n  * 3\n"), 7.0);
}

#[derive(Debug, Clone)]
enum Expr {
    Num(u8),
    Neg(Box<Expr>),
    Group(Box<Expr>),
    Bin(char, Box<Expr>, Box<Expr>),
}

fn binding(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        _ => 2,
    }
}

impl Expr {
    fn value(&self) -> f64 {
        match self {
            Expr::Num(n) => f64::from(*n),
            Expr::Neg(inner) => -inner.value(),
            Expr::Group(inner) => inner.value(),
            Expr::Bin(op, l, r) => {
                let (a, b) = (l.value(), r.value());
                match op {
                    '+' => a + b,
                    '-' => a - b,
                    '*' => a * b,
                    _ => a / b,
                }
            }
        }
    }

    /// Renders with the fewest parentheses that keep the tree's meaning.
    fn render(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Group(inner) => format!("({})", inner.render()),
            Expr::Neg(inner) => match **inner {
                Expr::Bin(..) => format!("-({})", inner.render()),
                _ => format!("-{}", inner.render()),
            },
            Expr::Bin(op, l, r) => {
                let left = match **l {
                    Expr::Bin(lop, ..) if binding(lop) < binding(*op) => format!("({})", l.render()),
                    _ => l.render(),
                };
                let right = match **r {
                    Expr::Bin(rop, ..) if binding(rop) <= binding(*op) => format!("({})", r.render()),
                    _ => r.render(),
                };
                format!("{left} {op} {right}")
            }
        }
    }
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = any::<u8>().prop_map(Expr::Num);
    leaf.prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expr::Neg(Box::new(e))),
            inner.clone().prop_map(|e| Expr::Group(Box::new(e))),
            (prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')], inner.clone(), inner)
                .prop_map(|(op, l, r)| Expr::Bin(op, Box::new(l), Box::new(r))),
        ]
    })
}

fn same(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

proptest! {
    #[test]
    fn compiled_code_matches_direct_evaluation(expr in expr_strategy()) {
        let src = expr.render();
        let expected = expr.value();
        let actual = eval(&src);
        prop_assert!(same(actual, expected), "{src} => {actual}, expected {expected}");
    }

    #[test]
    fn valid_expressions_keep_tables_in_lockstep(expr in expr_strategy()) {
        let mut chunk = Chunk::new();
        prop_assert!(compile(&expr.render(), &mut chunk).is_ok());
        prop_assert_eq!(chunk.code().len(), chunk.lines().len());
        prop_assert_eq!(chunk.code().last().copied(), Some(OpCode::Return as u8));
    }
}
