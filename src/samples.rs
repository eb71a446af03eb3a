// samples.rs - Built-in sample functions for the demo binary and benchmarks
//
// Hand-built ASTs standing in for parsed source, since parsing is a host
// concern. Line numbers follow the Python sources shown in the doc comments.

use crate::ast::{
    CmpOperator, Expr, ExprContext, FunctionDef, Number, Operator, Parameter, Stmt,
};

fn load(id: &str, line: usize) -> Box<Expr> {
    Box::new(Expr::Name {
        id: id.to_string(),
        ctx: ExprContext::Load,
        line,
        column: 1,
    })
}

fn int(value: i64, line: usize) -> Box<Expr> {
    Box::new(Expr::Num {
        value: Number::Integer(value),
        line,
        column: 1,
    })
}

fn bin(left: Box<Expr>, op: Operator, right: Box<Expr>, line: usize) -> Box<Expr> {
    Box::new(Expr::BinOp {
        left,
        op,
        right,
        line,
        column: 1,
    })
}

fn eq(left: Box<Expr>, right: Box<Expr>, line: usize) -> Box<Expr> {
    Box::new(Expr::Compare {
        left,
        ops: vec![CmpOperator::Eq],
        comparators: vec![right],
        line,
        column: 1,
    })
}

fn call(func: &str, args: Vec<Box<Expr>>, line: usize) -> Box<Expr> {
    Box::new(Expr::Call {
        func: load(func, line),
        args,
        keywords: Vec::new(),
        line,
        column: 1,
    })
}

fn ret(value: Box<Expr>, line: usize) -> Box<Stmt> {
    Box::new(Stmt::Return {
        value: Some(value),
        line,
        column: 1,
    })
}

fn if_return(test: Box<Expr>, value: Box<Expr>, line: usize) -> Box<Stmt> {
    Box::new(Stmt::If {
        test,
        body: vec![ret(value, line + 1)],
        orelse: Vec::new(),
        line,
        column: 1,
    })
}

/// ```python
/// def factorial(n, acc=1):
///     if n == 0:
///         return acc
///     return factorial(n - 1, acc * n)
/// ```
pub fn factorial() -> FunctionDef {
    FunctionDef {
        name: "factorial".to_string(),
        params: vec![
            Parameter::new("n"),
            Parameter::with_default("acc", Expr::Num {
                value: Number::Integer(1),
                line: 1,
                column: 1,
            }),
        ],
        body: vec![
            if_return(eq(load("n", 2), int(0, 2), 2), load("acc", 3), 2),
            ret(
                call(
                    "factorial",
                    vec![
                        bin(load("n", 4), Operator::Sub, int(1, 4), 4),
                        bin(load("acc", 4), Operator::Mult, load("n", 4), 4),
                    ],
                    4,
                ),
                4,
            ),
        ],
        returns: None,
        is_async: false,
        line: 1,
        column: 1,
    }
}

/// ```python
/// def factorial_mod_k(acc, n, k):
///     if n == 0:
///         return acc % k
///     return factorial_mod_k(acc * n % k, n - 1, k)
/// ```
pub fn factorial_mod_k() -> FunctionDef {
    FunctionDef {
        name: "factorial_mod_k".to_string(),
        params: vec![
            Parameter::new("acc"),
            Parameter::new("n"),
            Parameter::new("k"),
        ],
        body: vec![
            if_return(
                eq(load("n", 2), int(0, 2), 2),
                bin(load("acc", 3), Operator::Mod, load("k", 3), 3),
                2,
            ),
            ret(
                call(
                    "factorial_mod_k",
                    vec![
                        bin(
                            bin(load("acc", 4), Operator::Mult, load("n", 4), 4),
                            Operator::Mod,
                            load("k", 4),
                            4,
                        ),
                        bin(load("n", 4), Operator::Sub, int(1, 4), 4),
                        load("k", 4),
                    ],
                    4,
                ),
                4,
            ),
        ],
        returns: None,
        is_async: false,
        line: 1,
        column: 1,
    }
}

/// ```python
/// def fibonacci(n, a=0, b=1):
///     if n == 0:
///         return a
///     if n == 1:
///         return b
///     return fibonacci(n - 1, b, a + b)
/// ```
pub fn fibonacci() -> FunctionDef {
    FunctionDef {
        name: "fibonacci".to_string(),
        params: vec![
            Parameter::new("n"),
            Parameter::with_default("a", Expr::Num {
                value: Number::Integer(0),
                line: 1,
                column: 1,
            }),
            Parameter::with_default("b", Expr::Num {
                value: Number::Integer(1),
                line: 1,
                column: 1,
            }),
        ],
        body: vec![
            if_return(eq(load("n", 2), int(0, 2), 2), load("a", 3), 2),
            if_return(eq(load("n", 4), int(1, 4), 4), load("b", 5), 4),
            ret(
                call(
                    "fibonacci",
                    vec![
                        bin(load("n", 6), Operator::Sub, int(1, 6), 6),
                        load("b", 6),
                        bin(load("a", 6), Operator::Add, load("b", 6), 6),
                    ],
                    6,
                ),
                6,
            ),
        ],
        returns: None,
        is_async: false,
        line: 1,
        column: 1,
    }
}

/// ```python
/// def countdown_loop(n):
///     if n == 0:
///         return 0
///     for i in range(1):
///         return countdown_loop(n - 1)
/// ```
pub fn countdown_loop() -> FunctionDef {
    FunctionDef {
        name: "countdown_loop".to_string(),
        params: vec![Parameter::new("n")],
        body: vec![
            if_return(eq(load("n", 2), int(0, 2), 2), int(0, 3), 2),
            Box::new(Stmt::For {
                target: load("i", 4),
                iter: call("range", vec![int(1, 4)], 4),
                body: vec![ret(
                    call(
                        "countdown_loop",
                        vec![bin(load("n", 5), Operator::Sub, int(1, 5), 5)],
                        5,
                    ),
                    5,
                )],
                orelse: Vec::new(),
                line: 4,
                column: 1,
            }),
        ],
        returns: None,
        is_async: false,
        line: 1,
        column: 1,
    }
}

/// Not tail-recursive: the self-call sits inside a multiplication.
///
/// ```python
/// def naive_factorial(n):
///     if n == 0:
///         return 1
///     return n * naive_factorial(n - 1)
/// ```
pub fn naive_factorial() -> FunctionDef {
    FunctionDef {
        name: "naive_factorial".to_string(),
        params: vec![Parameter::new("n")],
        body: vec![
            if_return(eq(load("n", 2), int(0, 2), 2), int(1, 3), 2),
            ret(
                bin(
                    load("n", 4),
                    Operator::Mult,
                    call(
                        "naive_factorial",
                        vec![bin(load("n", 4), Operator::Sub, int(1, 4), 4)],
                        4,
                    ),
                    4,
                ),
                4,
            ),
        ],
        returns: None,
        is_async: false,
        line: 1,
        column: 1,
    }
}

/// Every built-in sample, by name.
pub fn all() -> Vec<FunctionDef> {
    vec![
        factorial(),
        factorial_mod_k(),
        fibonacci(),
        countdown_loop(),
        naive_factorial(),
    ]
}

/// Look up a sample by its function name.
pub fn by_name(name: &str) -> Option<FunctionDef> {
    all().into_iter().find(|f| f.name == name)
}
