// Shared AST construction helpers for the integration tests. Statements and
// expressions are built by hand since parsing is out of scope for the crate.
#![allow(dead_code)]

use tailrec::ast::{
    BoolOperator, CmpOperator, Expr, ExprContext, FunctionDef, Number, Operator, Parameter, Stmt,
    UnaryOperator,
};
use tailrec::interpreter::{ExecError, Interpreter, Value};

pub fn load(id: &str) -> Box<Expr> {
    Box::new(Expr::Name {
        id: id.to_string(),
        ctx: ExprContext::Load,
        line: 1,
        column: 1,
    })
}

pub fn store(id: &str) -> Box<Expr> {
    Box::new(Expr::Name {
        id: id.to_string(),
        ctx: ExprContext::Store,
        line: 1,
        column: 1,
    })
}

pub fn int(value: i64) -> Box<Expr> {
    Box::new(Expr::Num {
        value: Number::Integer(value),
        line: 1,
        column: 1,
    })
}

pub fn str_lit(value: &str) -> Box<Expr> {
    Box::new(Expr::Str {
        value: value.to_string(),
        line: 1,
        column: 1,
    })
}

pub fn bin(left: Box<Expr>, op: Operator, right: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::BinOp {
        left,
        op,
        right,
        line: 1,
        column: 1,
    })
}

pub fn unary(op: UnaryOperator, operand: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::UnaryOp {
        op,
        operand,
        line: 1,
        column: 1,
    })
}

pub fn boolop(op: BoolOperator, values: Vec<Box<Expr>>) -> Box<Expr> {
    Box::new(Expr::BoolOp {
        op,
        values,
        line: 1,
        column: 1,
    })
}

pub fn cmp(left: Box<Expr>, op: CmpOperator, right: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::Compare {
        left,
        ops: vec![op],
        comparators: vec![right],
        line: 1,
        column: 1,
    })
}

pub fn eq(left: Box<Expr>, right: Box<Expr>) -> Box<Expr> {
    cmp(left, CmpOperator::Eq, right)
}

pub fn ifexp(test: Box<Expr>, body: Box<Expr>, orelse: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::IfExp {
        test,
        body,
        orelse,
        line: 1,
        column: 1,
    })
}

pub fn call(func: &str, args: Vec<Box<Expr>>) -> Box<Expr> {
    Box::new(Expr::Call {
        func: load(func),
        args,
        keywords: Vec::new(),
        line: 1,
        column: 1,
    })
}

pub fn call_kw(
    func: &str,
    args: Vec<Box<Expr>>,
    keywords: Vec<(Option<String>, Box<Expr>)>,
) -> Box<Expr> {
    Box::new(Expr::Call {
        func: load(func),
        args,
        keywords,
        line: 1,
        column: 1,
    })
}

pub fn list(elts: Vec<Box<Expr>>) -> Box<Expr> {
    Box::new(Expr::List {
        elts,
        ctx: ExprContext::Load,
        line: 1,
        column: 1,
    })
}

pub fn tuple(elts: Vec<Box<Expr>>) -> Box<Expr> {
    Box::new(Expr::Tuple {
        elts,
        ctx: ExprContext::Load,
        line: 1,
        column: 1,
    })
}

pub fn set(elts: Vec<Box<Expr>>) -> Box<Expr> {
    Box::new(Expr::Set {
        elts,
        line: 1,
        column: 1,
    })
}

pub fn dict(pairs: Vec<(Box<Expr>, Box<Expr>)>) -> Box<Expr> {
    let (keys, values) = pairs
        .into_iter()
        .map(|(k, v)| (Some(k), v))
        .unzip();
    Box::new(Expr::Dict {
        keys,
        values,
        line: 1,
        column: 1,
    })
}

pub fn subscript(value: Box<Expr>, slice: Box<Expr>) -> Box<Expr> {
    Box::new(Expr::Subscript {
        value,
        slice,
        ctx: ExprContext::Load,
        line: 1,
        column: 1,
    })
}

pub fn attribute(value: Box<Expr>, attr: &str) -> Box<Expr> {
    Box::new(Expr::Attribute {
        value,
        attr: attr.to_string(),
        ctx: ExprContext::Load,
        line: 1,
        column: 1,
    })
}

pub fn ret(value: Box<Expr>) -> Box<Stmt> {
    Box::new(Stmt::Return {
        value: Some(value),
        line: 1,
        column: 1,
    })
}

pub fn ret_none() -> Box<Stmt> {
    Box::new(Stmt::Return {
        value: None,
        line: 1,
        column: 1,
    })
}

pub fn assign(target: Box<Expr>, value: Box<Expr>) -> Box<Stmt> {
    Box::new(Stmt::Assign {
        targets: vec![target],
        value,
        line: 1,
        column: 1,
    })
}

pub fn aug_assign(target: Box<Expr>, op: Operator, value: Box<Expr>) -> Box<Stmt> {
    Box::new(Stmt::AugAssign {
        target,
        op,
        value,
        line: 1,
        column: 1,
    })
}

pub fn expr_stmt(value: Box<Expr>) -> Box<Stmt> {
    Box::new(Stmt::Expr {
        value,
        line: 1,
        column: 1,
    })
}

pub fn if_stmt(test: Box<Expr>, body: Vec<Box<Stmt>>, orelse: Vec<Box<Stmt>>) -> Box<Stmt> {
    Box::new(Stmt::If {
        test,
        body,
        orelse,
        line: 1,
        column: 1,
    })
}

pub fn for_stmt(target: Box<Expr>, iter: Box<Expr>, body: Vec<Box<Stmt>>) -> Box<Stmt> {
    Box::new(Stmt::For {
        target,
        iter,
        body,
        orelse: Vec::new(),
        line: 1,
        column: 1,
    })
}

pub fn for_else(
    target: Box<Expr>,
    iter: Box<Expr>,
    body: Vec<Box<Stmt>>,
    orelse: Vec<Box<Stmt>>,
) -> Box<Stmt> {
    Box::new(Stmt::For {
        target,
        iter,
        body,
        orelse,
        line: 1,
        column: 1,
    })
}

pub fn pass_stmt() -> Box<Stmt> {
    Box::new(Stmt::Pass { line: 1, column: 1 })
}

pub fn while_stmt(test: Box<Expr>, body: Vec<Box<Stmt>>) -> Box<Stmt> {
    Box::new(Stmt::While {
        test,
        body,
        orelse: Vec::new(),
        line: 1,
        column: 1,
    })
}

pub fn func(name: &str, params: Vec<Parameter>, body: Vec<Box<Stmt>>) -> FunctionDef {
    FunctionDef {
        name: name.to_string(),
        params,
        body,
        returns: None,
        is_async: false,
        line: 1,
        column: 1,
    }
}

pub fn async_func(name: &str, params: Vec<Parameter>, body: Vec<Box<Stmt>>) -> FunctionDef {
    FunctionDef {
        is_async: true,
        ..func(name, params, body)
    }
}

pub fn param(name: &str) -> Parameter {
    Parameter::new(name)
}

pub fn param_default(name: &str, default: i64) -> Parameter {
    Parameter::with_default(name, Expr::Num {
        value: Number::Integer(default),
        line: 1,
        column: 1,
    })
}

/// Register a function and call it with integer arguments.
pub fn run_with_limit(
    func: &FunctionDef,
    args: &[i64],
    limit: usize,
) -> Result<Value, ExecError> {
    let mut interp = Interpreter::with_recursion_limit(limit);
    let name = func.name.clone();
    interp.define_function(func.clone());
    interp.call(&name, args.iter().map(|&i| Value::Int(i)).collect())
}

pub fn run(func: &FunctionDef, args: &[i64]) -> Result<Value, ExecError> {
    run_with_limit(func, args, 1000)
}
