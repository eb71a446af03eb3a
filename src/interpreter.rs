// interpreter.rs - Tree-walking evaluator for Python-like function bodies
//
// Executes FunctionDefs directly, enough of the language to run the samples
// the passes accept. Used by the demo binary and the equivalence tests to
// compare a function's behavior before and after rewriting.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::ast::{
    BoolOperator, CmpOperator, Expr, FunctionDef, NameConstant, Number, Operator, Stmt,
    UnaryOperator,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecError {
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("Undefined function: {0}")]
    UndefinedFunction(String),

    #[error("Type error: {0}")]
    TypeError(String),

    #[error("Division by zero")]
    ZeroDivision,

    #[error("Integer overflow")]
    Overflow,

    #[error("Maximum recursion depth exceeded ({0})")]
    RecursionLimit(usize),

    #[error("Unsupported construct: {0}")]
    Unsupported(String),
}

/// Value type for the interpreter
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    None,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Tuple(l) => {
                write!(f, "(")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                if l.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::None => write!(f, "None"),
        }
    }
}

/// Control-flow signal produced by statement execution.
enum Flow {
    Normal,
    Break,
    Continue,
    Return(Value),
}

pub struct Interpreter {
    functions: HashMap<String, Rc<FunctionDef>>,
    recursion_limit: usize,
    depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Create a new interpreter with the default recursion limit (1000,
    /// matching CPython's default).
    pub fn new() -> Self {
        Interpreter {
            functions: HashMap::new(),
            recursion_limit: 1000,
            depth: 0,
        }
    }

    pub fn with_recursion_limit(limit: usize) -> Self {
        Interpreter {
            functions: HashMap::new(),
            recursion_limit: limit,
            depth: 0,
        }
    }

    /// Register a function so it can be called by name, including by itself.
    pub fn define_function(&mut self, func: FunctionDef) {
        self.functions.insert(func.name.clone(), Rc::new(func));
    }

    /// Call a registered function with positional arguments.
    pub fn call(&mut self, name: &str, args: Vec<Value>) -> Result<Value, ExecError> {
        self.call_with_keywords(name, args, Vec::new())
    }

    fn call_with_keywords(
        &mut self,
        name: &str,
        args: Vec<Value>,
        keywords: Vec<(String, Value)>,
    ) -> Result<Value, ExecError> {
        let func = self
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| ExecError::UndefinedFunction(name.to_string()))?;

        if self.depth >= self.recursion_limit {
            return Err(ExecError::RecursionLimit(self.recursion_limit));
        }

        if args.len() > func.params.len() {
            return Err(ExecError::TypeError(format!(
                "{}() takes {} arguments but {} were given",
                name,
                func.params.len(),
                args.len()
            )));
        }

        let mut locals: HashMap<String, Value> = HashMap::new();
        let mut args = args.into_iter();
        let keywords: HashMap<String, Value> = keywords.into_iter().collect();
        for param in &func.params {
            let positional = args.next();
            let value = if let Some(value) = keywords.get(&param.name) {
                if positional.is_some() {
                    return Err(ExecError::TypeError(format!(
                        "{}() got multiple values for argument '{}'",
                        name, param.name
                    )));
                }
                value.clone()
            } else if let Some(value) = positional {
                value
            } else if let Some(default) = &param.default {
                self.eval_expr(default, &mut HashMap::new())?
            } else {
                return Err(ExecError::TypeError(format!(
                    "{}() missing required argument '{}'",
                    name, param.name
                )));
            };
            locals.insert(param.name.clone(), value);
        }

        self.depth += 1;
        let result = self.exec_block(&func.body, &mut locals);
        self.depth -= 1;

        match result? {
            Flow::Return(value) => Ok(value),
            _ => Ok(Value::None),
        }
    }

    fn exec_block(
        &mut self,
        stmts: &[Box<Stmt>],
        env: &mut HashMap<String, Value>,
    ) -> Result<Flow, ExecError> {
        for stmt in stmts {
            match self.exec_stmt(stmt, env)? {
                Flow::Normal => {}
                flow => return Ok(flow),
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_stmt(
        &mut self,
        stmt: &Stmt,
        env: &mut HashMap<String, Value>,
    ) -> Result<Flow, ExecError> {
        match stmt {
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(value) => self.eval_expr(value, env)?,
                    None => Value::None,
                };
                Ok(Flow::Return(value))
            }
            Stmt::Assign { targets, value, .. } => {
                // The right-hand side is evaluated completely before any
                // target is updated: simultaneous-assignment semantics
                let value = self.eval_expr(value, env)?;
                for target in targets {
                    self.assign_target(target, value.clone(), env)?;
                }
                Ok(Flow::Normal)
            }
            Stmt::AugAssign { target, op, value, .. } => {
                let right = self.eval_expr(value, env)?;
                match target.as_ref() {
                    Expr::Name { id, .. } => {
                        let left = env
                            .get(id)
                            .cloned()
                            .ok_or_else(|| ExecError::UndefinedVariable(id.clone()))?;
                        let result = binary_op(left, op, right)?;
                        env.insert(id.clone(), result);
                        Ok(Flow::Normal)
                    }
                    other => Err(ExecError::Unsupported(format!(
                        "augmented assignment target: {}",
                        other
                    ))),
                }
            }
            Stmt::For { target, iter, body, orelse, .. } => {
                let iterable = self.eval_expr(iter, env)?;
                let values = match iterable {
                    Value::List(values) | Value::Tuple(values) => values,
                    Value::Str(s) => s.chars().map(|c| Value::Str(c.to_string())).collect(),
                    other => {
                        return Err(ExecError::TypeError(format!(
                            "cannot iterate over {}",
                            other
                        )))
                    }
                };

                let mut broke = false;
                'outer: for value in values {
                    self.assign_target(target, value, env)?;
                    match self.exec_block(body, env)? {
                        Flow::Normal | Flow::Continue => {}
                        Flow::Break => {
                            broke = true;
                            break 'outer;
                        }
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }
                if !broke {
                    return self.exec_block(orelse, env);
                }
                Ok(Flow::Normal)
            }
            Stmt::While { test, body, orelse, .. } => {
                loop {
                    let condition = self.eval_expr(test, env)?;
                    if !truthy(&condition) {
                        return self.exec_block(orelse, env);
                    }
                    match self.exec_block(body, env)? {
                        Flow::Normal | Flow::Continue => {}
                        Flow::Break => break,
                        flow @ Flow::Return(_) => return Ok(flow),
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::If { test, body, orelse, .. } => {
                let condition = self.eval_expr(test, env)?;
                if truthy(&condition) {
                    self.exec_block(body, env)
                } else {
                    self.exec_block(orelse, env)
                }
            }
            Stmt::Expr { value, .. } => {
                self.eval_expr(value, env)?;
                Ok(Flow::Normal)
            }
            Stmt::Pass { .. } => Ok(Flow::Normal),
            Stmt::Break { .. } => Ok(Flow::Break),
            Stmt::Continue { .. } => Ok(Flow::Continue),
        }
    }

    fn assign_target(
        &mut self,
        target: &Expr,
        value: Value,
        env: &mut HashMap<String, Value>,
    ) -> Result<(), ExecError> {
        match target {
            Expr::Name { id, .. } => {
                env.insert(id.clone(), value);
                Ok(())
            }
            Expr::Tuple { elts, .. } | Expr::List { elts, .. } => {
                let values = match value {
                    Value::Tuple(values) | Value::List(values) => values,
                    other => {
                        return Err(ExecError::TypeError(format!(
                            "cannot unpack non-sequence {}",
                            other
                        )))
                    }
                };
                if values.len() != elts.len() {
                    return Err(ExecError::TypeError(format!(
                        "cannot unpack {} values into {} targets",
                        values.len(),
                        elts.len()
                    )));
                }
                for (elt, value) in elts.iter().zip(values) {
                    self.assign_target(elt, value, env)?;
                }
                Ok(())
            }
            other => Err(ExecError::Unsupported(format!(
                "assignment target: {}",
                other
            ))),
        }
    }

    fn eval_expr(
        &mut self,
        expr: &Expr,
        env: &mut HashMap<String, Value>,
    ) -> Result<Value, ExecError> {
        match expr {
            Expr::Name { id, .. } => env
                .get(id)
                .cloned()
                .ok_or_else(|| ExecError::UndefinedVariable(id.clone())),
            Expr::Num { value, .. } => match value {
                Number::Integer(i) => Ok(Value::Int(*i)),
                Number::Float(f) => Ok(Value::Float(*f)),
            },
            Expr::Str { value, .. } => Ok(Value::Str(value.clone())),
            Expr::NameConstant { value, .. } => Ok(match value {
                NameConstant::None => Value::None,
                NameConstant::True => Value::Bool(true),
                NameConstant::False => Value::Bool(false),
            }),
            Expr::BinOp { left, op, right, .. } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                binary_op(left, op, right)
            }
            Expr::UnaryOp { op, operand, .. } => {
                let value = self.eval_expr(operand, env)?;
                match (op, value) {
                    (UnaryOperator::Not, value) => Ok(Value::Bool(!truthy(&value))),
                    (UnaryOperator::USub, Value::Int(i)) => {
                        i.checked_neg().map(Value::Int).ok_or(ExecError::Overflow)
                    }
                    (UnaryOperator::USub, Value::Float(f)) => Ok(Value::Float(-f)),
                    (UnaryOperator::UAdd, v @ (Value::Int(_) | Value::Float(_))) => Ok(v),
                    (UnaryOperator::Invert, Value::Int(i)) => Ok(Value::Int(!i)),
                    (op, value) => Err(ExecError::TypeError(format!(
                        "bad operand for unary {:?}: {}",
                        op, value
                    ))),
                }
            }
            Expr::BoolOp { op, values, .. } => {
                // Short-circuit, yielding the last operand evaluated
                let mut result = Value::None;
                for (i, value) in values.iter().enumerate() {
                    result = self.eval_expr(value, env)?;
                    let stop = match op {
                        BoolOperator::And => !truthy(&result),
                        BoolOperator::Or => truthy(&result),
                    };
                    if stop && i < values.len() - 1 {
                        return Ok(result);
                    }
                }
                Ok(result)
            }
            Expr::Compare { left, ops, comparators, .. } => {
                let mut left = self.eval_expr(left, env)?;
                for (op, comparator) in ops.iter().zip(comparators.iter()) {
                    let right = self.eval_expr(comparator, env)?;
                    if !compare(&left, op, &right)? {
                        return Ok(Value::Bool(false));
                    }
                    left = right;
                }
                Ok(Value::Bool(true))
            }
            Expr::IfExp { test, body, orelse, .. } => {
                let condition = self.eval_expr(test, env)?;
                if truthy(&condition) {
                    self.eval_expr(body, env)
                } else {
                    self.eval_expr(orelse, env)
                }
            }
            Expr::Call { func, args, keywords, .. } => {
                let name = match func.as_ref() {
                    Expr::Name { id, .. } => id.clone(),
                    other => {
                        return Err(ExecError::Unsupported(format!("call target: {}", other)))
                    }
                };

                let mut arg_values = Vec::with_capacity(args.len());
                for arg in args {
                    arg_values.push(self.eval_expr(arg, env)?);
                }
                let mut keyword_values = Vec::with_capacity(keywords.len());
                for (keyword, value) in keywords {
                    match keyword {
                        Some(keyword) => {
                            keyword_values.push((keyword.clone(), self.eval_expr(value, env)?))
                        }
                        None => {
                            return Err(ExecError::Unsupported("** argument spread".to_string()))
                        }
                    }
                }

                if self.functions.contains_key(&name) {
                    return self.call_with_keywords(&name, arg_values, keyword_values);
                }
                if !keyword_values.is_empty() {
                    return Err(ExecError::TypeError(format!(
                        "{}() takes no keyword arguments",
                        name
                    )));
                }
                self.call_builtin(&name, arg_values)
            }
            Expr::List { elts, .. } => {
                let mut values = Vec::with_capacity(elts.len());
                for elt in elts {
                    values.push(self.eval_expr(elt, env)?);
                }
                Ok(Value::List(values))
            }
            Expr::Tuple { elts, .. } => {
                let mut values = Vec::with_capacity(elts.len());
                for elt in elts {
                    values.push(self.eval_expr(elt, env)?);
                }
                Ok(Value::Tuple(values))
            }
            Expr::Subscript { value, slice, .. } => {
                let value = self.eval_expr(value, env)?;
                let index = self.eval_expr(slice, env)?;
                subscript(value, index)
            }
            other @ (Expr::Lambda { .. } | Expr::Dict { .. } | Expr::Set { .. } | Expr::Attribute { .. }) => {
                Err(ExecError::Unsupported(format!("expression: {}", other)))
            }
        }
    }

    fn call_builtin(&mut self, name: &str, args: Vec<Value>) -> Result<Value, ExecError> {
        match name {
            "range" => {
                let ints: Vec<i64> = args
                    .iter()
                    .map(|v| match v {
                        Value::Int(i) => Ok(*i),
                        other => Err(ExecError::TypeError(format!(
                            "range() argument must be an integer, got {}",
                            other
                        ))),
                    })
                    .collect::<Result<_, _>>()?;
                let (start, stop, step) = match ints.as_slice() {
                    [stop] => (0, *stop, 1),
                    [start, stop] => (*start, *stop, 1),
                    [start, stop, step] => (*start, *stop, *step),
                    _ => {
                        return Err(ExecError::TypeError(format!(
                            "range() takes 1-3 arguments, got {}",
                            args.len()
                        )))
                    }
                };
                if step == 0 {
                    return Err(ExecError::TypeError("range() step must not be zero".to_string()));
                }
                let mut values = Vec::new();
                let mut i = start;
                while if step > 0 { i < stop } else { i > stop } {
                    values.push(Value::Int(i));
                    i += step;
                }
                Ok(Value::List(values))
            }
            "len" => match args.as_slice() {
                [Value::List(l)] | [Value::Tuple(l)] => Ok(Value::Int(l.len() as i64)),
                [Value::Str(s)] => Ok(Value::Int(s.chars().count() as i64)),
                _ => Err(ExecError::TypeError("len() takes one sequence argument".to_string())),
            },
            "print" => {
                let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
                println!("{}", rendered.join(" "));
                Ok(Value::None)
            }
            "abs" => match args.as_slice() {
                [Value::Int(i)] => i.checked_abs().map(Value::Int).ok_or(ExecError::Overflow),
                [Value::Float(f)] => Ok(Value::Float(f.abs())),
                _ => Err(ExecError::TypeError("abs() takes one numeric argument".to_string())),
            },
            _ => Err(ExecError::UndefinedFunction(name.to_string())),
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::Str(s) => !s.is_empty(),
        Value::List(l) | Value::Tuple(l) => !l.is_empty(),
        Value::None => false,
    }
}

// Python floor-division rounds toward negative infinity
fn floor_div(a: i64, b: i64) -> Result<i64, ExecError> {
    if b == 0 {
        return Err(ExecError::ZeroDivision);
    }
    let q = a.checked_div(b).ok_or(ExecError::Overflow)?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

// Python modulo takes the sign of the divisor
fn py_mod(a: i64, b: i64) -> Result<i64, ExecError> {
    if b == 0 {
        return Err(ExecError::ZeroDivision);
    }
    let r = a.checked_rem(b).ok_or(ExecError::Overflow)?;
    if r != 0 && (r < 0) != (b < 0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}

fn binary_op(left: Value, op: &Operator, right: Value) -> Result<Value, ExecError> {
    match (left, op, right) {
        (Value::Int(l), Operator::Add, Value::Int(r)) => {
            l.checked_add(r).map(Value::Int).ok_or(ExecError::Overflow)
        }
        (Value::Int(l), Operator::Sub, Value::Int(r)) => {
            l.checked_sub(r).map(Value::Int).ok_or(ExecError::Overflow)
        }
        (Value::Int(l), Operator::Mult, Value::Int(r)) => {
            l.checked_mul(r).map(Value::Int).ok_or(ExecError::Overflow)
        }
        (Value::Int(l), Operator::Div, Value::Int(r)) => {
            if r == 0 {
                Err(ExecError::ZeroDivision)
            } else {
                Ok(Value::Float(l as f64 / r as f64))
            }
        }
        (Value::Int(l), Operator::FloorDiv, Value::Int(r)) => floor_div(l, r).map(Value::Int),
        (Value::Int(l), Operator::Mod, Value::Int(r)) => py_mod(l, r).map(Value::Int),
        (Value::Int(l), Operator::Pow, Value::Int(r)) => {
            if r < 0 {
                return Err(ExecError::TypeError(
                    "negative integer exponent".to_string(),
                ));
            }
            let exp = u32::try_from(r).map_err(|_| ExecError::Overflow)?;
            l.checked_pow(exp).map(Value::Int).ok_or(ExecError::Overflow)
        }
        (Value::Int(l), Operator::LShift, Value::Int(r)) => {
            let shift = u32::try_from(r).map_err(|_| ExecError::Overflow)?;
            l.checked_shl(shift).map(Value::Int).ok_or(ExecError::Overflow)
        }
        (Value::Int(l), Operator::RShift, Value::Int(r)) => {
            let shift = u32::try_from(r).map_err(|_| ExecError::Overflow)?;
            l.checked_shr(shift).map(Value::Int).ok_or(ExecError::Overflow)
        }
        (Value::Int(l), Operator::BitOr, Value::Int(r)) => Ok(Value::Int(l | r)),
        (Value::Int(l), Operator::BitXor, Value::Int(r)) => Ok(Value::Int(l ^ r)),
        (Value::Int(l), Operator::BitAnd, Value::Int(r)) => Ok(Value::Int(l & r)),

        (Value::Str(l), Operator::Add, Value::Str(r)) => Ok(Value::Str(l + &r)),
        (Value::List(mut l), Operator::Add, Value::List(r)) => {
            l.extend(r);
            Ok(Value::List(l))
        }

        // Mixed int/float arithmetic promotes to float
        (l @ (Value::Int(_) | Value::Float(_)), op, r @ (Value::Int(_) | Value::Float(_))) => {
            let l = as_float(&l);
            let r = as_float(&r);
            match op {
                Operator::Add => Ok(Value::Float(l + r)),
                Operator::Sub => Ok(Value::Float(l - r)),
                Operator::Mult => Ok(Value::Float(l * r)),
                Operator::Div => {
                    if r == 0.0 {
                        Err(ExecError::ZeroDivision)
                    } else {
                        Ok(Value::Float(l / r))
                    }
                }
                Operator::FloorDiv => {
                    if r == 0.0 {
                        Err(ExecError::ZeroDivision)
                    } else {
                        Ok(Value::Float((l / r).floor()))
                    }
                }
                Operator::Mod => {
                    if r == 0.0 {
                        Err(ExecError::ZeroDivision)
                    } else {
                        Ok(Value::Float(l - r * (l / r).floor()))
                    }
                }
                Operator::Pow => Ok(Value::Float(l.powf(r))),
                _ => Err(ExecError::TypeError(format!(
                    "unsupported float operation: {:?}",
                    op
                ))),
            }
        }

        (l, op, r) => Err(ExecError::TypeError(format!(
            "unsupported operands for {:?}: {} and {}",
            op, l, r
        ))),
    }
}

fn as_float(value: &Value) -> f64 {
    match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        _ => f64::NAN,
    }
}

fn compare(left: &Value, op: &CmpOperator, right: &Value) -> Result<bool, ExecError> {
    match op {
        CmpOperator::Eq | CmpOperator::Is => Ok(values_equal(left, right)),
        CmpOperator::NotEq | CmpOperator::IsNot => Ok(!values_equal(left, right)),
        CmpOperator::Lt | CmpOperator::LtE | CmpOperator::Gt | CmpOperator::GtE => {
            let ordering = match (left, right) {
                (Value::Int(l), Value::Int(r)) => l.partial_cmp(r),
                (Value::Str(l), Value::Str(r)) => l.partial_cmp(r),
                (
                    l @ (Value::Int(_) | Value::Float(_)),
                    r @ (Value::Int(_) | Value::Float(_)),
                ) => as_float(l).partial_cmp(&as_float(r)),
                (l, r) => {
                    return Err(ExecError::TypeError(format!(
                        "cannot order {} and {}",
                        l, r
                    )))
                }
            };
            let ordering = match ordering {
                Some(ordering) => ordering,
                None => return Ok(false),
            };
            Ok(match op {
                CmpOperator::Lt => ordering.is_lt(),
                CmpOperator::LtE => ordering.is_le(),
                CmpOperator::Gt => ordering.is_gt(),
                CmpOperator::GtE => ordering.is_ge(),
                _ => unreachable!(),
            })
        }
        CmpOperator::In | CmpOperator::NotIn => {
            let found = match right {
                Value::List(values) | Value::Tuple(values) => {
                    values.iter().any(|v| values_equal(left, v))
                }
                Value::Str(s) => match left {
                    Value::Str(needle) => s.contains(needle.as_str()),
                    _ => {
                        return Err(ExecError::TypeError(
                            "'in <string>' requires a string operand".to_string(),
                        ))
                    }
                },
                other => {
                    return Err(ExecError::TypeError(format!(
                        "argument of type {} is not iterable",
                        other
                    )))
                }
            };
            Ok(if matches!(op, CmpOperator::In) { found } else { !found })
        }
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(l), Value::Float(r)) | (Value::Float(r), Value::Int(l)) => *l as f64 == *r,
        (Value::Bool(l), Value::Int(r)) | (Value::Int(r), Value::Bool(l)) => (*l as i64) == *r,
        (l, r) => l == r,
    }
}

fn subscript(value: Value, index: Value) -> Result<Value, ExecError> {
    match (value, index) {
        (Value::List(values) | Value::Tuple(values), Value::Int(i)) => {
            let len = values.len() as i64;
            let i = if i < 0 { len + i } else { i };
            if i < 0 || i >= len {
                return Err(ExecError::TypeError(format!("index out of range: {}", i)));
            }
            Ok(values[i as usize].clone())
        }
        (Value::Str(s), Value::Int(i)) => {
            let chars: Vec<char> = s.chars().collect();
            let len = chars.len() as i64;
            let i = if i < 0 { len + i } else { i };
            if i < 0 || i >= len {
                return Err(ExecError::TypeError(format!("index out of range: {}", i)));
            }
            Ok(Value::Str(chars[i as usize].to_string()))
        }
        (value, index) => Err(ExecError::TypeError(format!(
            "cannot subscript {} with {}",
            value, index
        ))),
    }
}
