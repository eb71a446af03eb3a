// validator.rs - Tail-position validation for self-recursive functions

use std::collections::HashSet;

use crate::ast::{Expr, FunctionDef, Stmt};
use crate::error::{TailRecursionError, Violation};

/// Validate that every self-recursive call in `func` is in tail position.
///
/// A call is in tail position if it is the final operation before returning:
/// its result is returned directly, with no further computation applied.
/// Valid:
///
/// ```text
/// return func(args)
/// return x if cond else func(args)
/// ```
///
/// Invalid:
///
/// ```text
/// return 1 + func(args)
/// ```
///
/// Violations are collected across the whole body and reported together.
/// Async functions are rejected outright, before any scan.
///
/// Self-recursion is detected by comparing the callee's declared name to the
/// function's own name; a shadowing binding of the same name is
/// indistinguishable at this level.
pub fn validate(func: &FunctionDef) -> Result<(), TailRecursionError> {
    if func.is_async {
        return Err(TailRecursionError::unsupported_declaration(&func.name));
    }

    let mut validator = TailRecursionValidator::new(func);
    for stmt in &func.body {
        validator.check_stmt(stmt);
    }

    if validator.violations.is_empty() {
        Ok(())
    } else {
        Err(TailRecursionError::not_tail_recursive(
            &func.name,
            validator.violations,
        ))
    }
}

struct TailRecursionValidator<'a> {
    func: &'a FunctionDef,
    violations: Vec<Violation>,
}

impl<'a> TailRecursionValidator<'a> {
    fn new(func: &'a FunctionDef) -> Self {
        TailRecursionValidator {
            func,
            violations: Vec::new(),
        }
    }

    /// Statement traversal descends uniformly regardless of loop nesting: a
    /// return always exits the function directly, so tail-ness of a return
    /// value does not depend on how many loops wrap it.
    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Return { value, .. } => {
                if let Some(value) = value {
                    self.check_tail_position(value, true);
                }
            }
            Stmt::If { test, body, orelse, .. } => {
                self.check_tail_position(test, false);
                for stmt in body {
                    self.check_stmt(stmt);
                }
                for stmt in orelse {
                    self.check_stmt(stmt);
                }
            }
            Stmt::For { target, iter, body, orelse, .. } => {
                self.check_tail_position(target, false);
                self.check_tail_position(iter, false);
                for stmt in body {
                    self.check_stmt(stmt);
                }
                for stmt in orelse {
                    self.check_stmt(stmt);
                }
            }
            Stmt::While { test, body, orelse, .. } => {
                self.check_tail_position(test, false);
                for stmt in body {
                    self.check_stmt(stmt);
                }
                for stmt in orelse {
                    self.check_stmt(stmt);
                }
            }
            Stmt::Assign { targets, value, .. } => {
                for target in targets {
                    self.check_tail_position(target, false);
                }
                self.check_tail_position(value, false);
            }
            Stmt::AugAssign { target, value, .. } => {
                self.check_tail_position(target, false);
                self.check_tail_position(value, false);
            }
            Stmt::Expr { value, .. } => {
                self.check_tail_position(value, false);
            }
            Stmt::Pass { .. } | Stmt::Break { .. } | Stmt::Continue { .. } => {}
        }
    }

    fn check_tail_position(&mut self, expr: &Expr, is_tail: bool) {
        match expr {
            Expr::Call { .. } => self.check_call(expr, is_tail),
            Expr::IfExp { test, body, orelse, .. } => {
                // The test is never tail; the branches inherit tail-ness
                self.check_tail_position(test, false);
                self.check_tail_position(body, is_tail);
                self.check_tail_position(orelse, is_tail);
            }
            Expr::BoolOp { values, .. } => {
                // Operations consume the sub-result, breaking tail position
                for value in values {
                    self.check_tail_position(value, false);
                }
            }
            Expr::UnaryOp { operand, .. } => {
                self.check_tail_position(operand, false);
            }
            Expr::BinOp { left, right, .. } => {
                self.check_tail_position(left, false);
                self.check_tail_position(right, false);
            }
            Expr::Compare { left, comparators, .. } => {
                self.check_tail_position(left, false);
                for comparator in comparators {
                    self.check_tail_position(comparator, false);
                }
            }
            Expr::List { elts, .. } | Expr::Tuple { elts, .. } | Expr::Set { elts, .. } => {
                // Elements in collections are not in tail position
                for elt in elts {
                    self.check_tail_position(elt, false);
                }
            }
            Expr::Dict { keys, values, .. } => {
                for key in keys.iter().flatten() {
                    self.check_tail_position(key, false);
                }
                for value in values {
                    self.check_tail_position(value, false);
                }
            }
            Expr::Subscript { value, slice, .. } => {
                self.check_tail_position(value, false);
                self.check_tail_position(slice, false);
            }
            Expr::Attribute { value, .. } => {
                self.check_tail_position(value, false);
            }
            // Constants, names and lambdas carry no reachable recursive calls
            Expr::Lambda { .. }
            | Expr::Num { .. }
            | Expr::Str { .. }
            | Expr::NameConstant { .. }
            | Expr::Name { .. } => {}
        }
    }

    fn check_call(&mut self, call: &Expr, is_tail: bool) {
        let (func, args, keywords, line) = match call {
            Expr::Call { func, args, keywords, line, .. } => (func, args, keywords, *line),
            _ => return,
        };

        let is_recursive = matches!(
            func.as_ref(),
            Expr::Name { id, .. } if *id == self.func.name
        );

        if is_recursive {
            if is_tail {
                self.check_call_arity(args, keywords, line);
            } else {
                self.violations
                    .push(Violation::non_tail_call(&self.func.name, line));
            }
        }

        // Arguments are evaluated before the call executes, so they are
        // never in tail position, recursive callee or not
        for arg in args {
            self.check_tail_position(arg, false);
        }
        for (_, value) in keywords {
            self.check_tail_position(value, false);
        }
    }

    /// Every parameter of a tail self-call must be covered by a positional
    /// argument, a keyword argument, or a declared default. Anything short of
    /// full coverage would make the rewriter substitute a placeholder, so it
    /// is rejected here instead.
    fn check_call_arity(
        &mut self,
        args: &[Box<Expr>],
        keywords: &[(Option<String>, Box<Expr>)],
        line: usize,
    ) {
        let params = &self.func.params;
        let name = &self.func.name;

        if args.len() > params.len() {
            self.violations
                .push(Violation::excess_positional(name, args.len(), params.len(), line));
        }

        let positional: HashSet<&str> = params
            .iter()
            .take(args.len())
            .map(|p| p.name.as_str())
            .collect();

        let mut by_keyword: HashSet<&str> = HashSet::new();
        for (keyword, _) in keywords {
            match keyword {
                Some(keyword) => {
                    let known = params.iter().any(|p| p.name == *keyword);
                    let duplicate =
                        positional.contains(keyword.as_str()) || !by_keyword.insert(keyword);
                    if !known || duplicate {
                        self.violations
                            .push(Violation::unknown_keyword(name, keyword, line));
                    }
                }
                // **kwargs spread cannot be resolved against the signature
                None => {
                    self.violations
                        .push(Violation::unknown_keyword(name, "**", line));
                }
            }
        }

        for param in params {
            let covered = positional.contains(param.name.as_str())
                || by_keyword.contains(param.name.as_str())
                || param.default.is_some();
            if !covered {
                self.violations
                    .push(Violation::missing_argument(name, &param.name, line));
            }
        }
    }
}
