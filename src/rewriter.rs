// rewriter.rs - Rewrites validated tail-recursive functions into loop form

use std::collections::{HashMap, HashSet};

use crate::ast::{Expr, ExprContext, FunctionDef, NameConstant, Parameter, Stmt};
use crate::subst;

/// Rewrite a validated tail-recursive function into an equivalent iterative
/// form. The transformation:
///
/// 1. Hoists every parameter into a uniquely-named temp variable.
/// 2. Wraps the body in a `while True` restart loop.
/// 3. Replaces each tail self-call with one simultaneous assignment updating
///    the temps, followed by a restart of the outer loop.
///
/// ```text
/// def func(a, b):          def func(a, b):
///     if base:                 __tco0_a = a
///         return r             __tco0_b = b
///     return func(x, y)        while True:
///                                  if base:
///                                      return r
///                                  (__tco0_a, __tco0_b) = (x, y)
///                                  continue
/// ```
///
/// A tail call nested inside for/while constructs cannot `continue` the
/// restart loop directly; it sets the innermost loop's restart flag and
/// breaks, and each loop wrapper relays the flag one level outward until the
/// outermost level restarts.
///
/// Precondition: `func` passed [`crate::validator::validate`]. Behavior on
/// unvalidated input is unspecified.
///
/// The temp prefix is chosen by a static scan over every identifier occurring
/// in the function, so generated names are disjoint from anything in scope
/// and the rewrite is fully deterministic.
pub fn rewrite(func: FunctionDef) -> FunctionDef {
    let prefix = pick_prefix(&func);
    let mut rewriter = TailCallRewriter::new(&func, prefix);

    let FunctionDef {
        name,
        params,
        body,
        returns,
        line,
        column,
        ..
    } = func;

    let mut new_body: Vec<Box<Stmt>> = Vec::with_capacity(params.len() + 1);

    // temp = param, in declared order
    for param in &params {
        let temp = rewriter.temp_name(&param.name);
        new_body.push(Box::new(Stmt::Assign {
            targets: vec![Box::new(store_name(&temp, line, column))],
            value: Box::new(load_name(&param.name, line, column)),
            line,
            column,
        }));
    }

    let mut loop_body: Vec<Box<Stmt>> = Vec::with_capacity(body.len());
    for stmt in body {
        loop_body.extend(rewriter.rewrite_stmt(*stmt));
    }

    new_body.push(Box::new(Stmt::While {
        test: Box::new(Expr::NameConstant {
            value: NameConstant::True,
            line,
            column,
        }),
        body: loop_body,
        orelse: Vec::new(),
        line,
        column,
    }));

    // Same name, signature and annotations: a drop-in replacement
    FunctionDef {
        name,
        params,
        body: new_body,
        returns,
        is_async: false,
        line,
        column,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopKind {
    For,
    While,
}

impl LoopKind {
    fn as_str(&self) -> &'static str {
        match self {
            LoopKind::For => "for",
            LoopKind::While => "while",
        }
    }
}

struct LoopContext {
    restart_flag: String,
}

struct TailCallRewriter {
    function_name: String,
    param_names: Vec<String>,
    params: Vec<Parameter>,
    prefix: String,
    temp_map: HashMap<String, String>,
    loop_stack: Vec<LoopContext>,
    flag_counter: usize,
}

impl TailCallRewriter {
    fn new(func: &FunctionDef, prefix: String) -> Self {
        let param_names: Vec<String> = func.params.iter().map(|p| p.name.clone()).collect();
        let temp_map = param_names
            .iter()
            .map(|p| (p.clone(), format!("{}{}", prefix, p)))
            .collect();
        TailCallRewriter {
            function_name: func.name.clone(),
            param_names,
            params: func.params.clone(),
            prefix,
            temp_map,
            loop_stack: Vec::new(),
            flag_counter: 0,
        }
    }

    fn temp_name(&self, param: &str) -> String {
        format!("{}{}", self.prefix, param)
    }

    fn rewrite_stmt(&mut self, stmt: Stmt) -> Vec<Box<Stmt>> {
        match stmt {
            Stmt::Return { value, line, column } => self.rewrite_return(value, line, column),
            Stmt::If { test, body, orelse, line, column } => {
                let mut test = test;
                subst::rename_in_expr(&mut test, &self.temp_map);
                vec![Box::new(Stmt::If {
                    test,
                    body: self.rewrite_block(body),
                    orelse: self.rewrite_block(orelse),
                    line,
                    column,
                })]
            }
            Stmt::For { target, iter, body, orelse, line, column } => {
                let mut target = target;
                let mut iter = iter;
                subst::rename_in_target(&mut target, &self.temp_map);
                subst::rename_in_expr(&mut iter, &self.temp_map);
                self.rewrite_loop(LoopKind::For, line, column, move |body, orelse| {
                    Stmt::For {
                        target,
                        iter,
                        body,
                        orelse,
                        line,
                        column,
                    }
                }, body, orelse)
            }
            Stmt::While { test, body, orelse, line, column } => {
                let mut test = test;
                subst::rename_in_expr(&mut test, &self.temp_map);
                self.rewrite_loop(LoopKind::While, line, column, move |body, orelse| {
                    Stmt::While {
                        test,
                        body,
                        orelse,
                        line,
                        column,
                    }
                }, body, orelse)
            }
            Stmt::Assign { mut targets, mut value, line, column } => {
                subst::rename_in_expr(&mut value, &self.temp_map);
                for target in &mut targets {
                    subst::rename_in_target(target, &self.temp_map);
                }
                vec![Box::new(Stmt::Assign { targets, value, line, column })]
            }
            Stmt::AugAssign { mut target, op, mut value, line, column } => {
                // Augmented writes to a parameter must land on its temp too,
                // or later reads would see a stale value
                subst::rename_in_target(&mut target, &self.temp_map);
                subst::rename_in_expr(&mut value, &self.temp_map);
                vec![Box::new(Stmt::AugAssign { target, op, value, line, column })]
            }
            Stmt::Expr { mut value, line, column } => {
                subst::rename_in_expr(&mut value, &self.temp_map);
                vec![Box::new(Stmt::Expr { value, line, column })]
            }
            // Carried through unchanged; these contain no expressions
            stmt @ (Stmt::Pass { .. } | Stmt::Break { .. } | Stmt::Continue { .. }) => {
                vec![Box::new(stmt)]
            }
        }
    }

    fn rewrite_block(&mut self, body: Vec<Box<Stmt>>) -> Vec<Box<Stmt>> {
        let mut out = Vec::with_capacity(body.len());
        for stmt in body {
            out.extend(self.rewrite_stmt(*stmt));
        }
        out
    }

    /// `return func(...)` becomes a simultaneous temp update plus a restart;
    /// any other return keeps its shape with parameter references redirected.
    fn rewrite_return(
        &mut self,
        value: Option<Box<Expr>>,
        line: usize,
        column: usize,
    ) -> Vec<Box<Stmt>> {
        let value = match value {
            Some(value) => value,
            None => return vec![Box::new(Stmt::Return { value: None, line, column })],
        };

        if !self.is_recursive_call(&value) {
            let mut value = value;
            subst::rename_in_expr(&mut value, &self.temp_map);
            return vec![Box::new(Stmt::Return {
                value: Some(value),
                line,
                column,
            })];
        }

        let mut values = self.resolve_call_arguments(*value);
        // The temps are the only live copies of the parameters by the time a
        // later iteration reaches this point, so argument expressions must
        // read them instead of the original names
        for value in &mut values {
            subst::rename_in_expr(value, &self.temp_map);
        }

        let targets: Vec<Box<Expr>> = self
            .param_names
            .iter()
            .map(|p| Box::new(store_name(&self.temp_name(p), line, column)))
            .collect();

        // One tuple assignment: every right-hand side is evaluated against
        // the pre-assignment temp values
        let assignment = Box::new(Stmt::Assign {
            targets: vec![Box::new(Expr::Tuple {
                elts: targets,
                ctx: ExprContext::Store,
                line,
                column,
            })],
            value: Box::new(Expr::Tuple {
                elts: values.into_iter().map(Box::new).collect(),
                ctx: ExprContext::Load,
                line,
                column,
            }),
            line,
            column,
        });

        match self.loop_stack.last() {
            Some(ctx) => {
                // Inside a loop: flag the innermost level and break out; the
                // loop wrapper relays the restart outward
                let flag_set = Box::new(Stmt::Assign {
                    targets: vec![Box::new(store_name(&ctx.restart_flag, line, column))],
                    value: Box::new(Expr::NameConstant {
                        value: NameConstant::True,
                        line,
                        column,
                    }),
                    line,
                    column,
                });
                vec![assignment, flag_set, Box::new(Stmt::Break { line, column })]
            }
            None => vec![assignment, Box::new(Stmt::Continue { line, column })],
        }
    }

    /// Shared shape for for/while: flag initialized false, the rewritten
    /// construct, then the relay check.
    fn rewrite_loop<F>(
        &mut self,
        kind: LoopKind,
        line: usize,
        column: usize,
        build: F,
        body: Vec<Box<Stmt>>,
        orelse: Vec<Box<Stmt>>,
    ) -> Vec<Box<Stmt>>
    where
        F: FnOnce(Vec<Box<Stmt>>, Vec<Box<Stmt>>) -> Stmt,
    {
        let restart_flag = format!("{}returned_in_{}_{}", self.prefix, kind.as_str(), self.flag_counter);
        self.flag_counter += 1;

        let flag_init = Box::new(Stmt::Assign {
            targets: vec![Box::new(store_name(&restart_flag, line, column))],
            value: Box::new(Expr::NameConstant {
                value: NameConstant::False,
                line,
                column,
            }),
            line,
            column,
        });

        self.loop_stack.push(LoopContext { restart_flag: restart_flag.clone() });
        let body = self.rewrite_block(body);
        self.loop_stack.pop();

        // The else clause runs after the loop has exited, outside its body;
        // a tail call there restarts through the enclosing context, and a
        // break emitted for it binds to the enclosing loop
        let orelse = self.rewrite_block(orelse);

        let loop_stmt = Box::new(build(body, orelse));

        // If the flag is set, either relay to the enclosing loop or, at the
        // outermost level, restart the whole function
        let check_body: Vec<Box<Stmt>> = match self.loop_stack.last() {
            Some(parent) => vec![
                Box::new(Stmt::Assign {
                    targets: vec![Box::new(store_name(&parent.restart_flag, line, column))],
                    value: Box::new(Expr::NameConstant {
                        value: NameConstant::True,
                        line,
                        column,
                    }),
                    line,
                    column,
                }),
                Box::new(Stmt::Break { line, column }),
            ],
            None => vec![Box::new(Stmt::Continue { line, column })],
        };

        let flag_check = Box::new(Stmt::If {
            test: Box::new(load_name(&restart_flag, line, column)),
            body: check_body,
            orelse: Vec::new(),
            line,
            column,
        });

        vec![flag_init, loop_stmt, flag_check]
    }

    fn is_recursive_call(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Call { func, .. } => {
                matches!(func.as_ref(), Expr::Name { id, .. } if *id == self.function_name)
            }
            _ => false,
        }
    }

    /// Resolve call arguments against declared parameter order: positionals
    /// fill left to right, keywords override by name, declared defaults fill
    /// the rest. The validator guarantees full coverage.
    fn resolve_call_arguments(&self, call: Expr) -> Vec<Expr> {
        let (args, keywords, line, column) = match call {
            Expr::Call { args, keywords, line, column, .. } => (args, keywords, line, column),
            _ => unreachable!("resolve_call_arguments on a non-call"),
        };

        let mut by_keyword: HashMap<String, Expr> = HashMap::new();
        for (keyword, value) in keywords {
            if let Some(keyword) = keyword {
                by_keyword.insert(keyword, *value);
            }
        }

        let mut positional = args.into_iter();
        let mut resolved = Vec::with_capacity(self.params.len());
        for param in &self.params {
            let positional_value = positional.next();
            if let Some(value) = by_keyword.remove(&param.name) {
                resolved.push(value);
            } else if let Some(value) = positional_value {
                resolved.push(*value);
            } else if let Some(default) = &param.default {
                resolved.push(default.as_ref().clone());
            } else {
                // Unreachable after validation; fall back to a placeholder
                // rather than panic
                resolved.push(Expr::NameConstant {
                    value: NameConstant::None,
                    line,
                    column,
                });
            }
        }
        resolved
    }
}

fn load_name(id: &str, line: usize, column: usize) -> Expr {
    Expr::Name {
        id: id.to_string(),
        ctx: ExprContext::Load,
        line,
        column,
    }
}

fn store_name(id: &str, line: usize, column: usize) -> Expr {
    Expr::Name {
        id: id.to_string(),
        ctx: ExprContext::Store,
        line,
        column,
    }
}

/// Pick the shortest `__tco{n}_` prefix no in-scope identifier starts with,
/// so every derived temp and flag name is collision-free.
fn pick_prefix(func: &FunctionDef) -> String {
    let identifiers = collect_identifiers(func);
    let mut n = 0usize;
    loop {
        let prefix = format!("__tco{}_", n);
        if !identifiers.iter().any(|id| id.starts_with(&prefix)) {
            return prefix;
        }
        n += 1;
    }
}

fn collect_identifiers(func: &FunctionDef) -> HashSet<String> {
    let mut ids = HashSet::new();
    ids.insert(func.name.clone());
    for param in &func.params {
        ids.insert(param.name.clone());
    }
    for stmt in &func.body {
        collect_in_stmt(stmt, &mut ids);
    }
    ids
}

fn collect_in_stmt(stmt: &Stmt, ids: &mut HashSet<String>) {
    match stmt {
        Stmt::Return { value, .. } => {
            if let Some(value) = value {
                collect_in_expr(value, ids);
            }
        }
        Stmt::Assign { targets, value, .. } => {
            for target in targets {
                collect_in_expr(target, ids);
            }
            collect_in_expr(value, ids);
        }
        Stmt::AugAssign { target, value, .. } => {
            collect_in_expr(target, ids);
            collect_in_expr(value, ids);
        }
        Stmt::For { target, iter, body, orelse, .. } => {
            collect_in_expr(target, ids);
            collect_in_expr(iter, ids);
            for stmt in body.iter().chain(orelse) {
                collect_in_stmt(stmt, ids);
            }
        }
        Stmt::While { test, body, orelse, .. } | Stmt::If { test, body, orelse, .. } => {
            collect_in_expr(test, ids);
            for stmt in body.iter().chain(orelse) {
                collect_in_stmt(stmt, ids);
            }
        }
        Stmt::Expr { value, .. } => collect_in_expr(value, ids),
        Stmt::Pass { .. } | Stmt::Break { .. } | Stmt::Continue { .. } => {}
    }
}

fn collect_in_expr(expr: &Expr, ids: &mut HashSet<String>) {
    match expr {
        Expr::Name { id, .. } => {
            ids.insert(id.clone());
        }
        Expr::BoolOp { values, .. } => {
            for value in values {
                collect_in_expr(value, ids);
            }
        }
        Expr::BinOp { left, right, .. } => {
            collect_in_expr(left, ids);
            collect_in_expr(right, ids);
        }
        Expr::UnaryOp { operand, .. } => collect_in_expr(operand, ids),
        Expr::Lambda { args, body, .. } => {
            for arg in args {
                ids.insert(arg.name.clone());
            }
            collect_in_expr(body, ids);
        }
        Expr::IfExp { test, body, orelse, .. } => {
            collect_in_expr(test, ids);
            collect_in_expr(body, ids);
            collect_in_expr(orelse, ids);
        }
        Expr::Dict { keys, values, .. } => {
            for key in keys.iter().flatten() {
                collect_in_expr(key, ids);
            }
            for value in values {
                collect_in_expr(value, ids);
            }
        }
        Expr::Set { elts, .. } | Expr::List { elts, .. } | Expr::Tuple { elts, .. } => {
            for elt in elts {
                collect_in_expr(elt, ids);
            }
        }
        Expr::Compare { left, comparators, .. } => {
            collect_in_expr(left, ids);
            for comparator in comparators {
                collect_in_expr(comparator, ids);
            }
        }
        Expr::Call { func, args, keywords, .. } => {
            collect_in_expr(func, ids);
            for arg in args {
                collect_in_expr(arg, ids);
            }
            for (_, value) in keywords {
                collect_in_expr(value, ids);
            }
        }
        Expr::Attribute { value, .. } => collect_in_expr(value, ids),
        Expr::Subscript { value, slice, .. } => {
            collect_in_expr(value, ids);
            collect_in_expr(slice, ids);
        }
        Expr::Num { .. } | Expr::Str { .. } | Expr::NameConstant { .. } => {}
    }
}
