use crate::ast::{Expr, FunctionDef, Parameter, Stmt};

/// Read-only traversal over the AST. Implementors pick the result type;
/// the formatter uses `()` and accumulates into its own buffer.
pub trait Visitor<'ast, T> {
    fn visit_function_def(&mut self, func: &'ast FunctionDef) -> T;
    fn visit_stmt(&mut self, stmt: &'ast Stmt) -> T;
    fn visit_expr(&mut self, expr: &'ast Expr) -> T;

    // Targets in assignments default to plain expression handling
    fn visit_expr_as_target(&mut self, expr: &'ast Expr) -> T {
        self.visit_expr(expr)
    }

    fn visit_parameter(&mut self, param: &'ast Parameter) -> T;
}

// Define a trait for nodes that can be visited
pub trait Visitable<'ast, T> {
    fn accept(&'ast self, visitor: &mut dyn Visitor<'ast, T>) -> T;
}

impl<'ast, T> Visitable<'ast, T> for FunctionDef {
    fn accept(&'ast self, visitor: &mut dyn Visitor<'ast, T>) -> T {
        visitor.visit_function_def(self)
    }
}

impl<'ast, T> Visitable<'ast, T> for Stmt {
    fn accept(&'ast self, visitor: &mut dyn Visitor<'ast, T>) -> T {
        visitor.visit_stmt(self)
    }
}

impl<'ast, T> Visitable<'ast, T> for Expr {
    fn accept(&'ast self, visitor: &mut dyn Visitor<'ast, T>) -> T {
        visitor.visit_expr(self)
    }
}

impl<'ast, T> Visitable<'ast, T> for Parameter {
    fn accept(&'ast self, visitor: &mut dyn Visitor<'ast, T>) -> T {
        visitor.visit_parameter(self)
    }
}
