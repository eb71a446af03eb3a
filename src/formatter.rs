use crate::ast::{
    BoolOperator, CmpOperator, Expr, FunctionDef, NameConstant, Number, Operator, Parameter, Stmt,
    UnaryOperator,
};
use crate::visitor::Visitor;

/// Emits a `FunctionDef` back as Python source, for inspection of rewritten
/// functions and for structural assertions in tests.
pub struct CodeFormatter {
    indent_level: usize,
    indent_size: usize,
    output: String,
}

/// Format a function as Python source with 4-space indentation.
pub fn unparse(func: &FunctionDef) -> String {
    let mut formatter = CodeFormatter::new(4);
    formatter.visit_function_def(func);
    formatter.into_output()
}

impl CodeFormatter {
    pub fn new(indent_size: usize) -> Self {
        CodeFormatter {
            indent_level: 0,
            indent_size,
            output: String::new(),
        }
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn indent(&self) -> String {
        " ".repeat(self.indent_level * self.indent_size)
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_indented(&mut self, text: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(text);
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_block(&mut self, body: &[Box<Stmt>]) {
        self.increase_indent();
        if body.is_empty() {
            self.write_indented("pass\n");
        } else {
            for stmt in body {
                self.visit_stmt(stmt);
            }
        }
        self.decrease_indent();
    }

    fn write_number(&mut self, value: &Number) {
        match value {
            Number::Integer(i) => {
                let mut buffer = itoa::Buffer::new();
                let text = buffer.format(*i).to_string();
                self.write(&text);
            }
            Number::Float(f) => {
                let mut buffer = ryu::Buffer::new();
                let text = buffer.format(*f).to_string();
                self.write(&text);
            }
        }
    }

    fn write_str_literal(&mut self, value: &str) {
        self.write("'");
        for c in value.chars() {
            match c {
                '\'' => self.write("\\'"),
                '\\' => self.write("\\\\"),
                '\n' => self.write("\\n"),
                '\t' => self.write("\\t"),
                _ => self.output.push(c),
            }
        }
        self.write("'");
    }

    // Wrap operands that would otherwise reassociate when re-parsed
    fn write_operand(&mut self, expr: &Expr) {
        let needs_parens = matches!(
            expr,
            Expr::BoolOp { .. }
                | Expr::BinOp { .. }
                | Expr::UnaryOp { .. }
                | Expr::IfExp { .. }
                | Expr::Compare { .. }
                | Expr::Lambda { .. }
        );
        if needs_parens {
            self.write("(");
            self.visit_expr(expr);
            self.write(")");
        } else {
            self.visit_expr(expr);
        }
    }

    fn format_operator(&self, op: &Operator) -> &'static str {
        match op {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mult => "*",
            Operator::Div => "/",
            Operator::FloorDiv => "//",
            Operator::Mod => "%",
            Operator::Pow => "**",
            Operator::LShift => "<<",
            Operator::RShift => ">>",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitAnd => "&",
        }
    }

    fn format_unary_operator(&self, op: &UnaryOperator) -> &'static str {
        match op {
            UnaryOperator::Invert => "~",
            UnaryOperator::Not => "not ",
            UnaryOperator::UAdd => "+",
            UnaryOperator::USub => "-",
        }
    }

    fn format_bool_operator(&self, op: &BoolOperator) -> &'static str {
        match op {
            BoolOperator::And => "and",
            BoolOperator::Or => "or",
        }
    }

    fn format_cmp_operator(&self, op: &CmpOperator) -> &'static str {
        match op {
            CmpOperator::Eq => "==",
            CmpOperator::NotEq => "!=",
            CmpOperator::Lt => "<",
            CmpOperator::LtE => "<=",
            CmpOperator::Gt => ">",
            CmpOperator::GtE => ">=",
            CmpOperator::Is => "is",
            CmpOperator::IsNot => "is not",
            CmpOperator::In => "in",
            CmpOperator::NotIn => "not in",
        }
    }
}

impl<'ast> Visitor<'ast, ()> for CodeFormatter {
    fn visit_function_def(&mut self, func: &'ast FunctionDef) {
        if func.is_async {
            self.write_indented("async def ");
        } else {
            self.write_indented("def ");
        }
        self.write(&func.name);
        self.write("(");

        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.visit_parameter(param);
        }

        self.write(")");

        if let Some(ret) = &func.returns {
            self.write(" -> ");
            self.visit_expr(ret);
        }

        self.write(":\n");
        self.write_block(&func.body);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        match stmt {
            Stmt::Return { value, .. } => {
                self.write_indented("return");
                if let Some(value) = value {
                    self.write(" ");
                    self.visit_expr(value);
                }
                self.write("\n");
            }
            Stmt::Assign { targets, value, .. } => {
                self.write_indented("");
                for target in targets {
                    self.visit_expr_as_target(target);
                    self.write(" = ");
                }
                self.visit_expr(value);
                self.write("\n");
            }
            Stmt::AugAssign { target, op, value, .. } => {
                self.write_indented("");
                self.visit_expr_as_target(target);
                self.write(" ");
                self.write(self.format_operator(op));
                self.write("= ");
                self.visit_expr(value);
                self.write("\n");
            }
            Stmt::For { target, iter, body, orelse, .. } => {
                self.write_indented("for ");
                self.visit_expr_as_target(target);
                self.write(" in ");
                self.visit_expr(iter);
                self.write(":\n");
                self.write_block(body);
                if !orelse.is_empty() {
                    self.write_indented("else:\n");
                    self.write_block(orelse);
                }
            }
            Stmt::While { test, body, orelse, .. } => {
                self.write_indented("while ");
                self.visit_expr(test);
                self.write(":\n");
                self.write_block(body);
                if !orelse.is_empty() {
                    self.write_indented("else:\n");
                    self.write_block(orelse);
                }
            }
            Stmt::If { test, body, orelse, .. } => {
                self.write_indented("if ");
                self.visit_expr(test);
                self.write(":\n");
                self.write_block(body);
                if !orelse.is_empty() {
                    // Collapse a single nested if in the else branch to elif
                    if orelse.len() == 1 {
                        if let Stmt::If { .. } = orelse[0].as_ref() {
                            let rendered = {
                                let mut nested = CodeFormatter::new(self.indent_size);
                                nested.indent_level = self.indent_level;
                                nested.visit_stmt(&orelse[0]);
                                nested.into_output()
                            };
                            let indent = self.indent();
                            let with_elif =
                                rendered.replacen(&format!("{}if ", indent), &format!("{}elif ", indent), 1);
                            self.write(&with_elif);
                            return;
                        }
                    }
                    self.write_indented("else:\n");
                    self.write_block(orelse);
                }
            }
            Stmt::Expr { value, .. } => {
                self.write_indented("");
                self.visit_expr(value);
                self.write("\n");
            }
            Stmt::Pass { .. } => self.write_indented("pass\n"),
            Stmt::Break { .. } => self.write_indented("break\n"),
            Stmt::Continue { .. } => self.write_indented("continue\n"),
        }
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        match expr {
            Expr::BoolOp { op, values, .. } => {
                let op_text = self.format_bool_operator(op);
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.write(" ");
                        self.write(op_text);
                        self.write(" ");
                    }
                    self.write_operand(value);
                }
            }
            Expr::BinOp { left, op, right, .. } => {
                self.write_operand(left);
                self.write(" ");
                self.write(self.format_operator(op));
                self.write(" ");
                self.write_operand(right);
            }
            Expr::UnaryOp { op, operand, .. } => {
                self.write(self.format_unary_operator(op));
                self.write_operand(operand);
            }
            Expr::Lambda { args, body, .. } => {
                self.write("lambda");
                for (i, arg) in args.iter().enumerate() {
                    self.write(if i > 0 { ", " } else { " " });
                    self.visit_parameter(arg);
                }
                self.write(": ");
                self.visit_expr(body);
            }
            Expr::IfExp { test, body, orelse, .. } => {
                self.write_operand(body);
                self.write(" if ");
                self.write_operand(test);
                self.write(" else ");
                self.write_operand(orelse);
            }
            Expr::Dict { keys, values, .. } => {
                self.write("{");
                for (i, (key, value)) in keys.iter().zip(values.iter()).enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    match key {
                        Some(key) => {
                            self.visit_expr(key);
                            self.write(": ");
                            self.visit_expr(value);
                        }
                        None => {
                            self.write("**");
                            self.visit_expr(value);
                        }
                    }
                }
                self.write("}");
            }
            Expr::Set { elts, .. } => {
                self.write("{");
                for (i, elt) in elts.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.visit_expr(elt);
                }
                self.write("}");
            }
            Expr::Compare { left, ops, comparators, .. } => {
                self.write_operand(left);
                for (op, comparator) in ops.iter().zip(comparators.iter()) {
                    self.write(" ");
                    self.write(self.format_cmp_operator(op));
                    self.write(" ");
                    self.write_operand(comparator);
                }
            }
            Expr::Call { func, args, keywords, .. } => {
                self.write_operand(func);
                self.write("(");
                let mut first = true;
                for arg in args {
                    if !first {
                        self.write(", ");
                    }
                    first = false;
                    self.visit_expr(arg);
                }
                for (keyword, value) in keywords {
                    if !first {
                        self.write(", ");
                    }
                    first = false;
                    match keyword {
                        Some(keyword) => {
                            self.write(keyword);
                            self.write("=");
                        }
                        None => self.write("**"),
                    }
                    self.visit_expr(value);
                }
                self.write(")");
            }
            Expr::Num { value, .. } => self.write_number(value),
            Expr::Str { value, .. } => self.write_str_literal(value),
            Expr::NameConstant { value, .. } => match value {
                NameConstant::None => self.write("None"),
                NameConstant::True => self.write("True"),
                NameConstant::False => self.write("False"),
            },
            Expr::Attribute { value, attr, .. } => {
                self.write_operand(value);
                self.write(".");
                self.write(attr);
            }
            Expr::Subscript { value, slice, .. } => {
                self.write_operand(value);
                self.write("[");
                self.visit_expr(slice);
                self.write("]");
            }
            Expr::Name { id, .. } => self.write(id),
            Expr::List { elts, .. } => {
                self.write("[");
                for (i, elt) in elts.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.visit_expr(elt);
                }
                self.write("]");
            }
            Expr::Tuple { elts, .. } => {
                self.write("(");
                for (i, elt) in elts.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.visit_expr(elt);
                }
                if elts.len() == 1 {
                    self.write(",");
                }
                self.write(")");
            }
        }
    }

    fn visit_parameter(&mut self, param: &'ast Parameter) {
        self.write(&param.name);
        if let Some(typ) = &param.typ {
            self.write(": ");
            self.visit_expr(typ);
        }
        if let Some(default) = &param.default {
            self.write(if param.typ.is_some() { " = " } else { "=" });
            self.visit_expr(default);
        }
    }
}
