// subst.rs - Parameter-to-temp-variable substitution over expression trees

use std::collections::HashMap;

use crate::ast::Expr;

/// Replace every reference to a mapped parameter name with its temp name,
/// in place. Unmapped identifiers, literals, and structure are untouched.
///
/// The rewriter owns the tree it is transforming, so substitution mutates
/// rather than copying. Both load and store contexts are renamed; the
/// distinction lives in the `Name` node's `ctx` and is preserved as-is.
pub fn rename_in_expr(expr: &mut Expr, map: &HashMap<String, String>) {
    match expr {
        Expr::Name { id, .. } => {
            if let Some(temp) = map.get(id) {
                *id = temp.clone();
            }
        }
        Expr::BoolOp { values, .. } => {
            for value in values {
                rename_in_expr(value, map);
            }
        }
        Expr::BinOp { left, right, .. } => {
            rename_in_expr(left, map);
            rename_in_expr(right, map);
        }
        Expr::UnaryOp { operand, .. } => {
            rename_in_expr(operand, map);
        }
        Expr::Lambda { body, .. } => {
            // Lambda parameters may shadow the function's parameters; we
            // rename through them regardless, since the validator never
            // accepts a self-call inside a lambda.
            rename_in_expr(body, map);
        }
        Expr::IfExp { test, body, orelse, .. } => {
            rename_in_expr(test, map);
            rename_in_expr(body, map);
            rename_in_expr(orelse, map);
        }
        Expr::Dict { keys, values, .. } => {
            for key in keys.iter_mut().flatten() {
                rename_in_expr(key, map);
            }
            for value in values {
                rename_in_expr(value, map);
            }
        }
        Expr::Set { elts, .. } => {
            for elt in elts {
                rename_in_expr(elt, map);
            }
        }
        Expr::Compare { left, comparators, .. } => {
            rename_in_expr(left, map);
            for comparator in comparators {
                rename_in_expr(comparator, map);
            }
        }
        Expr::Call { func, args, keywords, .. } => {
            rename_in_expr(func, map);
            for arg in args {
                rename_in_expr(arg, map);
            }
            for (_, value) in keywords {
                rename_in_expr(value, map);
            }
        }
        Expr::Attribute { value, .. } => {
            rename_in_expr(value, map);
        }
        Expr::Subscript { value, slice, .. } => {
            rename_in_expr(value, map);
            rename_in_expr(slice, map);
        }
        Expr::List { elts, .. } | Expr::Tuple { elts, .. } => {
            for elt in elts {
                rename_in_expr(elt, map);
            }
        }
        Expr::Num { .. } | Expr::Str { .. } | Expr::NameConstant { .. } => {}
    }
}

/// Replace parameter references in an assignment target, so that a write to
/// an original parameter lands on its temp variable instead.
pub fn rename_in_target(target: &mut Expr, map: &HashMap<String, String>) {
    // Store-context trees are built from the same node kinds; renaming is
    // identical, the split exists so call sites state their intent.
    rename_in_expr(target, map);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, ExprContext, Number, Operator};

    fn name(id: &str) -> Expr {
        Expr::Name {
            id: id.to_string(),
            ctx: ExprContext::Load,
            line: 1,
            column: 1,
        }
    }

    #[test]
    fn renames_mapped_names_only() {
        let mut map = HashMap::new();
        map.insert("n".to_string(), "__tco0_n".to_string());

        let mut expr = Expr::BinOp {
            left: Box::new(name("n")),
            op: Operator::Mult,
            right: Box::new(name("k")),
            line: 1,
            column: 1,
        };
        rename_in_expr(&mut expr, &map);

        match expr {
            Expr::BinOp { left, right, .. } => {
                assert!(matches!(*left, Expr::Name { ref id, .. } if id == "__tco0_n"));
                assert!(matches!(*right, Expr::Name { ref id, .. } if id == "k"));
            }
            other => panic!("unexpected expr: {:?}", other),
        }
    }

    #[test]
    fn leaves_literals_untouched() {
        let map = HashMap::new();
        let mut expr = Expr::Num {
            value: Number::Integer(42),
            line: 1,
            column: 1,
        };
        rename_in_expr(&mut expr, &map);
        assert!(matches!(expr, Expr::Num { value: Number::Integer(42), .. }));
    }

    #[test]
    fn renames_inside_call_arguments_and_keywords() {
        let mut map = HashMap::new();
        map.insert("acc".to_string(), "__tco0_acc".to_string());

        let mut expr = Expr::Call {
            func: Box::new(name("helper")),
            args: vec![Box::new(name("acc"))],
            keywords: vec![(Some("x".to_string()), Box::new(name("acc")))],
            line: 1,
            column: 1,
        };
        rename_in_expr(&mut expr, &map);

        match expr {
            Expr::Call { func, args, keywords, .. } => {
                assert!(matches!(*func, Expr::Name { ref id, .. } if id == "helper"));
                assert!(matches!(*args[0], Expr::Name { ref id, .. } if id == "__tco0_acc"));
                assert!(matches!(*keywords[0].1, Expr::Name { ref id, .. } if id == "__tco0_acc"));
            }
            other => panic!("unexpected expr: {:?}", other),
        }
    }
}
