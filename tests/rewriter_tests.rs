mod common;

#[cfg(test)]
mod rewriter_tests {
    use crate::common::*;
    use tailrec::ast::{Operator, Stmt};
    use tailrec::{rewrite, samples, unparse, validate};

    #[test]
    fn factorial_rewrites_to_the_expected_source() {
        let rewritten = rewrite(samples::factorial());
        let expected = "\
def factorial(n, acc=1):
    __tco0_n = n
    __tco0_acc = acc
    while True:
        if __tco0_n == 0:
            return __tco0_acc
        (__tco0_n, __tco0_acc) = (__tco0_n - 1, __tco0_acc * __tco0_n)
        continue
";
        assert_eq!(unparse(&rewritten), expected);
    }

    #[test]
    fn countdown_loop_rewrites_with_a_restart_flag() {
        let rewritten = rewrite(samples::countdown_loop());
        let expected = "\
def countdown_loop(n):
    __tco0_n = n
    while True:
        if __tco0_n == 0:
            return 0
        __tco0_returned_in_for_0 = False
        for i in range(1):
            (__tco0_n,) = (__tco0_n - 1,)
            __tco0_returned_in_for_0 = True
            break
        if __tco0_returned_in_for_0:
            continue
";
        assert_eq!(unparse(&rewritten), expected);
    }

    #[test]
    fn temps_are_initialized_in_parameter_order() {
        let rewritten = rewrite(samples::fibonacci());
        let source = unparse(&rewritten);
        let n = source.find("__tco0_n = n").expect("n init missing");
        let a = source.find("__tco0_a = a").expect("a init missing");
        let b = source.find("__tco0_b = b").expect("b init missing");
        let wrap = source.find("while True:").expect("restart loop missing");
        assert!(n < a && a < b && b < wrap);
    }

    #[test]
    fn rewrite_is_deterministic() {
        let first = rewrite(samples::fibonacci());
        let second = rewrite(samples::fibonacci());
        assert_eq!(unparse(&first), unparse(&second));
    }

    #[test]
    fn signature_survives_the_rewrite() {
        let original = samples::factorial();
        let rewritten = rewrite(original.clone());
        assert_eq!(rewritten.name, original.name);
        assert_eq!(rewritten.params.len(), original.params.len());
        assert_eq!(rewritten.params[0].name, "n");
        assert_eq!(rewritten.params[1].name, "acc");
        assert!(rewritten.params[1].default.is_some());
        assert!(!rewritten.is_async);
        assert!(rewritten.returns.is_none());
    }

    #[test]
    fn rewritten_function_contains_no_self_call() {
        let rewritten = rewrite(samples::factorial());
        let source = unparse(&rewritten);
        // Only the def line mentions the function name
        assert_eq!(source.matches("factorial(").count(), 1);
        assert!(source.starts_with("def factorial("));
        assert!(validate(&rewritten).is_ok());
    }

    #[test]
    fn keyword_arguments_are_reordered_into_parameter_order() {
        // def f(n, acc):
        //     if n == 0:
        //         return acc
        //     return f(acc=acc * n, n=n - 1)
        let f = func(
            "f",
            vec![param("n"), param("acc")],
            vec![
                if_stmt(eq(load("n"), int(0)), vec![ret(load("acc"))], vec![]),
                ret(call_kw(
                    "f",
                    vec![],
                    vec![
                        (
                            Some("acc".to_string()),
                            bin(load("acc"), Operator::Mult, load("n")),
                        ),
                        (
                            Some("n".to_string()),
                            bin(load("n"), Operator::Sub, int(1)),
                        ),
                    ],
                )),
            ],
        );
        let source = unparse(&rewrite(f));
        assert!(source.contains("(__tco0_n, __tco0_acc) = (__tco0_n - 1, __tco0_acc * __tco0_n)"));
    }

    #[test]
    fn omitted_defaulted_parameter_is_filled_from_its_default() {
        // def f(n, acc=1): ... return f(n - 1)
        let f = func(
            "f",
            vec![param("n"), param_default("acc", 1)],
            vec![
                if_stmt(eq(load("n"), int(0)), vec![ret(load("acc"))], vec![]),
                ret(call("f", vec![bin(load("n"), Operator::Sub, int(1))])),
            ],
        );
        let source = unparse(&rewrite(f));
        assert!(source.contains("(__tco0_n, __tco0_acc) = (__tco0_n - 1, 1)"));
    }

    #[test]
    fn non_recursive_returns_read_the_temps() {
        // def f(n): return n + 1
        let f = func(
            "f",
            vec![param("n")],
            vec![ret(bin(load("n"), Operator::Add, int(1)))],
        );
        let source = unparse(&rewrite(f));
        assert!(source.contains("return __tco0_n + 1"));
        assert!(!source.contains("return n + 1"));
    }

    #[test]
    fn bare_return_is_left_alone() {
        let f = func("f", vec![param("n")], vec![ret_none()]);
        let source = unparse(&rewrite(f));
        assert!(source.contains("    return\n"));
    }

    #[test]
    fn assignments_to_a_parameter_are_redirected() {
        // n = n - 1 ... acc *= n
        let f = func(
            "f",
            vec![param("n"), param("acc")],
            vec![
                assign(store("n"), bin(load("n"), Operator::Sub, int(1))),
                aug_assign(store("acc"), Operator::Mult, load("n")),
                ret(load("acc")),
            ],
        );
        let source = unparse(&rewrite(f));
        assert!(source.contains("__tco0_n = __tco0_n - 1"));
        assert!(source.contains("__tco0_acc *= __tco0_n"));
    }

    #[test]
    fn nested_loops_relay_the_restart_flag_outward() {
        // def g(n, acc):
        //     if n == 0:
        //         return acc
        //     while n > 0:
        //         for i in range(1):
        //             return g(n - 1, acc + n)
        let g = func(
            "g",
            vec![param("n"), param("acc")],
            vec![
                if_stmt(eq(load("n"), int(0)), vec![ret(load("acc"))], vec![]),
                while_stmt(
                    cmp(load("n"), tailrec::ast::CmpOperator::Gt, int(0)),
                    vec![for_stmt(
                        store("i"),
                        call("range", vec![int(1)]),
                        vec![ret(call(
                            "g",
                            vec![
                                bin(load("n"), Operator::Sub, int(1)),
                                bin(load("acc"), Operator::Add, load("n")),
                            ],
                        ))],
                    )],
                ),
            ],
        );
        let source = unparse(&rewrite(g));

        // Pre-order flag numbering: the while is seen first, the for second
        assert!(source.contains("__tco0_returned_in_while_0 = False"));
        assert!(source.contains("__tco0_returned_in_for_1 = False"));

        // The tail call sets the innermost flag and breaks
        assert!(source.contains("__tco0_returned_in_for_1 = True"));

        // The inner check relays to the outer flag, the outer check restarts
        let inner_check = source
            .find("if __tco0_returned_in_for_1:")
            .expect("inner flag check missing");
        let relay = source
            .find("__tco0_returned_in_while_0 = True")
            .expect("relay missing");
        let outer_check = source
            .find("if __tco0_returned_in_while_0:")
            .expect("outer flag check missing");
        assert!(inner_check < relay && relay < outer_check);
        assert!(source[outer_check..].contains("continue"));
    }

    #[test]
    fn prefix_bumps_past_colliding_user_identifiers() {
        // def f(n):
        //     __tco0_x = n
        //     if n == 0:
        //         return __tco0_x
        //     return f(n - 1)
        let f = func(
            "f",
            vec![param("n")],
            vec![
                assign(store("__tco0_x"), load("n")),
                if_stmt(eq(load("n"), int(0)), vec![ret(load("__tco0_x"))], vec![]),
                ret(call("f", vec![bin(load("n"), Operator::Sub, int(1))])),
            ],
        );
        let source = unparse(&rewrite(f));
        assert!(source.contains("__tco1_n = n"));
        assert!(source.contains("(__tco1_n,) = (__tco1_n - 1,)"));
        // The user's own name is left untouched
        assert!(source.contains("__tco0_x = __tco1_n"));
    }

    #[test]
    fn loop_else_tail_call_uses_the_enclosing_context() {
        // def f(n):
        //     if n == 0:
        //         return 42
        //     for i in range(0):
        //         pass
        //     else:
        //         return f(n - 1)
        let f = func(
            "f",
            vec![param("n")],
            vec![
                if_stmt(eq(load("n"), int(0)), vec![ret(int(42))], vec![]),
                for_else(
                    store("i"),
                    call("range", vec![int(0)]),
                    vec![pass_stmt()],
                    vec![ret(call("f", vec![bin(load("n"), Operator::Sub, int(1))]))],
                ),
            ],
        );
        let source = unparse(&rewrite(f));

        // The else clause runs outside the loop, so the tail call there
        // restarts with a plain continue instead of the loop's flag
        let else_pos = source.find("else:").expect("else clause missing");
        let update = source
            .find("(__tco0_n,) = (__tco0_n - 1,)")
            .expect("temp update missing");
        assert!(update > else_pos);
        assert!(source[update..].contains("continue"));
        assert!(!source.contains("__tco0_returned_in_for_0 = True"));
    }

    #[test]
    fn pass_break_continue_survive_unchanged() {
        let f = func(
            "f",
            vec![param("n")],
            vec![
                while_stmt(
                    cmp(load("n"), tailrec::ast::CmpOperator::Gt, int(0)),
                    vec![
                        Box::new(Stmt::Pass { line: 1, column: 1 }),
                        if_stmt(
                            eq(load("n"), int(1)),
                            vec![Box::new(Stmt::Break { line: 1, column: 1 })],
                            vec![Box::new(Stmt::Continue { line: 1, column: 1 })],
                        ),
                    ],
                ),
                ret(load("n")),
            ],
        );
        let source = unparse(&rewrite(f));
        assert!(source.contains("pass"));
        assert!(source.contains("break"));
        assert!(source.contains("continue"));
    }

    #[test]
    fn loop_header_expressions_are_redirected() {
        // while n > 0: ... / for i in range(n): ...
        let f = func(
            "f",
            vec![param("n")],
            vec![
                while_stmt(
                    cmp(load("n"), tailrec::ast::CmpOperator::Gt, int(0)),
                    vec![Box::new(Stmt::Break { line: 1, column: 1 })],
                ),
                for_stmt(store("i"), call("range", vec![load("n")]), vec![
                    Box::new(Stmt::Pass { line: 1, column: 1 }),
                ]),
                ret(load("n")),
            ],
        );
        let source = unparse(&rewrite(f));
        assert!(source.contains("while __tco0_n > 0:"));
        assert!(source.contains("for i in range(__tco0_n):"));
    }
}
