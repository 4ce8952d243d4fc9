//! End-to-end tests driving the two public entry points against whole sentences and
//! small programs, complementing the per-module unit tests in `tokenizer` and `parser::*`.
//!
//! Every test body runs inside a single `create_session_if_not_set_then` call: `Symbol`s
//! returned by parsing are only valid while their interning session is still active, and
//! assertions here often build comparison `Symbol`s of their own via `Symbol::intern`.

use crate::{parse_expression, parse_program};
use kuin_ast::{Expr, IfdefMode, Literal, Stmt, Type, Visibility};
use kuin_span::{create_session_if_not_set_then, Symbol};

#[test]
fn empty_program_is_empty() {
    create_session_if_not_set_then(|| assert_eq!(parse_program("").unwrap(), Vec::new()));
}

#[test]
fn trailing_comment_never_affects_the_ast() {
    create_session_if_not_set_then(|| {
        assert_eq!(parse_program("do a :: 1 { a trailing comment }").unwrap(), parse_program("do a :: 1").unwrap());
    });
}

#[test]
fn trailing_input_after_an_expression_is_rejected() {
    create_session_if_not_set_then(|| assert!(parse_expression("1 2").is_err()));
}

#[test]
fn labelled_if_elif_else_with_breaks() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("if a (4 > 5) break a elif (3 = 2) break else break a end if").unwrap();
        assert_eq!(stmts.len(), 1);
        match &stmts[0] {
            Stmt::If { clauses, block_name } => {
                assert_eq!(block_name.map(|s| s.as_str()), Some("a"));
                assert_eq!(clauses.len(), 3);
                assert!(clauses[0].0.is_some());
                assert_eq!(clauses[0].1, vec![Stmt::Break(Some(Symbol::intern("a")))]);
                assert!(clauses[1].0.is_some());
                assert_eq!(clauses[1].1, vec![Stmt::Break(None)]);
                assert!(clauses[2].0.is_none());
                assert_eq!(clauses[2].1, vec![Stmt::Break(Some(Symbol::intern("a")))]);
            }
            other => panic!("expected If, got {other:?}"),
        }
    });
}

#[test]
fn elif_after_else_is_rejected() {
    create_session_if_not_set_then(|| {
        assert!(parse_program("if (1 = 1) do a elif (2 = 2) do b else do c elif (3 = 3) do d end if").is_err());
    });
}

#[test]
fn enum_with_explicit_reset() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("enum EColor  Red  Blue  Green :: 5  Yellow  end enum").unwrap();
        match &stmts[0] {
            Stmt::Enum { name, members } => {
                assert_eq!(name.as_str(), "EColor");
                let values: Vec<(&str, i64)> = members.iter().map(|(s, v)| (s.as_str(), *v)).collect();
                assert_eq!(values, vec![("Red", 0), ("Blue", 1), ("Green", 5), ("Yellow", 6)]);
            }
            other => panic!("expected Enum, got {other:?}"),
        }
    });
}

#[test]
fn switch_with_range_value_list_and_default_last() {
    create_session_if_not_set_then(|| {
        let stmts =
            parse_program("switch s (n)  case 1, 2, 5 @to 8, a  const x: int :: 2  default  break s  end switch").unwrap();
        match &stmts[0] {
            Stmt::Switch { target, cases, block_name } => {
                assert_eq!(block_name.map(|s| s.as_str()), Some("s"));
                assert_eq!(*target, Expr::Ref(Symbol::intern("n")));
                assert_eq!(cases.len(), 2);
                let (values, body) = &cases[0];
                let values = values.as_ref().unwrap();
                assert_eq!(values.len(), 4);
                assert!(values[2].1.is_some());
                assert!(matches!(&body[0], Stmt::Const { .. }));
                let (default_values, default_body) = &cases[1];
                assert!(default_values.is_none());
                assert_eq!(*default_body, vec![Stmt::Break(Some(Symbol::intern("s")))]);
            }
            other => panic!("expected Switch, got {other:?}"),
        }
    });
}

#[test]
fn switch_default_must_be_last() {
    create_session_if_not_set_then(|| {
        assert!(parse_program("switch (n) default break case 1 break end switch").is_err());
    });
}

#[test]
fn array_var_declarations_with_concat_and_index() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program(
            r#"
            var p : [2][3]int
            var q : [][]float
            var s : []char :: "abc" ~ "def"
            var c : char :: s[4]
            "#,
        )
        .unwrap();
        assert_eq!(stmts.len(), 4);
        match &stmts[0] {
            Stmt::Var { name, ty, init } => {
                assert_eq!(name.as_str(), "p");
                assert!(init.is_none());
                match ty {
                    Type::Array { base, sizes } => {
                        assert!(matches!(**base, Type::Primitive(_)));
                        assert_eq!(sizes.len(), 2);
                        assert!(sizes.iter().all(Option::is_some));
                    }
                    other => panic!("expected Array, got {other:?}"),
                }
            }
            other => panic!("expected Var, got {other:?}"),
        }
        match &stmts[1] {
            Stmt::Var { ty: Type::Array { sizes, .. }, .. } => assert_eq!(*sizes, vec![None, None]),
            other => panic!("expected Var with Array, got {other:?}"),
        }
        match &stmts[2] {
            Stmt::Var { init: Some(Expr::Op { op, .. }), .. } => assert_eq!(op.as_str(), kuin_ast::ops::CONCAT),
            other => panic!("expected Var with concat initializer, got {other:?}"),
        }
        match &stmts[3] {
            Stmt::Var { init: Some(Expr::Index { array, index }), .. } => {
                assert_eq!(array.as_str(), "s");
                assert_eq!(**index, Expr::Literal(Literal::Int(4)));
            }
            other => panic!("expected Var with Index initializer, got {other:?}"),
        }
    });
}

#[test]
fn do_statements_wrap_assignment_expressions() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("do a :: 4 + 5 do a :+ 2 do b :: !a").unwrap();
        assert_eq!(
            stmts,
            vec![
                Stmt::Do(Expr::binary(
                    kuin_ast::ops::ASSIGN,
                    Expr::Ref(Symbol::intern("a")),
                    Expr::binary(kuin_ast::ops::ADD, Expr::Literal(Literal::Int(4)), Expr::Literal(Literal::Int(5))),
                )),
                Stmt::Do(Expr::binary(kuin_ast::ops::ASSIGN_ADD, Expr::Ref(Symbol::intern("a")), Expr::Literal(Literal::Int(2)))),
                Stmt::Do(Expr::binary(
                    kuin_ast::ops::ASSIGN,
                    Expr::Ref(Symbol::intern("b")),
                    Expr::unary(kuin_ast::ops::NOT, Expr::Ref(Symbol::intern("a"))),
                )),
            ]
        );
    });
}

#[test]
fn new_is_and_cast_initializers() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program(
            r#"
            var a : []int :: @new [5]int
            var b : CB :: @new CB
            var c : bool :: b @is CB
            "#,
        )
        .unwrap();
        match &stmts[0] {
            Stmt::Var { init: Some(Expr::New(Type::Array { sizes, .. })), .. } => assert_eq!(sizes.len(), 1),
            other => panic!("expected Var with New(Array) initializer, got {other:?}"),
        }
        match &stmts[1] {
            Stmt::Var { init: Some(Expr::New(Type::Named(sym))), .. } => assert_eq!(sym.as_str(), "CB"),
            other => panic!("expected Var with New(Named) initializer, got {other:?}"),
        }
        match &stmts[2] {
            Stmt::Var { init: Some(Expr::Op { op, operands }), .. } => {
                assert_eq!(op.as_str(), kuin_ast::ops::IS);
                assert!(matches!(&operands[1], Expr::Ref(sym) if sym.as_str() == "CB"));
            }
            other => panic!("expected Var with @is initializer, got {other:?}"),
        }
    });
}

#[test]
fn throw_with_and_without_message() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("throw 404 throw 500, \"server error\"").unwrap();
        assert_eq!(stmts[0], Stmt::Throw { code: Expr::Literal(Literal::Int(404)), message: None });
        match &stmts[1] {
            Stmt::Throw { code, message } => {
                assert_eq!(*code, Expr::Literal(Literal::Int(500)));
                assert_eq!(*message, Some(Expr::Literal(Literal::Str("server error".into()))));
            }
            other => panic!("expected Throw, got {other:?}"),
        }
    });
}

#[test]
fn import_reads_a_raw_source_name() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("import foo/bar.kn").unwrap();
        assert_eq!(stmts, vec![Stmt::Import(Symbol::intern("foo/bar.kn"))]);
    });
}

#[test]
fn try_catch_finally_with_ignore_list() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("try (100, 200) do a catch 1 @to 99 do b finally do c end try").unwrap();
        match &stmts[0] {
            Stmt::Try { ignore, body, catch_values, catch_body, finally_body, .. } => {
                assert_eq!(ignore.as_ref().unwrap().len(), 2);
                assert_eq!(body.len(), 1);
                assert_eq!(catch_values.as_ref().unwrap().len(), 1);
                assert!(catch_values.as_ref().unwrap()[0].1.is_some());
                assert_eq!(catch_body.len(), 1);
                assert_eq!(finally_body.len(), 1);
            }
            other => panic!("expected Try, got {other:?}"),
        }
    });
}

#[test]
fn try_with_no_ignore_list_and_no_catch() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("try () do a end try").unwrap();
        match &stmts[0] {
            Stmt::Try { ignore, catch_values, finally_body, .. } => {
                assert!(ignore.is_none());
                assert!(catch_values.is_none());
                assert!(finally_body.is_empty());
            }
            other => panic!("expected Try, got {other:?}"),
        }
    });
}

#[test]
fn ifdef_release_and_debug() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("ifdef (release) do a end ifdef ifdef (debug) do b end ifdef").unwrap();
        match &stmts[0] {
            Stmt::Ifdef { mode, .. } => assert_eq!(*mode, IfdefMode::Release),
            other => panic!("expected Ifdef, got {other:?}"),
        }
        match &stmts[1] {
            Stmt::Ifdef { mode, .. } => assert_eq!(*mode, IfdefMode::Debug),
            other => panic!("expected Ifdef, got {other:?}"),
        }
    });
}

#[test]
fn class_with_visibility_and_override_markers() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("class CSub: CBase  -var x: int  +*func run() end func  end class").unwrap();
        match &stmts[0] {
            Stmt::Class { name, parent, members } => {
                assert_eq!(name.as_str(), "CSub");
                assert_eq!(parent.map(|s| s.as_str()), Some("CBase"));
                assert_eq!(members.len(), 2);
                assert_eq!(members[0].visibility, Visibility::Private);
                assert!(!members[0].is_override);
                assert!(matches!(*members[0].def, Stmt::Var { .. }));
                assert_eq!(members[1].visibility, Visibility::Protected);
                assert!(members[1].is_override);
                assert!(matches!(*members[1].def, Stmt::Func { .. }));
            }
            other => panic!("expected Class, got {other:?}"),
        }
    });
}

#[test]
fn override_marker_before_visibility_is_rejected() {
    create_session_if_not_set_then(|| {
        assert!(parse_program("class C  *+var x: int  end class").is_err());
    });
}

#[test]
fn func_with_params_and_return_type() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("func add(a: int, b: int): int return a + b end func").unwrap();
        match &stmts[0] {
            Stmt::Func { name, params, ret, body } => {
                assert_eq!(name.as_str(), "add");
                assert_eq!(params.len(), 2);
                assert!(ret.is_some());
                assert_eq!(body.len(), 1);
            }
            other => panic!("expected Func, got {other:?}"),
        }
    });
}

#[test]
fn while_with_skip_and_for_with_step() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("while (n < 10, true) do n :+ 1 end while for (0, 10, 2) do i end for").unwrap();
        assert!(matches!(&stmts[0], Stmt::While { skip: Some(_), .. }));
        assert!(matches!(&stmts[1], Stmt::For { step: Some(_), .. }));
    });
}

#[test]
fn foreach_and_named_block_break() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("foreach items (0, 1, 2) break items end foreach").unwrap();
        match &stmts[0] {
            Stmt::Foreach { block_name, body, .. } => {
                assert_eq!(block_name.map(|s| s.as_str()), Some("items"));
                assert_eq!(*body, vec![Stmt::Break(Some(Symbol::intern("items")))]);
            }
            other => panic!("expected Foreach, got {other:?}"),
        }
    });
}

#[test]
fn bare_block_and_return_with_and_without_value() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("block do a end block func f() return end func func g(): int return 1 end func").unwrap();
        assert!(matches!(&stmts[0], Stmt::Block { .. }));
        match &stmts[1] {
            Stmt::Func { body, .. } => assert_eq!(body[0], Stmt::Return(None)),
            other => panic!("expected Func, got {other:?}"),
        }
        match &stmts[2] {
            Stmt::Func { body, .. } => assert_eq!(body[0], Stmt::Return(Some(Expr::Literal(Literal::Int(1))))),
            other => panic!("expected Func, got {other:?}"),
        }
    });
}

#[test]
fn alias_and_const_definitions() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("alias Weight: float const MAX: int :: 100").unwrap();
        assert!(matches!(&stmts[0], Stmt::Alias { .. }));
        match &stmts[1] {
            Stmt::Const { name, init, .. } => {
                assert_eq!(name.as_str(), "MAX");
                assert_eq!(*init, Expr::Literal(Literal::Int(100)));
            }
            other => panic!("expected Const, got {other:?}"),
        }
    });
}

#[test]
fn assert_statement() {
    create_session_if_not_set_then(|| {
        let stmts = parse_program("assert n > 0").unwrap();
        assert!(matches!(&stmts[0], Stmt::Assert(_)));
    });
}

#[test]
fn numeric_literal_fatal_radix_is_a_parse_error() {
    create_session_if_not_set_then(|| {
        assert!(parse_expression("16#FFF").is_err());
        assert!(parse_expression("10#123").is_err());
        assert!(parse_expression("8#9").is_err());
        assert!(parse_expression("1#0").is_err());
    });
}

#[test]
fn radix_and_hex_literal_values() {
    create_session_if_not_set_then(|| {
        assert_eq!(parse_expression("2#1000").unwrap(), Expr::Literal(Literal::Int(8)));
        assert_eq!(parse_expression("8#777").unwrap(), Expr::Literal(Literal::Int(511)));
        assert_eq!(parse_expression("#FFF").unwrap(), Expr::Literal(Literal::Int(4095)));
        assert_eq!(parse_expression("36#Z").unwrap(), Expr::Literal(Literal::Int(35)));
        assert_eq!(parse_expression("#1").unwrap(), Expr::Literal(Literal::Int(1)));
    });
}

#[test]
fn round_trip_idempotence_over_a_small_program() {
    create_session_if_not_set_then(|| {
        let source = "func add(a: int, b: int): int return a + b end func";
        let first = parse_program(source).unwrap();
        let printed: String = first.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ");
        let second = parse_program(&printed).unwrap();
        assert_eq!(first, second);
    });
}

#[test]
fn round_trip_idempotence_over_enum_and_class() {
    create_session_if_not_set_then(|| {
        let source = "enum EColor Red Blue Green :: 5 Yellow end enum class C -var x: int end class";
        let first = parse_program(source).unwrap();
        let printed: String = first.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ");
        let second = parse_program(&printed).unwrap();
        assert_eq!(first, second);
    });
}
