//! End-to-end scenario: `async function f(): Promise<number> { const x =
//! await g(); return x+1; }` emits a coroutine with one `co_await` site and
//! a `co_return` of the sum, through the full module generator rather than
//! a single emitter helper in isolation.

use gsc_codegen::{generate_module, GcBackend};
use gsc_common::ModulePath;
use gsc_ir::{
    BinaryOp, Declaration, Expr, ExprKind, FunctionDeclaration, FunctionFlags, Literal, Module,
    Program, Stmt, StmtKind, Type, VersionedName,
};

fn async_module() -> Module {
    let call_g = Expr::new(
        ExprKind::Call {
            callee: Box::new(Expr::identifier("g", Type::function(vec![], Type::promise(Type::number())))),
            args: vec![],
            builtin: None,
        },
        Type::promise(Type::number()),
    );

    let body = vec![
        Stmt::new(StmtKind::VariableDeclaration {
            name: VersionedName::new("x", 0),
            ty: Type::number(),
            init: Some(Expr::await_expr(call_g, Type::number())),
        }),
        Stmt::new(StmtKind::Return(Some(Expr::binary(
            BinaryOp::Add,
            Expr::identifier("x", Type::number()),
            Expr::literal(Literal::Number(1.0), Type::number()),
            Type::number(),
        )))),
    ];

    let mut module = Module::new(ModulePath::new("async_example.ts"));
    module.declarations.push(Declaration::Function(FunctionDeclaration {
        name: "f".into(),
        params: vec![],
        return_type: Type::promise(Type::number()),
        body,
        flags: FunctionFlags {
            is_async: true,
            ..Default::default()
        },
    }));
    module
}

#[test]
fn async_function_emits_exactly_one_co_await_and_a_co_return() {
    let module = async_module();
    let program = Program::new();
    let backend = GcBackend;
    let out = generate_module(&module, &program, &backend);

    assert_eq!(out.source.matches("co_await").count(), 1, "{}", out.source);
    assert!(out.source.contains("co_return (x + 1.0);"), "{}", out.source);
    assert!(out.header.contains("gs::Promise<double> f();"));
}

#[test]
fn module_with_async_function_pulls_in_coroutine_header_exactly_once() {
    let module = async_module();
    let program = Program::new();
    let backend = GcBackend;
    let out = generate_module(&module, &program, &backend);

    assert_eq!(out.header.matches("#include <coroutine>").count(), 1);
}
