//! End-to-end scenario: a class `Point` consumed as `Point` (by value)
//! emits `gs::gc::Ref<Point>` under `gc` and a stack value under
//! `ownership`; `new Point(0, 0)` becomes `gs::gc::make<Point>(0, 0)` vs. a
//! plain constructor call, respectively. The IR is identical across both
//! generator calls - only the backend passed to `generate_module` differs.

use gsc_codegen::{generate_module, GcBackend, OwnershipBackend};
use gsc_common::ModulePath;
use gsc_ir::{
    ClassDeclaration, ClassField, ClassMethod, Declaration, Expr, ExprKind, FunctionDeclaration,
    FunctionFlags, Literal, Module, Ownership, Param, Program, Stmt, StmtKind, Type,
};

fn point_class() -> ClassDeclaration {
    ClassDeclaration {
        name: "Point".into(),
        fields: vec![
            ClassField {
                name: "x".into(),
                ty: Type::number(),
                readonly: false,
                is_static: false,
                access: gsc_ir::Access::Public,
            },
            ClassField {
                name: "y".into(),
                ty: Type::number(),
                readonly: false,
                is_static: false,
                access: gsc_ir::Access::Public,
            },
        ],
        methods: vec![ClassMethod {
            function: FunctionDeclaration {
                name: "getX".into(),
                params: vec![],
                return_type: Type::number(),
                body: vec![],
                flags: FunctionFlags::default(),
            },
            access: gsc_ir::Access::Public,
        }],
        constructor: Some(FunctionDeclaration {
            name: "constructor".into(),
            params: vec![
                Param { name: "x".into(), ty: Type::number() },
                Param { name: "y".into(), ty: Type::number() },
            ],
            return_type: Type::void(),
            body: vec![],
            flags: FunctionFlags::default(),
        }),
        base_class: None,
        implements: vec![],
    }
}

/// `function consume(p: Point): void {}` - "consumed as `Point`" by value.
fn consume_function() -> FunctionDeclaration {
    FunctionDeclaration {
        name: "consume".into(),
        params: vec![Param {
            name: "p".into(),
            ty: Type::class("Point", Ownership::Value),
        }],
        return_type: Type::void(),
        body: vec![],
        flags: FunctionFlags::default(),
    }
}

/// `const origin = new Point(0, 0);`
fn new_point_module() -> Module {
    let new_point = Expr::new(
        ExprKind::New {
            class_name: "Point".into(),
            args: vec![
                Expr::literal(Literal::Number(0.0), Type::number()),
                Expr::literal(Literal::Number(0.0), Type::number()),
            ],
            type_args: vec![],
        },
        Type::class("Point", Ownership::Value),
    );
    let mut module = Module::new(ModulePath::new("point.ts"));
    module.declarations.push(Declaration::Class(point_class()));
    module.declarations.push(Declaration::Function(consume_function()));
    module.declarations.push(Declaration::Function(FunctionDeclaration {
        name: "make_origin".into(),
        params: vec![],
        return_type: Type::class("Point", Ownership::Value),
        body: vec![Stmt::new(StmtKind::Return(Some(new_point)))],
        flags: FunctionFlags::default(),
    }));
    module
}

#[test]
fn gc_mode_renders_point_by_value_as_a_managed_ref() {
    let module = new_point_module();
    let program = Program::new();
    let out = generate_module(&module, &program, &GcBackend);
    assert!(out.header.contains("void consume(gs::gc::Ref<Point> p);"), "{}", out.header);
}

#[test]
fn ownership_mode_renders_point_by_value_as_a_stack_value() {
    let module = new_point_module();
    let program = Program::new();
    let out = generate_module(&module, &program, &OwnershipBackend);
    assert!(out.header.contains("void consume(Point p);"), "{}", out.header);
    assert!(!out.header.contains("gs::gc::Ref"));
}

#[test]
fn new_point_diverges_between_backends() {
    let module = new_point_module();
    let program = Program::new();

    let gc_out = generate_module(&module, &program, &GcBackend);
    assert!(gc_out.source.contains("gs::gc::make<Point>(0.0, 0.0)"), "{}", gc_out.source);

    let ownership_out = generate_module(&module, &program, &OwnershipBackend);
    assert!(ownership_out.source.contains("return Point(0.0, 0.0);"), "{}", ownership_out.source);
}
