//! Optional chaining: `obj?.name` evaluates `obj` exactly once
//! and short-circuits to `undefined` if it is null/undefined, left to right.
//!
//! Open question resolution (see DESIGN.md): the IR has no "expression with
//! local bindings" node, so evaluating the receiver once requires a real
//! statement-level temporary. This lowering synthesizes a
//! `VariableDeclaration` for the receiver and pushes it onto the context's
//! pending prelude, which the enclosing statement lowering (`stmt.rs`)
//! splices in immediately before the statement being lowered. This confines
//! "exactly once" to the surrounding statement's scope - a chain nested
//! inside another sub-expression without an enclosing statement boundary
//! (there always is one, since every expression is lowered from within some
//! statement) still gets a single evaluation, just hoisted slightly further
//! up than the innermost expression.

use crate::context::LoweringContext;
use gsc_common::Span;
use gsc_ir::{Expr, ExprKind, Literal, StmtKind, Type};

pub fn lower_optional_member(
    object: Expr,
    name: std::sync::Arc<str>,
    result_ty: Type,
    span: Span,
    ctx: &mut LoweringContext,
) -> Expr {
    let object_ty = object.ty.clone();
    let temp = ctx.fresh_temp(&name);
    ctx.push_prelude(gsc_ir::Stmt::new(StmtKind::VariableDeclaration {
        name: temp.clone(),
        ty: object_ty.clone(),
        init: Some(object),
    }));

    let receiver = Expr::identifier(format!("{}${}", temp.name, temp.version), object_ty.clone());
    let is_nullish = Expr::new(
        ExprKind::Binary {
            op: gsc_ir::BinaryOp::StrictEq,
            left: Box::new(receiver.clone()),
            right: Box::new(Expr::literal(Literal::Null, object_ty.clone())),
        },
        Type::boolean(),
    );
    let member = Expr::new(
        ExprKind::Member {
            object: Box::new(receiver),
            name,
        },
        result_ty.clone(),
    );
    let undefined = Expr::literal(Literal::Undefined, result_ty.clone());

    Expr::conditional(is_nullish, undefined, member, Type::nullable(result_ty)).with_span(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_common::MemoryMode;
    use gsc_signature::SignatureEngine;

    #[test]
    fn lowering_an_optional_member_pushes_exactly_one_prelude_statement() {
        let engine = SignatureEngine::new();
        let mut ctx = LoweringContext::new(MemoryMode::Gc, &engine);
        let object = Expr::identifier("obj", Type::nullable(Type::class("Widget", gsc_ir::Ownership::Share)));
        let result = lower_optional_member(
            object,
            std::sync::Arc::from("label"),
            Type::string(),
            Span::dummy(),
            &mut ctx,
        );
        assert!(matches!(result.kind, ExprKind::Conditional { .. }));
        let prelude = ctx.take_prelude();
        assert_eq!(prelude.len(), 1);
    }
}
