//! Expression lowering dispatcher. Each construct family has
//! its own module; this file threads them together and owns the constructs
//! that are simple enough not to need one (identifiers, binary/unary,
//! conditional, member/index, calls, `new`, literals-as-collections,
//! assignment).

use crate::async_await::lower_await;
use crate::builtins::recognize_namespace;
use crate::context::LoweringContext;
use crate::lambdas::lower_lambda;
use crate::literals::{
    lower_boolean_literal, lower_null_literal, lower_number_literal, lower_string_literal,
    lower_undefined_literal,
};
use crate::operators::{map_binary_op, map_unary_op, promoted_arithmetic_type};
use crate::optional_chaining::lower_optional_member;
use crate::stmt::lower_stmts;
use crate::template_literals::build_template_literal;
use gsc_ast as ast;
use gsc_ir::{BuiltinNamespace, Expr, ExprKind, TemplatePart};

pub fn lower_expr(expr: &ast::Expr, ctx: &mut LoweringContext) -> Expr {
    let span = expr.span;
    match &expr.kind {
        ast::ExprKind::NumberLiteral(raw) => {
            lower_number_literal(*raw, &expr.resolved_type, span, ctx)
        }
        ast::ExprKind::StringLiteral(s) => lower_string_literal(s.clone(), span),
        ast::ExprKind::BooleanLiteral(b) => lower_boolean_literal(*b, span),
        ast::ExprKind::NullLiteral => lower_null_literal(span),
        ast::ExprKind::UndefinedLiteral => lower_undefined_literal(span),

        ast::ExprKind::Identifier(name) => {
            Expr::identifier(name.clone(), ctx.normalize(&expr.resolved_type)).with_span(span)
        }

        ast::ExprKind::Binary { op, left, right } => lower_binary(*op, left, right, expr, ctx),

        ast::ExprKind::Unary { op, operand } => {
            let operand = lower_expr(operand, ctx);
            Expr::unary(map_unary_op(*op), operand, ctx.normalize(&expr.resolved_type)).with_span(span)
        }

        ast::ExprKind::Conditional {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond = lower_expr(cond, ctx);
            let then_branch = lower_expr(then_branch, ctx);
            let else_branch = lower_expr(else_branch, ctx);
            Expr::conditional(cond, then_branch, else_branch, ctx.normalize(&expr.resolved_type)).with_span(span)
        }

        ast::ExprKind::Member { object, name } => {
            let object = lower_expr(object, ctx);
            Expr::new(
                ExprKind::Member {
                    object: Box::new(object),
                    name: name.clone(),
                },
                ctx.normalize(&expr.resolved_type),
            )
            .with_span(span)
        }

        ast::ExprKind::OptionalMember { object, name } => {
            let object = lower_expr(object, ctx);
            lower_optional_member(object, name.clone(), ctx.normalize(&expr.resolved_type), span, ctx)
        }

        ast::ExprKind::Index { object, index } => {
            let object = lower_expr(object, ctx);
            let index = lower_expr(index, ctx);
            Expr::new(
                ExprKind::Index {
                    object: Box::new(object),
                    index: Box::new(index),
                },
                ctx.normalize(&expr.resolved_type),
            )
            .with_span(span)
        }

        ast::ExprKind::Call { callee, args } => lower_call(callee, args, expr, ctx),

        ast::ExprKind::MethodCall {
            object,
            method,
            args,
        } => {
            let builtin = builtin_of_object(object);
            let object = lower_expr(object, ctx);
            let args = args.iter().map(|a| lower_expr(a, ctx)).collect();
            Expr::new(
                ExprKind::MethodCall {
                    object: Box::new(object),
                    method: method.clone(),
                    args,
                    builtin,
                },
                ctx.normalize(&expr.resolved_type),
            )
            .with_span(span)
        }

        ast::ExprKind::New {
            class_name,
            args,
            type_args,
        } => {
            let args = args.iter().map(|a| lower_expr(a, ctx)).collect();
            let type_args = type_args.iter().map(|t| ctx.normalize(t)).collect();
            Expr::new(
                ExprKind::New {
                    class_name: class_name.clone(),
                    args,
                    type_args,
                },
                ctx.normalize(&expr.resolved_type),
            )
            .with_span(span)
        }

        ast::ExprKind::ArrayLiteral(items) => {
            let items = items.iter().map(|i| lower_expr(i, ctx)).collect();
            Expr::new(ExprKind::ArrayLiteral(items), ctx.normalize(&expr.resolved_type)).with_span(span)
        }

        ast::ExprKind::ObjectLiteral(fields) => {
            let fields = fields
                .iter()
                .map(|(name, value)| (name.clone(), lower_expr(value, ctx)))
                .collect();
            Expr::new(ExprKind::ObjectLiteral(fields), ctx.normalize(&expr.resolved_type)).with_span(span)
        }

        ast::ExprKind::Assignment { target, value } => {
            let target = lower_expr(target, ctx);
            let value = lower_expr(value, ctx);
            Expr::new(
                ExprKind::Assignment {
                    target: Box::new(target),
                    value: Box::new(value),
                },
                ctx.normalize(&expr.resolved_type),
            )
            .with_span(span)
        }

        ast::ExprKind::Lambda {
            params,
            body,
            is_async,
        } => lower_lambda(params, body, *is_async, expr.resolved_type.clone(), ctx, lower_stmts).with_span(span),

        ast::ExprKind::TemplateLiteral(parts) => {
            let parts = parts.iter().map(|p| lower_template_part(p, ctx)).collect();
            build_template_literal(parts, span)
        }

        ast::ExprKind::Await(promise) => {
            let promise = lower_expr(promise, ctx);
            lower_await(promise, span)
        }
    }
}

fn lower_template_part(part: &ast::TemplatePart, ctx: &mut LoweringContext) -> TemplatePart {
    match part {
        ast::TemplatePart::Text(s) => TemplatePart::Text(s.clone()),
        ast::TemplatePart::Expr(e) => TemplatePart::Expr(Box::new(lower_expr(e, ctx))),
    }
}

/// `a ?? b` has no direct binary IR node: it evaluates `a` once and falls
/// back to `b` only when `a` is null/undefined, which is the
/// same guarded-evaluation shape as optional chaining.
fn lower_binary(
    op: ast::BinOp,
    left: &ast::Expr,
    right: &ast::Expr,
    expr: &ast::Expr,
    ctx: &mut LoweringContext,
) -> Expr {
    let span = expr.span;
    if op == ast::BinOp::NullishCoalescing {
        let left = lower_expr(left, ctx);
        let right = lower_expr(right, ctx);
        let result_ty = ctx.normalize(&expr.resolved_type);
        let temp = ctx.fresh_temp("nullish");
        let left_ty = left.ty.clone();
        ctx.push_prelude(gsc_ir::Stmt::new(gsc_ir::StmtKind::VariableDeclaration {
            name: temp.clone(),
            ty: left_ty.clone(),
            init: Some(left),
        }));
        let receiver = Expr::identifier(format!("{}${}", temp.name, temp.version), left_ty.clone());
        let is_nullish = Expr::new(
            ExprKind::Binary {
                op: gsc_ir::BinaryOp::StrictEq,
                left: Box::new(receiver.clone()),
                right: Box::new(Expr::literal(gsc_ir::Literal::Null, left_ty)),
            },
            gsc_ir::Type::boolean(),
        );
        return Expr::conditional(is_nullish, right, receiver, result_ty).with_span(span);
    }

    let left_ir = lower_expr(left, ctx);
    let right_ir = lower_expr(right, ctx);
    let ir_op = map_binary_op(op).expect("non-nullish-coalescing operators always map");
    let result_ty = if matches!(
        ir_op,
        gsc_ir::BinaryOp::Add | gsc_ir::BinaryOp::Sub | gsc_ir::BinaryOp::Mul | gsc_ir::BinaryOp::Div | gsc_ir::BinaryOp::Mod
    ) && left_ir.ty != gsc_ir::Type::string()
    {
        promoted_arithmetic_type(ir_op, &left_ir.ty, &right_ir.ty)
    } else {
        ctx.normalize(&expr.resolved_type)
    };
    Expr::binary(ir_op, left_ir, right_ir, result_ty).with_span(span)
}

fn lower_call(callee: &ast::Expr, args: &[ast::Expr], expr: &ast::Expr, ctx: &mut LoweringContext) -> Expr {
    let span = expr.span;
    let builtin = builtin_of_callee(callee);
    let callee_ir = lower_expr(callee, ctx);
    let args = args.iter().map(|a| lower_expr(a, ctx)).collect();
    Expr::new(
        ExprKind::Call {
            callee: Box::new(callee_ir),
            args,
            builtin,
        },
        ctx.normalize(&expr.resolved_type),
    )
    .with_span(span)
}

/// A builtin call's callee is always `namespace.member` - `Member { object:
/// Identifier(ns), .. }` where `ns` names a recognized namespace.
fn builtin_of_callee(callee: &ast::Expr) -> Option<BuiltinNamespace> {
    match &callee.kind {
        ast::ExprKind::Member { object, .. } => builtin_of_object(object),
        _ => None,
    }
}

fn builtin_of_object(object: &ast::Expr) -> Option<BuiltinNamespace> {
    match &object.kind {
        ast::ExprKind::Identifier(name) => recognize_namespace(name),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_common::{MemoryMode, Span};
    use gsc_ir::Type as IrType;
    use gsc_signature::SignatureEngine;

    fn ast_expr(kind: ast::ExprKind, ty: IrType) -> ast::Expr {
        ast::Expr::new(kind, ty, Span::dummy())
    }

    #[test]
    fn math_sqrt_call_is_tagged_as_a_builtin() {
        let engine = SignatureEngine::new();
        let mut ctx = LoweringContext::new(MemoryMode::Gc, &engine);
        let callee = ast_expr(
            ast::ExprKind::Member {
                object: Box::new(ast_expr(ast::ExprKind::Identifier(std::sync::Arc::from("Math")), IrType::void())),
                name: std::sync::Arc::from("sqrt"),
            },
            IrType::function(vec![IrType::number()], IrType::number()),
        );
        let call = ast_expr(
            ast::ExprKind::Call {
                callee: Box::new(callee),
                args: vec![ast_expr(ast::ExprKind::NumberLiteral(4.0), IrType::number())],
            },
            IrType::number(),
        );
        let lowered = lower_expr(&call, &mut ctx);
        match lowered.kind {
            ExprKind::Call { builtin, .. } => assert_eq!(builtin, Some(BuiltinNamespace::Math)),
            _ => panic!("expected a call"),
        }
    }

    #[test]
    fn an_ordinary_function_call_has_no_builtin_tag() {
        let engine = SignatureEngine::new();
        let mut ctx = LoweringContext::new(MemoryMode::Gc, &engine);
        let call = ast_expr(
            ast::ExprKind::Call {
                callee: Box::new(ast_expr(
                    ast::ExprKind::Identifier(std::sync::Arc::from("helper")),
                    IrType::function(vec![], IrType::void()),
                )),
                args: vec![],
            },
            IrType::void(),
        );
        let lowered = lower_expr(&call, &mut ctx);
        match lowered.kind {
            ExprKind::Call { builtin, .. } => assert_eq!(builtin, None),
            _ => panic!("expected a call"),
        }
    }

    #[test]
    fn strict_equality_compiles_straight_through_without_coercion() {
        let engine = SignatureEngine::new();
        let mut ctx = LoweringContext::new(MemoryMode::Gc, &engine);
        let bin = ast_expr(
            ast::ExprKind::Binary {
                op: ast::BinOp::EqEqEq,
                left: Box::new(ast_expr(ast::ExprKind::NumberLiteral(0.0), IrType::number())),
                right: Box::new(ast_expr(ast::ExprKind::NumberLiteral(0.0), IrType::number())),
            },
            IrType::boolean(),
        );
        let lowered = lower_expr(&bin, &mut ctx);
        match lowered.kind {
            ExprKind::Binary { op, .. } => assert_eq!(op, gsc_ir::BinaryOp::StrictEq),
            _ => panic!("expected a binary expression"),
        }
    }
}
