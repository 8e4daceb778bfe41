//! Statement lowering dispatcher. Splices in any prelude
//! statements an expression synthesized (optional chaining, `??`) directly
//! before the statement that uses them, so each lowered statement is
//! self-contained.

use crate::context::LoweringContext;
use crate::expr::lower_expr;
use crate::try_catch::lower_try_catch_finally;
use gsc_ast as ast;
use gsc_ir::{Stmt, StmtKind};

pub fn lower_stmts(stmts: &[ast::Stmt], ctx: &mut LoweringContext) -> Vec<Stmt> {
    let mut out = Vec::with_capacity(stmts.len());
    for stmt in stmts {
        lower_stmt_into(stmt, ctx, &mut out);
    }
    out
}

fn lower_stmt_into(stmt: &ast::Stmt, ctx: &mut LoweringContext, out: &mut Vec<Stmt>) {
    let kind = lower_stmt_kind(stmt, ctx);
    out.extend(ctx.take_prelude());
    out.push(Stmt::new(kind).with_span(stmt.span));
}

fn lower_stmt_kind(stmt: &ast::Stmt, ctx: &mut LoweringContext) -> StmtKind {
    match &stmt.kind {
        ast::StmtKind::VariableDeclaration {
            name,
            annotation,
            init,
        } => {
            let init = init.as_ref().map(|e| lower_expr(e, ctx));
            let ty = match (annotation, &init) {
                (Some(a), _) => ctx.normalize(a),
                (None, Some(e)) => e.ty.clone(),
                (None, None) => gsc_ir::Type::void(),
            };
            let versioned = ctx.builder.fresh_version(name.clone());
            StmtKind::VariableDeclaration {
                name: versioned,
                ty,
                init,
            }
        }
        ast::StmtKind::ExpressionStatement(e) => StmtKind::ExpressionStatement(lower_expr(e, ctx)),
        ast::StmtKind::Return(e) => StmtKind::Return(e.as_ref().map(|e| lower_expr(e, ctx))),
        ast::StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond = lower_expr(cond, ctx);
            let then_branch = lower_stmts(then_branch, ctx);
            let else_branch = else_branch.as_ref().map(|b| lower_stmts(b, ctx));
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            }
        }
        ast::StmtKind::While { cond, body } => {
            let cond = lower_expr(cond, ctx);
            let body = lower_stmts(body, ctx);
            StmtKind::While { cond, body }
        }
        ast::StmtKind::For {
            init,
            cond,
            incr,
            body,
        } => {
            let init = init.as_ref().map(|i| Box::new(lower_stmt(i, ctx)));
            let cond = cond.as_ref().map(|c| lower_expr(c, ctx));
            let incr = incr.as_ref().map(|i| lower_expr(i, ctx));
            let body = lower_stmts(body, ctx);
            StmtKind::For {
                init,
                cond,
                incr,
                body,
            }
        }
        ast::StmtKind::ForOf {
            name,
            iterable,
            body,
        } => {
            let iterable = lower_expr(iterable, ctx);
            let versioned = ctx.builder.fresh_version(name.clone());
            let body = lower_stmts(body, ctx);
            StmtKind::ForOf {
                name: versioned,
                iterable,
                body,
            }
        }
        ast::StmtKind::Block(body) => StmtKind::Block(lower_stmts(body, ctx)),
        ast::StmtKind::Throw(e) => StmtKind::Throw(lower_expr(e, ctx)),
        ast::StmtKind::TryCatchFinally {
            try_block,
            catch,
            finally_block,
        } => lower_try_catch_finally(
            try_block,
            catch.as_ref(),
            finally_block.as_deref(),
            ctx,
            lower_stmts,
        ),
        ast::StmtKind::Break => StmtKind::Break,
        ast::StmtKind::Continue => StmtKind::Continue,
    }
}

/// Lower a single statement without splicing prelude into a sibling list -
/// used for `for`-loop init clauses, which own exactly one statement slot.
fn lower_stmt(stmt: &ast::Stmt, ctx: &mut LoweringContext) -> Stmt {
    let kind = lower_stmt_kind(stmt, ctx);
    // A `for` init clause's own prelude (e.g. `for (let i = a?.b; ...)`) has
    // nowhere else to go; fold it into a block so the temporary still
    // precedes the declaration it guards. In practice `for`-init is almost
    // always a plain declaration with no optional chaining, so this is rare.
    let prelude = ctx.take_prelude();
    if prelude.is_empty() {
        Stmt::new(kind).with_span(stmt.span)
    } else {
        let mut block = prelude;
        block.push(Stmt::new(kind).with_span(stmt.span));
        Stmt::new(StmtKind::Block(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_common::{MemoryMode, Span};
    use gsc_ir::Type;
    use gsc_signature::SignatureEngine;

    #[test]
    fn optional_chaining_prelude_lands_before_its_statement() {
        let engine = SignatureEngine::new();
        let mut ctx = LoweringContext::new(MemoryMode::Gc, &engine);
        let object = ast::Expr::new(
            ast::ExprKind::Identifier(std::sync::Arc::from("obj")),
            Type::nullable(Type::class("Widget", gsc_ir::Ownership::Share)),
            Span::dummy(),
        );
        let member = ast::Expr::new(
            ast::ExprKind::OptionalMember {
                object: Box::new(object),
                name: std::sync::Arc::from("label"),
            },
            Type::nullable(Type::string()),
            Span::dummy(),
        );
        let stmt = ast::Stmt::new(ast::StmtKind::ExpressionStatement(member), Span::dummy());
        let lowered = lower_stmts(std::slice::from_ref(&stmt), &mut ctx);
        assert_eq!(lowered.len(), 2, "the receiver temp precedes the expression statement");
        assert!(matches!(lowered[0].kind, StmtKind::VariableDeclaration { .. }));
        assert!(matches!(lowered[1].kind, StmtKind::ExpressionStatement(_)));
    }

    #[test]
    fn variable_declaration_without_annotation_infers_from_initializer() {
        let engine = SignatureEngine::new();
        let mut ctx = LoweringContext::new(MemoryMode::Gc, &engine);
        let stmt = ast::Stmt::new(
            ast::StmtKind::VariableDeclaration {
                name: std::sync::Arc::from("x"),
                annotation: None,
                init: Some(ast::Expr::new(
                    ast::ExprKind::NumberLiteral(42.0),
                    Type::number(),
                    Span::dummy(),
                )),
            },
            Span::dummy(),
        );
        let lowered = lower_stmts(std::slice::from_ref(&stmt), &mut ctx);
        match &lowered[0].kind {
            StmtKind::VariableDeclaration { ty, .. } => assert_eq!(*ty, Type::number()),
            _ => panic!("expected a variable declaration"),
        }
    }
}
