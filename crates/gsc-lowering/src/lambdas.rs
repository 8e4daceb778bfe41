//! Lambda/arrow lowering. The upstream checker already resolved
//! the lambda's full function type (params + return), carried on the
//! surface `Expr` that wraps it - lowering's own job is purely structural:
//! lower the body, and compute the free-variable capture set the hoisting
//! pass (`gsc-passes`) and the generator's closure emission both need.

use crate::context::LoweringContext;
use gsc_ast as ast;
use gsc_ir::{Expr, ExprKind, Param, Stmt, Type};
use gsc_passes::free_variables;
use rustc_hash::FxHashSet;
use std::sync::Arc;

pub fn lower_lambda<F>(
    params: &[ast::Param],
    body: &[ast::Stmt],
    is_async: bool,
    fn_type: Type,
    ctx: &mut LoweringContext,
    mut lower_stmts: F,
) -> Expr
where
    F: FnMut(&[ast::Stmt], &mut LoweringContext) -> Vec<Stmt>,
{
    let ir_params: Vec<Param> = params
        .iter()
        .map(|p| Param {
            name: p.name.clone(),
            ty: ctx.normalize(&p.annotation),
        })
        .collect();

    let bound: FxHashSet<Arc<str>> = ir_params.iter().map(|p| p.name.clone()).collect();
    let ir_body = lower_stmts(body, ctx);
    let mut captures: Vec<Arc<str>> = free_variables(&ir_body, &bound).into_iter().collect();
    captures.sort();

    Expr::new(
        ExprKind::Lambda {
            params: ir_params,
            body: ir_body,
            captures,
            is_async,
        },
        ctx.normalize(&fn_type),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_common::MemoryMode;
    use gsc_ir::{Literal, StmtKind};
    use gsc_signature::SignatureEngine;

    #[test]
    fn a_lambda_referencing_only_its_own_param_has_no_captures() {
        let engine = SignatureEngine::new();
        let mut ctx = LoweringContext::new(MemoryMode::Gc, &engine);
        let params = vec![ast::Param {
            name: Arc::from("n"),
            annotation: Type::integer(),
        }];
        let e = lower_lambda(
            &params,
            &[],
            false,
            Type::function(vec![Type::integer()], Type::integer()),
            &mut ctx,
            |_stmts, _ctx| vec![Stmt::new(StmtKind::Return(Some(Expr::literal(
                Literal::Integer(0),
                Type::integer(),
            ))))],
        );
        match e.kind {
            ExprKind::Lambda { captures, .. } => assert!(captures.is_empty()),
            _ => panic!("expected a lambda"),
        }
    }
}
