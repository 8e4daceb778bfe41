//! `try`/`catch`/`finally` and `throw` lowering. Structural
//! one-to-one mapping; the only nontrivial piece is giving the catch
//! binding (if any) a fresh SSA version, consistent with every other local
//! declaration.

use crate::context::LoweringContext;
use gsc_ast as ast;
use gsc_ir::{CatchClause, Stmt, StmtKind};

pub fn lower_try_catch_finally<F>(
    try_block: &[ast::Stmt],
    catch: Option<&ast::CatchClause>,
    finally_block: Option<&[ast::Stmt]>,
    ctx: &mut LoweringContext,
    mut lower_stmts: F,
) -> StmtKind
where
    F: FnMut(&[ast::Stmt], &mut LoweringContext) -> Vec<Stmt>,
{
    let try_block = lower_stmts(try_block, ctx);
    let catch = catch.map(|c| {
        let binding = c.binding.as_ref().map(|name| ctx.builder.fresh_version(name.clone()));
        CatchClause {
            binding,
            body: lower_stmts(&c.body, ctx),
        }
    });
    let finally_block = finally_block.map(|f| lower_stmts(f, ctx));

    StmtKind::TryCatchFinally {
        try_block,
        catch,
        finally_block,
    }
}
