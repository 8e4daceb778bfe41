//! Shared lowering for anything shaped like a function: top-level
//! functions, class methods, and constructors.

use crate::context::LoweringContext;
use crate::stmt::lower_stmts;
use gsc_ast as ast;
use gsc_ir::{FunctionDeclaration, FunctionFlags, Param};

pub fn lower_function(decl: &ast::FunctionDecl, ctx: &mut LoweringContext) -> FunctionDeclaration {
    ctx.enter_function();
    let params: Vec<Param> = decl
        .params
        .iter()
        .map(|p| Param {
            name: p.name.clone(),
            ty: ctx.normalize(&p.annotation),
        })
        .collect();
    let body = lower_stmts(&decl.body, ctx);
    FunctionDeclaration {
        name: decl.name.clone(),
        params,
        return_type: ctx.normalize(&decl.return_annotation),
        body,
        flags: FunctionFlags {
            is_async: decl.flags.is_async,
            is_static: decl.flags.is_static,
            is_generator: decl.flags.is_generator,
        },
    }
}
