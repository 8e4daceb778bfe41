//! Top-level declaration lowering: functions, classes,
//! interfaces, type aliases, and module-level constants.

use crate::classes::lower_class;
use crate::context::LoweringContext;
use crate::expr::lower_expr;
use crate::function::lower_function;
use gsc_ast as ast;
use gsc_ir::{
    ConstantDeclaration, Declaration, InterfaceDeclaration, InterfaceMethod, InterfaceProperty,
    TypeAliasDeclaration,
};

pub fn lower_decl(decl: &ast::Decl, ctx: &mut LoweringContext) -> Declaration {
    match decl {
        ast::Decl::Function(f) => Declaration::Function(lower_function(f, ctx)),
        ast::Decl::Class(c) => Declaration::Class(lower_class(c, ctx)),
        ast::Decl::Interface(i) => Declaration::Interface(lower_interface(i, ctx)),
        ast::Decl::TypeAlias(t) => Declaration::TypeAlias(TypeAliasDeclaration {
            name: t.name.clone(),
            aliased: ctx.normalize(&t.aliased),
        }),
        ast::Decl::Const(c) => {
            ctx.enter_function();
            let init = lower_expr(&c.init, ctx);
            let ty = match &c.annotation {
                Some(a) => ctx.normalize(a),
                None => init.ty.clone(),
            };
            Declaration::Constant(ConstantDeclaration {
                name: c.name.clone(),
                ty,
                init,
            })
        }
    }
}

fn lower_interface(decl: &ast::InterfaceDecl, ctx: &mut LoweringContext) -> InterfaceDeclaration {
    InterfaceDeclaration {
        name: decl.name.clone(),
        properties: decl
            .properties
            .iter()
            .map(|p| InterfaceProperty {
                name: p.name.clone(),
                ty: ctx.normalize(&p.annotation),
                readonly: p.readonly,
            })
            .collect(),
        methods: decl
            .methods
            .iter()
            .map(|m| InterfaceMethod {
                name: m.name.clone(),
                params: m
                    .params
                    .iter()
                    .map(|p| gsc_ir::Param {
                        name: p.name.clone(),
                        ty: ctx.normalize(&p.annotation),
                    })
                    .collect(),
                return_type: ctx.normalize(&m.return_annotation),
            })
            .collect(),
    }
}
