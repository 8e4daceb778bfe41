//! Class lowering: fields, methods, and an optional
//! constructor, all binding `this` implicitly the way the surface grammar
//! does - no explicit `this` parameter appears in the IR's `FunctionDeclaration`,
//! matching the generator's plan to emit every method as a real C++ member
//! function ("static methods become free functions; everything
//! else stays a member").

use crate::context::LoweringContext;
use crate::function::lower_function;
use gsc_ast as ast;
use gsc_ir::{ClassDeclaration, ClassField, ClassMethod};

pub fn lower_class(decl: &ast::ClassDecl, ctx: &mut LoweringContext) -> ClassDeclaration {
    let fields = decl
        .fields
        .iter()
        .map(|f| ClassField {
            name: f.name.clone(),
            ty: ctx.normalize(&f.annotation),
            readonly: f.readonly,
            is_static: f.is_static,
            access: f.access,
        })
        .collect();

    let methods = decl
        .methods
        .iter()
        .map(|m| ClassMethod {
            function: lower_function(&m.function, ctx),
            access: m.access,
        })
        .collect();

    let constructor = decl.constructor.as_ref().map(|c| lower_function(c, ctx));

    ClassDeclaration {
        name: decl.name.clone(),
        fields,
        methods,
        constructor,
        base_class: decl.base_class.clone(),
        implements: decl.implements.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_common::MemoryMode;
    use gsc_ir::{Access, Type};
    use gsc_signature::SignatureEngine;
    use std::sync::Arc;

    #[test]
    fn fields_and_methods_lower_with_normalized_types() {
        let engine = SignatureEngine::new();
        let mut ctx = LoweringContext::new(MemoryMode::Gc, &engine);
        let class = ast::ClassDecl {
            name: Arc::from("Point"),
            fields: vec![ast::FieldDecl {
                name: Arc::from("x"),
                annotation: Type::nullable(Type::number()),
                readonly: false,
                is_static: false,
                access: Access::Public,
            }],
            methods: vec![],
            constructor: None,
            base_class: None,
            implements: vec![],
        };
        let lowered = lower_class(&class, &mut ctx);
        assert_eq!(lowered.fields[0].ty, Type::nullable(Type::number()));
    }
}
