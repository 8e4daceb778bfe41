//! Module-level lowering entry point. Each module lowers
//! independently with its own `LoweringContext` - the only shared state is
//! the signature engine's memoization caches, which are internally
//! synchronized (`dashmap`), so modules may be lowered concurrently
//!.

use crate::context::LoweringContext;
use crate::decl::lower_decl;
use crate::diagnostics::Diagnostic;
use gsc_ast as ast;
use gsc_common::MemoryMode;
use gsc_ir::{ExportRecord, ImportRecord, Module};
use gsc_signature::SignatureEngine;

pub struct LoweredModule {
    pub module: Module,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn lower_module(module: &ast::Module, mode: MemoryMode, signatures: &SignatureEngine) -> LoweredModule {
    let mut ctx = LoweringContext::new(mode, signatures);
    let mut ir_module = Module::new(module.path.clone());

    for import in &module.imports {
        ir_module.imports.push(ImportRecord {
            from: import.from.clone(),
            names: import.names.clone(),
        });
    }
    for export in &module.exports {
        ir_module.exports.push(ExportRecord {
            names: export.names.clone(),
        });
    }
    for decl in &module.declarations {
        ir_module.declarations.push(lower_decl(decl, &mut ctx));
    }

    LoweredModule {
        module: ir_module,
        diagnostics: ctx.diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_ast::{ConstDecl, Decl};
    use gsc_common::{ModulePath, Span};
    use gsc_ir::Type;

    #[test]
    fn an_empty_module_lowers_with_no_diagnostics() {
        let engine = SignatureEngine::new();
        let module = ast::Module {
            path: ModulePath::new("empty.ts"),
            declarations: vec![],
            imports: vec![],
            exports: vec![],
        };
        let lowered = lower_module(&module, MemoryMode::Gc, &engine);
        assert!(lowered.diagnostics.is_empty());
        assert_eq!(lowered.module.declarations.len(), 0);
    }

    #[test]
    fn an_out_of_range_literal_const_reports_one_diagnostic() {
        let engine = SignatureEngine::new();
        let module = ast::Module {
            path: ModulePath::new("m.ts"),
            declarations: vec![Decl::Const(ConstDecl {
                name: std::sync::Arc::from("big"),
                annotation: Some(Type::integer()),
                init: ast::Expr::new(ast::ExprKind::NumberLiteral(1e12), Type::integer(), Span::dummy()),
            })],
            imports: vec![],
            exports: vec![],
        };
        let lowered = lower_module(&module, MemoryMode::Gc, &engine);
        assert_eq!(lowered.diagnostics.len(), 1);
    }
}
