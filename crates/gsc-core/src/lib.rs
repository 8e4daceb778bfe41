//! `gsc-core` - the pure `compile(program, mode, options) -> CompileOutput`
//! facade sequencing lowering -> IR passes -> code generation: a thin
//! driver over the per-stage crates, owning no logic of its own.
//!
//! `compile` has no hidden mutable state and no I/O of its own:
//! the only state shared across modules is the signature engine's
//! memoization caches, which are internally synchronized, so modules are
//! lowered and generated concurrently with `rayon`.

pub mod options;

pub use options::{CompileOptions, OutputLayout};

use gsc_ast as ast;
use gsc_common::ModulePath;
use gsc_ir::{validate_program, Program as IrProgram, ValidationError};
use gsc_lowering::{lower_module, Diagnostic};
use gsc_passes::{hoist_module, normalize_module};
use gsc_signature::SignatureEngine;
use indexmap::IndexMap;
use rayon::prelude::*;
use std::path::PathBuf;

/// Tier 2 of the error taxonomy: a validation failure is a
/// compiler-internal bug, never surfaced to the user as a diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("internal compiler error: invalid IR after lowering and passes: {0}")]
    Invalid(#[from] ValidationError),
}

/// One module's lowering diagnostics, tagged with the module that produced
/// them - other modules proceed independently.
#[derive(Debug, Clone)]
pub struct ModuleDiagnostics {
    pub module: ModulePath,
    pub diagnostics: Vec<Diagnostic>,
}

/// `compile`'s result: the ordered output file map plus every lowering
/// diagnostic collected, grouped by the module that produced it. A module
/// with any diagnostic contributes no entries to `files`.
pub struct CompileOutput {
    pub files: IndexMap<PathBuf, String>,
    pub diagnostics: Vec<ModuleDiagnostics>,
}

impl CompileOutput {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.iter().all(|d| d.diagnostics.is_empty())
    }
}

struct LoweredOk {
    module: gsc_ir::Module,
}

pub fn compile(program: &ast::Program, options: &CompileOptions) -> Result<CompileOutput, CoreError> {
    let signatures = SignatureEngine::new();
    let mode = options.mode;

    let mut lowered: Vec<(ModulePath, Result<LoweredOk, Vec<Diagnostic>>)> = program
        .modules
        .par_iter()
        .map(|module| {
            let result = lower_module(module, mode, &signatures);
            let path = module.path.clone();
            if result.diagnostics.is_empty() {
                let mut ir_module = result.module;
                hoist_module(&mut ir_module);
                normalize_module(&mut ir_module, mode, &signatures);
                (path, Ok(LoweredOk { module: ir_module }))
            } else {
                (path, Err(result.diagnostics))
            }
        })
        .collect();

    // `par_iter()...collect()` preserves `program.modules`' own order, which
    // is only as deterministic as whatever discovered it (see `load_program`
    // in the CLI driver); sort by path here so `deterministic_module_order`
    // actually produces byte-identical output across runs, not just a
    // plumbed-through flag.
    if options.deterministic_module_order {
        lowered.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    let mut diagnostics = Vec::with_capacity(lowered.len());
    let mut ir_program = IrProgram::new();
    for (path, result) in lowered {
        match result {
            Ok(ok) => {
                diagnostics.push(ModuleDiagnostics {
                    module: path,
                    diagnostics: Vec::new(),
                });
                ir_program.insert(ok.module);
            }
            Err(ds) => diagnostics.push(ModuleDiagnostics { module: path, diagnostics: ds }),
        }
    }

    validate_program(&ir_program)?;

    let generated = gsc_codegen::generate_program(&ir_program, mode);
    let files = lay_out_files(generated, options);

    Ok(CompileOutput { files, diagnostics })
}

/// Apply `output_dir` and, under [`OutputLayout::Merged`], concatenate each
/// module's header and source into a single `.cpp` translation unit.
fn lay_out_files(generated: IndexMap<PathBuf, String>, options: &CompileOptions) -> IndexMap<PathBuf, String> {
    match options.layout {
        OutputLayout::HeaderSourcePair => generated
            .into_iter()
            .map(|(path, text)| (options.output_dir.join(path), text))
            .collect(),
        OutputLayout::Merged => {
            let mut merged: IndexMap<PathBuf, String> = IndexMap::new();
            for (path, text) in generated {
                let is_header = path.extension().is_some_and(|e| e == "hpp");
                let stem = path.with_extension("cpp");
                let out_path = options.output_dir.join(&stem);
                let entry = merged.entry(out_path).or_default();
                if is_header {
                    entry.insert_str(0, &text);
                } else {
                    entry.push_str(&text);
                }
            }
            merged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_common::MemoryMode;

    #[test]
    fn compiling_an_empty_program_yields_no_files_and_no_diagnostics() {
        let program = ast::Program::default();
        let options = CompileOptions::new(MemoryMode::Gc, "out");
        let output = compile(&program, &options).unwrap();
        assert!(output.files.is_empty());
        assert!(output.is_clean());
    }

    #[test]
    fn a_module_with_a_lowering_diagnostic_contributes_no_output_files() {
        use gsc_ast::{ConstDecl, Decl};
        use gsc_common::Span;
        use gsc_ir::Type;

        let module = ast::Module {
            path: ModulePath::new("bad.ts"),
            declarations: vec![Decl::Const(ConstDecl {
                name: std::sync::Arc::from("big"),
                annotation: Some(Type::integer()),
                init: ast::Expr::new(ast::ExprKind::NumberLiteral(1e12), Type::integer(), Span::dummy()),
            })],
            imports: vec![],
            exports: vec![],
        };
        let program = ast::Program { modules: vec![module] };
        let options = CompileOptions::new(MemoryMode::Gc, "out");
        let output = compile(&program, &options).unwrap();
        assert!(!output.is_clean());
        assert!(output.files.is_empty());
    }

    #[test]
    fn merged_layout_concatenates_header_before_source() {
        use gsc_ast::{Decl, FunctionDecl};
        use gsc_ir::{FunctionFlags, Type};

        let module = ast::Module {
            path: ModulePath::new("a.ts"),
            declarations: vec![Decl::Function(FunctionDecl {
                name: std::sync::Arc::from("f"),
                params: vec![],
                return_annotation: Type::void(),
                body: vec![],
                flags: FunctionFlags::default(),
            })],
            imports: vec![],
            exports: vec![],
        };
        let program = ast::Program { modules: vec![module] };
        let options = CompileOptions::new(MemoryMode::Gc, "out").with_layout(OutputLayout::Merged);
        let output = compile(&program, &options).unwrap();
        let merged = output.files.get(&PathBuf::from("out/a.cpp")).unwrap();
        assert!(merged.find("#pragma once").unwrap() < merged.find("void f()").unwrap());
    }

    fn single_function_module(path: &str, fn_name: &str) -> ast::Module {
        use gsc_ast::{Decl, FunctionDecl};
        use gsc_ir::{FunctionFlags, Type};

        ast::Module {
            path: ModulePath::new(path),
            declarations: vec![Decl::Function(FunctionDecl {
                name: std::sync::Arc::from(fn_name),
                params: vec![],
                return_annotation: Type::void(),
                body: vec![],
                flags: FunctionFlags::default(),
            })],
            imports: vec![],
            exports: vec![],
        }
    }

    #[test]
    fn deterministic_module_order_sorts_output_files_by_path() {
        let program = ast::Program {
            modules: vec![
                single_function_module("z.ts", "zFn"),
                single_function_module("a.ts", "aFn"),
            ],
        };
        let options = CompileOptions::new(MemoryMode::Gc, "out").with_deterministic_module_order(true);
        let output = compile(&program, &options).unwrap();
        let keys: Vec<&PathBuf> = output.files.keys().collect();
        assert_eq!(
            keys,
            vec![
                &PathBuf::from("out/a.hpp"),
                &PathBuf::from("out/a.cpp"),
                &PathBuf::from("out/z.hpp"),
                &PathBuf::from("out/z.cpp"),
            ]
        );
    }

    #[test]
    fn without_the_flag_output_order_follows_program_module_order() {
        let program = ast::Program {
            modules: vec![
                single_function_module("z.ts", "zFn"),
                single_function_module("a.ts", "aFn"),
            ],
        };
        let options = CompileOptions::new(MemoryMode::Gc, "out");
        let output = compile(&program, &options).unwrap();
        let keys: Vec<&PathBuf> = output.files.keys().collect();
        assert_eq!(
            keys,
            vec![
                &PathBuf::from("out/z.hpp"),
                &PathBuf::from("out/z.cpp"),
                &PathBuf::from("out/a.hpp"),
                &PathBuf::from("out/a.cpp"),
            ]
        );
    }
}
