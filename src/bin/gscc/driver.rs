//! The compilation driver: discovers typed-AST module files, deserializes
//! them, calls `gsc_core::compile`, and writes the result to disk
//! ("the on-disk/wire encoding... is JSON via `serde`, one
//! file per module").

use crate::args::Args;
use anyhow::{Context, Result};
use colored::Colorize;
use gsc_ast::Program;
use gsc_core::CompileOptions;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Read every `*.json` file under `input_dir` as a serialized
/// `gsc_ast::Module` and assemble them into a `Program`. Discovery order is
/// whatever `WalkDir` yields; `CompileOptions::deterministic_module_order`
/// is what actually pins output order, not this step.
#[tracing::instrument(skip_all, fields(input_dir = %input_dir.display()))]
fn load_program(input_dir: &Path) -> Result<Program> {
    let mut modules = Vec::new();
    for entry in WalkDir::new(input_dir).into_iter().filter_map(|e| e.ok()) {
        if entry.path().extension().is_some_and(|ext| ext == "json") {
            let text = fs::read_to_string(entry.path())
                .with_context(|| format!("reading {}", entry.path().display()))?;
            let module: gsc_ast::Module = serde_json::from_str(&text)
                .with_context(|| format!("parsing typed AST module {}", entry.path().display()))?;
            tracing::debug!(module = %module.path, "loaded module");
            modules.push(module);
        }
    }
    Ok(Program { modules })
}

pub fn run(args: &Args) -> Result<bool> {
    let program = load_program(&args.input_dir)?;
    let options = CompileOptions::new(args.mode.into(), args.output.clone())
        .with_layout(args.layout())
        .with_deterministic_module_order(args.deterministic);

    let output = {
        let _span = tracing::info_span!("compile", modules = program.modules.len()).entered();
        gsc_core::compile(&program, &options).context("internal compiler error")?
    };

    for file in output.files.keys() {
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    for (path, text) in &output.files {
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    }

    let mut had_diagnostics = false;
    for module_diagnostics in &output.diagnostics {
        for diagnostic in &module_diagnostics.diagnostics {
            had_diagnostics = true;
            eprintln!(
                "{} {}: {}",
                "error".red().bold(),
                module_diagnostics.module,
                diagnostic.message
            );
        }
    }

    if !had_diagnostics {
        println!("{} wrote {} file(s) to {}", "ok".green().bold(), output.files.len(), args.output.display());
    }

    Ok(!had_diagnostics)
}
