//! Two-mode C++ code generator: consumes a fully-normalized
//! IR program and a memory mode and returns an ordered `path -> text`
//! mapping, one `.hpp`/`.cpp` pair per input module. The IR does not change
//! between modes - only which idiom each construct selects (`mode.rs`).

pub mod async_emit;
pub mod builtins;
pub mod class_emit;
pub mod context;
pub mod error;
pub mod expr;
pub mod header_source;
pub mod keywords;
pub mod mode;
pub mod stmt;
pub mod type_emit;
pub mod writer;

pub use error::GenerationError;
pub use header_source::{generate_module, ModuleOutput};
pub use mode::{backend_for, GcBackend, MemoryModeBackend, OwnershipBackend};

use gsc_common::{MemoryMode, ModulePath};
use gsc_ir::Program;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Generate every module in `program` under `mode`, returning an ordered
/// map from output path to source text (`.hpp` and `.cpp` per module,
/// "External Interfaces").
pub fn generate_program(program: &Program, mode: MemoryMode) -> IndexMap<PathBuf, String> {
    let backend = backend_for(mode);
    let mut out = IndexMap::new();
    for module in program.modules() {
        let rendered = generate_module(module, program, backend.as_ref());
        out.insert(header_path(&module.path), rendered.header);
        out.insert(source_path(&module.path), rendered.source);
    }
    out
}

fn header_path(path: &ModulePath) -> PathBuf {
    path.with_header_extension()
}

fn source_path(path: &ModulePath) -> PathBuf {
    path.with_source_extension()
}
