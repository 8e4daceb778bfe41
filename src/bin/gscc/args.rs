//! CLI argument parsing: loads a serialized typed AST (JSON) and writes
//! the emitted files to disk. Only driver-level plumbing lives here:
//! optimization level, target triple, and downstream compiler invocation
//! are out of the core's scope and have no flag here either.

use clap::Parser;
use gsc_common::MemoryMode;
use gsc_core::OutputLayout;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gscc", about = "GoodScript-to-C++ source compiler")]
pub struct Args {
    /// Directory of typed-AST module files (one JSON-serialized
    /// `gsc_ast::Module` per surface file, named `<module-stem>.json`).
    pub input_dir: PathBuf,

    /// Directory the generated `.hpp`/`.cpp` (or merged `.cpp`) files are
    /// written to.
    #[arg(short, long, default_value = "out")]
    pub output: PathBuf,

    /// Which memory-management backend to target.
    #[arg(long, value_enum, default_value = "gc")]
    pub mode: MemoryModeArg,

    /// Emit a single merged `.cpp` per module instead of a `.hpp`/`.cpp`
    /// pair.
    #[arg(long)]
    pub merged: bool,

    /// Sort modules lexically by path before generating, for
    /// byte-identical output across runs regardless of discovery order.
    #[arg(long)]
    pub deterministic: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum MemoryModeArg {
    Gc,
    Ownership,
}

impl From<MemoryModeArg> for MemoryMode {
    fn from(value: MemoryModeArg) -> Self {
        match value {
            MemoryModeArg::Gc => MemoryMode::Gc,
            MemoryModeArg::Ownership => MemoryMode::Ownership,
        }
    }
}

impl Args {
    pub fn layout(&self) -> OutputLayout {
        if self.merged {
            OutputLayout::Merged
        } else {
            OutputLayout::HeaderSourcePair
        }
    }
}
