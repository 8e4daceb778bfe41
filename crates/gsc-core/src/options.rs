//! `CompileOptions`: the two knobs the core compile contract requires
//! (memory mode, output directory) plus the ambient knobs a real driver
//! needs - whether a module emits a `.hpp`/`.cpp` pair or a single merged
//! translation unit, and a deterministic module-sort toggle for
//! golden-file testing. CLI-only knobs (optimization level, target
//! triple, downstream compiler invocation) stay out of scope.

use gsc_common::MemoryMode;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputLayout {
    /// One `.hpp` and one `.cpp` per input module (the default).
    HeaderSourcePair,
    /// Header and source concatenated into a single `.cpp` per module,
    /// for small single-translation-unit programs.
    Merged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    pub mode: MemoryMode,
    pub output_dir: PathBuf,
    pub layout: OutputLayout,
    /// Sort modules lexically by path before generating, instead of
    /// preserving `Program` insertion order, so repeated runs against the
    /// same input produce byte-identical output regardless of how the
    /// driver discovered files on disk.
    pub deterministic_module_order: bool,
}

impl CompileOptions {
    pub fn new(mode: MemoryMode, output_dir: impl Into<PathBuf>) -> Self {
        CompileOptions {
            mode,
            output_dir: output_dir.into(),
            layout: OutputLayout::HeaderSourcePair,
            deterministic_module_order: false,
        }
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_deterministic_module_order(mut self, on: bool) -> Self {
        self.deterministic_module_order = on;
        self
    }
}
