//! Common types and utilities shared across the GoodScript compiler crates.
//!
//! This crate provides foundational pieces used by every downstream crate
//! in the pipeline (`gsc-ast`, `gsc-ir`, `gsc-lowering`, `gsc-passes`,
//! `gsc-codegen`, `gsc-core`):
//! - Source spans (`Span`)
//! - The memory-management mode knob (`MemoryMode`)
//! - The module path type shared by input and output maps (`ModulePath`)
//! - A small diagnostic-kind enum shared by lowering and generation errors

pub mod memory_mode;
pub mod module_path;
pub mod span;

pub use memory_mode::MemoryMode;
pub use module_path::ModulePath;
pub use span::Span;
