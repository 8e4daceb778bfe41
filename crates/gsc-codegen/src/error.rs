//! Generation failures (tier 3): always a compiler-internal bug,
//! never a user-facing diagnostic - by the time a program reaches codegen,
//! lowering and validation have already rejected anything a user wrote
//! wrong.

use gsc_common::MemoryMode;
use gsc_ir::Type;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generator does not recognize this IR variant: {what}")]
    UnknownIrVariant { what: &'static str },

    #[error("type {ty:?} has no representation under memory mode {mode}")]
    UnrepresentableOwnership { ty: Type, mode: MemoryMode },
}
