//! `IrBuilder` - tracks the two counters lowering needs while it walks a
//! single function body: dense basic-block ids and per-name SSA-style
//! variable versions. Both counters reset at function entry;
//! neither is shared across functions.

use crate::stmt::VersionedName;
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockId(pub u32);

#[derive(Debug, Default)]
pub struct IrBuilder {
    next_block_id: u32,
    next_version: FxHashMap<Arc<str>, u32>,
}

impl IrBuilder {
    pub fn new() -> Self {
        IrBuilder::default()
    }

    /// Reset both counters; call once per function lowered.
    pub fn enter_function(&mut self) {
        self.next_block_id = 0;
        self.next_version.clear();
    }

    /// Allocate the next dense block id for the current function.
    pub fn fresh_block(&mut self) -> BlockId {
        let id = BlockId(self.next_block_id);
        self.next_block_id += 1;
        id
    }

    /// Allocate the next SSA version for `name` in the current function
    /// scope; the first call for a given name returns version 0.
    pub fn fresh_version(&mut self, name: impl Into<Arc<str>>) -> VersionedName {
        let name = name.into();
        let version = self.next_version.entry(name.clone()).or_insert(0);
        let current = *version;
        *version += 1;
        VersionedName::new(name, current)
    }
}
