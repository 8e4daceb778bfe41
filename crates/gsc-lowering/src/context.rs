//! `LoweringContext` - the state threaded through a single module's lowering
//! walk: memory mode, the diagnostics vector, the `IrBuilder` counters, and
//! a handle to the signature engine for type normalization (//! ).

use crate::diagnostics::Diagnostic;
use gsc_common::MemoryMode;
use gsc_ir::{IrBuilder, Stmt, VersionedName};
use gsc_signature::SignatureEngine;

pub struct LoweringContext<'a> {
    pub mode: MemoryMode,
    pub builder: IrBuilder,
    pub diagnostics: Vec<Diagnostic>,
    pub signatures: &'a SignatureEngine,
    /// Statements synthesized by an expression lowering (currently, only
    /// optional-chaining temporaries) that must be spliced in immediately
    /// before the statement the expression belongs to, so the receiver is
    /// evaluated exactly once ("Optional chaining").
    prelude: Vec<Stmt>,
}

impl<'a> LoweringContext<'a> {
    pub fn new(mode: MemoryMode, signatures: &'a SignatureEngine) -> Self {
        LoweringContext {
            mode,
            builder: IrBuilder::new(),
            diagnostics: Vec::new(),
            signatures,
            prelude: Vec::new(),
        }
    }

    pub fn enter_function(&mut self) {
        self.builder.enter_function();
    }

    pub fn push_prelude(&mut self, stmt: Stmt) {
        self.prelude.push(stmt);
    }

    /// Take and clear any prelude statements synthesized while lowering the
    /// expression(s) belonging to the current surface statement.
    pub fn take_prelude(&mut self) -> Vec<Stmt> {
        std::mem::take(&mut self.prelude)
    }

    pub fn fresh_temp(&mut self, hint: &str) -> VersionedName {
        self.builder.fresh_version(format!("$tmp_{hint}"))
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn normalize(&self, ty: &gsc_ir::Type) -> gsc_ir::Type {
        gsc_passes::normalize_type(ty, self.mode, self.signatures)
    }
}
