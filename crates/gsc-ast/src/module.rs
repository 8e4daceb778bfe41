//! `Module`/`Program` - the typed surface AST's top-level containers
//!, addressed by path exactly like the IR's own
//! `Program` so lowering is a one-module-at-a-time walk.

use crate::decl::Decl;
use gsc_common::ModulePath;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub from: ModulePath,
    pub names: Vec<Arc<str>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Export {
    pub names: Vec<Arc<str>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub path: ModulePath,
    pub declarations: Vec<Decl>,
    pub imports: Vec<Import>,
    pub exports: Vec<Export>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub modules: Vec<Module>,
}
