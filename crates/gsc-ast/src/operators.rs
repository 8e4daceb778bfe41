//! Surface operator tokens. Kept distinct from `gsc_ir::BinaryOp`/`UnaryOp`
//! (which are the semantic IR tags) because lowering's operator mapping is
//! one-to-one but not identity — e.g. `??` lowers to a guarded conditional,
//! not a binary IR node.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEqEq,
    NotEqEqEq,
    Lt,
    Le,
    Gt,
    Ge,
    AmpAmp,
    PipePipe,
    NullishCoalescing,
    Amp,
    Pipe,
    Caret,
    LtLt,
    GtGt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnOp {
    Minus,
    Bang,
    Tilde,
    TypeOf,
}
