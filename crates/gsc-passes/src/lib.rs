//! Whole-program IR passes that run after lowering: nested
//! function hoisting and union/nullable normalization.

pub mod free_vars;
pub mod hoist;
pub mod normalize;

pub use free_vars::free_variables;
pub use hoist::hoist_module;
pub use normalize::{normalize_module, normalize_type};
