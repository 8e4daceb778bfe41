//! The two memory-management backends the code generator targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which runtime idiom the C++ code generator selects for class references,
/// `own`/`share`/`use` ownership tags, and nullable unions. The IR itself
/// does not change between modes; only emission does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryMode {
    /// Tracing garbage collector: every class reference is `gs::gc::Ref<T>`.
    Gc,
    /// Move/share/borrow discipline: stack values, unique/shared/borrow
    /// pointers selected per ownership tag.
    Ownership,
}

impl fmt::Display for MemoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MemoryMode::Gc => "gc",
            MemoryMode::Ownership => "ownership",
        })
    }
}

impl FromStr for MemoryMode {
    type Err = InvalidMemoryMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gc" => Ok(MemoryMode::Gc),
            "ownership" => Ok(MemoryMode::Ownership),
            other => Err(InvalidMemoryMode(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid memory mode `{0}`, expected `gc` or `ownership`")]
pub struct InvalidMemoryMode(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display_and_from_str() {
        for mode in [MemoryMode::Gc, MemoryMode::Ownership] {
            let parsed: MemoryMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("tracing".parse::<MemoryMode>().is_err());
    }
}
