//! `ModulePath` - the key both the input `Program` and the generator's
//! output map are addressed by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A module's source path, e.g. `src/geometry/point.ts`. Stable, hashable,
/// orderable (so output maps can be iterated deterministically).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModulePath(String);

impl ModulePath {
    pub fn new(path: impl Into<String>) -> Self {
        ModulePath(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the surface extension with `.hpp`, for header output.
    pub fn with_header_extension(&self) -> PathBuf {
        self.with_extension("hpp")
    }

    /// Replace the surface extension with `.cpp`, for source output.
    pub fn with_source_extension(&self) -> PathBuf {
        self.with_extension("cpp")
    }

    fn with_extension(&self, ext: &str) -> PathBuf {
        Path::new(&self.0).with_extension(ext)
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModulePath {
    fn from(s: &str) -> Self {
        ModulePath::new(s)
    }
}

impl From<String> for ModulePath {
    fn from(s: String) -> Self {
        ModulePath::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_is_shared_between_header_and_source() {
        let p = ModulePath::new("src/geometry/point.ts");
        assert_eq!(p.with_header_extension(), Path::new("src/geometry/point.hpp"));
        assert_eq!(p.with_source_extension(), Path::new("src/geometry/point.cpp"));
    }

    #[test]
    fn orders_lexically_for_deterministic_output() {
        let mut paths = vec![ModulePath::new("b.ts"), ModulePath::new("a.ts")];
        paths.sort();
        assert_eq!(paths, vec![ModulePath::new("a.ts"), ModulePath::new("b.ts")]);
    }
}
