//! Emission context: the active memory-mode backend plus the handful of
//! ambient flags that change how an expression or statement renders
//! without changing the IR itself - keeps traversal state separate from
//! emission logic.

use crate::mode::MemoryModeBackend;

pub struct EmitCtx<'a> {
    pub backend: &'a dyn MemoryModeBackend,
    /// Set while emitting an `async` function's body: `await` renders as
    /// `co_await` and a bare `return;`/`return v;` renders as `co_return`.
    pub in_async: bool,
}

impl<'a> EmitCtx<'a> {
    pub fn new(backend: &'a dyn MemoryModeBackend) -> Self {
        EmitCtx {
            backend,
            in_async: false,
        }
    }

    pub fn in_async(&self) -> Self {
        EmitCtx {
            backend: self.backend,
            in_async: true,
        }
    }
}
