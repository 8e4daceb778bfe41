//! `async`/`await` lowering. The function body is
//! preserved exactly as written; only `await e` needs a rule: it lowers to
//! an IR `Await` node typed with the promise's payload, unwrapping one
//! `Promise<_>` layer. The declared return type stays `Promise<T>` - the
//! coroutine rewrite (`co_return`/`co_await`) is entirely the generator's
//! concern, not lowering's.

use gsc_common::Span;
use gsc_ir::{Expr, Type};

/// Lower `await promise`. `promise` is already-lowered; its type must be
/// `Promise<T>` for some payload `T` per the upstream checker's contract.
/// If it is not (a malformed input the checker should have rejected),
/// lowering degrades gracefully by treating the promise's own type as the
/// payload rather than panicking - an internal-bug safety net, not a user
/// diagnostic (tier 1 only covers checker-shaped mistakes, not
/// violations of the checker's own output contract).
pub fn lower_await(promise: Expr, span: Span) -> Expr {
    let payload = match &promise.ty {
        Type::Promise(inner) => (**inner).clone(),
        other => other.clone(),
    };
    Expr::await_expr(promise, payload).with_span(span)
}
