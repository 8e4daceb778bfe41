//! Statement emission. `emit_block` is the shared entry point
//! used by function bodies, lambda bodies, and every nested block (`if`/
//! `while`/`for`/`try` arms); `async_emit` wraps it for coroutine bodies.

use crate::context::EmitCtx;
use crate::expr::emit_expr;
use crate::keywords::escape_cpp_keyword;
use crate::type_emit::emit_type;
use crate::writer::Writer;
use gsc_ir::{PrimitiveTag, Stmt, StmtKind, Type, VersionedName};

/// An SSA-versioned name renders as `name` when it's the only version seen
/// so far, otherwise `name_N` - the IR's monotonic per-name version counter
/// maps directly onto a mangled C++ local.
fn emit_versioned_name(name: &VersionedName) -> String {
    if name.version == 0 {
        escape_cpp_keyword(&name.name)
    } else {
        format!("{}_{}", escape_cpp_keyword(&name.name), name.version)
    }
}

pub fn emit_block(stmts: &[Stmt], ctx: &EmitCtx, w: &mut Writer) {
    for stmt in stmts {
        emit_stmt(stmt, ctx, w);
    }
}

/// `for … of` over a `string` iterates by Unicode scalar value, not byte
///; every other iterable goes through the runtime's ordinary
/// range adaptor.
fn for_of_range_expr(iterable_ty: &Type, iterable: &str) -> String {
    if matches!(iterable_ty, Type::Primitive(PrimitiveTag::String)) {
        format!("gs::String::code_points({iterable})")
    } else {
        iterable.to_string()
    }
}

pub fn emit_stmt(stmt: &Stmt, ctx: &EmitCtx, w: &mut Writer) {
    match &stmt.kind {
        StmtKind::VariableDeclaration { name, ty, init } => {
            let ty_text = emit_type(ty, ctx.backend);
            let name_text = emit_versioned_name(name);
            match init {
                Some(e) => w.line(format!("{ty_text} {name_text} = {};", emit_expr(e, ctx))),
                None => w.line(format!("{ty_text} {name_text};")),
            }
        }
        StmtKind::ExpressionStatement(e) => w.line(format!("{};", emit_expr(e, ctx))),
        StmtKind::Return(value) => emit_return(value.as_ref(), ctx, w),
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            w.line(format!("if ({}) {{", emit_expr(cond, ctx)));
            w.indent();
            emit_block(then_branch, ctx, w);
            w.dedent();
            match else_branch {
                Some(else_body) => {
                    w.line("} else {");
                    w.indent();
                    emit_block(else_body, ctx, w);
                    w.dedent();
                    w.line("}");
                }
                None => w.line("}"),
            }
        }
        StmtKind::While { cond, body } => {
            w.line(format!("while ({}) {{", emit_expr(cond, ctx)));
            w.indent();
            emit_block(body, ctx, w);
            w.dedent();
            w.line("}");
        }
        StmtKind::For {
            init,
            cond,
            incr,
            body,
        } => {
            let init_text = init
                .as_ref()
                .map(|s| emit_for_clause(s, ctx))
                .unwrap_or_default();
            let cond_text = cond.as_ref().map(|c| emit_expr(c, ctx)).unwrap_or_default();
            let incr_text = incr.as_ref().map(|i| emit_expr(i, ctx)).unwrap_or_default();
            w.line(format!("for ({init_text}; {cond_text}; {incr_text}) {{"));
            w.indent();
            emit_block(body, ctx, w);
            w.dedent();
            w.line("}");
        }
        StmtKind::ForOf {
            name,
            iterable,
            body,
        } => {
            let iterable_text = emit_expr(iterable, ctx);
            let range = for_of_range_expr(&iterable.ty, &iterable_text);
            w.line(format!("for (auto&& {} : {range}) {{", emit_versioned_name(name)));
            w.indent();
            emit_block(body, ctx, w);
            w.dedent();
            w.line("}");
        }
        StmtKind::Block(body) => {
            w.line("{");
            w.indent();
            emit_block(body, ctx, w);
            w.dedent();
            w.line("}");
        }
        StmtKind::Throw(e) => w.line(format!("throw {};", emit_expr(e, ctx))),
        StmtKind::TryCatchFinally {
            try_block,
            catch,
            finally_block,
        } => emit_try(try_block, catch.as_ref(), finally_block.as_deref(), ctx, w),
        StmtKind::Break => w.line("break;"),
        StmtKind::Continue => w.line("continue;"),
    }
}

/// The first clause of a C++ `for (init; cond; incr)` renders a bare
/// variable declaration without its own trailing statement semicolon,
/// since the enclosing `for (...)` supplies the separators.
fn emit_for_clause(stmt: &Stmt, ctx: &EmitCtx) -> String {
    match &stmt.kind {
        StmtKind::VariableDeclaration { name, ty, init } => {
            let ty_text = emit_type(ty, ctx.backend);
            let name_text = emit_versioned_name(name);
            match init {
                Some(e) => format!("{ty_text} {name_text} = {}", emit_expr(e, ctx)),
                None => format!("{ty_text} {name_text}"),
            }
        }
        StmtKind::ExpressionStatement(e) => emit_expr(e, ctx),
        other => unreachable!("for-init clause cannot be {other:?}"),
    }
}

/// `return`/implicit-return inside an async function become `co_return`
/// (rule 2).
fn emit_return(value: Option<&gsc_ir::Expr>, ctx: &EmitCtx, w: &mut Writer) {
    let keyword = if ctx.in_async { "co_return" } else { "return" };
    match value {
        Some(e) => w.line(format!("{keyword} {};", emit_expr(e, ctx))),
        None => w.line(format!("{keyword};")),
    }
}

/// `try/catch` binds the caught value by reference to `gs::Error`; an
/// exception from an awaited task re-throws at the `co_await` site
/// automatically under normal C++ coroutine semantics, so no special
/// handling is needed here beyond emitting the ordinary `catch` clause.
///
/// Without a `finally`, this is a plain `try`/`catch`. With one, the inner
/// `try`/`catch` (or, with no `catch` clause, the bare `try_block`) is
/// wrapped in an outer `try { ...; <finally> } catch (...) { <finally>;
/// throw; }` so the `finally` block runs exactly once on both the
/// fallthrough path and every path an exception escapes by - including one
/// thrown from inside the `catch` body itself.
fn emit_try(
    try_block: &[Stmt],
    catch: Option<&gsc_ir::CatchClause>,
    finally_block: Option<&[Stmt]>,
    ctx: &EmitCtx,
    w: &mut Writer,
) {
    let Some(finally) = finally_block else {
        emit_try_catch(try_block, catch, ctx, w);
        return;
    };

    w.line("try {");
    w.indent();
    match catch {
        Some(_) => emit_try_catch(try_block, catch, ctx, w),
        None => emit_block(try_block, ctx, w),
    }
    emit_block(finally, ctx, w);
    w.dedent();
    w.line("} catch (...) {");
    w.indent();
    emit_block(finally, ctx, w);
    w.line("throw;");
    w.dedent();
    w.line("}");
}

fn emit_try_catch(try_block: &[Stmt], catch: Option<&gsc_ir::CatchClause>, ctx: &EmitCtx, w: &mut Writer) {
    w.line("try {");
    w.indent();
    emit_block(try_block, ctx, w);
    w.dedent();
    match catch {
        Some(clause) => {
            let binding = clause
                .binding
                .as_ref()
                .map(|n| format!("gs::Error& {}", emit_versioned_name(n)))
                .unwrap_or_else(|| "gs::Error&".to_string());
            w.line(format!("}} catch ({binding}) {{"));
            w.indent();
            emit_block(&clause.body, ctx, w);
            w.dedent();
            w.line("}");
        }
        None => w.line("}"),
    }
}
