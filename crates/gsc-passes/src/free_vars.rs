//! Free-variable analysis shared by the hoisting pass: which identifiers a
//! lambda body references that are not one of its own parameters or local
//! declarations.

use gsc_ir::{Expr, ExprKind, Stmt, StmtKind, TemplatePart};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Collect every identifier referenced in `body` that is not bound within
/// it (by a parameter, a `let`/`const`, a catch binding, or a `for`/`for-of`
/// loop variable). `bound` seeds the set of already-bound names, e.g. a
/// lambda's own parameter list and, for a named nested function, its own
/// name (so a recursive call to itself is not reported as a capture).
pub fn free_variables(body: &[Stmt], bound: &FxHashSet<Arc<str>>) -> FxHashSet<Arc<str>> {
    let mut free = FxHashSet::default();
    let mut scope = bound.clone();
    walk_stmts(body, &mut scope, &mut free);
    free
}

fn walk_stmts(stmts: &[Stmt], scope: &mut FxHashSet<Arc<str>>, free: &mut FxHashSet<Arc<str>>) {
    for stmt in stmts {
        walk_stmt(stmt, scope, free);
    }
}

fn walk_stmt(stmt: &Stmt, scope: &mut FxHashSet<Arc<str>>, free: &mut FxHashSet<Arc<str>>) {
    match &stmt.kind {
        StmtKind::VariableDeclaration { name, init, .. } => {
            if let Some(e) = init {
                walk_expr(e, scope, free);
            }
            scope.insert(name.name.clone());
        }
        StmtKind::ExpressionStatement(e) | StmtKind::Throw(e) => walk_expr(e, scope, free),
        StmtKind::Return(e) => {
            if let Some(e) = e {
                walk_expr(e, scope, free);
            }
        }
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            walk_expr(cond, scope, free);
            let mut inner = scope.clone();
            walk_stmts(then_branch, &mut inner, free);
            if let Some(eb) = else_branch {
                let mut inner = scope.clone();
                walk_stmts(eb, &mut inner, free);
            }
        }
        StmtKind::While { cond, body } => {
            walk_expr(cond, scope, free);
            let mut inner = scope.clone();
            walk_stmts(body, &mut inner, free);
        }
        StmtKind::For {
            init,
            cond,
            incr,
            body,
        } => {
            let mut inner = scope.clone();
            if let Some(i) = init {
                walk_stmt(i, &mut inner, free);
            }
            if let Some(c) = cond {
                walk_expr(c, &mut inner, free);
            }
            if let Some(inc) = incr {
                walk_expr(inc, &mut inner, free);
            }
            walk_stmts(body, &mut inner, free);
        }
        StmtKind::ForOf { name, iterable, body } => {
            walk_expr(iterable, scope, free);
            let mut inner = scope.clone();
            inner.insert(name.name.clone());
            walk_stmts(body, &mut inner, free);
        }
        StmtKind::Block(body) => {
            let mut inner = scope.clone();
            walk_stmts(body, &mut inner, free);
        }
        StmtKind::TryCatchFinally {
            try_block,
            catch,
            finally_block,
        } => {
            let mut inner = scope.clone();
            walk_stmts(try_block, &mut inner, free);
            if let Some(c) = catch {
                let mut inner = scope.clone();
                if let Some(binding) = &c.binding {
                    inner.insert(binding.name.clone());
                }
                walk_stmts(&c.body, &mut inner, free);
            }
            if let Some(f) = finally_block {
                let mut inner = scope.clone();
                walk_stmts(f, &mut inner, free);
            }
        }
        StmtKind::Break | StmtKind::Continue => {}
    }
}

fn walk_expr(expr: &Expr, scope: &FxHashSet<Arc<str>>, free: &mut FxHashSet<Arc<str>>) {
    match &expr.kind {
        ExprKind::Literal(_) => {}
        ExprKind::Identifier(name) => {
            if !scope.contains(name) {
                free.insert(name.clone());
            }
        }
        ExprKind::Binary { left, right, .. } => {
            walk_expr(left, scope, free);
            walk_expr(right, scope, free);
        }
        ExprKind::Unary { operand, .. } => walk_expr(operand, scope, free),
        ExprKind::Conditional {
            cond,
            then_branch,
            else_branch,
        } => {
            walk_expr(cond, scope, free);
            walk_expr(then_branch, scope, free);
            walk_expr(else_branch, scope, free);
        }
        ExprKind::Member { object, .. } => walk_expr(object, scope, free),
        ExprKind::Index { object, index } => {
            walk_expr(object, scope, free);
            walk_expr(index, scope, free);
        }
        ExprKind::Call { callee, args, .. } => {
            walk_expr(callee, scope, free);
            for a in args {
                walk_expr(a, scope, free);
            }
        }
        ExprKind::MethodCall { object, args, .. } => {
            walk_expr(object, scope, free);
            for a in args {
                walk_expr(a, scope, free);
            }
        }
        ExprKind::New { args, .. } => {
            for a in args {
                walk_expr(a, scope, free);
            }
        }
        ExprKind::ArrayLiteral(items) => {
            for i in items {
                walk_expr(i, scope, free);
            }
        }
        ExprKind::ObjectLiteral(fields) => {
            for (_, v) in fields {
                walk_expr(v, scope, free);
            }
        }
        ExprKind::Assignment { target, value } => {
            walk_expr(target, scope, free);
            walk_expr(value, scope, free);
        }
        ExprKind::Move(inner) | ExprKind::Borrow(inner) | ExprKind::Await(inner) => {
            walk_expr(inner, scope, free)
        }
        ExprKind::Lambda { params, body, .. } => {
            let mut inner = scope.clone();
            for p in params {
                inner.insert(p.name.clone());
            }
            walk_stmts(body, &mut inner, free);
        }
        ExprKind::TemplateLiteral(parts) => {
            for part in parts {
                if let TemplatePart::Expr(e) = part {
                    walk_expr(e, scope, free);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_ir::{BinaryOp, Literal, Type, VersionedName};

    fn decl_stmt(name: &str, init: Expr) -> Stmt {
        Stmt::new(StmtKind::VariableDeclaration {
            name: VersionedName::new(name, 0),
            ty: init.ty.clone(),
            init: Some(init),
        })
    }

    #[test]
    fn identifier_bound_by_a_param_is_not_free() {
        let body = vec![Stmt::new(StmtKind::Return(Some(Expr::identifier(
            "n",
            Type::integer(),
        ))))];
        let mut bound = FxHashSet::default();
        bound.insert(Arc::from("n"));
        let free = free_variables(&body, &bound);
        assert!(free.is_empty());
    }

    #[test]
    fn identifier_from_the_enclosing_scope_is_free() {
        let body = vec![Stmt::new(StmtKind::Return(Some(Expr::identifier(
            "offset",
            Type::integer(),
        ))))];
        let free = free_variables(&body, &FxHashSet::default());
        assert_eq!(free, FxHashSet::from_iter([Arc::from("offset")]));
    }

    #[test]
    fn a_locally_declared_variable_shadows_and_is_not_free() {
        let body = vec![
            decl_stmt("x", Expr::literal(Literal::Integer(1), Type::integer())),
            Stmt::new(StmtKind::Return(Some(Expr::identifier("x", Type::integer())))),
        ];
        let free = free_variables(&body, &FxHashSet::default());
        assert!(free.is_empty());
    }

    #[test]
    fn recursive_self_reference_is_excluded_when_seeded_as_bound() {
        let body = vec![Stmt::new(StmtKind::Return(Some(Expr::binary(
            BinaryOp::Add,
            Expr::identifier("n", Type::integer()),
            Expr::identifier("fib", Type::function(vec![Type::integer()], Type::integer())),
            Type::integer(),
        ))))];
        let mut bound = FxHashSet::default();
        bound.insert(Arc::from("n"));
        bound.insert(Arc::from("fib"));
        let free = free_variables(&body, &bound);
        assert!(free.is_empty());
    }
}
