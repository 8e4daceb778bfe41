//! Literal lowering: `const x = 42;` lowers to a
//! `number`-typed constant; `const y: integer = 42;` narrows to `integer`,
//! validated against the declared type's representable range.

use crate::context::LoweringContext;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use gsc_common::Span;
use gsc_ir::{Expr, Literal, PrimitiveTag, Type};

/// Safe-integer bound: the largest magnitude exactly representable as an
/// IEEE-754 double, matching `Number.MAX_SAFE_INTEGER` (`integer53`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn lower_number_literal(
    raw: f64,
    target: &Type,
    span: Span,
    ctx: &mut LoweringContext,
) -> Expr {
    match target {
        Type::Primitive(PrimitiveTag::Integer) => {
            if raw.fract() == 0.0 && raw >= i32::MIN as f64 && raw <= i32::MAX as f64 {
                Expr::literal(Literal::Integer(raw as i32), target.clone()).with_span(span)
            } else {
                ctx.report(Diagnostic::new(
                    span,
                    DiagnosticKind::IntegerLiteralOutOfRange,
                    format!("integer literal `{raw}` does not fit in a 32-bit integer"),
                ));
                Expr::literal(Literal::Number(raw), Type::number()).with_span(span)
            }
        }
        Type::Primitive(PrimitiveTag::Integer53) => {
            if raw.fract() == 0.0 && raw.abs() <= MAX_SAFE_INTEGER {
                Expr::literal(Literal::Integer53(raw as i64), target.clone()).with_span(span)
            } else {
                ctx.report(Diagnostic::new(
                    span,
                    DiagnosticKind::IntegerLiteralOutOfRange,
                    format!("integer literal `{raw}` exceeds the safe integer range"),
                ));
                Expr::literal(Literal::Number(raw), Type::number()).with_span(span)
            }
        }
        _ => Expr::literal(Literal::Number(raw), Type::number()).with_span(span),
    }
}

pub fn lower_string_literal(value: std::sync::Arc<str>, span: Span) -> Expr {
    Expr::literal(Literal::String(value), Type::string()).with_span(span)
}

pub fn lower_boolean_literal(value: bool, span: Span) -> Expr {
    Expr::literal(Literal::Boolean(value), Type::boolean()).with_span(span)
}

pub fn lower_null_literal(span: Span) -> Expr {
    Expr::literal(Literal::Null, Type::nullable(Type::void())).with_span(span)
}

pub fn lower_undefined_literal(span: Span) -> Expr {
    Expr::literal(Literal::Undefined, Type::nullable(Type::void())).with_span(span)
}
