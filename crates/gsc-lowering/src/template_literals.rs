//! Template literal lowering. The IR keeps template literals as
//! a distinct node (`IRExpression`); the left-fold into repeated
//! `gs::String` concatenation is the code generator's job, not
//! lowering's - this stage only type-checks the shape (always `string`) and
//! recursively lowers the embedded expressions.

use gsc_common::Span;
use gsc_ir::{Expr, ExprKind, TemplatePart, Type};

pub fn build_template_literal(parts: Vec<TemplatePart>, span: Span) -> Expr {
    Expr::new(ExprKind::TemplateLiteral(parts), Type::string()).with_span(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_ir::Literal;

    #[test]
    fn template_literal_is_always_string_typed() {
        let parts = vec![
            TemplatePart::Text(std::sync::Arc::from("hello ")),
            TemplatePart::Expr(Box::new(Expr::literal(Literal::String(std::sync::Arc::from("world")), Type::string()))),
        ];
        let e = build_template_literal(parts, Span::dummy());
        assert_eq!(e.ty, Type::string());
    }
}
