//! C++ reserved-word escaping, so a surface identifier that happens to
//! collide with a C++ keyword (`class`, `new`, `template`, ...) still
//! emits as valid C++.

pub const CPP_RESERVED_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "reflexpr",
    "register", "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "synchronized", "template",
    "thread_local", "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned",
    "using", "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Append a trailing underscore to a name that collides with a C++ keyword;
/// pass other names through unchanged. `this` is deliberately absent from
/// [`CPP_RESERVED_KEYWORDS`] and never escaped: it is the one identifier
/// lowering itself produces for the implicit receiver (`classes.rs`), and
/// must render as the bare C++ `this` pointer rather than an undeclared
/// `this_` local.
pub fn escape_cpp_keyword(name: &str) -> String {
    if name == "this" {
        return "this".to_string();
    }
    if CPP_RESERVED_KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_keyword_gets_escaped() {
        assert_eq!(escape_cpp_keyword("class"), "class_");
        assert_eq!(escape_cpp_keyword("new"), "new_");
    }

    #[test]
    fn an_ordinary_identifier_passes_through() {
        assert_eq!(escape_cpp_keyword("widget"), "widget");
    }

    #[test]
    fn this_is_never_escaped() {
        assert_eq!(escape_cpp_keyword("this"), "this");
        assert!(!CPP_RESERVED_KEYWORDS.contains(&"this"));
    }
}
