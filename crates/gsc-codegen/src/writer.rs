//! A small indent-tracking text accumulator, shared by every emission
//! module so header/source text comes out with uniform 4-space blocks
//! regardless of which construct produced a given line.

#[derive(Debug, Default)]
pub struct Writer {
    buf: String,
    indent: usize,
    at_line_start: bool,
}

impl Writer {
    pub fn new() -> Self {
        Writer {
            buf: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Append a single logical line, terminated with `\n`, at the current
    /// indent level.
    pub fn line(&mut self, text: impl AsRef<str>) {
        if self.at_line_start {
            self.buf.push_str(&"    ".repeat(self.indent));
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self.at_line_start = true;
    }

    /// Append pre-rendered multi-line text verbatim (e.g. a nested
    /// emitter's already-indented output) without adding another indent
    /// prefix or trailing newline of its own.
    pub fn raw(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if self.at_line_start && !text.is_empty() {
            self.buf.push_str(&"    ".repeat(self.indent));
        }
        self.buf.push_str(text);
        self.at_line_start = text.ends_with('\n');
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
        self.at_line_start = true;
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_lines_pick_up_the_current_indent() {
        let mut w = Writer::new();
        w.line("outer {");
        w.indent();
        w.line("inner;");
        w.dedent();
        w.line("}");
        assert_eq!(w.into_string(), "outer {\n    inner;\n}\n");
    }
}
