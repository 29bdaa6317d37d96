//! Indentation-aware text buffer for emitted source

use crate::error::CodegenResult;

/// Accumulates source lines at a tracked indentation depth.
///
/// Blank lines are written without indentation, so emitted files carry no
/// trailing whitespace.
#[derive(Debug, Clone)]
pub struct SourceWriter {
    buffer: String,
    indent: String,
    depth: usize,
}

impl SourceWriter {
    /// Create a writer that indents one level with `indent`
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            indent: indent.into(),
            depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write one indented line
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            self.blank();
            return;
        }

        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Write `header`, then `{`, the indented output of `body`, and `}`
    pub fn block<F>(&mut self, header: impl AsRef<str>, body: F) -> CodegenResult<()>
    where
        F: FnOnce(&mut Self) -> CodegenResult<()>,
    {
        self.line(header);
        self.line("{");
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        self.line("}");
        result
    }

    /// Write a `/// <summary>` comment; blank docs write nothing
    pub fn doc(&mut self, doc: &str) {
        if doc.trim().is_empty() {
            return;
        }

        self.line("/// <summary>");
        for line in doc.lines() {
            let line = escape_xml(line.trim_end());
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
        self.line("/// </summary>");
    }

    pub fn using(&mut self, namespace: &str) {
        self.line(format!("using {namespace};"));
    }

    /// Consume the writer, returning the accumulated text
    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Escape the characters that would break an XML doc comment
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
