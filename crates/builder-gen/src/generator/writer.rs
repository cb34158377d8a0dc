const INDENT: &str = "    ";

/// Line-oriented text buffer that tracks brace depth for indentation.
///
/// Output starts one level deep because generated members live inside the enclosing type's body.
pub(crate) struct SourceWriter {
  buf: String,
  depth: usize,
}

impl SourceWriter {
  pub(crate) fn new() -> Self {
    Self {
      buf: String::new(),
      depth: 1,
    }
  }

  pub(crate) fn line(&mut self, text: impl AsRef<str>) {
    let text = text.as_ref();
    if !text.is_empty() {
      for _ in 0..self.depth {
        self.buf.push_str(INDENT);
      }
      self.buf.push_str(text);
    }
    self.buf.push('\n');
  }

  pub(crate) fn blank(&mut self) {
    self.buf.push('\n');
  }

  /// Starts a member: blank separator line, then `header {`.
  pub(crate) fn open_member(&mut self, header: impl AsRef<str>) {
    self.blank();
    self.open(header);
  }

  pub(crate) fn open(&mut self, header: impl AsRef<str>) {
    self.line(format!("{} {{", header.as_ref()));
    self.depth += 1;
  }

  pub(crate) fn close(&mut self) {
    self.depth = self.depth.saturating_sub(1);
    self.line("}");
  }

  pub(crate) fn into_string(self) -> String {
    self.buf
  }
}
