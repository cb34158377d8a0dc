use serde::Deserialize;

/// A field of the enclosing type, as reported by the code model.
///
/// `type_name` is the source-level spelling (`int`, `java.util.List<String>`) and is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescriptor {
  pub name: String,
  #[serde(rename = "type")]
  pub type_name: String,
}

impl FieldDescriptor {
  pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      type_name: type_name.into(),
    }
  }

  /// Only the primitive `boolean` gets `is`-style accessors; `java.lang.Boolean` does not.
  #[must_use]
  pub fn is_boolean(&self) -> bool {
    self.type_name.trim() == "boolean"
  }
}
