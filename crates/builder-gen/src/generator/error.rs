use strum::Display;

/// Failures at the code-model and buffer-editing boundary. Synthesis itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationError {
  #[strum(to_string = "cannot read type model: {reason}")]
  ModelAccess { reason: String },
  #[strum(to_string = "malformed edit at {start}..{end}: {reason}")]
  MalformedEdit { start: usize, end: usize, reason: String },
  #[strum(to_string = "cannot locate {target} of type '{type_name}'")]
  Location { type_name: String, target: String },
}

impl std::error::Error for GenerationError {}

impl GenerationError {
  pub(crate) fn model_access(reason: impl Into<String>) -> Self {
    Self::ModelAccess { reason: reason.into() }
  }

  pub(crate) fn location(type_name: &str, target: impl Into<String>) -> Self {
    Self::Location {
      type_name: type_name.to_string(),
      target: target.into(),
    }
  }
}
