use serde::Deserialize;

use super::{error::GenerationError, fields::FieldDescriptor, options::GenerationOptions};

/// Structural view of the type a builder is generated for.
pub trait CodeModel {
  /// Simple name of the enclosing type, without package or type parameters.
  fn enclosing_type_name(&self) -> Result<String, GenerationError>;

  /// Instance fields in declaration order.
  fn fields(&self) -> Result<Vec<FieldDescriptor>, GenerationError>;
}

/// Hand-written description of a type, used when no IDE model is available.
///
/// ```json
/// { "type_name": "Point", "fields": [{ "name": "x", "type": "int" }], "options": { "create_class_getters": true } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeManifest {
  pub type_name: String,
  #[serde(default)]
  pub fields: Vec<FieldDescriptor>,
  #[serde(default)]
  pub options: Option<GenerationOptions>,
}

impl TypeManifest {
  pub fn from_json(content: &str) -> anyhow::Result<Self> {
    Ok(serde_json::from_str(content)?)
  }
}

impl CodeModel for TypeManifest {
  fn enclosing_type_name(&self) -> Result<String, GenerationError> {
    let name = self.type_name.trim();
    if name.is_empty() {
      return Err(GenerationError::model_access("manifest has an empty type_name"));
    }
    if name.contains(['.', '<', ' ']) {
      return Err(GenerationError::model_access(format!(
        "type_name '{name}' must be a simple name without package or type parameters"
      )));
    }
    Ok(name.to_string())
  }

  fn fields(&self) -> Result<Vec<FieldDescriptor>, GenerationError> {
    if let Some(field) = self
      .fields
      .iter()
      .find(|field| field.name.trim().is_empty() || field.type_name.trim().is_empty())
    {
      return Err(GenerationError::model_access(format!(
        "field '{}' of type '{}' is missing a name or type",
        field.name, field.type_name
      )));
    }
    Ok(self.fields.clone())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_manifest_parses_fields_in_order() {
    let manifest = TypeManifest::from_json(
      r#"{"type_name":"Point","fields":[{"name":"y","type":"int"},{"name":"x","type":"int"}]}"#,
    )
    .unwrap();
    let names: Vec<_> = manifest.fields().unwrap().into_iter().map(|f| f.name).collect();
    assert_eq!(names, ["y", "x"]);
    assert_eq!(manifest.enclosing_type_name().unwrap(), "Point");
    assert!(manifest.options.is_none());
  }

  #[test]
  fn test_manifest_options_object() {
    let manifest =
      TypeManifest::from_json(r#"{"type_name":"Point","options":{"create_builder_constructor":true}}"#).unwrap();
    let options = manifest.options.unwrap();
    assert!(options.create_builder_constructor);
    assert!(options.create_copy_constructor);
  }

  #[test]
  fn test_empty_type_name_is_model_access_error() {
    let manifest = TypeManifest::from_json(r#"{"type_name":"  "}"#).unwrap();
    assert!(matches!(
      manifest.enclosing_type_name(),
      Err(GenerationError::ModelAccess { .. })
    ));
  }

  #[test]
  fn test_qualified_type_name_is_rejected() {
    let manifest = TypeManifest::from_json(r#"{"type_name":"com.example.Point"}"#).unwrap();
    let err = manifest.enclosing_type_name().unwrap_err();
    assert!(err.to_string().contains("simple name"));
  }

  #[test]
  fn test_field_without_type_is_rejected() {
    let manifest = TypeManifest::from_json(r#"{"type_name":"Point","fields":[{"name":"x","type":""}]}"#).unwrap();
    assert!(manifest.fields().is_err());
  }
}
