use crate::generator::{
  BuilderSynthesizer, ConventionalNaming, FieldDescriptor, GenerationOptions, SourceFormatter, TypeManifest,
};

pub(crate) fn point_fields() -> Vec<FieldDescriptor> {
  vec![FieldDescriptor::new("x", "int"), FieldDescriptor::new("y", "int")]
}

pub(crate) fn mixed_fields() -> Vec<FieldDescriptor> {
  vec![
    FieldDescriptor::new("mName", "String"),
    FieldDescriptor::new("_tags", "java.util.List<String>"),
    FieldDescriptor::new("active", "boolean"),
  ]
}

pub(crate) fn manifest(type_name: &str, fields: Vec<FieldDescriptor>) -> TypeManifest {
  TypeManifest {
    type_name: type_name.to_string(),
    fields,
    options: None,
  }
}

pub(crate) fn synthesize(type_name: &str, fields: &[FieldDescriptor], options: &GenerationOptions) -> String {
  let naming = ConventionalNaming::default();
  BuilderSynthesizer::new(&naming).synthesize(type_name, fields, options)
}

/// Every combination of the six switches that shape the generated text.
pub(crate) fn all_option_combinations() -> Vec<GenerationOptions> {
  (0u8..64)
    .map(|bits| {
      GenerationOptions::builder()
        .create_builder_constructor(bits & 1 != 0)
        .create_static_with_methods(bits & 2 != 0)
        .create_copy_constructor(bits & 4 != 0)
        .create_builder_getters(bits & 8 != 0)
        .create_class_getters(bits & 16 != 0)
        .create_class_setters(bits & 32 != 0)
        .format_source(false)
        .build()
    })
    .collect()
}

pub(crate) fn count_lines(code: &str, predicate: impl Fn(&str) -> bool) -> usize {
  code.lines().map(str::trim).filter(|line| predicate(line)).count()
}

pub(crate) struct UppercaseFormatter;

impl SourceFormatter for UppercaseFormatter {
  async fn format(&self, source: &str) -> anyhow::Result<String> {
    Ok(source.to_uppercase())
  }
}

pub(crate) struct FailingFormatter;

impl SourceFormatter for FailingFormatter {
  async fn format(&self, _source: &str) -> anyhow::Result<String> {
    anyhow::bail!("syntax error at line 3")
  }
}
