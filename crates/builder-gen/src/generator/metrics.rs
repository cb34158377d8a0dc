use itertools::Itertools;
use strum::Display;

use super::{
  fields::FieldDescriptor,
  naming::{NamingPolicy, is_java_keyword},
  options::{BuildStyle, GenerationOptions},
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub fields: usize,
  pub builder_methods: usize,
  pub class_accessors: usize,
  pub builder_accessors: usize,
  pub static_factories: usize,
  pub constructors: usize,
  pub artifacts_replaced: usize,
  pub formatted: bool,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  /// Counts the members a synthesis with `options` emits for `field_count` fields.
  pub fn record_synthesis(&mut self, field_count: usize, options: &GenerationOptions) {
    self.fields += field_count;
    // mutators plus build()
    self.builder_methods += field_count + 1;

    if options.create_class_getters {
      self.class_accessors += field_count;
    }
    if options.create_class_setters {
      self.class_accessors += field_count;
    }
    if options.create_builder_getters {
      self.builder_accessors += field_count;
    }

    if options.create_static_with_methods {
      self.static_factories += if options.create_copy_constructor { 2 } else { 1 };
    }

    if options.build_style() == BuildStyle::ConstructorConsumesBuilder {
      self.constructors += 1;
    }
    if options.create_copy_constructor {
      self.constructors += 2;
    }
  }

  pub fn record_artifacts_replaced(&mut self, count: usize) {
    self.artifacts_replaced += count;
  }

  pub fn record_formatted(&mut self) {
    self.formatted = true;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Fields {fields} share the base name '{base_name}'; generated members will clash")]
  DuplicateBaseName { base_name: String, fields: String },
  #[strum(to_string = "Field '{field}' derives the keyword '{base_name}' as its base name")]
  KeywordBaseName { field: String, base_name: String },
  #[strum(to_string = "Formatter failed, keeping unformatted source: {error}")]
  FormatterFailed { error: String },
  #[strum(to_string = "No formatter configured, keeping unformatted source")]
  FormatterNotConfigured,
}

impl GenerationWarning {
  /// Warnings that mean the generated source will not compile as-is.
  pub fn is_naming_conflict(&self) -> bool {
    matches!(self, Self::DuplicateBaseName { .. } | Self::KeywordBaseName { .. })
  }

  pub fn conflicting_base_name(&self) -> Option<&str> {
    match self {
      Self::DuplicateBaseName { base_name, .. } | Self::KeywordBaseName { base_name, .. } => {
        Some(base_name.as_str())
      }
      Self::FormatterFailed { .. } | Self::FormatterNotConfigured => None,
    }
  }
}

/// Base names that are Java keywords, then base names shared by more than one field, in field order.
pub fn naming_warnings(fields: &[FieldDescriptor], naming: &dyn NamingPolicy) -> Vec<GenerationWarning> {
  let bases = fields
    .iter()
    .map(|field| (field.name.as_str(), naming.base_name(&field.name)))
    .collect::<Vec<_>>();

  let keywords = bases
    .iter()
    .filter(|(_, base)| is_java_keyword(base))
    .map(|(field, base)| GenerationWarning::KeywordBaseName {
      field: (*field).to_string(),
      base_name: base.clone(),
    });

  let duplicates = bases
    .iter()
    .map(|(_, base)| base.as_str())
    .duplicates()
    .map(|base| GenerationWarning::DuplicateBaseName {
      base_name: base.to_string(),
      fields: bases
        .iter()
        .filter(|(_, other)| other == base)
        .map(|(field, _)| *field)
        .join(", "),
    });

  keywords.chain(duplicates).collect()
}
