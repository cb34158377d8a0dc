use serde::Deserialize;

/// Switches controlling which members the builder synthesis emits.
///
/// Every combination is valid. `create_builder_constructor` picks between the two build styles, see
/// [`BuildStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, bon::Builder)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerationOptions {
  #[builder(default = false)]
  pub create_builder_constructor: bool,
  #[builder(default = true)]
  pub create_static_with_methods: bool,
  #[builder(default = true)]
  pub create_copy_constructor: bool,
  #[builder(default = false)]
  pub create_builder_getters: bool,
  #[builder(default = false)]
  pub create_class_getters: bool,
  #[builder(default = false)]
  pub create_class_setters: bool,
  #[builder(default = true)]
  pub format_source: bool,
}

impl Default for GenerationOptions {
  fn default() -> Self {
    Self::builder().build()
  }
}

/// How `Builder::build()` produces the enclosing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStyle {
  /// A private constructor on the enclosing type reads every field from the builder.
  ConstructorConsumesBuilder,
  /// `build()` allocates through the no-arg constructor and assigns each field itself.
  BuilderPopulatesInstance,
}

impl GenerationOptions {
  #[must_use]
  pub const fn build_style(&self) -> BuildStyle {
    if self.create_builder_constructor {
      BuildStyle::BuilderPopulatesInstance
    } else {
      BuildStyle::ConstructorConsumesBuilder
    }
  }

  #[must_use]
  pub const fn emits_copy_factory(&self) -> bool {
    self.create_static_with_methods && self.create_copy_constructor
  }
}
