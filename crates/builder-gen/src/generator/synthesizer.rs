use super::{
  fields::FieldDescriptor,
  fragments::{
    BUILDER_TYPE_NAME, BuildMethodFragment, BuilderFieldsFragment, ClassConstructorFragment, CopyConstructorsFragment,
    Fragment, GettersFragment, MutatorsFragment, ResolvedField, SettersFragment, StaticFactoriesFragment,
  },
  naming::NamingPolicy,
  options::{BuildStyle, GenerationOptions},
  writer::SourceWriter,
};

/// Renders builder-pattern members for a type from its fields.
///
/// The output is meant to be inserted just before the enclosing type's closing brace: class-level members
/// first (constructor, `with()` factories, accessors), then the nested `Builder` type. Synthesis is pure and
/// total; identical inputs always produce identical text.
pub struct BuilderSynthesizer<'n> {
  naming: &'n dyn NamingPolicy,
}

impl<'n> BuilderSynthesizer<'n> {
  pub fn new(naming: &'n dyn NamingPolicy) -> Self {
    Self { naming }
  }

  pub fn synthesize(&self, type_name: &str, fields: &[FieldDescriptor], options: &GenerationOptions) -> String {
    let fields = fields
      .iter()
      .map(|field| ResolvedField::resolve(field, self.naming))
      .collect::<Vec<_>>();
    let fields = fields.as_slice();
    let style = options.build_style();

    let mut out = SourceWriter::new();

    if style == BuildStyle::ConstructorConsumesBuilder {
      ClassConstructorFragment { type_name, fields }.write_to(&mut out);
    }

    if options.create_static_with_methods {
      StaticFactoriesFragment {
        type_name,
        with_copy_factory: options.emits_copy_factory(),
      }
      .write_to(&mut out);
    }

    if options.create_class_getters {
      GettersFragment { fields }.write_to(&mut out);
    }

    if options.create_class_setters {
      SettersFragment { fields }.write_to(&mut out);
    }

    out.open_member(format!("public static class {BUILDER_TYPE_NAME}"));
    BuilderFieldsFragment { fields }.write_to(&mut out);

    if options.create_copy_constructor {
      CopyConstructorsFragment { type_name, fields }.write_to(&mut out);
    }

    BuildMethodFragment {
      type_name,
      style,
      fields,
    }
    .write_to(&mut out);

    MutatorsFragment { fields }.write_to(&mut out);

    if options.create_builder_getters {
      GettersFragment { fields }.write_to(&mut out);
    }

    out.close();
    out.into_string()
  }
}
