use super::{
  fields::FieldDescriptor,
  naming::NamingPolicy,
  options::BuildStyle,
  writer::SourceWriter,
};

pub(crate) const BUILDER_TYPE_NAME: &str = "Builder";
pub(crate) const MUTATOR_PARAMETER_SUFFIX: &str = "Param";

/// A field with every identifier the generated members need, resolved once per synthesis.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedField<'a> {
  field: &'a FieldDescriptor,
  pub(crate) base_name: String,
  pub(crate) getter_name: String,
  pub(crate) setter_name: String,
}

impl<'a> ResolvedField<'a> {
  pub(crate) fn resolve(field: &'a FieldDescriptor, naming: &dyn NamingPolicy) -> Self {
    let is_boolean = field.is_boolean();
    Self {
      field,
      base_name: naming.base_name(&field.name),
      getter_name: naming.getter_name(&field.name, is_boolean),
      setter_name: naming.setter_name(&field.name, is_boolean),
    }
  }

  pub(crate) fn name(&self) -> &str {
    &self.field.name
  }

  pub(crate) fn type_name(&self) -> &str {
    &self.field.type_name
  }

  fn mutator_parameter(&self) -> String {
    format!("{}{MUTATOR_PARAMETER_SUFFIX}", self.base_name)
  }
}

pub(crate) trait Fragment {
  fn write_to(&self, out: &mut SourceWriter);
}

struct FieldAssignments<'f, 'a> {
  target: &'f str,
  source: &'f str,
  fields: &'f [ResolvedField<'a>],
}

impl Fragment for FieldAssignments<'_, '_> {
  fn write_to(&self, out: &mut SourceWriter) {
    for field in self.fields {
      let name = field.name();
      out.line(format!("{}.{name} = {}.{name};", self.target, self.source));
    }
  }
}

pub(crate) struct ClassConstructorFragment<'f, 'a> {
  pub(crate) type_name: &'f str,
  pub(crate) fields: &'f [ResolvedField<'a>],
}

impl Fragment for ClassConstructorFragment<'_, '_> {
  fn write_to(&self, out: &mut SourceWriter) {
    out.open_member(format!("private {}(final {BUILDER_TYPE_NAME} builder)", self.type_name));
    FieldAssignments {
      target: "this",
      source: "builder",
      fields: self.fields,
    }
    .write_to(out);
    out.close();
  }
}

pub(crate) struct StaticFactoriesFragment<'f> {
  pub(crate) type_name: &'f str,
  pub(crate) with_copy_factory: bool,
}

impl Fragment for StaticFactoriesFragment<'_> {
  fn write_to(&self, out: &mut SourceWriter) {
    out.open_member(format!("public static {BUILDER_TYPE_NAME} with()"));
    out.line(format!("return new {BUILDER_TYPE_NAME}();"));
    out.close();

    if self.with_copy_factory {
      out.open_member(format!(
        "public static {BUILDER_TYPE_NAME} with(final {} original)",
        self.type_name
      ));
      out.line(format!("return new {BUILDER_TYPE_NAME}(original);"));
      out.close();
    }
  }
}

pub(crate) struct GettersFragment<'f, 'a> {
  pub(crate) fields: &'f [ResolvedField<'a>],
}

impl Fragment for GettersFragment<'_, '_> {
  fn write_to(&self, out: &mut SourceWriter) {
    for field in self.fields {
      out.open_member(format!("public {} {}()", field.type_name(), field.getter_name));
      out.line(format!("return {};", field.name()));
      out.close();
    }
  }
}

pub(crate) struct SettersFragment<'f, 'a> {
  pub(crate) fields: &'f [ResolvedField<'a>],
}

impl Fragment for SettersFragment<'_, '_> {
  fn write_to(&self, out: &mut SourceWriter) {
    for field in self.fields {
      out.open_member(format!(
        "public void {}(final {} {})",
        field.setter_name,
        field.type_name(),
        field.base_name
      ));
      out.line(format!("this.{} = {};", field.name(), field.base_name));
      out.close();
    }
  }
}

pub(crate) struct BuilderFieldsFragment<'f, 'a> {
  pub(crate) fields: &'f [ResolvedField<'a>],
}

impl Fragment for BuilderFieldsFragment<'_, '_> {
  fn write_to(&self, out: &mut SourceWriter) {
    for field in self.fields {
      out.line(format!("{} {};", field.type_name(), field.name()));
    }
  }
}

pub(crate) struct CopyConstructorsFragment<'f, 'a> {
  pub(crate) type_name: &'f str,
  pub(crate) fields: &'f [ResolvedField<'a>],
}

impl Fragment for CopyConstructorsFragment<'_, '_> {
  fn write_to(&self, out: &mut SourceWriter) {
    out.blank();
    out.line(format!("public {BUILDER_TYPE_NAME}() {{}}"));

    out.open_member(format!("public {BUILDER_TYPE_NAME}(final {} original)", self.type_name));
    FieldAssignments {
      target: "this",
      source: "original",
      fields: self.fields,
    }
    .write_to(out);
    out.close();
  }
}

pub(crate) struct BuildMethodFragment<'f, 'a> {
  pub(crate) type_name: &'f str,
  pub(crate) style: BuildStyle,
  pub(crate) fields: &'f [ResolvedField<'a>],
}

impl BuildMethodFragment<'_, '_> {
  /// `Point` -> `point`. Only the first character changes, acronyms included.
  fn instance_variable(&self) -> String {
    let mut chars = self.type_name.chars();
    match chars.next() {
      None => String::new(),
      Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
  }
}

impl Fragment for BuildMethodFragment<'_, '_> {
  fn write_to(&self, out: &mut SourceWriter) {
    let type_name = self.type_name;
    out.open_member(format!("public {type_name} build()"));
    match self.style {
      BuildStyle::ConstructorConsumesBuilder => {
        out.line(format!("return new {type_name}(this);"));
      }
      BuildStyle::BuilderPopulatesInstance => {
        let instance = self.instance_variable();
        out.line(format!("{type_name} {instance} = new {type_name}();"));
        FieldAssignments {
          target: &instance,
          source: "this",
          fields: self.fields,
        }
        .write_to(out);
        out.line(format!("return {instance};"));
      }
    }
    out.close();
  }
}

pub(crate) struct MutatorsFragment<'f, 'a> {
  pub(crate) fields: &'f [ResolvedField<'a>],
}

impl Fragment for MutatorsFragment<'_, '_> {
  fn write_to(&self, out: &mut SourceWriter) {
    for field in self.fields {
      let parameter = field.mutator_parameter();
      out.open_member(format!(
        "public {BUILDER_TYPE_NAME} {}({} {parameter})",
        field.base_name,
        field.type_name()
      ));
      out.line(format!("this.{} = {parameter};", field.name()));
      out.line("return this;");
      out.close();
    }
  }
}
