use super::support::{all_option_combinations, count_lines, mixed_fields, point_fields, synthesize};
use crate::generator::{FieldDescriptor, GenerationOptions};

#[test]
fn test_point_with_default_options() {
  let code = synthesize("Point", &point_fields(), &GenerationOptions::default());

  let expected = [
    "",
    "    private Point(final Builder builder) {",
    "        this.x = builder.x;",
    "        this.y = builder.y;",
    "    }",
    "",
    "    public static Builder with() {",
    "        return new Builder();",
    "    }",
    "",
    "    public static Builder with(final Point original) {",
    "        return new Builder(original);",
    "    }",
    "",
    "    public static class Builder {",
    "        int x;",
    "        int y;",
    "",
    "        public Builder() {}",
    "",
    "        public Builder(final Point original) {",
    "            this.x = original.x;",
    "            this.y = original.y;",
    "        }",
    "",
    "        public Point build() {",
    "            return new Point(this);",
    "        }",
    "",
    "        public Builder x(int xParam) {",
    "            this.x = xParam;",
    "            return this;",
    "        }",
    "",
    "        public Builder y(int yParam) {",
    "            this.y = yParam;",
    "            return this;",
    "        }",
    "    }",
    "",
  ]
  .join("\n");

  assert_eq!(code, expected);
}

#[test]
fn test_builder_populates_instance_style() {
  let options = GenerationOptions::builder()
    .create_builder_constructor(true)
    .create_static_with_methods(false)
    .create_copy_constructor(false)
    .build();
  let code = synthesize("Point", &point_fields(), &options);

  let expected = [
    "",
    "    public static class Builder {",
    "        int x;",
    "        int y;",
    "",
    "        public Point build() {",
    "            Point point = new Point();",
    "            point.x = this.x;",
    "            point.y = this.y;",
    "            return point;",
    "        }",
    "",
    "        public Builder x(int xParam) {",
    "            this.x = xParam;",
    "            return this;",
    "        }",
    "",
    "        public Builder y(int yParam) {",
    "            this.y = yParam;",
    "            return this;",
    "        }",
    "    }",
    "",
  ]
  .join("\n");

  assert_eq!(code, expected);
}

#[test]
fn test_exactly_one_build_path_for_every_combination() {
  for options in all_option_combinations() {
    let code = synthesize("Point", &point_fields(), &options);
    let consumes = code.contains("private Point(final Builder builder)") && code.contains("return new Point(this);");
    let populates = code.contains("Point point = new Point();") && code.contains("return point;");

    assert!(consumes != populates, "options {options:?} produced both or neither build path");
    assert_eq!(populates, options.create_builder_constructor);
    assert_eq!(count_lines(&code, |line| line.ends_with(" build() {")), 1);
  }
}

#[test]
fn test_member_counts_are_linear_in_field_count() {
  let fields = ["a", "b", "c"]
    .into_iter()
    .map(|name| FieldDescriptor::new(name, "int"))
    .collect::<Vec<_>>();

  for options in all_option_combinations() {
    let line_counts = (1..=3)
      .map(|n| synthesize("Sample", &fields[..n], &options).lines().count())
      .collect::<Vec<_>>();
    assert_eq!(
      line_counts[2] - line_counts[1],
      line_counts[1] - line_counts[0],
      "options {options:?}"
    );

    let code = synthesize("Sample", &fields, &options);
    for field in &fields {
      let name = &field.name;
      let getter = format!("public int get{}()", name.to_uppercase());
      let setter = format!("public void set{}(final int {name})", name.to_uppercase());
      let declaration = format!("int {name};");
      let mutator = format!("public Builder {name}(int {name}Param) {{");

      assert_eq!(count_lines(&code, |line| line == declaration), 1);
      assert_eq!(count_lines(&code, |line| line == mutator), 1);
      assert_eq!(
        count_lines(&code, |line| line.starts_with(&getter)),
        usize::from(options.create_class_getters) + usize::from(options.create_builder_getters)
      );
      assert_eq!(
        count_lines(&code, |line| line.starts_with(&setter)),
        usize::from(options.create_class_setters)
      );
    }
  }
}

fn positions(code: &str, fields: &[FieldDescriptor], render: impl Fn(&str) -> String) -> Vec<usize> {
  fields
    .iter()
    .map(|field| code.find(&render(&field.name)).unwrap())
    .collect()
}

#[test]
fn test_field_order_is_preserved_everywhere() {
  let fields = ["zeta", "alpha", "mid"]
    .into_iter()
    .map(|name| FieldDescriptor::new(name, "long"))
    .collect::<Vec<_>>();

  for options in all_option_combinations() {
    let code = synthesize("Sample", &fields, &options);
    let declarations = positions(&code, &fields, |name| format!("        long {name};\n"));
    let mutators = positions(&code, &fields, |name| format!("public Builder {name}(long {name}Param)"));
    assert!(declarations.is_sorted(), "declarations out of order for {options:?}");
    assert!(mutators.is_sorted(), "mutators out of order for {options:?}");

    if options.create_copy_constructor {
      let copies = positions(&code, &fields, |name| format!("this.{name} = original.{name};"));
      assert!(copies.is_sorted(), "copy constructor out of order for {options:?}");
    }
  }
}

#[test]
fn test_with_methods_without_copy_constructor() {
  let options = GenerationOptions::builder().create_copy_constructor(false).build();
  let code = synthesize("Point", &point_fields(), &options);

  assert!(code.contains("public static Builder with() {"));
  assert!(!code.contains("with(final Point original)"));
  assert!(!code.contains("public Builder() {}"));
  assert!(!code.contains("public Builder(final Point original)"));
}

#[test]
fn test_copy_constructor_without_with_methods() {
  let options = GenerationOptions::builder().create_static_with_methods(false).build();
  let code = synthesize("Point", &point_fields(), &options);

  assert!(!code.contains(" with("));
  assert!(code.contains("public Builder() {}"));
  assert!(code.contains("public Builder(final Point original) {"));
}

#[test]
fn test_accessors_follow_naming_policy() {
  let options = GenerationOptions::builder()
    .create_class_getters(true)
    .create_class_setters(true)
    .build();
  let code = synthesize("Account", &mixed_fields(), &options);

  assert!(code.contains("    public String getName() {\n        return mName;\n    }"));
  assert!(code.contains("    public java.util.List<String> getTags() {\n        return _tags;\n    }"));
  assert!(code.contains("    public boolean isActive() {\n        return active;\n    }"));
  assert!(code.contains("    public void setName(final String name) {\n        this.mName = name;\n    }"));
  assert!(code.contains("    public void setActive(final boolean active) {\n        this.active = active;\n    }"));
  assert!(code.contains("public Builder tags(java.util.List<String> tagsParam) {\n            this._tags = tagsParam;"));
  assert!(code.contains("        java.util.List<String> _tags;\n"));
}

#[test]
fn test_builder_getters_live_inside_builder() {
  let options = GenerationOptions::builder().create_builder_getters(true).build();
  let code = synthesize("Point", &point_fields(), &options);

  let builder_start = code.find("public static class Builder").unwrap();
  let getter = code.find("        public int getX() {").unwrap();
  assert!(getter > builder_start);
  assert!(code.ends_with("            return y;\n        }\n    }\n"));
}

#[test]
fn test_class_members_precede_builder() {
  let options = GenerationOptions::builder()
    .create_class_getters(true)
    .create_class_setters(true)
    .build();
  let code = synthesize("Point", &point_fields(), &options);

  let constructor = code.find("private Point(final Builder builder)").unwrap();
  let with = code.find("public static Builder with()").unwrap();
  let getter = code.find("public int getX()").unwrap();
  let setter = code.find("public void setX(").unwrap();
  let builder = code.find("public static class Builder").unwrap();
  assert!(constructor < with && with < getter && getter < setter && setter < builder);
}

#[test]
fn test_empty_field_list_still_builds() {
  let code = synthesize("Marker", &[], &GenerationOptions::default());

  assert!(code.contains("    private Marker(final Builder builder) {\n    }"));
  assert!(code.contains("        public Marker build() {\n            return new Marker(this);\n        }"));
  assert!(!code.contains("Param"));
}

#[test]
fn test_synthesis_is_deterministic() {
  for options in all_option_combinations() {
    let first = synthesize("Account", &mixed_fields(), &options);
    let second = synthesize("Account", &mixed_fields(), &options);
    assert_eq!(first, second);
  }
}
