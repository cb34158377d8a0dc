use std::{collections::HashSet, sync::LazyLock};

pub(crate) static JAVA_KEYWORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue",
    "default", "do", "double", "else", "enum", "extends", "final", "finally", "float", "for", "goto", "if",
    "implements", "import", "instanceof", "int", "interface", "long", "native", "new", "package", "private",
    "protected", "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false", "null", "_",
  ]
  .into_iter()
  .collect()
});

pub(crate) fn is_java_keyword(ident: &str) -> bool {
  JAVA_KEYWORDS.contains(ident)
}

/// Naming conventions used to derive parameter, mutator and accessor identifiers from a field's storage name.
pub trait NamingPolicy {
  /// The accessor stem for a field, e.g. `mCount` -> `count`.
  fn base_name(&self, field_name: &str) -> String;

  fn getter_name(&self, field_name: &str, is_boolean: bool) -> String {
    let base = self.base_name(field_name);
    if is_boolean {
      if strip_is_prefix(&base).is_some() {
        return base;
      }
      return format!("is{}", capitalize(&base));
    }
    format!("get{}", capitalize(&base))
  }

  fn setter_name(&self, field_name: &str, is_boolean: bool) -> String {
    let base = self.base_name(field_name);
    let stem = if is_boolean {
      strip_is_prefix(&base).unwrap_or(&base)
    } else {
      &base
    };
    format!("set{}", capitalize(stem))
  }
}

/// Default naming that works without any IDE project settings.
///
/// Configured prefixes and suffixes are stripped first (longest match wins), but only at a word boundary: a
/// prefix must end in a separator such as `_` or be followed by an upper-case letter, and a suffix must start
/// with a separator or an upper-case letter. Without a configured match,
/// a single leading `_` is removed, as is a Hungarian `m`/`f` prefix directly followed by an upper-case
/// letter. The stem then gets its first letter lower-cased unless it opens with an acronym (`URL`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConventionalNaming {
  prefixes: Vec<String>,
  suffixes: Vec<String>,
}

impl ConventionalNaming {
  pub fn with_affixes(prefixes: Vec<String>, suffixes: Vec<String>) -> Self {
    let keep = |affix: &String| !affix.is_empty();
    Self {
      prefixes: prefixes.into_iter().filter(keep).collect(),
      suffixes: suffixes.into_iter().filter(keep).collect(),
    }
  }

  fn strip_configured<'a>(&self, name: &'a str) -> Option<&'a str> {
    let without_prefix = self
      .prefixes
      .iter()
      .filter_map(|prefix| {
        let rest = name.strip_prefix(prefix.as_str())?;
        let boundary = ends_with_separator(prefix) || rest.starts_with(char::is_uppercase);
        boundary.then_some(rest)
      })
      .filter(|rest| !rest.is_empty())
      .min_by_key(|rest| rest.len());
    let stem = without_prefix.unwrap_or(name);

    let without_suffix = self
      .suffixes
      .iter()
      .filter_map(|suffix| {
        let rest = stem.strip_suffix(suffix.as_str())?;
        let boundary = starts_with_separator(suffix) || suffix.starts_with(char::is_uppercase);
        boundary.then_some(rest)
      })
      .filter(|rest| !rest.is_empty())
      .min_by_key(|rest| rest.len());

    match (without_prefix, without_suffix) {
      (None, None) => None,
      (_, Some(stem)) | (Some(stem), None) => Some(stem),
    }
  }
}

impl NamingPolicy for ConventionalNaming {
  fn base_name(&self, field_name: &str) -> String {
    let stem = self
      .strip_configured(field_name)
      .unwrap_or_else(|| strip_storage_prefix(field_name));
    decapitalize(stem)
  }
}

fn ends_with_separator(affix: &str) -> bool {
  affix.chars().next_back().is_some_and(|c| !c.is_alphanumeric())
}

fn starts_with_separator(affix: &str) -> bool {
  affix.chars().next().is_some_and(|c| !c.is_alphanumeric())
}

fn strip_storage_prefix(name: &str) -> &str {
  if let Some(rest) = name.strip_prefix('_')
    && !rest.is_empty()
  {
    return rest;
  }

  let mut chars = name.chars();
  if let (Some('m' | 'f'), Some(next)) = (chars.next(), chars.next())
    && next.is_uppercase()
  {
    return &name[1..];
  }

  name
}

/// Returns the remainder of an `isActive`-shaped name, `None` for names like `island`.
fn strip_is_prefix(name: &str) -> Option<&str> {
  let rest = name.strip_prefix("is")?;
  rest.chars().next().filter(|c| c.is_uppercase()).map(|_| rest)
}

pub(crate) fn capitalize(input: &str) -> String {
  let mut chars = input.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

pub(crate) fn decapitalize(input: &str) -> String {
  let mut chars = input.chars();
  match (chars.next(), chars.next()) {
    (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => input.to_string(),
    (Some(first), _) => first.to_lowercase().collect::<String>() + &input[first.len_utf8()..],
    (None, _) => String::new(),
  }
}
