use regex::Regex;

use super::fragments::BUILDER_TYPE_NAME;

/// Recognizes members left behind by an earlier generation from their declaration header.
///
/// Always matched: the nested `Builder` class, a constructor whose only parameter is the builder, and the
/// static `with` factories. Class-level getters and setters are matched by name only when the new generation
/// emits them again.
pub(crate) struct ArtifactMatcher {
  patterns: Vec<Regex>,
}

impl ArtifactMatcher {
  pub(crate) fn new(type_name: &str, getters: &[&str], setters: &[&str]) -> Result<Self, regex::Error> {
    let builder = regex::escape(BUILDER_TYPE_NAME);
    let type_name = regex::escape(type_name);

    let mut patterns = vec![
      Regex::new(&format!(r"\bclass\s+{builder}\b"))?,
      Regex::new(&format!(
        r"(?:^|\s){type_name}\s*\(\s*(?:final\s+)?(?:[\w.]+\.)?{builder}\s+\w+\s*\)(?:\s*throws\s+[\w.,\s]+)?$"
      ))?,
      Regex::new(&format!(r"\bstatic\s+(?:[\w.]+\.)?{builder}\s+with\s*\("))?,
    ];

    for getter in getters {
      patterns.push(Regex::new(&format!(r"\b{}\s*\(\s*\)$", regex::escape(getter)))?);
    }
    for setter in setters {
      patterns.push(Regex::new(&format!(
        r"\b{}\s*\(\s*(?:final\s+)?[^,()]+\)$",
        regex::escape(setter)
      ))?);
    }

    Ok(Self { patterns })
  }

  pub(crate) fn matches(&self, header: &str) -> bool {
    self.patterns.iter().any(|pattern| pattern.is_match(header))
  }
}
