use std::ops::Range;

use regex::Regex;

use super::error::GenerationError;

/// Byte offsets of a type declaration's body braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TypeSpan {
  pub(crate) open: usize,
  pub(crate) close: usize,
}

/// A brace-bodied member directly inside a type body.
///
/// `span` starts right after the previous member's terminator, so removing it also drops the whitespace
/// and comments leading up to the member. `header` is the masked text before the opening brace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BlockMember {
  pub(crate) span: Range<usize>,
  pub(crate) header: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  Code,
  LineComment,
  BlockComment,
  Literal(char),
  TextBlock,
}

/// A compilation unit's text together with a masked copy in which comments and string, char and text-block
/// contents are blanked out. The masked copy has identical byte offsets, so braces found in it can be used to
/// edit the original.
pub(crate) struct SourceUnit<'s> {
  source: &'s str,
  masked: String,
}

impl<'s> SourceUnit<'s> {
  pub(crate) fn new(source: &'s str) -> Self {
    Self {
      source,
      masked: mask_source(source),
    }
  }

  /// Finds the body of the first `class`, `interface`, `enum` or `record` declaration named `type_name`. The
  /// opening brace is the first one outside parentheses, so record components with annotation arrays are
  /// skipped. The closing brace is the one that balances it, not the last brace of the unit.
  pub(crate) fn locate_type(&self, type_name: &str) -> Result<TypeSpan, GenerationError> {
    let pattern = format!(r"\b(?:class|interface|enum|record)\s+{}\b", regex::escape(type_name));
    let declaration = Regex::new(&pattern).map_err(|e| GenerationError::location(type_name, e.to_string()))?;

    let found = declaration
      .find(&self.masked)
      .ok_or_else(|| GenerationError::location(type_name, "declaration"))?;
    let open =
      body_brace(&self.masked, found.end()).ok_or_else(|| GenerationError::location(type_name, "opening brace"))?;
    let close = matching_brace(&self.masked, open).ok_or_else(|| GenerationError::location(type_name, "closing brace"))?;

    Ok(TypeSpan { open, close })
  }

  /// Lists members of `span` that own a brace block: methods, constructors, nested types and initializers.
  /// Braces inside parentheses (annotation arrays, anonymous classes in arguments) are skipped.
  pub(crate) fn block_members(&self, span: TypeSpan) -> Result<Vec<BlockMember>, GenerationError> {
    let bytes = self.masked.as_bytes();
    let mut members = Vec::new();
    let mut member_start = span.open + 1;
    let mut paren_depth = 0usize;
    let mut i = span.open + 1;

    while i < span.close {
      match bytes[i] {
        b'(' => paren_depth += 1,
        b')' => paren_depth = paren_depth.saturating_sub(1),
        b';' if paren_depth == 0 => member_start = i + 1,
        b'{' => {
          let end = matching_brace(&self.masked, i)
            .filter(|end| *end < span.close)
            .ok_or_else(|| GenerationError::MalformedEdit {
              start: i,
              end: span.close,
              reason: "unbalanced brace inside type body".to_string(),
            })?;
          if paren_depth == 0 {
            members.push(BlockMember {
              span: member_start..end + 1,
              header: self.masked[member_start..i].trim().to_string(),
            });
            member_start = end + 1;
          }
          i = end;
        }
        _ => {}
      }
      i += 1;
    }

    Ok(members)
  }

  /// Builds the edited unit in one pass: `removals` are dropped and `insertion` is placed on its own line right
  /// before the closing brace of `span`. The original text is never modified.
  pub(crate) fn splice(
    &self,
    span: TypeSpan,
    removals: &[Range<usize>],
    insertion: &str,
  ) -> Result<String, GenerationError> {
    let mut removals = removals.to_vec();
    removals.sort_by_key(|range| range.start);

    let mut out = String::with_capacity(self.source.len() + insertion.len() + 1);
    let mut cursor = span.open + 1;
    out.push_str(&self.source[..cursor]);

    for range in removals {
      if range.start < cursor || range.end > span.close || range.start > range.end {
        return Err(GenerationError::MalformedEdit {
          start: range.start,
          end: range.end,
          reason: "removal overlaps another edit or leaves the type body".to_string(),
        });
      }
      out.push_str(&self.source[cursor..range.start]);
      cursor = range.end;
    }

    out.push_str(&self.source[cursor..span.close]);
    // whitespace before the closing brace collapses to one line break, whether or not members were removed
    out.truncate(out.trim_end().len());
    out.push('\n');
    out.push_str(insertion);
    out.push_str(&self.source[span.close..]);

    Ok(out)
  }

  #[cfg(test)]
  pub(crate) fn masked(&self) -> &str {
    &self.masked
  }
}

fn body_brace(masked: &str, from: usize) -> Option<usize> {
  let mut paren_depth = 0usize;
  for (offset, byte) in masked.as_bytes()[from..].iter().enumerate() {
    match byte {
      b'(' => paren_depth += 1,
      b')' => paren_depth = paren_depth.saturating_sub(1),
      b'{' if paren_depth == 0 => return Some(from + offset),
      _ => {}
    }
  }
  None
}

fn matching_brace(masked: &str, open: usize) -> Option<usize> {
  let mut depth = 0usize;
  for (offset, byte) in masked.as_bytes()[open..].iter().enumerate() {
    match byte {
      b'{' => depth += 1,
      b'}' => {
        depth = depth.checked_sub(1)?;
        if depth == 0 {
          return Some(open + offset);
        }
      }
      _ => {}
    }
  }
  None
}

fn push_blank(masked: &mut String, c: char) {
  if c == '\n' {
    masked.push('\n');
  } else {
    masked.extend(std::iter::repeat_n(' ', c.len_utf8()));
  }
}

fn mask_source(source: &str) -> String {
  let mut masked = String::with_capacity(source.len());
  let mut state = ScanState::Code;
  let mut chars = source.char_indices();

  while let Some((i, c)) = chars.next() {
    let rest = &source[i..];
    match state {
      ScanState::Code => {
        if rest.starts_with("//") {
          state = ScanState::LineComment;
          masked.push(' ');
        } else if rest.starts_with("/*") {
          state = ScanState::BlockComment;
          masked.push_str("  ");
          chars.next();
        } else if rest.starts_with("\"\"\"") {
          state = ScanState::TextBlock;
          masked.push_str("\"\"\"");
          chars.next();
          chars.next();
        } else if c == '"' || c == '\'' {
          state = ScanState::Literal(c);
          masked.push(c);
        } else {
          masked.push(c);
        }
      }
      ScanState::LineComment => {
        if c == '\n' {
          state = ScanState::Code;
        }
        push_blank(&mut masked, c);
      }
      ScanState::BlockComment => {
        if rest.starts_with("*/") {
          state = ScanState::Code;
          masked.push_str("  ");
          chars.next();
        } else {
          push_blank(&mut masked, c);
        }
      }
      ScanState::Literal(quote) => {
        if c == '\\' {
          push_blank(&mut masked, c);
          if let Some((_, escaped)) = chars.next() {
            push_blank(&mut masked, escaped);
          }
        } else if c == quote || c == '\n' {
          // an unterminated literal ends at the line break
          state = ScanState::Code;
          masked.push(c);
        } else {
          push_blank(&mut masked, c);
        }
      }
      ScanState::TextBlock => {
        if rest.starts_with("\"\"\"") {
          state = ScanState::Code;
          masked.push_str("\"\"\"");
          chars.next();
          chars.next();
        } else if c == '\\' {
          push_blank(&mut masked, c);
          if let Some((_, escaped)) = chars.next() {
            push_blank(&mut masked, escaped);
          }
        } else {
          push_blank(&mut masked, c);
        }
      }
    }
  }

  masked
}
