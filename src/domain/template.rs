//! `$name` / `${name}` template substitution.
//!
//! Rendering is non-strict: placeholders that are not in the substitution map,
//! and `$` sequences that do not form a placeholder at all, are copied through
//! verbatim. `$$` is the escape for a literal `$`.

use std::collections::BTreeMap;

/// Placeholder name to replacement value.
pub type SubstitutionMap = BTreeMap<&'static str, String>;

const DELIMITER: char = '$';

/// A template body holding `$`-style placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

/// One lexical piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Text copied as-is.
    Literal(&'a str),
    /// `$$`.
    Escape,
    /// `$name` or `${name}`; `raw` is the full source token.
    Placeholder { name: &'a str, raw: &'a str },
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Render the template, replacing every placeholder found in `values`.
    ///
    /// Unknown placeholders stay untouched and never produce an error.
    /// Replacement values are inserted literally and are not re-scanned.
    pub fn safe_substitute(&self, values: &SubstitutionMap) -> String {
        let mut rendered = String::with_capacity(self.text.len());
        for segment in segments(&self.text) {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Escape => rendered.push(DELIMITER),
                Segment::Placeholder { name, raw } => match values.get(name) {
                    Some(value) => rendered.push_str(value),
                    None => rendered.push_str(raw),
                },
            }
        }
        rendered
    }

    /// Names of all well-formed placeholders, in order of appearance.
    pub fn placeholders(&self) -> Vec<String> {
        segments(&self.text)
            .filter_map(|segment| match segment {
                Segment::Placeholder { name, .. } => Some(name.to_string()),
                _ => None,
            })
            .collect()
    }
}

fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text: &'a str = self.text;
        let rest = &text[self.pos..];
        if rest.is_empty() {
            return None;
        }

        if !rest.starts_with(DELIMITER) {
            let end = rest.find(DELIMITER).unwrap_or(rest.len());
            self.pos += end;
            return Some(Segment::Literal(&rest[..end]));
        }

        let after = &rest[1..];
        if after.starts_with(DELIMITER) {
            self.pos += 2;
            return Some(Segment::Escape);
        }

        if let Some(inner) = after.strip_prefix('{') {
            let len = identifier_len(inner);
            if len > 0 && inner[len..].starts_with('}') {
                let raw = &rest[..len + 3];
                self.pos += raw.len();
                return Some(Segment::Placeholder { name: &inner[..len], raw });
            }
        } else {
            let len = identifier_len(after);
            if len > 0 {
                let raw = &rest[..len + 1];
                self.pos += raw.len();
                return Some(Segment::Placeholder { name: &after[..len], raw });
            }
        }

        // Lone `$` that starts nothing.
        self.pos += 1;
        Some(Segment::Literal(&rest[..1]))
    }
}

/// Byte length of the identifier at the start of `text`, or 0 if none.
fn identifier_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes.iter().take_while(|b| b.is_ascii_alphanumeric() || **b == b'_').count()
}
