use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Structured form of the text between a parameter's braces, after brace
/// escapes have been decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub is_catch_all: bool,
    pub is_optional: bool,
    pub default_value: Option<String>,
    pub constraints: Vec<String>,
}

type PieceList<'a> = SmallVec<[&'a str; 4]>;

/// Decomposes decoded inside-braces text into name, modifiers, default value
/// and constraint list.
///
/// This is a pure best-effort function with no error channel: flag
/// combinations such as optional-with-default are surfaced here and rejected
/// by the scanner, which owns the diagnostics.
pub fn parse_route_parameter(decoded: &str) -> ParameterDescriptor {
    let mut rest = decoded;

    let is_catch_all = match rest.strip_prefix('*') {
        Some(stripped) => {
            rest = stripped;
            true
        }
        None => false,
    };

    let mut is_optional = false;
    if let Some(stripped) = rest.strip_suffix('?') {
        is_optional = true;
        rest = stripped;
    }

    let pieces = split_outside_parens(rest);
    let name_segment = pieces.first().copied().unwrap_or("");

    let (mut name, default_value) = match name_segment.split_once('=') {
        Some((name, value)) => (name, Some(value.to_string())),
        None => (name_segment, None),
    };

    // "name?=value" carries both modifiers; keep the optional flag so the
    // scanner can reject the combination.
    if let Some(stripped) = name.strip_suffix('?') {
        is_optional = true;
        name = stripped;
    }

    let constraints = pieces
        .iter()
        .skip(1)
        .map(|piece| (*piece).to_string())
        .collect();

    ParameterDescriptor {
        name: name.to_string(),
        is_catch_all,
        is_optional,
        default_value,
        constraints,
    }
}

/// Splits on `:` at parenthesis depth zero, so a constraint argument such as
/// `regex(^\d{3}:\d{2}$)` is not broken apart.
fn split_outside_parens(text: &str) -> PieceList<'_> {
    let mut pieces = PieceList::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (idx, &byte) in text.as_bytes().iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => {
                pieces.push(&text[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    pieces.push(&text[start..]);
    pieces
}
