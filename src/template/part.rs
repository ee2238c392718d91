use serde::{Deserialize, Serialize};

use super::TemplateError;

/// One literal or parameter token within a template segment.
///
/// Segments are delimited by `/`; a single segment such as `file-{id}.json`
/// produces three parts (literal, parameter, literal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplatePart {
    Literal {
        /// Decoded text: `{{` and `}}` escapes are collapsed to single braces.
        text: String,
    },
    Parameter {
        /// The raw token as it appeared in the template, braces included.
        text: String,
        /// Case is preserved; consumers compare names case-insensitively.
        name: String,
        is_catch_all: bool,
        is_optional: bool,
        /// Never present together with `is_optional`.
        default_value: Option<String>,
        /// Raw constraint strings in declaration order, duplicates allowed.
        constraints: Vec<String>,
    },
}

impl TemplatePart {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Self::Parameter { .. })
    }

    /// Decoded text for literals, the raw braced token for parameters.
    pub fn text(&self) -> &str {
        match self {
            Self::Literal { text } => text,
            Self::Parameter { text, .. } => text,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Literal { .. } => None,
            Self::Parameter { name, .. } => Some(name),
        }
    }
}

/// The parse result for one route template.
///
/// When `errors` is non-empty the scanner stopped early and `parts` may be
/// truncated; callers must check [`is_well_formed`](Self::is_well_formed)
/// before trusting the part list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePattern {
    pub template_text: String,
    pub parts: Vec<TemplatePart>,
    pub errors: Vec<TemplateError>,
}

impl TemplatePattern {
    pub(crate) fn new(
        template_text: impl Into<String>,
        parts: Vec<TemplatePart>,
        errors: Vec<TemplateError>,
    ) -> Self {
        Self {
            template_text: template_text.into(),
            parts,
            errors,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_parameters(&self) -> bool {
        self.parts.iter().any(TemplatePart::is_parameter)
    }

    /// Human-readable diagnostics, in the order they were recorded.
    pub fn error_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.errors.iter().map(ToString::to_string)
    }
}
