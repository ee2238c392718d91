use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostics collected into [`TemplatePattern::errors`](super::TemplatePattern).
///
/// Malformed template syntax never aborts a parse; the scanner records the
/// failure and returns whatever parts it had accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TemplateError {
    #[error("the route template separator character '/' cannot appear consecutively")]
    ConsecutiveSeparator,
    #[error(
        "there is an incomplete parameter in the route template; check that each '{{' character has a matching '}}' character"
    )]
    IncompleteParameter,
    #[error("in a route parameter, '{{' and '}}' must be escaped with '{{{{' and '}}}}'")]
    UnescapedBraceInParameter,
    #[error(
        "route parameter names must be non-empty and cannot contain these characters: '{{', '}}', '/'; the '?' character marks a parameter as optional and can occur only at the end of the parameter"
    )]
    EmptyParameterName,
    #[error("a catch-all parameter cannot be marked optional")]
    OptionalCatchAll,
    #[error("an optional parameter cannot have a default value")]
    OptionalWithDefaultValue,
    #[error("the route template parser stopped making progress")]
    ParserStalled,
}
