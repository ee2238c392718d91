use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("route '{route}' has an ill-formed template: {}", .errors.join("; "))]
    TemplateHasErrors { route: String, errors: Vec<String> },
    #[error("route for template '{template}' has an empty name")]
    EmptyRouteName { template: String },
}

pub type GenerateResult<T> = Result<T, GenerateError>;
