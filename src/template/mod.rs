mod cursor;
mod error;
mod parameter;
mod part;
mod scanner;

pub use error::TemplateError;
pub use parameter::{ParameterDescriptor, parse_route_parameter};
pub use part::{TemplatePart, TemplatePattern};
pub use scanner::parse_template;
