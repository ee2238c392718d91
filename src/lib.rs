pub mod generate;
pub mod template;

pub use generate::{
    GenerateError, GenerateResult, GeneratedFile, GenerationOutput, LinkContext, LinkTemplate,
    RouteOptions, generate_link, generate_links, output_file_name,
};
pub use template::{
    ParameterDescriptor, TemplateError, TemplatePart, TemplatePattern, parse_route_parameter,
    parse_template,
};
