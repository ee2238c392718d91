mod context;
mod error;
mod ident;
mod writer;

pub use context::{LinkContext, LinkTemplate, RouteOptions, output_file_name};
pub use error::{GenerateError, GenerateResult};
pub use writer::{GeneratedFile, GenerationOutput, generate_link, generate_links};
