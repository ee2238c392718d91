use hashbrown::HashMap;

use crate::generate::context::{LinkContext, LinkTemplate, RouteOptions, output_file_name};
use crate::generate::error::{GenerateError, GenerateResult};
use crate::generate::ident::{to_const_ident, to_snake_ident};
use crate::template::{TemplatePart, TemplatePattern};

const INDENT: &str = "    ";

/// One emitted source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub contents: String,
}

/// Result of a batch generation run. Errors are collected per route so one
/// ill-formed template does not block the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    pub files: Vec<GeneratedFile>,
    pub errors: Vec<GenerateError>,
}

/// Emits link-building Rust source for every route in one context.
///
/// Routes without parameters become path constants; routes with parameters
/// become functions that compose the path in part order, with one typed
/// argument per parameter.
#[tracing::instrument(level = "debug", skip_all, fields(routes = context.routes.len() as u64))]
pub fn generate_link(options: &RouteOptions, context: &LinkContext) -> GenerateResult<String> {
    for route in &context.routes {
        validate_route(route)?;
    }

    let mut out = String::new();
    out.push_str("// Generated by routelink. Do not edit.\n\n");

    let mut depth = 0usize;
    push_line(&mut out, depth, &format!("pub mod {} {{", to_snake_ident(&options.routes_mod_name)));
    depth += 1;

    for component in &context.types {
        push_line(&mut out, depth, &format!("pub mod {} {{", to_snake_ident(component)));
        depth += 1;
    }

    for (idx, route) in context.routes.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        write_route(&mut out, depth, route);
    }

    while depth > 0 {
        depth -= 1;
        push_line(&mut out, depth, "}");
    }

    Ok(out)
}

/// Batch driver over many contexts. Output file names are de-duplicated with
/// a numeric suffix when two contexts collapse to the same name.
#[tracing::instrument(level = "debug", skip_all, fields(contexts = contexts.len() as u64))]
pub fn generate_links(options: &RouteOptions, contexts: &[LinkContext]) -> GenerationOutput {
    let mut output = GenerationOutput::default();
    let mut taken: HashMap<String, usize> = HashMap::new();

    for context in contexts {
        let mut well_formed = Vec::new();
        for route in &context.routes {
            match validate_route(route) {
                Ok(()) => well_formed.push(route.clone()),
                Err(error) => output.errors.push(error),
            }
        }

        if well_formed.is_empty() {
            continue;
        }

        let context = LinkContext::new(context.types.clone(), well_formed);
        match generate_link(options, &context) {
            Ok(contents) => {
                let mut name = output_file_name(options, &context);
                let count = taken.entry(name.clone()).or_insert(0);
                *count += 1;
                if *count > 1 {
                    let base = name.strip_suffix(".g.rs").unwrap_or(&name).to_string();
                    name = format!("{base}.{count}.g.rs");
                }
                output.files.push(GeneratedFile { name, contents });
            }
            Err(error) => output.errors.push(error),
        }
    }

    output
}

fn validate_route(route: &LinkTemplate) -> GenerateResult<()> {
    if !route.template.is_well_formed() {
        return Err(GenerateError::TemplateHasErrors {
            route: route.name.clone(),
            errors: route.template.error_messages().collect(),
        });
    }

    if route.name.is_empty() {
        return Err(GenerateError::EmptyRouteName {
            template: route.template.template_text.clone(),
        });
    }

    Ok(())
}

fn write_route(out: &mut String, depth: usize, route: &LinkTemplate) {
    if route.template.has_parameters() {
        write_link_fn(out, depth, route);
    } else {
        let path = literal_path(&route.template);
        push_line(
            out,
            depth,
            &format!("pub const {}: &str = {:?};", to_const_ident(&route.name), path),
        );
    }
}

fn write_link_fn(out: &mut String, depth: usize, route: &LinkTemplate) {
    let mut args = String::new();
    let mut param_count = 0usize;

    for part in &route.template.parts {
        let TemplatePart::Parameter {
            name,
            is_optional,
            constraints,
            ..
        } = part
        else {
            continue;
        };

        if param_count > 0 {
            args.push_str(", ");
        }
        param_count += 1;

        let ty = parameter_type(constraints);
        if *is_optional {
            args.push_str(&format!("{}: Option<{ty}>", to_snake_ident(name)));
        } else {
            args.push_str(&format!("{}: {ty}", to_snake_ident(name)));
        }
    }

    push_line(
        out,
        depth,
        &format!("pub fn {}({args}) -> String {{", to_snake_ident(&route.name)),
    );

    let capacity = route.template.template_text.len() + 8 * param_count;
    push_line(out, depth + 1, &format!("let mut link = String::with_capacity({capacity});"));

    for part in &route.template.parts {
        match part {
            TemplatePart::Literal { text } => {
                if text.is_empty() {
                    continue;
                }
                push_line(out, depth + 1, &format!("link.push_str({:?});", format!("/{text}")));
            }
            TemplatePart::Parameter {
                name,
                is_optional,
                constraints,
                ..
            } => {
                let ident = to_snake_ident(name);
                let push = push_value(&ident, constraints);

                if *is_optional {
                    push_line(out, depth + 1, &format!("if let Some({ident}) = {ident} {{"));
                    push_line(out, depth + 2, "link.push('/');");
                    push_line(out, depth + 2, &push);
                    push_line(out, depth + 1, "}");
                } else {
                    push_line(out, depth + 1, "link.push('/');");
                    push_line(out, depth + 1, &push);
                }
            }
        }
    }

    push_line(out, depth + 1, "link");
    push_line(out, depth, "}");
}

fn push_value(ident: &str, constraints: &[String]) -> String {
    if parameter_type(constraints) == "&str" {
        format!("link.push_str({ident});")
    } else {
        format!("link.push_str(&{ident}.to_string());")
    }
}

/// Maps the first recognized type constraint to a Rust argument type.
/// Unrecognized constraints (lengths, ranges, regex) keep the parameter a
/// string; constraint semantics stay a downstream concern.
fn parameter_type(constraints: &[String]) -> &'static str {
    for constraint in constraints {
        let head = constraint.split('(').next().unwrap_or(constraint);
        match head {
            "int" => return "i32",
            "long" => return "i64",
            "bool" => return "bool",
            "float" => return "f32",
            "double" | "decimal" => return "f64",
            _ => {}
        }
    }

    "&str"
}

/// Joins part texts into a `/`-separated path; zero-length literal parts are
/// placeholders and do not contribute a separator.
fn literal_path(template: &TemplatePattern) -> String {
    if let [part] = template.parts.as_slice()
        && part.text() == "/"
    {
        return "/".to_string();
    }

    let mut path = String::with_capacity(template.template_text.len() + 1);
    for part in &template.parts {
        let text = part.text();
        if text.is_empty() {
            continue;
        }
        path.push('/');
        path.push_str(text);
    }

    if path.is_empty() {
        path.push('/');
    }

    path
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}
