use serde::{Deserialize, Serialize};

use crate::template::TemplatePattern;

/// Settings for the emitted link source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Dotted namespace the route declarations live under; leading components
    /// shared with a context's type path are dropped from output file names.
    pub routes_namespace: String,
    /// Name of the root module that holds the generated links.
    pub routes_mod_name: String,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            routes_namespace: "routelink".to_string(),
            routes_mod_name: "Routes".to_string(),
        }
    }
}

/// One declared route: its link name and the parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTemplate {
    pub name: String,
    pub template: TemplatePattern,
}

impl LinkTemplate {
    pub fn new(name: impl Into<String>, template: TemplatePattern) -> Self {
        Self {
            name: name.into(),
            template,
        }
    }
}

/// All routes declared on one type, together with its containing
/// namespace/type path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkContext {
    pub types: Vec<String>,
    pub routes: Vec<LinkTemplate>,
}

impl LinkContext {
    pub fn new(types: Vec<String>, routes: Vec<LinkTemplate>) -> Self {
        Self { types, routes }
    }
}

/// Derives the output file name for one context, e.g.
/// `Routes.Pages.Clients.List.g.rs`.
///
/// Type path components that overlap the configured namespace are skipped;
/// route names are appended so that two contexts with the same type path do
/// not collide.
pub fn output_file_name(options: &RouteOptions, context: &LinkContext) -> String {
    let namespace: Vec<&str> = options.routes_namespace.split('.').collect();

    let mut name = String::from("Routes");
    for (idx, component) in context.types.iter().enumerate() {
        if namespace.get(idx).copied() == Some(component.as_str()) {
            continue;
        }

        name.push('.');
        name.push_str(component);
    }

    name.push('.');
    for route in &context.routes {
        name.push_str(&route.name);
    }

    name.push_str(".g.rs");
    name
}
