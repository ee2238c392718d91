use routelink_rs::{
    GenerateError, LinkContext, LinkTemplate, RouteOptions, generate_link, generate_links,
    output_file_name, parse_template,
};

fn options() -> RouteOptions {
    RouteOptions {
        routes_namespace: "Pages".to_string(),
        routes_mod_name: "Routes".to_string(),
    }
}

fn context(types: &[&str], routes: Vec<LinkTemplate>) -> LinkContext {
    LinkContext::new(types.iter().map(|t| (*t).to_string()).collect(), routes)
}

#[test]
fn emits_constant_for_literal_route() {
    let ctx = context(
        &["Pages", "Clients"],
        vec![LinkTemplate::new("List", parse_template("/clients"))],
    );

    let source = generate_link(&options(), &ctx).expect("generation should succeed");

    assert!(source.contains("pub mod routes {"), "source: {source}");
    assert!(source.contains("pub mod pages {"), "source: {source}");
    assert!(source.contains("pub mod clients {"), "source: {source}");
    assert!(
        source.contains(r#"pub const LIST: &str = "/clients";"#),
        "source: {source}"
    );
}

#[test]
fn emits_constant_for_root_route() {
    let ctx = context(&[], vec![LinkTemplate::new("Home", parse_template("/"))]);

    let source = generate_link(&options(), &ctx).expect("generation should succeed");

    assert!(
        source.contains(r#"pub const HOME: &str = "/";"#),
        "source: {source}"
    );
}

#[test]
fn emits_function_for_parameter_route() {
    let ctx = context(
        &["Pages", "Clients"],
        vec![LinkTemplate::new("Edit", parse_template("/clients/{id:int}"))],
    );

    let source = generate_link(&options(), &ctx).expect("generation should succeed");

    assert!(
        source.contains("pub fn edit(id: i32) -> String {"),
        "source: {source}"
    );
    assert!(
        source.contains(r#"link.push_str("/clients");"#),
        "source: {source}"
    );
    assert!(
        source.contains("link.push_str(&id.to_string());"),
        "source: {source}"
    );
}

#[test]
fn omits_trailing_optional_parameter_when_absent() {
    let ctx = context(
        &["Pages", "Clients", "Facility"],
        vec![LinkTemplate::new(
            "FacilityEdit",
            parse_template("/clients/{clientId:int}/facilities/{facilityId:int?}"),
        )],
    );

    let source = generate_link(&options(), &ctx).expect("generation should succeed");

    assert!(
        source.contains("pub fn facility_edit(client_id: i32, facility_id: Option<i32>) -> String {"),
        "source: {source}"
    );
    assert!(
        source.contains("if let Some(facility_id) = facility_id {"),
        "source: {source}"
    );
    assert!(
        source.contains(r#"link.push_str("/facilities");"#),
        "source: {source}"
    );
}

#[test]
fn unconstrained_parameter_becomes_string_argument() {
    let ctx = context(
        &["Pages", "Users"],
        vec![LinkTemplate::new("Show", parse_template("/users/{name}"))],
    );

    let source = generate_link(&options(), &ctx).expect("generation should succeed");

    assert!(
        source.contains("pub fn show(name: &str) -> String {"),
        "source: {source}"
    );
    assert!(source.contains("link.push_str(name);"), "source: {source}");
}

#[test]
fn refuses_ill_formed_template() {
    let ctx = context(
        &["Pages"],
        vec![LinkTemplate::new("Broken", parse_template("/a//b"))],
    );

    let error = generate_link(&options(), &ctx).expect_err("ill-formed template must be refused");

    match error {
        GenerateError::TemplateHasErrors { route, errors } => {
            assert_eq!(route, "Broken");
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("consecutively"), "error: {}", errors[0]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn batch_generation_keeps_independent_routes() {
    let contexts = vec![
        context(
            &["Pages", "Clients"],
            vec![
                LinkTemplate::new("List", parse_template("/clients")),
                LinkTemplate::new("Broken", parse_template("/clients//{id}")),
            ],
        ),
        context(
            &["Pages", "Users"],
            vec![LinkTemplate::new("Show", parse_template("/users/{name}"))],
        ),
    ];

    let output = generate_links(&options(), &contexts);

    assert_eq!(output.files.len(), 2);
    assert_eq!(output.errors.len(), 1);
    match &output.errors[0] {
        GenerateError::TemplateHasErrors { route, .. } => assert_eq!(route, "Broken"),
        other => panic!("unexpected error: {other:?}"),
    }

    // The ill-formed route is dropped; its sibling still generates.
    assert!(output.files[0].contents.contains("pub const LIST"));
    assert!(!output.files[0].contents.contains("Broken"));
}

#[test]
fn output_file_name_skips_namespace_overlap() {
    let ctx = context(
        &["Pages", "Clients"],
        vec![LinkTemplate::new("List", parse_template("/clients"))],
    );

    assert_eq!(output_file_name(&options(), &ctx), "Routes.Clients.List.g.rs");
}

#[test]
fn output_file_name_appends_each_route_name() {
    let ctx = context(
        &["Admin"],
        vec![
            LinkTemplate::new("List", parse_template("/admin")),
            LinkTemplate::new("Edit", parse_template("/admin/{id:int}")),
        ],
    );

    assert_eq!(
        output_file_name(&options(), &ctx),
        "Routes.Admin.ListEdit.g.rs"
    );
}

#[test]
fn duplicate_output_file_names_get_a_suffix() {
    let ctx = context(
        &["Pages", "Clients"],
        vec![LinkTemplate::new("List", parse_template("/clients"))],
    );
    let contexts = vec![ctx.clone(), ctx];

    let output = generate_links(&options(), &contexts);

    assert_eq!(output.files.len(), 2);
    assert_eq!(output.files[0].name, "Routes.Clients.List.g.rs");
    assert_eq!(output.files[1].name, "Routes.Clients.List.2.g.rs");
}
