use crate::{
  config::ModuleTemplate,
  error::EmitError,
  generator::ast::{HttpMethod, ModelDefinition, ModelProperty, Module, Operation, Parameter, ParameterLocation},
  render::TemplateRenderer,
};

fn property(name: &str, type_name: &str, required: bool, description: Option<&str>) -> ModelProperty {
  ModelProperty {
    name: name.to_string(),
    type_name: type_name.to_string(),
    required,
    description: description.map(str::to_string),
  }
}

fn parameter(name: &str, location: ParameterLocation, type_name: &str) -> Parameter {
  Parameter {
    name: name.to_string(),
    location,
    type_name: type_name.to_string(),
    required: true,
    description: None,
  }
}

fn operation(name: &str, method: HttpMethod, path: &str, return_type: &str, parameters: Vec<Parameter>) -> Operation {
  Operation {
    name: name.to_string(),
    method,
    path: path.to_string(),
    summary: None,
    description: None,
    return_type: return_type.to_string(),
    parameters,
  }
}

fn pet_module() -> Module {
  Module {
    name: "pet".to_string(),
    description: Some("Everything about your Pets".to_string()),
    operations: vec![
      Operation {
        summary: Some("Find pet by ID".to_string()),
        ..operation(
          "getPetById",
          HttpMethod::Get,
          "/pets/${id}",
          "Pet",
          vec![parameter("id", ParameterLocation::Path, "number")],
        )
      },
      operation(
        "addPet",
        HttpMethod::Post,
        "/pets",
        "Pet",
        vec![parameter("body", ParameterLocation::Body, "Pet")],
      ),
      operation(
        "findPets",
        HttpMethod::Get,
        "/pets",
        "Pet[]",
        vec![
          parameter("status", ParameterLocation::Query, "string[]"),
          parameter("limit", ParameterLocation::Query, "number"),
        ],
      ),
      operation(
        "uploadFile",
        HttpMethod::Post,
        "/pets/${id}/uploadImage",
        "",
        vec![
          parameter("id", ParameterLocation::Path, "number"),
          parameter("file", ParameterLocation::FormData, "File"),
        ],
      ),
    ],
    imports: vec!["Pet".to_string()],
  }
}

#[test]
fn test_render_types() {
  let models = vec![
    ModelDefinition {
      name: "Pet".to_string(),
      title: None,
      generics: vec![],
      properties: vec![
        property("id", "number", false, None),
        property("name", "string", true, Some("Pet name")),
        property("tags", "Tag[]", false, None),
      ],
    },
    ModelDefinition {
      name: "PageResult".to_string(),
      title: Some("Paged result".to_string()),
      generics: vec!["T".to_string()],
      properties: vec![property("items", "T[]", true, None)],
    },
  ];

  let rendered = TemplateRenderer::default().render_types(&models).unwrap();

  assert!(rendered.contains("export interface Pet {\n  id?: number;\n"));
  assert!(rendered.contains("   * @description Pet name\n   */\n  name: string;\n"));
  assert!(rendered.contains("  tags?: Tag[];\n}"));
  assert!(rendered.contains("@title Paged result"));
  assert!(rendered.contains("export interface PageResult<T> {\n  items: T[];\n}"));
}

#[test]
fn test_render_module_with_defaults() {
  let rendered = TemplateRenderer::default().render_module(&pet_module()).unwrap();

  assert!(rendered.starts_with("import axios from \"axios\";\nimport { Pet } from \"../types\";\n"));
  assert!(rendered.contains("export default {"));
  assert!(rendered.contains("   * @summary Find pet by ID\n"));
  assert!(rendered.contains("  getPetById(id: number) {\n    return axios.get<Pet>(`/pets/${id}`);\n  },"));
  assert!(rendered.contains("    return axios.post<Pet>(`/pets`, body);"));
  assert!(rendered.contains("  findPets(status: string[], limit: number) {"));
  assert!(rendered.contains("    return axios.get<Pet[]>(`/pets`, { params: { status, limit } });"));
  assert!(rendered.contains("    _formData.append(\"file\", file);"));
  assert!(rendered.contains("    return axios.post(`/pets/${id}/uploadImage`, _formData);"));
}

#[test]
fn test_module_without_imports_has_no_type_import() {
  let module = Module {
    imports: vec![],
    ..pet_module()
  };
  let rendered = TemplateRenderer::default().render_module(&module).unwrap();
  assert!(!rendered.contains("../types"));
}

#[test]
fn test_single_slot_override_keeps_other_defaults() {
  let template = ModuleTemplate::builder().footer("// module {{ name }}").build();
  let rendered = TemplateRenderer::new(&template, None).render_module(&pet_module()).unwrap();

  assert!(rendered.starts_with("import axios from \"axios\";"));
  assert!(rendered.contains("getPetById(id: number) {"));
  assert!(rendered.trim_end().ends_with("// module pet"));
}

#[test]
fn test_wrapper_combines_rendered_slots() {
  let template = ModuleTemplate::builder()
    .header("// {{ name }}")
    .body("{% for op in operations %}{{ op.name }};{% endfor %}")
    .footer("// {{ imports | length }} imports")
    .wrapper("{{ moduleFooter }}|{{ moduleBody }}|{{ moduleHeader }}")
    .build();

  let rendered = TemplateRenderer::new(&template, None).render_module(&pet_module()).unwrap();
  assert_eq!(rendered, "// 1 imports|getPetById;addPet;findPets;uploadFile;|// pet");
}

#[test]
fn test_custom_types_template() {
  let models = vec![ModelDefinition {
    name: "Pet".to_string(),
    title: None,
    generics: vec![],
    properties: vec![],
  }];

  let renderer = TemplateRenderer::new(
    &ModuleTemplate::default(),
    Some("{% for model in models %}type {{ model.name }} = {};{% endfor %}"),
  );
  assert_eq!(renderer.render_types(&models).unwrap(), "type Pet = {};");
}

#[test]
fn test_invalid_template_is_error() {
  let template = ModuleTemplate::builder().body("{% for op in %}").build();
  let error = TemplateRenderer::new(&template, None)
    .render_module(&pet_module())
    .unwrap_err();
  assert!(matches!(error, EmitError::Template { template: "body", .. }));
}
