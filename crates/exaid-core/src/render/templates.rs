//! Default Tera templates.
//!
//! Module templates see the serialized [`Module`](crate::generator::ast::Module)
//! (`name`, `description`, `operations`, `imports`). The wrapper additionally
//! receives the rendered `moduleHeader`, `moduleBody` and `moduleFooter`.

pub const DEFAULT_TYPES_TEMPLATE: &str = r#"
{%- for model in models %}
{%- if model.title %}
/**
 * @title {{ model.title }}
 */
{%- endif %}
export interface {{ model.name }}{% if model.generics | length > 0 %}<{{ model.generics | join(sep=", ") }}>{% endif %} {
{%- for prop in model.properties %}
{%- if prop.description %}
  /**
   * @description {{ prop.description }}
   */
{%- endif %}
  {{ prop.name }}{% if not prop.required %}?{% endif %}: {{ prop.type }};
{%- endfor %}
}
{% endfor %}
"#;

pub const DEFAULT_MODULE_HEADER_TEMPLATE: &str = r#"import axios from "axios";
{%- if imports | length > 0 %}
import { {{ imports | join(sep=", ") }} } from "../types";
{%- endif %}
"#;

pub const DEFAULT_MODULE_BODY_TEMPLATE: &str = r#"{
{%- for op in operations %}
  {%- set body_params = op.parameters | filter(attribute="in", value="body") %}
  {%- set form_params = op.parameters | filter(attribute="in", value="formData") %}
  {%- set query_params = op.parameters | filter(attribute="in", value="query") %}
  /**
{%- if op.summary %}
   * @summary {{ op.summary }}
{%- endif %}
{%- if op.description %}
   * @description {{ op.description }}
{%- endif %}
   */
  {{ op.name }}({% for p in op.parameters %}{{ p.name }}: {{ p.type }}{% if not loop.last %}, {% endif %}{% endfor %}) {
{%- if form_params | length > 0 %}
    const _formData = new FormData();
{%- for p in form_params %}
    _formData.append("{{ p.name }}", {{ p.name }});
{%- endfor %}
{%- endif %}
    return axios.{{ op.method }}{% if op.returnType %}<{{ op.returnType }}>{% endif %}(`{{ op.path }}`
{%- if op.method == "put" or op.method == "post" or op.method == "patch" %}
{%- if body_params | length > 0 %}, {% for p in body_params %}{% if loop.first %}{{ p.name }}{% endif %}{% endfor %}
{%- elif form_params | length > 0 %}, _formData
{%- endif %}
{%- endif %}
{%- if query_params | length > 0 %}, { params: { {{ query_params | map(attribute="name") | join(sep=", ") }} } }{% endif %});
  },
{%- endfor %}
}"#;

pub const DEFAULT_MODULE_FOOTER_TEMPLATE: &str = "";

pub const DEFAULT_MODULE_WRAPPER_TEMPLATE: &str = r#"{{ moduleHeader }}
export default {{ moduleBody }}
{{ moduleFooter }}
"#;
