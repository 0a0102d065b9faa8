//! Template checking and rendering

use aboutcode_model::{by_license, About};
use regex::Regex;
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{AttribError, Result};

/// Built-in HTML attribution template.
pub const DEFAULT_TEMPLATE: &str = r##"<!doctype html>
<html>
<head>
<meta charset="UTF-8">
<title>Open Source Software Information</title>
</head>
<body>
<h1>OPEN SOURCE SOFTWARE INFORMATION</h1>
<div class="oss-table-of-contents">
{% for about in abouts %}
<p><a href="#component_{{ forloop.index }}">{{ about.name | escape }}{% if about.version != "" %} {{ about.version | escape }}{% endif %}</a></p>
{% endfor %}
</div>
<hr/>
{% for about in abouts %}
<div class="oss-component" id="component_{{ forloop.index }}">
<h3 class="component-name">{{ about.name | escape }}{% if about.version != "" %} {{ about.version | escape }}{% endif %}</h3>
{% if about.copyright != "" %}<pre>{{ about.copyright | escape }}</pre>{% endif %}
{% if about.notice_text != "" %}<pre class="component-notice">{{ about.notice_text | escape }}</pre>{% endif %}
{% for key in about.license_keys %}<p>This component is licensed under {{ key | escape }}</p>
{% endfor %}
{% if about.license_text != "" %}<pre class="component-license">{{ about.license_text | escape }}</pre>{% endif %}
</div>
<hr/>
{% endfor %}
<h3>Licenses</h3>
<ul>
{% for license in licenses %}<li>{{ license | escape }}</li>
{% endfor %}
</ul>
</body>
</html>
"##;

static ERROR_POSITION_REGEX: OnceLock<Regex> = OnceLock::new();

fn error_position_regex() -> &'static Regex {
    ERROR_POSITION_REGEX
        .get_or_init(|| Regex::new(r"-->\s*(\d+):(\d+)").expect("Invalid error position regex"))
}

fn create_parser() -> Result<liquid::Parser> {
    liquid::ParserBuilder::with_stdlib()
        .build()
        .map_err(|e| AttribError::Render(e.to_string()))
}

/// Line reported by a Liquid parse error, 1 when it carries no position.
fn error_line(message: &str) -> usize {
    error_position_regex()
        .captures(message)
        .and_then(|captures| captures[1].parse().ok())
        .unwrap_or(1)
}

fn parse_template(parser: &liquid::Parser, template: &str) -> Result<liquid::Template> {
    parser.parse(template).map_err(|e| {
        let message = e.to_string();
        AttribError::Template {
            line: error_line(&message),
            message,
        }
    })
}

/// Check that `template` parses.
///
/// Returns `None` for a valid template, otherwise the line of the problem
/// and the parser's message.
///
/// ```
/// use aboutcode_attrib::check_template;
///
/// assert_eq!(check_template("{{ name }}"), None);
/// assert!(check_template("{% for about in abouts %}").is_some());
/// ```
pub fn check_template(template: &str) -> Option<(usize, String)> {
    let parser = match create_parser() {
        Ok(parser) => parser,
        Err(e) => return Some((1, e.to_string())),
    };
    match parse_template(&parser, template) {
        Ok(_) => None,
        Err(AttribError::Template { line, message }) => Some((line, message)),
        Err(e) => Some((1, e.to_string())),
    }
}

/// Concatenated contents of a text field, one block per loaded file.
fn loaded_text(about: &About, name: &str) -> String {
    about
        .field(name)
        .and_then(|field| field.value().as_paths())
        .map(|texts| {
            texts
                .values()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n\n")
        })
        .unwrap_or_default()
}

fn about_object(about: &About) -> Value {
    let mut object = Map::new();
    for (name, value) in about.as_dict(true, true, true) {
        object.insert(name, Value::String(value));
    }
    object.insert(
        "license_keys".to_string(),
        Value::from(about.license_keys()),
    );
    object.insert(
        "license_text".to_string(),
        Value::String(loaded_text(about, "license_file")),
    );
    object.insert(
        "notice_text".to_string(),
        Value::String(loaded_text(about, "notice_file")),
    );
    Value::Object(object)
}

fn template_globals(abouts: &[About]) -> liquid::Object {
    let records: Vec<Value> = abouts.iter().map(about_object).collect();
    let licenses: Vec<String> = by_license(abouts)
        .into_keys()
        .filter(|key| !key.is_empty())
        .collect();

    let mut globals = liquid::Object::new();
    globals.insert(
        "abouts".into(),
        liquid::model::to_value(&records).unwrap_or(liquid::model::Value::Nil),
    );
    globals.insert(
        "licenses".into(),
        liquid::model::to_value(&licenses).unwrap_or(liquid::model::Value::Nil),
    );
    globals
}

/// Render `template` over `abouts`.
///
/// Each record is exposed under `abouts` with all of its fields, its
/// `license_keys`, and the loaded `license_text` and `notice_text`.
/// `licenses` holds the sorted distinct license keys.
pub fn generate(abouts: &[About], template: &str) -> Result<String> {
    let parser = create_parser()?;
    let template = parse_template(&parser, template)?;
    let rendered = template
        .render(&template_globals(abouts))
        .map_err(|e| AttribError::Render(e.to_string()))?;
    tracing::debug!(records = abouts.len(), bytes = rendered.len(), "rendered attribution");
    Ok(rendered)
}

/// Render the template stored at `template_location`, or the built-in
/// template when no location is given.
pub fn generate_from_file(abouts: &[About], template_location: Option<&Path>) -> Result<String> {
    match template_location {
        Some(location) => {
            let template =
                std::fs::read_to_string(location).map_err(|source| AttribError::TemplateRead {
                    path: location.to_path_buf(),
                    source,
                })?;
            generate(abouts, &template)
        }
        None => generate(abouts, DEFAULT_TEMPLATE),
    }
}
