//! Rendering of the generated version class
//!
//! Templates are rendered with Tera. The context exposes `tag`, `sha` and
//! `version`; the `java_string` filter escapes a value for use inside a Java
//! string literal.

use crate::stamper::error::{StampError, StampResult};
use crate::stamper::types::VersionInfo;
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera, Value};

/// Built-in template producing `TreeSitter.java`
pub const BUILTIN_TEMPLATE: &str = include_str!("templates/TreeSitter.java.tera");

const TEMPLATE_NAME: &str = "TreeSitter.java";

/// A parsed template ready to render version metadata
pub struct StampTemplate {
    tera: Tera,
}

impl StampTemplate {
    /// The built-in `TreeSitter.java` template
    pub fn builtin() -> StampResult<Self> {
        Self::with_content(BUILTIN_TEMPLATE)
    }

    /// Load a template from a file
    pub fn from_file(path: &Path) -> StampResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StampError::io(path, e))?;
        Self::with_content(&content)
    }

    /// Use the file at `path` when given, the built-in template otherwise
    pub fn load(path: Option<&Path>) -> StampResult<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading template from {}", path.display());
                Self::from_file(path)
            }
            None => Self::builtin(),
        }
    }

    pub fn with_content(content: &str) -> StampResult<Self> {
        let mut tera = Tera::default();
        tera.register_filter("java_string", java_string_filter);
        tera.add_raw_template(TEMPLATE_NAME, content)?;
        Ok(Self { tera })
    }

    /// Render the template; the result always ends with a newline
    pub fn render(&self, info: &VersionInfo) -> StampResult<String> {
        let mut context = Context::from_serialize(info)?;
        context.insert("version", &info.version());

        let mut rendered = self.tera.render(TEMPLATE_NAME, &context)?;
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }
}

/// Escape a value for a Java string literal
pub fn escape_java(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn java_string_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = tera::try_get_value!("java_string", "value", String, value);
    Ok(Value::String(escape_java(&s)))
}
