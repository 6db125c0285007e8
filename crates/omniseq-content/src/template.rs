//! Minimal placeholder-template engine.
//!
//! Supports exactly the constructs the content sections need: escaped
//! scalars (`{{field}}`), trusted raw scalars (`{{{field}}}`), and list
//! iteration (`{{#each list}}...{{/each}}`) with `{{this}}` bound to the
//! current element. Not a general templating engine.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced while compiling a template. Compilation is the only
/// fallible step; rendering against any context always succeeds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` without its matching closer.
    #[error("unclosed placeholder at byte {0}")]
    UnclosedPlaceholder(usize),
    /// A placeholder with nothing between the braces.
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),
    /// An `{{#each}}` block missing its `{{/each}}`.
    #[error("unterminated iteration block over `{0}`")]
    UnterminatedEach(String),
    /// A `{{/each}}` with no open block.
    #[error("`{{{{/each}}}}` without an open block")]
    UnexpectedClose,
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(String),
    Escaped(String),
    Raw(String),
    Each { list: String, body: Vec<Node> },
}

/// A compiled template, renderable against any context.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Compile template source.
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut stack: Vec<(String, Vec<Node>)> = Vec::new();
        let mut current: Vec<Node> = Vec::new();
        let mut rest = source;
        let mut offset = 0usize;

        while let Some(start) = rest.find("{{") {
            if start > 0 {
                current.push(Node::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let raw = after.starts_with('{');
            let (skip, close) = if raw { (1, "}}}") } else { (0, "}}") };
            let inner = &after[skip..];
            let Some(end) = inner.find(close) else {
                return Err(TemplateError::UnclosedPlaceholder(offset + start));
            };
            let field = inner[..end].trim();
            if field.is_empty() {
                return Err(TemplateError::EmptyPlaceholder(offset + start));
            }
            if raw {
                current.push(Node::Raw(field.to_string()));
            } else if let Some(list) = field.strip_prefix("#each") {
                let list = list.trim();
                if list.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder(offset + start));
                }
                stack.push((list.to_string(), std::mem::take(&mut current)));
            } else if field == "/each" {
                let Some((list, parent)) = stack.pop() else {
                    return Err(TemplateError::UnexpectedClose);
                };
                let body = std::mem::replace(&mut current, parent);
                current.push(Node::Each { list, body });
            } else {
                current.push(Node::Escaped(field.to_string()));
            }
            let consumed = start + 2 + skip + end + close.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            current.push(Node::Text(rest.to_string()));
        }
        if let Some((list, _)) = stack.pop() {
            return Err(TemplateError::UnterminatedEach(list));
        }
        Ok(Self { nodes: current })
    }

    /// Render against a context. Missing or non-scalar fields resolve to the
    /// empty string; iteration preserves list order and cardinality.
    pub fn render(&self, context: &Value) -> String {
        let mut out = String::new();
        render_nodes(&self.nodes, context, &mut out);
        out
    }
}

fn render_nodes(nodes: &[Node], context: &Value, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Escaped(field) => {
                out.push_str(&html_escape::encode_safe(&scalar(context, field)));
            }
            Node::Raw(field) => out.push_str(&scalar(context, field)),
            Node::Each { list, body } => {
                if let Some(items) = lookup(context, list).and_then(Value::as_array) {
                    for item in items {
                        render_nodes(body, item, out);
                    }
                }
            }
        }
    }
}

/// Resolve a field to scalar text. Lists, maps, null, and missing fields are
/// all empty rather than errors.
fn scalar(context: &Value, field: &str) -> String {
    match lookup(context, field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn lookup<'a>(context: &'a Value, field: &str) -> Option<&'a Value> {
    if field == "this" {
        return Some(context);
    }
    context.get(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text_passthrough() {
        let template = Template::compile("<p>hello</p>").unwrap();
        assert_eq!(template.render(&json!({})), "<p>hello</p>");
    }

    #[test]
    fn test_scalar_is_escaped() {
        let template = Template::compile("<h3>{{name}}</h3>").unwrap();
        let out = template.render(&json!({ "name": "Audit & <Review>" }));
        assert_eq!(out, "<h3>Audit &amp; &lt;Review&gt;</h3>");
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let template = Template::compile("<svg>{{{icon}}}</svg>").unwrap();
        let out = template.render(&json!({ "icon": "<path d=\"M0 0\"/>" }));
        assert_eq!(out, "<svg><path d=\"M0 0\"/></svg>");
    }

    #[test]
    fn test_each_preserves_order_and_cardinality() {
        let template = Template::compile("{{#each items}}[{{this}}]{{/each}}").unwrap();
        let out = template.render(&json!({ "items": ["a", "b", "c"] }));
        assert_eq!(out, "[a][b][c]");
    }

    #[test]
    fn test_each_rebinds_context() {
        let template =
            Template::compile("{{#each rows}}{{name}}:{{#each tags}}{{this}},{{/each}};{{/each}}")
                .unwrap();
        let context = json!({
            "rows": [
                { "name": "x", "tags": ["1", "2"] },
                { "name": "y", "tags": [] },
            ]
        });
        assert_eq!(template.render(&context), "x:1,2,;y:;");
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let template = Template::compile("a{{nope}}b{{#each gone}}c{{/each}}d").unwrap();
        assert_eq!(template.render(&json!({})), "abd");
    }

    #[test]
    fn test_render_is_pure() {
        let template = Template::compile("{{#each items}}{{this}}{{/each}}").unwrap();
        let context = json!({ "items": ["1", "2"] });
        assert_eq!(template.render(&context), template.render(&context));
    }

    #[test]
    fn test_unclosed_placeholder() {
        assert_eq!(
            Template::compile("abc {{name"),
            Err(TemplateError::UnclosedPlaceholder(4))
        );
    }

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(
            Template::compile("{{  }}"),
            Err(TemplateError::EmptyPlaceholder(0))
        );
    }

    #[test]
    fn test_unterminated_each() {
        assert_eq!(
            Template::compile("{{#each items}}{{this}}"),
            Err(TemplateError::UnterminatedEach("items".into()))
        );
    }

    #[test]
    fn test_stray_close() {
        assert_eq!(
            Template::compile("{{/each}}"),
            Err(TemplateError::UnexpectedClose)
        );
    }
}
