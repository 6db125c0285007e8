//! Projection of the content tables into hosted markup sections.

use serde_json::{Value, json};

use crate::data;
use crate::template::{Template, TemplateError};

/// Receives rendered markup for a container, replacing whatever was there.
///
/// Returns whether the container exists; replacing into an absent container
/// is a silent no-op rather than an error.
pub trait MarkupHost {
    fn replace(&mut self, container_id: &str, markup: &str) -> bool;
}

pub const SERVICES_CONTAINER: &str = "services";
pub const INDUSTRIES_CONTAINER: &str = "industries";
pub const FOOTER_CONTAINER: &str = "footer";

const SERVICE_TEMPLATE: &str = r#"{{#each services}}
<div class="service-card" data-card="{{slug}}">
  <svg class="service-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5">{{{icon}}}</svg>
  <h3>{{name}}</h3>
  <p>{{description}}</p>
  <ul class="service-details">
    {{#each details}}
    <li>{{this}}</li>
    {{/each}}
  </ul>
</div>
{{/each}}"#;

const INDUSTRY_TEMPLATE: &str = r#"{{#each industries}}
<div class="industry-card">
  <svg class="industry-icon" viewBox="0 0 64 64" fill="none" stroke="currentColor" stroke-width="1.5">{{{icon}}}</svg>
  <h4>{{name}}</h4>
</div>
{{/each}}"#;

const FOOTER_TEMPLATE: &str = r#"<div class="footer">
  <div class="footer-branding">
    <h3>Omni Seq</h3>
    <p>Enterprise-grade cybersecurity partner delivering global-standard security practices with deep local expertise.</p>
  </div>
  <div class="footer-column">
    <h4>Quick Links</h4>
    <ul>
      {{#each quickLinks}}
      <li><a href="{{url}}">{{name}}</a></li>
      {{/each}}
    </ul>
  </div>
  <div class="footer-column">
    <h4>Our Services</h4>
    <ul>
      {{#each serviceLinks}}
      <li><a href="{{url}}">{{name}}</a></li>
      {{/each}}
    </ul>
  </div>
  <div class="footer-column">
    <h4>Connect</h4>
    <ul>
      {{#each socials}}
      <li><a href="{{url}}">{{name}}</a><svg viewBox="0 0 24 24" fill="currentColor">{{{icon}}}</svg></li>
      {{/each}}
    </ul>
  </div>
  <p class="footer-bottom">&copy; 2024 Omni Seq Pvt. Ltd. All rights reserved. | Enterprise Security with Local Expertise.</p>
</div>"#;

/// One renderable section: a compiled template bound to a container and its
/// data context.
#[derive(Debug, Clone)]
pub struct Section {
    container_id: &'static str,
    template: Template,
    context: Value,
}

impl Section {
    fn new(
        container_id: &'static str,
        source: &str,
        context: Value,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            container_id,
            template: Template::compile(source)?,
            context,
        })
    }

    pub fn container_id(&self) -> &'static str {
        self.container_id
    }

    /// The section's markup. Pure: same template and data, same output.
    pub fn markup(&self) -> String {
        self.template.render(&self.context)
    }
}

/// A section whose template failed to compile. The section cannot render;
/// the rest of the page is unaffected.
#[derive(Debug, Clone)]
pub struct SectionFailure {
    pub container_id: &'static str,
    pub error: TemplateError,
}

/// Renders the built-in sections into a [`MarkupHost`].
#[derive(Debug, Clone)]
pub struct ContentRenderer {
    sections: Vec<Section>,
    failures: Vec<SectionFailure>,
}

impl ContentRenderer {
    /// Compile the built-in sections. A malformed template drops only its own
    /// section, reported through [`ContentRenderer::failures`].
    pub fn new() -> Self {
        Self::from_specs(vec![
            (
                SERVICES_CONTAINER,
                SERVICE_TEMPLATE,
                json!({ "services": data::services() }),
            ),
            (
                INDUSTRIES_CONTAINER,
                INDUSTRY_TEMPLATE,
                json!({ "industries": data::industries() }),
            ),
            (
                FOOTER_CONTAINER,
                FOOTER_TEMPLATE,
                json!(data::footer()),
            ),
        ])
    }

    fn from_specs(specs: Vec<(&'static str, &str, Value)>) -> Self {
        let mut sections = Vec::new();
        let mut failures = Vec::new();
        for (container_id, source, context) in specs {
            match Section::new(container_id, source, context) {
                Ok(section) => sections.push(section),
                Err(error) => failures.push(SectionFailure {
                    container_id,
                    error,
                }),
            }
        }
        Self { sections, failures }
    }

    /// Render every compiled section into the host. Idempotent: repeated
    /// calls replace, never accumulate.
    pub fn render_all(&self, host: &mut impl MarkupHost) {
        for section in &self.sections {
            host.replace(section.container_id, &section.markup());
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn failures(&self) -> &[SectionFailure] {
        &self.failures
    }
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}
