//! Data-driven content for the omniseq brochure.
//!
//! This crate projects a small set of static data tables (services,
//! industries, footer) through string templates into markup fragments, and
//! injects each fragment into a host container. Rendering is a pure
//! projection: records are never mutated, output order is source order, and
//! repeated renders replace rather than accumulate.

mod data;
mod render;
mod template;

pub use data::{
    FooterData, IndustryRecord, QuickLink, ServiceRecord, SocialLink, footer, industries,
    services,
};
pub use render::{
    ContentRenderer, FOOTER_CONTAINER, INDUSTRIES_CONTAINER, MarkupHost, Section, SectionFailure,
    SERVICES_CONTAINER,
};
pub use template::{Template, TemplateError};
