//! The page model: markup projection, layout, and navigation targets.
//!
//! Rendered section markup is the interface between content and
//! presentation. This module tokenizes it, projects block-level text into
//! styled terminal lines, and lays the page out in virtual pixels so the
//! motion scene can observe it.

use std::collections::HashMap;

use html5gum::{Token, Tokenizer};
use omniseq_content::{
    FOOTER_CONTAINER, INDUSTRIES_CONTAINER, MarkupHost, SERVICES_CONTAINER,
};
use omniseq_core::{Rect, Vec2};

/// Virtual-pixel size of one terminal cell.
pub const CELL_W: f32 = 8.0;
pub const CELL_H: f32 = 16.0;

/// Screen rows reserved for the sticky header.
pub const HEADER_ROWS: u16 = 1;
/// Screen rows reserved for the key hints at the bottom.
pub const HINT_ROWS: u16 = 1;
/// Page rows the animated hero occupies.
pub const HERO_ROWS: u16 = 12;

/// Navigation jumps land this far above their section, clearing the header.
const ANCHOR_CLEARANCE_PX: f32 = 80.0;
/// The header restyles once scrolled past this point.
pub const STICKY_THRESHOLD_PX: f32 = 50.0;

/// Style class of one projected line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Heading,
    SubHeading,
    Body,
    Bullet,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub kind: TextKind,
    pub text: String,
}

/// The page's container set; the markup host the content renderer fills.
#[derive(Debug, Default)]
pub struct PageHost {
    containers: HashMap<String, String>,
}

impl PageHost {
    /// A host with the standard three containers present and empty.
    pub fn standard() -> Self {
        Self::with_containers(&[SERVICES_CONTAINER, INDUSTRIES_CONTAINER, FOOTER_CONTAINER])
    }

    pub fn with_containers(ids: &[&str]) -> Self {
        Self {
            containers: ids
                .iter()
                .map(|id| (id.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn markup(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }
}

impl MarkupHost for PageHost {
    fn replace(&mut self, container_id: &str, markup: &str) -> bool {
        match self.containers.get_mut(container_id) {
            Some(slot) => {
                *slot = markup.to_string();
                true
            }
            None => false,
        }
    }
}

/// One card extracted from container markup: a top-level element and the
/// block-level text runs inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupCard {
    /// The element's `data-card` attribute, if present.
    pub tag: Option<String>,
    pub lines: Vec<TextLine>,
}

/// Split container markup into cards at its top-level `div`s and project the
/// block-level text inside each. Vector fragments carry no text and vanish.
pub fn parse_cards(markup: &str) -> Vec<MarkupCard> {
    let mut cards: Vec<MarkupCard> = Vec::new();
    let mut depth = 0usize;
    let mut open_kind: Option<TextKind> = None;
    let mut text = String::new();

    for token in Tokenizer::new(markup).flatten() {
        match token {
            Token::StartTag(tag) => {
                let name = String::from_utf8_lossy(&tag.name).into_owned();
                if depth == 0 && name == "div" {
                    let id = tag
                        .attributes
                        .iter()
                        .find(|(key, _)| String::from_utf8_lossy(key) == "data-card")
                        .map(|(_, value)| String::from_utf8_lossy(value).into_owned());
                    cards.push(MarkupCard {
                        tag: id,
                        lines: Vec::new(),
                    });
                }
                if let Some(kind) = block_kind(&name) {
                    open_kind = Some(kind);
                    text.clear();
                }
                if !tag.self_closing {
                    depth += 1;
                }
            }
            Token::EndTag(tag) => {
                let name = String::from_utf8_lossy(&tag.name).into_owned();
                if block_kind(&name).is_some()
                    && let Some(kind) = open_kind.take()
                {
                    let collapsed = collapse_text(&text);
                    if !collapsed.is_empty()
                        && let Some(card) = cards.last_mut()
                    {
                        card.lines.push(TextLine {
                            kind,
                            text: collapsed,
                        });
                    }
                    text.clear();
                }
                depth = depth.saturating_sub(1);
            }
            Token::String(s) => {
                if open_kind.is_some() {
                    text.push_str(&String::from_utf8_lossy(&s));
                }
            }
            _ => {}
        }
    }
    cards
}

/// Anchor links (`href="#..."`) present in markup, with their link text, in
/// document order.
pub fn anchor_links(markup: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut open_href: Option<String> = None;
    let mut text = String::new();

    for token in Tokenizer::new(markup).flatten() {
        match token {
            Token::StartTag(tag) => {
                if String::from_utf8_lossy(&tag.name) == "a" {
                    let href = tag
                        .attributes
                        .iter()
                        .find(|(key, _)| String::from_utf8_lossy(key) == "href")
                        .map(|(_, value)| String::from_utf8_lossy(value).into_owned());
                    if let Some(href) = href
                        && href.starts_with('#')
                    {
                        open_href = Some(href);
                        text.clear();
                    }
                }
            }
            Token::EndTag(tag) => {
                if String::from_utf8_lossy(&tag.name) == "a"
                    && let Some(href) = open_href.take()
                {
                    let label = collapse_text(&text);
                    if !label.is_empty() {
                        links.push((label, href));
                    }
                }
            }
            Token::String(s) => {
                if open_href.is_some() {
                    text.push_str(&String::from_utf8_lossy(&s));
                }
            }
            _ => {}
        }
    }
    links
}

fn block_kind(tag_name: &str) -> Option<TextKind> {
    match tag_name {
        "h3" => Some(TextKind::Heading),
        "h4" => Some(TextKind::SubHeading),
        "p" => Some(TextKind::Body),
        "li" => Some(TextKind::Bullet),
        _ => None,
    }
}

/// Collapse runs of whitespace and decode any remaining entity references.
fn collapse_text(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap. Words longer than the width stand alone.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line = word.to_string();
        } else if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// One laid-out page element.
#[derive(Debug, Clone)]
pub struct Element {
    /// Reveal/hover identity; static furniture has none.
    pub id: Option<String>,
    /// First page row.
    pub row: u16,
    /// Rows occupied, including any rows drawn dynamically.
    pub height: u16,
    pub lines: Vec<TextLine>,
}

/// Fixed rows of the contact box within the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactRows {
    pub email_row: u16,
    pub field_rows: [u16; 4],
    pub status_row: u16,
}

/// The laid-out page. Rebuilt whenever the terminal width changes; reveal
/// state survives the rebuild because targets are keyed by id.
#[derive(Debug)]
pub struct PageLayout {
    pub width: u16,
    pub elements: Vec<Element>,
    pub total_rows: u16,
    pub contact: ContactRows,
    anchors: Vec<(String, u16)>,
}

impl PageLayout {
    pub fn build(width: u16, host: &PageHost) -> Self {
        let content_width = (width.saturating_sub(4) as usize).clamp(20, 76);
        let mut elements: Vec<Element> = Vec::new();
        let mut anchors: Vec<(String, u16)> = Vec::new();
        let mut row: u16 = 0;

        // Hero: drawn live by the hero renderer, the layout only reserves rows.
        anchors.push(("#home".to_string(), 0));
        row += HERO_ROWS;

        // Services.
        row += 1;
        anchors.push(("#services".to_string(), row));
        row = push_lines(
            &mut elements,
            row,
            None,
            vec![heading("Our Services")],
        );
        row += 1;
        if let Some(markup) = host.markup(SERVICES_CONTAINER) {
            for (index, card) in parse_cards(markup).into_iter().enumerate() {
                let id = match &card.tag {
                    Some(tag) => format!("service-{tag}"),
                    None => format!("service-{index}"),
                };
                row = push_card(&mut elements, row, id, card.lines, content_width);
                row += 1;
            }
        }

        // Industries.
        row += 1;
        anchors.push(("#industries".to_string(), row));
        row = push_lines(
            &mut elements,
            row,
            None,
            vec![heading("Industries We Serve")],
        );
        row += 1;
        if let Some(markup) = host.markup(INDUSTRIES_CONTAINER) {
            for (index, card) in parse_cards(markup).into_iter().enumerate() {
                let id = format!("industry-{index}");
                row = push_card(&mut elements, row, id, card.lines, content_width);
                row += 1;
            }
        }

        // About.
        row += 1;
        anchors.push(("#about".to_string(), row));
        row = push_lines(&mut elements, row, None, vec![heading("About Omni Seq")]);
        row += 1;
        row = push_card(
            &mut elements,
            row,
            "about".to_string(),
            vec![TextLine {
                kind: TextKind::Body,
                text: ABOUT_TEXT.to_string(),
            }],
            content_width,
        );

        // Contact: a fixed-shape box whose field rows are drawn each frame.
        row += 2;
        anchors.push(("#contact".to_string(), row));
        row = push_lines(&mut elements, row, None, vec![heading("Contact")]);
        row += 1;
        let contact = ContactRows {
            email_row: row,
            field_rows: [row + 2, row + 3, row + 4, row + 5],
            status_row: row + 7,
        };
        let contact_height = 8;
        elements.push(Element {
            id: Some("contact-box".to_string()),
            row,
            height: contact_height,
            lines: Vec::new(),
        });
        row += contact_height;

        // Footer.
        row += 2;
        if let Some(markup) = host.markup(FOOTER_CONTAINER) {
            for card in parse_cards(markup) {
                let muted = card
                    .lines
                    .into_iter()
                    .map(|line| TextLine {
                        kind: if line.kind == TextKind::Body || line.kind == TextKind::Bullet {
                            TextKind::Muted
                        } else {
                            line.kind
                        },
                        text: line.text,
                    })
                    .collect();
                row = push_wrapped(&mut elements, row, None, muted, content_width);
            }
        }
        row += 1;

        Self {
            width,
            elements,
            total_rows: row,
            contact,
            anchors,
        }
    }

    pub fn width_px(&self) -> f32 {
        self.width as f32 * CELL_W
    }

    /// Hero region in page space.
    pub fn hero_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_px(), HERO_ROWS as f32 * CELL_H)
    }

    /// Page row a navigation target points at, e.g. `#services`.
    pub fn anchor_row(&self, href: &str) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(name, _)| name == href)
            .map(|(_, row)| *row)
    }

    /// Scroll position a navigation jump should land on.
    pub fn anchor_scroll_px(&self, href: &str) -> Option<f32> {
        self.anchor_row(href)
            .map(|row| (row as f32 * CELL_H - ANCHOR_CLEARANCE_PX).max(0.0))
    }

    /// Reveal targets: every element with an identity, as page-space rects.
    pub fn reveal_targets(&self) -> impl Iterator<Item = (&str, Rect)> {
        let width_px = self.width_px();
        self.elements.iter().filter_map(move |element| {
            element.id.as_deref().map(|id| {
                (
                    id,
                    Rect::new(
                        0.0,
                        element.row as f32 * CELL_H,
                        width_px,
                        element.height as f32 * CELL_H,
                    ),
                )
            })
        })
    }

    /// The identified element under a page-space point, if any.
    pub fn card_at(&self, point: Vec2) -> Option<&str> {
        let width_px = self.width_px();
        self.elements.iter().find_map(|element| {
            let rect = Rect::new(
                0.0,
                element.row as f32 * CELL_H,
                width_px,
                element.height as f32 * CELL_H,
            );
            if rect.contains(point) {
                element.id.as_deref()
            } else {
                None
            }
        })
    }

    /// Largest useful scroll offset for a viewport of the given rows.
    pub fn max_scroll_px(&self, viewport_rows: u16) -> f32 {
        (self.total_rows.saturating_sub(viewport_rows) as f32 * CELL_H).max(0.0)
    }
}

const ABOUT_TEXT: &str = "Omni Seq is an enterprise-grade cybersecurity partner delivering \
global-standard security practices with deep local expertise. From assessment to operations, \
our teams secure banking, healthcare, enterprise, and government environments around the clock.";

fn heading(text: &str) -> TextLine {
    TextLine {
        kind: TextKind::Heading,
        text: text.to_string(),
    }
}

fn push_lines(elements: &mut Vec<Element>, row: u16, id: Option<String>, lines: Vec<TextLine>) -> u16 {
    let height = lines.len() as u16;
    elements.push(Element {
        id,
        row,
        height,
        lines,
    });
    row + height
}

fn push_card(
    elements: &mut Vec<Element>,
    row: u16,
    id: String,
    lines: Vec<TextLine>,
    content_width: usize,
) -> u16 {
    push_wrapped(elements, row, Some(id), lines, content_width)
}

fn push_wrapped(
    elements: &mut Vec<Element>,
    row: u16,
    id: Option<String>,
    lines: Vec<TextLine>,
    content_width: usize,
) -> u16 {
    let mut wrapped = Vec::new();
    for line in lines {
        match line.kind {
            TextKind::Bullet => {
                for (index, piece) in wrap(&line.text, content_width.saturating_sub(2)).into_iter().enumerate() {
                    let text = if index == 0 {
                        format!("• {piece}")
                    } else {
                        format!("  {piece}")
                    };
                    wrapped.push(TextLine {
                        kind: line.kind,
                        text,
                    });
                }
            }
            _ => {
                for piece in wrap(&line.text, content_width) {
                    wrapped.push(TextLine {
                        kind: line.kind,
                        text: piece,
                    });
                }
            }
        }
    }
    push_lines(elements, row, id, wrapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use omniseq_content::ContentRenderer;

    fn rendered_host() -> PageHost {
        let mut host = PageHost::standard();
        ContentRenderer::new().render_all(&mut host);
        host
    }

    #[test]
    fn test_host_rejects_unknown_container() {
        let mut host = PageHost::standard();
        assert!(!host.replace("sidebar", "<p>x</p>"));
        assert!(host.replace(SERVICES_CONTAINER, "<p>x</p>"));
    }

    #[test]
    fn test_parse_cards_splits_and_classifies() {
        let markup = r#"
            <div class="service-card" data-card="alpha">
              <svg viewBox="0 0 24 24"><path d="M1 1"/></svg>
              <h3>Alpha &amp; Co</h3>
              <p>Something useful.</p>
              <ul><li>One</li><li>Two</li></ul>
            </div>
            <div class="service-card">
              <h3>Beta</h3>
            </div>
        "#;
        let cards = parse_cards(markup);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].tag.as_deref(), Some("alpha"));
        assert_eq!(cards[0].lines[0].kind, TextKind::Heading);
        assert_eq!(cards[0].lines[0].text, "Alpha & Co");
        assert_eq!(cards[0].lines[1].kind, TextKind::Body);
        assert_eq!(
            cards[0].lines[2..]
                .iter()
                .map(|l| l.text.as_str())
                .collect::<Vec<_>>(),
            vec!["One", "Two"]
        );
        assert_eq!(cards[1].tag, None);
        assert_eq!(cards[1].lines.len(), 1);
    }

    #[test]
    fn test_icon_fragments_vanish() {
        let markup = r#"<div><svg><path d="M9 12l2 2"/><circle cx="4" cy="4" r="2"/></svg><h3>T</h3></div>"#;
        let cards = parse_cards(markup);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].lines.len(), 1);
        assert_eq!(cards[0].lines[0].text, "T");
    }

    #[test]
    fn test_anchor_links_extracted_in_order() {
        let markup = r##"
            <ul>
              <li><a href="#home">Home</a></li>
              <li><a href="#services">Services</a></li>
              <li><a href="https://example.com">External</a></li>
            </ul>
        "##;
        let links = anchor_links(markup);
        assert_eq!(
            links,
            vec![
                ("Home".to_string(), "#home".to_string()),
                ("Services".to_string(), "#services".to_string()),
            ]
        );
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        for line in &lines {
            assert!(line.chars().count() <= 9);
        }
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_layout_has_service_cards_in_order() {
        let layout = PageLayout::build(100, &rendered_host());
        let ids: Vec<_> = layout
            .elements
            .iter()
            .filter_map(|e| e.id.as_deref())
            .filter(|id| id.starts_with("service-"))
            .collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(ids[0], "service-vapt-testing");
        assert_eq!(ids[5], "service-managed-services");

        let rows: Vec<_> = layout
            .elements
            .iter()
            .filter(|e| e.id.as_deref().is_some_and(|id| id.starts_with("service-")))
            .map(|e| e.row)
            .collect();
        let mut sorted = rows.clone();
        sorted.sort_unstable();
        assert_eq!(rows, sorted);
    }

    #[test]
    fn test_layout_anchors_cover_navigation() {
        let layout = PageLayout::build(100, &rendered_host());
        assert_eq!(layout.anchor_row("#home"), Some(0));
        for href in ["#services", "#about", "#contact"] {
            assert!(layout.anchor_row(href).is_some(), "{href} missing");
        }
        assert_eq!(layout.anchor_row("#nowhere"), None);
        assert_eq!(layout.anchor_scroll_px("#home"), Some(0.0));
    }

    #[test]
    fn test_layout_rebuild_is_deterministic() {
        let host = rendered_host();
        let a = PageLayout::build(100, &host);
        let b = PageLayout::build(100, &host);
        assert_eq!(a.total_rows, b.total_rows);
        let rows_a: Vec<_> = a.elements.iter().map(|e| (e.id.clone(), e.row)).collect();
        let rows_b: Vec<_> = b.elements.iter().map(|e| (e.id.clone(), e.row)).collect();
        assert_eq!(rows_a, rows_b);
    }

    #[test]
    fn test_card_at_finds_service_card() {
        let layout = PageLayout::build(100, &rendered_host());
        let (id, rect) = layout
            .reveal_targets()
            .find(|(id, _)| id.starts_with("service-"))
            .map(|(id, rect)| (id.to_string(), rect))
            .unwrap();
        let point = Vec2::new(rect.x + 1.0, rect.y + 1.0);
        assert_eq!(layout.card_at(point), Some(id.as_str()));
    }

    #[test]
    fn test_missing_container_skips_section() {
        // Footer absent: the layout still builds with the other sections.
        let mut host = PageHost::with_containers(&[SERVICES_CONTAINER, INDUSTRIES_CONTAINER]);
        ContentRenderer::new().render_all(&mut host);
        let layout = PageLayout::build(100, &host);
        assert!(layout.total_rows > 0);
        assert!(
            layout
                .elements
                .iter()
                .any(|e| e.id.as_deref() == Some("service-vapt-testing"))
        );
    }
}
