//! omniseq, an interactive terminal brochure.
//!
//! Renders the Omni Seq page in the terminal: data-driven sections, a
//! validated contact form, and the animated hero (particles, glow orbs, a
//! pointer follower, parallax layers). Scrolling, pointer movement, and
//! resizes drive per-frame visual updates.

mod clipboard;
mod form;
mod hero;
mod journal;
mod page;

use std::io;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use omniseq_config::{ThemeManager, preferred_scheme};
use omniseq_content::{ContentRenderer, FOOTER_CONTAINER};
use omniseq_core::{Rect as PageRect, Theme, Vec2};
use omniseq_motion::MotionScene;
use ratatui::{
    DefaultTerminal, Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::form::{ContactForm, Field, Phase};
use crate::journal::SubmissionJournal;
use crate::page::{
    CELL_H, CELL_W, HEADER_ROWS, HERO_ROWS, HINT_ROWS, PageHost, PageLayout, STICKY_THRESHOLD_PX,
    TextKind,
};

/// Contact email surfaced on the page and copied on demand.
const CONTACT_EMAIL: &str = "hello@omniseq.com";
/// One wheel tick worth of scrolling.
const SCROLL_STEP_PX: f32 = 3.0 * CELL_H;
/// Per-frame easing toward the scroll target.
const SCROLL_EASE: f32 = 0.2;
/// How long the copied confirmation shows.
const COPIED_FLASH: Duration = Duration::from_secs(2);

/// Keyboard navigation shortcuts.
const SHORTCUTS: [(char, &str); 4] = [
    ('h', "#home"),
    ('s', "#services"),
    ('a', "#about"),
    ('c', "#contact"),
];

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let _ = execute!(io::stdout(), EnableMouseCapture);
    let result = App::new().run(terminal);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// The main application: page state, motion scene, and the contact form.
struct App {
    running: bool,
    started_at: Instant,
    theme: ThemeManager,
    host: PageHost,
    layout: PageLayout,
    /// Header navigation recovered from the rendered footer markup.
    nav: Vec<(String, String)>,
    scene: MotionScene,
    form: ContactForm,
    focus: Option<Field>,
    journal: SubmissionJournal,
    clipboard: Osc52Clipboard,
    copied_until: Option<Instant>,
    scroll_px: f32,
    target_px: f32,
    hovered: Option<String>,
    layout_width: u16,
}

impl App {
    fn new() -> Self {
        let renderer = ContentRenderer::new();
        let mut host = PageHost::standard();
        renderer.render_all(&mut host);

        let mut nav: Vec<(String, String)> = Vec::new();
        if let Some(markup) = host.markup(FOOTER_CONTAINER) {
            for (name, href) in page::anchor_links(markup) {
                if !nav.iter().any(|(_, existing)| existing == &href) {
                    nav.push((name, href));
                }
            }
        }

        let layout = PageLayout::build(80, &host);
        Self {
            running: false,
            started_at: Instant::now(),
            theme: ThemeManager::load_default(preferred_scheme()),
            host,
            layout,
            nav,
            scene: MotionScene::new(),
            form: ContactForm::new(),
            focus: None,
            journal: SubmissionJournal::new(),
            clipboard: Osc52Clipboard,
            copied_until: None,
            scroll_px: 0.0,
            target_px: 0.0,
            hovered: None,
            layout_width: 0,
        }
    }

    /// Run the application's main loop.
    fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Lay the page out for a new width and hand the motion scene its
    /// targets. Reveal state survives because targets are keyed by id.
    fn rebuild(&mut self, width: u16) {
        self.layout = PageLayout::build(width, &self.host);
        self.layout_width = width;
        for (id, rect) in self.layout.reveal_targets() {
            self.scene.observe(id, rect);
        }
        self.scene.set_hero_region(Some(self.layout.hero_rect()));
        self.scene.start();
    }

    /// Renders the page.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.width < 10 || area.height <= HEADER_ROWS + HINT_ROWS {
            return;
        }
        if area.width != self.layout_width {
            self.rebuild(area.width);
        }
        let viewport_rows = area.height - HEADER_ROWS - HINT_ROWS;

        // Smooth scroll: ease toward the target, feeding each change to the
        // scroll observers (coalesced there to one update per frame).
        let max_scroll = self.layout.max_scroll_px(viewport_rows);
        self.target_px = self.target_px.clamp(0.0, max_scroll);
        let delta = self.target_px - self.scroll_px;
        if delta.abs() > 0.5 {
            self.scroll_px += delta * SCROLL_EASE;
            self.scene.scrolled(self.scroll_px);
        } else if self.scroll_px != self.target_px {
            self.scroll_px = self.target_px;
            self.scene.scrolled(self.scroll_px);
        }

        let now = Instant::now();
        self.form.tick(now);
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }

        let viewport = PageRect::new(
            0.0,
            self.scroll_px,
            self.layout.width_px(),
            viewport_rows as f32 * CELL_H,
        );
        self.scene
            .advance(self.started_at.elapsed().as_millis() as u64, viewport);

        let theme = self.theme.current();
        frame.render_widget(
            Block::new().style(Style::new().bg(theme.bg()).fg(theme.fg())),
            area,
        );

        let scroll_row = (self.scroll_px / CELL_H) as u16;
        if scroll_row < HERO_ROWS {
            let visible = (HERO_ROWS - scroll_row).min(viewport_rows);
            let hero_area = Rect::new(area.x, area.y + HEADER_ROWS, area.width, visible);
            hero::render(frame, hero_area, scroll_row, &self.scene, theme);
        }

        self.draw_elements(frame, area, scroll_row, viewport_rows, theme);
        self.draw_contact(frame, area, scroll_row, viewport_rows, theme);
        self.draw_header(frame, area, theme);
        self.draw_hints(frame, area, theme);
    }

    fn draw_elements(
        &self,
        frame: &mut Frame,
        area: Rect,
        scroll_row: u16,
        viewport_rows: u16,
        theme: Theme,
    ) {
        for element in &self.layout.elements {
            if element.lines.is_empty() {
                continue;
            }
            let id = element.id.as_deref();
            let opacity = id.map_or(1.0, |id| self.scene.opacity(id));
            if opacity <= 0.0 {
                continue;
            }
            let rise_rows = id.map_or(0, |id| (self.scene.rise(id) / CELL_H).round() as u16);
            let dim = match (&self.hovered, id) {
                (Some(hovered), Some(id))
                    if hovered.starts_with("service-")
                        && id.starts_with("service-")
                        && hovered != id =>
                {
                    0.5
                }
                _ => 1.0,
            };
            for (index, line) in element.lines.iter().enumerate() {
                let page_row = element.row + index as u16 + rise_rows;
                let Some(screen_row) = visible_row(page_row, scroll_row, viewport_rows) else {
                    continue;
                };
                let text_area = Rect::new(
                    area.x + 2,
                    area.y + HEADER_ROWS + screen_row,
                    area.width.saturating_sub(2),
                    1,
                );
                frame.render_widget(
                    Paragraph::new(line.text.as_str())
                        .style(line_style(line.kind, theme, opacity * dim)),
                    text_area,
                );
            }
        }
    }

    /// The contact box rows are drawn from live form state every frame.
    fn draw_contact(
        &self,
        frame: &mut Frame,
        area: Rect,
        scroll_row: u16,
        viewport_rows: u16,
        theme: Theme,
    ) {
        let contact = self.layout.contact;
        let opacity = self.scene.opacity("contact-box");
        if opacity <= 0.0 {
            return;
        }
        let line_area = |screen_row: u16| {
            Rect::new(
                area.x + 2,
                area.y + HEADER_ROWS + screen_row,
                area.width.saturating_sub(2),
                1,
            )
        };

        if let Some(row) = visible_row(contact.email_row, scroll_row, viewport_rows) {
            let (text, style) = if self.copied_until.is_some() {
                (
                    format!("Email: {CONTACT_EMAIL}  ✓ Copied!"),
                    Style::new().fg(theme.success()),
                )
            } else {
                (
                    format!("Email: {CONTACT_EMAIL}  (e to copy)"),
                    Style::new().fg(theme.faded(opacity)),
                )
            };
            frame.render_widget(Paragraph::new(text).style(style), line_area(row));
        }

        for (field, page_row) in Field::ALL.into_iter().zip(contact.field_rows) {
            let Some(row) = visible_row(page_row, scroll_row, viewport_rows) else {
                continue;
            };
            let focused = self.focus == Some(field);
            let marker = if focused { ">" } else { " " };
            let cursor = if focused { "_" } else { "" };
            let label = format!("{}:", field.label());
            let text = format!("{marker} {label:<9} {}{cursor}", self.form.field(field));
            let style = if focused {
                Style::new().fg(theme.accent())
            } else {
                Style::new().fg(theme.faded(opacity))
            };
            frame.render_widget(Paragraph::new(text).style(style), line_area(row));
        }

        if let Some(row) = visible_row(contact.status_row, scroll_row, viewport_rows) {
            let (text, style) = match self.form.phase() {
                Phase::Idle => (
                    "Tab edits the fields, Enter sends.".to_string(),
                    Style::new().fg(theme.muted()),
                ),
                Phase::ErrorShown { message, .. } => {
                    (message.clone(), Style::new().fg(theme.error()))
                }
                Phase::SuccessShown { message, .. } => {
                    (message.clone(), Style::new().fg(theme.success()))
                }
            };
            frame.render_widget(Paragraph::new(text).style(style), line_area(row));
        }
    }

    /// Sticky header; restyles once the page scrolls past the threshold.
    fn draw_header(&self, frame: &mut Frame, area: Rect, theme: Theme) {
        let scrolled = self.scroll_px > STICKY_THRESHOLD_PX;
        let mut spans = vec![Span::styled(
            " Omni Seq ",
            Style::new().fg(theme.accent()).bold(),
        )];
        for (name, _) in &self.nav {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(name.clone(), Style::new().fg(theme.fg())));
        }
        let base = if scrolled {
            Style::new().bg(theme.accent_faded(0.2))
        } else {
            Style::new().bg(theme.bg())
        };
        let header_area = Rect::new(area.x, area.y, area.width, HEADER_ROWS);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), header_area);
    }

    fn draw_hints(&self, frame: &mut Frame, area: Rect, theme: Theme) {
        let key = |text: &'static str| Span::styled(text, Style::new().fg(theme.accent()).bold());
        let gap = |text: &'static str| Span::styled(text, Style::new().fg(theme.muted()));
        let help = Line::from(vec![
            key(" q"),
            gap(" quit  "),
            key("t"),
            gap(" theme  "),
            key("h/s/a/c"),
            gap(" sections  "),
            key("e"),
            gap(" copy email  "),
            key("Tab"),
            gap(" contact form"),
        ]);
        let hint_area = Rect::new(area.x, area.y + area.height - HINT_ROWS, area.width, HINT_ROWS);
        frame.render_widget(Paragraph::new(help), hint_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        if let Some(field) = self.focus {
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
                (_, KeyCode::Esc) => self.focus = None,
                (_, KeyCode::Tab) => self.focus = Some(field.next()),
                (_, KeyCode::BackTab) => self.focus = Some(field.previous()),
                (_, KeyCode::Enter) => self.submit(),
                (_, KeyCode::Backspace) => self.form.backspace(field),
                (_, KeyCode::Char(c)) => self.form.push_char(field, c),
                _ => {}
            }
            return;
        }
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => {
                self.theme.toggle();
            }
            (_, KeyCode::Char('e')) => self.copy_email(),
            (_, KeyCode::Tab) => {
                self.focus = Some(Field::Name);
                self.jump("#contact");
            }
            (_, KeyCode::Down) => self.target_px += CELL_H,
            (_, KeyCode::Up) => self.target_px = (self.target_px - CELL_H).max(0.0),
            (_, KeyCode::PageDown) => self.target_px += 10.0 * CELL_H,
            (_, KeyCode::PageUp) => self.target_px = (self.target_px - 10.0 * CELL_H).max(0.0),
            (modifiers, KeyCode::Char(c))
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some((_, href)) = SHORTCUTS.iter().find(|(shortcut, _)| *shortcut == c) {
                    self.jump(href);
                }
            }
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.target_px += SCROLL_STEP_PX,
            MouseEventKind::ScrollUp => {
                self.target_px = (self.target_px - SCROLL_STEP_PX).max(0.0);
            }
            MouseEventKind::Moved => match self.page_point(mouse.column, mouse.row) {
                Some(point) => {
                    self.scene.pointer_moved(point);
                    self.hovered = self.layout.card_at(point).map(str::to_string);
                }
                None => {
                    self.scene.pointer_left();
                    self.hovered = None;
                }
            },
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(point) = self.page_point(mouse.column, mouse.row) {
                    self.on_click(point);
                }
            }
            _ => {}
        }
    }

    /// Screen cell → page-space point; the header row is not page content.
    fn page_point(&self, column: u16, row: u16) -> Option<Vec2> {
        if row < HEADER_ROWS {
            return None;
        }
        let content_row = row - HEADER_ROWS;
        Some(Vec2::new(
            column as f32 * CELL_W,
            content_row as f32 * CELL_H + self.scroll_px,
        ))
    }

    fn on_click(&mut self, point: Vec2) {
        let row = (point.y / CELL_H) as u16;
        let contact = self.layout.contact;
        if row == contact.email_row {
            self.copy_email();
            return;
        }
        if let Some(index) = contact.field_rows.iter().position(|r| *r == row) {
            self.focus = Some(Field::ALL[index]);
        }
    }

    fn jump(&mut self, href: &str) {
        if let Some(px) = self.layout.anchor_scroll_px(href) {
            self.target_px = px;
        }
    }

    fn submit(&mut self) {
        if let Some(submission) = self.form.submit(Instant::now()) {
            self.journal.record(&submission, Utc::now());
            self.focus = None;
        }
    }

    /// Copy the contact email, best-effort. Failure falls back silently.
    fn copy_email(&mut self) {
        if self.clipboard.copy(CONTACT_EMAIL) {
            self.copied_until = Some(Instant::now() + COPIED_FLASH);
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

fn visible_row(page_row: u16, scroll_row: u16, viewport_rows: u16) -> Option<u16> {
    if page_row < scroll_row {
        return None;
    }
    let row = page_row - scroll_row;
    (row < viewport_rows).then_some(row)
}

fn line_style(kind: TextKind, theme: Theme, intensity: f32) -> Style {
    match kind {
        TextKind::Heading => Style::new().fg(theme.accent_faded(intensity)).bold(),
        TextKind::SubHeading => Style::new().fg(theme.faded(intensity)).bold(),
        TextKind::Body | TextKind::Bullet => Style::new().fg(theme.faded(intensity)),
        TextKind::Muted => Style::new().fg(theme.faded(intensity * 0.55)),
    }
}
