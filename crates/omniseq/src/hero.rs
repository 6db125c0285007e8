//! The animated hero region.
//!
//! Composes the decorative layers cell by cell: dotted grid, two glow orbs,
//! the particle field, and the pointer follower. Layer offsets come from the
//! motion scene each frame.

use std::collections::HashMap;

use omniseq_core::Theme;
use omniseq_motion::MotionScene;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::page::{CELL_H, CELL_W, HERO_ROWS};

/// Orb centers relative to the hero region.
const ORB_CENTERS: [(f32, f32); 2] = [(0.25, 0.35), (0.75, 0.65)];
/// Orb radius relative to the hero height.
const ORB_RADIUS: f32 = 0.8;
/// Grid spacing in cells.
const GRID_COLS: i32 = 8;
const GRID_ROWS: i32 = 3;

const TITLE: &str = "O M N I   S E Q";
const TAGLINE: &str = "Enterprise Security with Local Expertise";

/// Render the hero rows `first_row..first_row + area.height` into `area`.
pub fn render(frame: &mut Frame, area: Rect, first_row: u16, scene: &MotionScene, theme: Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let offsets = scene.layer_offsets();
    let hero_w = area.width as f32 * CELL_W;
    let hero_h = HERO_ROWS as f32 * CELL_H;

    // Bucket particles by cell up front; the per-cell pass stays cheap.
    let mut particle_cells: HashMap<(u16, u16), (f32, f32)> = HashMap::new();
    if let Some(field) = scene.particles() {
        for particle in field.particles() {
            let col = (particle.position.x / CELL_W) as u16;
            let row = (particle.position.y / CELL_H) as u16;
            particle_cells.insert((col, row), (particle.size, particle.opacity));
        }
    }
    let follower_cell = scene.follower_position().map(|position| {
        (
            (position.x / CELL_W) as u16,
            (position.y / CELL_H) as u16,
        )
    });

    let grid_shift = (
        (offsets.grid.0 / CELL_W).round() as i32,
        (offsets.grid.1 / CELL_H).round() as i32,
    );

    let lines: Vec<Line> = (0..area.height)
        .map(|screen_y| {
            let hero_row = first_row + screen_y;
            let spans: Vec<Span> = (0..area.width)
                .map(|col| {
                    render_cell(
                        col,
                        hero_row,
                        hero_w,
                        hero_h,
                        theme,
                        &offsets.orbs,
                        grid_shift,
                        &particle_cells,
                        follower_cell,
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    // Title overlay over the middle of the hero.
    let title_row: u16 = HERO_ROWS / 2 - 1;
    for (offset, text, style) in [
        (0u16, TITLE, Style::new().fg(theme.accent()).bold()),
        (2u16, TAGLINE, Style::new().fg(theme.fg())),
    ] {
        let row = title_row + offset;
        if row >= first_row && row < first_row + area.height {
            let overlay = Rect::new(area.x, area.y + (row - first_row), area.width, 1);
            frame.render_widget(
                Paragraph::new(text).alignment(Alignment::Center).style(style),
                overlay,
            );
        }
    }
}

/// Pick the glyph for one hero cell: follower on top, then particles, orbs,
/// and the grid.
fn render_cell(
    col: u16,
    row: u16,
    hero_w: f32,
    hero_h: f32,
    theme: Theme,
    orb_offsets: &[(f32, f32); 2],
    grid_shift: (i32, i32),
    particle_cells: &HashMap<(u16, u16), (f32, f32)>,
    follower_cell: Option<(u16, u16)>,
) -> Span<'static> {
    if follower_cell == Some((col, row)) {
        return Span::styled("◎", Style::new().fg(theme.accent()).bold());
    }

    if let Some(&(size, opacity)) = particle_cells.get(&(col, row)) {
        let ch = if size < 1.7 {
            "·"
        } else if size < 2.4 {
            "•"
        } else {
            "●"
        };
        return Span::styled(ch, Style::new().fg(theme.accent_faded(0.4 + opacity)));
    }

    let px = (col as f32 + 0.5) * CELL_W;
    let py = (row as f32 + 0.5) * CELL_H;
    let radius = hero_h * ORB_RADIUS;
    for (index, (cx_rel, cy_rel)) in ORB_CENTERS.iter().enumerate() {
        let cx = cx_rel * hero_w + orb_offsets[index].0;
        let cy = cy_rel * hero_h + orb_offsets[index].1;
        let dx = (px - cx) / radius;
        let dy = (py - cy) / radius;
        let intensity = 1.0 - (dx * dx + dy * dy).sqrt();
        if intensity > 0.0 {
            let ch = if intensity > 0.7 {
                "▓"
            } else if intensity > 0.45 {
                "▒"
            } else if intensity > 0.2 {
                "░"
            } else {
                continue;
            };
            return Span::styled(ch, Style::new().fg(theme.accent_faded(0.15 + intensity * 0.35)));
        }
    }

    let on_grid = (col as i32 - grid_shift.0).rem_euclid(GRID_COLS) == 0
        && (row as i32 - grid_shift.1).rem_euclid(GRID_ROWS) == 0;
    if on_grid {
        Span::styled("·", Style::new().fg(theme.faded(0.25)))
    } else {
        Span::raw(" ")
    }
}
