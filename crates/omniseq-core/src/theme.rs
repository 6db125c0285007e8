//! Binary color scheme.

use ratatui::style::Color;

/// The page's color scheme. The persisted form is the lowercase name;
/// an absent preference means "unset", not light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Flip to the other scheme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The literal name stored on disk.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored name. Anything else is treated as unset.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    fn bg_rgb(self) -> (u8, u8, u8) {
        match self {
            Theme::Light => (252, 252, 249),
            Theme::Dark => (19, 23, 24),
        }
    }

    fn fg_rgb(self) -> (u8, u8, u8) {
        match self {
            Theme::Light => (19, 52, 59),
            Theme::Dark => (227, 232, 230),
        }
    }

    pub fn bg(self) -> Color {
        rgb(self.bg_rgb())
    }

    pub fn fg(self) -> Color {
        rgb(self.fg_rgb())
    }

    fn accent_rgb(self) -> (u8, u8, u8) {
        match self {
            Theme::Light => (33, 128, 141),
            Theme::Dark => (50, 184, 198),
        }
    }

    /// Brand teal, slightly brightened on dark backgrounds.
    pub fn accent(self) -> Color {
        rgb(self.accent_rgb())
    }

    /// Accent faded toward the background; `t` of 1.0 is the full accent.
    pub fn accent_faded(self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (br, bg_, bb) = self.bg_rgb();
        let (ar, ag, ab) = self.accent_rgb();
        Color::Rgb(lerp(br, ar, t), lerp(bg_, ag, t), lerp(bb, ab, t))
    }

    pub fn muted(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(98, 108, 113),
            Theme::Dark => Color::Rgb(119, 124, 124),
        }
    }

    pub fn success(self) -> Color {
        self.accent()
    }

    pub fn error(self) -> Color {
        match self {
            Theme::Light => Color::Rgb(192, 21, 47),
            Theme::Dark => Color::Rgb(255, 84, 89),
        }
    }

    /// Foreground faded toward the background; `t` of 1.0 is full foreground,
    /// 0.0 disappears into the page.
    pub fn faded(self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (br, bg_, bb) = self.bg_rgb();
        let (fr, fg_, fb) = self.fg_rgb();
        Color::Rgb(lerp(br, fr, t), lerp(bg_, fg_, t), lerp(bb, fb, t))
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(Theme::from_name(Theme::Light.name()), Some(Theme::Light));
        assert_eq!(Theme::from_name(Theme::Dark.name()), Some(Theme::Dark));
        assert_eq!(Theme::from_name("solarized"), None);
    }

    #[test]
    fn test_faded_endpoints() {
        assert_eq!(Theme::Dark.faded(0.0), Theme::Dark.bg());
        assert_eq!(Theme::Dark.faded(1.0), Theme::Dark.fg());
    }
}
