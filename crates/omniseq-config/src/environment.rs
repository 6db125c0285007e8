//! Environment color-scheme preference.

use omniseq_core::Theme;

/// Best-effort read of the terminal's preferred scheme from the `COLORFGBG`
/// convention. Unset or unparseable means "no preference".
pub fn preferred_scheme() -> Option<Theme> {
    scheme_from_colorfgbg(&std::env::var("COLORFGBG").ok()?)
}

/// `COLORFGBG` is `<fg>;<bg>` (some terminals add a middle field); ANSI
/// background codes 0-6 and 8 are dark.
pub(crate) fn scheme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(match bg {
        0..=6 | 8 => Theme::Dark,
        _ => Theme::Light,
    })
}
