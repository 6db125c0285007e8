//! Theme preference for the omniseq brochure.
//!
//! One durable key (`theme` in `config.toml`) holding `light` or `dark`;
//! absence means unset. Resolution order at startup: persisted value, then
//! the environment's preferred scheme, then dark. Only the explicit toggle
//! ever writes.

mod environment;
mod settings;

use std::path::PathBuf;

use omniseq_core::Theme;

pub use environment::preferred_scheme;
pub use settings::{Settings, SettingsError};

/// Owns the current theme and the single persisting writer path.
#[derive(Debug)]
pub struct ThemeManager {
    path: Option<PathBuf>,
    current: Theme,
    persisted: Option<Theme>,
}

impl ThemeManager {
    /// Resolve the startup theme. Reading never persists anything; an
    /// unreadable file counts as unset.
    pub fn load(path: PathBuf, environment: Option<Theme>) -> Self {
        let settings = Settings::load(&path).unwrap_or_default();
        let persisted = settings.theme.as_deref().and_then(Theme::from_name);
        let current = persisted.or(environment).unwrap_or(Theme::Dark);
        Self {
            path: Some(path),
            current,
            persisted,
        }
    }

    /// Resolve from the default settings path, or run detached when the
    /// platform offers no config directory.
    pub fn load_default(environment: Option<Theme>) -> Self {
        match Settings::default_path() {
            Ok(path) => Self::load(path, environment),
            Err(_) => Self::detached(environment),
        }
    }

    /// No backing file; toggles apply for the session only.
    pub fn detached(environment: Option<Theme>) -> Self {
        Self {
            path: None,
            current: environment.unwrap_or(Theme::Dark),
            persisted: None,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it; this is the only writer path.
    /// Persistence is best-effort and the switch itself always applies.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggle();
        self.persisted = Some(self.current);
        if let Some(path) = &self.path {
            let mut settings = Settings::load(path).unwrap_or_default();
            settings.theme = Some(self.current.name().to_string());
            let _ = settings.save(path);
        }
        self.current
    }

    /// A live environment-preference change. Applied only while no explicit
    /// preference is persisted; returns whether the theme changed.
    pub fn environment_changed(&mut self, preference: Theme) -> bool {
        if self.persisted.is_some() {
            return false;
        }
        let changed = self.current != preference;
        self.current = preference;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        (dir, path)
    }

    #[test]
    fn test_unset_falls_back_to_environment_then_dark() {
        let (_dir, path) = temp_path();
        let manager = ThemeManager::load(path.clone(), Some(Theme::Light));
        assert_eq!(manager.current(), Theme::Light);

        let manager = ThemeManager::load(path.clone(), None);
        assert_eq!(manager.current(), Theme::Dark);

        // Resolution alone must not create the file.
        assert!(!path.exists());
    }

    #[test]
    fn test_persisted_value_beats_environment() {
        let (_dir, path) = temp_path();
        Settings {
            theme: Some("light".to_string()),
        }
        .save(&path)
        .unwrap();
        let manager = ThemeManager::load(path, Some(Theme::Dark));
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn test_unreadable_file_counts_as_unset() {
        let (_dir, path) = temp_path();
        std::fs::write(&path, "theme = [not toml").unwrap();
        let manager = ThemeManager::load(path, Some(Theme::Light));
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_and_round_trips() {
        let (_dir, path) = temp_path();
        let mut manager = ThemeManager::load(path.clone(), None);
        let original = manager.current();

        manager.toggle();
        let stored = Settings::load(&path).unwrap().theme;
        assert_eq!(stored.as_deref(), Some(original.toggle().name()));

        manager.toggle();
        assert_eq!(manager.current(), original);
        let stored = Settings::load(&path).unwrap().theme;
        assert_eq!(stored.as_deref(), Some(original.name()));
    }

    #[test]
    fn test_detached_toggle_applies_without_writing() {
        let mut manager = ThemeManager::detached(None);
        let flipped = manager.toggle();
        assert_eq!(manager.current(), flipped);
    }

    #[test]
    fn test_environment_change_applies_only_when_unset() {
        let (_dir, path) = temp_path();
        let mut manager = ThemeManager::load(path.clone(), Some(Theme::Dark));
        assert!(manager.environment_changed(Theme::Light));
        assert_eq!(manager.current(), Theme::Light);

        manager.toggle();
        let pinned = manager.current();
        assert!(!manager.environment_changed(pinned.toggle()));
        assert_eq!(manager.current(), pinned);
    }
}
