//! Light/dark theme preference.
//!
//! The preference is a single boolean. It is read once when a
//! [`ThemeController`] is created and written back on every toggle, through
//! whatever [`PreferenceStore`] the caller injects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VitalityError};
use crate::utils::secure_file;

/// Overrides the directory holding the preference file.
pub const CONFIG_DIR_ENV: &str = "VITALITY_CONFIG_DIR";
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub body: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
}

pub const LIGHT_PALETTE: Palette = Palette {
    body: "#ffffff",
    text: "#333333",
    accent: "#4CAF50",
    background: "#f5f5f5",
};

pub const DARK_PALETTE: Palette = Palette {
    body: "#121212",
    text: "#f0f0f0",
    accent: "#4CAF50",
    background: "#1e1e1e",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark_mode(!self.is_dark())
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    /// Icon shown on the toggle button.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// On-disk shape of the preference file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePreference {
    pub dark_mode: bool,
}

/// Loads and saves the dark-mode flag.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// `Ok(None)` when no preference has been saved yet.
    fn load(&self) -> Result<Option<bool>>;
    fn save(&self, dark_mode: bool) -> Result<()>;
}

/// JSON preference file in the user's config directory.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Use `$VITALITY_CONFIG_DIR` if set, otherwise the platform config dir.
    pub fn new() -> Result<Self> {
        let dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => Self::default_config_dir()?,
        };
        Ok(Self::in_dir(dir))
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(PREFERENCES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_config_dir() -> Result<PathBuf> {
        let base = directories::ProjectDirs::from("com", "vitality-source", "vitality")
            .ok_or_else(|| {
                VitalityError::config_error(CONFIG_DIR_ENV, "Failed to determine config directory")
            })?;
        Ok(base.config_dir().to_path_buf())
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<bool>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No saved theme preference");
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            VitalityError::io_error("read theme preference", Some(self.display_path()), e)
        })?;

        match serde_json::from_str::<ThemePreference>(&contents) {
            Ok(pref) => Ok(Some(pref.dark_mode)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring unreadable theme preference"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, dark_mode: bool) -> Result<()> {
        let contents = serde_json::to_string_pretty(&ThemePreference { dark_mode })
            .map_err(|e| VitalityError::config_error(self.display_path(), e.to_string()))?;

        secure_file::write_secure(&self.path, contents.as_bytes())
            .map_err(|e| VitalityError::config_error(self.display_path(), format!("{e:#}")))?;

        tracing::debug!(path = %self.path.display(), dark_mode, "Theme preference saved");
        Ok(())
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the saved preference. Falls back to the light theme when nothing
    /// is saved or the store cannot be read.
    pub fn load(store: S) -> Self {
        let dark_mode = match store.load() {
            Ok(saved) => saved.unwrap_or(false),
            Err(e) => {
                tracing::warn!(error = %e, "Could not load theme preference, using light theme");
                false
            }
        };

        Self {
            store,
            theme: Theme::from_dark_mode(dark_mode),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    /// Flip the theme and persist it. On a failed save the theme is unchanged.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.store.save(next.is_dark())?;
        self.theme = next;
        tracing::info!(theme = %next, "Theme toggled");
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_to_light_without_saved_preference() {
        let mut store = MockPreferenceStore::new();
        store.expect_load().times(1).returning(|| Ok(None));

        let controller = ThemeController::load(store);
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.palette(), &LIGHT_PALETTE);
    }

    #[test]
    fn test_load_failure_falls_back_to_light() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_load()
            .returning(|| Err(VitalityError::config_error("prefs", "unreadable")));

        assert_eq!(ThemeController::load(store).theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_new_value() {
        let mut store = MockPreferenceStore::new();
        store.expect_load().returning(|| Ok(Some(false)));
        store
            .expect_save()
            .with(eq(true))
            .times(1)
            .returning(|_| Ok(()));

        let mut controller = ThemeController::load(store);
        assert_eq!(controller.toggle().unwrap(), Theme::Dark);
        assert_eq!(controller.palette(), &DARK_PALETTE);
    }

    #[test]
    fn test_failed_save_keeps_current_theme() {
        let mut store = MockPreferenceStore::new();
        store.expect_load().returning(|| Ok(Some(true)));
        store
            .expect_save()
            .returning(|_| Err(VitalityError::config_error("prefs", "read-only")));

        let mut controller = ThemeController::load(store);
        assert!(controller.toggle().is_err());
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::in_dir(temp_dir.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip_via_controller() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::in_dir(temp_dir.path());

        let mut controller = ThemeController::load(store);
        controller.toggle().unwrap();
        let store = controller.into_store();
        assert_eq!(store.load().unwrap(), Some(true));

        let mut reloaded = ThemeController::load(store);
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(reloaded.toggle().unwrap(), Theme::Light);
        assert_eq!(reloaded.into_store().load().unwrap(), Some(false));
    }

    #[test]
    fn test_file_store_corrupt_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::in_dir(temp_dir.path());
        fs::write(store.path(), "not json").unwrap();

        assert_eq!(store.load().unwrap(), None);
        assert_eq!(ThemeController::load(store).theme(), Theme::Light);
    }

    #[test]
    fn test_theme_glyphs_and_names() {
        assert_eq!(Theme::Dark.glyph(), "🌙");
        assert_eq!(Theme::Light.glyph(), "☀️");
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
