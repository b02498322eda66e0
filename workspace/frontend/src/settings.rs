use charts::figure::DEFAULT_HEIGHT;
use log::Level;
use web_sys::window;

const KEY_LOG_LEVEL: &str = "capacity_dashboard_log_level";
const KEY_CHART_HEIGHT: &str = "capacity_dashboard_chart_height";
const KEY_DISPLAY_MODE_BAR: &str = "capacity_dashboard_display_mode_bar";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Height of every chart's plot region in pixels
    pub chart_height_px: usize,

    /// Show plotly's floating mode bar (zoom, export, ...)
    pub display_mode_bar: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            chart_height_px: DEFAULT_HEIGHT,
            display_mode_bar: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| storage.get_item(key).ok().flatten());
        }

        settings
    }

    /// Apply stored overrides; unparsable values keep the current setting.
    pub fn apply_overrides<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = get(KEY_LOG_LEVEL).and_then(|v| parse_level(&v)) {
            self.log_level = level;
        }

        if let Some(height) = get(KEY_CHART_HEIGHT).and_then(|v| v.trim().parse::<usize>().ok()) {
            if height > 0 {
                self.chart_height_px = height;
            }
        }

        if let Some(show) = get(KEY_DISPLAY_MODE_BAR) {
            self.display_mode_bar = show.trim().eq_ignore_ascii_case("true");
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn storage(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_apply_overrides() {
        let store = storage(&[
            (KEY_LOG_LEVEL, "Trace"),
            (KEY_CHART_HEIGHT, "480"),
            (KEY_DISPLAY_MODE_BAR, "true"),
        ]);
        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| store.get(key).cloned());

        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.chart_height_px, 480);
        assert!(settings.display_mode_bar);
    }

    #[test]
    fn test_invalid_overrides_keep_defaults() {
        let store = storage(&[(KEY_LOG_LEVEL, "loud"), (KEY_CHART_HEIGHT, "0")]);
        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| store.get(key).cloned());

        assert_eq!(settings, AppSettings::default());
    }
}
