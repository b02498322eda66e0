use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Colors used when assembling a figure.
///
/// Any field missing from a theme file keeps its default value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartTheme {
    /// Completion series
    pub primary: String,
    /// Indexed capacity series
    pub secondary: String,
    /// Actual capacity series
    pub tertiary: String,
    /// Utilization percentage series
    pub accent: String,
    /// Capacity-with-absenteeism line
    pub destructive: String,
    /// Labels and the capacity-at-100% line
    pub foreground: String,
    /// Axis ticks and the reference line
    pub muted: String,
    /// Grid lines
    pub border: String,
    /// Marker outline
    pub marker_outline: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: "#16a34a".to_string(),
            tertiary: "#f59e0b".to_string(),
            accent: "#0ea5e9".to_string(),
            destructive: "#dc2626".to_string(),
            foreground: "#0f172a".to_string(),
            muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
            marker_outline: "#ffffff".to_string(),
        }
    }
}

impl ChartTheme {
    /// Parse a theme from YAML. JSON is accepted as well since it is a YAML subset.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let theme: ChartTheme = serde_yaml::from_str(source)?;
        debug!(?theme, "Loaded chart theme");
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;

    #[test]
    fn test_partial_theme_keeps_defaults() {
        let theme = ChartTheme::from_yaml_str("primary: \"#000000\"\naccent: teal\n").unwrap();

        assert_eq!(theme.primary, "#000000");
        assert_eq!(theme.accent, "teal");
        assert_eq!(theme.secondary, ChartTheme::default().secondary);
    }

    #[test]
    fn test_json_theme() {
        let theme = ChartTheme::from_yaml_str(r#"{"border": "#cccccc"}"#).unwrap();
        assert_eq!(theme.border, "#cccccc");
    }

    #[test]
    fn test_invalid_theme() {
        let err = ChartTheme::from_yaml_str("primary: [1, 2").unwrap_err();
        assert!(matches!(err, ChartError::Theme(_)));
    }
}
