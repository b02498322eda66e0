use anyhow::{Context, Result};
use charts::ChartTheme;
use std::path::Path;
use tracing::info;

/// Load the chart theme, falling back to the built-in palette
pub fn load_theme(path: Option<&Path>) -> Result<ChartTheme> {
    let Some(path) = path else {
        return Ok(ChartTheme::default());
    };

    info!("Loading chart theme: {}", path.display());
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme {}", path.display()))?;
    let theme = ChartTheme::from_yaml_str(&source)
        .with_context(|| format!("Invalid theme {}", path.display()))?;

    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_theme_without_path() {
        assert_eq!(load_theme(None).unwrap(), ChartTheme::default());
    }

    #[test]
    fn test_load_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "accent: \"#ff00ff\"").unwrap();

        let theme = load_theme(Some(file.path())).unwrap();
        assert_eq!(theme.accent, "#ff00ff");
        assert_eq!(theme.primary, ChartTheme::default().primary);
    }

    #[test]
    fn test_missing_theme_file() {
        let err = load_theme(Some(Path::new("/nonexistent/theme.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read theme"));
    }
}
