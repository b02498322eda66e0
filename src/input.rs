use common::ChartDataPoint;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON chart data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML chart data: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// `.yaml`/`.yml` files are YAML, anything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase) {
            Some(ext) if ext == "yaml" || ext == "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse an ordered array of data points; order is kept as written.
pub fn parse_chart_data(
    source: &str,
    format: DataFormat,
) -> Result<Vec<ChartDataPoint>, DataFileError> {
    let data = match format {
        DataFormat::Json => serde_json::from_str(source)?,
        DataFormat::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(data)
}

pub fn load_chart_data(path: &Path) -> Result<Vec<ChartDataPoint>, DataFileError> {
    let format = DataFormat::from_path(path);
    debug!("Reading {} as {:?}", path.display(), format);

    let source = std::fs::read_to_string(path).map_err(|source| DataFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_chart_data(&source, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SeriesKey;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DataFormat::from_path(Path::new("a.yaml")), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(Path::new("a.YML")), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(Path::new("a.json")), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("data")), DataFormat::Json);
    }

    #[test]
    fn test_parse_yaml_keeps_order() {
        let source = "- name: 2-Sep\n  indexCompletion: 5\n- name: 1-Sep\n  indexCompletion: 7\n";
        let data = parse_chart_data(source, DataFormat::Yaml).unwrap();

        assert_eq!(data[0].name, "2-Sep");
        assert_eq!(data[1].name, "1-Sep");
        assert_eq!(data[1].value(SeriesKey::IndexCompletion), Some(7.0));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_chart_data("{not json", DataFormat::Json).unwrap_err();
        assert!(matches!(err, DataFileError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_chart_data(Path::new("/nonexistent/data.json")).unwrap_err();
        assert!(matches!(err, DataFileError::Read { .. }));
    }
}
