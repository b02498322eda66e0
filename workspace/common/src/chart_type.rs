use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Chart variant rendered by a performance chart.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Grouped vertical bars, one per series.
    #[default]
    Bar,
    /// Smoothed lines with point markers.
    Line,
    /// Completion bars plus capacity lines on a dual axis.
    Combo,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Bar, ChartType::Line, ChartType::Combo];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Combo => "combo",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart type '{0}', expected one of: bar, line, combo")]
pub struct ParseChartTypeError(pub String);

impl FromStr for ChartType {
    type Err = ParseChartTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "combo" => Ok(Self::Combo),
            other => Err(ParseChartTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bar() {
        assert_eq!(ChartType::default(), ChartType::Bar);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("combo".parse::<ChartType>(), Ok(ChartType::Combo));
        assert_eq!(" Line ".parse::<ChartType>(), Ok(ChartType::Line));

        let err = "pie".parse::<ChartType>().unwrap_err();
        assert_eq!(err, ParseChartTypeError("pie".to_string()));
        assert!(err.to_string().contains("pie"));
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for chart_type in ChartType::ALL {
            assert_eq!(chart_type.to_string().parse::<ChartType>(), Ok(chart_type));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ChartType::Combo).unwrap(), "\"combo\"");
        let parsed: ChartType = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(parsed, ChartType::Line);
    }
}
