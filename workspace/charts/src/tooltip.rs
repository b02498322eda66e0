//! Hover tooltip content.
//!
//! The formatter is a pure mapping from a hover event's payload to the text
//! panel shown next to the pointer. Rendering the panel is left to the caller.

use serde::{Deserialize, Serialize};

/// One series value under the pointer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TooltipEntry {
    /// Series data key, e.g. `indexFGCompletion`
    pub data_key: String,
    pub value: f64,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub color: Option<String>,
}

/// Formatted tooltip panel: a header followed by one line per series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TooltipContent {
    pub header: String,
    pub lines: Vec<TooltipLine>,
}

/// Build the tooltip panel for a hovered category.
///
/// Returns `None` when the pointer is not over the chart or no series has a
/// value at `label`.
pub fn format_tooltip(
    active: bool,
    payload: &[TooltipEntry],
    label: &str,
) -> Option<TooltipContent> {
    if !active || payload.is_empty() {
        return None;
    }

    let lines = payload
        .iter()
        .map(|entry| TooltipLine {
            text: format!("{}: {}", entry.data_key, format_value(entry.value)),
            color: entry.color.clone(),
        })
        .collect();

    Some(TooltipContent {
        header: format!("Date: {}", label),
        lines,
    })
}

/// Number formatting as a browser prints it: integral values without a fraction,
/// exponent notation below `1e-6` and from `1e21` on.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: f64) -> TooltipEntry {
        TooltipEntry {
            data_key: key.to_string(),
            value,
            color: Some("#2563eb".to_string()),
        }
    }

    #[test]
    fn test_inactive_returns_none() {
        let payload = vec![entry("indexFGCompletion", 1982.0)];
        assert_eq!(format_tooltip(false, &payload, "1-Sep"), None);
    }

    #[test]
    fn test_empty_payload_returns_none() {
        assert_eq!(format_tooltip(true, &[], "1-Sep"), None);
    }

    #[test]
    fn test_one_line_per_entry() {
        let payload = vec![
            entry("indexFGCompletion", 1982.0),
            entry("capacityAt100", 2712.0),
            entry("percentage", 85.5),
        ];

        let content = format_tooltip(true, &payload, "1-Sep").unwrap();

        assert_eq!(content.header, "Date: 1-Sep");
        let texts: Vec<&str> = content.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["indexFGCompletion: 1982", "capacityAt100: 2712", "percentage: 85.5"]
        );
        assert_eq!(content.lines[0].color.as_deref(), Some("#2563eb"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(85.0), "85");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-12.0), "-12");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.000001), "0.000001");
    }

    #[test]
    fn test_format_value_exponent_ranges() {
        assert_eq!(format_value(1e-7), "1e-7");
        assert_eq!(format_value(-2.5e-8), "-2.5e-8");
        assert_eq!(format_value(1e21), "1e+21");
        assert_eq!(format_value(1.5e22), "1.5e+22");
        assert_eq!(format_value(1e20), "100000000000000000000");
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }
}
