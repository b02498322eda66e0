//! Sample capacity report used by the demo dashboard and the `sample` command.

use crate::ChartDataPoint;

const CAPACITY_REPORT: [(&str, f64, f64, f64, f64); 9] = [
    ("1-Sep", 1982.0, 2712.0, 2450.0, 85.0),
    ("2-Sep", 2687.0, 2687.0, 2423.0, 119.0),
    ("3-Sep", 2687.0, 2687.0, 2448.0, 102.0),
    ("4-Sep", 2687.0, 2687.0, 2487.0, 118.0),
    ("5-Sep", 2687.0, 2687.0, 2523.0, 131.0),
    ("6-Sep", 2661.0, 2661.0, 2537.0, 128.0),
    ("7-Sep", 2661.0, 2661.0, 2549.0, 106.0),
    ("8-Sep", 2661.0, 2661.0, 2577.0, 123.0),
    ("9-Sep", 2661.0, 2661.0, 2603.0, 98.0),
];

/// Nine days of capacity figures in the `combo` field set.
pub fn mock_chart_data() -> Vec<ChartDataPoint> {
    CAPACITY_REPORT
        .iter()
        .map(|&(name, completion, at_100, with_abs, percentage)| {
            ChartDataPoint::capacity(name, completion, at_100, with_abs, percentage)
        })
        .collect()
}

/// The same days in the `bar`/`line` field set.
pub fn mock_grouped_data() -> Vec<ChartDataPoint> {
    CAPACITY_REPORT
        .iter()
        .map(|&(name, completion, at_100, with_abs, _)| {
            ChartDataPoint::grouped(name, completion, at_100, with_abs)
        })
        .collect()
}
