//! Common chart-data types shared between the chart builder, the CLI and the frontend.
//! These structs mirror the JSON payload a dashboard page hands to a
//! performance chart, so every consumer deserializes the same shapes.

mod chart_data;
mod chart_type;
mod series;
pub mod sample;

pub use chart_data::ChartDataPoint;
pub use chart_type::{ChartType, ParseChartTypeError};
pub use series::SeriesKey;

/// Series keys consumed by the `bar` and `line` variants, in plotting order.
pub const GROUPED_SERIES: [SeriesKey; 3] = [
    SeriesKey::IndexCompletion,
    SeriesKey::IndexedCapacity,
    SeriesKey::ActualCapacity,
];

/// Series keys consumed by the `combo` variant, in plotting order.
pub const CAPACITY_SERIES: [SeriesKey; 4] = [
    SeriesKey::IndexFgCompletion,
    SeriesKey::CapacityAt100,
    SeriesKey::CapacityWithAbs,
    SeriesKey::Percentage,
];
