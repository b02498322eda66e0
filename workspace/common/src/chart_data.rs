use crate::series::SeriesKey;
use serde::{Deserialize, Serialize};

/// One category (X-axis position) of a performance chart.
///
/// All numeric fields are optional: a field that is not supplied is plotted
/// as an absent point. Values are never validated, rounded or clamped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    /// Category label, e.g. `"1-Sep"`
    pub name: String,

    #[serde(rename = "indexFGCompletion", default, skip_serializing_if = "Option::is_none")]
    pub index_fg_completion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_at_100: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_with_abs: Option<f64>,
    /// Utilization ratio in percent, plotted on the secondary axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_completion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_capacity: Option<f64>,
}

impl ChartDataPoint {
    /// Point carrying the field set read by the `combo` variant.
    pub fn capacity(
        name: impl Into<String>,
        index_fg_completion: f64,
        capacity_at_100: f64,
        capacity_with_abs: f64,
        percentage: f64,
    ) -> Self {
        Self {
            name: name.into(),
            index_fg_completion: Some(index_fg_completion),
            capacity_at_100: Some(capacity_at_100),
            capacity_with_abs: Some(capacity_with_abs),
            percentage: Some(percentage),
            ..Default::default()
        }
    }

    /// Point carrying the field set read by the `bar` and `line` variants.
    pub fn grouped(
        name: impl Into<String>,
        index_completion: f64,
        indexed_capacity: f64,
        actual_capacity: f64,
    ) -> Self {
        Self {
            name: name.into(),
            index_completion: Some(index_completion),
            indexed_capacity: Some(indexed_capacity),
            actual_capacity: Some(actual_capacity),
            ..Default::default()
        }
    }

    pub fn value(&self, key: SeriesKey) -> Option<f64> {
        match key {
            SeriesKey::IndexCompletion => self.index_completion,
            SeriesKey::IndexedCapacity => self.indexed_capacity,
            SeriesKey::ActualCapacity => self.actual_capacity,
            SeriesKey::IndexFgCompletion => self.index_fg_completion,
            SeriesKey::CapacityAt100 => self.capacity_at_100,
            SeriesKey::CapacityWithAbs => self.capacity_with_abs,
            SeriesKey::Percentage => self.percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_capacity_shape() {
        let json = r#"{"name":"1-Sep","indexFGCompletion":1982,"capacityAt100":2712,"capacityWithAbs":2450,"percentage":85}"#;
        let point: ChartDataPoint = serde_json::from_str(json).unwrap();

        assert_eq!(point, ChartDataPoint::capacity("1-Sep", 1982.0, 2712.0, 2450.0, 85.0));
        assert_eq!(point.value(SeriesKey::Percentage), Some(85.0));
        assert_eq!(point.value(SeriesKey::IndexCompletion), None);
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let point: ChartDataPoint =
            serde_json::from_str(r#"{"name":"x","indexCompletion":3}"#).unwrap();

        assert_eq!(point.value(SeriesKey::IndexCompletion), Some(3.0));
        assert_eq!(point.value(SeriesKey::IndexedCapacity), None);
        assert_eq!(point.value(SeriesKey::CapacityAt100), None);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let point = ChartDataPoint::grouped("2-Sep", 1.0, 2.0, 3.0);
        let value = serde_json::to_value(&point).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "2-Sep",
                "indexCompletion": 1.0,
                "indexedCapacity": 2.0,
                "actualCapacity": 3.0
            })
        );
    }

    #[test]
    fn test_values_are_not_clamped() {
        let point = ChartDataPoint::capacity("x", -5.0, 0.0, 1e6, 200.0);
        assert_eq!(point.value(SeriesKey::Percentage), Some(200.0));
        assert_eq!(point.value(SeriesKey::IndexFgCompletion), Some(-5.0));
    }
}
