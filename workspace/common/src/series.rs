use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one numeric field of a [`crate::ChartDataPoint`].
///
/// The `bar`/`line` variants read the first three keys, the `combo` variant
/// reads the last four. Nothing maps one set onto the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKey {
    IndexCompletion,
    IndexedCapacity,
    ActualCapacity,
    #[serde(rename = "indexFGCompletion")]
    IndexFgCompletion,
    CapacityAt100,
    CapacityWithAbs,
    Percentage,
}

impl SeriesKey {
    /// Field name as it appears in the serialized data point.
    pub fn data_key(self) -> &'static str {
        match self {
            Self::IndexCompletion => "indexCompletion",
            Self::IndexedCapacity => "indexedCapacity",
            Self::ActualCapacity => "actualCapacity",
            Self::IndexFgCompletion => "indexFGCompletion",
            Self::CapacityAt100 => "capacityAt100",
            Self::CapacityWithAbs => "capacityWithAbs",
            Self::Percentage => "percentage",
        }
    }

    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            Self::IndexCompletion | Self::IndexFgCompletion => "Index_FG completion",
            Self::IndexedCapacity | Self::CapacityAt100 => "Indexed Capacity (at 100%)",
            Self::ActualCapacity => "Indexed Capacity (with Abs)",
            Self::CapacityWithAbs => "Indexed Capacity (with Actual Absenteeism)",
            Self::Percentage => "% Capacity Utilization with Absenteeism",
        }
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_key())
    }
}
