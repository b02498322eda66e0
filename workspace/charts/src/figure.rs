//! Declarative description of a performance chart.
//!
//! [`ChartFigure::build`] picks the variant for a [`ChartType`] and lays out
//! series, axes, reference lines and legend. Nothing here talks to plotly;
//! see [`crate::plot`] for the conversion.

use crate::theme::ChartTheme;
use crate::tooltip::{format_value, TooltipEntry};
use common::{CAPACITY_SERIES, ChartDataPoint, ChartType, GROUPED_SERIES, SeriesKey};
use tracing::{debug, trace};

/// Height of the plot region in pixels.
pub const DEFAULT_HEIGHT: usize = 384;
/// Horizontal reference line drawn by the combo variant.
pub const COMBO_REFERENCE_VALUE: f64 = 2500.0;
/// Fixed domain of the combo variant's left axis.
pub const COMBO_PRIMARY_RANGE: [f64; 2] = [0.0, 5000.0];
/// Fixed domain of the percentage axis.
pub const PERCENT_RANGE: [f64; 2] = [0.0, 150.0];
/// Rotation of the combo variant's category labels.
pub const COMBO_TICK_ANGLE: f64 = -45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Bar,
    Line,
}

/// Y axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRef {
    Primary,
    Secondary,
}

/// Format of the inline value labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    Plain,
    Percent,
}

impl LabelFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            Self::Plain => format_value(value),
            Self::Percent => format!("{}%", format_value(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub width: f64,
    pub dashed: bool,
    pub smooth: bool,
    pub marker_size: usize,
}

/// One plotted series with its values in category order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub key: SeriesKey,
    pub kind: SeriesKind,
    pub axis: AxisRef,
    pub color: String,
    /// Only set for line series
    pub line: Option<LineStyle>,
    pub labels: Option<LabelFormat>,
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn name(&self) -> &'static str {
        self.key.label()
    }

    /// Inline label text per category, empty where the value is absent.
    pub fn label_texts(&self) -> Option<Vec<String>> {
        let format = self.labels?;
        Some(
            self.values
                .iter()
                .map(|value| value.map(|v| format.apply(v)).unwrap_or_default())
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisSpec {
    /// Fixed domain, auto-scaled when `None`
    pub range: Option<[f64; 2]>,
    pub tick_suffix: Option<&'static str>,
    pub show_grid: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub y: f64,
    pub color: String,
    pub width: f64,
    pub dashed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPlacement {
    /// Centered below the plot
    Bottom,
    /// Pinned above the plot, right aligned
    TopRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartFigure {
    pub chart_type: ChartType,
    /// X categories in caller order
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub y_axis: AxisSpec,
    pub y_axis2: Option<AxisSpec>,
    pub x_tick_angle: Option<f64>,
    pub reference_lines: Vec<ReferenceLine>,
    pub legend: Option<LegendPlacement>,
    pub bar_corner_radius: Option<u32>,
    pub margins: Margins,
    pub height: usize,
    pub theme: ChartTheme,
}

impl ChartFigure {
    /// Lay out the figure for `chart_type`.
    ///
    /// `show_legend` applies to the `bar` and `line` variants; the combo legend
    /// is always shown in the top-right corner.
    pub fn build(
        data: &[ChartDataPoint],
        chart_type: ChartType,
        show_legend: bool,
        theme: &ChartTheme,
    ) -> Self {
        debug!(%chart_type, points = data.len(), show_legend, "Building chart figure");

        let figure = match chart_type {
            ChartType::Bar => Self::grouped_bars(data, show_legend, theme),
            ChartType::Line => Self::grouped_lines(data, show_legend, theme),
            ChartType::Combo => Self::capacity_combo(data, theme),
        };

        trace!(series = figure.series.len(), "Chart figure built");
        figure
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    fn base(data: &[ChartDataPoint], chart_type: ChartType, theme: &ChartTheme) -> Self {
        Self {
            chart_type,
            categories: data.iter().map(|p| p.name.clone()).collect(),
            series: Vec::new(),
            y_axis: AxisSpec {
                show_grid: true,
                ..Default::default()
            },
            y_axis2: None,
            x_tick_angle: None,
            reference_lines: Vec::new(),
            legend: None,
            bar_corner_radius: None,
            margins: Margins {
                top: 20,
                right: 30,
                bottom: 40,
                left: 50,
            },
            height: DEFAULT_HEIGHT,
            theme: theme.clone(),
        }
    }

    fn grouped_colors(theme: &ChartTheme) -> [String; 3] {
        [
            theme.primary.clone(),
            theme.secondary.clone(),
            theme.tertiary.clone(),
        ]
    }

    fn grouped_bars(data: &[ChartDataPoint], show_legend: bool, theme: &ChartTheme) -> Self {
        let mut figure = Self::base(data, ChartType::Bar, theme);
        figure.bar_corner_radius = Some(2);
        figure.legend = show_legend.then_some(LegendPlacement::Bottom);

        for (key, color) in GROUPED_SERIES.into_iter().zip(Self::grouped_colors(theme)) {
            figure.series.push(Series {
                key,
                kind: SeriesKind::Bar,
                axis: AxisRef::Primary,
                color,
                line: None,
                labels: None,
                values: values_for(data, key),
            });
        }
        figure
    }

    fn grouped_lines(data: &[ChartDataPoint], show_legend: bool, theme: &ChartTheme) -> Self {
        let mut figure = Self::base(data, ChartType::Line, theme);
        figure.legend = show_legend.then_some(LegendPlacement::Bottom);

        for (key, color) in GROUPED_SERIES.into_iter().zip(Self::grouped_colors(theme)) {
            figure.series.push(Series {
                key,
                kind: SeriesKind::Line,
                axis: AxisRef::Primary,
                color,
                line: Some(LineStyle {
                    width: 2.0,
                    dashed: false,
                    smooth: true,
                    marker_size: 6,
                }),
                labels: None,
                values: values_for(data, key),
            });
        }
        figure
    }

    fn capacity_combo(data: &[ChartDataPoint], theme: &ChartTheme) -> Self {
        let mut figure = Self::base(data, ChartType::Combo, theme);
        figure.bar_corner_radius = Some(4);
        figure.legend = Some(LegendPlacement::TopRight);
        figure.x_tick_angle = Some(COMBO_TICK_ANGLE);
        figure.margins = Margins {
            top: 60,
            right: 60,
            bottom: 80,
            left: 60,
        };
        figure.y_axis.range = Some(COMBO_PRIMARY_RANGE);
        figure.y_axis2 = Some(AxisSpec {
            range: Some(PERCENT_RANGE),
            tick_suffix: Some("%"),
            show_grid: false,
        });
        figure.reference_lines.push(ReferenceLine {
            y: COMBO_REFERENCE_VALUE,
            color: theme.muted.clone(),
            width: 1.0,
            dashed: true,
        });

        let [completion, at_100, with_abs, percentage] = CAPACITY_SERIES;

        figure.series.push(Series {
            key: completion,
            kind: SeriesKind::Bar,
            axis: AxisRef::Primary,
            color: theme.primary.clone(),
            line: None,
            labels: Some(LabelFormat::Plain),
            values: values_for(data, completion),
        });

        let capacity_line = LineStyle {
            width: 2.0,
            dashed: true,
            smooth: true,
            marker_size: 8,
        };
        for (key, color) in [(at_100, &theme.foreground), (with_abs, &theme.destructive)] {
            figure.series.push(Series {
                key,
                kind: SeriesKind::Line,
                axis: AxisRef::Primary,
                color: color.clone(),
                line: Some(capacity_line.clone()),
                labels: Some(LabelFormat::Plain),
                values: values_for(data, key),
            });
        }

        figure.series.push(Series {
            key: percentage,
            kind: SeriesKind::Line,
            axis: AxisRef::Secondary,
            color: theme.accent.clone(),
            line: Some(LineStyle {
                width: 2.5,
                dashed: false,
                smooth: true,
                marker_size: 10,
            }),
            labels: Some(LabelFormat::Percent),
            values: values_for(data, percentage),
        });

        figure
    }

    pub fn series_of_kind(&self, kind: SeriesKind) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.kind == kind)
    }

    /// Tooltip payload for hovered points given as `(series index, value)` pairs.
    ///
    /// Indices that do not name a series are skipped.
    pub fn tooltip_payload(&self, hits: &[(usize, f64)]) -> Vec<TooltipEntry> {
        hits.iter()
            .filter_map(|&(index, value)| {
                self.series.get(index).map(|series| TooltipEntry {
                    data_key: series.key.data_key().to_string(),
                    value,
                    color: Some(series.color.clone()),
                })
            })
            .collect()
    }
}

fn values_for(data: &[ChartDataPoint], key: SeriesKey) -> Vec<Option<f64>> {
    data.iter().map(|point| point.value(key)).collect()
}
