//! Conversion of a [`ChartFigure`] into plotly traces and layout.

use crate::error::Result;
use crate::figure::{
    AxisRef, AxisSpec, ChartFigure, LegendPlacement, ReferenceLine, Series, SeriesKind,
};
use plotly::common::{
    Anchor, DashType, Font, HoverInfo, Line, LineShape, Marker, Mode, Orientation, Position,
    TextPosition, TickMode,
};
use plotly::layout::{
    Axis, AxisSide, AxisType, BarMode, HoverMode, Legend, Margin, Shape, ShapeLine, ShapeType,
};
use plotly::{Bar, Layout, Plot, Scatter};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::trace;

/// How hover information is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipMode {
    /// plotly's hover box is suppressed; the host renders the panel from hover events.
    Custom,
    /// plotly draws a unified hover box with one `key: value` line per series.
    Native,
}

/// The `data`, `layout` and `config` arguments of `Plotly.newPlot`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigureJson {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

impl ChartFigure {
    pub fn to_plot(&self, tooltip: TooltipMode) -> Plot {
        let mut plot = Plot::new();
        for series in &self.series {
            match series.kind {
                SeriesKind::Bar => plot.add_trace(self.bar_trace(series, tooltip)),
                SeriesKind::Line => plot.add_trace(self.line_trace(series, tooltip)),
            }
        }
        plot.set_layout(self.layout(tooltip));
        plot
    }

    /// Figure ready to hand to plotly.js.
    ///
    /// Bar corner rounding is not modelled by the typed layout and is patched in here.
    pub fn to_figure_json(&self, tooltip: TooltipMode) -> Result<FigureJson> {
        let plot = self.to_plot(tooltip);
        let data = serde_json::to_value(plot.data())?;
        let mut layout = serde_json::to_value(plot.layout())?;

        if let (Some(radius), Some(obj)) = (self.bar_corner_radius, layout.as_object_mut()) {
            obj.insert("barcornerradius".to_string(), json!(radius));
        }

        trace!(chart_type = %self.chart_type, "Serialized chart figure");
        Ok(FigureJson {
            data,
            layout,
            config: json!({"responsive": true, "displayModeBar": false}),
        })
    }

    /// X position of every data point.
    ///
    /// Points sit at `0..n` on a linear axis and the names are drawn as tick text, so
    /// repeated names keep separate slots in input order.
    fn positions(&self) -> Vec<usize> {
        (0..self.categories.len()).collect()
    }

    fn bar_trace(&self, series: &Series, tooltip: TooltipMode) -> Box<Bar<usize, Option<f64>>> {
        let mut trace = Bar::new(self.positions(), series.values.clone())
            .name(series.name())
            .marker(Marker::new().color(series.color.clone()));

        if let Some(labels) = series.label_texts() {
            trace = trace
                .text_array(labels)
                .text_position(TextPosition::Outside);
        }

        match tooltip {
            TooltipMode::Custom => trace.hover_info(HoverInfo::None),
            TooltipMode::Native => trace.hover_template(&hover_template(series)),
        }
    }

    fn line_trace(
        &self,
        series: &Series,
        tooltip: TooltipMode,
    ) -> Box<Scatter<usize, Option<f64>>> {
        let style = series.line.clone().unwrap_or(crate::figure::LineStyle {
            width: 2.0,
            dashed: false,
            smooth: false,
            marker_size: 6,
        });

        let mut line = Line::new().color(series.color.clone()).width(style.width);
        if style.smooth {
            line = line.shape(LineShape::Spline);
        }
        if style.dashed {
            line = line.dash(DashType::Dash);
        }

        let marker = Marker::new()
            .size(style.marker_size)
            .color(series.color.clone())
            .line(Line::new().color(self.theme.marker_outline.clone()).width(2.0));

        let mut trace = Scatter::new(self.positions(), series.values.clone())
            .name(series.name())
            .line(line)
            .marker(marker);

        trace = match series.label_texts() {
            Some(labels) => trace
                .mode(Mode::LinesMarkersText)
                .text_array(labels)
                .text_position(Position::TopCenter)
                .text_font(Font::new().size(10).color(series.color.clone())),
            None => trace.mode(Mode::LinesMarkers),
        };

        if series.axis == AxisRef::Secondary {
            trace = trace.y_axis("y2");
        }

        match tooltip {
            TooltipMode::Custom => trace.hover_info(HoverInfo::None),
            TooltipMode::Native => trace.hover_template(&hover_template(series)),
        }
    }

    fn layout(&self, tooltip: TooltipMode) -> Layout {
        let theme = &self.theme;

        let mut x_axis = Axis::new()
            .type_(AxisType::Linear)
            .tick_mode(TickMode::Array)
            .tick_values(self.positions().into_iter().map(|x| x as f64).collect())
            .tick_text(self.categories.clone())
            .show_grid(true)
            .grid_color(theme.border.clone())
            .show_line(false)
            .zero_line(false)
            .tick_font(Font::new().size(11).color(theme.muted.clone()));
        if let Some(angle) = self.x_tick_angle {
            x_axis = x_axis.tick_angle(angle);
        }

        let mut layout = Layout::new()
            .height(self.height)
            .auto_size(true)
            .margin(
                Margin::new()
                    .top(self.margins.top)
                    .right(self.margins.right)
                    .bottom(self.margins.bottom)
                    .left(self.margins.left),
            )
            .paper_background_color("rgba(0,0,0,0)")
            .plot_background_color("rgba(0,0,0,0)")
            .bar_mode(BarMode::Group)
            .x_axis(x_axis)
            .y_axis(self.value_axis(&self.y_axis))
            .hover_mode(match tooltip {
                TooltipMode::Custom => HoverMode::X,
                TooltipMode::Native => HoverMode::XUnified,
            })
            .show_legend(self.legend.is_some());

        if let Some(spec) = &self.y_axis2 {
            layout = layout.y_axis2(
                self.value_axis(spec)
                    .overlaying("y")
                    .side(AxisSide::Right),
            );
        }

        if let Some(placement) = self.legend {
            layout = layout.legend(legend(placement));
        }

        if !self.reference_lines.is_empty() {
            layout = layout.shapes(self.reference_lines.iter().map(reference_shape).collect());
        }

        layout
    }

    fn value_axis(&self, spec: &AxisSpec) -> Axis {
        let mut axis = Axis::new()
            .show_grid(spec.show_grid)
            .grid_color(self.theme.border.clone())
            .show_line(false)
            .zero_line(false)
            .tick_font(Font::new().size(12).color(self.theme.muted.clone()));
        if let Some(range) = spec.range {
            axis = axis.range(range.to_vec()).auto_range(false);
        }
        if let Some(suffix) = spec.tick_suffix {
            axis = axis.tick_suffix(suffix);
        }
        axis
    }
}

fn hover_template(series: &Series) -> String {
    format!("{}: %{{y}}<extra></extra>", series.key.data_key())
}

fn legend(placement: LegendPlacement) -> Legend {
    match placement {
        LegendPlacement::Bottom => Legend::new()
            .orientation(Orientation::Horizontal)
            .x(0.5)
            .x_anchor(Anchor::Center)
            .y(-0.15)
            .y_anchor(Anchor::Top),
        LegendPlacement::TopRight => Legend::new()
            .orientation(Orientation::Horizontal)
            .x(1.0)
            .x_anchor(Anchor::Right)
            .y(1.02)
            .y_anchor(Anchor::Bottom)
            .font(Font::new().size(12)),
    }
}

/// Horizontal line spanning the whole plot width at `line.y`.
fn reference_shape(line: &ReferenceLine) -> Shape {
    let mut shape_line = ShapeLine::new().color(line.color.clone()).width(line.width);
    if line.dashed {
        shape_line = shape_line.dash(DashType::Dash);
    }

    Shape::new()
        .shape_type(ShapeType::Line)
        .x_ref("paper")
        .x0(0.0)
        .x1(1.0)
        .y_ref("y")
        .y0(line.y)
        .y1(line.y)
        .line(shape_line)
}
