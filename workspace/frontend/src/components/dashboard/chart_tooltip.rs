use charts::{format_tooltip, ChartFigure, TooltipContent};
use serde::Deserialize;
use yew::prelude::*;

/// The fields of a plotly hover point that the tooltip needs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoverPoint {
    pub curve_number: usize,
    #[serde(default)]
    pub point_index: Option<usize>,
    #[serde(default)]
    pub point_number: Option<usize>,
    #[serde(default)]
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HoverEvent {
    pub points: Vec<HoverPoint>,
}

/// Tooltip for the category under the pointer, `None` when nothing is hovered.
pub fn tooltip_for(figure: &ChartFigure, points: &[HoverPoint]) -> Option<TooltipContent> {
    let index = points.iter().find_map(|p| p.point_index.or(p.point_number))?;
    let label = figure.categories.get(index)?;

    let hits: Vec<(usize, f64)> = points
        .iter()
        .filter_map(|p| p.y.map(|y| (p.curve_number, y)))
        .collect();

    format_tooltip(true, &figure.tooltip_payload(&hits), label)
}

#[derive(Properties, PartialEq)]
pub struct ChartTooltipProps {
    pub content: Option<TooltipContent>,
}

#[function_component(ChartTooltip)]
pub fn chart_tooltip(props: &ChartTooltipProps) -> Html {
    let Some(content) = &props.content else {
        return html! {};
    };

    html! {
        <div class="absolute top-2 left-16 z-10 pointer-events-none bg-base-100 border border-base-300 rounded-lg shadow-lg p-3">
            <p class="font-medium text-base-content">{&content.header}</p>
            { for content.lines.iter().map(|line| {
                let style = line.color.as_ref().map(|c| format!("color: {}", c)).unwrap_or_default();
                html! { <p class="text-sm" style={style}>{&line.text}</p> }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts::ChartTheme;
    use common::sample::mock_chart_data;
    use common::ChartType;

    fn point(curve_number: usize, index: usize, y: Option<f64>) -> HoverPoint {
        HoverPoint {
            curve_number,
            point_index: Some(index),
            point_number: None,
            y,
        }
    }

    #[test]
    fn test_tooltip_for_hovered_category() {
        let figure =
            ChartFigure::build(&mock_chart_data(), ChartType::Combo, true, &ChartTheme::default());
        let points = vec![point(0, 1, Some(2687.0)), point(3, 1, Some(119.0)), point(1, 1, None)];

        let content = tooltip_for(&figure, &points).unwrap();

        assert_eq!(content.header, "Date: 2-Sep");
        let texts: Vec<&str> = content.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["indexFGCompletion: 2687", "percentage: 119"]);
    }

    #[test]
    fn test_tooltip_for_no_points() {
        let figure =
            ChartFigure::build(&mock_chart_data(), ChartType::Combo, true, &ChartTheme::default());
        assert_eq!(tooltip_for(&figure, &[]), None);
    }

    #[test]
    fn test_hover_point_deserialize() {
        let json = r#"{"points":[{"curveNumber":2,"pointNumber":4,"y":2523,"x":"5-Sep"}]}"#;
        let event: HoverEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.points[0].curve_number, 2);
        assert_eq!(event.points[0].point_index, None);
        assert_eq!(event.points[0].point_number, Some(4));
        assert_eq!(event.points[0].y, Some(2523.0));
    }
}
