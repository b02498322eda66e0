pub mod error;
pub mod figure;
pub mod html;
pub mod plot;
pub mod theme;
pub mod tooltip;

pub use error::{ChartError, Result};
pub use figure::ChartFigure;
pub use plot::{FigureJson, TooltipMode};
pub use theme::ChartTheme;
pub use tooltip::{format_tooltip, TooltipContent, TooltipEntry};

use common::{ChartDataPoint, ChartType};
use tracing::info;

/// Renders a complete HTML page for one performance chart.
///
/// The page uses plotly's own unified hover box since no host component is
/// around to draw the tooltip panel.
pub fn render_standalone(
    title: &str,
    data: &[ChartDataPoint],
    chart_type: ChartType,
    show_legend: bool,
    theme: &ChartTheme,
) -> Result<String> {
    let figure = ChartFigure::build(data, chart_type, show_legend, theme);
    let json = figure.to_figure_json(TooltipMode::Native)?;
    let page = html::render_page(title, &json, figure.height)?;

    info!(%chart_type, points = data.len(), bytes = page.len(), "Rendered standalone chart page");
    Ok(page)
}
