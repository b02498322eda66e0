use anyhow::{Context, Result};
use common::ChartType;
use std::path::Path;
use tracing::{debug, info, trace};

use crate::config::load_theme;
use crate::input::load_chart_data;

pub fn render(
    input: &Path,
    chart_type: ChartType,
    title: &str,
    show_legend: bool,
    theme_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    trace!("Entering render command");
    debug!("Input: {}", input.display());
    debug!("Chart type: {}, legend: {}", chart_type, show_legend);

    let data = load_chart_data(input)?;
    info!("Loaded {} data points from {}", data.len(), input.display());

    let theme = load_theme(theme_path)?;
    let page = charts::render_standalone(title, &data, chart_type, show_legend, &theme)
        .context("Failed to render chart")?;

    match output {
        Some(path) => {
            std::fs::write(path, &page)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Chart written to {}", path.display());
        }
        None => print!("{}", page),
    }

    Ok(())
}
