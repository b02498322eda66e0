mod chart_tooltip;
mod performance_chart;
mod view;

pub use chart_tooltip::ChartTooltip;
pub use performance_chart::PerformanceChart;
pub use view::Dashboard;
