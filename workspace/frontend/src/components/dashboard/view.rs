use super::performance_chart::PerformanceChart;
use common::sample::{mock_chart_data, mock_grouped_data};
use common::ChartType;
use yew::prelude::*;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let capacity = mock_chart_data();
    let grouped = mock_grouped_data();

    html! {
        <>
            <PerformanceChart
                title="Index_FG Completion vs Indexed Capacity"
                data={capacity}
                chart_type={ChartType::Combo}
            />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <PerformanceChart title="Daily Capacity (Bar)" data={grouped.clone()} />
                <PerformanceChart
                    title="Daily Capacity Trend"
                    data={grouped}
                    chart_type={ChartType::Line}
                    show_legend={false}
                />
            </div>
        </>
    }
}
