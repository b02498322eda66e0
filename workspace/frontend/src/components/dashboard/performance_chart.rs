use super::chart_tooltip::{tooltip_for, ChartTooltip, HoverEvent};
use crate::common::error::ErrorDisplay;
use crate::plotly_js::{self, PlotlyElement};
use crate::settings;
use charts::{ChartFigure, ChartTheme, TooltipContent, TooltipMode};
use common::{ChartDataPoint, ChartType};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

static NEXT_CHART_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub data: Vec<ChartDataPoint>,
    #[prop_or_default]
    pub chart_type: ChartType,
    #[prop_or(true)]
    pub show_legend: bool,
    #[prop_or_default]
    pub theme: Option<ChartTheme>,
}

#[function_component(PerformanceChart)]
pub fn performance_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let div_id = use_memo((), |_| {
        format!("performance-chart-{}", NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed))
    });
    let tooltip = use_state_eq(|| None::<TooltipContent>);
    let render_error = use_state_eq(|| None::<String>);
    let app_settings = settings::get_settings();
    let height = app_settings.chart_height_px;

    let figure = use_memo(
        (props.data.clone(), props.chart_type, props.show_legend, props.theme.clone(), height),
        |(data, chart_type, show_legend, theme, height)| {
            let theme = theme.clone().unwrap_or_default();
            ChartFigure::build(data, *chart_type, *show_legend, &theme).with_height(*height)
        },
    );

    {
        let tooltip = tooltip.clone();
        let render_error = render_error.clone();
        use_effect_with(
            (container_ref.clone(), figure.clone(), div_id.clone(), app_settings.display_mode_bar),
            move |(container_ref, figure, div_id, display_mode_bar)| {
                let mut hover = None;
                if let Some(element) = container_ref.cast::<HtmlElement>() {
                    element.set_id(div_id);
                    tooltip.set(None);

                    match draw(div_id, figure, *display_mode_bar) {
                        Ok(()) => {
                            log::debug!("Drew {} chart into #{}", figure.chart_type, div_id);
                            render_error.set(None);
                            hover = Some(HoverHandlers::attach(&element, figure.clone(), tooltip));
                        }
                        Err(message) => {
                            log::error!("Failed to draw chart #{}: {}", div_id, message);
                            render_error.set(Some(message));
                        }
                    }
                }

                let div_id = div_id.clone();
                move || {
                    drop(hover);
                    if plotly_js::purge(&div_id).is_err() {
                        log::trace!("Chart #{} was already purged", div_id);
                    }
                }
            },
        );
    }

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body">
                <h2 class="card-title text-xl font-bold text-base-content">{&props.title}</h2>
                {if let Some(message) = &*render_error {
                    html! { <ErrorDisplay message={message.clone()} /> }
                } else {
                    html! {}
                }}
                <div class="relative w-full">
                    <div ref={container_ref} style={format!("width: 100%; height: {}px;", height)}></div>
                    <ChartTooltip content={(*tooltip).clone()} />
                </div>
            </div>
        </div>
    }
}

fn draw(div_id: &str, figure: &ChartFigure, display_mode_bar: bool) -> Result<(), String> {
    let mut json = figure
        .to_figure_json(TooltipMode::Custom)
        .map_err(|e| e.to_string())?;
    json.config["displayModeBar"] = serde_json::Value::Bool(display_mode_bar);

    let data = to_js(&json.data)?;
    let layout = to_js(&json.layout)?;
    let config = to_js(&json.config)?;

    plotly_js::new_plot(div_id, data, layout, config)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

// JSON.parse keeps objects as plain JS objects, which plotly requires.
fn to_js(value: &serde_json::Value) -> Result<JsValue, String> {
    let text = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&text).map_err(|e| format!("{:?}", e))
}

/// plotly hover listeners of one drawn chart; removed on drop.
struct HoverHandlers {
    element: PlotlyElement,
    _on_hover: Closure<dyn FnMut(JsValue)>,
    _on_unhover: Closure<dyn FnMut(JsValue)>,
}

impl HoverHandlers {
    fn attach(
        element: &HtmlElement,
        figure: Rc<ChartFigure>,
        tooltip: UseStateHandle<Option<TooltipContent>>,
    ) -> Self {
        let element: PlotlyElement = element.clone().unchecked_into();

        let on_hover = {
            let tooltip = tooltip.clone();
            Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                match serde_wasm_bindgen::from_value::<HoverEvent>(event) {
                    Ok(event) => tooltip.set(tooltip_for(&figure, &event.points)),
                    Err(err) => log::debug!("Ignoring hover event: {}", err),
                }
            })
        };
        let on_unhover = Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| {
            tooltip.set(None);
        });

        element.on("plotly_hover", &on_hover);
        element.on("plotly_unhover", &on_unhover);

        Self {
            element,
            _on_hover: on_hover,
            _on_unhover: on_unhover,
        }
    }
}

impl Drop for HoverHandlers {
    fn drop(&mut self) {
        self.element.remove_all_listeners("plotly_hover");
        self.element.remove_all_listeners("plotly_unhover");
    }
}
