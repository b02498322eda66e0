//! Bindings to the global `Plotly` object loaded by index.html.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    pub fn new_plot(
        div_id: &str,
        data: JsValue,
        layout: JsValue,
        config: JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    pub fn purge(div_id: &str) -> Result<(), JsValue>;

    /// A plot div after `newPlot`; plotly attaches an event emitter to it.
    pub type PlotlyElement;

    #[wasm_bindgen(method)]
    pub fn on(this: &PlotlyElement, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(method, js_name = removeAllListeners)]
    pub fn remove_all_listeners(this: &PlotlyElement, event: &str);
}
