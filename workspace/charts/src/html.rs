//! Standalone HTML page embedding a chart card.

use crate::error::Result;
use crate::plot::FigureJson;

/// plotly.js build loaded by exported pages. 2.29+ is needed for `barcornerradius`.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const CHART_DIV_ID: &str = "performance-chart";

/// Render a self-contained page with a titled card and the plot.
pub fn render_page(title: &str, figure: &FigureJson, height: usize) -> Result<String> {
    let data = script_safe(&serde_json::to_string(&figure.data)?);
    let layout = script_safe(&serde_json::to_string(&figure.layout)?);
    let config = script_safe(&serde_json::to_string(&figure.config)?);
    let title = escape_html(title);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
<style>
body {{ font-family: system-ui, sans-serif; margin: 2rem; background: #f8fafc; }}
.card {{ background: #ffffff; border: 1px solid #e2e8f0; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); margin-bottom: 1.5rem; }}
.card-header {{ padding: 1.5rem 1.5rem 0; }}
.card-title {{ font-size: 1.25rem; font-weight: 700; margin: 0; color: #0f172a; }}
.card-content {{ padding: 1.5rem; }}
</style>
</head>
<body>
<div class="card">
  <div class="card-header"><h2 class="card-title">{title}</h2></div>
  <div class="card-content">
    <div id="{CHART_DIV_ID}" style="width: 100%; height: {height}px;"></div>
  </div>
</div>
<script>
Plotly.newPlot("{CHART_DIV_ID}", {data}, {layout}, {config});
</script>
</body>
</html>
"#
    ))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Keep embedded JSON from closing the surrounding script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn figure() -> FigureJson {
        FigureJson {
            data: json!([{"type": "bar", "name": "</script>"}]),
            layout: json!({"height": 384}),
            config: json!({"responsive": true}),
        }
    }

    #[test]
    fn test_render_page() {
        let html = render_page("Capacity <Sep>", &figure(), 384).unwrap();

        assert!(html.contains("<title>Capacity &lt;Sep&gt;</title>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("Plotly.newPlot(\"performance-chart\""));
        assert!(html.contains("height: 384px"));
        assert!(!html.contains("\"</script>\""));
        assert!(html.contains("<\\/script>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
