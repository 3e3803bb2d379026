//! Standalone HTML page around a chart spec, rendered by vega-embed.

use super::spec::ChartSpec;
use crate::errors::AppResult;

const VEGA: &str = "https://cdn.jsdelivr.net/npm/vega@5";
const VEGA_LITE: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
const VEGA_EMBED: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";

pub fn render_page(spec: &ChartSpec, title: &str) -> AppResult<String> {
    // "</script>" inside a label would close the script block early
    let json = serde_json::to_string(spec)?.replace("</", "<\\/");
    let title = escape_html(title);

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="{VEGA}"></script>
  <script src="{VEGA_LITE}"></script>
  <script src="{VEGA_EMBED}"></script>
  <style>
    body {{ font-family: sans-serif; margin: 1.5rem; }}
    h1 {{ text-align: center; }}
    #timeline {{ width: 100%; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <div id="timeline"></div>
  <script>
    vegaEmbed("#timeline", {json}, {{ actions: false }});
  </script>
</body>
</html>
"##
    ))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
