//! HTML rendering of the chart view.

use serde::Serialize;
use yield_core::models::YieldSchedule;
use yield_core::views::{CHART_TITLE, ChartSeries, ChartView};

#[derive(Serialize)]
struct ChartData {
    title: &'static str,
    labels: Vec<u32>,
    datasets: [ChartSeries; 2],
}

/// Render a self-contained HTML line chart (data embedded as JSON).
///
/// The template is spliced with `replace` rather than `format!` because it
/// contains JS template literals whose `${...}` braces would conflict with
/// Rust formatting.
pub fn render_chart(schedule: &YieldSchedule) -> anyhow::Result<String> {
    let view = ChartView::new(schedule);
    let data = ChartData {
        title: CHART_TITLE,
        labels: view.labels(),
        datasets: view.series(),
    };
    let json = serde_json::to_string(&data)?; // embedded as JS object literal

    Ok(TEMPLATE.replace("__DATA__", &json))
}

const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Yield Estimator</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; padding: 16px; }
  h1 { font-size: 18px; text-align: center; margin: 8px 0; }
  .legend { display: flex; gap: 16px; justify-content: center; font-size: 14px; color: #333; margin-bottom: 8px; }
  .swatch { display: inline-block; width: 12px; height: 12px; border-radius: 2px; margin-right: 6px; vertical-align: -1px; }
  svg { display: block; margin: 0 auto; }
  .axis { stroke: #999; }
  .grid { stroke: #eee; }
  .tick { font-size: 11px; fill: #666; font-variant-numeric: tabular-nums; }
</style>
</head>
<body>
<h1 id="title"></h1>
<div class="legend" id="legend"></div>
<svg id="chart" width="860" height="460"></svg>

<script>
// Embedded chart data (JSON object literal)
const DATA = __DATA__;

const W = 860, H = 460, PAD = { left: 56, right: 16, top: 16, bottom: 36 };

function maxValue() {
  let max = 0;
  for (const ds of DATA.datasets) {
    for (const v of ds.values) max = Math.max(max, v);
  }
  return max === 0 ? 1 : max;
}

function x(i) {
  const n = Math.max(DATA.labels.length - 1, 1);
  return PAD.left + (W - PAD.left - PAD.right) * (i / n);
}

function y(v) {
  return H - PAD.bottom - (H - PAD.bottom - PAD.top) * (v / maxValue());
}

function el(name, attrs) {
  const node = document.createElementNS("http://www.w3.org/2000/svg", name);
  for (const [k, v] of Object.entries(attrs)) node.setAttribute(k, v);
  return node;
}

function renderLegend() {
  const legend = document.getElementById("legend");
  for (const ds of DATA.datasets) {
    const item = document.createElement("span");
    const swatch = document.createElement("span");
    swatch.className = "swatch";
    swatch.style.background = ds.background_color;
    swatch.style.border = `1px solid ${ds.border_color}`;
    item.appendChild(swatch);
    item.appendChild(document.createTextNode(ds.label));
    legend.appendChild(item);
  }
}

function renderChart() {
  const svg = document.getElementById("chart");

  svg.appendChild(el("line", { x1: PAD.left, y1: H - PAD.bottom, x2: W - PAD.right, y2: H - PAD.bottom, class: "axis" }));
  svg.appendChild(el("line", { x1: PAD.left, y1: PAD.top, x2: PAD.left, y2: H - PAD.bottom, class: "axis" }));

  DATA.labels.forEach((label, i) => {
    const tick = el("text", { x: x(i), y: H - PAD.bottom + 18, "text-anchor": "middle", class: "tick" });
    tick.textContent = label;
    svg.appendChild(tick);
  });

  const steps = 5;
  for (let s = 0; s <= steps; s++) {
    const v = maxValue() * (s / steps);
    if (s > 0) {
      svg.appendChild(el("line", { x1: PAD.left, y1: y(v), x2: W - PAD.right, y2: y(v), class: "grid" }));
    }
    const tick = el("text", { x: PAD.left - 8, y: y(v) + 4, "text-anchor": "end", class: "tick" });
    tick.textContent = Math.round(v * 100) / 100;
    svg.appendChild(tick);
  }

  for (const ds of DATA.datasets) {
    const points = ds.values.map((v, i) => `${x(i)},${y(v)}`).join(" ");
    svg.appendChild(el("polyline", { points, fill: "none", stroke: ds.border_color, "stroke-width": 2 }));
    ds.values.forEach((v, i) => {
      svg.appendChild(el("circle", { cx: x(i), cy: y(v), r: 3, fill: ds.background_color, stroke: ds.border_color }));
    });
  }
}

document.getElementById("title").textContent = DATA.title;
renderLegend();
renderChart();
</script>
</body>
</html>
"#;
