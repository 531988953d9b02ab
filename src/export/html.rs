//! Self-contained HTML dashboard page
//!
//! Charts are emitted as Chart.js configurations inside `<script>` tags and
//! drawn in the browser. Every piece of dataset text that lands in markup
//! goes through [`escape_html`] first.

use chrono::{DateTime, Local};
use serde_json::Value;

use marquee_app::{Dashboard, TableRow, TooltipContent};
use marquee_core::prelude::*;
use marquee_core::{escape_html, format_count, format_currency, Catalog};

const CHART_JS: &str =
    r#"<script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>"#;

const PAGE_STYLES: &str = r#"
<style>
  body { background: #101014; color: #eee; font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1200px; padding: 16px; }
  h1 { color: #d4af37; }
  .stats { display: flex; gap: 16px; }
  .stat { background: #1c1c22; border: 1px solid #333; border-radius: 8px; flex: 1; padding: 12px; }
  .stat .value { color: #d4af37; font-size: 1.6em; font-weight: bold; }
  .charts { display: grid; gap: 16px; grid-template-columns: 1fr 1fr; margin: 16px 0; }
  .chart { background: #1c1c22; border: 1px solid #333; border-radius: 8px; padding: 12px; }
  .controls { display: flex; gap: 8px; margin: 8px 0; }
  table { border-collapse: collapse; width: 100%; }
  th { color: #d4af37; text-align: left; }
  td, th { border-bottom: 1px solid #333; padding: 4px 8px; }
  tr.film:hover { background: #3a3216; }
  .money { text-align: right; }
  #tooltip { background: #1c1c22; border: 1px solid #d4af37; border-radius: 6px; display: none; max-width: 360px; padding: 8px; position: absolute; pointer-events: none; }
  footer { color: #888; font-size: 0.8em; margin-top: 16px; }
</style>
"#;

/// Wires the chart configs, table controls and the row tooltip.
const PAGE_SCRIPT: &str = r##"
<script>
  document.querySelectorAll("script.chart-config").forEach((node) => {
    const config = JSON.parse(node.textContent);
    config.options.plugins.tooltip.callbacks = {
      label: (ctx) => ctx.dataset.tooltipLines[ctx.dataIndex],
    };
    const insights = config.data.datasets[0].insights;
    if (insights) {
      config.options.onClick = (event, elements) => {
        if (!elements.length) return;
        const index = elements[0].index;
        console.log(config.data.labels[index], insights[index] || "No insight recorded");
      };
    }
    new Chart(document.getElementById(node.dataset.canvas), config);
  });

  const body = document.querySelector("#films tbody");
  const rows = Array.from(body.querySelectorAll("tr.film"));
  const search = document.getElementById("search");
  let sortKey = null;

  function refresh() {
    const term = search.value.toLowerCase();
    let visible = rows.filter((row) => row.dataset.title.toLowerCase().includes(term));
    if (sortKey === "year") {
      visible = visible.slice().sort((a, b) => Number(a.dataset.year) - Number(b.dataset.year));
    } else if (sortKey === "boxOffice") {
      visible = visible.slice().sort((a, b) => Number(b.dataset.boxOffice) - Number(a.dataset.boxOffice));
    }
    tooltip.style.display = "none";
    body.replaceChildren(...visible);
  }

  search.addEventListener("input", refresh);
  document.getElementById("sort-year").addEventListener("click", () => { sortKey = "year"; refresh(); });
  document.getElementById("sort-box-office").addEventListener("click", () => { sortKey = "boxOffice"; refresh(); });

  const tooltip = document.getElementById("tooltip");
  rows.forEach((row) => {
    if (!row.dataset.tooltip) return;
    row.addEventListener("mouseenter", () => {
      const rect = row.getBoundingClientRect();
      tooltip.innerHTML = row.dataset.tooltip;
      tooltip.style.display = "block";
      tooltip.style.left = `${rect.left + rect.width / 2 - tooltip.offsetWidth / 2}px`;
      tooltip.style.top = `${rect.bottom + window.scrollY}px`;
    });
    row.addEventListener("mouseleave", () => { tooltip.style.display = "none"; });
  });
</script>
"##;

/// Canvas ids in dashboard order
const CANVAS_IDS: [&str; 4] = [
    "top-films-chart",
    "directors-chart",
    "over-time-chart",
    "countries-chart",
];

/// Serialize a chart config so it can sit inside a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where the `\u` escapes
/// decode to the same text, so dataset text can never close the tag.
fn script_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn stat_card(label: &str, value: &str) -> String {
    format!(
        "<div class=\"stat\"><div>{}</div><div class=\"value\">{}</div></div>",
        escape_html(label),
        escape_html(value)
    )
}

fn table_row(row: &TableRow) -> String {
    // Attribute holds markup; escaping it again keeps the insight escaped once
    // after the browser decodes the attribute.
    let tooltip = TooltipContent::for_row(row)
        .map(|content| escape_html(&content.to_html()))
        .unwrap_or_default();
    format!(
        "<tr class=\"film\" data-title=\"{title}\" data-year=\"{year}\" data-box-office=\"{gross}\" data-tooltip=\"{tooltip}\">\
<td>{title}</td><td>{year_cell}</td><td>{director}</td><td class=\"money\">{gross_cell}</td><td>{country}</td></tr>\n",
        title = escape_html(&row.title),
        year = row.release_year.unwrap_or(0),
        gross = row.box_office.unwrap_or(0.0),
        tooltip = tooltip,
        year_cell = escape_html(&row.year_display()),
        director = escape_html(&row.director),
        gross_cell = escape_html(&row.box_office_display()),
        country = escape_html(row.country_display()),
    )
}

/// Render the full dashboard page for `catalog`.
pub fn render_page(
    title: &str,
    catalog: &Catalog,
    dashboard: &Dashboard,
    generated_at: DateTime<Local>,
) -> Result<String> {
    let summary = &dashboard.summary;
    let mut page = String::with_capacity(16 * 1024 + catalog.len() * 256);

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    page.push_str(CHART_JS);
    page.push_str(PAGE_STYLES);
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    page.push_str("<section class=\"stats\">\n");
    page.push_str(&stat_card("Total Films", &format_count(summary.count)));
    page.push_str(&stat_card(
        "Highest Box Office",
        &format_currency(summary.max_box_office),
    ));
    page.push_str(&stat_card(
        "Total Box Office",
        &format_currency(summary.total_box_office),
    ));
    page.push_str("\n</section>\n");

    page.push_str("<section class=\"charts\">\n");
    for (chart, canvas) in dashboard.charts.iter().zip(CANVAS_IDS) {
        page.push_str(&format!(
            "<div class=\"chart\"><h2>{}</h2><canvas id=\"{}\"></canvas></div>\n",
            escape_html(&chart.title),
            canvas
        ));
        page.push_str(&format!(
            "<script type=\"application/json\" class=\"chart-config\" data-canvas=\"{}\">{}</script>\n",
            canvas,
            script_json(&chart.to_chartjs())?
        ));
    }
    page.push_str("</section>\n");

    page.push_str(
        "<div class=\"controls\">\
<input id=\"search\" type=\"search\" placeholder=\"Search by title\">\
<button id=\"sort-year\">Sort by Year</button>\
<button id=\"sort-box-office\">Sort by Box Office</button></div>\n",
    );
    page.push_str(
        "<table id=\"films\"><thead><tr><th>Title</th><th>Year</th><th>Director</th>\
<th>Box Office</th><th>Country</th></tr></thead>\n<tbody>\n",
    );
    for film in catalog.iter() {
        page.push_str(&table_row(&TableRow::from_film(film)));
    }
    page.push_str("</tbody></table>\n<div id=\"tooltip\"></div>\n");

    page.push_str(&format!(
        "<footer>Generated {}</footer>\n",
        generated_at.format("%Y-%m-%d %H:%M")
    ));
    page.push_str(PAGE_SCRIPT);
    page.push_str("</body>\n</html>\n");

    trace!("Rendered export page ({} bytes)", page.len());
    Ok(page)
}
