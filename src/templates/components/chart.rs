use maud::{html, Markup};

const BAR_COLORS: &[&str] = &["#2563eb", "#10b981", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2"];

/// Horizontal bar chart of category counts. Inline SVG keeps the page
/// self-contained; no chart library, no static assets.
pub fn category_bar_chart(counts: &[(String, usize)]) -> Markup {
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);

    let bar_h: usize = 28;
    let gap: usize = 10;
    let label_w: usize = 180;
    let chart_w: usize = 420;
    let height = counts.len() * (bar_h + gap);

    html! {
        svg width=(label_w + chart_w + 60) height=(height) role="img" {
            @for (i, (label, n)) in counts.iter().enumerate() {
                @let y = i * (bar_h + gap);
                @let w = if *n == 0 { 0 } else { (n * chart_w / max).max(2) };
                @let color = BAR_COLORS[i % BAR_COLORS.len()];

                text x=(label_w - 8) y=(y + bar_h / 2 + 5) text-anchor="end" class="chart-label" {
                    (label)
                }
                rect x=(label_w) y=(y) width=(w) height=(bar_h) fill=(color) rx="4" {}
                text x=(label_w + w + 8) y=(y + bar_h / 2 + 5) class="chart-count" { (n) }
            }
        }
    }
}
