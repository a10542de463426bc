use super::bar_ratio;
use contracts::dashboards::d400_project_summary::Bucket;
use leptos::prelude::*;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 240.0;
const LABEL_SPACE: f64 = 48.0;
const TOP_SPACE: f64 = 20.0;

/// Vertical bars, one per bucket, in bucket order.
#[component]
pub fn BarChart(#[prop(into)] buckets: Signal<Vec<Bucket>>) -> impl IntoView {
    let bars = move || {
        let items = buckets.get();
        let max = items.iter().map(|b| b.count).max().unwrap_or(0);
        let slot = WIDTH / items.len().max(1) as f64;
        let plot = HEIGHT - LABEL_SPACE - TOP_SPACE;

        items
            .into_iter()
            .enumerate()
            .map(|(i, b)| {
                let h = bar_ratio(b.count, max) * plot;
                let x = i as f64 * slot + slot * 0.15;
                let w = slot * 0.7;
                let y = TOP_SPACE + plot - h;
                let cx = x + w / 2.0;
                view! {
                    <g>
                        <rect x=x y=y width=w height=h rx="4" fill=b.color.clone() />
                        <text x=cx y={y - 6.0} text-anchor="middle" class="chart__value">
                            {b.count}
                        </text>
                        <text x=cx y={HEIGHT - LABEL_SPACE + 16.0} text-anchor="middle" class="chart__label">
                            {b.label}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <svg
            class="chart chart--bar"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            <line
                x1="0" x2=WIDTH
                y1={HEIGHT - LABEL_SPACE} y2={HEIGHT - LABEL_SPACE}
                stroke="#E5E7EB"
            />
            {bars}
        </svg>
    }
}
