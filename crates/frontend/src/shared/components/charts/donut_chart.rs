use super::{circumference, donut_segments};
use crate::shared::date_utils::format_percent;
use contracts::dashboards::d400_project_summary::Bucket;
use leptos::prelude::*;

const RADIUS: f64 = 70.0;
const STROKE: f64 = 28.0;
const SIZE: f64 = 200.0;

/// Donut with a legend listing count and share per bucket.
#[component]
pub fn DonutChart(
    #[prop(into)] buckets: Signal<Vec<Bucket>>,
    /// Text in the middle of the ring
    #[prop(optional, into)]
    center_label: String,
) -> impl IntoView {
    let full = circumference(RADIUS);
    let center = SIZE / 2.0;

    let rows = Memo::new(move |_| {
        let items = buckets.get();
        let counts: Vec<usize> = items.iter().map(|b| b.count).collect();
        items
            .into_iter()
            .zip(donut_segments(&counts, RADIUS))
            .collect::<Vec<_>>()
    });

    let total = move || buckets.with(|items| items.iter().map(|b| b.count).sum::<usize>());

    view! {
        <div class="chart chart--donut">
            <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) width="200" height="200" role="img">
                <circle cx=center cy=center r=RADIUS fill="none" stroke="#F1F5F9" stroke-width=STROKE />
                <g transform=format!("rotate(-90 {} {})", center, center)>
                    {move || rows.get().into_iter().map(|(b, seg)| view! {
                        <circle
                            cx=center cy=center r=RADIUS
                            fill="none"
                            stroke=b.color.clone()
                            stroke-width=STROKE
                            stroke-dasharray=seg.dasharray(full)
                            stroke-dashoffset=seg.dashoffset()
                        />
                    }).collect_view()}
                </g>
                <text x=center y={center - 4.0} text-anchor="middle" class="chart__total">{total}</text>
                <text x=center y={center + 16.0} text-anchor="middle" class="chart__label">{center_label}</text>
            </svg>

            <ul class="chart__legend">
                {move || rows.get().into_iter().map(|(b, seg)| view! {
                    <li class="chart__legend-item">
                        <span class="chart__swatch" style=format!("background: {};", b.color)></span>
                        <span class="chart__legend-label">{b.label}</span>
                        <span class="chart__legend-value">
                            {format!("{} ({})", b.count, format_percent(seg.percent))}
                        </span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
