use super::bar_ratio;
use leptos::prelude::*;

/// Ranked rows drawn as horizontal bars of one color.
#[component]
pub fn HorizontalBarChart(
    /// `(label, count)` in display order
    #[prop(into)]
    rows: Signal<Vec<(String, usize)>>,
    #[prop(into)]
    color: String,
) -> impl IntoView {
    let color = StoredValue::new(color);

    view! {
        <div class="chart chart--hbar">
            {move || {
                let items = rows.get();
                let max = items.iter().map(|(_, c)| *c).max().unwrap_or(0);
                items
                    .into_iter()
                    .map(|(label, count)| {
                        let width = format!(
                            "width: {:.1}%; background: {};",
                            bar_ratio(count, max) * 100.0,
                            color.get_value()
                        );
                        view! {
                            <div class="chart__hbar-row">
                                <span class="chart__hbar-label" title=label.clone()>{label.clone()}</span>
                                <div class="chart__hbar-track">
                                    <div class="chart__hbar-fill" style=width></div>
                                </div>
                                <span class="chart__hbar-value">{count}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
