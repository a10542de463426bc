//! PanelCard: thaw [`Card`] with a title row and the `card-appear` animation.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn PanelCard(
    #[prop(optional, into)]
    title: String,
    /// Animation delay in ms, for staggering a row of cards.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {(!title.is_empty()).then(|| view! {
                <h3 class="panel-card__title">{title}</h3>
            })}
            {children()}
        </Card>
    }
}
