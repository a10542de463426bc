//! TopHeader component - application title and navigation between the
//! project list and the dashboard.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Gerenciamento de Projetos"</span>
            </div>

            <nav class="top-header__actions">
                <A href="/" attr:class="top-header__link">
                    {icon("list")}
                    <span>"Projetos"</span>
                </A>
                <A href="/dashboard" attr:class="top-header__link">
                    {icon("dashboard")}
                    <span>"Dashboard"</span>
                </A>
            </nav>
        </div>
    }
}
