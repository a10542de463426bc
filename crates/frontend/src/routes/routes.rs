use crate::dashboards::ProjectsDashboard;
use crate::domain::a001_project::ui::list::ProjectList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">"Página não encontrada."</span>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProjectList />
                    <Route path=path!("/dashboard") view=ProjectsDashboard />
                </Routes>
            </Shell>
        </Router>
    }
}
