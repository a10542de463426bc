use crate::config::load_config;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Configuration is read once and shared with every page.
    let config = load_config();
    log::debug!(
        "Projects API at {} (state column: {}, phase column: {})",
        config.api.base_url,
        config.roles.state.api_name(),
        config.roles.phase.api_name()
    );
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
