use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Free-text search box. Enter or "Buscar" submits; the clear button empties
/// the text and submits again.
#[component]
pub fn SearchBar(
    value: RwSignal<String>,
    #[prop(into)]
    on_search: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar por nome, número, cliente ou gerente...".to_string()
    } else {
        placeholder
    };

    let clear = move |_| {
        value.set(String::new());
        on_search.run(());
    };

    view! {
        <div class="search-bar">
            <div style="position: relative; display: inline-flex; align-items: center; flex: 1;">
                <span class="search-bar__icon">{icon("search")}</span>
                <input
                    type="text"
                    class="search-bar__input"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            on_search.run(());
                        }
                    }
                />
                {move || (!value.get().is_empty()).then(|| view! {
                    <button
                        class="search-bar__clear"
                        on:click=clear
                        title="Limpar"
                    >
                        {icon("x")}
                    </button>
                })}
            </div>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_search.run(())
                disabled=disabled
            >
                "Buscar"
            </Button>
        </div>
    }
}
