use crate::config::AppConfig;
use crate::domain::a001_project::api::ProjectsApi;
use crate::domain::a001_project::state::{create_state, list_key, ListStatus};
use crate::domain::a001_project::ui::card::ProjectCard;
use crate::shared::components::search_bar::SearchBar;
use crate::shared::icons::icon;
use contracts::domain::a001_project::{Project, ProjectQuery};
use contracts::shared::request_seq::RequestSequencer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Select, Spinner};

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let roles = config.roles;
    let api = StoredValue::new(ProjectsApi::from_config(&config));
    let sequencer = StoredValue::new(RequestSequencer::new());

    let state = create_state();
    let search_text = RwSignal::new(String::new());
    let state_filter = RwSignal::new(String::new());
    let phase_filter = RwSignal::new(String::new());
    let manager_filter = RwSignal::new(String::new());

    let current_query = move || ProjectQuery {
        text: non_empty(search_text.get_untracked()),
        state: non_empty(state_filter.get_untracked()),
        phase: non_empty(phase_filter.get_untracked()),
        manager: non_empty(manager_filter.get_untracked()),
    };

    let load = move |query: ProjectQuery| {
        let searched = !query.is_empty();
        let seq = sequencer.get_value();
        let token = seq.issue();
        let api = api.get_value();
        state.update(|s| s.begin_load());

        spawn_local(async move {
            let result = api.fetch_filtered(&query).await;
            if let Err(e) = &result {
                log::error!("Failed to load projects: {}", e);
            }
            let applied = seq.apply_if_current(token, result, |result| {
                state.update(|s| s.finish_load(result, searched, &roles));
            });
            if !applied {
                log::debug!("Discarding stale project list response #{}", token.value());
            }
        });
    };

    let search = Callback::new(move |_: ()| load(current_query()));

    let clear_all = move |_| {
        search_text.set(String::new());
        state_filter.set(String::new());
        phase_filter.set(String::new());
        manager_filter.set(String::new());
        search.run(());
    };

    // Initial load, then reload whenever a filter select changes.
    Effect::new(move |prev: Option<()>| {
        state_filter.track();
        phase_filter.track();
        manager_filter.track();
        if prev.is_none() {
            load(ProjectQuery::default());
        } else {
            load(current_query());
        }
    });

    let on_updated = Callback::new(move |project: Project| {
        state.update(|s| {
            s.replace_project(project);
        });
    });

    // Record updates stay inside the keyed grid; only a status change
    // rebuilds the body.
    let status = Memo::new(move |_| state.with(|s| s.status()));
    let rows = Memo::new(move |_| {
        state.with(|s| {
            s.projects
                .iter()
                .enumerate()
                .map(|(i, p)| (list_key(i, p), p.clone()))
                .collect::<Vec<_>>()
        })
    });

    let has_filters = move || {
        !state_filter.get().is_empty()
            || !phase_filter.get().is_empty()
            || !manager_filter.get().is_empty()
            || !search_text.get().is_empty()
    };

    let options = |values: Vec<String>| {
        values
            .into_iter()
            .map(|v| view! { <option value=v.clone()>{v.clone()}</option> })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Gerencie e acompanhe seus projetos"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| search.run(())>
                        {icon("refresh")}
                        "Atualizar"
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchBar
                    value=search_text
                    on_search=search
                    disabled=Signal::derive(move || state.with(|s| s.loading))
                />
                <div class="filter-panel__selects">
                    <Select value=state_filter>
                        <option value="">"Todos os estados"</option>
                        {move || options(state.with(|s| s.choices.states.clone()))}
                    </Select>
                    <Select value=phase_filter>
                        <option value="">"Todas as fases"</option>
                        {move || options(state.with(|s| s.choices.phases.clone()))}
                    </Select>
                    <Select value=manager_filter>
                        <option value="">"Todos os gerentes"</option>
                        {move || options(state.with(|s| s.choices.managers.clone()))}
                    </Select>
                    <Show when=has_filters>
                        <button class="button button--ghost" on:click=clear_all title="Limpar filtros">
                            {icon("x")}
                            "Limpar"
                        </button>
                    </Show>
                </div>
            </div>

            {move || match status.get() {
                ListStatus::Loading => view! {
                    <div class="list-status">
                        <Spinner />
                        <p>"Carregando projetos..."</p>
                    </div>
                }.into_any(),
                ListStatus::Failed(err) => view! {
                    <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                        <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                        <span class="warning-box__text" style="color: var(--color-error);">{err}</span>
                    </div>
                }.into_any(),
                ListStatus::Empty { searched } => view! {
                    <div class="list-status">
                        <p>{ListStatus::empty_message(searched)}</p>
                    </div>
                }.into_any(),
                ListStatus::Ready => view! {
                    <div class="project-grid">
                        <For
                            each=move || rows.get()
                            key=|(key, _)| key.clone()
                            children=move |(_, p): (String, Project)| view! {
                                <ProjectCard project=p on_updated=on_updated />
                            }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
