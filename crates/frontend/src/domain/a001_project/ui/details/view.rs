use super::view_model::StatusReportViewModel;
use crate::config::AppConfig;
use crate::domain::a001_project::api::ProjectsApi;
use crate::shared::icons::icon;
use contracts::domain::a001_project::{split_status_report, Project};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner, Textarea, TextareaResize};

const NO_DESCRIPTION: &str = "Nenhuma descrição fornecida.";

#[component]
#[allow(non_snake_case)]
pub fn StatusReportEditor(
    project: Project,
    /// Called with the server's record after a successful save
    #[prop(into)]
    on_confirmed: Callback<Project>,
    /// Hides the edit action (records without an id cannot be updated)
    #[prop(optional)]
    read_only: bool,
) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let vm = StatusReportViewModel::new(ProjectsApi::from_config(&config), &project);
    let can_commit = vm.can_commit();
    let is_saving = vm.is_saving();

    let confirmed_view = move || {
        let confirmed = vm.draft.with(|d| d.confirmed().to_string());
        let (link, description) = split_status_report(&confirmed);
        let link = link.map(str::to_string);
        let description = if description.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            description.to_string()
        };
        view! {
            {link.map(|href| view! {
                <a class="status-report__link" href=href.clone() target="_blank" rel="noopener noreferrer">
                    {icon("link")}
                    <span>"Abrir relatório"</span>
                </a>
            })}
            <p class="status-report__text">{description}</p>
        }
    };

    view! {
        <div class="status-report">
            <div class="status-report__header">
                <span class="status-report__title">"Status Report"</span>
                <Show when=move || !read_only && !vm.editing.get()>
                    <button
                        class="button button--ghost"
                        on:click=move |_| vm.start_editing()
                        title="Editar status report"
                    >
                        {icon("edit")}
                        "Editar"
                    </button>
                </Show>
            </div>

            <Show
                when=move || vm.editing.get()
                fallback=confirmed_view
            >
                <Textarea
                    value=vm.text
                    placeholder="Link do relatório seguido da descrição..."
                    resize=TextareaResize::Vertical
                    attr:rows=5
                    attr:style="width: 100%;"
                />
                <div class="status-report__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_confirmed)
                        disabled=Signal::derive(move || !can_commit())
                    >
                        "Salvar"
                    </Button>
                    <Button
                        on_click=move |_| vm.cancel_command()
                        disabled=Signal::derive(is_saving)
                    >
                        "Cancelar"
                    </Button>
                    {move || is_saving().then(|| view! {
                        <Spinner />
                        <span class="status-report__saving">"Salvando..."</span>
                    })}
                </div>
            </Show>

            {move || vm.draft.with(|d| d.error().map(str::to_string)).map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}
        </div>
    }
}
