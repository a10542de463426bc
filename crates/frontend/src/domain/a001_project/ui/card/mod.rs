use crate::config::AppConfig;
use crate::domain::a001_project::ui::details::StatusReportEditor;
use crate::shared::date_utils::{format_optional_date, format_percent};
use crate::shared::icons::icon;
use contracts::domain::a001_project::Project;
use contracts::shared::text::{display_label, is_blank, normalize_label};
use leptos::prelude::*;

/// Badge colors `(background, text, border)` per normalized state label.
const BADGE_STYLES: &[(&str, (&str, &str, &str))] = &[
    (
        "trabalho em andamento",
        ("rgba(251, 191, 36, 0.2)", "rgb(217, 119, 6)", "rgba(251, 191, 36, 0.4)"),
    ),
    (
        "concluido",
        ("rgba(74, 222, 128, 0.2)", "rgb(22, 163, 74)", "rgba(74, 222, 128, 0.4)"),
    ),
    (
        "cancelado",
        ("rgba(248, 113, 113, 0.2)", "rgb(220, 38, 38)", "rgba(248, 113, 113, 0.4)"),
    ),
    (
        "aberto",
        ("rgba(74, 222, 128, 0.2)", "rgb(22, 163, 74)", "rgba(74, 222, 128, 0.4)"),
    ),
    (
        "paralisado",
        ("rgba(148, 163, 184, 0.2)", "rgb(71, 85, 105)", "rgba(148, 163, 184, 0.4)"),
    ),
    (
        "pendente",
        ("rgba(96, 165, 250, 0.2)", "rgb(37, 99, 235)", "rgba(96, 165, 250, 0.4)"),
    ),
];

const BADGE_FALLBACK: &str = "pendente";

/// Inline style of the state badge. Unknown states use the "pendente" look.
pub fn badge_style(state: Option<&str>) -> String {
    let key = normalize_label(state);
    let (bg, text, border) = BADGE_STYLES
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| BADGE_STYLES.iter().find(|(k, _)| *k == BADGE_FALLBACK))
        .map(|(_, style)| *style)
        .unwrap_or(("transparent", "inherit", "currentColor"));
    format!(
        "background-color: {}; color: {}; border: 1px solid {};",
        bg, text, border
    )
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectCard(
    project: Project,
    /// Receives the server's record after the status report is saved
    #[prop(into)]
    on_updated: Callback<Project>,
) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let (expanded, set_expanded) = signal(false);

    let state = config.roles.state_of(&project).map(str::to_string);
    let badge = badge_style(state.as_deref());
    let badge_label = display_label(state.as_deref());

    let title = project
        .nome_projeto
        .clone()
        .unwrap_or_else(|| project.numero_projeto.clone());
    let client = project.cliente.clone().unwrap_or_default();
    let manager = display_label(project.gerente.as_deref());
    let phase = display_label(config.roles.phase_of(&project));
    let start = format_optional_date(project.data_inicio.as_deref());
    let end = format_optional_date(project.data_termino_aprovada.as_deref());
    let percent = project.completion_percent();
    let progress_style = format!("width: {:.1}%;", percent);
    let number = project.numero_projeto.clone();
    let read_only = is_blank(Some(number.as_str()));

    // Latest server copy, so a collapsed and reopened card edits fresh text.
    let current = RwSignal::new(project);
    let on_confirmed = Callback::new(move |saved: Project| {
        current.set(saved.clone());
        on_updated.run(saved);
    });

    view! {
        <div class="project-card">
            <div class="project-card__header">
                <div class="project-card__heading">
                    <h3 class="project-card__title">{title}</h3>
                    <p class="project-card__subtitle">{format!("Cliente: {}", client)}</p>
                    <p class="project-card__number">{number}</p>
                </div>
                <span class="project-card__badge" style=badge>{badge_label}</span>
            </div>

            <Show when=move || expanded.get()>
                <div class="project-card__details">
                    <div class="project-card__grid">
                        <div>
                            <p class="project-card__field-label">"Gerente"</p>
                            <p class="project-card__field-value">{manager.clone()}</p>
                        </div>
                        <div>
                            <p class="project-card__field-label">"Fase"</p>
                            <p class="project-card__field-value">{phase.clone()}</p>
                        </div>
                        <div>
                            <p class="project-card__field-label">"Início"</p>
                            <p class="project-card__field-value">{start.clone()}</p>
                        </div>
                        <div>
                            <p class="project-card__field-label">"Término Previsto"</p>
                            <p class="project-card__field-value">{end.clone()}</p>
                        </div>
                    </div>

                    <div class="project-card__progress">
                        <p class="project-card__field-label">"Progresso"</p>
                        <div class="progress">
                            <div class="progress__track">
                                <div class="progress__fill" style=progress_style.clone()></div>
                            </div>
                            <span class="progress__value">{format_percent(percent)}</span>
                        </div>
                    </div>

                    <StatusReportEditor project=current.get_untracked() on_confirmed=on_confirmed read_only=read_only />
                </div>
            </Show>

            <button
                class="project-card__toggle"
                on:click=move |_| set_expanded.update(|v| *v = !*v)
            >
                {move || if expanded.get() { "Ver menos" } else { "Ver mais detalhes" }}
                {move || if expanded.get() { icon("chevron-up") } else { icon("chevron-down") }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_style_ignores_case_and_accents() {
        assert_eq!(badge_style(Some("Concluído")), badge_style(Some(" CONCLUIDO")));
        assert!(badge_style(Some("Cancelado")).contains("rgb(220, 38, 38)"));
    }

    #[test]
    fn test_badge_style_falls_back_to_pending() {
        let pending = badge_style(Some("Pendente"));
        assert_eq!(badge_style(Some("Em revisão")), pending);
        assert_eq!(badge_style(None), pending);
        assert!(pending.contains("rgb(37, 99, 235)"));
    }
}
