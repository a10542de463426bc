use crate::config::AppConfig;
use crate::domain::a001_project::api::ProjectsApi;
use crate::shared::components::charts::{BarChart, DonutChart, HorizontalBarChart};
use crate::shared::components::panel_card::PanelCard;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::format_percent;
use crate::shared::icons::icon;
use chrono::Local;
use contracts::dashboards::d400_project_summary::{summarize, ProjectSummary};
use contracts::domain::a001_project::Project;
use contracts::shared::request_seq::RequestSequencer;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

const MANAGER_BAR_COLOR: &str = "#3B82F6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Phase,
    State,
    Managers,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::Phase, DashboardTab::State, DashboardTab::Managers];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Phase => "Por Fase",
            DashboardTab::State => "Por Estado",
            DashboardTab::Managers => "Gerentes",
        }
    }
}

/// Project metrics dashboard
#[component]
pub fn ProjectsDashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let roles = config.roles;
    let palettes = StoredValue::new(config.palettes());
    let top_n = config.dashboard.top_managers;
    let api = StoredValue::new(ProjectsApi::from_config(&config));
    let sequencer = StoredValue::new(RequestSequencer::new());

    let (records, set_records) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let tab = RwSignal::new(DashboardTab::Phase);

    let reload = move || {
        let seq = sequencer.get_value();
        let token = seq.issue();
        let api = api.get_value();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api.fetch_all().await;
            let applied = seq.apply_if_current(token, result, |result| {
                match result {
                    Ok(list) => {
                        log::debug!("Dashboard loaded {} projects", list.len());
                        set_records.set(list);
                    }
                    Err(e) => {
                        log::error!("Failed to load dashboard data: {}", e);
                        set_records.set(Vec::new());
                        set_error.set(Some(e.user_message()));
                    }
                }
                set_loading.set(false);
            });
            if !applied {
                log::debug!("Discarding stale dashboard response #{}", token.value());
            }
        });
    };

    reload();

    let summary = Memo::new(move |_| {
        let today = Local::now().date_naive();
        records.with(|list| palettes.with_value(|p| summarize(list, &roles, p, today, top_n)))
    });

    let count = move |f: fn(&ProjectSummary) -> usize| Signal::derive(move || summary.with(f));

    let total_subtitle = Signal::derive(move || {
        summary.with(|s| {
            Some(format!(
                "{} em andamento · média {}",
                s.in_progress_count,
                format_percent(s.average_completion)
            ))
        })
    });
    let share = move |f: fn(&ProjectSummary) -> usize| {
        Signal::derive(move || {
            summary.with(|s| Some(format!("{} do total", format_percent(s.share_percent(f(s))))))
        })
    };

    let phase_buckets = Signal::derive(move || summary.with(|s| s.phase_buckets.clone()));
    let state_buckets = Signal::derive(move || summary.with(|s| s.state_buckets.clone()));
    let manager_rows = Signal::derive(move || {
        summary.with(|s| {
            s.manager_top
                .iter()
                .map(|m| (m.manager.clone(), m.count))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page d400-dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard de Projetos"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| reload()
                        disabled=move || loading.get()
                    >
                        {icon("refresh")}
                        "Atualizar"
                    </button>
                </div>
            </div>

            {move || error.get().map(|err| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{err}</span>
                </div>
            })}

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="list-status">
                        <Spinner />
                        <p>"Carregando dados..."</p>
                    </div>
                }
            >
                <div class="stat-grid">
                    <StatCard
                        label="Total Projetos".to_string()
                        icon_name="list".to_string()
                        value=count(|s| s.total_count)
                        tone=StatTone::Neutral
                        subtitle=total_subtitle
                    />
                    <StatCard
                        label="Concluídos".to_string()
                        icon_name="check-circle".to_string()
                        value=count(|s| s.completed_count)
                        tone=StatTone::Success
                        subtitle=share(|s| s.completed_count)
                    />
                    <StatCard
                        label="Atrasados".to_string()
                        icon_name="alert-triangle".to_string()
                        value=count(|s| s.overdue_count)
                        tone=StatTone::Error
                        subtitle=share(|s| s.overdue_count)
                    />
                    <StatCard
                        label="Paralisados".to_string()
                        icon_name="pause-circle".to_string()
                        value=count(|s| s.paused_count)
                        tone=StatTone::Warning
                        subtitle=share(|s| s.paused_count)
                    />
                    <StatCard
                        label="Cancelados".to_string()
                        icon_name="x-circle".to_string()
                        value=count(|s| s.canceled_count)
                        tone=StatTone::Neutral
                        subtitle=share(|s| s.canceled_count)
                    />
                </div>

                <div class="tabs">
                    {DashboardTab::ALL.into_iter().map(|t| view! {
                        <button
                            class=move || if tab.get() == t { "tabs__item tabs__item--active" } else { "tabs__item" }
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }).collect_view()}
                </div>

                {move || match tab.get() {
                    DashboardTab::Phase => view! {
                        <PanelCard title="Distribuição por Fase">
                            <p class="panel-card__description">"Volume de projetos em cada etapa"</p>
                            <BarChart buckets=phase_buckets />
                        </PanelCard>
                    }.into_any(),
                    DashboardTab::State => view! {
                        <PanelCard title="Status dos Projetos">
                            <p class="panel-card__description">"Proporção de estados dos projetos"</p>
                            <DonutChart buckets=state_buckets center_label="projetos" />
                        </PanelCard>
                    }.into_any(),
                    DashboardTab::Managers => view! {
                        <PanelCard title="Top Gerentes">
                            <p class="panel-card__description">"Gerentes com maior volume de projetos"</p>
                            <HorizontalBarChart rows=manager_rows color=MANAGER_BAR_COLOR />
                        </PanelCard>
                    }.into_any(),
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Por Fase", "Por Estado", "Gerentes"]);
    }
}
