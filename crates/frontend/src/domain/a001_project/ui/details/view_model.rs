use crate::domain::a001_project::api::ProjectsApi;
use contracts::domain::a001_project::{Project, StatusReportDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for one project's status report
#[derive(Clone, Copy)]
pub struct StatusReportViewModel {
    pub draft: RwSignal<StatusReportDraft>,
    /// Bound to the textarea
    pub text: RwSignal<String>,
    pub editing: RwSignal<bool>,
    api: StoredValue<ProjectsApi>,
    project_id: StoredValue<String>,
}

impl StatusReportViewModel {
    pub fn new(api: ProjectsApi, project: &Project) -> Self {
        let confirmed = project.status_report_text();
        let vm = Self {
            draft: RwSignal::new(StatusReportDraft::new(confirmed)),
            text: RwSignal::new(confirmed.to_string()),
            editing: RwSignal::new(false),
            api: StoredValue::new(api),
            project_id: StoredValue::new(project.numero_projeto.clone()),
        };

        let draft = vm.draft;
        let text = vm.text;
        Effect::new(move |_| {
            let current = text.get();
            draft.update(|d| d.set_draft(&current));
        });

        vm
    }

    pub fn can_commit(&self) -> impl Fn() -> bool + Copy + 'static {
        let draft = self.draft;
        move || draft.with(|d| d.can_commit())
    }

    pub fn is_saving(&self) -> impl Fn() -> bool + Copy + 'static {
        let draft = self.draft;
        move || draft.with(|d| d.is_saving())
    }

    pub fn start_editing(&self) {
        self.editing.set(true);
    }

    /// Sends the draft. Does nothing when the draft is unchanged or a save
    /// is already running.
    pub fn save_command(&self, on_confirmed: Callback<Project>) {
        let Some(body) = self.draft.try_update(|d| d.begin_commit()).flatten() else {
            return;
        };

        let api = self.api.get_value();
        let id = self.project_id.get_value();
        let draft = self.draft;
        let text = self.text;
        let editing = self.editing;
        spawn_local(async move {
            match api.update_status_report(&id, &body).await {
                Ok(project) => {
                    log::info!("Status report of project {} updated", id);
                    let stored = project.status_report_text().to_string();
                    draft.update(|d| d.confirm(&stored));
                    text.set(stored);
                    editing.set(false);
                    on_confirmed.run(project);
                }
                Err(e) => {
                    log::error!("Failed to update status report of {}: {}", id, e);
                    draft.update(|d| d.fail(&format!("Erro ao salvar: {}", e.user_message())));
                }
            }
        });
    }

    pub fn cancel_command(&self) {
        self.draft.update(|d| d.reset());
        let confirmed = self.draft.with_untracked(|d| d.confirmed().to_string());
        self.text.set(confirmed);
        self.editing.set(false);
    }
}
