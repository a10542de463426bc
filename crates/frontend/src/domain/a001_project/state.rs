use contracts::domain::a001_project::{filter_options, FieldRoles, Project};
use contracts::shared::error::ApiError;
use contracts::shared::text::is_blank;
use leptos::prelude::*;

pub const EMPTY_SEARCH_MESSAGE: &str = "Nenhum projeto corresponde à sua busca.";
pub const EMPTY_LIST_MESSAGE: &str = "Nenhum projeto encontrado.";

/// What the list page body shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    /// The load succeeded with no records. `searched` tells a search or
    /// filter apart from the unfiltered list.
    Empty { searched: bool },
    Ready,
}

impl ListStatus {
    pub fn empty_message(searched: bool) -> &'static str {
        if searched {
            EMPTY_SEARCH_MESSAGE
        } else {
            EMPTY_LIST_MESSAGE
        }
    }
}

/// Choices offered by the filter selects, taken from the unfiltered list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterChoices {
    pub states: Vec<String>,
    pub phases: Vec<String>,
    pub managers: Vec<String>,
}

impl FilterChoices {
    pub fn from_projects(projects: &[Project], roles: &FieldRoles) -> Self {
        Self {
            states: filter_options(projects, |p| roles.state_of(p)),
            phases: filter_options(projects, |p| roles.phase_of(p)),
            managers: filter_options(projects, |p| p.gerente.as_deref()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProjectListState {
    pub projects: Vec<Project>,
    pub loading: bool,
    pub error: Option<String>,
    /// Whether the last completed load was a search/filter
    pub searched: bool,
    pub choices: FilterChoices,
}

impl Default for ProjectListState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            loading: true,
            error: None,
            searched: false,
            choices: FilterChoices::default(),
        }
    }
}

impl ProjectListState {
    pub fn status(&self) -> ListStatus {
        if self.loading {
            ListStatus::Loading
        } else if let Some(err) = &self.error {
            ListStatus::Failed(err.clone())
        } else if self.projects.is_empty() {
            ListStatus::Empty {
                searched: self.searched,
            }
        } else {
            ListStatus::Ready
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies the outcome of a load. An unfiltered load also refreshes the
    /// filter choices; a failed one clears the list.
    pub fn finish_load(
        &mut self,
        result: Result<Vec<Project>, ApiError>,
        searched: bool,
        roles: &FieldRoles,
    ) {
        self.loading = false;
        self.searched = searched;
        match result {
            Ok(projects) => {
                if !searched {
                    self.choices = FilterChoices::from_projects(&projects, roles);
                }
                self.projects = projects;
                self.error = None;
            }
            Err(e) => {
                self.projects.clear();
                self.error = Some(e.user_message());
            }
        }
    }

    /// Swaps in the server's copy of a record after an update. Returns false
    /// when the record is no longer in the list.
    pub fn replace_project(&mut self, updated: Project) -> bool {
        if is_blank(Some(updated.numero_projeto.as_str())) {
            return false;
        }
        match self
            .projects
            .iter_mut()
            .find(|p| p.numero_projeto == updated.numero_projeto)
        {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }
}

/// Key of a record in the rendered list. Records without an id get a
/// positional key so they never collide.
pub fn list_key(index: usize, project: &Project) -> String {
    if is_blank(Some(project.numero_projeto.as_str())) {
        format!("#{}", index)
    } else {
        project.numero_projeto.clone()
    }
}

pub fn create_state() -> RwSignal<ProjectListState> {
    RwSignal::new(ProjectListState::default())
}
