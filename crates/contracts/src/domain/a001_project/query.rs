use super::aggregate::{FieldRoles, Project, ProjectField};
use crate::shared::text::normalize_label;
use serde::{Deserialize, Serialize};

/// Search/filter request from the list page.
///
/// Blank fields mean "no constraint on this dimension".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectQuery {
    pub text: Option<String>,
    pub state: Option<String>,
    pub phase: Option<String>,
    pub manager: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ProjectQuery {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    /// Copy with every field trimmed and blank fields dropped.
    pub fn normalized(&self) -> Self {
        Self {
            text: non_blank(&self.text),
            state: non_blank(&self.state),
            phase: non_blank(&self.phase),
            manager: non_blank(&self.manager),
        }
    }

    pub fn is_empty(&self) -> bool {
        let q = self.normalized();
        q.text.is_none() && q.state.is_none() && q.phase.is_none() && q.manager.is_none()
    }

    /// The search text when it is the only constraint.
    pub fn text_only(&self) -> Option<String> {
        let q = self.normalized();
        match (&q.text, &q.state, &q.phase, &q.manager) {
            (Some(text), None, None, None) => Some(text.clone()),
            _ => None,
        }
    }

    /// Server-side filter parameters, with state/phase routed to the record
    /// columns configured in `roles`.
    pub fn to_params(&self, roles: &FieldRoles) -> FilterParams {
        let q = self.normalized();
        let mut params = FilterParams {
            texto: q.text,
            gerente: q.manager,
            ..Default::default()
        };
        params.set(roles.state, q.state);
        params.set(roles.phase, q.phase);
        params
    }
}

/// Query-string form of a filter, keyed by API column names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gerente: Option<String>,
}

impl FilterParams {
    fn set(&mut self, field: ProjectField, value: Option<String>) {
        match field {
            ProjectField::Fase => self.fase = value,
            ProjectField::Estado => self.estado = value,
        }
    }
}

/// Body of the status report update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusReportRequest {
    pub status_report: String,
}

/// Distinct non-blank values of `select(project)`, in first-seen order.
/// Values differing only by case/accents/whitespace are listed once.
pub fn filter_options<'a, F>(projects: &'a [Project], select: F) -> Vec<String>
where
    F: Fn(&'a Project) -> Option<&'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut options = Vec::new();
    for value in projects.iter().filter_map(|p| select(p)) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = normalize_label(Some(trimmed));
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        options.push(trimmed.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, fase: &str, estado: &str, gerente: &str) -> Project {
        Project {
            numero_projeto: id.to_string(),
            nome_projeto: Some(format!("Projeto {}", id)),
            cliente: Some("Cliente Ágil".to_string()),
            fase: Some(fase.to_string()),
            estado: Some(estado.to_string()),
            gerente: Some(gerente.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_query_is_empty() {
        let q = ProjectQuery {
            text: Some("   ".into()),
            state: Some(String::new()),
            ..Default::default()
        };
        assert!(q.is_empty());
        assert_eq!(q.text_only(), None);
    }

    #[test]
    fn test_text_only() {
        assert_eq!(ProjectQuery::text(" PRJ-1 ").text_only(), Some("PRJ-1".to_string()));
        let q = ProjectQuery {
            text: Some("PRJ".into()),
            manager: Some("Ana".into()),
            ..Default::default()
        };
        assert_eq!(q.text_only(), None);
    }

    #[test]
    fn test_params_follow_roles() {
        let q = ProjectQuery {
            state: Some("Concluído".into()),
            phase: Some("Entrega".into()),
            ..Default::default()
        };
        let swapped = q.to_params(&FieldRoles::swapped());
        assert_eq!(swapped.fase.as_deref(), Some("Concluído"));
        assert_eq!(swapped.estado.as_deref(), Some("Entrega"));

        let by_name = q.to_params(&FieldRoles::by_name());
        assert_eq!(by_name.estado.as_deref(), Some("Concluído"));
        assert_eq!(by_name.fase.as_deref(), Some("Entrega"));
        assert_eq!(by_name.texto, None);
    }

    #[test]
    fn test_params_skip_absent_fields() {
        let q = ProjectQuery::text("abc");
        let json = serde_json::to_string(&q.to_params(&FieldRoles::swapped())).unwrap();
        assert_eq!(json, r#"{"texto":"abc"}"#);
    }

    #[test]
    fn test_filter_options_dedupe_variants() {
        let list = vec![
            project("1", "Concluído", "Entrega", "Ana"),
            project("2", "concluido ", "Entrega", "Bruno"),
            project("3", "", "Início", "Ana"),
            project("4", "Aberto", "Inicio", "Carla"),
        ];
        assert_eq!(
            filter_options(&list, |p| p.fase.as_deref()),
            vec!["Concluído".to_string(), "Aberto".to_string()]
        );
        assert_eq!(
            filter_options(&list, |p| p.gerente.as_deref()),
            vec!["Ana".to_string(), "Bruno".to_string(), "Carla".to_string()]
        );
    }

    #[test]
    fn test_update_request_body() {
        let body = UpdateStatusReportRequest {
            status_report: "ok".into(),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"statusReport":"ok"}"#);
    }
}
