use crate::config::AppConfig;
use crate::shared::api_utils::{api_url, path_segment};
use contracts::domain::a001_project::{
    parse_project_list, FieldRoles, Project, ProjectQuery, UpdateStatusReportRequest,
};
use contracts::shared::error::ApiError;
use gloo_net::http::{Request, Response};

/// Client for the projects REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsApi {
    base_url: String,
    roles: FieldRoles,
}

impl ProjectsApi {
    pub fn new(base_url: impl Into<String>, roles: FieldRoles) -> Self {
        Self {
            base_url: base_url.into(),
            roles,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api.base_url.clone(), config.roles)
    }

    pub fn all_url(&self) -> String {
        api_url(&self.base_url, "all")
    }

    /// URL for `query`, or `None` when the query is empty and the full list
    /// should be loaded instead.
    pub fn query_url(&self, query: &ProjectQuery) -> Option<String> {
        if query.is_empty() {
            return None;
        }
        if let Some(text) = query.text_only() {
            return Some(api_url(
                &self.base_url,
                &format!("buscar/{}", path_segment(&text)),
            ));
        }
        let params = query.to_params(&self.roles);
        // FilterParams only holds strings; serialization cannot fail.
        let qs = serde_qs::to_string(&params).unwrap_or_default();
        Some(format!("{}?{}", api_url(&self.base_url, "filtrar"), qs))
    }

    pub fn status_report_url(&self, id: &str) -> String {
        api_url(
            &self.base_url,
            &format!("{}/status-report", path_segment(id)),
        )
    }

    /// `GET {base}/all`
    pub async fn fetch_all(&self) -> Result<Vec<Project>, ApiError> {
        let url = self.all_url();
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_list(response).await
    }

    /// Text search or structured filter; an empty query loads everything.
    pub async fn fetch_filtered(&self, query: &ProjectQuery) -> Result<Vec<Project>, ApiError> {
        let Some(url) = self.query_url(query) else {
            return self.fetch_all().await;
        };
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_list(response).await
    }

    /// `PUT {base}/{id}/status-report`. Sends the whole text; returns the
    /// record as stored by the server.
    pub async fn update_status_report(&self, id: &str, text: &str) -> Result<Project, ApiError> {
        let url = self.status_report_url(id);
        let body = UpdateStatusReportRequest {
            status_report: text.to_string(),
        };
        log::debug!("PUT {}", url);
        let response = Request::put(&url)
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let text = read_body(response).await?;
        serde_json::from_str::<Project>(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_list(response: Response) -> Result<Vec<Project>, ApiError> {
    let text = read_body(response).await?;
    parse_project_list(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ProjectsApi {
        ProjectsApi::new("http://localhost:8080/projetos/", FieldRoles::swapped())
    }

    #[test]
    fn test_all_url() {
        assert_eq!(api().all_url(), "http://localhost:8080/projetos/all");
    }

    #[test]
    fn test_empty_query_falls_back_to_all() {
        assert_eq!(api().query_url(&ProjectQuery::default()), None);
        assert_eq!(api().query_url(&ProjectQuery::text("   ")), None);
    }

    #[test]
    fn test_text_only_query_uses_search_endpoint() {
        assert_eq!(
            api().query_url(&ProjectQuery::text(" Portal Ágil ")).as_deref(),
            Some("http://localhost:8080/projetos/buscar/Portal%20%C3%81gil")
        );
    }

    #[test]
    fn test_structured_query_routes_roles() {
        let query = ProjectQuery {
            text: Some("portal".into()),
            state: Some("Concluído".into()),
            phase: None,
            manager: Some("  ".into()),
        };
        let url = api().query_url(&query).unwrap();
        assert!(url.starts_with("http://localhost:8080/projetos/filtrar?"));
        assert!(url.contains("texto=portal"));
        // state lives in `fase` with swapped roles
        assert!(url.contains("fase=Conclu"));
        assert!(!url.contains("estado="));
        assert!(!url.contains("gerente="));
    }

    #[test]
    fn test_status_report_url_encodes_id() {
        assert_eq!(
            api().status_report_url("PRJ 7"),
            "http://localhost:8080/projetos/PRJ%207/status-report"
        );
    }
}
