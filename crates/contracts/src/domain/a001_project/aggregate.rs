use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Project record
// ============================================================================

/// Project as returned by the projects API.
///
/// The source database is maintained by hand, so every text field is optional
/// and tolerant: `null`, a missing key or a non-string value all end up as
/// `None` instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::id")]
    pub numero_projeto: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub nome_projeto: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cliente: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub gerente: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub fase: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub estado: Option<String>,

    /// 0..=100, absent means 0
    #[serde(default, deserialize_with = "lenient::number")]
    pub porcentagem_conclusao: Option<f64>,

    /// YYYY-MM-DD
    #[serde(default, deserialize_with = "lenient::text")]
    pub data_inicio: Option<String>,
    /// YYYY-MM-DD
    #[serde(default, deserialize_with = "lenient::text")]
    pub data_termino_aprovada: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub status_report: Option<String>,
}

impl Project {
    pub fn field(&self, field: ProjectField) -> Option<&str> {
        match field {
            ProjectField::Fase => self.fase.as_deref(),
            ProjectField::Estado => self.estado.as_deref(),
        }
    }

    /// Completion clamped to 0..=100; missing or NaN values count as 0.
    pub fn completion_percent(&self) -> f64 {
        match self.porcentagem_conclusao {
            Some(v) if v.is_finite() => v.clamp(0.0, 100.0),
            _ => 0.0,
        }
    }

    pub fn approved_end_date(&self) -> Option<NaiveDate> {
        parse_date(self.data_termino_aprovada.as_deref())
    }

    pub fn status_report_text(&self) -> &str {
        self.status_report.as_deref().unwrap_or_default()
    }
}

/// Parses the date part of `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS...`.
/// Empty or malformed input yields `None`.
pub fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Decodes a project list body. The API occasionally answers a single object
/// instead of an array (e.g. a search by exact project number); that is read
/// as a one-element list, and `null` as an empty one.
pub fn parse_project_list(body: &str) -> Result<Vec<Project>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        serde_json::Value::Null => Ok(Vec::new()),
        other => Ok(vec![serde_json::from_value(other)?]),
    }
}

// ============================================================================
// Field roles
// ============================================================================

/// The two category columns of a project record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectField {
    Fase,
    Estado,
}

impl ProjectField {
    /// Query parameter / JSON key used by the API.
    pub fn api_name(&self) -> &'static str {
        match self {
            ProjectField::Fase => "fase",
            ProjectField::Estado => "estado",
        }
    }
}

/// Which record column holds the lifecycle state and which holds the
/// workflow phase.
///
/// The production database stores them inverted relative to their names, so
/// the mapping is configuration rather than an assumption baked in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRoles {
    pub state: ProjectField,
    pub phase: ProjectField,
}

impl FieldRoles {
    /// `estado` is the state, `fase` is the phase.
    pub fn by_name() -> Self {
        Self {
            state: ProjectField::Estado,
            phase: ProjectField::Fase,
        }
    }

    /// `fase` is the state, `estado` is the phase.
    pub fn swapped() -> Self {
        Self {
            state: ProjectField::Fase,
            phase: ProjectField::Estado,
        }
    }

    pub fn state_of<'a>(&self, project: &'a Project) -> Option<&'a str> {
        project.field(self.state)
    }

    pub fn phase_of<'a>(&self, project: &'a Project) -> Option<&'a str> {
        project.field(self.phase)
    }
}

// ============================================================================
// Lenient field deserializers
// ============================================================================

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Identifier: strings as-is, numbers rendered as text.
    pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        })
    }

    /// Text: anything that is not a JSON string becomes `None`.
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    /// Number: JSON numbers and numeric strings ("42.5", "42,5").
    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "numeroProjeto": "PRJ-001",
            "nomeProjeto": "Portal",
            "gerente": "Ana",
            "cliente": "ACME",
            "fase": "Trabalho Em Andamento",
            "estado": "Execução",
            "porcentagemConclusao": 42.5,
            "dataInicio": "2024-01-10",
            "dataTerminoAprovada": "2024-12-20",
            "statusReport": "https://example.com/r/1 Tudo certo"
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.numero_projeto, "PRJ-001");
        assert_eq!(p.estado.as_deref(), Some("Execução"));
        assert_eq!(p.completion_percent(), 42.5);
        assert_eq!(p.approved_end_date(), NaiveDate::from_ymd_opt(2024, 12, 20));
    }

    #[test]
    fn test_deserialize_tolerates_nulls_and_wrong_types() {
        let json = r#"{
            "numeroProjeto": 17,
            "fase": null,
            "estado": 3,
            "gerente": ["x"],
            "porcentagemConclusao": "37,5"
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.numero_projeto, "17");
        assert_eq!(p.fase, None);
        assert_eq!(p.estado, None);
        assert_eq!(p.gerente, None);
        assert_eq!(p.porcentagem_conclusao, Some(37.5));
        assert_eq!(p.data_inicio, None);
    }

    #[test]
    fn test_parse_project_list_shapes() {
        let list = parse_project_list(r#"[{"numeroProjeto":"1"},{"numeroProjeto":"2"}]"#).unwrap();
        assert_eq!(list.len(), 2);

        let single = parse_project_list(r#"{"numeroProjeto":"9","fase":"Aberto"}"#).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].fase.as_deref(), Some("Aberto"));

        assert!(parse_project_list("null").unwrap().is_empty());
        assert!(parse_project_list("[]").unwrap().is_empty());
        assert!(parse_project_list("<html>").is_err());
    }

    #[test]
    fn test_completion_defaults_and_clamps() {
        let mut p = Project::default();
        assert_eq!(p.completion_percent(), 0.0);
        p.porcentagem_conclusao = Some(140.0);
        assert_eq!(p.completion_percent(), 100.0);
        p.porcentagem_conclusao = Some(f64::NAN);
        assert_eq!(p.completion_percent(), 0.0);
    }

    #[test]
    fn test_parse_date_variants() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 4);
        assert_eq!(parse_date(Some("2025-03-04")), d);
        assert_eq!(parse_date(Some("2025-03-04T10:00:00Z")), d);
        assert_eq!(parse_date(Some(" 2025-03-04 ")), d);
        assert_eq!(parse_date(Some("04/03/2025")), None);
        assert_eq!(parse_date(Some("")), None);
        assert_eq!(parse_date(None), None);
    }

    #[test]
    fn test_field_roles_select_columns() {
        let p = Project {
            fase: Some("Concluído".into()),
            estado: Some("Encerramento".into()),
            ..Default::default()
        };
        let swapped = FieldRoles::swapped();
        assert_eq!(swapped.state_of(&p), Some("Concluído"));
        assert_eq!(swapped.phase_of(&p), Some("Encerramento"));

        let by_name = FieldRoles::by_name();
        assert_eq!(by_name.state_of(&p), Some("Encerramento"));
        assert_eq!(by_name.phase_of(&p), Some("Concluído"));
    }

    #[test]
    fn test_field_roles_from_toml_like_json() {
        let roles: FieldRoles = serde_json::from_str(r#"{"state":"fase","phase":"estado"}"#).unwrap();
        assert_eq!(roles, FieldRoles::swapped());
    }
}
