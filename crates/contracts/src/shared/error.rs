use thiserror::Error;

/// Failure of a call to the projects REST API.
///
/// An empty result set is not an error; callers get `Ok(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Request failed: {0}")]
    Network(String),
    /// The server answered outside the 2xx range.
    #[error("HTTP error: {status}")]
    Http { status: u16 },
    /// The body could not be read or decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message shown in the UI error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Não foi possível conectar à API. Verifique se ela está rodando.".to_string()
            }
            ApiError::Http { status } => format!("Erro HTTP: {}", status),
            ApiError::Decode(_) => "Resposta inválida recebida da API.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_user_message() {
        let err = ApiError::Http { status: 404 };
        assert_eq!(err.to_string(), "HTTP error: 404");
        assert_eq!(err.user_message(), "Erro HTTP: 404");
        assert!(ApiError::Network("offline".into()).to_string().contains("offline"));
    }
}
