//! Helpers for building projects API URLs.

/// Joins the configured base URL and a path, with exactly one `/` between.
///
/// # Example
/// ```ignore
/// let url = api_url("http://localhost:8080/projetos/", "/all");
/// assert_eq!(url, "http://localhost:8080/projetos/all");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Percent-encodes a single path segment (search text, project id).
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_once() {
        assert_eq!(api_url("http://h/projetos", "all"), "http://h/projetos/all");
        assert_eq!(api_url("http://h/projetos/", "/all"), "http://h/projetos/all");
        assert_eq!(api_url("http://h/projetos", ""), "http://h/projetos");
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(path_segment("Cliente Ágil/2"), "Cliente%20%C3%81gil%2F2");
        assert_eq!(path_segment("PRJ-001"), "PRJ-001");
    }
}
