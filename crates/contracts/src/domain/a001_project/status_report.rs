//! Status report text: display split and the edit/commit draft.

/// Splits a status report into its leading link (if the text starts with an
/// `http://` or `https://` token) and the remaining description, trimmed.
pub fn split_status_report(text: &str) -> (Option<&str>, &str) {
    if text.starts_with("http://") || text.starts_with("https://") {
        let end = text.find(char::is_whitespace).unwrap_or(text.len());
        let (url, rest) = text.split_at(end);
        return (Some(url), rest.trim());
    }
    (None, text.trim())
}

/// Local edit buffer for one project's status report.
///
/// The commit sends the whole draft and replaces the stored text on the
/// server, so sending the same draft twice has the same effect as once.
/// An unchanged draft cannot be committed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReportDraft {
    confirmed: String,
    draft: String,
    saving: bool,
    error: Option<String>,
}

impl StatusReportDraft {
    pub fn new(confirmed: &str) -> Self {
        Self {
            confirmed: confirmed.to_string(),
            draft: confirmed.to_string(),
            saving: false,
            error: None,
        }
    }

    /// Last value confirmed by the server.
    pub fn confirmed(&self) -> &str {
        &self.confirmed
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn set_draft(&mut self, text: &str) {
        if self.draft != text {
            self.draft = text.to_string();
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.confirmed
    }

    /// Drives the "Salvar" button.
    pub fn can_commit(&self) -> bool {
        self.is_dirty() && !self.saving
    }

    /// Starts a commit and returns the text to send, or `None` when there is
    /// nothing to save or a save is already in flight.
    pub fn begin_commit(&mut self) -> Option<String> {
        if !self.can_commit() {
            return None;
        }
        self.saving = true;
        self.error = None;
        Some(self.draft.clone())
    }

    /// The server accepted the update and echoed back `server_value`.
    pub fn confirm(&mut self, server_value: &str) {
        self.confirmed = server_value.to_string();
        self.draft = server_value.to_string();
        self.saving = false;
        self.error = None;
    }

    /// The update failed: the confirmed text stays as it was, the draft is
    /// kept so the user can retry.
    pub fn fail(&mut self, message: &str) {
        self.saving = false;
        self.error = Some(message.to_string());
    }

    /// Throws the draft away.
    pub fn reset(&mut self) {
        self.draft = self.confirmed.clone();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_leading_url() {
        assert_eq!(
            split_status_report("https://sharepoint/x/1   Cronograma em dia"),
            (Some("https://sharepoint/x/1"), "Cronograma em dia")
        );
        assert_eq!(split_status_report("http://a.b"), (Some("http://a.b"), ""));
        assert_eq!(split_status_report("  Sem link  "), (None, "Sem link"));
        assert_eq!(split_status_report("ver https://x.y"), (None, "ver https://x.y"));
    }

    #[test]
    fn test_unchanged_draft_cannot_commit() {
        let mut d = StatusReportDraft::new("Tudo certo");
        assert!(!d.is_dirty());
        assert!(!d.can_commit());
        assert_eq!(d.begin_commit(), None);

        d.set_draft("Tudo certo");
        assert!(!d.can_commit());
    }

    #[test]
    fn test_commit_success_replaces_confirmed() {
        let mut d = StatusReportDraft::new("antigo");
        d.set_draft("novo");
        assert!(d.can_commit());
        assert_eq!(d.begin_commit().as_deref(), Some("novo"));
        assert!(d.is_saving());
        // second click while saving is ignored
        assert_eq!(d.begin_commit(), None);

        d.confirm("novo (servidor)");
        assert_eq!(d.confirmed(), "novo (servidor)");
        assert_eq!(d.draft(), "novo (servidor)");
        assert!(!d.is_dirty());
        assert!(!d.is_saving());
    }

    #[test]
    fn test_commit_failure_keeps_previous_value() {
        let mut d = StatusReportDraft::new("antigo");
        d.set_draft("novo");
        let _ = d.begin_commit();
        d.fail("Erro HTTP: 500");
        assert_eq!(d.confirmed(), "antigo");
        assert_eq!(d.draft(), "novo");
        assert_eq!(d.error(), Some("Erro HTTP: 500"));
        assert!(d.can_commit());
    }

    #[test]
    fn test_reset_discards_draft() {
        let mut d = StatusReportDraft::new("a");
        d.set_draft("b");
        d.reset();
        assert_eq!(d.draft(), "a");
        assert!(!d.is_dirty());
    }
}
