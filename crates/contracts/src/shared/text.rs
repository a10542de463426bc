//! Canonical form of free-text category labels.
//!
//! Phase, state and manager values come from a hand-maintained database and
//! arrive in every combination of case, accents and stray whitespace
//! ("Concluído", "CONCLUIDO ", "concluido"). All classification goes through
//! [`normalize_label`] so that those variants land in the same bucket.

use unicode_normalization::UnicodeNormalization;

/// Canonical key for an empty or missing label.
pub const UNSPECIFIED_KEY: &str = "nao especificado";

/// Display label for an empty or missing phase/state.
pub const UNSPECIFIED_LABEL: &str = "Não Especificado";

/// Display label for a project without a manager.
pub const UNASSIGNED_MANAGER: &str = "Não Atribuído";

/// Combining Diacritical Marks block (U+0300..=U+036F).
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Decomposes `text` (NFD) and drops combining diacritical marks.
///
/// "Execução" -> "Execucao"
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_diacritic(*c)).collect()
}

/// True when the value is absent or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Lowercase, accent-free, trimmed form of a label.
///
/// Absent and whitespace-only input maps to [`UNSPECIFIED_KEY`]. The result is
/// a fixed point: normalizing it again returns the same string.
pub fn normalize_label(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return UNSPECIFIED_KEY.to_string();
    };
    let lowered = raw.to_lowercase();
    let stripped = strip_accents(&lowered);
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        UNSPECIFIED_KEY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Display label for a raw category value: the value itself, or
/// [`UNSPECIFIED_LABEL`] when blank.
pub fn display_label(value: Option<&str>) -> String {
    match value {
        Some(v) if !is_blank(value) => v.to_string(),
        _ => UNSPECIFIED_LABEL.to_string(),
    }
}
