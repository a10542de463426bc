//! Category -> color tables used by the dashboard charts.
//!
//! A [`Palette`] is an immutable, ordered list of `(key, color)` pairs. Keys
//! are stored in normalized form (see [`crate::shared::text::normalize_label`]),
//! so lookups are case and accent insensitive.
//!
//! Resolution order:
//! 1. exact match on the normalized label;
//! 2. substring match: the first key, in declaration order, contained in the
//!    normalized label. With keys `["aberto", "em aberto"]` the label
//!    "projeto em aberto" resolves to the color of `aberto`;
//! 3. [`FALLBACK_COLOR`].

use crate::shared::text::normalize_label;
use serde::{Deserialize, Serialize};

/// Neutral gray for labels with no palette entry.
pub const FALLBACK_COLOR: &str = "#94A3B8";

/// Which table a label is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Phase,
    State,
}

/// One configured palette row, as written in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub label: String,
    pub color: String,
}

impl PaletteEntry {
    pub fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Checks the `#RRGGBB` form.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Palette {
    /// Builds a palette from `(label, color)` pairs in declaration order.
    ///
    /// Labels are normalized; when two labels normalize to the same key
    /// ("concluído" and "concluido") the first one is kept.
    pub fn new<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (label, color) in pairs {
            let key = normalize_label(Some(label));
            if entries.iter().any(|(k, _)| *k == key) {
                continue;
            }
            entries.push((key, color.to_string()));
        }
        Self { entries }
    }

    pub fn from_entries(entries: &[PaletteEntry]) -> Self {
        Self::new(entries.iter().map(|e| (e.label.as_str(), e.color.as_str())))
    }

    /// Built-in colors for lifecycle states.
    pub fn default_state() -> Self {
        Self::new([
            ("trabalho em andamento", "#3B82F6"),
            ("concluido", "#10B981"),
            ("cancelado", "#EF4444"),
            ("aberto", "#8B5CF6"),
            ("paralisado", "#F59E0B"),
            ("pendente", "#6366F1"),
        ])
    }

    /// Built-in colors for workflow phases.
    pub fn default_phase() -> Self {
        Self::new([
            ("inicio", "#A78BFA"),
            ("planejamento", "#60A5FA"),
            ("execucao", "#34D399"),
            ("monitoramento/controle", "#FBBF24"),
            ("entrega", "#F472B6"),
            ("encerramento", "#9CA3AF"),
            ("nao especificado", "#E5E7EB"),
        ])
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color for a raw label. Never fails.
    pub fn resolve(&self, label: Option<&str>) -> String {
        self.resolve_normalized(&normalize_label(label))
    }

    /// Same as [`Palette::resolve`] for a label already in normalized form.
    pub fn resolve_normalized(&self, key: &str) -> String {
        if let Some((_, color)) = self.entries.iter().find(|(k, _)| k == key) {
            return color.clone();
        }
        // Declaration order decides between several contained keys.
        if let Some((_, color)) = self.entries.iter().find(|(k, _)| key.contains(k.as_str())) {
            return color.clone();
        }
        FALLBACK_COLOR.to_string()
    }
}

/// The pair of palettes the dashboard resolves against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSet {
    pub phase: Palette,
    pub state: Palette,
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self {
            phase: Palette::default_phase(),
            state: Palette::default_state(),
        }
    }
}

impl PaletteSet {
    pub fn get(&self, kind: CategoryKind) -> &Palette {
        match kind {
            CategoryKind::Phase => &self.phase,
            CategoryKind::State => &self.state,
        }
    }

    pub fn resolve(&self, label: Option<&str>, kind: CategoryKind) -> String {
        self.get(kind).resolve(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_and_accent_insensitive() {
        let palettes = PaletteSet::default();
        let a = palettes.resolve(Some("Concluído"), CategoryKind::State);
        let b = palettes.resolve(Some("concluido"), CategoryKind::State);
        let c = palettes.resolve(Some("CONCLUIDO "), CategoryKind::State);
        assert_eq!(a, "#10B981");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_unknown_label_falls_back_to_gray() {
        let palettes = PaletteSet::default();
        assert_eq!(
            palettes.resolve(Some("totally-unknown-label"), CategoryKind::State),
            FALLBACK_COLOR
        );
        assert_eq!(palettes.resolve(None, CategoryKind::State), FALLBACK_COLOR);
    }

    #[test]
    fn test_unspecified_phase_has_its_own_color() {
        let palettes = PaletteSet::default();
        assert_eq!(palettes.resolve(Some("Não Especificado"), CategoryKind::Phase), "#E5E7EB");
        assert_eq!(palettes.resolve(Some(""), CategoryKind::Phase), "#E5E7EB");
    }

    #[test]
    fn test_kinds_use_separate_tables() {
        let palettes = PaletteSet::default();
        assert_eq!(palettes.resolve(Some("Execução"), CategoryKind::Phase), "#34D399");
        assert_eq!(palettes.resolve(Some("Execução"), CategoryKind::State), FALLBACK_COLOR);
    }

    #[test]
    fn test_substring_match_uses_declaration_order() {
        let palette = Palette::new([("aberto", "#000001"), ("em aberto", "#000002")]);
        assert_eq!(palette.resolve(Some("Projeto em aberto")), "#000001");

        let reversed = Palette::new([("em aberto", "#000002"), ("aberto", "#000001")]);
        assert_eq!(reversed.resolve(Some("Projeto em aberto")), "#000002");
        // exact match beats an earlier substring key
        assert_eq!(reversed.resolve(Some("aberto")), "#000001");
    }

    #[test]
    fn test_substring_match_on_default_states() {
        let palettes = PaletteSet::default();
        assert_eq!(
            palettes.resolve(Some("Concluído com ressalvas"), CategoryKind::State),
            "#10B981"
        );
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let palette = Palette::new([("concluído", "#111111"), ("concluido", "#222222")]);
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.resolve(Some("Concluido")), "#111111");
    }

    #[test]
    fn test_hex_color_check() {
        assert!(is_hex_color("#94A3B8"));
        assert!(is_hex_color("#abcdef"));
        assert!(!is_hex_color("94A3B8"));
        assert!(!is_hex_color("#94A3B"));
        assert!(!is_hex_color("#GGGGGG"));
    }
}
