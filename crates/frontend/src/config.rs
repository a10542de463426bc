//! Application configuration.
//!
//! Defaults are embedded in the bundle as TOML. A deployment can override any
//! part of them from the browser's localStorage:
//! - `projects-dashboard-config` holds a TOML document with the same layout as
//!   [`DEFAULT_CONFIG`]; only the keys present in it are replaced;
//! - `projects-api-base` holds just the API base URL.

use contracts::dashboards::d400_project_summary::DEFAULT_TOP_MANAGERS;
use contracts::domain::a001_project::FieldRoles;
use contracts::shared::palette::{is_hex_color, Palette, PaletteEntry, PaletteSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_STORAGE_KEY: &str = "projects-dashboard-config";
const API_BASE_STORAGE_KEY: &str = "projects-api-base";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r##"
[api]
base_url = "http://localhost:8080/projetos"

[dashboard]
top_managers = 5

# The production database keeps the lifecycle state in `fase`
# and the workflow phase in `estado`.
[roles]
state = "fase"
phase = "estado"

[[palette.phase]]
label = "inicio"
color = "#A78BFA"

[[palette.phase]]
label = "planejamento"
color = "#60A5FA"

[[palette.phase]]
label = "execucao"
color = "#34D399"

[[palette.phase]]
label = "monitoramento/controle"
color = "#FBBF24"

[[palette.phase]]
label = "entrega"
color = "#F472B6"

[[palette.phase]]
label = "encerramento"
color = "#9CA3AF"

[[palette.phase]]
label = "nao especificado"
color = "#E5E7EB"

[[palette.state]]
label = "trabalho em andamento"
color = "#3B82F6"

[[palette.state]]
label = "concluido"
color = "#10B981"

[[palette.state]]
label = "cancelado"
color = "#EF4444"

[[palette.state]]
label = "aberto"
color = "#8B5CF6"

[[palette.state]]
label = "paralisado"
color = "#F59E0B"

[[palette.state]]
label = "pendente"
color = "#6366F1"
"##;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color {color:?} for {kind} palette entry {label:?}")]
    InvalidColor {
        kind: &'static str,
        label: String,
        color: String,
    },
    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub roles: FieldRoles,
    pub palette: PaletteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub top_managers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub phase: Vec<PaletteEntry>,
    pub state: Vec<PaletteEntry>,
}

impl PaletteConfig {
    fn from_palette(palette: &Palette) -> Vec<PaletteEntry> {
        palette
            .entries()
            .map(|(label, color)| PaletteEntry::new(label, color))
            .collect()
    }
}

/// Partial configuration read from localStorage.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverride {
    api: Option<ApiOverride>,
    dashboard: Option<DashboardOverride>,
    roles: Option<FieldRoles>,
    palette: Option<PaletteOverride>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiOverride {
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DashboardOverride {
    top_managers: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct PaletteOverride {
    phase: Option<Vec<PaletteEntry>>,
    state: Option<Vec<PaletteEntry>>,
}

impl AppConfig {
    /// Parses [`DEFAULT_CONFIG`].
    pub fn embedded() -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
        config.validate()?;
        Ok(config)
    }

    /// Same values as [`DEFAULT_CONFIG`], built without parsing.
    pub fn builtin() -> Self {
        let palettes = PaletteSet::default();
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/projetos".to_string(),
            },
            dashboard: DashboardConfig {
                top_managers: DEFAULT_TOP_MANAGERS,
            },
            roles: FieldRoles::swapped(),
            palette: PaletteConfig {
                phase: PaletteConfig::from_palette(&palettes.phase),
                state: PaletteConfig::from_palette(&palettes.state),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue("api.base_url"));
        }
        if self.roles.state == self.roles.phase {
            return Err(ConfigError::InvalidValue("roles"));
        }
        if self.dashboard.top_managers == 0 {
            return Err(ConfigError::InvalidValue("dashboard.top_managers"));
        }
        for (kind, entries) in [("phase", &self.palette.phase), ("state", &self.palette.state)] {
            if let Some(bad) = entries.iter().find(|e| !is_hex_color(&e.color)) {
                return Err(ConfigError::InvalidColor {
                    kind,
                    label: bad.label.clone(),
                    color: bad.color.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns a copy with the keys present in `toml_text` replaced.
    /// The result is validated; on error `self` is left as it was.
    pub fn with_override(&self, toml_text: &str) -> Result<Self, ConfigError> {
        let patch: ConfigOverride = toml::from_str(toml_text)?;
        let mut next = self.clone();
        if let Some(base_url) = patch.api.and_then(|a| a.base_url) {
            next.api.base_url = base_url;
        }
        if let Some(top) = patch.dashboard.and_then(|d| d.top_managers) {
            next.dashboard.top_managers = top;
        }
        if let Some(roles) = patch.roles {
            next.roles = roles;
        }
        if let Some(palette) = patch.palette {
            if let Some(phase) = palette.phase {
                next.palette.phase = phase;
            }
            if let Some(state) = palette.state {
                next.palette.state = state;
            }
        }
        next.validate()?;
        Ok(next)
    }

    pub fn palettes(&self) -> PaletteSet {
        PaletteSet {
            phase: Palette::from_entries(&self.palette.phase),
            state: Palette::from_entries(&self.palette.state),
        }
    }
}

fn read_storage(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .filter(|v| !v.trim().is_empty())
}

/// Embedded defaults plus any localStorage overrides. Invalid overrides are
/// logged and skipped.
pub fn load_config() -> AppConfig {
    let mut config = AppConfig::embedded().unwrap_or_else(|e| {
        log::error!("Embedded configuration rejected: {}", e);
        AppConfig::builtin()
    });

    if let Some(text) = read_storage(CONFIG_STORAGE_KEY) {
        match config.with_override(&text) {
            Ok(next) => {
                log::info!("Configuration override loaded from localStorage");
                config = next;
            }
            Err(e) => log::warn!("Ignoring {}: {}", CONFIG_STORAGE_KEY, e),
        }
    }

    if let Some(base_url) = read_storage(API_BASE_STORAGE_KEY) {
        log::info!("API base URL overridden: {}", base_url);
        config.api.base_url = base_url;
    }

    config
}
