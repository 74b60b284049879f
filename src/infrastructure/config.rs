use crate::domain::section::{SectionConfig, SectionRegistry};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Registry shipped with the binary, used when `config/sections.toml` is absent.
const DEFAULT_SECTIONS: &str = include_str!("../../config/sections.toml");

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_directory")]
    pub directory: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            directory: default_storage_directory(),
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_storage_directory() -> PathBuf {
    PathBuf::from("data/layout")
}

#[derive(Debug, Deserialize, Clone)]
pub struct SectionsConfig {
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SectionEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub components: Vec<String>,
}

impl SectionsConfig {
    pub fn into_registry(self) -> anyhow::Result<SectionRegistry> {
        let entries = self
            .sections
            .into_iter()
            .map(|s| {
                let components = s.components;
                (
                    SectionConfig::new(s.id, s.title, s.description, s.icon, s.color),
                    components,
                )
            })
            .collect();

        SectionRegistry::new(entries).context("Invalid section registry")
    }
}

/// `config/server.toml` (optional) overlaid with `DASHBOARD__*` env vars.
pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_sections_config() -> anyhow::Result<SectionsConfig> {
    load_sections_from(Path::new("config/sections.toml"))
}

/// Only a missing file falls back to the built-in registry. A file that
/// exists but lists no sections is a configuration error.
fn load_sections_from(path: &Path) -> anyhow::Result<SectionsConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "section config not found, using built-in section registry");
        return default_sections_config();
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .build()
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let loaded: SectionsConfig = settings.try_deserialize()?;
    anyhow::ensure!(
        !loaded.sections.is_empty(),
        "{} defines no sections",
        path.display()
    );
    Ok(loaded)
}

pub fn default_sections_config() -> anyhow::Result<SectionsConfig> {
    toml::from_str(DEFAULT_SECTIONS).context("Built-in section registry is malformed")
}
