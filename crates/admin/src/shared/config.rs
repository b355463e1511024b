use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Откуда загружать записи при старте сессии
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// Встроенный тестовый каталог
    Mock,
    /// JSON-снимок на диске
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub source: DataSourceKind,
    /// Путь к JSON-снимку (для source = "json")
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl ListConfig {
    /// Размер страницы из списка допустимых, иначе размер по умолчанию
    pub fn resolve_page_size(&self, requested: usize) -> usize {
        if self.page_size_options.contains(&requested) {
            requested
        } else {
            tracing::warn!(
                "Page size {} is not among {:?}, using {}",
                requested,
                self.page_size_options,
                self.default_page_size
            );
            self.default_page_size
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![5, 10, 25, 50],
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[data]
source = "mock"

[list]
default_page_size = 10
page_size_options = [5, 10, 25, 50]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.data.source == DataSourceKind::Json && config.data.path.is_none() {
        anyhow::bail!("[data] path is required when source = \"json\"");
    }
    if config.list.default_page_size == 0 {
        anyhow::bail!("[list] default_page_size must be positive");
    }
    if config.list.page_size_options.contains(&0) {
        anyhow::bail!("[list] page_size_options must be positive");
    }
    if !config
        .list
        .page_size_options
        .contains(&config.list.default_page_size)
    {
        anyhow::bail!("[list] default_page_size must be one of page_size_options");
    }
    Ok(config)
}

/// Get the snapshot file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_snapshot_path(config: &Config) -> Option<PathBuf> {
    let path_str = config.data.path.as_deref()?;
    let path = Path::new(path_str);

    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(path));
        }
    }

    Some(PathBuf::from(path_str))
}
