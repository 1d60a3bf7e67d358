use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogSection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built frontend (`trunk build` output)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSection {
    pub api_base_url: String,
    pub media_base_url: String,
    /// Public origin used for absolute sitemap URLs
    pub site_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[catalog]
api_base_url = "http://127.0.0.1:8000/api"
media_base_url = "http://127.0.0.1:8000/media"
site_url = "http://localhost:3000"
timeout_secs = 30
"#;

pub const ENV_API_URL: &str = "CATALOG_API_URL";
pub const ENV_MEDIA_URL: &str = "CATALOG_MEDIA_URL";
pub const ENV_SITE_URL: &str = "CATALOG_SITE_URL";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `CATALOG_*` environment variables override whatever was loaded.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config: Config = match config_file_path() {
        Some(path) if path.exists() => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        }
        Some(path) => {
            tracing::warn!("config.toml not found at: {}", path.display());
            tracing::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };
    apply_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn config_file_path() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    Some(exe_path.parent()?.join("config.toml"))
}

fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let targets = [
        (ENV_API_URL, &mut config.catalog.api_base_url),
        (ENV_MEDIA_URL, &mut config.catalog.media_base_url),
        (ENV_SITE_URL, &mut config.catalog.site_url),
    ];
    for (key, slot) in targets {
        if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
            tracing::info!("{} overrides configured value", key);
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.catalog.api_base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.catalog.timeout_secs, 30);
    }

    #[test]
    fn test_env_overrides_win_and_blank_is_ignored() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_overrides(&mut config, |key| match key {
            ENV_API_URL => Some("https://vinho.example/api".to_string()),
            ENV_SITE_URL => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.catalog.api_base_url, "https://vinho.example/api");
        assert_eq!(config.catalog.site_url, "http://localhost:3000");
        assert_eq!(config.catalog.media_base_url, "http://127.0.0.1:8000/media");
    }

    #[test]
    fn test_timeout_defaults_when_missing() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 8080
            static_dir = "public"

            [catalog]
            api_base_url = "a"
            media_base_url = "m"
            site_url = "s"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.timeout_secs, 30);
    }
}
