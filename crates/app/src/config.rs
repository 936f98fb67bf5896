use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents, falling back to defaults when unparseable.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse {CONFIG_PATH}: {e}; using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` once and keep it for the process lifetime.
/// Safe to call multiple times; only the first call has effect. Call it from
/// inside the app so the launcher's logger records what was loaded.
///
/// A missing file (always the case in the browser) yields defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(?config, "loaded {CONFIG_PATH}");
            config
        }
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not readable ({e}); using defaults");
            AppConfig::default()
        }
    })
}
