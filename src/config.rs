use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that points at an alternative config file
pub const CONFIG_ENV: &str = "BIRDSEARCH_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub search: SearchConfig,
    pub window: WindowConfig,
}

/// Where suggestions come from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL; the query is appended as `?q=<query>`
    pub url: String,
    /// JSON field holding the display text ("title" or "name")
    pub title_field: String,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Queries shorter than this never reach the endpoint
    pub min_query_len: usize,
    pub debounce_ms: u64,
    /// How long the loading indicator stays up after the last keystroke
    pub loading_delay_ms: u64,
    pub no_results_message: String,
    pub error_message: String,
    pub placeholder: String,
    /// While the pointer is over the list, arrow keys do nothing
    pub hover_locks_keyboard: bool,
    /// Number of suggestion rows shown at once
    pub visible_rows: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3001/birds".to_string(),
            title_field: "title".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            debounce_ms: 150,
            loading_delay_ms: 500,
            no_results_message: "No results found".to_string(),
            error_message: "Error fetching suggestions".to_string(),
            placeholder: "Search for birds...".to_string(),
            hover_locks_keyboard: false,
            visible_rows: 8,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 520.0,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Effective minimum query length; an empty query is never sent
    pub fn min_chars(&self) -> usize {
        self.min_query_len.max(1)
    }

    /// Message shown while the query is below the minimum length
    pub fn too_short_message(&self) -> String {
        format!("Enter at least {} characters", self.min_chars())
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine home directory, using defaults");
        return Config::default();
    };
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    // ~/.config/ (XDG convention) on every platform
    dirs::home_dir().map(|home| home.join(".config").join("birdsearch").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.search.min_query_len, 3);
        assert_eq!(config.search.debounce(), Duration::from_millis(150));
        assert_eq!(config.endpoint.title_field, "title");
        assert_eq!(config.search.too_short_message(), "Enter at least 3 characters");
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = parse(
            r#"
            [endpoint]
            url = "https://example.test/api/birds"
            title_field = "name"

            [search]
            debounce_ms = 100
            min_query_len = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint.url, "https://example.test/api/birds");
        assert_eq!(config.endpoint.title_field, "name");
        assert_eq!(config.endpoint.timeout_ms, 10_000);
        assert_eq!(config.search.debounce_ms, 100);
        assert_eq!(config.search.loading_delay_ms, 500);
        assert_eq!(config.search.too_short_message(), "Enter at least 2 characters");
        assert_eq!(config.window.width, 480.0);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(parse("[search]\ndebounce_ms = \"fast\"").is_err());
    }
}
