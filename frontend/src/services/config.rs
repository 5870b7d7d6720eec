use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Build-time settings for the web client.
///
/// Values come from `INVENTORY_API_URL` and `INVENTORY_LOG_LEVEL` at compile
/// time, since a wasm bundle has no process environment to read at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("INVENTORY_API_URL"), option_env!("INVENTORY_LOG_LEVEL"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self { api_base_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides_are_normalised() {
        let config = AppConfig::from_values(Some(" https://shop.example/api/ "), Some("debug"));
        assert_eq!(config.api_base_url, "https://shop.example/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("chatty"));
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
