//! Application configuration loaded from environment variables.

const DEFAULT_RUNWAYS: &str = "09L,09R,27L";
const DEFAULT_MAX_STEPS: usize = 100;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `ATC_RUNWAYS`: comma-separated runway pool for the tower demo
///   (default: `"09L,09R,27L"`)
/// - `DEMO_MAX_STEPS`: longest script a caller may submit (default: `100`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub atc_runways: Vec<String>,
    pub demo_max_steps: usize,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            atc_runways: std::env::var("ATC_RUNWAYS")
                .ok()
                .map(|raw| parse_runways(&raw))
                .filter(|runways| !runways.is_empty())
                .unwrap_or(defaults.atc_runways),
            demo_max_steps: std::env::var("DEMO_MAX_STEPS")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.demo_max_steps),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            atc_runways: parse_runways(DEFAULT_RUNWAYS),
            demo_max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Splits a comma-separated runway list, dropping blanks.
fn parse_runways(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.atc_runways, vec!["09L", "09R", "27L"]);
        assert_eq!(config.demo_max_steps, 100);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_runways() {
        assert_eq!(parse_runways(" 04L , 22R,,"), vec!["04L", "22R"]);
        assert!(parse_runways(" , ").is_empty());
    }
}
