use std::{env, fmt, path::Path, time::Duration};

use serde::Deserialize;
use tracing::debug;

use crate::errors::{constants::*, PodcastAiError, Result};

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// On-disk shape of the config file.
#[derive(Deserialize)]
struct ConfigFile {
    api_key: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default)]
    timeout_secs: Option<u64>,
}

/// Connection settings for the PodcastAI API. Immutable once built.
///
/// Example `podcastai.toml`:
/// ```toml
/// api_key = "pk_YOUR_API_KEY"
/// base_url = "https://www.podcastai.tech"
/// timeout_secs = 120
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    /// No timeout when absent; a generation call can then block indefinitely.
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::build(api_key.into(), default_base_url(), None)
    }

    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self::build(self.api_key, base_url.into(), self.timeout)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        let timeout = file.timeout_secs.map(timeout_from_secs).transpose()?;
        Ok(Self::build(file.api_key, file.base_url, timeout))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_API_KEY).map_err(|_| PodcastAiError::missing_env_var(ENV_API_KEY))?;
        let base_url = env::var(ENV_BASE_URL).unwrap_or_else(|_| default_base_url());
        let timeout = match env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    PodcastAiError::config(format!("Invalid {}: {}", ENV_TIMEOUT_SECS, e))
                })?;
                Some(timeout_from_secs(secs)?)
            }
            Err(_) => None,
        };

        Ok(Self::build(api_key, base_url, timeout))
    }

    /// Reads `./podcastai.toml` when it exists, otherwise the environment.
    pub fn load() -> Result<Self> {
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            debug!(path = DEFAULT_CONFIG_PATH, "Loading config file");
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            debug!("Config file not found, reading environment");
            Self::from_env()
        }
    }

    fn build(api_key: String, mut base_url: String, timeout: Option<Duration>) -> Self {
        let trimmed = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed);
        Self {
            api_key,
            base_url,
            timeout,
        }
    }
}

/// A zero timeout would fail every request, so it is rejected.
fn timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        return Err(PodcastAiError::config("timeout_secs must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        env::remove_var(ENV_API_KEY);
        env::remove_var(ENV_BASE_URL);
        env::remove_var(ENV_TIMEOUT_SECS);
    }

    #[test]
    fn test_new_uses_default_base_url() {
        let config = ClientConfig::new("pk_test");
        assert_eq!(config.base_url(), "https://www.podcastai.tech");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let a = ClientConfig::new("pk_test").with_base_url("https://host/");
        let b = ClientConfig::new("pk_test").with_base_url("https://host");
        assert_eq!(a.base_url(), "https://host");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sub_second_timeout_is_kept() {
        let config = ClientConfig::new("pk_test").with_timeout(Duration::from_millis(500));
        assert_eq!(config.timeout(), Some(Duration::from_millis(500)));

        let moved = config.with_base_url("https://host/");
        assert_eq!(moved.timeout(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("pk_secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("pk_secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_from_toml_str() {
        let config = ClientConfig::from_toml_str(
            "api_key = \"pk_test\"\nbase_url = \"http://localhost:5000/\"\ntimeout_secs = 30\n",
        )
        .unwrap();
        assert_eq!(config.api_key(), "pk_test");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));

        let minimal = ClientConfig::from_toml_str("api_key = \"pk_test\"").unwrap();
        assert_eq!(minimal.base_url(), DEFAULT_BASE_URL);
        assert_eq!(minimal.timeout(), None);
    }

    #[test]
    fn test_from_toml_str_missing_key() {
        let result = ClientConfig::from_toml_str("base_url = \"https://host\"");
        assert!(matches!(result, Err(PodcastAiError::Toml(_))));
    }

    #[test]
    fn test_from_toml_str_zero_timeout() {
        let result = ClientConfig::from_toml_str("api_key = \"pk_test\"\ntimeout_secs = 0\n");
        assert!(matches!(result, Err(PodcastAiError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"pk_file\"").unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_key(), "pk_file");
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var(ENV_API_KEY, "pk_env");
        env::set_var(ENV_BASE_URL, "https://staging.example//");
        env::set_var(ENV_TIMEOUT_SECS, "15");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_key(), "pk_env");
        assert_eq!(config.base_url(), "https://staging.example");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_api_key() {
        clear_env();
        let result = ClientConfig::from_env();
        assert!(matches!(result, Err(PodcastAiError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        env::set_var(ENV_API_KEY, "pk_env");
        env::set_var(ENV_TIMEOUT_SECS, "soon");
        assert!(ClientConfig::from_env().is_err());
        env::set_var(ENV_TIMEOUT_SECS, "0");
        assert!(ClientConfig::from_env().is_err());
        clear_env();
    }
}
