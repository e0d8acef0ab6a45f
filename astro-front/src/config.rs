use astro_client::{ClientConfig, DeleteMethod};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Front-end configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ASTRO_API_URL | http://localhost:8080 | backend base URL |
/// | ASTRO_TIMEOUT_SECS | 30 | request timeout |
/// | ASTRO_DELETE_METHOD | DELETE | `DELETE` or `POST` for delete calls |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | unset | enables daily rolling log files |
///
/// # Example
///
/// ```ignore
/// ASTRO_API_URL=http://10.0.0.5:8080 LOG_LEVEL=debug astro-front rooms list
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub delete_method: DeleteMethod,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl FrontConfig {
    /// Load from the process environment, after `.env` if one exists
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup; unparsable values fall back
    /// to their defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_url: var("ASTRO_API_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
            timeout_secs: var("ASTRO_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            delete_method: var("ASTRO_DELETE_METHOD")
                .and_then(|v| match v.parse() {
                    Ok(method) => Some(method),
                    Err(e) => {
                        tracing::warn!("{e}, using DELETE");
                        None
                    }
                })
                .unwrap_or_default(),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, api_url: Option<String>, log_level: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }

    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.trim_end_matches('/'))
            .with_timeout(self.timeout_secs)
            .with_delete_method(self.delete_method)
    }
}

impl Default for FrontConfig {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FrontConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.delete_method, DeleteMethod::Delete);
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_reads_variables() {
        let config = FrontConfig::from_vars(lookup(&[
            ("ASTRO_API_URL", "http://api.astro.id/"),
            ("ASTRO_TIMEOUT_SECS", "5"),
            ("ASTRO_DELETE_METHOD", "post"),
            ("LOG_DIR", "/tmp/astro"),
        ]));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.delete_method, DeleteMethod::Post);
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/astro"));

        let client = config.to_client_config();
        assert_eq!(client.base_url, "http://api.astro.id");
        assert_eq!(client.timeout, 5);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = FrontConfig::from_vars(lookup(&[
            ("ASTRO_TIMEOUT_SECS", "soon"),
            ("ASTRO_DELETE_METHOD", "PATCH"),
        ]));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.delete_method, DeleteMethod::Delete);
    }

    #[test]
    fn test_overrides() {
        let config = FrontConfig::default()
            .with_overrides(Some("http://127.0.0.1:9000".into()), None);
        assert_eq!(config.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.log_level, "info");
    }
}
