use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub fake_bank: HttpClientConfig,
}

/// Connection settings for one backend service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn defaults() -> Self {
        Self {
            fake_bank: HttpClientConfig {
                base_url: "http://localhost:8003".to_string(),
                timeout_secs: 30,
            },
        }
    }

    fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("FAKE_BANK_BASE_URL") {
            self.fake_bank.base_url = v;
        }
        if let Some(v) = lookup("FAKE_BANK_TIMEOUT_SECS") {
            self.fake_bank.timeout_secs = v.parse().unwrap_or(self.fake_bank.timeout_secs);
        }
        self
    }
}

// Global singleton config - initialized once on first access
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
