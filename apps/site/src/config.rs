use std::{collections::HashMap, fs};

use tracing::warn;

pub const CONFIG_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    /// Base URL of the backend API. Unset means same origin as the page.
    pub backend_url: Option<String>,
    /// Origin the page is reachable at, when it differs from `bind_addr`.
    pub public_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5173".into(),
            backend_url: None,
            public_url: None,
        }
    }
}

impl Settings {
    pub fn resolved_backend_url(&self) -> String {
        non_empty(&self.backend_url)
            .or_else(|| non_empty(&self.public_url))
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://{}", self.bind_addr))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

pub fn load_settings() -> Settings {
    let raw = fs::read_to_string(CONFIG_FILE).ok();
    settings_from(raw.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then the flat `site.toml` keys, then environment variables.
pub fn settings_from(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("bind_addr") {
                    settings.bind_addr = v.clone();
                }
                if let Some(v) = file_cfg.get("backend_url") {
                    settings.backend_url = Some(v.clone());
                }
                if let Some(v) = file_cfg.get("public_url") {
                    settings.public_url = Some(v.clone());
                }
            }
            Err(error) => warn!(file = CONFIG_FILE, %error, "ignoring unreadable config file"),
        }
    }

    if let Some(v) = env("SITE_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = env("BACKEND_URL") {
        settings.backend_url = Some(v);
    }
    if let Some(v) = env("APP__BACKEND_URL") {
        settings.backend_url = Some(v);
    }

    if let Some(v) = env("SITE_PUBLIC_URL") {
        settings.public_url = Some(v);
    }
    if let Some(v) = env("APP__PUBLIC_URL") {
        settings.public_url = Some(v);
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
