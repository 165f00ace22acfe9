use crate::keywords::{KeywordSet, HIGH_RISK_TERMS, MEDIUM_RISK_TERMS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub keywords: Option<KeywordConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Remote provider name (`openai` or `noop`); unset keeps analysis local.
    pub provider: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com".to_string(),
            timeout_secs: 20,
        }
    }
}

/// Replaces the built-in keyword lists. An omitted list keeps its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub high: Option<Vec<String>>,
    #[serde(default)]
    pub medium: Option<Vec<String>>,
}

impl KeywordConfig {
    pub fn to_keyword_set(&self) -> KeywordSet {
        let high: Vec<String> = self
            .high
            .clone()
            .unwrap_or_else(|| HIGH_RISK_TERMS.iter().map(|t| t.to_string()).collect());
        let medium: Vec<String> = self
            .medium
            .clone()
            .unwrap_or_else(|| MEDIUM_RISK_TERMS.iter().map(|t| t.to_string()).collect());
        KeywordSet::new(high, medium)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            ai: AiConfig::default(),
            keywords: None,
        }
    }
}

impl AppConfig {
    pub fn keyword_set(&self) -> KeywordSet {
        self.keywords
            .as_ref()
            .map(KeywordConfig::to_keyword_set)
            .unwrap_or_default()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Loads the file at `path` (or `config/default.*` if present), then
/// `PHISHGUARD__`-prefixed environment variables on top.
pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    settings = settings.add_source(
        config::Environment::with_prefix("PHISHGUARD")
            .separator("__")
            .try_parsing(true),
    );
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
