use crate::classifier::{Classifier, LocalClassifier};
use crate::config::{AiConfig, AppConfig};
use crate::models::Verdict;
use crate::remote::RemoteClassifier;
use providers::noop::NoopProvider;
use providers::openai::{OpenAiConfig, OpenAiProvider};
use providers::ProviderRegistry;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Which path produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Local,
    Fallback,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Remote => "remote",
            Source::Local => "local",
            Source::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub verdict: Verdict,
    pub source: Source,
}

/// Tries the remote classifier first and substitutes the local engine on any failure.
#[derive(Clone)]
pub struct Analyzer {
    remote: Option<Arc<dyn Classifier>>,
    local: LocalClassifier,
}

impl Analyzer {
    pub fn new(local: LocalClassifier) -> Self {
        Self {
            remote: None,
            local,
        }
    }

    pub fn with_remote(mut self, remote: Arc<dyn Classifier>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn analyze(&self, text: &str) -> Analysis {
        let Some(remote) = &self.remote else {
            return Analysis {
                verdict: self.local.verdict(text),
                source: Source::Local,
            };
        };

        match remote.classify(text).await {
            Ok(verdict) => Analysis {
                verdict,
                source: Source::Remote,
            },
            Err(e) => {
                warn!(error = %e, "remote classifier failed, using local engine");
                Analysis {
                    verdict: self.local.verdict(text).degraded(),
                    source: Source::Fallback,
                }
            }
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(LocalClassifier::default())
    }
}

/// Registers the providers the configuration and environment allow.
/// `openai` is only available when an API key is supplied.
pub fn build_registry(cfg: &AiConfig, api_key: Option<String>) -> ProviderRegistry {
    let mut reg = ProviderRegistry::new().with_llm("noop", Arc::new(NoopProvider));

    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        match OpenAiProvider::new(OpenAiConfig {
            api_key: key,
            base_url: cfg.base_url.clone(),
            chat_model: cfg.model.clone(),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }) {
            Ok(provider) => reg = reg.with_llm("openai", Arc::new(provider)),
            Err(e) => warn!(error = %e, "could not build openai client"),
        }
    }

    match &cfg.provider {
        Some(name) => reg.set_preferred_llm(name),
        None => reg,
    }
}

/// Builds the analyzer for a loaded configuration, reading `OPENAI_API_KEY`
/// from the environment.
pub fn build_analyzer(cfg: &AppConfig) -> Analyzer {
    let api_key = std::env::var("OPENAI_API_KEY").ok();
    build_analyzer_with_key(cfg, api_key)
}

pub fn build_analyzer_with_key(cfg: &AppConfig, api_key: Option<String>) -> Analyzer {
    let local = LocalClassifier::new(cfg.keyword_set());
    let analyzer = Analyzer::new(local);

    let Some(name) = cfg.ai.provider.as_deref() else {
        info!("no remote classifier configured, using local engine only");
        return analyzer;
    };

    let registry = build_registry(&cfg.ai, api_key);
    match registry.llm(Some(name)) {
        Ok(provider) => {
            info!(provider = name, "remote classifier enabled");
            analyzer.with_remote(Arc::new(RemoteClassifier::new(provider)))
        }
        Err(e) => {
            warn!(error = %e, "remote classifier unavailable, using local engine only");
            analyzer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassifyError;
    use crate::models::RiskLevel;
    use providers::{Completion, CompletionRequest, LlmProvider, ProviderError};

    struct CannedProvider(&'static str);

    #[async_trait::async_trait]
    impl LlmProvider for CannedProvider {
        async fn complete(&self, _request: &CompletionRequest) -> Result<Completion, ProviderError> {
            Ok(Completion {
                content: self.0.to_string(),
                model: Some("canned".into()),
            })
        }
    }

    struct QuotaExceeded;

    #[async_trait::async_trait]
    impl Classifier for QuotaExceeded {
        async fn classify(&self, _text: &str) -> Result<Verdict, ClassifyError> {
            Err(ClassifyError::Provider(ProviderError::RateLimited))
        }
    }

    #[test]
    fn openai_needs_an_api_key() {
        let mut cfg = AppConfig::default();
        cfg.ai.provider = Some("openai".into());
        assert!(!build_analyzer_with_key(&cfg, None).has_remote());
        assert!(!build_analyzer_with_key(&cfg, Some("  ".into())).has_remote());
        assert!(build_analyzer_with_key(&cfg, Some("sk-test".into())).has_remote());
    }

    #[test]
    fn no_provider_means_local_only() {
        let cfg = AppConfig::default();
        assert!(!build_analyzer_with_key(&cfg, Some("sk-test".into())).has_remote());
        assert!(build_registry(&cfg.ai, None).llm(Some("noop")).is_ok());
    }

    #[tokio::test]
    async fn local_only_is_not_degraded() {
        let analysis = Analyzer::default().analyze("hello, how are you today?").await;
        assert_eq!(analysis.source, Source::Local);
        assert!(!analysis.verdict.is_degraded());
    }

    #[tokio::test]
    async fn remote_verdict_is_used_when_valid() {
        let provider = CannedProvider(
            r#"{"riskLevel":"Alta","score":90,"message":"perigo","flags":["link falso"]}"#,
        );
        let analyzer = Analyzer::default()
            .with_remote(Arc::new(RemoteClassifier::new(Arc::new(provider))));
        let analysis = analyzer.analyze("hello").await;
        assert_eq!(analysis.source, Source::Remote);
        assert_eq!(analysis.verdict.risk_level, RiskLevel::High);
        assert_eq!(analysis.verdict.flags, ["link falso"]);
        assert!(!analysis.verdict.is_degraded());
    }

    #[tokio::test]
    async fn malformed_remote_output_falls_back() {
        let provider = CannedProvider("I think this is phishing.");
        let analyzer = Analyzer::default()
            .with_remote(Arc::new(RemoteClassifier::new(Arc::new(provider))));
        let analysis = analyzer.analyze("Sua conta está suspensa.").await;
        assert_eq!(analysis.source, Source::Fallback);
        assert_eq!(analysis.verdict.risk_level, RiskLevel::Medium);
        assert!(analysis.verdict.is_degraded());
    }

    #[tokio::test]
    async fn provider_errors_fall_back() {
        let noop = Analyzer::default()
            .with_remote(Arc::new(RemoteClassifier::new(Arc::new(NoopProvider))));
        let analysis = noop.analyze("urgente! verifique sua senha agora.").await;
        assert_eq!(analysis.source, Source::Fallback);
        assert_eq!(analysis.verdict.risk_level, RiskLevel::High);

        let quota = Analyzer::default().with_remote(Arc::new(QuotaExceeded));
        let analysis = quota.analyze("hello").await;
        assert_eq!(analysis.source, Source::Fallback);
        assert!(analysis.verdict.is_degraded());
    }
}
