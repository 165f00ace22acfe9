use crate::{Completion, CompletionRequest, LlmProvider, ProviderError};

/// Provider that never answers; selecting it keeps analysis on the local engine.
#[derive(Debug, Default)]
pub struct NoopProvider;

#[async_trait::async_trait]
impl LlmProvider for NoopProvider {
    async fn complete(&self, _request: &CompletionRequest) -> Result<Completion, ProviderError> {
        Err(ProviderError::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_always_fails() {
        let req = CompletionRequest {
            system: String::new(),
            prompt: "hello".into(),
            json: true,
        };
        let err = NoopProvider.complete(&req).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotImplemented));
    }
}
