//! Classifier backed by a remote LLM provider.

use crate::classifier::{Classifier, ClassifyError};
use crate::models::{RiskLevel, Verdict, NO_INDICATOR_FLAG};
use providers::{CompletionRequest, LlmProvider};
use regex::Regex;
use serde::Deserialize;
use std::sync::{Arc, LazyLock};
use tracing::debug;

const SYSTEM_PROMPT: &str = "Você é um analista de segurança especializado em phishing. \
Analise o e-mail fornecido e responda SOMENTE com um objeto JSON com os campos: \
\"riskLevel\" (\"Alta\", \"Média\" ou \"Baixa\"), \
\"score\" (inteiro de 0 a 100; Alta 85-100, Média 50-80, Baixa 10-40), \
\"message\" (orientação curta ao usuário) e \
\"flags\" (lista de indicadores suspeitos encontrados).";

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^```[A-Za-z]*\s*(.*?)\s*```$").expect("fence regex"));

pub struct RemoteClassifier {
    provider: Arc<dyn LlmProvider>,
}

impl RemoteClassifier {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<Verdict, ClassifyError> {
        let request = CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            prompt: format!("E-mail para análise:\n\n{text}"),
            json: true,
        };
        let completion = self.provider.complete(&request).await?;
        debug!(model = ?completion.model, "remote classifier answered");
        parse_verdict(&completion.content)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVerdict {
    risk_level: RiskLevel,
    score: serde_json::Number,
    #[serde(default)]
    message: String,
    #[serde(default)]
    flags: Vec<String>,
}

/// Parses a remote reply into a verdict with a banded score and non-empty flags.
pub fn parse_verdict(content: &str) -> Result<Verdict, ClassifyError> {
    let trimmed = content.trim();
    let body = CODE_FENCE
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(trimmed);

    let raw: RawVerdict =
        serde_json::from_str(body).map_err(|e| ClassifyError::Malformed(e.to_string()))?;

    let score = raw
        .score
        .as_f64()
        .filter(|s| s.is_finite() && (0.0..=100.0).contains(s))
        .ok_or_else(|| ClassifyError::Malformed(format!("score out of range: {}", raw.score)))?;
    let score = raw.risk_level.band().clamp(score.round() as u8);

    let mut flags: Vec<String> = Vec::new();
    for flag in raw.flags {
        let flag = flag.trim().to_string();
        if !flag.is_empty() && !flags.contains(&flag) {
            flags.push(flag);
        }
    }
    if flags.is_empty() {
        flags.push(NO_INDICATOR_FLAG.to_string());
    }

    let message = if raw.message.trim().is_empty() {
        crate::remediation::message(raw.risk_level).to_string()
    } else {
        raw.message
    };

    Ok(Verdict {
        risk_level: raw.risk_level,
        score,
        message,
        flags,
    })
}
