use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Flag reported when neither a keyword nor a structural pattern matched.
pub const NO_INDICATOR_FLAG: &str = "nenhum indicador suspeito detectado";

/// Appended to the message of a verdict produced while the remote classifier is unavailable.
pub const DEGRADED_MARKER: &str = " [modo offline]";

/// Three-valued phishing likelihood. Serialized with the tier names the
/// rendering layer keys its styling and checklists on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum RiskLevel {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Baixa")]
    Low,
}

#[derive(Debug, Error)]
#[error("unknown risk level: {0}")]
pub struct UnknownRiskLevel(pub String);

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// Wire name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "Alta",
            RiskLevel::Medium => "Média",
            RiskLevel::Low => "Baixa",
        }
    }

    /// Closed score range a verdict of this tier must fall in.
    pub fn band(&self) -> ScoreBand {
        match self {
            RiskLevel::High => ScoreBand { low: 85, high: 100 },
            RiskLevel::Medium => ScoreBand { low: 50, high: 80 },
            RiskLevel::Low => ScoreBand { low: 10, high: 40 },
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alta" | "alto" | "high" => Ok(RiskLevel::High),
            "média" | "media" | "médio" | "medio" | "medium" => Ok(RiskLevel::Medium),
            "baixa" | "baixo" | "low" => Ok(RiskLevel::Low),
            _ => Err(UnknownRiskLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for RiskLevel {
    type Error = UnknownRiskLevel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub low: u8,
    pub high: u8,
}

impl ScoreBand {
    pub fn contains(&self, score: u8) -> bool {
        (self.low..=self.high).contains(&score)
    }

    pub fn clamp(&self, score: u8) -> u8 {
        score.clamp(self.low, self.high)
    }
}

/// Result of analysing one email body. Exactly these four fields go over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub risk_level: RiskLevel,
    pub score: u8,
    pub message: String,
    pub flags: Vec<String>,
}

impl Verdict {
    /// Marks the verdict as produced in degraded mode.
    pub fn degraded(mut self) -> Self {
        if !self.message.ends_with(DEGRADED_MARKER) {
            self.message.push_str(DEGRADED_MARKER);
        }
        self
    }

    pub fn is_degraded(&self) -> bool {
        self.message.ends_with(DEGRADED_MARKER)
    }
}
