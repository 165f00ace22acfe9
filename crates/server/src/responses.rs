use phishguard_core::RiskLevel;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationResponse {
    pub risk_level: RiskLevel,
    pub icon: &'static str,
    pub recommendations: &'static [&'static str],
}
