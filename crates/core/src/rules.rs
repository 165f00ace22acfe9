//! Tier decision rules evaluated against the signals of one scan.

use crate::models::RiskLevel;

/// Raw counts gathered by one scan of an email body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signals {
    pub high_hits: usize,
    pub medium_hits: usize,
    pub url_count: usize,
    pub many_links: bool,
    pub suspicious_currency: bool,
    pub flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    HighHitsAtLeast(usize),
    HighHitsExactly(usize),
    MediumHitsAtLeast(usize),
    ManyLinks,
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierRule {
    pub level: RiskLevel,
    pub condition: Condition,
}

pub fn matches(condition: &Condition, signals: &Signals) -> bool {
    match condition {
        Condition::HighHitsAtLeast(n) => signals.high_hits >= *n,
        Condition::HighHitsExactly(n) => signals.high_hits == *n,
        Condition::MediumHitsAtLeast(n) => signals.medium_hits >= *n,
        Condition::ManyLinks => signals.many_links,
        Condition::And(all) => all.iter().all(|c| matches(c, signals)),
        Condition::Or(any) => any.iter().any(|c| matches(c, signals)),
    }
}

/// Ordered rule table. High is checked before Medium; anything else is Low.
pub fn tier_rules() -> Vec<TierRule> {
    use Condition::*;
    vec![
        TierRule {
            level: RiskLevel::High,
            condition: Or(vec![
                HighHitsAtLeast(2),
                And(vec![HighHitsAtLeast(1), ManyLinks]),
            ]),
        },
        TierRule {
            level: RiskLevel::Medium,
            condition: Or(vec![MediumHitsAtLeast(2), HighHitsExactly(1), ManyLinks]),
        },
    ]
}

/// First matching rule wins; Low when none match.
pub fn evaluate(rules: &[TierRule], signals: &Signals) -> RiskLevel {
    rules
        .iter()
        .find(|r| matches(&r.condition, signals))
        .map(|r| r.level)
        .unwrap_or(RiskLevel::Low)
}
