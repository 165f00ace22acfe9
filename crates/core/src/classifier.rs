use crate::keywords::KeywordSet;
use crate::models::{Verdict, NO_INDICATOR_FLAG};
use crate::remediation;
use crate::rules::{self, Signals, TierRule};
use crate::score::{ScoreSource, ThreadRngScores};
use providers::ProviderError;
use regex::Regex;
use std::sync::{Arc, LazyLock, OnceLock};
use thiserror::Error;

pub const MANY_LINKS_FLAG: &str = "múltiplos links detectados";
pub const SUSPICIOUS_CURRENCY_FLAG: &str = "caracteres suspeitos encontrados";

/// More links than this marks the text as link-heavy.
const MANY_LINKS_THRESHOLD: usize = 2;

const CURRENCY_GLYPHS: &[char] = &['₽', '₿', '€', '$', '£', '¥'];

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+").expect("url regex"));

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("malformed classifier output: {0}")]
    Malformed(String),
}

/// Anything that can turn an email body into a verdict.
#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Verdict, ClassifyError>;
}

/// Deterministic keyword and pattern scorer. Only the score is random.
#[derive(Clone)]
pub struct LocalClassifier {
    keywords: KeywordSet,
    rules: Vec<TierRule>,
    scores: Arc<dyn ScoreSource>,
}

impl Default for LocalClassifier {
    fn default() -> Self {
        Self::new(KeywordSet::default())
    }
}

impl LocalClassifier {
    pub fn new(keywords: KeywordSet) -> Self {
        Self {
            keywords,
            rules: rules::tier_rules(),
            scores: Arc::new(ThreadRngScores),
        }
    }

    pub fn with_scores(mut self, scores: Arc<dyn ScoreSource>) -> Self {
        self.scores = scores;
        self
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Collects keyword hits and structural signals without deciding a tier.
    pub fn scan(&self, text: &str) -> Signals {
        let lowered = text.to_lowercase();
        let mut signals = Signals::default();

        for term in self.keywords.high_hits(&lowered) {
            signals.high_hits += 1;
            push_unique(&mut signals.flags, term);
        }
        for term in self.keywords.medium_hits(&lowered) {
            signals.medium_hits += 1;
            push_unique(&mut signals.flags, term);
        }

        signals.url_count = URL_PATTERN.find_iter(text).count();
        signals.many_links = signals.url_count > MANY_LINKS_THRESHOLD;
        signals.suspicious_currency = text.contains(CURRENCY_GLYPHS);

        if signals.many_links {
            signals.flags.push(MANY_LINKS_FLAG.to_string());
        }
        if signals.suspicious_currency {
            signals.flags.push(SUSPICIOUS_CURRENCY_FLAG.to_string());
        }
        signals
    }

    /// Scores `text`. Never fails; blank text comes back Low.
    pub fn verdict(&self, text: &str) -> Verdict {
        let signals = self.scan(text);
        let level = rules::evaluate(&self.rules, &signals);
        let band = level.band();
        let score = band.clamp(self.scores.draw_int(band.low, band.high));

        let flags = if signals.flags.is_empty() {
            vec![NO_INDICATOR_FLAG.to_string()]
        } else {
            signals.flags
        };

        Verdict {
            risk_level: level,
            score,
            message: remediation::message(level).to_string(),
            flags,
        }
    }
}

#[async_trait::async_trait]
impl Classifier for LocalClassifier {
    async fn classify(&self, text: &str) -> Result<Verdict, ClassifyError> {
        Ok(self.verdict(text))
    }
}

/// Scores `text` with the default keyword set.
pub fn classify(text: &str) -> Verdict {
    static DEFAULT: OnceLock<LocalClassifier> = OnceLock::new();
    DEFAULT.get_or_init(LocalClassifier::default).verdict(text)
}

fn push_unique(flags: &mut Vec<String>, term: &str) {
    if !flags.iter().any(|f| f == term) {
        flags.push(term.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    struct LowestScore;

    impl ScoreSource for LowestScore {
        fn draw_int(&self, low: u8, _high: u8) -> u8 {
            low
        }
    }

    struct OutOfRange;

    impl ScoreSource for OutOfRange {
        fn draw_int(&self, _low: u8, _high: u8) -> u8 {
            255
        }
    }

    #[test]
    fn scan_counts_distinct_terms_once() {
        let c = LocalClassifier::default();
        let signals = c.scan("URGENTE urgente Urgente, oferta");
        assert_eq!(signals.high_hits, 1);
        assert_eq!(signals.medium_hits, 1);
        assert_eq!(signals.flags, ["urgente", "oferta"]);
    }

    #[test]
    fn url_count_is_case_insensitive_and_greedy_to_whitespace() {
        let c = LocalClassifier::default();
        let signals = c.scan("HTTP://a.com/x?y=1 https://b.com\thttp://c.com,http://d.com");
        // the last two are glued by a comma, so they form one token
        assert_eq!(signals.url_count, 3);
        assert!(signals.many_links);
        assert_eq!(signals.flags, [MANY_LINKS_FLAG]);
    }

    #[test]
    fn two_links_are_not_many() {
        let c = LocalClassifier::default();
        let signals = c.scan("http://a.com http://b.com");
        assert_eq!(signals.url_count, 2);
        assert!(!signals.many_links);
    }

    #[test]
    fn term_in_both_lists_counts_twice_flags_once() {
        let keywords = KeywordSet::new(["grátis", "senha"], ["grátis"]);
        let c = LocalClassifier::new(keywords);
        let signals = c.scan("Tudo GRÁTIS");
        assert_eq!(signals.high_hits, 1);
        assert_eq!(signals.medium_hits, 1);
        assert_eq!(signals.flags, ["grátis"]);
    }

    #[test]
    fn stub_score_source_is_used() {
        let c = LocalClassifier::default().with_scores(Arc::new(LowestScore));
        let v = c.verdict("urgente! verifique sua senha agora.");
        assert_eq!(v.risk_level, RiskLevel::High);
        assert_eq!(v.score, 85);
    }

    #[test]
    fn misbehaving_score_source_is_clamped_into_band() {
        let c = LocalClassifier::default().with_scores(Arc::new(OutOfRange));
        let v = c.verdict("hello");
        assert_eq!(v.risk_level, RiskLevel::Low);
        assert_eq!(v.score, 40);
    }

    #[test]
    fn blank_input_is_low_with_sentinel() {
        let v = classify("   ");
        assert_eq!(v.risk_level, RiskLevel::Low);
        assert_eq!(v.flags, [NO_INDICATOR_FLAG]);
        assert!(RiskLevel::Low.band().contains(v.score));
    }

    #[tokio::test]
    async fn trait_impl_never_errors() {
        let c = LocalClassifier::default();
        let v = Classifier::classify(&c, "Sua conta está suspensa.").await.unwrap();
        assert_eq!(v.risk_level, RiskLevel::Medium);
        assert_eq!(v.message, remediation::message(RiskLevel::Medium));
    }
}
