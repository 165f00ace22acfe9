//! Core library: phishing risk classification, remediation guidance, and the
//! remote/local fallback policy.

pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod keywords;
pub mod models;
pub mod remediation;
pub mod remote;
pub mod rules;
pub mod score;

pub use analyzer::{build_analyzer, Analysis, Analyzer, Source};
pub use classifier::{classify, Classifier, ClassifyError, LocalClassifier};
pub use keywords::KeywordSet;
pub use models::{RiskLevel, Verdict};
