//! Keyword dictionaries the local classifier scans for.

pub const HIGH_RISK_TERMS: &[&str] = &[
    "urgente",
    "senha",
    "bloqueio",
    "suspensa",
    "verificar conta",
    "confirme seus dados",
    "expire",
    "imediato",
    "cancelamento",
    "bloqueada",
    "suspensão",
    "irregular",
    "pendente",
    "documento anexo",
    "clique imediatamente",
    "dados bancários",
    "cartão de crédito",
];

pub const MEDIUM_RISK_TERMS: &[&str] = &[
    "oferta",
    "clique aqui",
    "promoção",
    "ganhe",
    "prêmio",
    "desconto",
    "grátis",
    "parabéns",
    "sorteio",
    "ganhar",
    "exclusivo",
    "limitado",
    "aproveite",
    "cadastre-se",
];

/// Two ordered lists of lowercase terms. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    high_risk: Vec<String>,
    medium_risk: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(
            HIGH_RISK_TERMS.iter().copied(),
            MEDIUM_RISK_TERMS.iter().copied(),
        )
    }
}

impl KeywordSet {
    /// Terms are trimmed and lowercased; blanks are dropped and the first
    /// occurrence of a repeated term wins.
    pub fn new<H, M, S>(high: H, medium: M) -> Self
    where
        H: IntoIterator<Item = S>,
        M: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            high_risk: normalize(high),
            medium_risk: normalize(medium),
        }
    }

    pub fn high_risk(&self) -> &[String] {
        &self.high_risk
    }

    pub fn medium_risk(&self) -> &[String] {
        &self.medium_risk
    }

    /// High-risk terms contained in `lowered`, in list order.
    pub fn high_hits<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        hits(&self.high_risk, lowered)
    }

    /// Medium-risk terms contained in `lowered`, in list order.
    pub fn medium_hits<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        hits(&self.medium_risk, lowered)
    }
}

fn hits<'a>(terms: &'a [String], lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    terms
        .iter()
        .map(String::as_str)
        .filter(move |term| lowered.contains(term))
}

fn normalize<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for term in terms {
        let term = term.as_ref().trim().to_lowercase();
        if term.is_empty() || out.contains(&term) {
            continue;
        }
        out.push(term);
    }
    out
}
