//! Per-tier advisory text shown alongside a verdict.

use crate::models::RiskLevel;

const HIGH_MESSAGE: &str = "⚠️ PERIGO: Este e-mail apresenta características típicas de phishing. \
     Não clique em links, não forneça dados pessoais e não baixe anexos. \
     Encaminhe para o setor de TI imediatamente.";

const MEDIUM_MESSAGE: &str = "⚡ ATENÇÃO: Este e-mail contém elementos suspeitos. \
     Verifique o remetente cuidadosamente antes de qualquer ação. \
     Em caso de dúvida, consulte o setor de TI.";

const LOW_MESSAGE: &str = "✅ SEGURO: Este e-mail aparenta ser legítimo. \
     Ainda assim, sempre verifique o remetente e tenha cautela ao clicar em links.";

const HIGH_STEPS: &[&str] = &[
    "NÃO clique em nenhum link presente no e-mail",
    "NÃO forneça dados pessoais, senhas ou informações bancárias",
    "NÃO baixe ou abra anexos",
    "Encaminhe o e-mail imediatamente para o setor de TI",
    "Marque o e-mail como spam/phishing",
    "Delete o e-mail após reportar ao TI",
];

const MEDIUM_STEPS: &[&str] = &[
    "Verifique cuidadosamente o endereço do remetente",
    "Passe o mouse sobre os links (sem clicar) para ver o destino real",
    "Em caso de dúvida, entre em contato diretamente com a empresa (não use dados do e-mail)",
    "Consulte o setor de TI antes de qualquer ação",
    "Não forneça dados sensíveis sem confirmar a legitimidade",
];

const LOW_STEPS: &[&str] = &[
    "Sempre verifique o remetente antes de abrir anexos",
    "Mantenha cautela ao clicar em links",
    "Verifique se o domínio do remetente é legítimo",
    "Em caso de solicitação incomum, confirme por outro canal",
    "Mantenha seu antivírus atualizado",
];

pub fn message(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => HIGH_MESSAGE,
        RiskLevel::Medium => MEDIUM_MESSAGE,
        RiskLevel::Low => LOW_MESSAGE,
    }
}

pub fn remediation(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::High => HIGH_STEPS,
        RiskLevel::Medium => MEDIUM_STEPS,
        RiskLevel::Low => LOW_STEPS,
    }
}

pub fn icon(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "⚠️",
        RiskLevel::Medium => "⚡",
        RiskLevel::Low => "✅",
    }
}
