use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Kept untyped so a missing or non-string field is reported as empty text.
    #[serde(default)]
    pub email_text: Option<serde_json::Value>,
}

impl AnalyzeRequest {
    /// The submitted text, if it is a string with something other than whitespace.
    pub fn text(&self) -> Option<&str> {
        self.email_text
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AnalyzeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn text_requires_non_blank_string() {
        assert_eq!(parse(r#"{"emailText":"oi"}"#).text(), Some("oi"));
        assert_eq!(parse(r#"{"emailText":"  \n "}"#).text(), None);
        assert_eq!(parse(r#"{"emailText":42}"#).text(), None);
        assert_eq!(parse(r#"{"emailText":null}"#).text(), None);
        assert_eq!(parse(r#"{}"#).text(), None);
    }
}
