//! Fact provider helpers.
//!
//! The provider answers `GET <base>/<n>/math?json` with a JSON object whose
//! `text` field holds the trivia. Nothing about that contract is trusted: the
//! shell passes the status code and raw body here and gets back a
//! [`FactOutcome`] that always collapses to a string.

/// Public provider used when nothing else is configured
pub const DEFAULT_FACT_API_URL: &str = "http://numbersapi.com";

/// Result of one fun-fact lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactOutcome {
    Found(String),
    Timeout,
    Status(u16),
    Malformed(String),
    Network(String),
}

impl FactOutcome {
    /// Collapse to the `fun_fact` field. Every failure becomes an empty string.
    pub fn into_fun_fact(self) -> String {
        match self {
            FactOutcome::Found(text) => text,
            _ => String::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FactOutcome::Found(_))
    }
}

/// Build the lookup URL for `n` against `base`.
pub fn fact_url(base: &str, n: i64) -> String {
    format!("{}/{n}/math?json", base.trim_end_matches('/'))
}

/// Interpret a provider response.
///
/// Only a 200 counts. A JSON object with a string `text` is a hit; an object
/// without `text` is an empty hit. Any other shape is malformed.
pub fn interpret_fact_body(status: u16, body: &[u8]) -> FactOutcome {
    if status != 200 {
        return FactOutcome::Status(status);
    }

    let value: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => return FactOutcome::Malformed(format!("invalid JSON: {e}")),
    };

    let Some(object) = value.as_object() else {
        return FactOutcome::Malformed("expected a JSON object".to_string());
    };

    match object.get("text") {
        None => FactOutcome::Found(String::new()),
        Some(serde_json::Value::String(text)) => FactOutcome::Found(text.clone()),
        Some(other) => FactOutcome::Malformed(format!("`text` is not a string: {other}")),
    }
}
