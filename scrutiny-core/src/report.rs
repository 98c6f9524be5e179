// Evaluation outcome

use serde::Serialize;
use std::fmt;

/// The aggregate outcome of one evaluation pass: the ordered messages of
/// every rule that failed.
///
/// Produced fresh by each `RuleSet::evaluate` call. The overall result is
/// derived — the pass passed iff no message was recorded — so the
/// pass/messages pair cannot fall out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    messages: Vec<String>,
}

impl Report {
    pub(crate) fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// True iff every registered rule passed, including when zero rules
    /// were registered.
    pub fn passed(&self) -> bool {
        self.messages.is_empty()
    }

    /// Failure messages in field-registration order, then per-field rule
    /// registration order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of failed rules.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// `Ok(())` on a clean pass, otherwise the report itself as the error.
    pub fn into_result(self) -> Result<(), Report> {
        if self.passed() { Ok(()) } else { Err(self) }
    }

    /// JSON representation of the outcome.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "passed": self.passed(),
            "messages": self.messages,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Report {}
