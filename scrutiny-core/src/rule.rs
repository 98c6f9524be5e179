// A single registered check

use crate::Validator;
use std::sync::Arc;

/// One validator bound to the message reported when it fails.
///
/// Rules are immutable once built and owned by the `RuleSet` entry that
/// created them.
#[derive(Clone)]
pub struct Rule {
    message: String,
    validator: Arc<dyn Validator>,
}

impl Rule {
    pub fn new(message: impl Into<String>, validator: impl Validator + 'static) -> Self {
        Self {
            message: message.into(),
            validator: Arc::new(validator),
        }
    }

    /// Run the validator against `value`. `Err` carries exactly the message
    /// supplied at registration time.
    pub fn check(&self, value: &str) -> Result<(), &str> {
        if self.validator.validate(value) {
            Ok(())
        } else {
            Err(&self.message)
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passes_silently() {
        let rule = Rule::new("must not be empty", |value: &str| !value.is_empty());
        assert_eq!(rule.check("content"), Ok(()));
    }

    #[test]
    fn test_check_fails_with_registered_message() {
        let rule = Rule::new("must not be empty", |value: &str| !value.is_empty());
        assert_eq!(rule.check(""), Err("must not be empty"));
        assert_eq!(rule.message(), "must not be empty");
    }
}
