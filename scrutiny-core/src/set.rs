// Rule set: per-field rule registration and the evaluation pass

use crate::{FqdnOptions, IsbnVersion, Record, Report, Rule, Schema, Validator};
use regex::Regex;
use scrutiny_validators as validators;

/// The rules registered against one record, grouped by field.
///
/// A set is bound to its [`Record`] at construction and owns it for its
/// lifetime, so repeated [`evaluate`](RuleSet::evaluate) calls see the same
/// data and return the same [`Report`]. Fields keep the order of their
/// first registration and rules keep per-field registration order, which
/// makes the message sequence deterministic; the boolean outcome does not
/// depend on order at all.
///
/// Registration is fluent:
///
/// ```
/// use scrutiny_core::RuleSet;
/// use std::collections::HashMap;
///
/// let mut form = HashMap::new();
/// form.insert("email".to_string(), "grace@example.com".to_string());
///
/// let mut set = RuleSet::new(form);
/// set.required("email", "email is required")
///     .is_email("email", "email must be valid");
/// assert!(set.evaluate().passed());
/// ```
#[derive(Clone)]
pub struct RuleSet {
    record: Record,
    fields: Vec<(String, Vec<Rule>)>,
}

impl RuleSet {
    /// An empty set over `record`. With no rules registered, evaluation
    /// passes vacuously.
    pub fn new(record: impl Into<Record>) -> Self {
        Self {
            record: record.into(),
            fields: Vec::new(),
        }
    }

    /// Build a set and run a one-off registration step against it.
    pub fn with(record: impl Into<Record>, setup: impl FnOnce(&mut Self)) -> Self {
        let mut set = Self::new(record);
        setup(&mut set);
        set
    }

    /// Build a set from a reusable [`Schema`] definition.
    pub fn of<S: Schema>(record: impl Into<Record>) -> Self {
        let mut set = Self::new(record);
        S::rules(&mut set);
        set
    }

    /// The bound record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Total number of registered rules across all fields.
    pub fn rule_count(&self) -> usize {
        self.fields.iter().map(|(_, rules)| rules.len()).sum()
    }

    /// Register a rule for `field`. This is the generic entry point every
    /// convenience method forwards to, and the escape hatch for custom
    /// checks: any closure or [`Validator`] delegate is accepted. A field
    /// may be registered any number of times; rules accumulate in order.
    pub fn add(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        validator: impl Validator + 'static,
    ) -> &mut Self {
        let field = field.into();
        let rule = Rule::new(message, validator);
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, rules)) => rules.push(rule),
            None => self.fields.push((field, vec![rule])),
        }
        self
    }

    /// Run every registered rule against the record's current values.
    ///
    /// Fields are visited in first-registration order and each field's
    /// rules in registration order, so the report's messages are
    /// deterministic and mirror the registration sequence. Evaluation is a
    /// pure read pass: no state changes, and calling it again yields an
    /// identical report.
    pub fn evaluate(&self) -> Report {
        log::debug!(
            "evaluating {} rule(s) over {} field(s)",
            self.rule_count(),
            self.fields.len()
        );
        let mut messages = Vec::new();
        for (field, rules) in &self.fields {
            let value = self.record.get(field);
            for rule in rules {
                if let Err(message) = rule.check(&value) {
                    log::trace!("field {field:?} failed: {message}");
                    messages.push(message.to_owned());
                }
            }
        }
        Report::new(messages)
    }

    // Text checks

    /// The field must contain `needle`.
    pub fn contains(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        needle: &str,
    ) -> &mut Self {
        self.add(field, message, validators::contains(needle))
    }

    /// The field must equal `expected` exactly.
    pub fn equals(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        expected: &str,
    ) -> &mut Self {
        self.add(field, message, validators::equals(expected))
    }

    /// The field must be exactly `length` characters.
    pub fn exact_length(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        length: usize,
    ) -> &mut Self {
        self.add(field, message, validators::exact_length(length))
    }

    /// The field must be at least `length` characters.
    pub fn min_length(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        length: usize,
    ) -> &mut Self {
        self.add(field, message, validators::min_length(length))
    }

    /// The field must be at most `length` characters.
    pub fn max_length(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        length: usize,
    ) -> &mut Self {
        self.add(field, message, validators::max_length(length))
    }

    /// The field must be non-empty. Absent fields read as empty and fail.
    pub fn required(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::required)
    }

    /// The field must be the empty string.
    pub fn is_empty(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_empty)
    }

    /// The field must be one of `allowed`.
    pub fn is_in(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        allowed: &[&str],
    ) -> &mut Self {
        self.add(field, message, validators::is_in(allowed))
    }

    pub fn is_ascii(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_ascii)
    }

    pub fn is_alpha(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_alpha)
    }

    pub fn is_alphanumeric(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add(field, message, validators::is_alphanumeric)
    }

    pub fn is_numeric(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add(field, message, validators::is_numeric)
    }

    pub fn is_hexadecimal(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add(field, message, validators::is_hexadecimal)
    }

    pub fn is_hex_color(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add(field, message, validators::is_hex_color)
    }

    pub fn is_base64(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_base64)
    }

    pub fn is_lowercase(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add(field, message, validators::is_lowercase)
    }

    pub fn is_uppercase(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add(field, message, validators::is_uppercase)
    }

    /// The field must match an already-compiled pattern. Compiling the
    /// pattern stays with the caller, so a bad pattern surfaces there
    /// rather than as a silent rule failure.
    pub fn matches(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        pattern: Regex,
    ) -> &mut Self {
        self.add(field, message, move |value: &str| pattern.is_match(value))
    }

    // Parsed-value checks

    pub fn is_bool(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_bool)
    }

    pub fn is_true(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_true)
    }

    pub fn is_false(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_false)
    }

    pub fn is_int(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_int)
    }

    pub fn is_float(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_float)
    }

    // Date checks

    /// The field must parse with the default `%Y-%m-%d` format.
    pub fn is_date(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_date)
    }

    /// The field must be a date strictly after `bound` (default format).
    pub fn is_after(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        bound: &str,
    ) -> &mut Self {
        self.add(field, message, validators::after(bound))
    }

    /// The field must be a date strictly after `bound`, both in a
    /// caller-supplied chrono format.
    pub fn is_after_format(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        bound: &str,
        format: &str,
    ) -> &mut Self {
        self.add(field, message, validators::after_with_format(bound, format))
    }

    /// The field must be a date strictly before `bound` (default format).
    pub fn is_before(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        bound: &str,
    ) -> &mut Self {
        self.add(field, message, validators::before(bound))
    }

    /// The field must be a date strictly before `bound`, both in a
    /// caller-supplied chrono format.
    pub fn is_before_format(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        bound: &str,
        format: &str,
    ) -> &mut Self {
        self.add(
            field,
            message,
            validators::before_with_format(bound, format),
        )
    }

    // Network identifier checks

    pub fn is_email(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_email)
    }

    pub fn is_url(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_url)
    }

    pub fn is_ip(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_ip)
    }

    pub fn is_ipv4(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_ipv4)
    }

    pub fn is_ipv6(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_ipv6)
    }

    /// The field must be a fully-qualified domain name (default options).
    pub fn is_fqdn(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.is_fqdn_with(field, message, FqdnOptions::default())
    }

    /// FQDN check with explicit [`FqdnOptions`].
    pub fn is_fqdn_with(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        options: FqdnOptions,
    ) -> &mut Self {
        self.add(field, message, validators::fqdn(options))
    }

    // Identifier and checksum checks

    pub fn is_credit_card(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add(field, message, validators::is_credit_card)
    }

    /// The field must be an ISBN of the given version.
    pub fn is_isbn(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        version: IsbnVersion,
    ) -> &mut Self {
        self.add(field, message, validators::isbn(version))
    }

    pub fn is_uuid(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.add(field, message, validators::is_uuid)
    }

    pub fn is_mongo_id(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.add(field, message, validators::is_mongo_id)
    }

    /// The field must be a phone number for the given locale tag.
    pub fn is_phone(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        locale: &str,
    ) -> &mut Self {
        self.add(field, message, validators::phone(locale))
    }
}
