//! Declarative field validation for JSON documents and form data
//!
//! A [`RuleSet`] is bound to one record — a parsed JSON document or a flat
//! form-style string map — and carries any number of named rules per field.
//! [`RuleSet::evaluate`] runs every rule and returns a [`Report`] holding
//! the aggregate pass/fail outcome and the registered message of every rule
//! that failed, in registration order.
//!
//! Fields that are missing from the record read as the empty string, so a
//! `required` rule on an absent field fails with its configured message
//! rather than erroring. Evaluation never fails and has no side effects.
//!
//! # Examples
//!
//! ## Validating a form post
//!
//! ```
//! use scrutiny::RuleSet;
//! use std::collections::HashMap;
//!
//! let mut form = HashMap::new();
//! form.insert("email".to_string(), "grace@example.com".to_string());
//! form.insert("age".to_string(), "42".to_string());
//!
//! let mut set = RuleSet::new(form);
//! set.is_email("email", "email must be valid")
//!     .is_int("age", "age must be a whole number")
//!     .required("name", "name is required");
//!
//! let report = set.evaluate();
//! assert!(!report.passed());
//! assert_eq!(report.messages(), ["name is required"]);
//! ```
//!
//! ## Validating a JSON document
//!
//! Scalar leaves are coerced to strings, so numeric and boolean values
//! check the same way form fields do:
//!
//! ```
//! use scrutiny::{Record, RuleSet};
//! use serde_json::json;
//!
//! let record = Record::from(json!({ "host": "example.com", "port": 8080 }));
//! let mut set = RuleSet::new(record);
//! set.is_fqdn("host", "host must be a domain name")
//!     .is_int("port", "port must be an integer");
//!
//! assert!(set.evaluate().passed());
//! ```
//!
//! ## Reusable definitions
//!
//! A [`Schema`] carries the registration step for one kind of record, so
//! the rules for a form live in one place and the set cannot be built
//! unconfigured:
//!
//! ```
//! use scrutiny::{RuleSet, Schema};
//! use std::collections::HashMap;
//!
//! struct Signup;
//!
//! impl Schema for Signup {
//!     fn rules(set: &mut RuleSet) {
//!         set.required("username", "username is required")
//!             .min_length("username", "username is too short", 3)
//!             .is_email("email", "email must be valid");
//!     }
//! }
//!
//! let mut form = HashMap::new();
//! form.insert("username".to_string(), "ada".to_string());
//! form.insert("email".to_string(), "ada@example.com".to_string());
//!
//! assert!(RuleSet::of::<Signup>(form).evaluate().passed());
//! ```
//!
//! ## Custom checks
//!
//! Anything implementing [`Validator`] — including plain closures — plugs
//! into [`RuleSet::add`]:
//!
//! ```
//! use scrutiny::RuleSet;
//! use std::collections::HashMap;
//!
//! let mut form = HashMap::new();
//! form.insert("token".to_string(), "tok_live_abc".to_string());
//!
//! let mut set = RuleSet::new(form);
//! set.add("token", "token must be a live token", |value: &str| {
//!     value.starts_with("tok_live_")
//! });
//! assert!(set.evaluate().passed());
//! ```

pub use scrutiny_core::*;

/// The built-in predicate catalog, usable directly without a [`RuleSet`].
pub use scrutiny_validators as validators;

// Common imports
pub mod prelude {
    pub use crate::validators::{FqdnOptions, IsbnVersion};
    pub use crate::{Record, Report, Rule, RuleSet, Schema, Validator};
}
