//! Rule registration and evaluation engine for scrutiny
//!
//! A [`RuleSet`] binds a [`Record`] (a parsed JSON document or a flat
//! form-style map) to an ordered collection of per-field [`Rule`]s, then
//! [`RuleSet::evaluate`] runs every rule and aggregates the outcome into a
//! [`Report`]. The built-in checks live in `scrutiny-validators`; anything
//! implementing [`Validator`] — including plain closures — plugs into the
//! same seam.

mod record;
mod report;
mod rule;
mod set;
mod traits;

pub use record::*;
pub use report::*;
pub use rule::*;
pub use set::*;
pub use traits::*;

// The option types that appear in `RuleSet` registration signatures.
pub use scrutiny_validators::{FqdnOptions, IsbnVersion};
