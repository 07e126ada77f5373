//! Tag-driven field validation
//!
//! Records describe their fields together with rule annotations; a
//! [`Validator`] extracts the fields annotated under a tag, runs each one
//! through the named rule, and reports the first field that fails.
//!
//! # Examples
//!
//! ## Derived annotations
//!
//! ```
//! use fieldcheck_validation::{Describe, Validator};
//!
//! #[derive(Describe)]
//! struct ListParams {
//!     #[rule(validation = "number")]
//!     page: String,
//!     #[rule(validation = "sort_format")]
//!     sort: String,
//!     #[rule(validation = "comma_separated_numbers")]
//!     ids: String,
//! }
//!
//! let params = ListParams {
//!     page: "2".to_string(),
//!     sort: "created_at desc".to_string(),
//!     ids: String::new(),
//! };
//!
//! assert!(Validator::default().validate(&params).is_valid());
//! ```
//!
//! ## Custom rules
//!
//! ```
//! use fieldcheck_validation::{Describe, RuleSet, Validator, ValidatorConfig};
//!
//! #[derive(Describe)]
//! struct Signup {
//!     #[rule(validation = "username")]
//!     username: String,
//! }
//!
//! let rules = RuleSet::builtin().with_rule("username", |s: &str| {
//!     (3..=16).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric())
//! });
//! let validator = Validator::new(rules, ValidatorConfig::default());
//!
//! let outcome = validator.validate(&Signup { username: "x!".to_string() });
//! let field = outcome.failing_field().unwrap();
//! assert_eq!(field.name, "username");
//! assert_eq!(field.rule, "username");
//! ```
//!
//! ## Process-wide registry
//!
//! ```
//! use fieldcheck_validation::{Describe, register_rule, validate};
//!
//! #[derive(Describe)]
//! struct Lookup {
//!     #[rule(validation = "uppercase")]
//!     code: String,
//! }
//!
//! register_rule("uppercase", |s: &str| s.chars().all(|c| c.is_ascii_uppercase()));
//! assert!(!validate(&Lookup { code: "abc".to_string() }).is_valid());
//! ```

mod config;
mod describe;
mod env;
mod errors;
mod extract;
pub mod predicates;
pub mod registry;
mod rules;
mod validator;

pub use config::*;
pub use describe::*;
pub use env::*;
pub use errors::{ConfigError, ValidationError};
pub use extract::*;
pub use registry::{global_rules, register_rule, validate, validate_with_tag};
pub use rules::*;
pub use validator::{FailureReason, ValidationOutcome, Validator};

// Paths used by `#[derive(Describe)]` output
#[doc(hidden)]
pub mod __private {
    pub use crate::{Describe, FieldEntry, FieldValue};
}

#[cfg(feature = "derive")]
pub use fieldcheck_macro::Describe;
