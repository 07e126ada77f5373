//! fieldcheck - declarative per-field validation
//!
//! Annotate record fields with named rules, validate the record, and get back
//! the first field that fails.
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! #[derive(Describe)]
//! struct ListUsersQuery {
//!     #[rule(validation = "number")]
//!     page: String,
//!     #[rule(validation = "sort_format")]
//!     sort: String,
//! }
//!
//! let query = ListUsersQuery {
//!     page: "2".to_string(),
//!     sort: "name sideways".to_string(),
//! };
//!
//! let outcome = Validator::default().validate(&query);
//! assert_eq!(outcome.failing_field().map(|f| f.name.as_str()), Some("sort"));
//! ```

// Re-export the validation API
pub use fieldcheck_validation::*;

// The derive expands to `::fieldcheck::__private` paths, so crates that only
// depend on this facade can use it.
#[cfg(feature = "derive")]
pub use fieldcheck_macro::FacadeDescribe as Describe;

#[doc(hidden)]
pub use fieldcheck_validation::__private;

// Re-export logging controls
pub use fieldcheck_log as log;

/// Commonly used items
pub mod prelude {
    pub use crate::{
        DEFAULT_TAG, Describe, FieldDescriptor, FieldEntry, FieldValue, RuleSet,
        UnknownRulePolicy, ValidationOutcome, Validator, ValidatorConfig,
    };
}
