//! Process-wide rule registry
//!
//! A shared [`RuleSet`] seeded with the built-in rules. Registration swaps
//! in a new copy of the set, so validation never holds the lock while a
//! predicate runs and predicates may themselves register rules.
//!
//! Owned [`crate::Validator`] values are preferred where the caller can
//! thread one through; this module serves code that relies on global
//! registration.

use crate::validator::dispatch;
use crate::{DEFAULT_TAG, Describe, RuleSet, UnknownRulePolicy, ValidationOutcome, extract};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

static REGISTRY: Lazy<RwLock<Arc<RuleSet>>> =
    Lazy::new(|| RwLock::new(Arc::new(RuleSet::builtin())));

/// Insert or replace a rule in the process-wide registry
pub fn register_rule<F>(name: impl Into<String>, predicate: F)
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let mut guard = REGISTRY.write();
    Arc::make_mut(&mut *guard).register(name, predicate);
}

/// Snapshot of the process-wide registry
pub fn global_rules() -> Arc<RuleSet> {
    Arc::clone(&*REGISTRY.read())
}

/// Validate `record` against the process-wide registry under [`DEFAULT_TAG`].
/// Unknown rules are skipped.
pub fn validate<R>(record: &R) -> ValidationOutcome
where
    R: Describe + ?Sized,
{
    validate_with_tag(record, DEFAULT_TAG)
}

pub fn validate_with_tag<R>(record: &R, tag: &str) -> ValidationOutcome
where
    R: Describe + ?Sized,
{
    let rules = global_rules();
    dispatch(&rules, UnknownRulePolicy::Lenient, extract(record, tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldEntry;

    // Rule names are unique per test; the registry is shared across test threads.

    struct Token {
        value: String,
    }

    impl Describe for Token {
        fn fields(&self) -> Vec<FieldEntry<'_>> {
            vec![FieldEntry::new("value", &self.value).annotate("validation", "registry_test_hex")]
        }
    }

    #[test]
    fn test_register_then_validate() {
        let token = Token {
            value: "zz".to_string(),
        };

        assert!(validate(&token).is_valid());

        register_rule("registry_test_hex", |s: &str| {
            s.chars().all(|c| c.is_ascii_hexdigit())
        });
        assert!(!validate(&token).is_valid());
        assert!(validate(&Token { value: "ff".to_string() }).is_valid());

        register_rule("registry_test_hex", |_: &str| true);
        assert!(validate(&token).is_valid());
    }

    #[test]
    fn test_builtins_present() {
        let rules = global_rules();
        assert!(rules.contains(crate::NUMBER));
        assert!(rules.contains(crate::SORT_FORMAT));
    }

    #[test]
    fn test_predicate_may_register() {
        struct Nested {
            value: String,
        }

        impl Describe for Nested {
            fn fields(&self) -> Vec<FieldEntry<'_>> {
                vec![FieldEntry::new("value", &self.value).annotate("validation", "registry_test_outer")]
            }
        }

        register_rule("registry_test_outer", |_: &str| {
            register_rule("registry_test_inner", |_: &str| true);
            true
        });

        assert!(validate(&Nested { value: "x".to_string() }).is_valid());
        assert!(global_rules().contains("registry_test_inner"));
    }
}
