// Rule registry

use crate::predicates;
use fieldcheck_log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Predicate implementing a rule
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Rule name of [`predicates::is_number`]
pub const NUMBER: &str = "number";
/// Rule name of [`predicates::is_comma_separated_numbers`]
pub const COMMA_SEPARATED_NUMBERS: &str = "comma_separated_numbers";
/// Rule name of [`predicates::is_alphabet`]
pub const ALPHABET: &str = "alphabet";
/// Rule name of [`predicates::is_sort_format`]
pub const SORT_FORMAT: &str = "sort_format";

static BUILTIN_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::empty()
        .with_rule(COMMA_SEPARATED_NUMBERS, predicates::is_comma_separated_numbers)
        .with_rule(NUMBER, predicates::is_number)
        .with_rule(ALPHABET, predicates::is_alphabet)
        .with_rule(SORT_FORMAT, predicates::is_sort_format)
});

/// Mapping from rule name to predicate.
///
/// Names are unique; registering an existing name replaces its predicate.
///
/// ```
/// use fieldcheck_validation::RuleSet;
///
/// let rules = RuleSet::builtin().with_rule("slug", |s: &str| {
///     !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c == '-')
/// });
///
/// assert_eq!(rules.check("slug", "hello-world"), Some(true));
/// assert_eq!(rules.check("number", "4.2"), Some(true));
/// assert_eq!(rules.check("missing", "x"), None);
/// ```
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, Predicate>,
}

impl RuleSet {
    /// An empty rule set
    pub fn empty() -> Self {
        Self::default()
    }

    /// A copy of the built-in rules: `number`, `comma_separated_numbers`,
    /// `alphabet` and `sort_format`
    pub fn builtin() -> Self {
        BUILTIN_RULES.clone()
    }

    /// Insert or replace the predicate for `name`
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(predicate));
    }

    /// Builder form of [`RuleSet::register`]
    pub fn with_rule<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.register(name, predicate);
        self
    }

    /// Insert an already shared predicate
    pub fn insert(&mut self, name: String, predicate: Predicate) {
        if self.rules.insert(name.clone(), predicate).is_some() {
            debug!(target: "fieldcheck::rules", "replaced rule {}", name);
        } else {
            debug!(target: "fieldcheck::rules", "registered rule {}", name);
        }
    }

    /// Copy every rule of `other` into this set, replacing on conflict
    pub fn merge(&mut self, other: &RuleSet) {
        for (name, predicate) in &other.rules {
            self.insert(name.clone(), Arc::clone(predicate));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Predicate> {
        self.rules.remove(name)
    }

    /// Evaluate rule `name` against `value`; `None` if the rule is unknown
    pub fn check(&self, name: &str, value: &str) -> Option<bool> {
        self.get(name).map(|predicate| predicate(value))
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.names())
            .finish()
    }
}
