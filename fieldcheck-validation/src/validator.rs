// Rule dispatch

use crate::{
    Describe, FieldDescriptor, RuleSet, UnknownRulePolicy, ValidationError, ValidatorConfig,
    extract,
};
use fieldcheck_log::{debug, trace};

/// Why a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The rule's predicate returned false
    Rejected,
    /// The rule is not registered and the policy is strict
    UnknownRule,
}

/// Result of validating one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// The first failing field in declaration order
    Invalid {
        field: FieldDescriptor,
        reason: FailureReason,
    },
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn failing_field(&self) -> Option<&FieldDescriptor> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { field, .. } => Some(field),
        }
    }

    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid { reason, .. } => Some(*reason),
        }
    }

    /// `(success, failing field)`; the descriptor is empty on success
    pub fn into_parts(self) -> (bool, FieldDescriptor) {
        match self {
            ValidationOutcome::Valid => (true, FieldDescriptor::default()),
            ValidationOutcome::Invalid { field, .. } => (false, field),
        }
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid {
                field,
                reason: FailureReason::Rejected,
            } => Err(ValidationError::rejected(&field)),
            ValidationOutcome::Invalid {
                field,
                reason: FailureReason::UnknownRule,
            } => Err(ValidationError::unknown_rule(&field)),
        }
    }
}

/// Validates records against a [`RuleSet`].
///
/// ```
/// use fieldcheck_validation::{Describe, FieldEntry, Validator};
///
/// struct Filter {
///     ids: String,
///     sort: String,
/// }
///
/// impl Describe for Filter {
///     fn fields(&self) -> Vec<FieldEntry<'_>> {
///         vec![
///             FieldEntry::new("ids", &self.ids).annotate("validation", "comma_separated_numbers"),
///             FieldEntry::new("sort", &self.sort).annotate("validation", "sort_format"),
///         ]
///     }
/// }
///
/// let validator = Validator::default();
///
/// let ok = Filter { ids: "1,2,3".into(), sort: "name asc".into() };
/// assert!(validator.validate(&ok).is_valid());
///
/// let bad = Filter { ids: "1,,3".into(), sort: "name up".into() };
/// let outcome = validator.validate(&bad);
/// assert_eq!(outcome.failing_field().unwrap().name, "ids");
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    rules: RuleSet,
    config: ValidatorConfig,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(RuleSet::builtin(), ValidatorConfig::default())
    }
}

impl Validator {
    pub fn new(rules: RuleSet, config: ValidatorConfig) -> Self {
        Self { rules, config }
    }

    /// Built-in rules with the given config
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self::new(RuleSet::builtin(), config)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Insert or replace a rule on this validator
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.register(name, predicate);
    }

    /// Validate using the configured tag
    pub fn validate<R>(&self, record: &R) -> ValidationOutcome
    where
        R: Describe + ?Sized,
    {
        self.validate_with_tag(record, &self.config.tag)
    }

    pub fn validate_with_tag<R>(&self, record: &R, tag: &str) -> ValidationOutcome
    where
        R: Describe + ?Sized,
    {
        dispatch(&self.rules, self.config.unknown_rules, extract(record, tag))
    }
}

/// Run descriptors through `rules` in order, stopping at the first failure
pub(crate) fn dispatch(
    rules: &RuleSet,
    policy: UnknownRulePolicy,
    descriptors: Vec<FieldDescriptor>,
) -> ValidationOutcome {
    for mut field in descriptors {
        let Some(predicate) = rules.get(&field.rule) else {
            if policy == UnknownRulePolicy::Strict {
                debug!(
                    target: "fieldcheck::validator",
                    "field {} uses unknown rule {}", field.name, field.rule
                );
                return ValidationOutcome::Invalid {
                    field,
                    reason: FailureReason::UnknownRule,
                };
            }
            trace!(target: "fieldcheck::validator", "skipping unknown rule {}", field.rule);
            continue;
        };

        field.passed = predicate(&field.value);
        if !field.passed {
            debug!(
                target: "fieldcheck::validator",
                "field {} failed rule {}", field.name, field.rule
            );
            return ValidationOutcome::Invalid {
                field,
                reason: FailureReason::Rejected,
            };
        }
    }

    ValidationOutcome::Valid
}
