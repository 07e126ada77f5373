// Field extraction

use crate::Describe;
use fieldcheck_log::trace;
use serde::{Deserialize, Serialize};

/// A field selected for validation under one tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared on the record
    pub name: String,

    /// Rendered field value, untrimmed
    pub value: String,

    /// Rule name attached under the requested tag, as written
    pub rule: String,

    /// Predicate result; `false` until the field has been checked
    pub passed: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            rule: rule.into(),
            passed: false,
        }
    }
}

/// Collect the fields of `record` that carry a rule under `tag`.
///
/// A field is kept when its value is neither blank nor the zero value of
/// its type and its rule under `tag` is not blank. Declaration order is
/// preserved.
pub fn extract<R>(record: &R, tag: &str) -> Vec<FieldDescriptor>
where
    R: Describe + ?Sized,
{
    record
        .fields()
        .into_iter()
        .filter_map(|entry| {
            if entry.name().trim().is_empty() || entry.is_zero() || entry.value().trim().is_empty() {
                return None;
            }

            let rule = entry.rule(tag)?;
            if rule.trim().is_empty() {
                return None;
            }

            trace!(target: "fieldcheck::extract", "field {} -> rule {}", entry.name(), rule);
            Some(FieldDescriptor::new(entry.name(), entry.value(), rule))
        })
        .collect()
}
