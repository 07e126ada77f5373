//! Fuzz target for field extraction and rule dispatch.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fieldcheck_validation::{
    DEFAULT_TAG, Describe, FieldEntry, Validator, ValidatorConfig, extract,
};

const RULES: [&str; 6] = [
    "number",
    "comma_separated_numbers",
    "alphabet",
    "sort_format",
    "unregistered",
    " ",
];

#[derive(Debug, Arbitrary)]
struct FuzzRecord {
    values: Vec<(String, u8)>,
    strict: bool,
}

struct Record<'a> {
    input: &'a FuzzRecord,
}

impl Describe for Record<'_> {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        self.input
            .values
            .iter()
            .map(|(value, rule)| {
                FieldEntry::new("field", value)
                    .annotate(DEFAULT_TAG, RULES[*rule as usize % RULES.len()])
            })
            .collect()
    }
}

fuzz_target!(|data: FuzzRecord| {
    let record = Record { input: &data };

    let config = if data.strict {
        ValidatorConfig::default().strict()
    } else {
        ValidatorConfig::default()
    };
    let validator = Validator::with_config(config);

    let extracted = extract(&record, DEFAULT_TAG);
    assert!(extracted.len() <= data.values.len());
    assert!(extracted.iter().all(|f| !f.value.trim().is_empty() && !f.rule.is_empty()));

    let outcome = validator.validate(&record);
    if let Some(field) = outcome.failing_field() {
        assert!(!field.passed);
        assert!(extracted.contains(field));
    }
});
