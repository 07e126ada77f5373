//! Integration tests for fieldcheck-validation

use fieldcheck_validation::predicates::*;
use fieldcheck_validation::*;

struct Order {
    quantity: String,
    product_ids: String,
    customer: String,
    sort: String,
}

impl Describe for Order {
    fn fields(&self) -> Vec<FieldEntry<'_>> {
        vec![
            FieldEntry::new("quantity", &self.quantity).annotate(DEFAULT_TAG, NUMBER),
            FieldEntry::new("product_ids", &self.product_ids)
                .annotate(DEFAULT_TAG, COMMA_SEPARATED_NUMBERS),
            FieldEntry::new("customer", &self.customer).annotate(DEFAULT_TAG, ALPHABET),
            FieldEntry::new("sort", &self.sort).annotate(DEFAULT_TAG, SORT_FORMAT),
        ]
    }
}

fn order() -> Order {
    Order {
        quantity: "3".to_string(),
        product_ids: "10,20,30".to_string(),
        customer: "Acme".to_string(),
        sort: "price DESC".to_string(),
    }
}

#[test]
fn test_number_predicate() {
    assert!(is_number("42"));
    assert!(is_number("-3.5"));
    assert!(is_number(".5"));
    assert!(!is_number(""));
    assert!(!is_number("12.3.4"));
    assert!(!is_number("abc"));
}

#[test]
fn test_comma_separated_numbers_predicate() {
    assert!(is_comma_separated_numbers("1,2,3"));
    assert!(!is_comma_separated_numbers("1,,3"));
}

#[test]
fn test_alphabet_predicate() {
    assert!(is_alphabet("Hello"));
    assert!(!is_alphabet("Hello1"));
}

#[test]
fn test_sort_format_predicate() {
    assert!(is_sort_format("name"));
    assert!(is_sort_format("name asc"));
    assert!(is_sort_format("name ASC"));
    assert!(!is_sort_format("name up"));
    assert!(!is_sort_format("a b c"));
}

#[test]
fn test_valid_record() {
    assert!(Validator::default().validate(&order()).is_valid());
}

#[test]
fn test_no_annotated_fields() {
    struct Plain {
        note: String,
    }

    impl Describe for Plain {
        fn fields(&self) -> Vec<FieldEntry<'_>> {
            vec![FieldEntry::new("note", &self.note)]
        }
    }

    let plain = Plain {
        note: "anything at all".to_string(),
    };
    assert!(Validator::default().validate(&plain).is_valid());
}

#[test]
fn test_first_failing_field_reported() {
    let bad = Order {
        product_ids: "1,,3".to_string(),
        customer: "Acme 2".to_string(),
        sort: "price up".to_string(),
        ..order()
    };

    let (ok, field) = Validator::default().validate(&bad).into_parts();
    assert!(!ok);
    assert_eq!(field.name, "product_ids");
    assert_eq!(field.value, "1,,3");
    assert_eq!(field.rule, COMMA_SEPARATED_NUMBERS);
    assert!(!field.passed);
}

#[test]
fn test_replacement_rule_is_used() {
    let mut rules = RuleSet::builtin();
    rules.register(NUMBER, |s: &str| s.parse::<u32>().is_ok_and(|n| n <= 10));
    let validator = Validator::new(rules, ValidatorConfig::default());

    assert!(validator.validate(&order()).is_valid());

    let too_many = Order {
        quantity: "11".to_string(),
        ..order()
    };
    let outcome = validator.validate(&too_many);
    assert_eq!(outcome.failing_field().map(|f| f.name.as_str()), Some("quantity"));
}

#[test]
fn test_empty_value_never_checked() {
    let partial = Order {
        quantity: String::new(),
        product_ids: String::new(),
        ..order()
    };
    assert!(Validator::default().validate(&partial).is_valid());
}

#[test]
fn test_strict_policy_from_config() {
    struct Tagged {
        code: String,
    }

    impl Describe for Tagged {
        fn fields(&self) -> Vec<FieldEntry<'_>> {
            vec![FieldEntry::new("code", &self.code).annotate(DEFAULT_TAG, "iso_code")]
        }
    }

    let tagged = Tagged {
        code: "GB".to_string(),
    };

    let lenient = Validator::default();
    assert!(lenient.validate(&tagged).is_valid());

    let config = ValidatorConfig::from_toml_str(r#"unknown_rules = "strict""#).unwrap();
    let strict = Validator::with_config(config);
    let outcome = strict.validate(&tagged);
    assert_eq!(outcome.reason(), Some(FailureReason::UnknownRule));
}

#[test]
fn test_validation_error_from_outcome() {
    let bad = Order {
        quantity: "three".to_string(),
        ..order()
    };

    let error = Validator::default().validate(&bad).into_result().unwrap_err();
    assert_eq!(error.field, "quantity");
    assert_eq!(error.constraint, NUMBER);
    assert_eq!(error.value.as_deref(), Some("three"));
}

#[test]
fn test_descriptor_serializes() {
    let descriptor = FieldDescriptor::new("page", "x", NUMBER);
    let json = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"name": "page", "value": "x", "rule": "number", "passed": false})
    );
}

#[test]
fn test_validator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Validator>();
    assert_send_sync::<RuleSet>();
}
