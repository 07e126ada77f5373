//! `#[derive(Describe)]` tests

use fieldcheck_validation::*;

#[derive(Describe)]
struct SearchParams {
    #[rule(validation = "alphabet", query = "alphabet")]
    term: String,
    #[rule(validation = "number")]
    page: u32,
    #[rule(validation = "sort_format")]
    sort: Option<String>,
    #[rule(validation = "comma_separated_numbers")]
    tags: String,
    cursor: String,
}

fn params() -> SearchParams {
    SearchParams {
        term: "rust".to_string(),
        page: 2,
        sort: Some("title asc".to_string()),
        tags: "1,2".to_string(),
        cursor: "opaque+cursor==".to_string(),
    }
}

#[test]
fn test_derived_fields_in_declaration_order() {
    let p = params();
    let fields = p.fields();
    let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["term", "page", "sort", "tags", "cursor"]);
    assert_eq!(fields[0].rule("query"), Some("alphabet"));
    assert_eq!(fields[1].value(), "2");
    assert_eq!(fields[4].rule("validation"), None);
}

#[test]
fn test_derived_extract_skips_zero_and_unannotated() {
    let p = SearchParams {
        page: 0,
        sort: None,
        ..params()
    };
    let names: Vec<_> = extract(&p, DEFAULT_TAG).into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["term", "tags"]);
}

#[test]
fn test_derived_validation() {
    let validator = Validator::default();
    assert!(validator.validate(&params()).is_valid());

    let bad = SearchParams {
        sort: Some("title sideways".to_string()),
        tags: "1,x".to_string(),
        ..params()
    };
    let field = validator.validate(&bad).into_parts().1;
    assert_eq!(field.name, "sort");
    assert_eq!(field.value, "title sideways");
}

#[test]
fn test_derived_alternate_tag() {
    let bad = SearchParams {
        term: "rust2024".to_string(),
        ..params()
    };
    let outcome = Validator::default().validate_with_tag(&bad, "query");
    assert_eq!(outcome.failing_field().map(|f| f.rule.as_str()), Some("alphabet"));
}

#[derive(Describe)]
struct Pair(#[rule(validation = "number")] String, #[rule(validation = "alphabet")] String);

#[test]
fn test_derived_tuple_struct() {
    let outcome = Validator::default().validate(&Pair("1".to_string(), "x1".to_string()));
    let field = outcome.failing_field().unwrap();
    assert_eq!(field.name, "1");
    assert_eq!(field.rule, "alphabet");
}

#[derive(Describe)]
struct Borrowed<'a> {
    #[rule(validation = "number")]
    amount: &'a str,
}

#[test]
fn test_derived_with_lifetime() {
    let raw = String::from("12.50");
    assert!(Validator::default().validate(&Borrowed { amount: &raw }).is_valid());
    assert!(!Validator::default().validate(&Borrowed { amount: "12,50" }).is_valid());
}

#[derive(Describe)]
struct Empty;

#[test]
fn test_derived_unit_struct() {
    assert!(Empty.fields().is_empty());
    assert!(Validator::default().validate(&Empty).is_valid());
}

#[derive(Describe)]
struct Paged<T> {
    #[rule(validation = "number")]
    page: T,
    #[rule(validation = "alphabet")]
    label: String,
}

#[test]
fn test_derived_generic_struct() {
    let numeric = Paged {
        page: 3u32,
        label: "users".to_string(),
    };
    assert!(Validator::default().validate(&numeric).is_valid());

    let text = Paged {
        page: "three".to_string(),
        label: "users".to_string(),
    };
    let outcome = Validator::default().validate(&text);
    assert_eq!(outcome.failing_field().unwrap().name, "page");

    let optional: Paged<Option<i64>> = Paged {
        page: None,
        label: "users1".to_string(),
    };
    let outcome = Validator::default().validate(&optional);
    assert_eq!(outcome.failing_field().unwrap().name, "label");
}
