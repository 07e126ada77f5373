//! Parsing and compile-time checks for `#[rule(...)]` field attributes
//!
//! Accepted shapes:
//! - `#[rule(validation = "number")]`
//! - `#[rule(validation = "number", query = "alphabet")]`
//! - several `#[rule(...)]` attributes on one field
//!
//! Rejected at compile time:
//! - non string-literal values
//! - blank rule names
//! - the same tag declared twice on one field

use syn::{Attribute, Error, LitStr};

/// One `tag = "rule"` pair on a field
pub struct RuleAnnotation {
    pub tag: String,
    pub rule: String,
}

/// Collect every `#[rule(...)]` annotation attached to a field
pub fn parse_rule_attrs(attrs: &[Attribute]) -> Result<Vec<RuleAnnotation>, Error> {
    let mut annotations: Vec<RuleAnnotation> = Vec::new();

    for attr in attrs.iter().filter(|a| a.path().is_ident("rule")) {
        attr.parse_nested_meta(|meta| {
            let tag = meta
                .path
                .get_ident()
                .map(|ident| ident.to_string())
                .ok_or_else(|| meta.error("expected a tag name, e.g. `validation = \"number\"`"))?;

            let value: LitStr = meta.value()?.parse()?;
            let rule = value.value();

            validate_rule_name(&tag, &rule, &value)?;

            if annotations.iter().any(|a| a.tag == tag) {
                return Err(meta.error(format!(
                    "tag `{}` is declared more than once on this field\n\
                     hint: a field carries a single rule per tag",
                    tag
                )));
            }

            annotations.push(RuleAnnotation { tag, rule });
            Ok(())
        })?;
    }

    Ok(annotations)
}

/// Validate a rule name at compile time
fn validate_rule_name(tag: &str, rule: &str, lit: &LitStr) -> Result<(), Error> {
    if rule.trim().is_empty() {
        return Err(Error::new(
            lit.span(),
            format!(
                "rule for tag `{}` is blank\n\
                 hint: remove the annotation or name a rule such as \"number\"",
                tag
            ),
        ));
    }

    if rule.trim() != rule {
        return Err(Error::new(
            lit.span(),
            format!(
                "rule name has surrounding whitespace: \"{}\"\n\
                 hint: change to \"{}\"",
                rule,
                rule.trim()
            ),
        ));
    }

    Ok(())
}
