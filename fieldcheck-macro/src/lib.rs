// Procedural macros for fieldcheck
// `#[derive(Describe)]` turns `#[rule(...)]` field attributes into a `Describe` impl

use proc_macro::TokenStream;

mod describe;
mod rule_attr;

use describe::SupportPath;

/// Implements `fieldcheck_validation::Describe` for a struct.
///
/// Each field may carry one or more `#[rule(tag = "rule_name")]` attributes.
/// Fields are reported in declaration order. Generic field types must
/// implement `FieldValue`.
///
/// ```ignore
/// #[derive(Describe)]
/// struct ListQuery {
///     #[rule(validation = "number")]
///     page: String,
///     #[rule(validation = "sort_format", query = "alphabet")]
///     sort: String,
///     cursor: String,
/// }
/// ```
#[proc_macro_derive(Describe, attributes(rule))]
pub fn describe_derive(input: TokenStream) -> TokenStream {
    describe::describe_derive_impl(input, SupportPath::Validation)
}

/// `Describe` as re-exported by the `fieldcheck` facade crate
#[doc(hidden)]
#[proc_macro_derive(FacadeDescribe, attributes(rule))]
pub fn facade_describe_derive(input: TokenStream) -> TokenStream {
    describe::describe_derive_impl(input, SupportPath::Facade)
}
