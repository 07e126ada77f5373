use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Index, parse_macro_input, parse_quote};

use crate::rule_attr::parse_rule_attrs;

/// Path of the support module re-exported by the crate the user depends on
pub enum SupportPath {
    Validation,
    Facade,
}

impl SupportPath {
    fn tokens(&self) -> TokenStream2 {
        match self {
            SupportPath::Validation => quote! { ::fieldcheck_validation::__private },
            SupportPath::Facade => quote! { ::fieldcheck::__private },
        }
    }
}

pub fn describe_derive_impl(input: TokenStream, support: SupportPath) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input, &support.tokens()) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput, support: &TokenStream2) -> Result<TokenStream2, Error> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                name,
                "Describe can only be derived for structs\n\
                 hint: validate the payload struct carried by this enum instead",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                name,
                "Describe can only be derived for structs",
            ));
        }
    };

    // Every field is rendered, so generic field types must implement FieldValue.
    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        let where_clause = generics.make_where_clause();
        for field in fields.iter() {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote! { #ty: #support::FieldValue });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut entries = Vec::new();

    match fields {
        Fields::Named(named) => {
            for field in &named.named {
                let ident = field
                    .ident
                    .as_ref()
                    .ok_or_else(|| Error::new_spanned(field, "named field without identifier"))?;
                let field_name = ident.to_string();
                let access = quote! { &self.#ident };
                entries.push(field_entry(support, &field_name, access, &field.attrs)?);
            }
        }
        Fields::Unnamed(unnamed) => {
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                let index = Index::from(i);
                let field_name = i.to_string();
                let access = quote! { &self.#index };
                entries.push(field_entry(support, &field_name, access, &field.attrs)?);
            }
        }
        Fields::Unit => {}
    }

    Ok(quote! {
        impl #impl_generics #support::Describe for #name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<#support::FieldEntry<'_>> {
                ::std::vec![
                    #(#entries),*
                ]
            }
        }
    })
}

fn field_entry(
    support: &TokenStream2,
    field_name: &str,
    access: TokenStream2,
    attrs: &[syn::Attribute],
) -> Result<TokenStream2, Error> {
    let annotations = parse_rule_attrs(attrs)?;

    let tags = annotations.iter().map(|a| a.tag.as_str());
    let rules = annotations.iter().map(|a| a.rule.as_str());

    Ok(quote! {
        #support::FieldEntry::new(#field_name, #access)
            #(.annotate(#tags, #rules))*
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_with(input: DeriveInput, support: SupportPath) -> String {
        expand(&input, &support.tokens()).unwrap().to_string()
    }

    #[test]
    fn test_facade_path() {
        let input: DeriveInput = parse_quote! {
            struct ListQuery {
                #[rule(validation = "number")]
                page: String,
            }
        };

        let expanded = expand_with(input, SupportPath::Facade);
        assert!(expanded.contains(":: fieldcheck :: __private :: Describe"));
        assert!(expanded.contains(":: fieldcheck :: __private :: FieldEntry"));
        assert!(!expanded.contains("fieldcheck_validation"));
    }

    #[test]
    fn test_validation_path() {
        let input: DeriveInput = parse_quote! {
            struct ListQuery {
                #[rule(validation = "number")]
                page: String,
            }
        };

        let expanded = expand_with(input, SupportPath::Validation);
        assert!(expanded.contains(":: fieldcheck_validation :: __private :: Describe"));
    }

    #[test]
    fn test_generic_fields_bounded() {
        let input: DeriveInput = parse_quote! {
            struct Paged<T> {
                #[rule(validation = "number")]
                page: T,
                label: String,
            }
        };

        let expanded = expand_with(input, SupportPath::Validation);
        assert!(expanded.contains("where T : :: fieldcheck_validation :: __private :: FieldValue"));
        assert!(expanded.contains("String : :: fieldcheck_validation :: __private :: FieldValue"));
    }

    #[test]
    fn test_lifetime_only_generics_unbounded() {
        let input: DeriveInput = parse_quote! {
            struct Borrowed<'a> {
                #[rule(validation = "alphabet")]
                name: &'a str,
            }
        };

        let expanded = expand_with(input, SupportPath::Validation);
        assert!(!expanded.contains("where"));
    }

    #[test]
    fn test_enum_rejected() {
        let input: DeriveInput = parse_quote! {
            enum Query {
                Page(String),
            }
        };

        let err = expand(&input, &SupportPath::Validation.tokens()).unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }
}
