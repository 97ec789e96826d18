//! Parsing of `#[foirequest(...)]` and `#[message(...)]` field attributes.
//!
//! Every field may carry at most one role. Fields without a role are ignored
//! by the accessor impls.

use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Meta, Result};

/// Which accessor trait is being derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Target {
    Request,
    Message,
}

impl Target {
    /// The attribute carrying roles and container options.
    pub(crate) fn attr(self) -> &'static str {
        match self {
            Target::Request => "foirequest",
            Target::Message => "message",
        }
    }

    pub(crate) fn trait_name(self) -> &'static str {
        match self {
            Target::Request => "FoiRequest",
            Target::Message => "FoiMessage",
        }
    }

    /// Roles that must each be assigned to exactly one field.
    pub(crate) fn roles(self) -> &'static [Role] {
        match self {
            Target::Request => &[Role::Id, Role::SameAs, Role::Description],
            Target::Message => &[Role::Id, Role::Content, Role::RealContent, Role::Request],
        }
    }
}

/// What a field provides to the accessor trait.
///
/// | Attribute | Accessor | Field type |
/// |-----------|----------|------------|
/// | `id` | `id()` | integer convertible into `u64` |
/// | `same_as` | `same_as_id()` | `Option` of such an integer |
/// | `description` | `description()` | `AsRef<str>` |
/// | `content` | `content()` | `AsRef<str>` |
/// | `real_content` | `real_content()` | `AsRef<str>` |
/// | `request` | `request()` | implements `FoiRequest` |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Id,
    SameAs,
    Description,
    Content,
    RealContent,
    Request,
}

impl Role {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Role::Id => "id",
            Role::SameAs => "same_as",
            Role::Description => "description",
            Role::Content => "content",
            Role::RealContent => "real_content",
            Role::Request => "request",
        }
    }

    fn parse(target: Target, name: &str) -> Option<Self> {
        target
            .roles()
            .iter()
            .copied()
            .find(|role| role.name() == name)
    }
}

fn expected_roles(target: Target) -> String {
    target
        .roles()
        .iter()
        .map(|role| format!("`{}`", role.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn set_role(target: &mut Option<Role>, next: Role, span: Span, attr: &str) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            format!("multiple #[{attr}] roles specified on the same field"),
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_role(attrs: &[Attribute], target: Target) -> Result<Option<Role>> {
    let attr_name = target.attr();
    let mut role: Option<Role> = None;
    for attr in attrs {
        if !attr.path().is_ident(attr_name) {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    let name = meta
                        .path
                        .get_ident()
                        .map_or_else(|| "?".to_string(), ToString::to_string);
                    match Role::parse(target, &name) {
                        Some(parsed) => set_role(&mut role, parsed, attr.span(), attr_name),
                        None => Err(meta.error(format!(
                            "unknown {attr_name} role `{name}`; expected one of {}",
                            expected_roles(target)
                        ))),
                    }
                })?;
            }
            Meta::Path(_) | Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    format!("expected a role, e.g. #[{attr_name}(id)]"),
                ));
            }
        }
    }

    Ok(role)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::DeriveInput;

    use super::*;

    fn parse_attrs(tokens: proc_macro2::TokenStream) -> Vec<Attribute> {
        let input: DeriveInput = syn::parse2(quote! {
            #tokens
            struct Dummy;
        })
        .expect("should parse as DeriveInput");
        input.attrs
    }

    #[test]
    fn no_attribute_has_no_role() {
        let attrs = parse_attrs(quote! {});
        assert_eq!(parse_field_role(&attrs, Target::Message).unwrap(), None);
    }

    #[test]
    fn message_roles_are_parsed() {
        let attrs = parse_attrs(quote! { #[message(real_content)] });
        assert_eq!(
            parse_field_role(&attrs, Target::Message).unwrap(),
            Some(Role::RealContent)
        );
    }

    #[test]
    fn other_targets_attributes_are_ignored() {
        let attrs = parse_attrs(quote! { #[foirequest(id)] });
        assert_eq!(parse_field_role(&attrs, Target::Message).unwrap(), None);
    }

    #[test]
    fn role_of_other_target_is_unknown() {
        let attrs = parse_attrs(quote! { #[foirequest(content)] });
        let err = parse_field_role(&attrs, Target::Request).unwrap_err();
        assert!(err.to_string().contains("unknown foirequest role `content`"));
    }

    #[test]
    fn two_roles_on_one_field_error() {
        let attrs = parse_attrs(quote! { #[message(content, real_content)] });
        let err = parse_field_role(&attrs, Target::Message).unwrap_err();
        assert!(err.to_string().contains("multiple #[message] roles"));
    }

    #[test]
    fn bare_attribute_errors() {
        let attrs = parse_attrs(quote! { #[message] });
        assert!(parse_field_role(&attrs, Target::Message).is_err());
    }
}
