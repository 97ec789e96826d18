//! Accessor and `Debug` generation for structs with named fields.
//!
//! Each accessor reads the field carrying the matching role. The generated
//! `Debug` lists every field, except that a message's `real_content` is
//! written as `"[REDACTED]"` outside of test builds.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Fields, Result, Type};

use crate::{
    generics::collect_generics_from_type,
    roles::{parse_field_role, Role, Target},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) trait_body: TokenStream,
    /// Type of the `request` field, if the target has one.
    pub(crate) request_ty: Option<Type>,
    pub(crate) debug_redacted_body: TokenStream,
    pub(crate) debug_redacted_generics: Vec<Ident>,
    pub(crate) debug_unredacted_body: TokenStream,
    pub(crate) debug_unredacted_generics: Vec<Ident>,
}

struct RoleField {
    role: Role,
    ident: Ident,
    ty: Type,
    span: Span,
}

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    generics: &syn::Generics,
    target: Target,
) -> Result<StructDeriveOutput> {
    let fields = match data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                format!(
                    "`{}` can only be derived for structs with named fields",
                    target.trait_name()
                ),
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new(
                name.span(),
                format!(
                    "`{}` cannot be derived for unit structs; it needs fields marked with #[{}(...)]",
                    target.trait_name(),
                    target.attr()
                ),
            ));
        }
    };

    let mut assigned: Vec<RoleField> = Vec::new();
    let mut bindings = Vec::new();
    let mut debug_redacted_fields = Vec::new();
    let mut debug_unredacted_fields = Vec::new();
    let mut debug_redacted_generics = Vec::new();
    let mut debug_unredacted_generics = Vec::new();

    for field in fields.named {
        let span = field.span();
        let role = parse_field_role(&field.attrs, target)?;
        let Some(ident) = field.ident else {
            return Err(syn::Error::new(span, "named field should have an identifier"));
        };

        if let Some(role) = role {
            if let Some(previous) = assigned.iter().find(|entry| entry.role == role) {
                return Err(syn::Error::new(
                    span,
                    format!(
                        "duplicate #[{}({})] role; already assigned to field `{}`",
                        target.attr(),
                        role.name(),
                        previous.ident
                    ),
                ));
            }
            assigned.push(RoleField {
                role,
                ident: ident.clone(),
                ty: field.ty.clone(),
                span,
            });
        }

        collect_generics_from_type(&field.ty, generics, &mut debug_unredacted_generics);
        debug_unredacted_fields.push(quote_spanned! { span =>
            debug.field(stringify!(#ident), #ident);
        });

        if role == Some(Role::RealContent) {
            debug_redacted_fields.push(quote_spanned! { span =>
                debug.field(stringify!(#ident), &"[REDACTED]");
            });
        } else {
            collect_generics_from_type(&field.ty, generics, &mut debug_redacted_generics);
            debug_redacted_fields.push(quote_spanned! { span =>
                debug.field(stringify!(#ident), #ident);
            });
        }

        bindings.push(ident);
    }

    let mut accessors = Vec::new();
    let mut request_ty = None;
    for &role in target.roles() {
        let RoleField { ident, ty, span, .. } = find_role(&assigned, role, name, target)?;
        let accessor = match role {
            Role::Id => quote_spanned! { *span =>
                fn id(&self) -> u64 {
                    ::core::convert::From::from(self.#ident)
                }
            },
            Role::SameAs => quote_spanned! { *span =>
                fn same_as_id(&self) -> ::core::option::Option<u64> {
                    ::core::option::Option::map(self.#ident, ::core::convert::From::from)
                }
            },
            Role::Description => quote_spanned! { *span =>
                fn description(&self) -> &str {
                    ::core::convert::AsRef::<str>::as_ref(&self.#ident)
                }
            },
            Role::Content => quote_spanned! { *span =>
                fn content(&self) -> &str {
                    ::core::convert::AsRef::<str>::as_ref(&self.#ident)
                }
            },
            Role::RealContent => quote_spanned! { *span =>
                fn real_content(&self) -> &str {
                    ::core::convert::AsRef::<str>::as_ref(&self.#ident)
                }
            },
            Role::Request => {
                request_ty = Some(ty.clone());
                quote_spanned! { *span =>
                    type Request = #ty;

                    fn request(&self) -> &Self::Request {
                        &self.#ident
                    }
                }
            }
        };
        accessors.push(accessor);
    }

    let debug_body = |fields: &[TokenStream]| {
        quote! {
            match self {
                Self { #(#bindings),* } => {
                    let mut debug = f.debug_struct(stringify!(#name));
                    #(#fields)*
                    debug.finish()
                }
            }
        }
    };

    Ok(StructDeriveOutput {
        trait_body: quote! { #(#accessors)* },
        request_ty,
        debug_redacted_body: debug_body(&debug_redacted_fields),
        debug_redacted_generics,
        debug_unredacted_body: debug_body(&debug_unredacted_fields),
        debug_unredacted_generics,
    })
}

fn find_role<'a>(
    assigned: &'a [RoleField],
    role: Role,
    name: &Ident,
    target: Target,
) -> Result<&'a RoleField> {
    assigned
        .iter()
        .find(|entry| entry.role == role)
        .ok_or_else(|| {
            syn::Error::new(
                name.span(),
                format!(
                    "`{}` requires a field marked #[{}({})]",
                    target.trait_name(),
                    target.attr(),
                    role.name()
                ),
            )
        })
}
