//! Derive macros for `foirequest-markup`.
//!
//! `#[derive(FoiRequest)]` and `#[derive(FoiMessage)]` implement the accessor
//! traits of the main crate by reading fields marked with a role:
//! - `#[foirequest(id | same_as | description)]`
//! - `#[message(id | content | real_content | request)]`
//!
//! Every role must be assigned to exactly one field. The message derive also
//! emits a `Debug` impl that hides the real content outside of test builds.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Ident, Result};

mod container;
mod derive_struct;
mod generics;
mod roles;
use container::{parse_container_options, ContainerOptions};
use derive_struct::{derive_struct, StructDeriveOutput};
use generics::add_debug_bounds;
use roles::Target;

/// Derives `foirequest_markup::FoiRequest` for a struct with named fields.
///
/// # Field Attributes
///
/// - `#[foirequest(id)]`: the request id. Any integer type convertible into `u64`.
/// - `#[foirequest(same_as)]`: the id of the request this one duplicates, as an
///   `Option` of such an integer.
/// - `#[foirequest(description)]`: the request text. Any `AsRef<str>` type.
///
/// Fields without an attribute are ignored. Enums, unions, tuple structs, and
/// unit structs are rejected at compile time.
#[proc_macro_derive(FoiRequest, attributes(foirequest))]
pub fn derive_foirequest(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input, Target::Request) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Derives `foirequest_markup::FoiMessage` for a struct with named fields.
///
/// # Container Attributes
///
/// - `#[message(skip_debug)]` - Opt out of `Debug` impl generation. Use this when you need a
///   custom `Debug` implementation or the type already derives `Debug` elsewhere.
///
/// # Field Attributes
///
/// - `#[message(id)]`: the message id. Any integer type convertible into `u64`.
/// - `#[message(content)]`: the public, redacted text. Any `AsRef<str>` type.
/// - `#[message(real_content)]`: the unredacted text. Any `AsRef<str>` type.
/// - `#[message(request)]`: the request the message belongs to. Its type becomes
///   `FoiMessage::Request` and must implement `FoiRequest`.
///
/// # Additional Generated Impls
///
/// - `Debug`: when *not* building with `cfg(any(test, feature = "testing"))`, the
///   `real_content` field is formatted as the string `"[REDACTED]"` rather than its value.
///   Every other field, including the request, must implement `Debug`.
#[proc_macro_derive(FoiMessage, attributes(message))]
pub fn derive_foimessage(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input, Target::Message) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the `foirequest-markup` crate root.
///
/// Handles crate renaming (e.g., `markup = { package = "foirequest-markup", ... }`).
/// Inside the crate itself the root is reached through its
/// `extern crate self as foirequest_markup` alias, which also covers doctests.
fn crate_root() -> TokenStream {
    match crate_name("foirequest-markup") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::foirequest_markup },
    }
}

fn expand(input: DeriveInput, target: Target) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { skip_debug } = parse_container_options(&attrs, target)?;

    let crate_root = crate_root();
    let trait_ident = Ident::new(target.trait_name(), ident.span());

    let StructDeriveOutput {
        trait_body,
        request_ty,
        debug_redacted_body,
        debug_redacted_generics,
        debug_unredacted_body,
        debug_unredacted_generics,
    } = match data {
        Data::Struct(data) => derive_struct(&ident, data, &generics, target)?,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                format!("`{}` cannot be derived for enums", target.trait_name()),
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                format!("`{}` cannot be derived for unions", target.trait_name()),
            ));
        }
    };

    let mut trait_generics = generics.clone();
    if let Some(request_ty) = &request_ty {
        trait_generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#request_ty: #crate_root::FoiRequest));
    }
    let (impl_generics, ty_generics, where_clause) = trait_generics.split_for_impl();

    let debug_redacted_generics = add_debug_bounds(generics.clone(), &debug_redacted_generics);
    let (debug_redacted_impl_generics, debug_redacted_ty_generics, debug_redacted_where_clause) =
        debug_redacted_generics.split_for_impl();
    let debug_unredacted_generics = add_debug_bounds(generics, &debug_unredacted_generics);
    let (
        debug_unredacted_impl_generics,
        debug_unredacted_ty_generics,
        debug_unredacted_where_clause,
    ) = debug_unredacted_generics.split_for_impl();

    let debug_impl = if skip_debug || target != Target::Message {
        quote! {}
    } else {
        quote! {
            #[cfg(any(test, feature = "testing"))]
            impl #debug_unredacted_impl_generics ::core::fmt::Debug for #ident #debug_unredacted_ty_generics #debug_unredacted_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_unredacted_body
                }
            }

            #[cfg(not(any(test, feature = "testing")))]
            #[allow(unused_variables)]
            impl #debug_redacted_impl_generics ::core::fmt::Debug for #ident #debug_redacted_ty_generics #debug_redacted_where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #debug_redacted_body
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics #crate_root::#trait_ident for #ident #ty_generics #where_clause {
            #trait_body
        }

        #debug_impl
    })
}
