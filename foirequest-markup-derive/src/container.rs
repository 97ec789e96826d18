//! Container-level attribute parsing.
//!
//! This module handles attributes on the struct itself, not on its fields.
//! Only `#[derive(FoiMessage)]` has container options.

use syn::{Attribute, Meta, Result};

use crate::roles::Target;

/// Options parsed from container-level attributes.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// If true, skip generating the `Debug` impl.
    pub(crate) skip_debug: bool,
}

/// Parses container-level `#[message(...)]` or `#[foirequest(...)]` attributes.
pub(crate) fn parse_container_options(
    attrs: &[Attribute],
    target: Target,
) -> Result<ContainerOptions> {
    let attr_name = target.attr();
    let mut options = ContainerOptions::default();

    for attr in attrs {
        if !attr.path().is_ident(attr_name) {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if target == Target::Message && meta.path.is_ident("skip_debug") {
                        options.skip_debug = true;
                        Ok(())
                    } else {
                        let name = meta
                            .path
                            .get_ident()
                            .map_or_else(|| "?".to_string(), ToString::to_string);
                        match target {
                            Target::Message => Err(meta.error(format!(
                                "unknown container option `{name}`; expected `skip_debug`"
                            ))),
                            Target::Request => Err(meta.error(format!(
                                "unknown container option `{name}`; #[foirequest] takes no container options"
                            ))),
                        }
                    }
                })?;
            }
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    format!("bare #[{attr_name}] has no meaning on the container"),
                ));
            }
            Meta::NameValue(nv) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    format!("name-value syntax is not supported for container-level #[{attr_name}]"),
                ));
            }
        }
    }

    Ok(options)
}
