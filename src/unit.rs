use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use serde::Serialize;

use crate::decl::Declaration;
use crate::error::{MojaError, Result};

/// Name of the one method every generated implementation provides.
pub const METHOD_NAME: &str = "pull_out";

/// The constant the generated method returns.
pub const CONJURED: &str = "rabbit";

/// A synthesized source unit: a unit struct implementing the triggering
/// interface with the fixed method. Ownership moves to the output sink as
/// soon as the unit is written; the generator keeps no reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    pub target_package: String,
    /// Derived from the interface name (`FooImpl` for `Foo`), so two marked
    /// interfaces in one package never collide.
    pub type_name: String,
    /// Dot-qualified name of the interface the unit implements.
    pub implemented_interface: String,
}

impl GeneratedUnit {
    /// Unit for a marked interface declaration. Shape validation happens in
    /// the generator before this is called.
    pub fn for_interface(decl: &Declaration) -> Self {
        Self {
            target_package: decl.enclosing_package.clone(),
            type_name: format!("{}Impl", decl.simple_name),
            implemented_interface: decl.qualified_name(),
        }
    }

    /// Token form of the unit, for in-compiler hosts that splice it straight
    /// into the expansion. Fails only if the host supplied names that are not
    /// valid identifiers.
    pub fn to_tokens(&self) -> Result<TokenStream> {
        let ty: syn::Ident = syn::parse_str(&self.type_name)
            .map_err(|e| MojaError::Render(format!("type name {:?}: {e}", self.type_name)))?;
        let trait_path: syn::Path = syn::parse_str(&self.implemented_interface.replace('.', "::"))
            .map_err(|e| {
                MojaError::Render(format!(
                    "interface path {:?}: {e}",
                    self.implemented_interface
                ))
            })?;
        let method = format_ident!("{}", METHOD_NAME);
        let conjured = CONJURED;
        Ok(quote! {
            pub struct #ty;

            impl #trait_path for #ty {
                fn #method(&self) -> String {
                    #conjured.to_string()
                }
            }
        })
    }

    /// Pretty-printed source form, for file-writing hosts.
    pub fn render(&self) -> Result<String> {
        let file: syn::File =
            syn::parse2(self.to_tokens()?).map_err(|e| MojaError::Render(e.to_string()))?;
        Ok(prettyplease::unparse(&file))
    }
}
