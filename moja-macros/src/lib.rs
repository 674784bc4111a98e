use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Item, ItemTrait};

use magic_moja::decl::{DeclKind, Declaration};
use magic_moja::generator::{self, ERR_INTERFACE_ONLY};

const ERR_NO_ARGS: &str = "#[magic] does not take any arguments";
const ERR_NO_GENERICS: &str = "#[magic] does not support generic interfaces";

/// Mark a trait declaration for implementation synthesis: expands to the
/// trait itself plus `pub struct <Name>Impl` implementing it with the fixed
/// `pull_out` method. The trait is expected to declare
/// `fn pull_out(&self) -> String;`.
#[proc_macro_attribute]
pub fn magic(args: TokenStream, input: TokenStream) -> TokenStream {
    let args_ts = proc_macro2::TokenStream::from(args);
    if !args_ts.is_empty() {
        return syn::Error::new_spanned(args_ts, ERR_NO_ARGS)
            .to_compile_error()
            .into();
    }
    let item_any = parse_macro_input!(input as Item);
    match item_any {
        Item::Trait(item) => magic_for_trait(item),
        other => syn::Error::new_spanned(other, ERR_INTERFACE_ONLY)
            .to_compile_error()
            .into(),
    }
}

fn magic_for_trait(item: ItemTrait) -> TokenStream {
    if !item.generics.params.is_empty() {
        return syn::Error::new_spanned(&item.generics, ERR_NO_GENERICS)
            .to_compile_error()
            .into();
    }
    // The expansion site's module path is not observable from here, so the
    // declaration carries no package and the generated impl resolves the
    // trait by its simple name in the same module.
    let decl = Declaration {
        kind: DeclKind::Interface,
        simple_name: item.ident.to_string(),
        enclosing_package: String::new(),
        is_marked: true,
    };
    let outcome = generator::process_pass(std::slice::from_ref(&decl));

    let mut compile_errors = Vec::new();
    for diag in &outcome.diagnostics {
        // NOTE diagnostics have no stable compiler channel at this binding.
        if diag.is_error() {
            compile_errors
                .push(syn::Error::new_spanned(&item.ident, &diag.message).to_compile_error());
        }
    }
    let mut generated = Vec::new();
    for unit in &outcome.units {
        match unit.to_tokens() {
            Ok(tokens) => generated.push(tokens),
            Err(e) => compile_errors
                .push(syn::Error::new_spanned(&item.ident, e.to_string()).to_compile_error()),
        }
    }

    let expanded = quote! {
        #item
        #(#compile_errors)*
        #(#generated)*
    };
    expanded.into()
}
