use quote::quote;
use urlquery_macros_parse::*;

use crate::process_struct;

/// Expands `#[derive(Queryable)]`
pub fn derive_queryable(input: TokenStream) -> TokenStream {
    let mut i = input.to_token_iter();

    match i.parse::<Cons<AdtDecl, EndOfStream>>() {
        Ok(it) => match it.first {
            AdtDecl::Struct(parsed) => process_struct::process_struct(parsed),
            AdtDecl::Enum(parsed) => {
                let message = format!(
                    "#[derive(Queryable)] only supports structs, but `{}` is an enum",
                    parsed.name
                );
                quote! { ::core::compile_error!(#message); }
            }
        },
        Err(err) => {
            panic!(
                "Could not parse type declaration: {}\nError: {}",
                input, err
            );
        }
    }
}
