#![doc = include_str!("../README.md")]

#[proc_macro_derive(Queryable, attributes(url))]
pub fn queryable_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    urlquery_macros_emit::derive_queryable(input.into()).into()
}
