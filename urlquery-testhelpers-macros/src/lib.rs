use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    /// `#[...]` on the test function, passed through untouched
    struct OuterAttr {
        _pound: Pound,
        _body: BracketGroup,
    }

    /// `fn name() { ... }`, the only form a test function takes here
    struct TestFn {
        attrs: Vec<OuterAttr>,
        _fn: KFn,
        name: Ident,
        params: ParenthesisGroup,
        body: BraceGroup,
    }
}

fn compile_error(message: &str) -> proc_macro::TokenStream {
    quote::quote! { ::core::compile_error!(#message); }.into()
}

/// Marks a test that runs `urlquery_testhelpers::setup()` first and may use `?` in its body.
///
/// The function must look like `fn name() { ... }`: no parameters, no return type. Other
/// attributes (`#[should_panic]`, `#[ignore]`, doc comments) are kept.
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let Ok(parsed) = tokens.parse::<Cons<TestFn, EndOfStream>>() else {
        return compile_error(
            "#[urlquery_testhelpers::test] expects `fn name() { ... }` without a return type",
        );
    };
    let TestFn {
        attrs,
        name,
        params,
        body,
        ..
    } = parsed.first;

    if !params.0.stream().is_empty() {
        return compile_error("test functions take no parameters");
    }

    let attrs = attrs.iter().map(|attr| attr.to_token_stream());
    let body = body.0.stream();

    quote::quote! {
        #(#attrs)*
        #[::core::prelude::rust_2024::test]
        fn #name() -> ::urlquery_testhelpers::eyre::Result<()> {
            ::urlquery_testhelpers::setup();

            {
                #body
            }

            ::core::result::Result::Ok(())
        }
    }
    .into()
}
