use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, LitStr, parse_quote};

/// Maps a level name to the matching `tracing::Level` path.
fn level_tokens(level: &LitStr) -> syn::Result<proc_macro2::TokenStream> {
    let tokens = match level.value().to_ascii_lowercase().as_str() {
        "trace" => quote! { tracing::Level::TRACE },
        "debug" => quote! { tracing::Level::DEBUG },
        "info" => quote! { tracing::Level::INFO },
        "warn" => quote! { tracing::Level::WARN },
        "error" => quote! { tracing::Level::ERROR },
        other => {
            return Err(syn::Error::new(
                level.span(),
                format!("unknown tracing level `{}`", other),
            ));
        }
    };
    Ok(tokens)
}

fn expand_demo_main(
    attr: proc_macro2::TokenStream,
    input: proc_macro2::TokenStream,
) -> syn::Result<proc_macro2::TokenStream> {
    let mut input_fn: ItemFn = syn::parse2(input)?;

    let level = if attr.is_empty() {
        quote! { tracing::Level::INFO }
    } else {
        level_tokens(&syn::parse2::<LitStr>(attr)?)?
    };

    let sig = &mut input_fn.sig;
    if sig.ident != "main" {
        return Err(syn::Error::new_spanned(
            &sig.ident,
            "This macro can only be applied to the `main` function",
        ));
    }

    sig.output = parse_quote! { -> std::io::Result<()> };

    // Logs go to stderr so stdout carries only conversion results.
    let original_block = input_fn.block;
    input_fn.block = parse_quote! {{
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(#level)
            .init();
        #original_block
    }};
    Ok(quote! {
        #input_fn
    })
}

/// Turns `fn main` into an entry point returning `std::io::Result<()>` with a
/// `tracing_subscriber` fmt subscriber on stderr installed before the body runs.
///
/// An optional level literal caps the subscriber, e.g. `#[demo_main("debug")]`.
#[proc_macro_attribute]
pub fn demo_main(attr: TokenStream, input: TokenStream) -> TokenStream {
    match expand_demo_main(attr.into(), input.into()) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
