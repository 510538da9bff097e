use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput};

const FACTORY_SUFFIX: &str = "Factory";

/// Registers the annotated type as the controller factory named after it, e.g. `CatalogFactory`
/// serves the `catalog` controller path. Registration runs before `main` through `ctor`.
#[proc_macro_attribute]
pub fn register_factory(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;
    let factory_name = name.to_string();

    if factory_name.len() <= FACTORY_SUFFIX.len() || !factory_name.ends_with(FACTORY_SUFFIX) {
        return syn::Error::new_spanned(name, format!("factory type '{}' must be named '<Domain>{}'", factory_name, FACTORY_SUFFIX))
            .to_compile_error()
            .into();
    }

    let fn_name = format_ident!("register_{}", factory_name.to_case(Case::Snake));

    let expanded: proc_macro2::TokenStream = quote! {
        #input

        #[::storefront::ctor::ctor(crate_path = ::storefront::ctor)]
        fn #fn_name() {
            ::storefront::frontend::factory_registry::register_factory::<#name>(#factory_name);
        }
    };

    expanded.into()
}
