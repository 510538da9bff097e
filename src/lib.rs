// Lets `#[register_factory]` expand to `::storefront::...` paths inside this crate too
extern crate self as storefront;

pub mod app_config;
pub mod domain;
mod extensions;
pub mod frontend;

pub use controller_macros::register_factory;

#[doc(hidden)]
pub use ctor;
