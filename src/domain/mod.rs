pub mod context;
pub mod controller;

pub use context::Context;
pub use controller::Controller;
