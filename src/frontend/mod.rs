mod controller_path;
pub mod factory_registry;
mod registry;

pub use controller_path::ControllerPath;
pub use factory_registry::{ControllerFactory, register_factory};
pub use registry::{Frontend, FrontendError, preload, resolve, set_caching};
