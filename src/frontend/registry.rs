use crate::domain::{Context, Controller};
use crate::frontend::controller_path::ControllerPath;
use crate::frontend::factory_registry::{factory, known_factories};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, instrument, trace, warn};

static FRONTEND: LazyLock<Frontend> = LazyLock::new(Frontend::new);

/// Creates the frontend controller for `path` using the process wide registry.
pub fn resolve(context: &Context, path: &str) -> Result<Box<dyn Controller>, FrontendError> {
    FRONTEND.resolve(context, path)
}

/// Enables or disables caching of the process wide registry, returns the previous setting.
pub fn set_caching(enabled: bool) -> bool {
    FRONTEND.set_caching(enabled)
}

/// Resolves every path once using the process wide registry, returns the failures.
pub fn preload(context: &Context, paths: &[String]) -> Vec<FrontendError> {
    FRONTEND.preload(context, paths)
}

#[derive(Debug)]
struct Cache {
    enabled: bool,
    // Bumped on every toggle so instances built before a toggle are not cached after it
    generation: u64,
    objects: HashMap<String, Box<dyn Controller>>,
}

/// Resolves controller paths to controllers, optionally caching one instance per path.
///
/// Callers always receive their own copy, the cached instance is never handed out.
#[derive(Debug)]
pub struct Frontend {
    cache: Mutex<Cache>,
}

impl Frontend {
    pub fn new() -> Self {
        Frontend {
            cache: Mutex::new(Cache {
                enabled: true,
                generation: 0,
                objects: HashMap::new(),
            }),
        }
    }

    pub fn caching(&self) -> bool {
        self.lock().enabled
    }

    pub fn cached(&self) -> usize {
        self.lock().objects.len()
    }

    #[instrument(skip(self))]
    pub fn set_caching(&self, enabled: bool) -> bool {
        let mut cache = self.lock();
        let previous = std::mem::replace(&mut cache.enabled, enabled);
        let cleared = cache.objects.len();
        cache.objects.clear();
        cache.generation = cache.generation.wrapping_add(1);

        info!(previous, cleared, "🗄️ Controller caching {}", if enabled { "enabled" } else { "disabled" });
        previous
    }

    #[instrument(skip(self, context))]
    pub fn resolve(&self, context: &Context, path: &str) -> Result<Box<dyn Controller>, FrontendError> {
        if path.is_empty() {
            return Err(FrontendError::Empty);
        }

        let generation = {
            let cache = self.lock();
            if cache.enabled {
                if let Some(controller) = cache.objects.get(path) {
                    trace!("🗄️ Using cached controller");
                    return Ok(controller.box_clone());
                }
            }
            cache.generation
        };

        let path = ControllerPath::parse(path)?;
        let factory_name = path.factory_name();

        let Some(create) = factory(&factory_name) else {
            warn!("⚠️ Factory '{}' not available, known factories: {}", factory_name, known_factories().join(", "));
            return Err(FrontendError::FactoryNotFound(factory_name));
        };

        debug!("🏭 Creating controller using '{}'...", factory_name);
        let Some(controller) = create(context) else {
            warn!("⚠️ Factory '{}' did not create a controller", factory_name);
            return Err(FrontendError::FactoryInvalid(factory_name));
        };
        debug!("🏭 Creating controller using '{}'... OK", factory_name);

        // The lock is released while the factory runs, so it is taken again to store the result
        let mut cache = self.lock();
        if cache.enabled && cache.generation == generation {
            let cached = cache.objects.entry(path.as_str().to_owned()).or_insert(controller);
            return Ok(cached.box_clone());
        }

        Ok(controller)
    }

    /// Resolves every path once so the cache is warm before the first request.
    #[instrument(skip_all)]
    pub fn preload(&self, context: &Context, paths: &[String]) -> Vec<FrontendError> {
        info!("🔥 Preloading {} controller(s)...", paths.len());
        let errors: Vec<FrontendError> = paths.iter().filter_map(|path| self.resolve(context, path).err()).collect();

        for error in &errors {
            warn!("⚠️ Failed to preload controller: {}", error);
        }

        info!("🔥 Preloading controllers... OK, {} loaded, {} failed", paths.len() - errors.len(), errors.len());
        errors
    }

    fn lock(&self) -> MutexGuard<'_, Cache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Frontend {
    fn default() -> Self {
        Frontend::new()
    }
}

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("controller path is empty")]
    Empty,
    #[error("invalid characters in controller name \"{0}\"")]
    InvalidCharacters(String),
    #[error("factory \"{0}\" not available")]
    FactoryNotFound(String),
    #[error("invalid factory \"{0}\"")]
    FactoryInvalid(String),
}
