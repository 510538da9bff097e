use storefront::app_config::AppConfig;
use storefront::domain::Context;
use storefront::frontend;
use storefront::frontend::factory_registry::known_factories;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    frontend::set_caching(config.core().caching());

    let context = Context::new(config.context().locale()).with_config(config.context().values().clone());
    info!(locale = context.locale(), "✅  Created context");

    let factories = known_factories();
    if factories.is_empty() {
        warn!("⚠️ No controller factories registered");
    } else {
        info!("🏭 Registered factories: {}", factories.join(", "));
    }

    let errors = frontend::preload(&context, config.controllers().preload());
    if errors.is_empty() {
        info!("🔥 {} is ready", env!("CARGO_PKG_NAME"));
    } else {
        warn!("⚠️ {} is ready, {} controller(s) unavailable", env!("CARGO_PKG_NAME"), errors.len());
    }

    Ok(())
}
