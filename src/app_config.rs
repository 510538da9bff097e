use config::{Config, ConfigError};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    context: ContextConfig,
    #[serde(default)]
    controllers: Controllers,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn context(&self) -> &ContextConfig {
        &self.context
    }

    pub fn controllers(&self) -> &Controllers {
        &self.controllers
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    caching: bool,
}

impl Core {
    pub fn caching(&self) -> bool {
        self.caching
    }
}

#[derive(Debug, Deserialize)]
pub struct ContextConfig {
    locale: String,
    #[serde(default)]
    values: HashMap<String, Value>,
}

impl ContextConfig {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Configuration handed to controller factories, keyed like `controller/frontend/catalog/name`.
    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Controllers {
    #[serde(default)]
    preload: Vec<String>,
}

impl Controllers {
    pub fn preload(&self) -> &[String] {
        &self.preload
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { caching: true },
                context: ContextConfig {
                    locale: "en".to_string(),
                    values: HashMap::new(),
                },
                controllers: Controllers { preload: vec![] },
            },
        }
    }

    pub fn caching(mut self, caching: bool) -> Self {
        self.config.core.caching = caching;
        self
    }

    pub fn preload(mut self, paths: Vec<String>) -> Self {
        self.config.controllers.preload = paths;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserializes_all_sections() {
        let toml = r#"
            [core]
            caching = false

            [context]
            locale = "de"

            [context.values]
            "controller/frontend/catalog/name" = "Standard"

            [controllers]
            preload = ["catalog", "basket"]
        "#;

        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!config.core().caching());
        assert_eq!(config.context().locale(), "de");
        assert_eq!(config.context().values()["controller/frontend/catalog/name"], json!("Standard"));
        assert_eq!(config.controllers().preload(), ["catalog".to_string(), "basket".to_string()]);
    }

    #[test]
    fn preload_and_values_are_optional() {
        let toml = r#"
            [core]
            caching = true

            [context]
            locale = "en"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.controllers().preload().is_empty());
        assert!(config.context().values().is_empty());
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = AppConfigBuilder::new().caching(false).preload(vec!["catalog".to_string()]).build();

        assert!(!config.core().caching());
        assert_eq!(config.controllers().preload(), ["catalog".to_string()]);
    }
}
