use chrono::{DateTime, Local};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// Shared platform state handed to every controller factory.
#[derive(Debug, Clone)]
pub struct Context {
    config: HashMap<String, Value>,
    locale: String,
    now: DateTime<Local>,
}

impl Context {
    pub fn new(locale: impl Into<String>) -> Self {
        Context {
            config: HashMap::new(),
            locale: locale.into(),
            now: Local::now(),
        }
    }

    pub fn new_with_now(locale: impl Into<String>, now: DateTime<Local>) -> Self {
        Context {
            config: HashMap::new(),
            locale: locale.into(),
            now,
        }
    }

    pub fn with_config(mut self, config: HashMap<String, Value>) -> Self {
        self.config.extend(config);
        self
    }

    /// Returns the value stored under a slash separated key like `controller/frontend/catalog/name`,
    /// or `None` if it is missing or can't be read as `T`.
    pub fn config<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.config.get(key).and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.config.insert(key.into(), value);
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new("en")
    }
}
