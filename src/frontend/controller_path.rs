use crate::extensions::str_ext::UpperFirst;
use crate::frontend::FrontendError;

const FACTORY_SUFFIX: &str = "Factory";

/// A validated controller path, a single alphanumeric segment such as `catalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerPath<'a>(&'a str);

impl<'a> ControllerPath<'a> {
    pub fn parse(path: &'a str) -> Result<Self, FrontendError> {
        if path.is_empty() {
            return Err(FrontendError::Empty);
        }
        if !path.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FrontendError::InvalidCharacters(path.to_owned()));
        }
        Ok(ControllerPath(path))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Name of the factory serving this path, `catalog` is served by `CatalogFactory`.
    pub fn factory_name(&self) -> String {
        format!("{}{}", self.0.upper_first(), FACTORY_SUFFIX)
    }
}
