use std::sync::Arc;

use crate::domain::error::Result;
use crate::loader::{source_from_config, CountrySource};
use crate::ui::Themes;
use crate::{load_themes, Config};

/// Shared, read-only context handed to every request handler.
#[derive(Debug)]
pub struct AppContext {
    pub source: Arc<dyn CountrySource>,
    pub themes: Themes,
}

impl AppContext {
    #[must_use]
    pub fn new(source: Arc<dyn CountrySource>, themes: Themes) -> Arc<Self> {
        Arc::new(Self { source, themes })
    }

    /// Builds the context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the country source cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Arc<Self>> {
        let source = source_from_config(config)?;
        let themes = load_themes(config);

        Ok(Self::new(source, themes))
    }
}
