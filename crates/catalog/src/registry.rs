use indexmap::IndexMap;

use crate::app::App;
use crate::error::CatalogError;

/// Keyed registry of loaded apps.
///
/// Populated once at startup and read-only afterwards; the engine
/// resolves app names from workflow definitions to catalog records
/// through this table. Registration validates the app's internal
/// consistency so the engine never has to re-check it per invocation.
#[derive(Debug, Clone, Default)]
pub struct AppRegistry {
    apps: IndexMap<String, App>,
}

impl AppRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an app after validating it. Rejects duplicate names.
    pub fn register(&mut self, app: App) -> Result<(), CatalogError> {
        app.validate()?;
        if self.apps.contains_key(&app.name) {
            return Err(CatalogError::AppAlreadyRegistered {
                name: app.name.clone(),
            });
        }
        self.apps.insert(app.name.clone(), app);
        Ok(())
    }

    /// Look up an app by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&App> {
        self.apps.get(name)
    }

    /// Look up an app by name, returning an error on a miss.
    pub fn require(&self, name: &str) -> Result<&App, CatalogError> {
        self.apps.get(name).ok_or_else(|| CatalogError::AppNotFound {
            name: name.to_owned(),
        })
    }

    /// Check whether an app with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.apps.contains_key(name)
    }

    /// Number of registered apps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Returns `true` if no apps are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Iterate over all registered `(name, app)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &App)> {
        self.apps.iter().map(|(k, v)| (k.as_str(), v))
    }
}
