//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};

use super::Session;
use crate::{
    config,
    error::Result,
    generator::{TemplateTable, WorkplanGenerator},
    models::Persona,
};

/// Builder for creating and configuring Session instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    catalog_path: Option<PathBuf>,
    use_default_catalog_file: bool,
    personas: Option<Vec<Persona>>,
    templates: Option<TemplateTable>,
}

impl SessionBuilder {
    /// Creates a new builder that uses the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a catalog file to load personas and templates from.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Falls back to `$XDG_CONFIG_HOME/cadre/catalog.json` when no explicit
    /// catalog path is set.
    pub fn with_default_catalog_file(mut self) -> Self {
        self.use_default_catalog_file = true;
        self
    }

    /// Replaces the persona catalog.
    pub fn with_personas(mut self, personas: Vec<Persona>) -> Self {
        self.personas = Some(personas);
        self
    }

    /// Replaces the template table.
    pub fn with_templates(mut self, templates: TemplateTable) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Builds the session.
    ///
    /// Personas and templates set directly on the builder take precedence
    /// over those loaded from a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the catalog file cannot be read,
    /// `WizardError::Serialization` if it is malformed, and
    /// `WizardError::InvalidInput` if its contents (or personas set on the
    /// builder) are invalid.
    pub fn build(self) -> Result<Session> {
        let (personas, templates) = if self.catalog_path.is_some() || self.use_default_catalog_file
        {
            config::load_catalog(self.catalog_path.as_deref())?
        } else {
            (Persona::builtin_catalog(), TemplateTable::builtin())
        };

        let personas = match self.personas {
            Some(custom) => {
                config::validate_personas(&custom)?;
                custom
            }
            None => personas,
        };
        let templates = self.templates.unwrap_or(templates);

        Ok(Session::new(personas, WorkplanGenerator::new(templates)))
    }
}
