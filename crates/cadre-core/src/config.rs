//! Catalog configuration.
//!
//! A catalog file is a JSON document with two optional keys:
//!
//! ```json
//! {
//!   "personas": [{ "id": 1, "name": "Auditor", "description": "Checks the books" }],
//!   "templates": [{
//!     "persona": "Auditor",
//!     "label": "audit",
//!     "steps": [
//!       { "slot": { "fixed": "Pull ledgers" }, "duration": "2 hours" },
//!       { "slot": "task", "duration": "4 hours" },
//!       { "slot": { "results": "Report: " }, "duration": "1 hour" }
//!     ]
//!   }]
//! }
//! ```
//!
//! Omitted personas fall back to [`Persona::builtin_catalog`]. Templates are
//! merged over the built-in table by persona name.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WizardError},
    generator::{NamedTemplate, TemplateTable},
    models::Persona,
};

/// File name looked up under the XDG config directory.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Raw catalog configuration as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personas: Option<Vec<Persona>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<NamedTemplate>,
}

impl CatalogConfig {
    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::Serialization` if the text is not a valid catalog.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the file cannot be read and
    /// `WizardError::Serialization` if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading catalog from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| WizardError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&text)
    }

    /// Validate and resolve into a persona list and template table.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` for duplicate or zero persona ids,
    /// empty persona names, or unusable templates.
    pub fn resolve(self) -> Result<(Vec<Persona>, TemplateTable)> {
        let personas = match self.personas {
            Some(personas) => {
                validate_personas(&personas)?;
                personas
            }
            None => Persona::builtin_catalog(),
        };

        let mut table = TemplateTable::builtin();
        for template in self.templates {
            table.insert(template)?;
        }

        Ok((personas, table))
    }
}

pub(crate) fn validate_personas(personas: &[Persona]) -> Result<()> {
    let mut seen = HashSet::new();
    for persona in personas {
        if persona.id == 0 {
            return Err(WizardError::invalid_input("personas.id")
                .with_reason(format!("persona '{}' must have an id of at least 1", persona.name)));
        }
        if !seen.insert(persona.id) {
            return Err(WizardError::invalid_input("personas.id")
                .with_reason(format!("duplicate persona id {}", persona.id)));
        }
        if persona.name.trim().is_empty() {
            return Err(WizardError::invalid_input("personas.name")
                .with_reason(format!("persona {} has an empty name", persona.id)));
        }
    }
    Ok(())
}

/// Returns the first existing `cadre/catalog.json` under the XDG config
/// directories (`$XDG_CONFIG_HOME`, then `$XDG_CONFIG_DIRS`).
pub fn default_catalog_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("cadre").find_config_file(CATALOG_FILE_NAME)
}

/// Load the catalog from an explicit path, the XDG default, or built-ins, in
/// that order.
///
/// # Errors
///
/// Propagates load and validation errors from the chosen source.
pub fn load_catalog(explicit: Option<&Path>) -> Result<(Vec<Persona>, TemplateTable)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => default_catalog_path(),
    };

    match path {
        Some(path) => {
            info!("Using catalog {}", path.display());
            CatalogConfig::load(&path)?.resolve()
        }
        None => {
            debug!("No catalog file, using built-in personas and templates");
            CatalogConfig::default().resolve()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::LAW_LIBRARIAN;

    #[test]
    fn test_empty_config_resolves_to_builtins() {
        let (personas, table) = CatalogConfig::from_json("{}")
            .expect("parse")
            .resolve()
            .expect("resolve");
        assert_eq!(personas, Persona::builtin_catalog());
        assert_eq!(table, TemplateTable::builtin());
    }

    #[test]
    fn test_custom_personas_and_templates() {
        let json = r#"{
            "personas": [
                { "id": 10, "name": "Auditor", "description": "Checks the books" }
            ],
            "templates": [{
                "persona": "Auditor",
                "steps": [
                    { "slot": { "fixed": "Pull ledgers" }, "duration": "2 hours" },
                    { "slot": "task", "duration": "4 hours" }
                ]
            }]
        }"#;

        let (personas, table) = CatalogConfig::from_json(json)
            .expect("parse")
            .resolve()
            .expect("resolve");
        assert_eq!(personas.len(), 1);
        assert_eq!(personas[0].id, 10);
        assert_eq!(table.lookup("Auditor").steps.len(), 2);
        assert_eq!(table.lookup("Auditor").label, "");
        // Built-ins are still there
        assert_eq!(table.lookup(LAW_LIBRARIAN).steps.len(), 5);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{ "personas": [
            { "id": 2, "name": "A", "description": "" },
            { "id": 2, "name": "B", "description": "" }
        ] }"#;
        let err = CatalogConfig::from_json(json)
            .expect("parse")
            .resolve()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate persona id 2"));
    }

    #[test]
    fn test_zero_id_and_blank_name_rejected() {
        let zero = r#"{ "personas": [{ "id": 0, "name": "A", "description": "" }] }"#;
        assert!(CatalogConfig::from_json(zero).expect("parse").resolve().is_err());

        let blank = r#"{ "personas": [{ "id": 1, "name": "  ", "description": "" }] }"#;
        assert!(CatalogConfig::from_json(blank).expect("parse").resolve().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "personas": [{{ "id": 3, "name": "Clerk", "description": "Files things" }}] }}"#
        )
        .expect("write");

        let (personas, _) = load_catalog(Some(file.path())).expect("load");
        assert_eq!(personas[0].name, "Clerk");
    }

    #[test]
    fn test_missing_file_is_filesystem_error() {
        let err = load_catalog(Some(Path::new("/nonexistent/cadre/catalog.json"))).unwrap_err();
        assert!(matches!(err, WizardError::FileSystem { .. }));
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let err = CatalogConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, WizardError::Serialization { .. }));
    }
}
