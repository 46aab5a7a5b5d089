//! Symptom and condition reference catalogs.
//!
//! Catalogs are built once, either from the builtin reference data or from
//! a directory of catalog files, and are read-only afterwards.
//!
//! # Usage
//!
//! ```
//! use wellness_risk::catalog::Catalogs;
//!
//! // Builtin reference data
//! let catalogs = Catalogs::builtin();
//! assert_eq!(catalogs.conditions.len(), 2);
//! assert_eq!(catalogs.symptoms.len(), 16);
//! ```
//!
//! ```no_run
//! use wellness_risk::catalog::Catalogs;
//!
//! // A catalog directory containing conditions.tsv and symptoms.tsv
//! let catalogs = Catalogs::load("/etc/wellness/catalog", Default::default())?;
//! # Ok::<(), wellness_risk::RiskError>(())
//! ```
//!
//! # File Layout
//!
//! ```text
//! catalog/
//! ├── conditions.tsv
//! └── symptoms.tsv
//! ```

mod builtin;
mod conditions;
mod symptoms;

use std::path::Path;

pub use conditions::ConditionCatalog;
pub use symptoms::SymptomCatalog;

use crate::loader::discover_catalog_files;
use crate::types::{CatalogConfig, RiskResult};

/// Both reference catalogs.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    /// Known symptoms grouped by category.
    pub symptoms: SymptomCatalog,
    /// Candidate conditions.
    pub conditions: ConditionCatalog,
}

impl Catalogs {
    /// Returns the builtin reference catalogs.
    pub fn builtin() -> Self {
        Self {
            symptoms: SymptomCatalog::builtin(),
            conditions: ConditionCatalog::builtin(),
        }
    }

    /// Loads both catalogs from a catalog directory.
    pub fn load<P: AsRef<Path>>(path: P, config: CatalogConfig) -> RiskResult<Self> {
        let files = discover_catalog_files(path)?;

        Ok(Self {
            symptoms: SymptomCatalog::load(&files.symptoms_file, config.clone())?,
            conditions: ConditionCatalog::load(&files.conditions_file, config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskError;

    fn shipped_catalog_dir() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[test]
    fn test_shipped_files_match_builtin() {
        let loaded = Catalogs::load(shipped_catalog_dir(), CatalogConfig::default()).unwrap();
        let builtin = Catalogs::builtin();

        assert_eq!(loaded.conditions.records(), builtin.conditions.records());
        assert_eq!(loaded.symptoms.entries(), builtin.symptoms.entries());
    }

    #[test]
    fn test_load_missing_directory() {
        let result = Catalogs::load("/nonexistent/catalog", CatalogConfig::default());
        assert!(matches!(result, Err(RiskError::DirectoryNotFound { .. })));
    }
}
