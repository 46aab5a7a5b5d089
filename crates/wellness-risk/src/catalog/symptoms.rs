//! Immutable symptom catalog grouped by body-system category.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use wellness_types::CatalogSymptom;

use crate::catalog::builtin;
use crate::parser::CatalogParser;
use crate::types::{CatalogConfig, RiskError, RiskResult};

/// Known symptoms offered for selection.
///
/// Reported symptoms are not required to appear here; the catalog exists
/// for presentation and lookups.
///
/// # Example
///
/// ```
/// use wellness_risk::SymptomCatalog;
///
/// let catalog = SymptomCatalog::builtin();
/// let groups = catalog.grouped();
/// assert_eq!(groups[0].0, "Cardiovascular");
/// assert_eq!(catalog.get("Cough").unwrap().category, "Respiratory");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymptomCatalog {
    entries: Vec<CatalogSymptom>,
    by_name: HashMap<String, usize>,
}

impl SymptomCatalog {
    /// Builds a catalog, rejecting duplicate or blank names.
    pub fn new(entries: Vec<CatalogSymptom>) -> RiskResult<Self> {
        Self::with_config(entries, &CatalogConfig::default())
    }

    /// Builds a catalog under the given config.
    ///
    /// With `skip_duplicates` set, the first entry of a repeated name is
    /// kept and later ones are dropped.
    pub fn with_config(entries: Vec<CatalogSymptom>, config: &CatalogConfig) -> RiskResult<Self> {
        let mut kept = Vec::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(RiskError::MissingField {
                    column: "name".to_string(),
                });
            }
            if entry.category.trim().is_empty() {
                return Err(RiskError::MissingField {
                    column: "category".to_string(),
                });
            }
            if by_name.contains_key(&entry.name) {
                if config.skip_duplicates {
                    continue;
                }
                return Err(RiskError::DuplicateSymptom { name: entry.name });
            }
            by_name.insert(entry.name.clone(), kept.len());
            kept.push(entry);
        }

        Ok(Self {
            entries: kept,
            by_name,
        })
    }

    /// Returns the reference catalog shipped with the engine.
    pub fn builtin() -> Self {
        let entries = builtin::symptoms();
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.name.clone(), index))
            .collect();
        Self { entries, by_name }
    }

    /// Loads a catalog from a `symptoms.tsv` file.
    pub fn load<P: AsRef<Path>>(path: P, config: CatalogConfig) -> RiskResult<Self> {
        let parser = CatalogParser::<_, CatalogSymptom>::from_path(path)?;
        Self::with_config(parser.parse_all()?, &config)
    }

    /// Loads a catalog from any reader producing `symptoms.tsv` content.
    pub fn from_reader<R: Read>(reader: R, config: CatalogConfig) -> RiskResult<Self> {
        let parser = CatalogParser::<_, CatalogSymptom>::from_reader(reader)?;
        Self::with_config(parser.parse_all()?, &config)
    }

    /// Looks up a symptom by exact name.
    pub fn get(&self, name: &str) -> Option<&CatalogSymptom> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Returns true if the name is a catalog symptom rather than free text.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[CatalogSymptom] {
        &self.entries
    }

    /// Groups entries by category.
    ///
    /// Categories are ordered by name; entries keep insertion order within
    /// their category.
    pub fn grouped(&self) -> Vec<(&str, Vec<&CatalogSymptom>)> {
        let mut groups: BTreeMap<&str, Vec<&CatalogSymptom>> = BTreeMap::new();
        for entry in &self.entries {
            groups.entry(entry.category.as_str()).or_default().push(entry);
        }
        groups.into_iter().collect()
    }

    /// Returns the distinct categories in name order.
    pub fn categories(&self) -> Vec<&str> {
        self.grouped().into_iter().map(|(category, _)| category).collect()
    }

    /// Returns the entries of one category in insertion order.
    pub fn in_category(&self, category: &str) -> Vec<&CatalogSymptom> {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Returns the number of symptoms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no symptoms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
