//! Catalog file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{CatalogFiles, RiskError, RiskResult};

/// File stem of the condition catalog.
pub const CONDITIONS_STEM: &str = "conditions";
/// File stem of the symptom catalog.
pub const SYMPTOMS_STEM: &str = "symptoms";

/// Discovers catalog files in a catalog directory.
///
/// Accepts `conditions.tsv` / `symptoms.tsv` as well as the `.txt`
/// extension; when both exist for one catalog the `.tsv` file is used.
/// Both catalogs are required.
pub fn discover_catalog_files<P: AsRef<Path>>(path: P) -> RiskResult<CatalogFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(RiskError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut conditions: Option<Candidate> = None;
    let mut symptoms: Option<Candidate> = None;

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let filename = entry.file_name();
        let Some((stem, extension)) = catalog_name(&filename.to_string_lossy()) else {
            continue;
        };

        let slot = match stem.as_str() {
            CONDITIONS_STEM => &mut conditions,
            SYMPTOMS_STEM => &mut symptoms,
            _ => continue,
        };
        let candidate = Candidate {
            path: entry.path(),
            extension,
        };
        if slot.as_ref().map_or(true, |current| candidate.outranks(current)) {
            *slot = Some(candidate);
        }
    }

    match (conditions, symptoms) {
        (Some(conditions), Some(symptoms)) => Ok(CatalogFiles {
            conditions_file: conditions.path,
            symptoms_file: symptoms.path,
        }),
        (conditions, symptoms) => {
            let mut missing = Vec::new();
            if conditions.is_none() {
                missing.push("Conditions");
            }
            if symptoms.is_none() {
                missing.push("Symptoms");
            }
            Err(RiskError::RequiredFileMissing {
                file_type: missing.join(", "),
                directory: path.display().to_string(),
            })
        }
    }
}

/// Catalog file extensions, most preferred first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CatalogExtension {
    Tsv,
    Txt,
}

struct Candidate {
    path: PathBuf,
    extension: CatalogExtension,
}

impl Candidate {
    /// Preferred extension wins; ties go to the smaller path.
    fn outranks(&self, other: &Candidate) -> bool {
        (self.extension, &self.path) < (other.extension, &other.path)
    }
}

/// Splits a catalog filename into its lowercase stem and extension, or
/// returns `None` if the extension is not a catalog extension.
fn catalog_name(filename: &str) -> Option<(String, CatalogExtension)> {
    let (stem, extension) = filename.rsplit_once('.')?;
    let extension = if extension.eq_ignore_ascii_case("tsv") {
        CatalogExtension::Tsv
    } else if extension.eq_ignore_ascii_case("txt") {
        CatalogExtension::Txt
    } else {
        return None;
    };
    Some((stem.to_ascii_lowercase(), extension))
}
