use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::event::TimelineEvent;
use super::institution::Institution;
use super::loader::{load_records, read_json, CatalogLoadError};
use super::program::Program;
use super::resource::StudyResource;
use crate::quiz::Questionnaire;

const EMBEDDED_QUESTIONNAIRE: &str = include_str!("../../data/questionnaire.json");
const EMBEDDED_INSTITUTIONS: &str = include_str!("../../data/institutions.json");
const EMBEDDED_PROGRAMS: &str = include_str!("../../data/programs.json");
const EMBEDDED_RESOURCES: &str = include_str!("../../data/resources.json");
const EMBEDDED_EVENTS: &str = include_str!("../../data/events.json");

/// Read-only questionnaire and catalogs for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub questionnaire: Questionnaire,
    pub institutions: Vec<Institution>,
    pub programs: Vec<Program>,
    pub resources: Vec<StudyResource>,
    pub events: Vec<TimelineEvent>,
}

impl CatalogSnapshot {
    /// Data bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogLoadError> {
        Ok(Self {
            questionnaire: read_json(EMBEDDED_QUESTIONNAIRE.as_bytes())?,
            institutions: read_json(EMBEDDED_INSTITUTIONS.as_bytes())?,
            programs: read_json(EMBEDDED_PROGRAMS.as_bytes())?,
            resources: read_json(EMBEDDED_RESOURCES.as_bytes())?,
            events: read_json(EMBEDDED_EVENTS.as_bytes())?,
        })
    }

    /// Loads `questionnaire.json` and each catalog from `<name>.json` or `<name>.csv` in
    /// `dir`. Files that are absent fall back to the embedded data.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let dir = dir.as_ref();
        let mut snapshot = Self::embedded()?;

        let questionnaire_path = dir.join("questionnaire.json");
        if questionnaire_path.is_file() {
            let file = std::fs::File::open(&questionnaire_path).map_err(|source| {
                CatalogLoadError::Io {
                    path: questionnaire_path.clone(),
                    source,
                }
            })?;
            snapshot.questionnaire = read_json(file)?;
        }

        replace_from_dir(dir, "institutions", &mut snapshot.institutions)?;
        replace_from_dir(dir, "programs", &mut snapshot.programs)?;
        replace_from_dir(dir, "resources", &mut snapshot.resources)?;
        replace_from_dir(dir, "events", &mut snapshot.events)?;

        info!(
            data_dir = %dir.display(),
            questions = snapshot.questionnaire.len(),
            institutions = snapshot.institutions.len(),
            programs = snapshot.programs.len(),
            resources = snapshot.resources.len(),
            events = snapshot.events.len(),
            "catalog snapshot loaded"
        );

        Ok(snapshot)
    }
}

fn replace_from_dir<T: DeserializeOwned>(
    dir: &Path,
    name: &str,
    target: &mut Vec<T>,
) -> Result<(), CatalogLoadError> {
    for extension in ["json", "csv"] {
        let path = dir.join(format!("{name}.{extension}"));
        if path.is_file() {
            *target = load_records(&path)?;
            return Ok(());
        }
    }

    debug!(catalog = name, "no catalog file found, keeping embedded data");
    Ok(())
}
