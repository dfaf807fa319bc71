//! Static catalogs (institutions, programs, study resources, timeline events) and the
//! faceted query engine that filters them.

pub mod compare;
pub mod event;
pub mod facets;
pub mod filter;
pub mod institution;
pub mod loader;
mod normalizer;
pub mod program;
pub mod record;
pub mod resource;
pub mod search;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use compare::{
    compare_programs, ComparisonRow, ComparisonSelection, ProgramComparison, MAX_COMPARED,
};
pub use event::{upcoming_events, EventField, EventKind, EventQuery, Importance, TimelineEvent};
pub use facets::derive_facets;
pub use filter::{filter_catalog, filter_catalog_owned, FilterSpec, Predicate};
pub use institution::{Institution, InstitutionField, InstitutionQuery};
pub use loader::{load_records, read_csv, read_json, CatalogLoadError, SnapshotFormat};
pub use program::{Program, ProgramField, ProgramQuery};
pub use record::{CatalogRecord, FieldValue};
pub use resource::{ResourceField, ResourceKind, ResourceLevel, ResourceQuery, StudyResource};
pub use search::{search, search_snapshot, CatalogQuery, SearchResults};
pub use snapshot::CatalogSnapshot;
