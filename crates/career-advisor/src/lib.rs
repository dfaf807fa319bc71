//! Questionnaire scoring and faceted catalog search for student career guidance.
//!
//! The two engines ([`quiz::scoring`] and [`catalog::filter`]) are pure functions over
//! caller-supplied snapshots; everything else in this crate loads those snapshots,
//! configures the process, and exposes the engines over HTTP.

pub mod catalog;
pub mod config;
pub mod error;
pub mod quiz;
pub mod router;
pub mod telemetry;

pub use catalog::{derive_facets, filter_catalog, CatalogSnapshot, FilterSpec, Predicate};
pub use quiz::{compute_recommendation, Answer, Category, Question, RecommendationResult};
