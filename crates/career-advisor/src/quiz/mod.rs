//! Stream-selection questionnaire: domain types, the scoring engine, and the
//! caller-owned session used to walk through the questions.

pub mod domain;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, Category, CategoryScores, Question, Questionnaire, QuizOption, ScoreVector, WeightMap,
};
pub use scoring::{
    compute_recommendation, RecommendationResult, ScoreShare, ScoringEngine, SuggestionTable,
    MAX_SUGGESTIONS,
};
pub use session::{QuizSession, SessionStep};
