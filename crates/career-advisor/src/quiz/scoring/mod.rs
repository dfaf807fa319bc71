mod policy;
mod rules;
mod suggestions;

pub use suggestions::{SuggestionTable, MAX_SUGGESTIONS};

use super::domain::{Answer, Category, Question, ScoreVector};
use policy::select_category;
use serde::{Deserialize, Serialize};

/// Stateless scorer that turns questionnaire answers into a recommendation.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    suggestions: SuggestionTable,
}

impl ScoringEngine {
    pub fn new(suggestions: SuggestionTable) -> Self {
        Self { suggestions }
    }

    pub fn suggestions(&self) -> &SuggestionTable {
        &self.suggestions
    }

    pub fn recommend(&self, answers: &[Answer], questions: &[Question]) -> RecommendationResult {
        let scores = rules::accumulate_scores(answers, questions);
        let recommended_category = select_category(&scores);

        RecommendationResult {
            recommended_category,
            suggestions: self.suggestions.suggestions_for(recommended_category),
            scores,
        }
    }
}

/// Scores `answers` with the standard suggestion table.
pub fn compute_recommendation(answers: &[Answer], questions: &[Question]) -> RecommendationResult {
    ScoringEngine::default().recommend(answers, questions)
}

/// Winning category, its suggestions, and the full score vector for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommended_category: Category,
    pub suggestions: Vec<String>,
    pub scores: ScoreVector,
}

impl RecommendationResult {
    /// Score bars relative to the top score. Every percentage is 0 when the top score
    /// is not positive.
    pub fn breakdown(&self) -> Vec<ScoreShare> {
        let top = self.scores.max_value();
        self.scores
            .iter()
            .map(|(category, score)| {
                let percent = if top > 0.0 {
                    (score / top * 100.0).max(0.0)
                } else {
                    0.0
                };
                ScoreShare {
                    category,
                    score,
                    percent,
                }
            })
            .collect()
    }

    pub fn summary(&self) -> String {
        if self.suggestions.is_empty() {
            format!("recommended stream {}", self.recommended_category.label())
        } else {
            format!(
                "recommended stream {}: {}",
                self.recommended_category.label(),
                self.suggestions.join(", ")
            )
        }
    }
}

/// One row of the score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreShare {
    pub category: Category,
    pub score: f64,
    pub percent: f64,
}
