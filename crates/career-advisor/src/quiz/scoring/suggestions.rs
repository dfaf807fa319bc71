use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::Category;

/// Upper bound on suggestions returned with a recommendation.
pub const MAX_SUGGESTIONS: usize = 3;

/// Static category -> ordered program list used to derive suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionTable {
    entries: BTreeMap<Category, Vec<String>>,
    limit: usize,
}

impl SuggestionTable {
    pub fn new(entries: BTreeMap<Category, Vec<String>>) -> Self {
        Self {
            entries,
            limit: MAX_SUGGESTIONS,
        }
    }

    /// Program suggestions shipped with the advisor.
    pub fn standard() -> Self {
        let table = [
            (
                Category::Science,
                &["B.Sc Physics", "B.Sc Chemistry", "B.Tech Engineering", "MBBS"][..],
            ),
            (
                Category::Commerce,
                &["B.Com Accounting", "BBA", "B.Com Finance", "CA", "CS"][..],
            ),
            (
                Category::Arts,
                &["B.A Psychology", "B.A Literature", "B.A History", "Journalism"][..],
            ),
            (
                Category::Vocational,
                &[
                    "Diploma in Computer Engineering",
                    "ITI Courses",
                    "Polytechnic",
                    "Skill Development",
                ][..],
            ),
        ];

        Self::new(
            table
                .into_iter()
                .map(|(category, items)| {
                    (
                        category,
                        items.iter().map(|item| item.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    /// Lowers the number of suggestions returned; values outside `1..=MAX_SUGGESTIONS`
    /// are clamped into that range.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, MAX_SUGGESTIONS);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// First `limit` entries for the category; empty when the table has no entry.
    pub fn suggestions_for(&self, category: Category) -> Vec<String> {
        self.entries
            .get(&category)
            .map(|items| items.iter().take(self.limit).cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for SuggestionTable {
    fn default() -> Self {
        Self::standard()
    }
}
