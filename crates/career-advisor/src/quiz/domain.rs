use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Recommendation outcomes a questionnaire can score towards.
///
/// Declaration order doubles as the tie-break priority: when two categories share the
/// top score, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Science,
    Commerce,
    Arts,
    Vocational,
}

impl Category {
    pub const COUNT: usize = 4;

    /// Fixed tie-break order, highest priority first.
    pub const PRIORITY: [Category; Category::COUNT] = [
        Category::Science,
        Category::Commerce,
        Category::Arts,
        Category::Vocational,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Wire code used in questionnaire weight maps and catalog records.
    pub const fn code(self) -> &'static str {
        match self {
            Category::Science => "SCIENCE",
            Category::Commerce => "COMMERCE",
            Category::Arts => "ARTS",
            Category::Vocational => "VOCATIONAL",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Science => "Science",
            Category::Commerce => "Commerce",
            Category::Arts => "Arts",
            Category::Vocational => "Vocational",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Category::Science => "Your analytical mindset and curiosity about how things work make you a natural fit for scientific fields.",
            Category::Commerce => "Your business acumen and interest in economics position you well for commercial careers.",
            Category::Arts => "Your creativity and understanding of people align with the arts and humanities.",
            Category::Vocational => "Your practical approach and hands-on skills suit technical and vocational fields.",
        }
    }

    /// Case-insensitive lookup by wire code.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::PRIORITY
            .into_iter()
            .find(|category| category.code().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Total function from [`Category`] to a number; absent categories read as zero.
///
/// Serialized as a JSON object keyed by category code. Deserializing accepts a partial
/// object so weight maps only need to list the categories they touch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Category, f64>",
    into = "BTreeMap<Category, f64>"
)]
pub struct CategoryScores([f64; Category::COUNT]);

/// Per-option contribution to each category.
pub type WeightMap = CategoryScores;

/// Accumulated score for every known category.
pub type ScoreVector = CategoryScores;

impl CategoryScores {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: Category, value: f64) {
        self.0[category.index()] = value;
    }

    pub fn add(&mut self, category: Category, value: f64) {
        self.0[category.index()] += value;
    }

    /// Adds every category of `other` into `self`.
    pub fn accumulate(&mut self, other: &CategoryScores) {
        for category in Category::PRIORITY {
            self.add(category, other.get(category));
        }
    }

    /// Entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::PRIORITY
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn max_value(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl From<BTreeMap<Category, f64>> for CategoryScores {
    fn from(value: BTreeMap<Category, f64>) -> Self {
        let mut scores = Self::zero();
        for (category, weight) in value {
            scores.set(category, weight);
        }
        scores
    }
}

impl From<CategoryScores> for BTreeMap<Category, f64> {
    fn from(value: CategoryScores) -> Self {
        value.iter().collect()
    }
}

impl FromIterator<(Category, f64)> for CategoryScores {
    fn from_iter<T: IntoIterator<Item = (Category, f64)>>(iter: T) -> Self {
        let mut scores = Self::zero();
        for (category, value) in iter {
            scores.add(category, value);
        }
        scores
    }
}

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub weights: WeightMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// A chosen option for one question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    #[serde(alias = "questionId")]
    pub question_id: u32,
    #[serde(alias = "optionId", alias = "selectedOption")]
    pub option_id: String,
}

impl Answer {
    pub fn new(question_id: u32, option_id: impl Into<String>) -> Self {
        Self {
            question_id,
            option_id: option_id.into(),
        }
    }
}

/// Ordered question set supplied as a read-only snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
