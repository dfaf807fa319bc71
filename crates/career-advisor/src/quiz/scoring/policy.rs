use super::super::domain::{Category, ScoreVector};

/// Picks the strictly highest score; ties go to the earlier entry of [`Category::PRIORITY`].
pub(crate) fn select_category(scores: &ScoreVector) -> Category {
    let mut winner = Category::PRIORITY[0];
    for category in Category::PRIORITY.into_iter().skip(1) {
        if scores.get(category) > scores.get(winner) {
            winner = category;
        }
    }
    winner
}
