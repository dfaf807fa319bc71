use std::collections::BTreeMap;

use tracing::debug;

use super::super::domain::{Answer, Question, ScoreVector};

/// Keeps the last answer given for each question, matching replace-on-re-answer.
pub(crate) fn latest_answers(answers: &[Answer]) -> BTreeMap<u32, &str> {
    answers
        .iter()
        .map(|answer| (answer.question_id, answer.option_id.as_str()))
        .collect()
}

pub(crate) fn accumulate_scores(answers: &[Answer], questions: &[Question]) -> ScoreVector {
    let mut scores = ScoreVector::zero();

    for (question_id, option_id) in latest_answers(answers) {
        let Some(question) = questions.iter().find(|question| question.id == question_id) else {
            debug!(question_id, "skipping answer for unknown question");
            continue;
        };

        let Some(option) = question.option(option_id) else {
            debug!(question_id, option_id, "skipping answer for unknown option");
            continue;
        };

        scores.accumulate(&option.weights);
    }

    scores
}
