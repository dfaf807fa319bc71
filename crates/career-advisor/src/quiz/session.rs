use serde::{Deserialize, Serialize};

use super::domain::{Answer, Question, Questionnaire};
use super::scoring::{RecommendationResult, ScoringEngine};

/// Caller-owned progress through a questionnaire.
///
/// The session never scores on its own; [`QuizSession::advance`] hands the collected
/// answers to a [`ScoringEngine`] once the last question is answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    current_index: usize,
    answers: Vec<Answer>,
}

/// Result of moving forward in a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStep {
    Next(usize),
    Finished(RecommendationResult),
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn current_question<'q>(&self, questionnaire: &'q Questionnaire) -> Option<&'q Question> {
        questionnaire.get(self.current_index)
    }

    /// Records an answer, replacing any earlier answer to the same question in place.
    pub fn set_answer(&mut self, question_id: u32, option_id: impl Into<String>) {
        let answer = Answer::new(question_id, option_id);
        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question_id == question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }

    pub fn answer_for(&self, question_id: u32) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
    }

    pub fn can_proceed(&self, questionnaire: &Questionnaire) -> bool {
        self.current_question(questionnaire)
            .map(|question| self.answer_for(question.id).is_some())
            .unwrap_or(false)
    }

    /// Moves to the next question, or scores the session after the last one.
    /// Returns `None` while the current question is unanswered.
    pub fn advance(
        &mut self,
        questionnaire: &Questionnaire,
        engine: &ScoringEngine,
    ) -> Option<SessionStep> {
        if !self.can_proceed(questionnaire) {
            return None;
        }

        if self.current_index + 1 < questionnaire.len() {
            self.current_index += 1;
            Some(SessionStep::Next(self.current_index))
        } else {
            Some(SessionStep::Finished(
                engine.recommend(&self.answers, questionnaire.questions()),
            ))
        }
    }

    /// Steps back one question; `false` when already at the first.
    pub fn back(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.current_index -= 1;
        true
    }

    pub fn progress_percent(&self, questionnaire: &Questionnaire) -> f64 {
        if questionnaire.is_empty() {
            return 0.0;
        }
        let position = (self.current_index + 1).min(questionnaire.len());
        position as f64 / questionnaire.len() as f64 * 100.0
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
        self.answers.clear();
    }
}
