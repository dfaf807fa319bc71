use super::common::*;
use crate::quiz::domain::Category;
use crate::quiz::scoring::{
    compute_recommendation, ScoringEngine, SuggestionTable, MAX_SUGGESTIONS,
};
use std::collections::BTreeMap;

#[test]
fn arts_weighted_answers_recommend_arts() {
    let questionnaire = science_vs_arts();
    let answers = vec![answer(1, "arts"), answer(2, "arts")];

    let result = compute_recommendation(&answers, questionnaire.questions());

    assert_eq!(result.recommended_category, Category::Arts);
    assert_eq!(result.scores.get(Category::Science), 0.0);
    assert_eq!(result.scores.get(Category::Arts), 6.0);
    assert_eq!(result.scores.get(Category::Commerce), 0.0);
    assert_eq!(result.scores.get(Category::Vocational), 0.0);
    assert_eq!(
        result.suggestions,
        vec!["B.A Psychology", "B.A Literature", "B.A History"]
    );
}

#[test]
fn empty_answers_score_zero_and_fall_back_to_priority_winner() {
    let questionnaire = mixed_questionnaire();

    let result = compute_recommendation(&[], questionnaire.questions());

    assert!(result.scores.iter().all(|(_, score)| score == 0.0));
    assert_eq!(result.scores.iter().count(), Category::COUNT);
    assert_eq!(result.recommended_category, Category::PRIORITY[0]);
}

#[test]
fn reanswering_keeps_only_the_last_choice() {
    let questionnaire = science_vs_arts();
    let replaced = vec![answer(1, "science"), answer(2, "arts"), answer(1, "arts")];
    let single = vec![answer(2, "arts"), answer(1, "arts")];

    let first = compute_recommendation(&replaced, questionnaire.questions());
    let second = compute_recommendation(&single, questionnaire.questions());

    assert_eq!(first, second);
    assert_eq!(first.scores.get(Category::Science), 0.0);
}

#[test]
fn unknown_questions_and_options_are_skipped() {
    let questionnaire = science_vs_arts();
    let answers = vec![
        answer(1, "science"),
        answer(99, "science"),
        answer(2, "does-not-exist"),
    ];

    let result = compute_recommendation(&answers, questionnaire.questions());

    assert_eq!(result.recommended_category, Category::Science);
    assert_eq!(result.scores.get(Category::Science), 2.0);
    assert_eq!(result.scores.get(Category::Arts), 0.0);
}

#[test]
fn negative_weights_are_summed_without_clamping() {
    let questionnaire = mixed_questionnaire();
    let answers = vec![answer(10, "physics"), answer(20, "studio")];

    let result = compute_recommendation(&answers, questionnaire.questions());

    assert_eq!(result.scores.get(Category::Commerce), -1.0);
    assert_eq!(result.scores.get(Category::Arts), 4.0);
    assert_eq!(result.recommended_category, Category::Arts);
}

#[test]
fn ties_resolve_by_fixed_priority_not_answer_order() {
    let questionnaire = tied_questionnaire();
    let forward = vec![answer(1, "vocational"), answer(2, "arts")];
    let reversed = vec![answer(2, "arts"), answer(1, "vocational")];

    let first = compute_recommendation(&forward, questionnaire.questions());
    let second = compute_recommendation(&reversed, questionnaire.questions());

    assert_eq!(first.scores.get(Category::Arts), 2.0);
    assert_eq!(first.scores.get(Category::Vocational), 2.0);
    assert_eq!(first.recommended_category, Category::Arts);
    assert_eq!(second.recommended_category, Category::Arts);
}

#[test]
fn full_tie_picks_highest_priority_category() {
    let questionnaire = tied_questionnaire();
    let answers = vec![answer(1, "everything")];

    let result = compute_recommendation(&answers, questionnaire.questions());

    assert!(result.scores.iter().all(|(_, score)| score == 1.0));
    assert_eq!(result.recommended_category, Category::Science);
}

#[test]
fn strictly_higher_score_beats_priority() {
    let questionnaire = tied_questionnaire();
    let answers = vec![answer(1, "vocational"), answer(2, "vocational")];

    let result = compute_recommendation(&answers, questionnaire.questions());

    assert_eq!(result.scores.get(Category::Vocational), 4.0);
    assert_eq!(result.recommended_category, Category::Vocational);
}

#[test]
fn missing_suggestion_entry_yields_empty_list() {
    let mut entries = BTreeMap::new();
    entries.insert(Category::Commerce, vec!["BBA".to_string()]);
    let engine = ScoringEngine::new(SuggestionTable::new(entries));
    let questionnaire = science_vs_arts();

    let result = engine.recommend(&[answer(1, "arts")], questionnaire.questions());

    assert_eq!(result.recommended_category, Category::Arts);
    assert!(result.suggestions.is_empty());
}

#[test]
fn suggestions_are_capped_and_limit_is_clamped() {
    let table = SuggestionTable::standard();
    assert_eq!(table.suggestions_for(Category::Commerce).len(), 3);

    let narrowed = SuggestionTable::standard().with_limit(1);
    assert_eq!(narrowed.suggestions_for(Category::Commerce), vec!["B.Com Accounting"]);

    let widened = SuggestionTable::standard().with_limit(10);
    assert_eq!(widened.limit(), MAX_SUGGESTIONS);
}

#[test]
fn breakdown_is_relative_to_top_score() {
    let questionnaire = science_vs_arts();
    let result = compute_recommendation(
        &[answer(1, "science"), answer(2, "arts")],
        questionnaire.questions(),
    );

    let breakdown = result.breakdown();
    let arts = breakdown
        .iter()
        .find(|share| share.category == Category::Arts)
        .expect("arts row present");
    let science = breakdown
        .iter()
        .find(|share| share.category == Category::Science)
        .expect("science row present");

    assert_eq!(arts.percent, 100.0);
    assert!((science.percent - 66.666).abs() < 0.01);
    assert_eq!(breakdown.len(), Category::COUNT);

    let empty = compute_recommendation(&[], questionnaire.questions());
    assert!(empty.breakdown().iter().all(|share| share.percent == 0.0));
}

#[test]
fn result_serializes_every_category() {
    let questionnaire = science_vs_arts();
    let result = compute_recommendation(&[answer(1, "arts")], questionnaire.questions());

    let json = serde_json::to_value(&result).expect("serializes");

    assert_eq!(json["recommended_category"], "ARTS");
    assert_eq!(json["scores"]["SCIENCE"], 0.0);
    assert_eq!(json["scores"]["ARTS"], 3.0);
    assert_eq!(json["scores"]["COMMERCE"], 0.0);
    assert_eq!(json["scores"]["VOCATIONAL"], 0.0);
}

#[test]
fn questionnaire_parses_partial_weight_maps() {
    let raw = r#"[{"id": 1, "text": "Pick", "options": [
        {"id": "a", "text": "A", "weights": {"SCIENCE": 2}},
        {"id": "b", "text": "B", "weights": {"ARTS": 1.5, "COMMERCE": 0.5}}
    ]}]"#;

    let questionnaire: crate::quiz::Questionnaire =
        serde_json::from_str(raw).expect("questionnaire parses");

    let question = questionnaire.question(1).expect("question present");
    let option = question.option("b").expect("option present");
    assert_eq!(option.weights.get(Category::Arts), 1.5);
    assert_eq!(option.weights.get(Category::Vocational), 0.0);
}

#[test]
fn answers_accept_camel_case_wire_names() {
    let parsed: Vec<crate::quiz::Answer> =
        serde_json::from_str(r#"[{"questionId": 3, "selectedOption": "c"}]"#)
            .expect("answers parse");

    assert_eq!(parsed, vec![answer(3, "c")]);
}
