use crate::quiz::domain::{Answer, Category, Question, Questionnaire, QuizOption, WeightMap};

pub(super) fn weights(entries: &[(Category, f64)]) -> WeightMap {
    entries.iter().copied().collect()
}

pub(super) fn option(id: &str, entries: &[(Category, f64)]) -> QuizOption {
    QuizOption {
        id: id.to_string(),
        text: format!("option {id}"),
        weights: weights(entries),
    }
}

/// Two questions whose options weigh `{SCIENCE: 2}` against `{ARTS: 3}`.
pub(super) fn science_vs_arts() -> Questionnaire {
    let question = |id: u32| Question {
        id,
        text: format!("question {id}"),
        options: vec![
            option("science", &[(Category::Science, 2.0)]),
            option("arts", &[(Category::Arts, 3.0)]),
        ],
    };
    Questionnaire::new(vec![question(1), question(2)])
}

pub(super) fn mixed_questionnaire() -> Questionnaire {
    Questionnaire::new(vec![
        Question {
            id: 10,
            text: "Favourite subject".to_string(),
            options: vec![
                option("physics", &[(Category::Science, 3.0)]),
                option("accounts", &[(Category::Commerce, 3.0)]),
                option("workshop", &[(Category::Vocational, 2.0), (Category::Science, 1.0)]),
            ],
        },
        Question {
            id: 20,
            text: "Preferred workplace".to_string(),
            options: vec![
                option("lab", &[(Category::Science, 2.0)]),
                option("studio", &[(Category::Arts, 4.0), (Category::Commerce, -1.0)]),
            ],
        },
    ])
}

pub(super) fn answer(question_id: u32, option_id: &str) -> Answer {
    Answer::new(question_id, option_id)
}

/// Options with equal weights so ties can be provoked from either question.
pub(super) fn tied_questionnaire() -> Questionnaire {
    Questionnaire::new(vec![
        Question {
            id: 1,
            text: "First".to_string(),
            options: vec![
                option("vocational", &[(Category::Vocational, 2.0)]),
                option(
                    "everything",
                    &[
                        (Category::Science, 1.0),
                        (Category::Commerce, 1.0),
                        (Category::Arts, 1.0),
                        (Category::Vocational, 1.0),
                    ],
                ),
            ],
        },
        Question {
            id: 2,
            text: "Second".to_string(),
            options: vec![
                option("arts", &[(Category::Arts, 2.0)]),
                option("vocational", &[(Category::Vocational, 2.0)]),
            ],
        },
    ])
}
