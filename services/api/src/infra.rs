use career_advisor::catalog::CatalogSnapshot;
use career_advisor::config::DataConfig;
use career_advisor::error::AppError;
use career_advisor::quiz::{Answer, ScoringEngine, SuggestionTable};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the snapshot from `data_dir` when given, otherwise the bundled data.
pub(crate) fn load_snapshot(data_dir: Option<&Path>) -> Result<CatalogSnapshot, AppError> {
    let snapshot = match data_dir {
        Some(dir) => CatalogSnapshot::from_dir(dir)?,
        None => {
            info!("serving bundled catalog snapshot");
            CatalogSnapshot::embedded()?
        }
    };
    Ok(snapshot)
}

pub(crate) fn scoring_engine(data: &DataConfig) -> ScoringEngine {
    ScoringEngine::new(SuggestionTable::standard().with_limit(data.suggestion_limit))
}

/// CLI `--data-dir` wins over `APP_DATA_DIR`.
pub(crate) fn resolve_data_dir(cli: Option<PathBuf>, data: &DataConfig) -> Option<PathBuf> {
    cli.or_else(|| data.data_dir.clone())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerPayload {
    List(Vec<Answer>),
    Wrapped { answers: Vec<Answer> },
}

/// Accepts a path to a JSON file or inline JSON, either a bare answer array or
/// `{ "answers": [...] }`.
pub(crate) fn read_answers(raw: &str) -> Result<Vec<Answer>, AppError> {
    let path = Path::new(raw);
    let json = if path.is_file() {
        std::fs::read_to_string(path)?
    } else {
        raw.to_string()
    };

    let payload: AnswerPayload = serde_json::from_str(&json)
        .map_err(|err| AppError::InvalidRequest(format!("answers are not valid JSON: {err}")))?;

    Ok(match payload {
        AnswerPayload::List(answers) => answers,
        AnswerPayload::Wrapped { answers } => answers,
    })
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_inline_answer_arrays_and_wrapped_payloads() {
        let bare = read_answers(r#"[{"questionId": 1, "selectedOption": "a"}]"#)
            .expect("bare array parses");
        let wrapped = read_answers(r#"{"answers": [{"question_id": 1, "option_id": "a"}]}"#)
            .expect("wrapped payload parses");

        assert_eq!(bare, vec![Answer::new(1, "a")]);
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn rejects_malformed_answers() {
        let err = read_answers("not json").expect_err("malformed input rejected");
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn cli_data_dir_overrides_config() {
        let data = DataConfig {
            data_dir: Some(PathBuf::from("/from/env")),
            suggestion_limit: 3,
        };

        assert_eq!(
            resolve_data_dir(Some(PathBuf::from("/from/cli")), &data),
            Some(PathBuf::from("/from/cli"))
        );
        assert_eq!(resolve_data_dir(None, &data), Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert!(parse_date("2024-03-10").is_ok());
        assert!(parse_date("10/03/2024").is_err());
    }
}
