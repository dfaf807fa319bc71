use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{
    compare_programs, search_snapshot, CatalogQuery, CatalogSnapshot, ComparisonSelection,
    EventQuery, InstitutionQuery, ProgramComparison, ProgramQuery, ResourceQuery, MAX_COMPARED,
};
use crate::error::AppError;
use crate::quiz::{Answer, Questionnaire, RecommendationResult, ScoreShare, ScoringEngine};

/// Snapshot and scoring engine shared by every request.
#[derive(Debug, Clone, Default)]
pub struct AdvisorState {
    pub snapshot: CatalogSnapshot,
    pub engine: ScoringEngine,
}

impl AdvisorState {
    pub fn new(snapshot: CatalogSnapshot, engine: ScoringEngine) -> Self {
        Self { snapshot, engine }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    #[serde(flatten)]
    pub result: RecommendationResult,
    pub breakdown: Vec<ScoreShare>,
    pub summary: String,
}

impl From<RecommendationResult> for RecommendationResponse {
    fn from(result: RecommendationResult) -> Self {
        Self {
            breakdown: result.breakdown(),
            summary: result.summary(),
            result,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    pub program_ids: Vec<u32>,
}

/// Router exposing the questionnaire, catalog searches, and program comparison.
pub fn advisor_router(state: Arc<AdvisorState>) -> Router {
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler))
        .route("/api/v1/quiz/recommendation", post(recommendation_handler))
        .route(
            "/api/v1/catalog/institutions/search",
            post(search_handler::<InstitutionQuery>),
        )
        .route(
            "/api/v1/catalog/programs/search",
            post(search_handler::<ProgramQuery>),
        )
        .route(
            "/api/v1/catalog/resources/search",
            post(search_handler::<ResourceQuery>),
        )
        .route(
            "/api/v1/catalog/events/search",
            post(search_handler::<EventQuery>),
        )
        .route("/api/v1/catalog/programs/compare", post(compare_handler))
        .with_state(state)
}

pub(crate) async fn questions_handler(
    State(state): State<Arc<AdvisorState>>,
) -> Json<Questionnaire> {
    Json(state.snapshot.questionnaire.clone())
}

pub(crate) async fn recommendation_handler(
    State(state): State<Arc<AdvisorState>>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let result = state
        .engine
        .recommend(&request.answers, state.snapshot.questionnaire.questions());
    debug!(
        answers = request.answers.len(),
        category = %result.recommended_category,
        "recommendation computed"
    );

    (StatusCode::OK, Json(RecommendationResponse::from(result))).into_response()
}

pub(crate) async fn search_handler<Q>(
    State(state): State<Arc<AdvisorState>>,
    Json(query): Json<Q>,
) -> Response
where
    Q: CatalogQuery + DeserializeOwned + Send + 'static,
    Q::Record: Serialize,
{
    let results = search_snapshot(&state.snapshot, &query);
    debug!(total = results.total, "catalog search completed");
    (StatusCode::OK, Json(results)).into_response()
}

pub(crate) async fn compare_handler(
    State(state): State<Arc<AdvisorState>>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ProgramComparison>, AppError> {
    let mut selection = ComparisonSelection::new();
    for id in request.program_ids {
        if selection.contains(id) {
            continue;
        }
        if selection.is_full() {
            return Err(AppError::InvalidRequest(format!(
                "at most {MAX_COMPARED} programs can be compared"
            )));
        }
        selection.toggle(id);
    }

    Ok(Json(compare_programs(&state.snapshot.programs, &selection)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        let snapshot = CatalogSnapshot::embedded().expect("embedded data parses");
        advisor_router(Arc::new(AdvisorState::new(
            snapshot,
            ScoringEngine::default(),
        )))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
            .expect("request builds")
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn questions_route_lists_questionnaire() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/quiz/questions")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        let questions = payload.as_array().expect("array of questions");
        assert_eq!(questions.len(), 5);
        assert!(questions[0]["options"].as_array().is_some());
    }

    #[tokio::test]
    async fn recommendation_route_returns_category_and_breakdown() {
        let snapshot = CatalogSnapshot::embedded().expect("embedded data parses");
        let answers: Vec<Value> = snapshot
            .questionnaire
            .questions()
            .iter()
            .map(|question| json!({ "questionId": question.id, "selectedOption": "c" }))
            .collect();

        let response = router()
            .oneshot(post_json(
                "/api/v1/quiz/recommendation",
                json!({ "answers": answers }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["recommended_category"], "ARTS");
        assert_eq!(payload["suggestions"].as_array().map(Vec::len), Some(3));
        assert_eq!(payload["breakdown"].as_array().map(Vec::len), Some(4));
        assert!(payload["scores"]["ARTS"].as_f64().unwrap_or_default() > 0.0);
    }

    #[tokio::test]
    async fn empty_recommendation_request_defaults_to_science() {
        let response = router()
            .oneshot(post_json("/api/v1/quiz/recommendation", json!({})))
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        assert_eq!(payload["recommended_category"], "SCIENCE");
        assert_eq!(payload["scores"]["SCIENCE"], 0.0);
    }

    #[tokio::test]
    async fn institution_search_route_filters_and_returns_facets() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/catalog/institutions/search",
                json!({ "location": "Delhi", "min_rating": 4.5 }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        let items = payload["items"].as_array().expect("items array");
        assert_eq!(payload["total"].as_u64(), Some(items.len() as u64));
        assert!(items.iter().all(|item| item["location"] == "Delhi"));
        assert!(items
            .iter()
            .all(|item| item["rating"].as_f64().unwrap_or_default() >= 4.5));
        let locations = payload["facets"]["location"]
            .as_array()
            .expect("location facet");
        assert!(locations.contains(&json!("Mumbai")));
    }

    #[tokio::test]
    async fn event_search_route_accepts_all() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/catalog/events/search",
                json!({ "kind": "all" }),
            ))
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        assert_eq!(payload["total"], 8);
    }

    #[tokio::test]
    async fn compare_route_rejects_more_than_two_programs() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/catalog/programs/compare",
                json!({ "program_ids": [1, 2, 3] }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let payload = read_json_body(response).await;
        assert!(payload["error"]
            .as_str()
            .unwrap_or_default()
            .contains("at most 2"));
    }

    #[tokio::test]
    async fn compare_route_lays_out_rows() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/catalog/programs/compare",
                json!({ "program_ids": [1, 2] }),
            ))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["programs"].as_array().map(Vec::len), Some(2));
        assert_eq!(payload["rows"][0]["label"], "Duration");
    }
}
