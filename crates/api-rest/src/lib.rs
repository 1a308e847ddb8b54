//! # API REST
//!
//! REST API implementation for HealthAssist.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for wire types and `healthassist-core` for all behaviour.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AssessmentReq, AssessmentRes, HealthRes, HealthService, HospitalRes, HospitalsQuery,
    HospitalsRes, PrescriptionRes,
};
use healthassist_core::{
    validate_input, AssessmentFlow, FacilityFinder, FacilityPanel, LocationProvider, NoLocation,
    SymptomAssessmentInput, TypedLocation,
};

/// Application state for the REST API server.
///
/// Built once at startup from the resolved configuration; handlers never read the environment.
#[derive(Clone)]
pub struct AppState {
    pub finder: FacilityFinder,
}

impl AppState {
    pub fn new(finder: FacilityFinder) -> Self {
        Self { finder }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, create_assessment, list_hospitals),
    components(schemas(
        HealthRes,
        AssessmentReq,
        AssessmentRes,
        PrescriptionRes,
        HospitalRes,
        HospitalsRes,
    ))
)]
pub struct ApiDoc;

/// Build the full HTTP application: routes, Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/assessments", post(create_assessment))
        .route("/hospitals", get(list_hospitals))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. Does not touch the facility store.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/assessments",
    request_body = AssessmentReq,
    responses(
        (status = 200, description = "Prescription for the submitted symptoms", body = AssessmentRes),
        (status = 400, description = "Intake value missing or out of range")
    )
)]
/// Run the rule engine on one intake submission
///
/// Every request gets its own assessment flow; nothing is kept between requests.
///
/// # Errors
/// Returns `400 Bad Request` if the body is not a valid intake: malformed JSON, a blank
/// `symptoms`, an age that is not a whole number, or any value outside the intake bounds.
#[axum::debug_handler(state = AppState)]
async fn create_assessment(
    payload: Result<Json<AssessmentReq>, JsonRejection>,
) -> Result<Json<AssessmentRes>, (StatusCode, String)> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::error!("Assessment body rejected: {}", rejection.body_text());
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            other => (other.status(), other.body_text()),
        }
    })?;

    let input = SymptomAssessmentInput::try_from(req)
        .and_then(|input| validate_input(&input).map(|()| input))
        .map_err(|e| {
            tracing::error!("Assessment intake error: {:?}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        })?;

    let mut flow = AssessmentFlow::new();
    let results = flow.submit(input);
    Ok(Json(AssessmentRes::from(results)))
}

#[utoipa::path(
    get,
    path = "/hospitals",
    params(HospitalsQuery),
    responses(
        (status = 200, description = "Hospitals, nearest first when a location is given", body = HospitalsRes)
    )
)]
/// List hospitals, ranked by distance when the caller supplies a location
///
/// The facility store is queried once per request. A store failure is logged and reported as an
/// empty list, never as an error status.
#[axum::debug_handler]
async fn list_hospitals(
    State(state): State<AppState>,
    Query(query): Query<HospitalsQuery>,
) -> Json<HospitalsRes> {
    let location = location_from_query(&query);
    let view = match state.finder.activate(location.as_ref()).await {
        FacilityPanel::Loaded(view) => view,
        FacilityPanel::Loading => Default::default(),
    };
    Json(HospitalsRes::from(&view))
}

/// Explicit `lat`/`lon` win over `location` text. Blank values count as absent. Everything else
/// goes through `TypedLocation`, so a non-numeric or out-of-range value is logged like any other
/// location error and the list keeps rating order.
fn location_from_query(query: &HospitalsQuery) -> Box<dyn LocationProvider> {
    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    match (present(&query.lat), present(&query.lon), present(&query.location)) {
        (Some(lat), Some(lon), _) => Box::new(TypedLocation(format!("{lat}, {lon}"))),
        (_, _, Some(text)) => Box::new(TypedLocation(text.to_string())),
        _ => Box::new(NoLocation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use healthassist_core::{source_from_config, FacilityStoreConfig};
    use http_body_util::BodyExt;
    use std::io::Write;
    use tower::ServiceExt;

    const FACILITIES: &str = r#"[
        {"id": 1, "name": "Far Best", "address": "1 A St", "city": "X", "state": "Y",
         "phone": "111", "latitude": 0.0, "longitude": 2.0, "specialty": ["Cardiology"],
         "rating": 4.9, "emergency_services": true},
        {"id": 2, "name": "Near Ok", "address": "2 B St", "city": "X", "state": "Y",
         "phone": "222", "latitude": "0.0", "longitude": "0.5", "specialty": null,
         "rating": 3.8, "emergency_services": false}
    ]"#;

    fn state_with_source(file: Option<&tempfile::NamedTempFile>) -> AppState {
        let store = match file {
            Some(f) => FacilityStoreConfig::File(f.path().to_path_buf()),
            None => FacilityStoreConfig::Unconfigured,
        };
        AppState::new(FacilityFinder::new(
            source_from_config(&store).expect("facility source"),
        ))
    }

    fn facility_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        file.write_all(FACILITIES.as_bytes()).expect("write facilities");
        file
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = router(state_with_source(None));
        let response = app.oneshot(get_request("/health")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["ok"], true);
    }

    #[tokio::test]
    async fn assessment_returns_prescription() {
        let app = router(state_with_source(None));
        let body = serde_json::json!({
            "age": 40, "height": 175, "weight": 70, "symptoms": "I have chest pain"
        });
        let response = app
            .oneshot(json_post("/assessments", body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["bmi_display"], "22.9");
        assert_eq!(json["prescription"]["severity"], "high");
        assert_eq!(json["prescription"]["condition"], "Acute Pain - Requires Medical Evaluation");
        assert_eq!(json["prescription"]["urgency"], true);
        assert!(json["urgency_notice"].is_string());
    }

    #[tokio::test]
    async fn out_of_range_intake_is_bad_request() {
        let app = router(state_with_source(None));
        let body = serde_json::json!({
            "age": 0, "height": 175, "weight": 70, "symptoms": "cough"
        });
        let response = app
            .oneshot(json_post("/assessments", body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let app = router(state_with_source(None));
        let body = serde_json::json!({
            "age": 30, "height": 175, "weight": 70, "symptoms": "   "
        });
        let response = app
            .oneshot(json_post("/assessments", body))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn negative_or_fractional_age_is_bad_request() {
        for age in [serde_json::json!(-1), serde_json::json!(30.5)] {
            let app = router(state_with_source(None));
            let body = serde_json::json!({
                "age": age, "height": 175, "weight": 70, "symptoms": "cough"
            });
            let response = app
                .oneshot(json_post("/assessments", body))
                .await
                .expect("response");
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "age {age}");

            let bytes = response
                .into_body()
                .collect()
                .await
                .expect("collect body")
                .to_bytes();
            let text = String::from_utf8_lossy(&bytes);
            assert!(text.contains("age"), "{text}");
        }
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let app = router(state_with_source(None));
        let request = Request::builder()
            .method("POST")
            .uri("/assessments")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"age": "thirty", "height": 175"#))
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn hospitals_without_location_keep_rating_order() {
        let file = facility_file();
        let app = router(state_with_source(Some(&file)));
        let response = app.oneshot(get_request("/hospitals")).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["sorted_by_distance"], false);
        assert_eq!(json["hospitals"][0]["name"], "Far Best");
        assert!(json["hospitals"][0]["distance_km"].is_null());
    }

    #[tokio::test]
    async fn hospitals_with_location_are_nearest_first() {
        let file = facility_file();
        let app = router(state_with_source(Some(&file)));
        let response = app
            .oneshot(get_request("/hospitals?lat=0&lon=0"))
            .await
            .expect("response");
        let json = body_json(response).await;
        assert_eq!(json["sorted_by_distance"], true);
        assert_eq!(json["hospitals"][0]["name"], "Near Ok");
        assert_eq!(json["hospitals"][0]["distance_km"], 55.6);
        assert_eq!(json["hospitals"][0]["specialty"], serde_json::json!([]));

        let app = router(state_with_source(Some(&file)));
        let response = app
            .oneshot(get_request("/hospitals?location=0,0"))
            .await
            .expect("response");
        let json = body_json(response).await;
        assert_eq!(json["hospitals"][0]["name"], "Near Ok");
    }

    #[tokio::test]
    async fn bad_location_falls_back_to_rating_order() {
        let file = facility_file();
        let app = router(state_with_source(Some(&file)));
        let response = app
            .oneshot(get_request("/hospitals?lat=95&lon=0"))
            .await
            .expect("response");
        let json = body_json(response).await;
        assert_eq!(json["sorted_by_distance"], false);
        assert_eq!(json["hospitals"][0]["name"], "Far Best");
    }

    #[tokio::test]
    async fn unusable_query_values_fall_back_to_rating_order() {
        let file = facility_file();
        for uri in [
            "/hospitals?lat=abc&lon=1",
            "/hospitals?lat=&lon=",
            "/hospitals?lat=1",
            "/hospitals?location=",
        ] {
            let app = router(state_with_source(Some(&file)));
            let response = app.oneshot(get_request(uri)).await.expect("response");
            assert_eq!(response.status(), StatusCode::OK, "{uri}");

            let json = body_json(response).await;
            assert_eq!(json["sorted_by_distance"], false, "{uri}");
            assert_eq!(json["hospitals"][0]["name"], "Far Best", "{uri}");
        }
    }

    #[tokio::test]
    async fn blank_coordinates_defer_to_location_text() {
        let file = facility_file();
        let app = router(state_with_source(Some(&file)));
        let response = app
            .oneshot(get_request("/hospitals?lat=&lon=&location=0,0"))
            .await
            .expect("response");
        let json = body_json(response).await;
        assert_eq!(json["sorted_by_distance"], true);
        assert_eq!(json["hospitals"][0]["name"], "Near Ok");
    }

    #[tokio::test]
    async fn unconfigured_store_gives_empty_list_not_error() {
        let app = router(state_with_source(None));
        let response = app
            .oneshot(get_request("/hospitals?lat=1&lon=1"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["hospitals"], serde_json::json!([]));
        assert_eq!(json["message"], "No hospitals found");
    }

    #[tokio::test]
    async fn openapi_document_lists_paths() {
        let app = router(state_with_source(None));
        let response = app
            .oneshot(get_request("/api-docs/openapi.json"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["paths"]["/assessments"].is_object());
        assert!(json["paths"]["/hospitals"].is_object());
    }
}
