//! HTTP request handlers for the allowance engine API.
//!
//! Record endpoints are generic over [`Record`], so one set of handlers
//! serves every table. Calculation endpoints read the stored records and
//! return the calculator's report.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{delete, get, post, put},
};
use serde::de::DeserializeOwned;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    BudgetSummary, WorkDaySummary, calculate_company_trip, calculate_family_visit,
    calculate_manager_rotation, calculate_overtime, calculate_special_assist, calculate_travel,
    calculate_work_days, current_buddhist_year, summarize_budget,
};
use crate::error::EngineError;
use crate::models::{
    AllowanceLine, AllowanceReport, BudgetItem, CompanyTripLine, Employee, FamilyVisitLine,
    Holiday, ManagerRotationLine, OvertimeItem, OvertimeLine, RateCard, SpecialAssistItem,
    SpecialAssistLine, TravelLine,
};
use crate::store::{BulkInsertResult, Record};

use super::request::{CompanyTripRequest, SpecialAssistRequest, YearQuery, YearRequest};
use super::response::{ApiError, ApiErrorResponse, SpecialAssistItemRow};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/employees",
            get(list_records::<Employee>).post(create_record::<Employee>),
        )
        .route("/api/employees/bulk", post(bulk_create_employees))
        .route(
            "/api/employees/:id",
            get(get_record::<Employee>)
                .put(update_record::<Employee>)
                .delete(delete_record::<Employee>),
        )
        .route(
            "/api/master-rates",
            get(list_records::<RateCard>).post(create_record::<RateCard>),
        )
        .route(
            "/api/master-rates/:level",
            get(get_record::<RateCard>)
                .put(update_record::<RateCard>)
                .delete(delete_record::<RateCard>),
        )
        .route(
            "/api/budget-items",
            get(list_records::<BudgetItem>).post(create_record::<BudgetItem>),
        )
        .route("/api/budget-items/summary", get(budget_summary))
        .route(
            "/api/budget-items/:id",
            put(update_record::<BudgetItem>).delete(delete_record::<BudgetItem>),
        )
        .route(
            "/api/overtime-items",
            get(list_records::<OvertimeItem>).post(create_record::<OvertimeItem>),
        )
        .route(
            "/api/overtime-items/:id",
            delete(delete_record::<OvertimeItem>),
        )
        .route(
            "/api/special-assist-items",
            get(list_special_assist_items).post(create_record::<SpecialAssistItem>),
        )
        .route(
            "/api/special-assist-items/:id",
            delete(delete_record::<SpecialAssistItem>),
        )
        .route(
            "/api/holidays",
            get(list_records::<Holiday>).post(create_record::<Holiday>),
        )
        .route("/api/holidays/work-days", get(work_days_handler))
        .route("/api/holidays/:id", delete(delete_record::<Holiday>))
        .route("/api/calculate/travel", post(calculate_travel_handler))
        .route(
            "/api/calculate/family-visit",
            post(calculate_family_visit_handler),
        )
        .route(
            "/api/calculate/special-assist",
            post(calculate_special_assist_handler),
        )
        .route(
            "/api/calculate/company-trip",
            post(calculate_company_trip_handler),
        )
        .route(
            "/api/calculate/manager-rotation",
            post(calculate_manager_rotation_handler),
        )
        .route("/api/calculate/overtime", post(calculate_overtime_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Unwraps a JSON body, turning a rejection into a 400.
fn json_body<T>(correlation_id: Uuid, payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

fn year_query(query: Result<Query<YearQuery>, QueryRejection>) -> ApiResult<YearQuery> {
    query
        .map(|Query(q)| q)
        .map_err(|err| ApiErrorResponse::bad_request(ApiError::validation_error(err.body_text())))
}

/// Logs and converts a store error.
fn store_error(correlation_id: Uuid, entity: &str, err: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        entity,
        error = %err,
        "Record operation failed"
    );
    err.into()
}

/// GET on a table, with an optional `?year=` filter.
async fn list_records<T: Record>(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<T>>> {
    let query = year_query(query)?;
    let records = match query.year {
        Some(year) => state.store().list_for_year::<T>(year),
        None => state.store().list::<T>(),
    };
    Ok(Json(records))
}

/// GET one record.
async fn get_record<T: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<T>> {
    let correlation_id = Uuid::new_v4();
    let record = state
        .store()
        .get::<T>(&id)
        .map_err(|err| store_error(correlation_id, T::ENTITY, err))?;
    Ok(Json(record))
}

/// POST a new record.
async fn create_record<T: Record>(
    State(state): State<AppState>,
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<T>)> {
    let correlation_id = Uuid::new_v4();
    let record = json_body(correlation_id, payload)?;
    let record = state
        .store()
        .insert(record)
        .map_err(|err| store_error(correlation_id, T::ENTITY, err))?;
    info!(
        correlation_id = %correlation_id,
        entity = T::ENTITY,
        id = record.id(),
        "Record created"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT a replacement record.
async fn update_record<T: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<Json<T>> {
    let correlation_id = Uuid::new_v4();
    let record = json_body(correlation_id, payload)?;
    let record = state
        .store()
        .update(&id, record)
        .map_err(|err| store_error(correlation_id, T::ENTITY, err))?;
    info!(
        correlation_id = %correlation_id,
        entity = T::ENTITY,
        id = %id,
        "Record updated"
    );
    Ok(Json(record))
}

/// DELETE a record.
async fn delete_record<T: Record>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let correlation_id = Uuid::new_v4();
    state
        .store()
        .remove::<T>(&id)
        .map_err(|err| store_error(correlation_id, T::ENTITY, err))?;
    info!(
        correlation_id = %correlation_id,
        entity = T::ENTITY,
        id = %id,
        "Record deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /api/employees/bulk.
async fn bulk_create_employees(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Employee>>, JsonRejection>,
) -> ApiResult<Json<BulkInsertResult>> {
    let correlation_id = Uuid::new_v4();
    let rows = json_body(correlation_id, payload)?;
    let submitted = rows.len();
    let result = state.store().insert_many(rows);
    info!(
        correlation_id = %correlation_id,
        submitted,
        inserted = result.inserted.len(),
        failed = result.failed.len(),
        "Bulk employee import finished"
    );
    Ok(Json(result))
}

/// Handler for GET /api/special-assist-items.
async fn list_special_assist_items(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<SpecialAssistItemRow>>> {
    let Json(items) = list_records::<SpecialAssistItem>(State(state), query).await?;
    Ok(Json(items.into_iter().map(SpecialAssistItemRow::from).collect()))
}

/// Handler for GET /api/budget-items/summary.
async fn budget_summary(State(state): State<AppState>) -> Json<BudgetSummary> {
    Json(summarize_budget(&state.store().list::<BudgetItem>()))
}

/// Handler for GET /api/holidays/work-days.
async fn work_days_handler(
    State(state): State<AppState>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> ApiResult<Json<WorkDaySummary>> {
    let year = year_query(query)?.year.unwrap_or_else(current_buddhist_year);
    let holidays = state.store().list_for_year::<Holiday>(year);
    Ok(Json(calculate_work_days(year, &holidays)))
}

/// Logs a finished calculation and wraps the report.
fn finish<L: AllowanceLine>(
    correlation_id: Uuid,
    started: Instant,
    report: AllowanceReport<L>,
) -> Json<AllowanceReport<L>> {
    info!(
        correlation_id = %correlation_id,
        allowance = ?report.allowance,
        year = report.year,
        lines = report.lines.len(),
        total = %report.total,
        duration_us = started.elapsed().as_micros(),
        "Calculation completed successfully"
    );
    Json(report)
}

fn start_calculation<T: DeserializeOwned>(
    name: &str,
    payload: Result<Json<T>, JsonRejection>,
) -> ApiResult<(Uuid, Instant, T)> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, allowance = name, "Processing calculation request");
    let request = json_body(correlation_id, payload)?;
    Ok((correlation_id, Instant::now(), request))
}

async fn calculate_travel_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearRequest>, JsonRejection>,
) -> ApiResult<Json<AllowanceReport<TravelLine>>> {
    let (correlation_id, started, request) = start_calculation("travel", payload)?;
    let store = state.store();
    let report = calculate_travel(&store.list::<Employee>(), &store.rate_table(), request.year());
    Ok(finish(correlation_id, started, report))
}

async fn calculate_family_visit_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearRequest>, JsonRejection>,
) -> ApiResult<Json<AllowanceReport<FamilyVisitLine>>> {
    let (correlation_id, started, request) = start_calculation("family_visit", payload)?;
    let report = calculate_family_visit(
        &state.store().list::<Employee>(),
        &state.config().organization().home_province,
        request.year(),
    );
    Ok(finish(correlation_id, started, report))
}

async fn calculate_special_assist_handler(
    State(state): State<AppState>,
    payload: Result<Json<SpecialAssistRequest>, JsonRejection>,
) -> ApiResult<Json<AllowanceReport<SpecialAssistLine>>> {
    let (correlation_id, started, request) = start_calculation("special_assist", payload)?;
    let store = state.store();
    let report = calculate_special_assist(
        &store.list::<Employee>(),
        &store.rate_table(),
        request.year(),
        &request.options,
    );
    Ok(finish(correlation_id, started, report))
}

async fn calculate_company_trip_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompanyTripRequest>, JsonRejection>,
) -> ApiResult<Json<AllowanceReport<CompanyTripLine>>> {
    let (correlation_id, started, request) = start_calculation("company_trip", payload)?;
    let store = state.store();
    let report = calculate_company_trip(
        &store.list::<Employee>(),
        &store.rate_table(),
        &request.destination,
        &state.config().organization().manager_level,
        request.year(),
    );
    Ok(finish(correlation_id, started, report))
}

async fn calculate_manager_rotation_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearRequest>, JsonRejection>,
) -> ApiResult<Json<AllowanceReport<ManagerRotationLine>>> {
    let (correlation_id, started, request) = start_calculation("manager_rotation", payload)?;
    let store = state.store();
    let report = calculate_manager_rotation(
        &store.list::<Employee>(),
        &store.rate_table(),
        &state.config().organization().manager_level,
        request.year(),
    );
    Ok(finish(correlation_id, started, report))
}

async fn calculate_overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<YearRequest>, JsonRejection>,
) -> ApiResult<Json<AllowanceReport<OvertimeLine>>> {
    let (correlation_id, started, request) = start_calculation("overtime", payload)?;
    let year = request.year();
    let store = state.store();
    let work_days = calculate_work_days(year, &store.list_for_year::<Holiday>(year));
    let report = calculate_overtime(
        &store.list_for_year::<OvertimeItem>(year),
        year,
        Some(&work_days),
    );
    Ok(finish(correlation_id, started, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config").expect("Failed to load config");
        AppState::new(config).expect("Failed to seed store")
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_create_employee_returns_201() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/api/employees",
                r#"{"name": "สมชาย", "level": "C5", "start_year": 2548}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let employee: Employee = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!employee.id.is_empty());
        assert_eq!(employee.level, "C5");
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/api/employees", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_name_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/api/employees", r#"{"level": "C5"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("name"));
    }

    #[tokio::test]
    async fn test_api_004_unknown_id_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/employees/missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "RECORD_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_005_master_rates_seeded_from_config() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/master-rates/C5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let card: RateCard = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(card.hotel, Decimal::from(1500));
    }

    #[tokio::test]
    async fn test_family_visit_over_stored_employee() {
        let state = create_test_state();
        let employee: Employee = serde_json::from_str(
            r#"{"id": "e1", "name": "ก", "status": "มีสิทธิ์",
                "visit_province": "ขอนแก่น", "bus_fare": 300}"#,
        )
        .unwrap();
        state.store().insert(employee).unwrap();
        let router = create_router(state);

        let response = router
            .oneshot(json_request(
                "POST",
                "/api/calculate/family-visit",
                r#"{"year": 2568}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let report: AllowanceReport<FamilyVisitLine> =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.total, Decimal::from(2400));
    }

    #[tokio::test]
    async fn test_company_trip_without_destination_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/api/calculate/company-trip", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
