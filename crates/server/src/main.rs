// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use clap::Parser;
use fleet_report_api::{
    ApiError, DeletePresetResponse, EmailReportRequest, EmailReportResponse, ExportReportResponse,
    ListPresetsResponse, LoadRecordRequest, LoadRecordResponse, LoggingMailer,
    PreviewReportResponse, ReportMailer, ReportQueryRequest, RosterPeriodsResponse,
    SavePresetRequest, SavePresetResponse, affected_roster_periods, delete_preset, email_report,
    export_report, list_presets, list_roster_periods, load_record, preview_report, save_preset,
};
use fleet_report_persistence::SqliteStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Fleet Report Server - HTTP server for the Fleet Report System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store is wrapped in a Mutex to allow safe concurrent access; the
/// mailer is the configured transport behind the dispatch seam.
#[derive(Clone)]
struct AppState {
    /// The data source for report records and presets.
    store: Arc<Mutex<SqliteStore>>,
    /// The mail transport used by the email endpoint.
    mailer: Arc<dyn ReportMailer + Send + Sync>,
}

/// Query parameters for listing presets.
#[derive(Debug, Deserialize)]
struct ListPresetsQuery {
    /// The report type wire name.
    report_type: String,
}

/// Query parameters for listing roster periods.
#[derive(Debug, Deserialize)]
struct RosterPeriodsQuery {
    /// First code year to include.
    start_year: u16,
    /// Last code year to include.
    end_year: u16,
}

/// Query parameters for the roster period reverse lookup.
#[derive(Debug, Deserialize)]
struct AffectedPeriodsQuery {
    /// Range start (ISO 8601).
    start_date: String,
    /// Range end (ISO 8601, inclusive).
    end_date: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::RequestFailed { .. } => Self {
                status: StatusCode::BAD_GATEWAY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

/// The reference date report queries are anchored to.
fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Handler for POST `/reports/{report_type}/preview` endpoint.
///
/// Fetches one page of a report, arranged for display.
async fn handle_preview_report(
    AxumState(state): AxumState<AppState>,
    Path(report_type): Path<String>,
    Json(req): Json<ReportQueryRequest>,
) -> Result<Json<PreviewReportResponse>, HttpError> {
    info!(report_type = %report_type, "Handling preview_report request");

    let store = state.store.lock().await;
    let response: PreviewReportResponse = preview_report(&store, &report_type, &req, today())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/reports/{report_type}/export` endpoint.
///
/// Renders the full dataset the preview of the same form pages through.
async fn handle_export_report(
    AxumState(state): AxumState<AppState>,
    Path(report_type): Path<String>,
    Json(req): Json<ReportQueryRequest>,
) -> Result<Json<ExportReportResponse>, HttpError> {
    info!(report_type = %report_type, "Handling export_report request");

    let store = state.store.lock().await;
    let response: ExportReportResponse = export_report(&store, &report_type, &req, today())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/reports/{report_type}/email` endpoint.
///
/// Renders the full dataset and dispatches it to validated recipients.
async fn handle_email_report(
    AxumState(state): AxumState<AppState>,
    Path(report_type): Path<String>,
    Json(req): Json<EmailReportRequest>,
) -> Result<Json<EmailReportResponse>, HttpError> {
    info!(report_type = %report_type, "Handling email_report request");

    let store = state.store.lock().await;
    let response: EmailReportResponse =
        email_report(&store, state.mailer.as_ref(), &report_type, &req, today())?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/reports/{report_type}/records` endpoint.
///
/// Loads one report row into the data source.
async fn handle_load_record(
    AxumState(state): AxumState<AppState>,
    Path(report_type): Path<String>,
    Json(req): Json<LoadRecordRequest>,
) -> Result<Json<LoadRecordResponse>, HttpError> {
    info!(
        report_type = %report_type,
        pilot_name = %req.pilot_name,
        "Handling load_record request"
    );

    let store = state.store.lock().await;
    let response: LoadRecordResponse = load_record(&store, &report_type, &req)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/presets` endpoint.
///
/// Saves a named filter preset.
async fn handle_save_preset(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SavePresetRequest>,
) -> Result<Json<SavePresetResponse>, HttpError> {
    info!(
        report_type = %req.report_type,
        name = %req.name,
        "Handling save_preset request"
    );

    let store = state.store.lock().await;
    let response: SavePresetResponse = save_preset(&store, &req)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/presets` endpoint.
///
/// Lists presets for a report type, ordered by name.
async fn handle_list_presets(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListPresetsQuery>,
) -> Result<Json<ListPresetsResponse>, HttpError> {
    info!(report_type = %query.report_type, "Handling list_presets request");

    let store = state.store.lock().await;
    let response: ListPresetsResponse = list_presets(&store, &query.report_type)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for DELETE `/presets/{preset_id}` endpoint.
///
/// Deletes a preset by id.
async fn handle_delete_preset(
    AxumState(state): AxumState<AppState>,
    Path(preset_id): Path<i64>,
) -> Result<Json<DeletePresetResponse>, HttpError> {
    info!(preset_id = preset_id, "Handling delete_preset request");

    let store = state.store.lock().await;
    let response: DeletePresetResponse = delete_preset(&store, preset_id)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for GET `/roster_periods` endpoint.
///
/// Lists all roster periods whose code year falls in the given range.
#[allow(clippy::unused_async)]
async fn handle_list_roster_periods(
    Query(query): Query<RosterPeriodsQuery>,
) -> Result<Json<RosterPeriodsResponse>, HttpError> {
    info!(
        start_year = query.start_year,
        end_year = query.end_year,
        "Handling list_roster_periods request"
    );

    let response: RosterPeriodsResponse = list_roster_periods(query.start_year, query.end_year)?;
    Ok(Json(response))
}

/// Handler for GET `/roster_periods/affected` endpoint.
///
/// Reverse lookup: every roster period intersecting the given date range.
#[allow(clippy::unused_async)]
async fn handle_affected_roster_periods(
    Query(query): Query<AffectedPeriodsQuery>,
) -> Result<Json<RosterPeriodsResponse>, HttpError> {
    info!(
        start_date = %query.start_date,
        end_date = %query.end_date,
        "Handling affected_roster_periods request"
    );

    let response: RosterPeriodsResponse =
        affected_roster_periods(&query.start_date, &query.end_date)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/{report_type}/preview", post(handle_preview_report))
        .route("/reports/{report_type}/export", post(handle_export_report))
        .route("/reports/{report_type}/email", post(handle_email_report))
        .route("/reports/{report_type}/records", post(handle_load_record))
        .route("/presets", post(handle_save_preset))
        .route("/presets", get(handle_list_presets))
        .route("/presets/{preset_id}", delete(handle_delete_preset))
        .route("/roster_periods", get(handle_list_roster_periods))
        .route(
            "/roster_periods/affected",
            get(handle_affected_roster_periods),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Fleet Report Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: SqliteStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStore::new_in_memory()?
    };

    let state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        mailer: Arc::new(LoggingMailer::new()),
    };

    // Build router
    let app: Router = build_router(state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use fleet_report_domain::{DateRange, RosterPeriodCode};
    use tower::ServiceExt;

    /// Helper to create test app state with an in-memory store.
    fn create_test_app_state() -> AppState {
        let store: SqliteStore =
            SqliteStore::new_in_memory().expect("Failed to create in-memory store");
        AppState {
            store: Arc::new(Mutex::new(store)),
            mailer: Arc::new(LoggingMailer::new()),
        }
    }

    /// Helper to create a leave request load payload.
    fn create_test_load_request(pilot_name: &str, rank: &str) -> LoadRecordRequest {
        LoadRecordRequest {
            pilot_name: pilot_name.to_string(),
            employee_id: format!("EMP-{pilot_name}"),
            rank: rank.to_string(),
            category: Some(String::from("Annual")),
            status: Some(String::from("PENDING")),
            start_date: Some(String::from("2026-02-01")),
            end_date: Some(String::from("2026-02-05")),
            roster_period: None,
            check_type: None,
            expiry_date: None,
        }
    }

    /// Helper to POST a JSON body to the app.
    async fn post_json<T: serde::Serialize>(app: Router, uri: &str, body: &T) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    /// Helper to GET a URI from the app.
    async fn get_uri(app: Router, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_of<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_load_then_preview_round_trip() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        let load_response = post_json(
            app.clone(),
            "/reports/leave-requests/records",
            &create_test_load_request("Alpha", "Captain"),
        )
        .await;
        assert_eq!(load_response.status(), HttpStatusCode::OK);
        let loaded: LoadRecordResponse = body_of(load_response).await;
        assert!(loaded.record_id > 0);

        let preview_response = post_json(
            app,
            "/reports/leave-requests/preview",
            &ReportQueryRequest::default(),
        )
        .await;
        assert_eq!(preview_response.status(), HttpStatusCode::OK);
        let preview: PreviewReportResponse = body_of(preview_response).await;

        assert_eq!(preview.pagination.total_records, 1);
        assert_eq!(preview.records.len(), 1);
        assert_eq!(preview.records[0].pilot_name, "Alpha");
    }

    #[tokio::test]
    async fn test_unknown_report_type_returns_bad_request() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        let response = post_json(
            app,
            "/reports/payroll/preview",
            &ReportQueryRequest::default(),
        )
        .await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        let error: ErrorResponse = body_of(response).await;
        assert!(error.error);
        assert!(error.message.contains("report type"));
    }

    #[tokio::test]
    async fn test_export_covers_all_pages() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        for name in ["Alpha", "Bravo", "Charlie"] {
            let response = post_json(
                app.clone(),
                "/reports/leave-requests/records",
                &create_test_load_request(name, "Captain"),
            )
            .await;
            assert_eq!(response.status(), HttpStatusCode::OK);
        }

        let request = ReportQueryRequest {
            page: Some(1),
            page_size: Some(2),
            ..ReportQueryRequest::default()
        };
        let response = post_json(app, "/reports/leave-requests/export", &request).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let export: ExportReportResponse = body_of(response).await;
        assert_eq!(export.total_records, 3);
        assert!(export.document.contains("Alpha"));
        assert!(export.document.contains("Charlie"));
    }

    #[tokio::test]
    async fn test_preset_round_trip_over_http() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        let save_request = SavePresetRequest {
            report_type: String::from("leave-requests"),
            name: String::from("January"),
            filters: fleet_report_domain::ReportFilters {
                date_range: Some(
                    DateRange::new(
                        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
                    )
                    .unwrap(),
                ),
                ..fleet_report_domain::ReportFilters::default()
            },
        };
        let save_response = post_json(app.clone(), "/presets", &save_request).await;
        assert_eq!(save_response.status(), HttpStatusCode::OK);
        let saved: SavePresetResponse = body_of(save_response).await;

        let list_response = get_uri(app.clone(), "/presets?report_type=leave-requests").await;
        assert_eq!(list_response.status(), HttpStatusCode::OK);
        let listed: ListPresetsResponse = body_of(list_response).await;
        assert_eq!(listed.presets.len(), 1);
        assert_eq!(listed.presets[0].name, "January");

        let delete_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/presets/{}", saved.preset_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete_response.status(), HttpStatusCode::OK);

        let missing_response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/presets/{}", saved.preset_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(missing_response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_conflicting_preset_filters_are_unprocessable() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        let save_request = SavePresetRequest {
            report_type: String::from("leave-requests"),
            name: String::from("Conflicted"),
            filters: fleet_report_domain::ReportFilters {
                date_range: Some(
                    DateRange::new(
                        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
                    )
                    .unwrap(),
                ),
                roster_periods: vec![RosterPeriodCode::new(1, 2026).unwrap()],
                ..fleet_report_domain::ReportFilters::default()
            },
        };
        let response = post_json(app, "/presets", &save_request).await;

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_roster_periods_listing() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        let response = get_uri(app, "/roster_periods?start_year=2026&end_year=2026").await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let listed: RosterPeriodsResponse = body_of(response).await;
        assert_eq!(listed.periods.len(), 13);
    }

    #[tokio::test]
    async fn test_affected_roster_periods_lookup() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        let response = get_uri(
            app,
            "/roster_periods/affected?start_date=2026-01-28&end_date=2026-02-05",
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let listed: RosterPeriodsResponse = body_of(response).await;
        assert_eq!(listed.periods.len(), 2);
    }

    #[tokio::test]
    async fn test_email_with_invalid_recipients_is_bad_request() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        let request = EmailReportRequest {
            recipients: String::from("not-an-email"),
            ..EmailReportRequest::default()
        };
        let response = post_json(app, "/reports/leave-requests/email", &request).await;

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_email_dispatch_succeeds() {
        let state: AppState = create_test_app_state();
        let app: Router = build_router(state);

        post_json(
            app.clone(),
            "/reports/leave-requests/records",
            &create_test_load_request("Alpha", "Captain"),
        )
        .await;

        let request = EmailReportRequest {
            recipients: String::from("ops@example.com"),
            ..EmailReportRequest::default()
        };
        let response = post_json(app, "/reports/leave-requests/email", &request).await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let emailed: EmailReportResponse = body_of(response).await;
        assert_eq!(emailed.accepted, vec![String::from("ops@example.com")]);
        assert_eq!(emailed.total_records, 1);
        assert_eq!(emailed.message, "Report dispatched to 1 of 1 recipients");
    }
}
