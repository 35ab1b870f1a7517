//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::directory::DirectoryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/stations", get(list_stations))
        .route("/v1/stations/:id", get(station_schedule))
        .route("/v1/stations/:id/estimates", get(station_estimates))
        .route("/v1/stations/:id/facilities", get(station_facilities))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stations.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    Ok(Json(state.directory.list_stations().await?))
}

/// Upcoming departures from a station.
async fn station_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ScheduleResponse>>, AppError> {
    Ok(Json(state.directory.schedule_for_station(&id).await?))
}

/// Fare estimates.
async fn station_estimates(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StationEstimateResponse>>, AppError> {
    Ok(Json(state.directory.estimates_for_station(&id).await?))
}

/// Facilities.
async fn station_facilities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StationFacilityResponse>>, AppError> {
    Ok(Json(state.directory.facilities_for_station(&id).await?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::StationNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            // Malformed timetables come from the feed, not the client.
            DirectoryError::InvalidTimeFormat(_) | DirectoryError::Upstream(_) => {
                AppError::BadGateway {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => {
                warn!(%message, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::BadGateway { message } => {
                error!(%message, "upstream failure");
                (StatusCode::BAD_GATEWAY, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StationDirectory;
    use crate::upstream::FixtureClient;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app_with(body: &str) -> (TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stasiuns.json");
        std::fs::write(&path, body).unwrap();
        let directory = StationDirectory::new(FixtureClient::new(&path).unwrap());
        (dir, create_router(AppState::new(directory)))
    }

    fn app() -> (TempDir, Router) {
        let snapshot = json!([
            {
                "nid": "1",
                "title": "Stasiun Lebak Bulus Grab",
                "jadwal_hi_biasa": "",
                "jadwal_lb_biasa": "",
                "estimasi": [{"stasiun_nid": "2", "tarif": "Rp. 3.000", "waktu": "3"}],
                "fasilitas": []
            },
            {
                "nid": "2",
                "title": "Stasiun Fatmawati Indomaret",
                "jadwal_hi_biasa": "bad",
                "jadwal_lb_biasa": "",
                "estimasi": [{"stasiun_nid": "1", "tarif": "Rp. 3.000", "waktu": "3"}],
                "fasilitas": [{"nid": "9", "title": "Lift", "jenis_fasilitas": "Aksesibilitas", "cover": "/lift.jpg"}]
            }
        ]);
        app_with(&snapshot.to_string())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_check() {
        let (_dir, app) = app();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn list_stations_json() {
        let (_dir, app) = app();
        let (status, body) = get(app, "/v1/stations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": "1", "name": "Stasiun Lebak Bulus Grab"},
                {"id": "2", "name": "Stasiun Fatmawati Indomaret"}
            ])
        );
    }

    #[tokio::test]
    async fn empty_schedule_is_empty_array() {
        let (_dir, app) = app();
        let (status, body) = get(app, "/v1/stations/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn unknown_station_is_404() {
        let (_dir, app) = app();
        let (status, body) = get(app, "/v1/stations/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "station not found: 42"}));
    }

    #[tokio::test]
    async fn bad_timetable_is_502() {
        let (_dir, app) = app();
        let (status, body) = get(app, "/v1/stations/2").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({"error": "invalid time format: bad"}));
    }

    #[tokio::test]
    async fn estimates_json() {
        let (_dir, app) = app();
        let (status, body) = get(app, "/v1/stations/1/estimates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "station": "Stasiun Fatmawati Indomaret",
                "estimates": [
                    {"station": "Stasiun Lebak Bulus Grab", "fare": "Rp. 3.000", "time": "3"}
                ]
            }])
        );
    }

    #[tokio::test]
    async fn facilities_json() {
        let (_dir, app) = app();
        let (status, body) = get(app, "/v1/stations/2/facilities").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"station": "Stasiun Lebak Bulus Grab", "Facilities": []}])
        );
    }

    #[tokio::test]
    async fn broken_feed_is_502() {
        let (_dir, app) = app_with("not json");
        let (status, body) = get(app, "/v1/stations").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().starts_with("JSON parse error"));
    }
}
