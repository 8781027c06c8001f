//! Request handler for the production-plan endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{info, warn};

use super::AppState;
use super::types::ErrorResponse;
use crate::plan::{self, Payload, PlantProduction};

/// Tolerance for reporting a plan that misses the requested load (MW).
const LOAD_MATCH_TOLERANCE_MW: f64 = 1e-6;

/// Computes a production plan for the posted payload.
///
/// `POST /productionplan` → 200 + `Vec<PlantProduction>` JSON
/// Invalid payload → 400 + `ErrorResponse`
///
/// Every successful calculation is also broadcast to WebSocket subscribers
/// as one text message carrying the serialized request and response.
pub async fn post_production_plan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Payload>,
) -> impl IntoResponse {
    info!(
        load = payload.load,
        plants = payload.powerplants.len(),
        "received production-plan request"
    );

    let report = match plan::compute_plan(&payload) {
        Ok(report) => report,
        Err(e) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ));
        }
    };

    if report.delta_mw().abs() > LOAD_MATCH_TOLERANCE_MW {
        warn!(
            requested_mw = report.requested_mw,
            achieved_mw = report.achieved_mw,
            overshoot_mw = report.overshoot_mw,
            "plan does not match requested load exactly"
        );
    }

    let productions = report.to_productions();
    state.notify(notification_text(&payload, &productions));

    Ok(Json(productions))
}

/// Serializes request and response into the single opaque text payload
/// handed to notification subscribers.
fn notification_text(payload: &Payload, productions: &[PlantProduction]) -> String {
    serde_json::json!({
        "request": payload,
        "response": productions,
    })
    .to_string()
}
