// HTTP request handlers
use crate::domain::units::Units;
use crate::presentation::api_error::ApiError;
use crate::presentation::app_state::AppState;
use crate::presentation::ip_json::well_ip_to_json;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/api/:wa", get(get_well_ip))
        .with_state(state)
}

#[derive(Deserialize)]
pub struct UnitsQuery {
    pub units: Option<String>,
}

/// Landing page with API usage and the data watermark
pub async fn landing(State(state): State<Arc<AppState>>) -> Html<String> {
    let watermark = state.ip_service.most_recent_prod_period();
    let body = format!(
        "<html>\
         <body style='padding: 10px;'>\
         <h2>Petro-IP API</h2>\
         <p>Initial production (IP30, 90, 180, 365) calculated for wells in British \
         Columbia. IP values are interpolated between monthly reported production totals. \
         Null values indicate insufficient cumulative producing days or missing data. \
         Older wells may have volume reported without producing days reported for the \
         same period in which case IP values cannot be calculated.</p>\
         <a href='/api/39167?units=field'>GET /api/{{wa}}?units={{units}}</a>\
         <p>Required: {{wa}} - British Columbia well authorization number</p>\
         <p>Optional: units={{units}} - metric or field, default value is metric</p>\
         <p>BCOGC production data current to {watermark}</p>\
         </body>\
         </html>"
    );
    Html(body)
}

/// Look up one well's IP summary by WA number
pub async fn get_well_ip(
    Path(wa): Path<String>,
    Query(query): Query<UnitsQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    if wa.len() != 5 || !wa.chars().all(|c| c.is_ascii_digit()) {
        return Err(ApiError::InvalidWa);
    }
    let units = match query.units.as_deref() {
        None => Units::Metric,
        Some(raw) => Units::parse(raw).ok_or(ApiError::InvalidUnits)?,
    };

    let well_ip = state.ip_service.get(&wa).ok_or(ApiError::WaNotFound)?;
    Ok(Json(well_ip_to_json(well_ip, units)))
}
