//! HTTP handler functions for the dashboard API.

use actix_web::{HttpResponse, web};
use dorset_dash_analytics::{aggregate, filter, options, series};
use dorset_dash_incident_models::RecordField;
use dorset_dash_server_models::{
    ApiForecastPoint, ApiHealth, ApiMapPoint, ApiSummary, ApiTrends, DashboardQueryParams,
};

use crate::AppState;

/// Forecast horizon used when the request does not name one, matching
/// the dashboard's 12-month forecast chart.
const DEFAULT_FORECAST_HORIZON: u32 = 12;

/// Top-N truncation for `/top-crimes`, matching the dashboard's Top 5
/// chart.
const DEFAULT_TOP_CRIMES: usize = 5;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/filters`
///
/// Returns the distinct value set per filter field, `"All"` first, for
/// populating the dashboard's selection controls.
pub async fn filters(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(options::filter_options(state.store.records()))
}

/// `GET /api/summary`
///
/// Returns the headline numbers for the summary cards, computed over the
/// full dataset.
pub async fn summary(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiSummary::from(aggregate::summary(state.store.records())))
}

/// `GET /api/distribution?field=<record field>`
///
/// Grouped counts of any record field over the filtered view. `limit`
/// truncates to the top N. An unknown field name is a client error.
pub async fn distribution(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let Some(field_name) = params.field.as_deref() else {
        return bad_request("missing required parameter: field");
    };
    let Ok(field) = field_name.parse::<RecordField>() else {
        log::debug!("Rejected distribution query for unknown field {field_name:?}");
        return bad_request(&format!("unknown record field: {field_name}"));
    };

    let view = filter::apply(state.store.records(), &params.criteria());
    let counts = params.limit.map_or_else(
        || aggregate::group_counts(&view, field),
        |limit| aggregate::top_n(&view, field, limit),
    );
    HttpResponse::Ok().json(counts)
}

/// `GET /api/top-crimes`
///
/// The most common crime types in the filtered view (default top 5).
pub async fn top_crimes(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let view = filter::apply(state.store.records(), &params.criteria());
    let limit = params.limit.unwrap_or(DEFAULT_TOP_CRIMES);
    HttpResponse::Ok().json(aggregate::top_n(&view, RecordField::CrimeType, limit))
}

/// `GET /api/trends`
///
/// Monthly counts in chronological order; `fill=true` materializes
/// zero-count months between the first and last period.
pub async fn trends(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let view = filter::apply(state.store.records(), &params.criteria());
    let monthly = series::monthly_series(&view);
    HttpResponse::Ok().json(ApiTrends::from_series(&monthly, params.fill.unwrap_or(false)))
}

/// `GET /api/map`
///
/// Filtered incidents that carry both coordinates, as scatter-map points.
pub async fn map_points(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let view = filter::apply(state.store.records(), &params.criteria());
    let points: Vec<ApiMapPoint> = view
        .iter()
        .filter_map(|record| ApiMapPoint::from_record(record))
        .collect();
    HttpResponse::Ok().json(points)
}

/// `GET /api/forecast`
///
/// Future monthly predictions from the configured forecaster (default
/// 12-month horizon).
pub async fn forecast(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let view = filter::apply(state.store.records(), &params.criteria());
    let monthly = series::monthly_series(&view);
    let horizon = params.horizon.unwrap_or(DEFAULT_FORECAST_HORIZON);
    let points: Vec<ApiForecastPoint> = state
        .forecaster
        .forecast(&monthly.points, horizon)
        .into_iter()
        .map(ApiForecastPoint::from)
        .collect();
    HttpResponse::Ok().json(points)
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
}
