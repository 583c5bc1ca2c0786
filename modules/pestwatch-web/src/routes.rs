use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::debug;

use pestwatch_common::{Config, HotelDirectory, HotelFilter, HotelStatus};

use crate::components::{
    hotel_to_view, render_hotel_detail, render_hotel_not_found, render_hotels_list,
    render_report, seo::hotel_json_ld,
};
use crate::disqus::{render_comments, DisqusParams};

// --- App State ---

pub struct AppState {
    pub directory: HotelDirectory,
    pub site_url: String,
    pub disqus_shortname: Option<String>,
    pub report_form_url: String,
}

impl AppState {
    pub fn new(config: &Config, directory: HotelDirectory) -> Self {
        Self {
            directory,
            site_url: config.site_url.clone(),
            disqus_shortname: config.disqus_shortname.clone(),
            report_form_url: config.report_form_url.clone(),
        }
    }

    fn hotel_url(&self, id: &str) -> String {
        format!("{}/hotels/{}", self.site_url, urlencoding::encode(id))
    }
}

// --- Router ---

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(hotels_page))
        .route("/hotels/{id}", get(hotel_detail_page))
        .route("/report", get(report_page))
        .route("/api/hotels", get(api_hotels))
        .route("/api/hotels/{id}", get(api_hotel_detail))
        .route("/health", get(health))
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer-when-downgrade"),
        ))
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

// --- Handlers ---

#[derive(Deserialize)]
struct ListQuery {
    q: Option<String>,
    status: Option<String>,
}

async fn hotels_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> impl IntoResponse {
    let status = params.status.as_deref().and_then(HotelStatus::parse);
    let filter = HotelFilter {
        query: params.q.clone(),
        status,
    };
    let views: Vec<_> = state
        .directory
        .search(&filter)
        .into_iter()
        .map(hotel_to_view)
        .collect();

    Html(render_hotels_list(
        &views,
        params.q.as_deref().unwrap_or_default(),
        status,
    ))
}

async fn hotel_detail_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Some(hotel) = state.directory.find(&id) else {
        debug!(id = %id, "Hotel not found");
        return (StatusCode::NOT_FOUND, Html(render_hotel_not_found()));
    };

    let page_url = state.hotel_url(&hotel.id);
    let comments = state.disqus_shortname.as_ref().map(|shortname| {
        render_comments(DisqusParams {
            shortname: shortname.clone(),
            url: page_url.clone(),
            identifier: hotel.id.clone(),
            title: hotel.name.clone(),
        })
    });

    let view = hotel_to_view(hotel);
    let structured_data = hotel_json_ld(hotel, &page_url);
    (
        StatusCode::OK,
        Html(render_hotel_detail(&view, &structured_data, comments.as_deref())),
    )
}

async fn report_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Html(render_report(&state.report_form_url))
}

async fn api_hotels(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.directory.all().to_vec())
}

async fn api_hotel_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.directory.find(&id) {
        Some(hotel) => Json(hotel.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Hotel not found" })),
        )
            .into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}
