//! JSON pager model endpoint.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use pagewise_core::pager::{
    AjaxOptions, InsertionMode, LinkDescriptor, LinkSetBuilder, PageWindow, PagingRequest,
    PagingSummary, QueryParams, SummaryMode,
};
use pagewise_shared::{AppError, PageRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;

/// Creates the pager routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/pager", get(compute_pager))
}

/// Query parameters for computing a pager.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerQuery {
    /// Total number of items (required).
    pub total_items: Option<u64>,
    /// Requested page (default: 1).
    pub page: Option<u32>,
    /// Items per page (default: configured page size).
    pub page_size: Option<u32>,
    /// Page links in the window (default: configured value, capped at the
    /// configured maximum).
    pub pages_to_display: Option<u32>,
    /// Path the links point at (default: `/`).
    pub base_url: Option<String>,
    /// Extra query string carried into every link, e.g. `sort=name`.
    pub query: Option<String>,
    /// Summary flavour: `page_items` or `page_numbers`.
    pub mode: Option<SummaryMode>,
    /// Element id to update; turns on AJAX attributes.
    pub update_target_id: Option<String>,
    /// How the AJAX response is inserted (default: `replace`).
    pub insertion_mode: Option<InsertionMode>,
}

/// Response for a computed pager.
#[derive(Debug, Serialize)]
pub struct PagerResponse {
    /// Page window.
    pub window: PageWindow,
    /// Links in display order.
    pub links: Vec<LinkDescriptor>,
    /// Paging summary text.
    pub summary: String,
}

/// GET `/pager` - Compute the window, links and summary for the given numbers.
async fn compute_pager(
    State(state): State<AppState>,
    query: Result<Query<PagerQuery>, QueryRejection>,
) -> Result<Json<PagerResponse>, ApiError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let total_items = query
        .total_items
        .ok_or_else(|| AppError::Validation("totalItems is required".to_string()))?;

    let page_request = PageRequest::new(
        query.page.unwrap_or(1),
        query.page_size.unwrap_or(state.pager.default_page_size),
    )
    .normalized(state.pager.default_page_size, state.pager.max_page_size);

    let params = query
        .query
        .as_deref()
        .map(QueryParams::parse)
        .unwrap_or_default();

    let pages_to_display = state
        .pager
        .clamp_pages_to_display(query.pages_to_display.unwrap_or(state.pager.pages_to_display));

    let request = PagingRequest::new(
        query.base_url.as_deref().unwrap_or("/"),
        page_request.page,
        page_request.page_size,
        total_items,
    )
    .with_pages_to_display(pages_to_display)
    .with_params(params);

    let mut builder = LinkSetBuilder::new(state.pager_options());
    if let Some(id) = query.update_target_id.as_deref() {
        let ajax = AjaxOptions::updating(id)
            .with_insertion_mode(query.insertion_mode.unwrap_or_default());
        builder = builder.with_ajax(&ajax);
    }
    let model = builder.paginate(&request);

    let summary_page = if model.window.suppress {
        page_request.page
    } else {
        u32::try_from(model.window.current_page).unwrap_or(page_request.page)
    };
    let summary = PagingSummary::text(
        summary_page,
        page_request.page_size,
        total_items,
        query.mode.unwrap_or_default(),
    );

    debug!(
        total_items,
        page = page_request.page,
        total_pages = model.window.total_pages,
        "Computed pager"
    );

    Ok(Json(PagerResponse {
        window: model.window,
        links: model.links,
        summary,
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use pagewise_core::catalog::InMemoryDataService;
    use pagewise_shared::PagerConfig;
    use rstest::rstest;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let state = AppState::new(
            Arc::new(InMemoryDataService::default()),
            PagerConfig::default(),
        );
        let app = Router::new().merge(routes()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_pager_middle_page() {
        let (status, json) =
            get_json("/pager?totalItems=50&page=5&pageSize=5&baseUrl=/items").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["window"]["total_pages"], 10);
        assert_eq!(json["window"]["first_visible_page"], 3);
        assert_eq!(json["window"]["last_visible_page"], 7);
        assert_eq!(json["window"]["skip_back_target"], 2);
        assert_eq!(json["window"]["skip_forward_target"], 8);
        assert_eq!(json["summary"], "Showing 21 – 25 of 50 items");

        let links = json["links"].as_array().unwrap();
        assert_eq!(links.len(), 11);
        assert_eq!(links[0]["kind"], "first");
        assert_eq!(links[0]["url"], "/items?page=1&pageSize=5");
        assert_eq!(links[2]["kind"], "skip_back");
        assert_eq!(links[2]["target_page"], 2);
    }

    #[tokio::test]
    async fn test_pager_clamps_page_and_uses_page_mode() {
        let (_, json) =
            get_json("/pager?totalItems=50&page=6&pageSize=10&mode=page_numbers").await;

        assert_eq!(json["window"]["current_page"], 5);
        assert_eq!(json["summary"], "Page 5 of 5");
        let next = json["links"]
            .as_array()
            .unwrap()
            .iter()
            .find(|l| l["kind"] == "next")
            .unwrap();
        assert_eq!(next["enabled"], false);
        assert!(next["url"].is_null());
    }

    #[tokio::test]
    async fn test_pager_carries_extra_query_and_ajax_attributes() {
        let (_, json) = get_json(
            "/pager?totalItems=30&pageSize=10&query=sort%3Dname&updateTargetId=grid",
        )
        .await;

        let links = json["links"].as_array().unwrap();
        let next = links.iter().find(|l| l["kind"] == "next").unwrap();
        assert_eq!(next["url"], "/?sort=name&page=2&pageSize=10");
        assert_eq!(next["attributes"][0], serde_json::json!(["data-ajax", "true"]));
        assert!(
            next["attributes"]
                .as_array()
                .unwrap()
                .contains(&serde_json::json!(["data-ajax-update", "#grid"]))
        );
    }

    #[tokio::test]
    async fn test_pager_uses_requested_insertion_mode() {
        let (_, json) =
            get_json("/pager?totalItems=30&updateTargetId=grid&insertionMode=insert-after").await;

        let next = json["links"]
            .as_array()
            .unwrap()
            .iter()
            .find(|l| l["kind"] == "next")
            .unwrap();
        assert!(
            next["attributes"]
                .as_array()
                .unwrap()
                .contains(&serde_json::json!(["data-ajax-mode", "after"]))
        );
    }

    #[rstest]
    #[case("7", 7)]
    #[case("200000", 25)]
    #[case("4294967295", 25)]
    #[tokio::test]
    async fn test_pager_caps_pages_to_display(#[case] requested: &str, #[case] expected: u64) {
        let uri = format!("/pager?totalItems=1000000000000&pageSize=1&pagesToDisplay={requested}");
        let (status, json) = get_json(&uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["window"]["first_visible_page"], 1);
        assert_eq!(json["window"]["last_visible_page"], expected);
        let page_links = json["links"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|l| l["kind"] == "page")
            .count();
        assert_eq!(u64::try_from(page_links).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_pager_without_items_is_empty() {
        let (status, json) = get_json("/pager?totalItems=0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["window"]["suppress"], true);
        assert_eq!(json["links"].as_array().map(Vec::len), Some(0));
    }

    #[rstest]
    #[case("/pager")]
    #[case("/pager?page=2")]
    #[case("/pager?totalItems=abc")]
    #[tokio::test]
    async fn test_pager_rejects_missing_or_bad_total(#[case] uri: &str) {
        let (status, json) = get_json(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }
}
