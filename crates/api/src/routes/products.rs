//! Product listing pages.

use axum::{Router, extract::State, routing::get};
use maud::Markup;
use pagewise_core::catalog::Product;
use pagewise_core::pager::{
    AjaxOptions, LinkSetBuilder, PagerModel, PagingRequest, PagingSummary, SummaryMode,
};
use pagewise_shared::PagedList;
use tracing::debug;

use crate::AppState;
use crate::extractors::PagingQuery;
use crate::render::{self, GRID_ID, LOADING_ID};

/// Target of the AJAX pager links.
const AJAX_PAGER_PATH: &str = "/products/ajax-pager";

/// Creates the product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/products", get(index))
        .route("/products/pager", get(pager))
        .route("/products/ajax", get(ajax_grid))
        .route(AJAX_PAGER_PATH, get(ajax_pager))
}

/// Everything a product page renders.
struct ProductView {
    products: PagedList<Product>,
    pager: PagerModel,
    summary: PagingSummary,
}

impl ProductView {
    fn grid(&self) -> Markup {
        render::product_grid(&self.products, &self.pager, &self.summary)
    }
}

fn product_view(
    state: &AppState,
    query: &PagingQuery,
    base_url: &str,
    ajax: Option<&AjaxOptions>,
) -> ProductView {
    let products = state
        .data_service
        .products_paged(query.page_request(&state.pager));

    let request = PagingRequest::new(
        base_url,
        products.current_page,
        products.page_size,
        products.total_item_count,
    )
    .with_pages_to_display(
        state
            .pager
            .clamp_pages_to_display(state.pager.pages_to_display),
    )
    .with_params(query.params.clone());

    let mut builder = LinkSetBuilder::new(state.pager_options());
    if let Some(ajax) = ajax {
        builder = builder.with_ajax(ajax);
    }
    let pager = builder.paginate(&request);

    let summary = PagingSummary::new(
        products.current_page,
        products.page_size,
        products.total_item_count,
        SummaryMode::PageItems,
    );

    debug!(
        base_url,
        page = products.current_page,
        page_size = products.page_size,
        total_pages = pager.window.total_pages,
        links = pager.links.len(),
        ajax = ajax.is_some(),
        "Built product pager"
    );

    ProductView {
        products,
        pager,
        summary,
    }
}

fn grid_ajax_options() -> AjaxOptions {
    AjaxOptions::updating(GRID_ID)
        .with_method("Get")
        .with_loading_element(LOADING_ID, 200)
}

/// GET `/products` - Product list with a plain pager.
async fn index(State(state): State<AppState>, query: PagingQuery) -> Markup {
    let view = product_view(&state, &query, "/products", None);
    render::product_page("Products", &view.grid(), false)
}

/// GET `/products/pager` - Same list, links pointing back at this route.
async fn pager(State(state): State<AppState>, query: PagingQuery) -> Markup {
    let view = product_view(&state, &query, "/products/pager", None);
    render::product_page("Products", &view.grid(), false)
}

/// GET `/products/ajax` - Product list whose pager swaps the grid in place.
async fn ajax_grid(State(state): State<AppState>, query: PagingQuery) -> Markup {
    let view = product_view(&state, &query, AJAX_PAGER_PATH, Some(&grid_ajax_options()));
    render::product_page("Products (AJAX)", &view.grid(), true)
}

/// GET `/products/ajax-pager` - Grid partial for XHR requests, full AJAX page
/// otherwise.
async fn ajax_pager(State(state): State<AppState>, query: PagingQuery) -> Markup {
    let view = product_view(&state, &query, AJAX_PAGER_PATH, Some(&grid_ajax_options()));
    if query.is_ajax {
        view.grid()
    } else {
        render::product_page("Products (AJAX)", &view.grid(), true)
    }
}
