use axum::{Router, response::Html, routing::get};

use super::server::app_state::AppState;

const INDEX_PAGE: &str = include_str!("../../../templates/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub fn index_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}
