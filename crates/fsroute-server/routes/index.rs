use axum::response::Redirect;
use fsroute::RouteModule;
use serde_json::json;

use crate::state::AppState;

pub fn route() -> RouteModule<AppState> {
    RouteModule::new()
        .handler(|| async { Redirect::to("/health") })
        .options(json!({
            "tags": ["Root"],
            "summary": "Redirects to the health check"
        }))
}
