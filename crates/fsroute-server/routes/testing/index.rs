use axum::Json;
use fsroute::RouteModule;
use serde_json::{json, Value};

use crate::state::AppState;

pub fn route() -> RouteModule<AppState> {
    RouteModule::new()
        .handler(testing)
        .options(json!({ "tags": ["testing"], "summary": "/testing" }))
}

async fn testing() -> Json<Value> {
    Json(json!({ "message": "GET /testing" }))
}
