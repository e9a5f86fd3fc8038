use axum::Json;
use fsroute::RouteModule;
use serde_json::{json, Value};

use crate::state::AppState;

pub fn route() -> RouteModule<AppState> {
    RouteModule::new()
        .handler(|| async { Json(info()) })
        .options(json!({
            "tags": ["Admin"],
            "summary": "Admin root endpoint",
            "description": "Returns admin server information"
        }))
}

fn info() -> Value {
    json!({ "message": "Admin Server", "version": env!("CARGO_PKG_VERSION") })
}
