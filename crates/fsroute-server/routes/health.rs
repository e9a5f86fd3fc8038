use fsroute::RouteModule;
use serde_json::json;

use crate::state::AppState;

pub fn route() -> RouteModule<AppState> {
    RouteModule::new()
        .method("get")
        .handler(|| async { "OK" })
        .options(json!({
            "tags": ["Health"],
            "summary": "Health check",
            "description": "Check if the server is running"
        }))
}
