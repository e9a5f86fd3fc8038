use fsroute::RouteModule;
use serde_json::json;

use crate::state::AppState;

pub fn route() -> RouteModule<AppState> {
    RouteModule::new()
        .handler(|| async { "OK" })
        .options(json!({ "tags": ["Admin", "Health"], "summary": "Admin health check" }))
}
