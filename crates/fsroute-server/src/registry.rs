//! Route registries generated by build.rs from `routes/` and `routes-admin/`

use crate::process::ProcessType;
use crate::state::AppState;
use fsroute::StaticRegistry;

pub mod main_routes {
    include!(concat!(env!("OUT_DIR"), "/main_routes.rs"));
}

pub mod admin_routes {
    include!(concat!(env!("OUT_DIR"), "/admin_routes.rs"));
}

/// Registry serving a process's routes directory
pub fn for_process(kind: ProcessType) -> StaticRegistry<AppState> {
    match kind {
        ProcessType::Main => main_routes::registry(),
        ProcessType::Admin => admin_routes::registry(),
        ProcessType::Worker => StaticRegistry::new(),
    }
}
