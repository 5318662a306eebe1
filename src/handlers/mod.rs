pub mod health_handler;
pub mod history_handler;
pub mod study_handler;

use actix_web::{web, HttpRequest};

use crate::models::dto::request::{DEFAULT_SESSION_ID, SESSION_HEADER};

pub use health_handler::health_check;
pub use history_handler::{get_history, get_history_run};
pub use study_handler::submit_study;

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(submit_study)
        .service(get_history)
        .service(get_history_run);
}

/// Session the request belongs to, from the `x-session-id` header.
pub fn session_id(req: &HttpRequest) -> String {
    req.headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION_ID)
        .to_string()
}
