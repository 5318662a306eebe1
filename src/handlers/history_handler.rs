use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::session_id,
    models::dto::response::{HistoryEntryDto, HistoryResponseDto},
};

#[get("/api/history")]
pub async fn get_history(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let session_id = session_id(&req);
    let batches = state.history_service.list(&session_id).await?;
    Ok(HttpResponse::Ok().json(HistoryResponseDto::new(&session_id, batches)))
}

#[get("/api/history/{run}")]
pub async fn get_history_run(
    state: web::Data<AppState>,
    req: HttpRequest,
    run: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let session_id = session_id(&req);
    let run = run.into_inner();
    let batch = state.history_service.get_run(&session_id, run).await?;
    Ok(HttpResponse::Ok().json(HistoryEntryDto { run, batch }))
}
