use actix_web::{http::header::CONTENT_TYPE, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::session_id,
    middleware::get_request_id,
    models::dto::request::StudyQuery,
};

/// Runs the study pipeline over the uploaded document in the request body.
/// The body's `Content-Type` selects the extractor.
#[post("/api/study")]
pub async fn submit_study(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<StudyQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    if body.is_empty() {
        return Err(AppError::ValidationError(
            "Please upload your document.".to_string(),
        ));
    }

    let declared_mime = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let session_id = session_id(&req);

    log::info!(
        "Study request {} for session '{}': {} bytes of '{}'",
        get_request_id(&req).unwrap_or_default(),
        session_id,
        body.len(),
        declared_mime
    );

    let run = state
        .study_service
        .submit(
            &session_id,
            body,
            &declared_mime,
            query.page_expression(),
            query.question(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(run.into_response(&session_id)?))
}
