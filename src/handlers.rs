use crate::state::AppState;
use crate::types::{ErrorDetail, ProgressSummaryRequest, StoryGenerationRequest};
use actix_web::{HttpResponse, Responder, web};
use uuid::Uuid;

pub const STORY_FAILURE_PREFIX: &str = "Story generation failed: ";
pub const PROGRESS_FAILURE_PREFIX: &str = "Progress summary generation failed: ";

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "NeuroLearn AI LangChain Backend is running"
    }))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

pub async fn generate_story(
    state: web::Data<AppState>,
    body: web::Json<StoryGenerationRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    log::info!(
        "[{request_id}] POST /generate-story (child: {}, topic: {})",
        body.child_name,
        body.topic
    );

    match state.story_chain.run(&body).await {
        Ok(response) => {
            log::info!(
                "[{request_id}] Story generated: \"{}\" ({} chars)",
                response.title,
                response.story.len()
            );
            HttpResponse::Ok().json(response)
        }
        Err(err) => {
            log::error!("[{request_id}] Story chain failed: {err}");
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: format!("{STORY_FAILURE_PREFIX}{err}"),
            })
        }
    }
}

pub async fn generate_progress_summary(
    state: web::Data<AppState>,
    body: web::Json<ProgressSummaryRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    log::info!(
        "[{request_id}] POST /generate-progress-summary (child: {}, timeframe: {})",
        body.child_name,
        body.timeframe
    );

    match state.progress_chain.run(&body).await {
        Ok(response) => {
            log::info!(
                "[{request_id}] Progress summary generated ({} chars)",
                response.summary.len()
            );
            HttpResponse::Ok().json(response)
        }
        Err(err) => {
            log::error!("[{request_id}] Progress chain failed: {err}");
            HttpResponse::InternalServerError().json(ErrorDetail {
                detail: format!("{PROGRESS_FAILURE_PREFIX}{err}"),
            })
        }
    }
}
