use actix_files::NamedFile;
use actix_web::error::InternalError;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{mime, web, HttpRequest, HttpResponse, Responder};
use log::{debug, error, info};
use uuid::Uuid;

use super::client;
use super::duration::calculate_duration;
use super::models::{ItineraryResponse, TripRequest};
use super::ItineraryError;
use crate::document::DocumentError;
use crate::storage::{StorageError, PDF_FILENAME};
use crate::{AppState, ErrorResponse};

/// Map a failed generation to a status code and the shared error envelope.
fn error_response(err: &ItineraryError) -> HttpResponse {
    let message = err.to_string();
    match err {
        ItineraryError::InvalidDate { .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message))
        }
        ItineraryError::Model(_) => {
            HttpResponse::BadGateway().json(ErrorResponse::bad_gateway(&message))
        }
        ItineraryError::Document(_) | ItineraryError::Storage(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&message))
        }
    }
}

async fn run_generation(state: &AppState, request: &TripRequest) -> Result<String, ItineraryError> {
    let duration = calculate_duration(&request.start_date, &request.end_date)?;
    debug!("Trip duration: {} day(s)", duration);

    let itinerary_text =
        client::generate_itinerary(state.model.as_ref(), request, duration).await?;

    let renderer = state.renderer.clone();
    let text = itinerary_text.clone();
    let pdf = web::block(move || renderer.render(&text))
        .await
        .map_err(|e| DocumentError::Blocking(e.to_string()))??;

    state.store.save(pdf).await?;
    Ok(itinerary_text)
}

#[utoipa::path(
    post,
    path = "/generate_itinerary",
    tag = "Itinerary",
    request_body = TripRequest,
    responses(
        (status = 200, description = "Itinerary generated and rendered to PDF", body = ItineraryResponse),
        (status = 400, description = "Start or end date is not YYYY-MM-DD", body = ErrorResponse),
        (status = 502, description = "Model service failed or returned nothing", body = ErrorResponse),
        (status = 500, description = "PDF rendering or storage failed", body = ErrorResponse)
    )
)]
pub async fn generate_itinerary(
    state: web::Data<AppState>,
    payload: web::Json<TripRequest>,
) -> impl Responder {
    let request_id = Uuid::new_v4();
    let request = payload.into_inner();
    info!(
        "[{}] Generating itinerary from '{}' to '{}' ({} .. {})",
        request_id, request.source, request.destination, request.start_date, request.end_date
    );

    match run_generation(&state, &request).await {
        Ok(itinerary_text) => {
            info!(
                "[{}] Itinerary ready ({} chars)",
                request_id,
                itinerary_text.len()
            );
            HttpResponse::Ok().json(ItineraryResponse {
                itinerary_text,
                pdf_path: PDF_FILENAME.to_string(),
            })
        }
        Err(e) => {
            error!("[{}] Itinerary generation failed: {}", request_id, e);
            error_response(&e)
        }
    }
}

#[utoipa::path(
    get,
    path = "/download_pdf",
    tag = "Itinerary",
    responses(
        (status = 200, description = "Latest itinerary PDF as an attachment"),
        (status = 404, description = "No itinerary generated yet", body = ErrorResponse)
    )
)]
pub async fn download_pdf(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let path = match state.store.latest() {
        Ok(path) => path,
        Err(StorageError::NotGenerated) => {
            info!("Download requested before any itinerary was generated");
            return HttpResponse::NotFound().json(ErrorResponse::not_found(
                "No itinerary PDF has been generated yet",
            ));
        }
        Err(e) => {
            error!("Failed to locate itinerary PDF: {}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error(&e.to_string()));
        }
    };

    match NamedFile::open_async(&path).await {
        Ok(file) => file
            .set_content_type(mime::APPLICATION_PDF)
            .set_content_disposition(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(PDF_FILENAME.to_string())],
            })
            .into_response(&req),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            error!("Itinerary PDF missing on disk: {}", path.display());
            HttpResponse::NotFound().json(ErrorResponse::not_found("Itinerary PDF not found"))
        }
        Err(e) => {
            error!("Failed to open itinerary PDF {}: {}", path.display(), e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Failed to read itinerary PDF"))
        }
    }
}

/// Configure itinerary routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message)),
        )
        .into()
    }))
    .service(web::resource("/generate_itinerary").route(web::post().to(generate_itinerary)))
    .service(web::resource("/download_pdf").route(web::get().to(download_pdf)));
}
