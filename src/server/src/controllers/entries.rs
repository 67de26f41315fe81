use crate::errors::JournalHttpError;
use crate::params::app_data;

use libjournal::constants::ENTRY_RECEIVED_MSG;
use libjournal::error::JournalError;
use libjournal::model::JournalEntry;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpRequest, HttpResponse};

pub async fn index(req: HttpRequest) -> actix_web::Result<HttpResponse, JournalHttpError> {
    let app_data = app_data(&req)?;

    let entries = app_data.store.list()?;
    let body = serde_json::to_string(&entries)
        .map_err(|err| JournalError::serialization_error(err.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

pub async fn create(
    req: HttpRequest,
    body: web::Bytes,
) -> actix_web::Result<HttpResponse, JournalHttpError> {
    let app_data = app_data(&req)?;

    if body.is_empty() {
        return Err(JournalHttpError::bad_request("Request body is empty"));
    }

    let entry = JournalEntry::from_json_bytes(&body)?;
    log::info!("Received entry: {}", entry);

    let count = app_data.store.append(entry)?;
    log::debug!("Entry store holds {} entries", count);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(ENTRY_RECEIVED_MSG))
}
