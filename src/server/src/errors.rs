use actix_web::{error, http::StatusCode, HttpResponse};
use derive_more::{Display, Error};
use libjournal::error::JournalError;
use libjournal::view::{StatusMessage, StatusMessageDescription};

#[derive(Debug, Display, Error)]
pub enum JournalHttpError {
    #[display("Bad request: {message}")]
    BadRequest { message: String },
    #[display("Entry store is not registered as app data")]
    AppDataDoesNotExist,

    // Translate JournalError to JournalHttpError
    #[display("{_0}")]
    InternalJournalError(#[error(source)] JournalError),
}

impl JournalHttpError {
    pub fn bad_request(message: impl AsRef<str>) -> Self {
        JournalHttpError::BadRequest {
            message: message.as_ref().to_string(),
        }
    }
}

impl From<JournalError> for JournalHttpError {
    fn from(error: JournalError) -> Self {
        JournalHttpError::InternalJournalError(error)
    }
}

impl error::ResponseError for JournalHttpError {
    fn error_response(&self) -> HttpResponse {
        match self {
            JournalHttpError::BadRequest { message } => {
                log::debug!("Bad request: {}", message);
                HttpResponse::BadRequest().json(StatusMessageDescription::bad_request(message))
            }
            JournalHttpError::AppDataDoesNotExist => {
                log::error!("AppData does not exist, make sure the store is registered in main.rs");
                HttpResponse::InternalServerError().json(StatusMessage::internal_server_error())
            }
            JournalHttpError::InternalJournalError(error) if error.is_client_error() => {
                log::debug!("{}", error);
                HttpResponse::BadRequest()
                    .json(StatusMessageDescription::bad_request(error.to_string()))
            }
            JournalHttpError::InternalJournalError(error) => {
                log::error!("Internal server error: {:?}", error);
                HttpResponse::InternalServerError().json(StatusMessage::internal_server_error())
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            JournalHttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            JournalHttpError::AppDataDoesNotExist => StatusCode::INTERNAL_SERVER_ERROR,
            JournalHttpError::InternalJournalError(error) if error.is_client_error() => {
                StatusCode::BAD_REQUEST
            }
            JournalHttpError::InternalJournalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
