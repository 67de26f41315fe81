use actix_web::HttpRequest;

use crate::app_data::JournalAppData;
use crate::errors::JournalHttpError;

pub fn app_data(req: &HttpRequest) -> Result<&JournalAppData, JournalHttpError> {
    req.app_data::<JournalAppData>()
        .ok_or(JournalHttpError::AppDataDoesNotExist)
}
