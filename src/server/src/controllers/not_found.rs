use actix_web::{HttpRequest, HttpResponse};
use libjournal::view::StatusMessage;

pub async fn index(req: HttpRequest) -> HttpResponse {
    log::debug!("404 {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(StatusMessage::resource_not_found())
}
