use super::controllers;

use actix_web::web;

// Entry text has no length limit of its own, this only caps a single request body
const MAX_ENTRY_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_ENTRY_PAYLOAD_BYTES))
        .service(
            web::scope("/api")
                // Create/List Entries
                .service(
                    web::resource("/entries")
                        .route(web::get().to(controllers::entries::index))
                        .route(web::post().to(controllers::entries::create)),
                ),
        )
        .default_service(web::route().to(controllers::not_found::index));
}
