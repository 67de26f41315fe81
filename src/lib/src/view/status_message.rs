use crate::view;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusMessage {
    pub status: String,
    pub status_message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusMessageDescription {
    pub status: String,
    pub status_message: String,
    pub status_description: String,
}

impl StatusMessageDescription {
    pub fn bad_request(description: impl AsRef<str>) -> StatusMessageDescription {
        StatusMessageDescription {
            status: String::from(view::http::STATUS_ERROR),
            status_message: String::from(view::http::MSG_BAD_REQUEST),
            status_description: String::from(description.as_ref()),
        }
    }
}

impl StatusMessage {
    pub fn error(msg: impl AsRef<str>) -> StatusMessage {
        StatusMessage {
            status: String::from(view::http::STATUS_ERROR),
            status_message: String::from(msg.as_ref()),
        }
    }

    pub fn resource_not_found() -> StatusMessage {
        StatusMessage::error(view::http::MSG_RESOURCE_NOT_FOUND)
    }

    pub fn internal_server_error() -> StatusMessage {
        StatusMessage::error(view::http::MSG_INTERNAL_SERVER_ERROR)
    }
}
