pub mod http;
pub mod status_message;

pub use crate::view::status_message::{StatusMessage, StatusMessageDescription};
