pub const STATUS_ERROR: &str = "error";
pub const MSG_RESOURCE_NOT_FOUND: &str = "resource_not_found";
pub const MSG_BAD_REQUEST: &str = "bad_request";
pub const MSG_INTERNAL_SERVER_ERROR: &str = "internal_server_error";
