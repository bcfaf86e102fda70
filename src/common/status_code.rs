use axum::http::StatusCode as HttpStatusCode;
use strum_macros::{Display, EnumString};

/// The statuses this service answers with.
///
/// `Display` yields the variant name (`"UnprocessableEntity"`), which is
/// what the logs use as the error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum StatusCode {
    Ok,
    Created,
    BadRequest,
    NotFound,
    MethodNotAllowed,
    PayloadTooLarge,
    UnprocessableEntity,
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        HttpStatusCode::from(self).as_u16()
    }

    pub fn is_server_error(self) -> bool {
        HttpStatusCode::from(self).is_server_error()
    }
}

impl From<StatusCode> for HttpStatusCode {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::Ok => HttpStatusCode::OK,
            StatusCode::Created => HttpStatusCode::CREATED,
            StatusCode::BadRequest => HttpStatusCode::BAD_REQUEST,
            StatusCode::NotFound => HttpStatusCode::NOT_FOUND,
            StatusCode::MethodNotAllowed => HttpStatusCode::METHOD_NOT_ALLOWED,
            StatusCode::PayloadTooLarge => HttpStatusCode::PAYLOAD_TOO_LARGE,
            StatusCode::UnprocessableEntity => HttpStatusCode::UNPROCESSABLE_ENTITY,
            StatusCode::InternalServerError => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_is_variant_name() {
        assert_eq!(StatusCode::UnprocessableEntity.to_string(), "UnprocessableEntity");
        assert_eq!(StatusCode::from_str("NotFound").unwrap(), StatusCode::NotFound);
    }

    #[test]
    fn test_http_codes() {
        assert_eq!(StatusCode::Created.as_u16(), 201);
        assert_eq!(StatusCode::BadRequest.as_u16(), 400);
        assert_eq!(StatusCode::PayloadTooLarge.as_u16(), 413);
        assert_eq!(StatusCode::UnprocessableEntity.as_u16(), 422);
        assert!(StatusCode::InternalServerError.is_server_error());
        assert!(!StatusCode::NotFound.is_server_error());
    }
}
