use crate::error::Error;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub(crate) struct APIError(anyhow::Error);

impl IntoResponse for APIError {
    fn into_response(self) -> Response {
        let any_err = self.0;

        // An undecodable query string gets the same response as absent
        // parameters; callers can't tell the difference and shouldn't.
        if any_err.downcast_ref::<QueryRejection>().is_some() {
            return APIError::from(Error::MissingParams).into_response();
        }

        let status = match any_err.downcast_ref::<Error>() {
            Some(Error::MissingParams | Error::InvalidDomain) => StatusCode::BAD_REQUEST,
            Some(Error::InvalidProof) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": format!("{any_err}"),
        }));
        (status, body).into_response()
    }
}

impl<E> From<E> for APIError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
