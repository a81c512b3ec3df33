//! Error types for the posts API

use std::convert::Infallible;

use thiserror::Error;
use tracing::{error, warn};
use warp::http::StatusCode;
use warp::reply::Reply;
use warp::Rejection;

use crate::models::ErrorBody;

/// Errors a request handler can fail with.
///
/// Every variant is terminal for the request and maps to exactly one reply;
/// see [`ApiError::status`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Required field missing on create
    #[error("{0}")]
    Validation(String),

    /// Unknown sort field or direction
    #[error("{0}")]
    InvalidParameter(String),

    /// No post with this id
    #[error("Post with id {0} not found")]
    NotFound(u64),

    /// Request body is not the JSON shape the endpoint expects
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidParameter(_) | ApiError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Builds the reply for this error. Not-found replies have an empty body,
    /// everything else carries `{"error": message}`.
    pub fn into_reply(self) -> warp::reply::Response {
        let status = self.status();
        match self {
            ApiError::NotFound(_) => warp::reply::with_status(warp::reply(), status).into_response(),
            other => json_error(other.to_string(), status),
        }
    }
}

impl warp::reject::Reject for ApiError {}

fn json_error(message: String, status: StatusCode) -> warp::reply::Response {
    warp::reply::with_status(warp::reply::json(&ErrorBody { error: message }), status)
        .into_response()
}

/// Converts any rejection produced by the route tree into a reply.
///
/// Installed with `Filter::recover`, so the combined filter never errors.
pub async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Infallible> {
    if err.is_not_found() {
        return Ok(warp::reply::with_status(warp::reply(), StatusCode::NOT_FOUND).into_response());
    }

    if let Some(api_err) = err.find::<ApiError>() {
        warn!(status = %api_err.status(), "request rejected: {}", api_err);
        return Ok(api_err.clone().into_reply());
    }

    if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        warn!("malformed request body: {}", body_err);
        return Ok(ApiError::MalformedBody(body_err.to_string()).into_reply());
    }

    if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return Ok(json_error(
            "Content-Type must be application/json".to_string(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ));
    }

    if err.find::<warp::reject::InvalidQuery>().is_some() {
        return Ok(ApiError::InvalidParameter("Invalid query string".to_string()).into_reply());
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(
            warp::reply::with_status(warp::reply(), StatusCode::METHOD_NOT_ALLOWED).into_response(),
        );
    }

    error!("unhandled rejection: {:?}", err);
    Ok(json_error(
        "Internal server error".to_string(),
        StatusCode::INTERNAL_SERVER_ERROR,
    ))
}

/// Errors raised while loading [`Config`](crate::config::Config) from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid host '{value}': {source}")]
    InvalidHost {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("Invalid port '{value}': {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}
