use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
}

/// Error object as laid out on the wire by the Rosetta API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosettaError {
    pub code: u32,
    pub message: String,
    pub retriable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

#[derive(Debug)]
pub enum Error {
    InvalidBlockchain,
    NetworkNotFound,
    InvalidRequestBody(String),
}

impl Error {
    fn code(&self) -> u32 {
        match self {
            Error::InvalidBlockchain => 4001,
            Error::NetworkNotFound => 4002,
            Error::InvalidRequestBody(_) => 4003,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Error::InvalidBlockchain => "Invalid blockchain",
            Error::NetworkNotFound => "Network not found",
            Error::InvalidRequestBody(_) => "Invalid request body",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            // rosetta reports domain errors as 500, only unparsable input is a client error
            Error::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_rosetta(&self) -> RosettaError {
        let details = match self {
            Error::InvalidRequestBody(reason) if !reason.is_empty() => Some(ErrorDetails {
                message: reason.clone(),
            }),
            _ => None,
        };

        RosettaError {
            code: self.code(),
            message: self.message().to_string(),
            retriable: false,
            details,
        }
    }

    /// Every error this server may answer with, as advertised by `/network/options`
    pub fn catalog() -> Vec<RosettaError> {
        [
            Error::InvalidBlockchain,
            Error::NetworkNotFound,
            Error::InvalidRequestBody(String::new()),
        ]
        .iter()
        .map(Error::to_rosetta)
        .collect()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), "rejecting request: {}", self.message());

        (self.status(), Json(self.to_rosetta())).into_response()
    }
}
