use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// JSON body extractor with Rosetta semantics.
///
/// Unlike `axum::Json` it doesn't require a content type, treats a missing
/// body as the empty object and only accepts JSON objects at the top level.
/// Unknown fields are ignored.
pub struct RosettaJson<T>(pub T);

impl<T> RosettaJson<T>
where
    T: DeserializeOwned,
{
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let value = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Object(Default::default())
        } else {
            serde_json::from_slice(bytes)
                .map_err(|err| Error::InvalidRequestBody(err.to_string()))?
        };

        if !value.is_object() {
            return Err(Error::InvalidRequestBody(
                "request body must be a JSON object".into(),
            ));
        }

        let inner = serde_json::from_value(value)
            .map_err(|err| Error::InvalidRequestBody(err.to_string()))?;

        Ok(Self(inner))
    }
}

impl<S, T> FromRequest<S> for RosettaJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| Error::InvalidRequestBody(err.body_text()))?;

        Self::from_bytes(&bytes)
    }
}
