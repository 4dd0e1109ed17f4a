use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::ResponseResult;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Common fields of every response body plus the action-specific rest.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct JsonEnvelope<T> {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(flatten)]
    body: T,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NoBody {}

/// A decoded response body: the normalized result, the request id, and the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub result: ResponseResult,
    pub request_id: Option<String>,
    pub body: T,
}

pub fn decode_envelope<W, T>(json: &str, map: impl FnOnce(W) -> T) -> Result<Decoded<T>, TransportError>
where
    W: DeserializeOwned,
{
    let parsed: JsonEnvelope<W> = serde_json::from_str(json)?;
    Ok(Decoded {
        result: ResponseResult::new(parsed.code, parsed.message),
        request_id: parsed.request_id,
        body: map(parsed.body),
    })
}

/// Best-effort decode of an error body returned with a non-2xx HTTP status.
pub fn decode_error_body(json: &str) -> Option<Decoded<()>> {
    decode_envelope(json, |_: NoBody| ()).ok()
}
