//! RPC-style request signing (signature version 1.0, HMAC-SHA1).

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

pub const API_VERSION: &str = "2017-05-25";
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const SIGNATURE_VERSION: &str = "1.0";
pub const SIGNATURE_FIELD: &str = "Signature";

/// RFC 3986 unreserved characters stay as-is; everything else is escaped.
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, thiserror::Error)]
#[error("invalid signing key")]
pub struct SigningError;

pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, RFC3986).to_string()
}

/// Parameters every action carries besides its own fields and the signature.
pub fn common_params(
    access_key_id: &str,
    action: &str,
    region_id: &str,
    timestamp: DateTime<Utc>,
    nonce: &str,
) -> Vec<(String, String)> {
    vec![
        ("AccessKeyId".to_owned(), access_key_id.to_owned()),
        ("Action".to_owned(), action.to_owned()),
        ("Format".to_owned(), "JSON".to_owned()),
        ("RegionId".to_owned(), region_id.to_owned()),
        ("SignatureMethod".to_owned(), SIGNATURE_METHOD.to_owned()),
        ("SignatureNonce".to_owned(), nonce.to_owned()),
        ("SignatureVersion".to_owned(), SIGNATURE_VERSION.to_owned()),
        (
            "Timestamp".to_owned(),
            timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        ),
        ("Version".to_owned(), API_VERSION.to_owned()),
    ]
}

pub fn string_to_sign(method: &str, params: &[(String, String)]) -> String {
    let mut sorted = params.iter().collect::<Vec<_>>();
    sorted.sort();
    let canonical = sorted
        .into_iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{method}&{}&{}",
        percent_encode("/"),
        percent_encode(&canonical)
    )
}

pub fn signature(secret: &str, string_to_sign: &str) -> Result<String, SigningError> {
    let mut mac =
        HmacSha1::new_from_slice(format!("{secret}&").as_bytes()).map_err(|_| SigningError)?;
    mac.update(string_to_sign.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Append the `Signature` parameter computed over everything already in `params`.
pub fn sign_params(
    method: &str,
    params: &mut Vec<(String, String)>,
    secret: &str,
) -> Result<(), SigningError> {
    let signature = signature(secret, &string_to_sign(method, params))?;
    params.push((SIGNATURE_FIELD.to_owned(), signature));
    Ok(())
}
