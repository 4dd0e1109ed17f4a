//! Typed Rust client for the Alibaba Cloud SMS (Dysmsapi) API.
//!
//! The crate is split into a domain layer of strong types (validated when built), a
//! transport layer for wire-format details and request signing, and a small client layer
//! that makes exactly one vendor call per operation.
//!
//! Results follow a three-way split:
//! - invalid input is rejected locally with [`DysmsError::Validation`] (status 400),
//! - client/transport/vendor failures are other [`DysmsError`] variants (status 500),
//! - business rejections from the vendor are successful [`Reply`] values whose
//!   [`ResponseResult`] carries the vendor code and message.
//!
//! ```rust,no_run
//! use dysms::{Credentials, DysmsClient, RawPhoneNumber, SendSms, SignName, TemplateCode, TemplateParam};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dysms::DysmsError> {
//!     let client = DysmsClient::new(Credentials::from_env()?);
//!     let request = SendSms::one(
//!         RawPhoneNumber::new("1390000****")?,
//!         SignName::existing("Aliyun")?,
//!         TemplateCode::new("SMS_154950909")?,
//!         Some(TemplateParam::from_json(r#"{"code":"1234"}"#)?),
//!     );
//!     let reply = client.send_sms(request).await?;
//!     if !reply.is_ok() {
//!         eprintln!("rejected: {:?}", reply.result);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ACCESS_KEY_ID_ENV, ACCESS_KEY_SECRET_ENV, Credentials, DysmsClient, DysmsClientBuilder,
    DysmsError,
};
pub use domain::{
    AddSmsSign, AddSmsTemplate, AuditStatus, BatchRecipient, KnownAuditStatus, ModifySmsSign,
    ModifySmsTemplate, Pagination, PhoneNumber, RawPhoneNumber, Reply, ResponseResult,
    SendBatchSms, SendOptions, SendSms, SendSmsResponse, SignFile, SignListResponse, SignName,
    SignResponse, SignStatusResponse, TemplateCode, TemplateListResponse, TemplateParam,
    TemplateResponse, TemplateStatusResponse, ValidationError,
};
