use crate::domain::value::{AuditStatus, SignName, TemplateCode};

/// Business code the vendor returns for an accepted request.
pub const OK_CODE: &str = "OK";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Normalized business outcome of a vendor call: the vendor's `Code` and `Message`,
/// passed through unchanged.
pub struct ResponseResult {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl ResponseResult {
    pub fn new(code: Option<String>, message: Option<String>) -> Self {
        Self { code, message }
    }

    /// `true` when the vendor accepted the request (`Code == "OK"`).
    pub fn is_ok(&self) -> bool {
        self.code.as_deref() == Some(OK_CODE)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A call that reached the vendor and got a readable answer.
///
/// Business rejections (`result.code != "OK"`) are still a `Reply`; only local validation
/// and infrastructure failures surface as errors.
pub struct Reply<T> {
    /// HTTP status returned by the vendor.
    pub status_code: u16,
    pub result: ResponseResult,
    pub request_id: Option<String>,
    /// Operation-specific payload.
    pub body: T,
}

impl<T> Reply<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendSmsResponse {
    /// Delivery receipt id, used to look up delivery details later.
    pub biz_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Payload of the signature create/modify/delete calls.
pub struct SignResponse {
    pub sign_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignStatusResponse {
    pub sign_name: Option<String>,
    pub audit_status: Option<AuditStatus>,
    /// Review remark. Carries the rejection reason when the status is rejected.
    pub reason: Option<String>,
    pub create_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReason {
    pub reject_date: Option<String>,
    pub reject_info: Option<String>,
    pub reject_sub_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsSignSummary {
    pub sign_name: Option<String>,
    /// Review state as reported by the list API, e.g. `AUDIT_STATE_PASS`.
    pub audit_status: Option<String>,
    pub business_type: Option<String>,
    pub create_date: Option<String>,
    pub order_id: Option<String>,
    pub reason: Option<AuditReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignListResponse {
    pub signs: Vec<SmsSignSummary>,
    pub current_page: Option<i32>,
    pub page_size: Option<i32>,
    pub total_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Payload of the template create/modify/delete calls.
pub struct TemplateResponse {
    pub template_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateStatusResponse {
    pub template_code: Option<String>,
    pub template_name: Option<String>,
    pub template_content: Option<String>,
    pub template_type: Option<i32>,
    pub audit_status: Option<AuditStatus>,
    pub reason: Option<String>,
    pub create_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SmsTemplateSummary {
    pub template_code: Option<String>,
    pub template_name: Option<String>,
    pub template_type: Option<i32>,
    pub audit_status: Option<String>,
    pub template_content: Option<String>,
    pub create_date: Option<String>,
    pub order_id: Option<String>,
    pub reason: Option<AuditReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateListResponse {
    pub templates: Vec<SmsTemplateSummary>,
    pub current_page: Option<i32>,
    pub page_size: Option<i32>,
    pub total_count: Option<i64>,
}

impl SignResponse {
    /// The signature this response refers to, if the vendor echoed a usable name.
    pub fn parsed_sign_name(&self) -> Option<SignName> {
        self.sign_name
            .as_deref()
            .and_then(|name| SignName::existing(name).ok())
    }
}

impl TemplateResponse {
    /// The template this response refers to, if the vendor issued a usable code.
    pub fn parsed_template_code(&self) -> Option<TemplateCode> {
        self.template_code
            .as_deref()
            .and_then(|code| TemplateCode::new(code).ok())
    }
}
