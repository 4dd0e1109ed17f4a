use serde::Deserialize;

use crate::domain::{
    AddSmsTemplate, AuditReason, AuditStatus, ModifySmsTemplate, SmsTemplateSummary, TemplateCode,
    TemplateContent, TemplateListResponse, TemplateName, TemplateRemark, TemplateResponse,
    TemplateStatusResponse, TemplateType,
};
use crate::transport::envelope::{Decoded, TransportError, decode_envelope};
use crate::transport::lenient::LenientInt;
use crate::transport::sign::ReasonJson;

pub const ADD_SMS_TEMPLATE_ACTION: &str = "AddSmsTemplate";
pub const MODIFY_SMS_TEMPLATE_ACTION: &str = "ModifySmsTemplate";
pub const DELETE_SMS_TEMPLATE_ACTION: &str = "DeleteSmsTemplate";
pub const QUERY_SMS_TEMPLATE_ACTION: &str = "QuerySmsTemplate";
pub const QUERY_SMS_TEMPLATE_LIST_ACTION: &str = "QuerySmsTemplateList";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TemplateJsonBody {
    #[serde(default)]
    template_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TemplateStatusJsonBody {
    #[serde(default)]
    template_code: Option<String>,
    #[serde(default)]
    template_name: Option<String>,
    #[serde(default)]
    template_content: Option<String>,
    #[serde(default)]
    template_type: Option<LenientInt>,
    #[serde(default)]
    template_status: Option<LenientInt>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    create_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TemplateSummaryJson {
    #[serde(default)]
    template_code: Option<String>,
    #[serde(default)]
    template_name: Option<String>,
    #[serde(default)]
    template_type: Option<LenientInt>,
    #[serde(default)]
    audit_status: Option<String>,
    #[serde(default)]
    template_content: Option<String>,
    #[serde(default)]
    create_date: Option<String>,
    #[serde(default)]
    order_id: Option<String>,
    #[serde(default)]
    reason: Option<ReasonJson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TemplateListJsonBody {
    #[serde(default)]
    sms_template_list: Option<Vec<TemplateSummaryJson>>,
    #[serde(default)]
    current_page: Option<LenientInt>,
    #[serde(default)]
    page_size: Option<LenientInt>,
    #[serde(default)]
    total_count: Option<LenientInt>,
}

pub fn encode_add_sms_template_form(request: &AddSmsTemplate) -> Vec<(String, String)> {
    vec![
        (
            TemplateName::FIELD.to_owned(),
            request.name().as_str().to_owned(),
        ),
        (
            TemplateContent::FIELD.to_owned(),
            request.content().as_str().to_owned(),
        ),
        (
            TemplateRemark::FIELD.to_owned(),
            request.remark().as_str().to_owned(),
        ),
        (
            TemplateType::FIELD.to_owned(),
            request.template_type().value().to_string(),
        ),
    ]
}

pub fn encode_modify_sms_template_form(request: &ModifySmsTemplate) -> Vec<(String, String)> {
    vec![
        (
            TemplateCode::FIELD.to_owned(),
            request.code().as_str().to_owned(),
        ),
        (
            TemplateName::FIELD.to_owned(),
            request.name().as_str().to_owned(),
        ),
        (
            TemplateContent::FIELD.to_owned(),
            request.content().as_str().to_owned(),
        ),
        (
            TemplateRemark::FIELD.to_owned(),
            request.remark().as_str().to_owned(),
        ),
        (
            TemplateType::FIELD.to_owned(),
            request.template_type().value().to_string(),
        ),
    ]
}

pub fn encode_template_code_form(code: &TemplateCode) -> Vec<(String, String)> {
    vec![(TemplateCode::FIELD.to_owned(), code.as_str().to_owned())]
}

pub fn decode_template_json_response(
    json: &str,
) -> Result<Decoded<TemplateResponse>, TransportError> {
    decode_envelope(json, |body: TemplateJsonBody| TemplateResponse {
        template_code: body.template_code,
    })
}

pub fn decode_template_status_json_response(
    json: &str,
) -> Result<Decoded<TemplateStatusResponse>, TransportError> {
    decode_envelope(json, |body: TemplateStatusJsonBody| TemplateStatusResponse {
        template_code: body.template_code,
        template_name: body.template_name,
        template_content: body.template_content,
        template_type: body.template_type.and_then(LenientInt::into_i32),
        audit_status: body
            .template_status
            .and_then(LenientInt::into_i32)
            .map(AuditStatus::new),
        reason: body.reason,
        create_date: body.create_date,
    })
}

pub fn decode_template_list_json_response(
    json: &str,
) -> Result<Decoded<TemplateListResponse>, TransportError> {
    decode_envelope(json, |body: TemplateListJsonBody| TemplateListResponse {
        templates: body
            .sms_template_list
            .unwrap_or_default()
            .into_iter()
            .map(|item| SmsTemplateSummary {
                template_code: item.template_code,
                template_name: item.template_name,
                template_type: item.template_type.and_then(LenientInt::into_i32),
                audit_status: item.audit_status,
                template_content: item.template_content,
                create_date: item.create_date,
                order_id: item.order_id,
                reason: item.reason.map(AuditReason::from),
            })
            .collect(),
        current_page: body.current_page.and_then(LenientInt::into_i32),
        page_size: body.page_size.and_then(LenientInt::into_i32),
        total_count: body.total_count.map(LenientInt::into_i64),
    })
}
