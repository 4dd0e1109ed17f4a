use serde::Deserialize;

use crate::domain::{
    AddSmsSign, AuditReason, AuditStatus, ModifySmsSign, Pagination, SignFile, SignListResponse,
    SignName, SignRemark, SignResponse, SignSource, SignStatusResponse, SignType, SmsSignSummary,
};
use crate::transport::envelope::{Decoded, TransportError, decode_envelope};
use crate::transport::lenient::LenientInt;

pub const ADD_SMS_SIGN_ACTION: &str = "AddSmsSign";
pub const MODIFY_SMS_SIGN_ACTION: &str = "ModifySmsSign";
pub const DELETE_SMS_SIGN_ACTION: &str = "DeleteSmsSign";
pub const QUERY_SMS_SIGN_ACTION: &str = "QuerySmsSign";
pub const QUERY_SMS_SIGN_LIST_ACTION: &str = "QuerySmsSignList";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SignJsonBody {
    #[serde(default)]
    sign_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SignStatusJsonBody {
    #[serde(default)]
    sign_name: Option<String>,
    #[serde(default)]
    sign_status: Option<LenientInt>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    create_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ReasonJson {
    #[serde(default)]
    reject_date: Option<String>,
    #[serde(default)]
    reject_info: Option<String>,
    #[serde(default)]
    reject_sub_info: Option<String>,
}

impl From<ReasonJson> for AuditReason {
    fn from(value: ReasonJson) -> Self {
        Self {
            reject_date: value.reject_date,
            reject_info: value.reject_info,
            reject_sub_info: value.reject_sub_info,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SignSummaryJson {
    #[serde(default)]
    sign_name: Option<String>,
    #[serde(default)]
    audit_status: Option<String>,
    #[serde(default)]
    business_type: Option<String>,
    #[serde(default)]
    create_date: Option<String>,
    #[serde(default)]
    order_id: Option<String>,
    #[serde(default)]
    reason: Option<ReasonJson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SignListJsonBody {
    #[serde(default)]
    sms_sign_list: Option<Vec<SignSummaryJson>>,
    #[serde(default)]
    current_page: Option<LenientInt>,
    #[serde(default)]
    page_size: Option<LenientInt>,
    #[serde(default)]
    total_count: Option<LenientInt>,
}

pub fn encode_add_sms_sign_form(request: &AddSmsSign) -> Vec<(String, String)> {
    encode_sign_fields(
        request.sign_name(),
        request.remark(),
        request.source(),
        request.sign_type(),
        request.files(),
    )
}

pub fn encode_modify_sms_sign_form(request: &ModifySmsSign) -> Vec<(String, String)> {
    encode_sign_fields(
        request.sign_name(),
        request.remark(),
        request.source(),
        request.sign_type(),
        request.files(),
    )
}

fn encode_sign_fields(
    sign_name: &SignName,
    remark: &SignRemark,
    source: SignSource,
    sign_type: SignType,
    files: &[SignFile],
) -> Vec<(String, String)> {
    let mut params = vec![
        (SignName::FIELD.to_owned(), sign_name.as_str().to_owned()),
        (SignRemark::FIELD.to_owned(), remark.as_str().to_owned()),
        (SignSource::FIELD.to_owned(), source.value().to_string()),
        (SignType::FIELD.to_owned(), sign_type.value().to_string()),
    ];
    // Repeated parameters are flattened as `SignFileList.N.Field`, 1-based.
    for (idx, file) in files.iter().enumerate() {
        let n = idx + 1;
        params.push((
            format!("SignFileList.{n}.FileContents"),
            file.contents.clone(),
        ));
        params.push((format!("SignFileList.{n}.FileSuffix"), file.suffix.clone()));
    }
    params
}

pub fn encode_sign_name_form(sign_name: &SignName) -> Vec<(String, String)> {
    vec![(SignName::FIELD.to_owned(), sign_name.as_str().to_owned())]
}

pub fn encode_pagination_form(page: Pagination) -> Vec<(String, String)> {
    vec![
        (Pagination::INDEX_FIELD.to_owned(), page.index().to_string()),
        (Pagination::SIZE_FIELD.to_owned(), page.size().to_string()),
    ]
}

pub fn decode_sign_json_response(json: &str) -> Result<Decoded<SignResponse>, TransportError> {
    decode_envelope(json, |body: SignJsonBody| SignResponse {
        sign_name: body.sign_name,
    })
}

pub fn decode_sign_status_json_response(
    json: &str,
) -> Result<Decoded<SignStatusResponse>, TransportError> {
    decode_envelope(json, |body: SignStatusJsonBody| SignStatusResponse {
        sign_name: body.sign_name,
        audit_status: body
            .sign_status
            .and_then(LenientInt::into_i32)
            .map(AuditStatus::new),
        reason: body.reason,
        create_date: body.create_date,
    })
}

pub fn decode_sign_list_json_response(
    json: &str,
) -> Result<Decoded<SignListResponse>, TransportError> {
    decode_envelope(json, |body: SignListJsonBody| SignListResponse {
        signs: body
            .sms_sign_list
            .unwrap_or_default()
            .into_iter()
            .map(|item| SmsSignSummary {
                sign_name: item.sign_name,
                audit_status: item.audit_status,
                business_type: item.business_type,
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
