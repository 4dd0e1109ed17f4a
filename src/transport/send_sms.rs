use serde::Deserialize;

use crate::domain::{
    RawPhoneNumber, SendBatchSms, SendSms, SendSmsResponse, SignName, TemplateCode, TemplateParam,
};
use crate::transport::envelope::{Decoded, TransportError, decode_envelope};

pub const SEND_SMS_ACTION: &str = "SendSms";
pub const SEND_BATCH_SMS_ACTION: &str = "SendBatchSms";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SendSmsJsonBody {
    #[serde(default)]
    biz_id: Option<String>,
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let to = request
        .recipients()
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(",");

    let mut params = vec![
        (RawPhoneNumber::FIELD.to_owned(), to),
        (
            SignName::FIELD.to_owned(),
            request.sign_name().as_str().to_owned(),
        ),
        (
            TemplateCode::FIELD.to_owned(),
            request.template_code().as_str().to_owned(),
        ),
    ];
    if let Some(param) = request.template_param() {
        params.push((TemplateParam::FIELD.to_owned(), param.to_json()));
    }
    let options = request.options();
    if let Some(out_id) = options.out_id.as_ref() {
        params.push(("OutId".to_owned(), out_id.clone()));
    }
    if let Some(code) = options.sms_up_extend_code.as_ref() {
        params.push(("SmsUpExtendCode".to_owned(), code.clone()));
    }
    params
}

/// Encode a batch as three parallel JSON arrays. Row order is array order.
pub fn encode_send_batch_sms_form(request: &SendBatchSms) -> Vec<(String, String)> {
    let rows = request.recipients();
    let phones = rows
        .iter()
        .map(|row| serde_json::Value::from(row.phone.raw()))
        .collect::<Vec<_>>();
    let sign_names = rows
        .iter()
        .map(|row| serde_json::Value::from(row.sign_name.as_str()))
        .collect::<Vec<_>>();

    let mut params = vec![
        (
            SendBatchSms::PHONE_NUMBER_JSON_FIELD.to_owned(),
            serde_json::Value::Array(phones).to_string(),
        ),
        (
            SendBatchSms::SIGN_NAME_JSON_FIELD.to_owned(),
            serde_json::Value::Array(sign_names).to_string(),
        ),
        (
            TemplateCode::FIELD.to_owned(),
            request.template_code().as_str().to_owned(),
        ),
    ];

    // Rows without parameters still need a slot to keep the arrays aligned.
    if rows.iter().any(|row| row.template_param.is_some()) {
        let template_params = rows
            .iter()
            .map(|row| {
                serde_json::Value::Object(
                    row.template_param
                        .as_ref()
                        .map(|param| param.values().clone())
                        .unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>();
        params.push((
            SendBatchSms::TEMPLATE_PARAM_JSON_FIELD.to_owned(),
            serde_json::Value::Array(template_params).to_string(),
        ));
    }
    params
}

pub fn decode_send_sms_json_response(
    json: &str,
) -> Result<Decoded<SendSmsResponse>, TransportError> {
    decode_envelope(json, |body: SendSmsJsonBody| SendSmsResponse {
        biz_id: body.biz_id,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{BatchRecipient, SendOptions};

    use super::*;

    fn phone(raw: &str) -> RawPhoneNumber {
        RawPhoneNumber::new(raw).unwrap()
    }

    fn sign(name: &str) -> SignName {
        SignName::existing(name).unwrap()
    }

    #[test]
    fn encode_send_sms_form_params() {
        let request = SendSms::new(
            vec![phone("13900000001"), phone("13900000002")],
            sign("Aliyun"),
            TemplateCode::new("SMS_154950909").unwrap(),
            Some(TemplateParam::from_json(r#"{"code":"1234"}"#).unwrap()),
            SendOptions {
                out_id: Some("order-42".to_owned()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            encode_send_sms_form(&request),
            vec![
                (
                    "PhoneNumbers".to_owned(),
                    "13900000001,13900000002".to_owned()
                ),
                ("SignName".to_owned(), "Aliyun".to_owned()),
                ("TemplateCode".to_owned(), "SMS_154950909".to_owned()),
                ("TemplateParam".to_owned(), r#"{"code":"1234"}"#.to_owned()),
                ("OutId".to_owned(), "order-42".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_send_sms_omits_missing_template_param() {
        let request = SendSms::one(
            phone("13900000001"),
            sign("Aliyun"),
            TemplateCode::new("SMS_1").unwrap(),
            None,
        );
        let params = encode_send_sms_form(&request);
        assert!(!params.iter().any(|(k, _)| k == "TemplateParam"));
    }

    #[test]
    fn encode_batch_keeps_positional_correspondence() {
        let rows = ["1", "2", "3"]
            .into_iter()
            .map(|n| BatchRecipient {
                phone: phone(&format!("1390000000{n}")),
                sign_name: sign(&format!("Sign{n}")),
                template_param: Some(
                    TemplateParam::from_json(&format!(r#"{{"name":"user{n}"}}"#)).unwrap(),
                ),
            })
            .collect::<Vec<_>>();
        let request = SendBatchSms::new(rows, TemplateCode::new("SMS_1").unwrap()).unwrap();

        assert_eq!(
            encode_send_batch_sms_form(&request),
            vec![
                (
                    "PhoneNumberJson".to_owned(),
                    r#"["13900000001","13900000002","13900000003"]"#.to_owned()
                ),
                (
                    "SignNameJson".to_owned(),
                    r#"["Sign1","Sign2","Sign3"]"#.to_owned()
                ),
                ("TemplateCode".to_owned(), "SMS_1".to_owned()),
                (
                    "TemplateParamJson".to_owned(),
                    r#"[{"name":"user1"},{"name":"user2"},{"name":"user3"}]"#.to_owned()
                ),
            ]
        );
    }

    #[test]
    fn encode_batch_fills_missing_params_with_empty_objects() {
        let rows = vec![
            BatchRecipient {
                phone: phone("13900000001"),
                sign_name: sign("A"),
                template_param: None,
            },
            BatchRecipient {
                phone: phone("13900000002"),
                sign_name: sign("B"),
                template_param: Some(TemplateParam::from_json(r#"{"x":"1"}"#).unwrap()),
            },
        ];
        let request = SendBatchSms::new(rows, TemplateCode::new("SMS_1").unwrap()).unwrap();
        let params = encode_send_batch_sms_form(&request);
        assert_eq!(params[3].1, r#"[{},{"x":"1"}]"#);
    }

    #[test]
    fn decode_send_sms_response_keeps_business_error() {
        let json = r#"
        {
          "Code": "isv.MOBILE_NUMBER_ILLEGAL",
          "Message": "invalid mobile number",
          "RequestId": "F655A8D5-B967-440B-8683-DAD6FF8DE990"
        }
        "#;
        let decoded = decode_send_sms_json_response(json).unwrap();
        assert!(!decoded.result.is_ok());
        assert_eq!(
            decoded.result.code.as_deref(),
            Some("isv.MOBILE_NUMBER_ILLEGAL")
        );
        assert_eq!(decoded.body.biz_id, None);
    }

    #[test]
    fn decode_send_sms_response_reads_biz_id() {
        let json = r#"{"Code":"OK","Message":"OK","BizId":"900619746936498440^0","RequestId":"r"}"#;
        let decoded = decode_send_sms_json_response(json).unwrap();
        assert!(decoded.result.is_ok());
        assert_eq!(decoded.body.biz_id.as_deref(), Some("900619746936498440^0"));
    }
}
