//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AddSmsSign, AddSmsTemplate, BatchRecipient, ModifySmsSign, ModifySmsTemplate, Pagination,
    SEND_BATCH_SMS_MAX_RECIPIENTS, SEND_SMS_MAX_RECIPIENTS, SendBatchSms, SendOptions, SendSms,
};
pub use response::{
    AuditReason, OK_CODE, Reply, ResponseResult, SendSmsResponse, SignListResponse,
    SignResponse, SignStatusResponse, SmsSignSummary, SmsTemplateSummary, TemplateListResponse,
    TemplateResponse, TemplateStatusResponse,
};
pub use validation::ValidationError;
pub use value::{
    AccessKeyId, AccessKeySecret, AuditStatus, KnownAuditStatus, PhoneNumber, RawPhoneNumber,
    SignFile, SignName, SignRemark, SignSource, SignType, TemplateCode, TemplateContent,
    TemplateName, TemplateParam, TemplateRemark, TemplateType,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(raw: &str) -> RawPhoneNumber {
        RawPhoneNumber::new(raw).unwrap()
    }

    #[test]
    fn access_key_parts_reject_empty() {
        assert!(matches!(
            AccessKeyId::new("   "),
            Err(ValidationError::Empty {
                field: AccessKeyId::FIELD
            })
        ));
        assert!(matches!(
            AccessKeySecret::new(""),
            Err(ValidationError::Empty {
                field: AccessKeySecret::FIELD
            })
        ));
    }

    #[test]
    fn access_key_secret_rejects_blank_but_keeps_whitespace() {
        assert!(matches!(
            AccessKeySecret::new(" \t "),
            Err(ValidationError::Empty {
                field: AccessKeySecret::FIELD
            })
        ));
        assert_eq!(AccessKeySecret::new(" s3cret ").unwrap().as_str(), " s3cret ");
    }

    #[test]
    fn access_key_secret_is_redacted_in_debug() {
        let secret = AccessKeySecret::new("very-secret").unwrap();
        assert!(!format!("{secret:?}").contains("very-secret"));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::CN), " 13912345678 ").unwrap();
        assert_eq!(pn.raw(), "13912345678");
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+8613912345678");
    }

    #[test]
    fn sign_name_length_is_counted_after_trimming() {
        assert!(SignName::new("  abcdefghijkl  ").is_ok());
        assert_eq!(
            SignName::new("abcdefghijklm").unwrap_err(),
            ValidationError::TooLong {
                field: SignName::FIELD,
                max: 12,
                actual: 13
            }
        );
        assert!(SignName::existing("abcdefghijklmnop").is_ok());
        assert!(SignName::existing("  ").is_err());
    }

    #[test]
    fn lengths_are_counted_in_characters() {
        assert!(SignName::new("阿里云短信测试签名服务中心").is_err());
        assert!(SignName::new("阿里云短信测试签名服务中").is_ok());
    }

    #[test]
    fn add_sms_sign_rejects_out_of_range_source_and_type() {
        for source in [-1, 6] {
            assert!(matches!(
                AddSmsSign::new("Aliyun", "", source, 1, Vec::new()),
                Err(ValidationError::OutOfRange {
                    field: SignSource::FIELD,
                    ..
                })
            ));
        }
        for sign_type in [0, 3] {
            assert!(matches!(
                AddSmsSign::new("Aliyun", "", 0, sign_type, Vec::new()),
                Err(ValidationError::OutOfRange {
                    field: SignType::FIELD,
                    ..
                })
            ));
        }
    }

    #[test]
    fn add_sms_sign_accepts_empty_file_list_and_trims() {
        let req = AddSmsSign::new(" Aliyun ", "  login codes  ", 2, 1, Vec::new()).unwrap();
        assert_eq!(req.sign_name().as_str(), "Aliyun");
        assert_eq!(req.remark().as_str(), "login codes");
        assert!(req.files().is_empty());
    }

    #[test]
    fn sign_remark_is_limited_to_200_characters() {
        let remark = "r".repeat(201);
        assert!(matches!(
            AddSmsSign::new("Aliyun", remark.clone(), 0, 1, Vec::new()),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
        assert!(matches!(
            ModifySmsSign::new("Aliyun", remark, 0, 1, Vec::new()),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }

    #[test]
    fn modify_sms_sign_skips_name_length_but_checks_ranges() {
        assert!(ModifySmsSign::new("a very long signature name", "", 0, 1, Vec::new()).is_ok());
        assert!(ModifySmsSign::new("Aliyun", "", 9, 1, Vec::new()).is_err());
        assert!(ModifySmsSign::new("Aliyun", "", 0, 5, Vec::new()).is_err());
        assert!(ModifySmsSign::new("", "", 0, 1, Vec::new()).is_err());
    }

    #[test]
    fn add_sms_template_validates_fields() {
        assert!(AddSmsTemplate::new("Login", "Your code is ${code}", "login", 0).is_ok());
        assert!(matches!(
            AddSmsTemplate::new("", "c", "r", 0),
            Err(ValidationError::Empty {
                field: TemplateName::FIELD
            })
        ));
        assert!(matches!(
            AddSmsTemplate::new("n".repeat(31), "c", "r", 0),
            Err(ValidationError::TooLong { max: 30, .. })
        ));
        assert!(matches!(
            AddSmsTemplate::new("n", "c".repeat(501), "r", 0),
            Err(ValidationError::TooLong { max: 500, .. })
        ));
        assert!(matches!(
            AddSmsTemplate::new("n", "c", "", 0),
            Err(ValidationError::Empty {
                field: TemplateRemark::FIELD
            })
        ));
        assert!(matches!(
            AddSmsTemplate::new("n", "c", "r".repeat(101), 0),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
        assert!(matches!(
            AddSmsTemplate::new("n", "c", "r", 4),
            Err(ValidationError::OutOfRange {
                field: TemplateType::FIELD,
                ..
            })
        ));
    }

    #[test]
    fn modify_sms_template_requires_code() {
        assert!(matches!(
            ModifySmsTemplate::new(" ", "n", "c", "r", 1),
            Err(ValidationError::Empty {
                field: TemplateCode::FIELD
            })
        ));
        let req = ModifySmsTemplate::new("SMS_1", "n", "c", "r", 1).unwrap();
        assert_eq!(req.code().as_str(), "SMS_1");
        assert_eq!(req.template_type().value(), 1);
    }

    #[test]
    fn pagination_coerces_small_values() {
        assert_eq!(Pagination::new(0, 5), Pagination::new(1, 10));
        assert_eq!(Pagination::new(-3, 9).index(), 1);
        assert_eq!(Pagination::new(2, 9).size(), 10);
        assert_eq!(Pagination::new(3, 80).size(), 80);
        assert_eq!(Pagination::default(), Pagination::new(1, 10));
    }

    #[test]
    fn template_param_requires_json_object() {
        let param = TemplateParam::from_json(r#"{"code":"1234"}"#).unwrap();
        assert_eq!(param.to_json(), r#"{"code":"1234"}"#);
        assert!(matches!(
            TemplateParam::from_json("[1,2]"),
            Err(ValidationError::InvalidJson { .. })
        ));
        assert!(matches!(
            TemplateParam::from_json("{"),
            Err(ValidationError::InvalidJson { .. })
        ));
    }

    #[test]
    fn send_sms_recipient_limit_is_enforced() {
        let sign = SignName::existing("Aliyun").unwrap();
        let code = TemplateCode::new("SMS_1").unwrap();
        let recipients = vec![phone("13900000000"); SEND_SMS_MAX_RECIPIENTS + 1];
        let err = SendSms::new(recipients, sign.clone(), code.clone(), None, SendOptions::default())
            .unwrap_err();
        assert!(matches!(err, ValidationError::TooManyRecipients { .. }));

        let err = SendSms::new(Vec::new(), sign, code, None, SendOptions::default()).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn batch_from_json_arrays_keeps_rows_aligned() {
        let batch = SendBatchSms::from_json_arrays(
            r#"["13900000001","13900000002","13900000003"]"#,
            r#"["SignA","SignB","SignC"]"#,
            TemplateCode::new("SMS_1").unwrap(),
            Some(r#"[{"name":"a"},{"name":"b"},{"name":"c"}]"#),
        )
        .unwrap();

        let rows = batch
            .recipients()
            .iter()
            .map(|row| {
                (
                    row.phone.raw().to_owned(),
                    row.sign_name.as_str().to_owned(),
                    row.template_param.as_ref().unwrap().values()["name"].clone(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(
            rows,
            vec![
                ("13900000001".to_owned(), "SignA".to_owned(), serde_json::Value::from("a")),
                ("13900000002".to_owned(), "SignB".to_owned(), serde_json::Value::from("b")),
                ("13900000003".to_owned(), "SignC".to_owned(), serde_json::Value::from("c")),
            ]
        );
    }

    #[test]
    fn batch_from_json_arrays_rejects_misaligned_arrays() {
        let err = SendBatchSms::from_json_arrays(
            r#"["13900000001","13900000002"]"#,
            r#"["SignA"]"#,
            TemplateCode::new("SMS_1").unwrap(),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                field: SendBatchSms::SIGN_NAME_JSON_FIELD,
                expected: 2,
                actual: 1
            }
        );

        let err = SendBatchSms::from_json_arrays(
            r#"["13900000001"]"#,
            r#"["SignA"]"#,
            TemplateCode::new("SMS_1").unwrap(),
            Some(r#"[{},{}]"#),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::LengthMismatch { .. }));
    }

    #[test]
    fn batch_recipient_limit_is_enforced() {
        let row = BatchRecipient {
            phone: phone("13900000000"),
            sign_name: SignName::existing("Aliyun").unwrap(),
            template_param: None,
        };
        let err = SendBatchSms::new(
            vec![row; SEND_BATCH_SMS_MAX_RECIPIENTS + 1],
            TemplateCode::new("SMS_1").unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::TooManyRecipients { max: 100, .. }));
    }

    #[test]
    fn response_result_round_trips_code_and_message() {
        let result = ResponseResult::new(
            Some("isv.MOBILE_NUMBER_ILLEGAL".to_owned()),
            Some("invalid mobile number".to_owned()),
        );
        assert_eq!(result.code.as_deref(), Some("isv.MOBILE_NUMBER_ILLEGAL"));
        assert_eq!(result.message.as_deref(), Some("invalid mobile number"));
        assert!(!result.is_ok());
        assert_eq!(ResponseResult::new(None, None), ResponseResult::default());
    }

    #[test]
    fn audit_status_known_mapping() {
        assert_eq!(AuditStatus::new(0).known_kind(), Some(KnownAuditStatus::Pending));
        assert_eq!(AuditStatus::new(1).known_kind(), Some(KnownAuditStatus::Approved));
        assert_eq!(AuditStatus::new(2).known_kind(), Some(KnownAuditStatus::Rejected));
        assert_eq!(AuditStatus::new(10).known_kind(), Some(KnownAuditStatus::Cancelled));
        assert_eq!(AuditStatus::new(7).known_kind(), None);
        assert_eq!(KnownAuditStatus::Cancelled.code(), 10);
    }
}
