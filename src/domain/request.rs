use crate::domain::validation::ValidationError;
use crate::domain::value::{
    RawPhoneNumber, SignFile, SignName, SignRemark, SignSource, SignType, TemplateCode,
    TemplateContent, TemplateName, TemplateParam, TemplateRemark, TemplateType,
};

/// Maximum number of phone numbers in a single `SendSms` call.
pub const SEND_SMS_MAX_RECIPIENTS: usize = 1000;

/// Maximum number of recipients in a single `SendBatchSms` call.
pub const SEND_BATCH_SMS_MAX_RECIPIENTS: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Caller-side reference echoed back in delivery receipts (`OutId`).
    pub out_id: Option<String>,
    /// Uplink extension code (`SmsUpExtendCode`).
    pub sms_up_extend_code: Option<String>,
}

/// One message rendered from one template, sent to one or more phone numbers.
#[derive(Debug, Clone)]
pub struct SendSms {
    recipients: Vec<RawPhoneNumber>,
    sign_name: SignName,
    template_code: TemplateCode,
    template_param: Option<TemplateParam>,
    options: SendOptions,
}

impl SendSms {
    pub fn new(
        recipients: Vec<RawPhoneNumber>,
        sign_name: SignName,
        template_code: TemplateCode,
        template_param: Option<TemplateParam>,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        if recipients.len() > SEND_SMS_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_SMS_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self {
            recipients,
            sign_name,
            template_code,
            template_param,
            options,
        })
    }

    /// Single recipient with default options.
    pub fn one(
        phone: RawPhoneNumber,
        sign_name: SignName,
        template_code: TemplateCode,
        template_param: Option<TemplateParam>,
    ) -> Self {
        Self {
            recipients: vec![phone],
            sign_name,
            template_code,
            template_param,
            options: SendOptions::default(),
        }
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    pub fn sign_name(&self) -> &SignName {
        &self.sign_name
    }

    pub fn template_code(&self) -> &TemplateCode {
        &self.template_code
    }

    pub fn template_param(&self) -> Option<&TemplateParam> {
        self.template_param.as_ref()
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// One row of a batch send: the phone, signature and parameters that belong together.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecipient {
    pub phone: RawPhoneNumber,
    pub sign_name: SignName,
    pub template_param: Option<TemplateParam>,
}

/// One template sent to several recipients, each with its own signature and parameters.
///
/// The vendor receives three parallel JSON arrays; row `i` of this request becomes
/// element `i` of each array.
#[derive(Debug, Clone)]
pub struct SendBatchSms {
    recipients: Vec<BatchRecipient>,
    template_code: TemplateCode,
}

impl SendBatchSms {
    pub const PHONE_NUMBER_JSON_FIELD: &'static str = "PhoneNumberJson";
    pub const SIGN_NAME_JSON_FIELD: &'static str = "SignNameJson";
    pub const TEMPLATE_PARAM_JSON_FIELD: &'static str = "TemplateParamJson";

    pub fn new(
        recipients: Vec<BatchRecipient>,
        template_code: TemplateCode,
    ) -> Result<Self, ValidationError> {
        if recipients.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::PHONE_NUMBER_JSON_FIELD,
            });
        }
        if recipients.len() > SEND_BATCH_SMS_MAX_RECIPIENTS {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_BATCH_SMS_MAX_RECIPIENTS,
                actual: recipients.len(),
            });
        }
        Ok(Self {
            recipients,
            template_code,
        })
    }

    /// Build a batch from the vendor's JSON array representation, e.g.
    /// `["1390000****","1370000****"]` and `["SignA","SignB"]`.
    ///
    /// All arrays must have the same length.
    pub fn from_json_arrays(
        phone_numbers_json: &str,
        sign_names_json: &str,
        template_code: TemplateCode,
        template_params_json: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let phones: Vec<String> =
            parse_json_array(Self::PHONE_NUMBER_JSON_FIELD, phone_numbers_json)?;
        let sign_names: Vec<String> =
            parse_json_array(Self::SIGN_NAME_JSON_FIELD, sign_names_json)?;
        check_aligned(Self::SIGN_NAME_JSON_FIELD, phones.len(), sign_names.len())?;

        let params: Vec<Option<TemplateParam>> = match template_params_json {
            Some(json) => {
                let values: Vec<serde_json::Value> =
                    parse_json_array(Self::TEMPLATE_PARAM_JSON_FIELD, json)?;
                check_aligned(Self::TEMPLATE_PARAM_JSON_FIELD, phones.len(), values.len())?;
                values
                    .into_iter()
                    .map(|value| {
                        TemplateParam::from_value(Self::TEMPLATE_PARAM_JSON_FIELD, value).map(Some)
                    })
                    .collect::<Result<_, _>>()?
            }
            None => vec![None; phones.len()],
        };

        let recipients = phones
            .into_iter()
            .zip(sign_names)
            .zip(params)
            .map(|((phone, sign_name), template_param)| {
                Ok(BatchRecipient {
                    phone: RawPhoneNumber::new(phone)?,
                    sign_name: SignName::existing(sign_name)?,
                    template_param,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Self::new(recipients, template_code)
    }

    pub fn recipients(&self) -> &[BatchRecipient] {
        &self.recipients
    }

    pub fn template_code(&self) -> &TemplateCode {
        &self.template_code
    }
}

fn parse_json_array<T: serde::de::DeserializeOwned>(
    field: &'static str,
    json: &str,
) -> Result<Vec<T>, ValidationError> {
    serde_json::from_str(json).map_err(|err| ValidationError::InvalidJson {
        field,
        reason: err.to_string(),
    })
}

fn check_aligned(
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), ValidationError> {
    if expected != actual {
        return Err(ValidationError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Application for a new signature (`AddSmsSign`).
#[derive(Debug, Clone)]
pub struct AddSmsSign {
    sign_name: SignName,
    remark: SignRemark,
    source: SignSource,
    sign_type: SignType,
    files: Vec<SignFile>,
}

impl AddSmsSign {
    /// Validate a signature application.
    ///
    /// An empty `files` list is accepted; whether documents are required depends on the
    /// source and is decided by the vendor's review.
    pub fn new(
        sign_name: impl Into<String>,
        remark: impl Into<String>,
        source: i32,
        sign_type: i32,
        files: Vec<SignFile>,
    ) -> Result<Self, ValidationError> {
        let source = SignSource::new(source)?;
        let sign_type = SignType::new(sign_type)?;
        let sign_name = SignName::new(sign_name)?;
        let remark = SignRemark::new(remark)?;
        Ok(Self {
            sign_name,
            remark,
            source,
            sign_type,
            files,
        })
    }

    pub fn sign_name(&self) -> &SignName {
        &self.sign_name
    }

    pub fn remark(&self) -> &SignRemark {
        &self.remark
    }

    pub fn source(&self) -> SignSource {
        self.source
    }

    pub fn sign_type(&self) -> SignType {
        self.sign_type
    }

    pub fn files(&self) -> &[SignFile] {
        &self.files
    }
}

/// Resubmission of a rejected signature (`ModifySmsSign`).
#[derive(Debug, Clone)]
pub struct ModifySmsSign {
    sign_name: SignName,
    remark: SignRemark,
    source: SignSource,
    sign_type: SignType,
    files: Vec<SignFile>,
}

impl ModifySmsSign {
    /// Same checks as [`AddSmsSign::new`] except the name length, since the name refers to
    /// a signature that already exists.
    pub fn new(
        sign_name: impl Into<String>,
        remark: impl Into<String>,
        source: i32,
        sign_type: i32,
        files: Vec<SignFile>,
    ) -> Result<Self, ValidationError> {
        let source = SignSource::new(source)?;
        let sign_type = SignType::new(sign_type)?;
        let sign_name = SignName::existing(sign_name)?;
        let remark = SignRemark::new(remark)?;
        Ok(Self {
            sign_name,
            remark,
            source,
            sign_type,
            files,
        })
    }

    pub fn sign_name(&self) -> &SignName {
        &self.sign_name
    }

    pub fn remark(&self) -> &SignRemark {
        &self.remark
    }

    pub fn source(&self) -> SignSource {
        self.source
    }

    pub fn sign_type(&self) -> SignType {
        self.sign_type
    }

    pub fn files(&self) -> &[SignFile] {
        &self.files
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Page selection for the list queries (`PageIndex`, `PageSize`).
///
/// Out-of-range input is coerced rather than rejected: an index `<= 0` becomes `1`, a size
/// below `10` becomes `10`. No upper bound is applied locally.
pub struct Pagination {
    index: i32,
    size: i32,
}

impl Pagination {
    pub const INDEX_FIELD: &'static str = "PageIndex";
    pub const SIZE_FIELD: &'static str = "PageSize";

    pub const DEFAULT_INDEX: i32 = 1;
    pub const MIN_SIZE: i32 = 10;

    pub fn new(index: i32, size: i32) -> Self {
        Self {
            index: if index <= 0 { Self::DEFAULT_INDEX } else { index },
            size: size.max(Self::MIN_SIZE),
        }
    }

    pub fn index(self) -> i32 {
        self.index
    }

    pub fn size(self) -> i32 {
        self.size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INDEX, Self::MIN_SIZE)
    }
}

/// Application for a new template (`AddSmsTemplate`).
#[derive(Debug, Clone)]
pub struct AddSmsTemplate {
    name: TemplateName,
    content: TemplateContent,
    remark: TemplateRemark,
    template_type: TemplateType,
}

impl AddSmsTemplate {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        remark: impl Into<String>,
        template_type: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: TemplateName::new(name)?,
            content: TemplateContent::new(content)?,
            remark: TemplateRemark::new(remark)?,
            template_type: TemplateType::new(template_type)?,
        })
    }

    pub fn name(&self) -> &TemplateName {
        &self.name
    }

    pub fn content(&self) -> &TemplateContent {
        &self.content
    }

    pub fn remark(&self) -> &TemplateRemark {
        &self.remark
    }

    pub fn template_type(&self) -> TemplateType {
        self.template_type
    }
}

/// Resubmission of a rejected template (`ModifySmsTemplate`).
#[derive(Debug, Clone)]
pub struct ModifySmsTemplate {
    code: TemplateCode,
    template: AddSmsTemplate,
}

impl ModifySmsTemplate {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        remark: impl Into<String>,
        template_type: i32,
    ) -> Result<Self, ValidationError> {
        let template_type = TemplateType::new(template_type)?;
        let code = TemplateCode::new(code)?;
        Ok(Self {
            code,
            template: AddSmsTemplate {
                name: TemplateName::new(name)?,
                content: TemplateContent::new(content)?,
                remark: TemplateRemark::new(remark)?,
                template_type,
            },
        })
    }

    pub fn code(&self) -> &TemplateCode {
        &self.code
    }

    pub fn name(&self) -> &TemplateName {
        self.template.name()
    }

    pub fn content(&self) -> &TemplateContent {
        self.template.content()
    }

    pub fn remark(&self) -> &TemplateRemark {
        self.template.remark()
    }

    pub fn template_type(&self) -> TemplateType {
        self.template.template_type()
    }
}
