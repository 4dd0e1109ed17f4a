use std::fmt;

use phonenumber::country;

use crate::domain::validation::ValidationError;

fn trimmed_non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn check_max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

fn check_range(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            actual: value,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Alibaba Cloud AccessKey id.
///
/// Invariant: non-empty after trimming.
pub struct AccessKeyId(String);

impl AccessKeyId {
    /// Common request parameter name (`AccessKeyId`).
    pub const FIELD: &'static str = "AccessKeyId";

    /// Create a validated [`AccessKeyId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        trimmed_non_empty(Self::FIELD, value.into()).map(Self)
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Alibaba Cloud AccessKey secret.
///
/// Invariant: must not be empty or blank. Stored as provided, never printed by `Debug`.
pub struct AccessKeySecret(String);

impl AccessKeySecret {
    pub const FIELD: &'static str = "AccessKeySecret";

    /// Create a validated [`AccessKeySecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKeySecret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to the API (`PhoneNumbers`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Request parameter name used by `SendSms` (`PhoneNumbers`).
    pub const FIELD: &'static str = "PhoneNumbers";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        trimmed_non_empty(Self::FIELD, value.into()).map(Self)
    }

    /// Raw (trimmed) value as sent to the API.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    pub const FIELD: &'static str = "PhoneNumbers";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix,
    /// typically `Some(country::Id::CN)` for mainland numbers.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let raw = trimmed_non_empty(Self::FIELD, input.into())?;

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Signature name (`SignName`), the sender identity prefixed to every message.
///
/// Invariant: non-empty after trimming. Names for new applications are also limited to
/// [`SignName::MAX_CHARS`] characters.
pub struct SignName(String);

impl SignName {
    pub const FIELD: &'static str = "SignName";

    /// Maximum length of a newly applied signature name, in characters.
    pub const MAX_CHARS: usize = 12;

    /// Validate a name for a new signature application (trimmed, `1..=12` characters).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let name = trimmed_non_empty(Self::FIELD, value.into())?;
        check_max_chars(Self::FIELD, &name, Self::MAX_CHARS)?;
        Ok(Self(name))
    }

    /// Refer to a signature that already exists at the vendor. Only emptiness is checked.
    pub fn existing(value: impl Into<String>) -> Result<Self, ValidationError> {
        trimmed_non_empty(Self::FIELD, value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// Signature application remark (`Remark`).
///
/// Invariant: at most [`SignRemark::MAX_CHARS`] characters after trimming. May be empty.
pub struct SignRemark(String);

impl SignRemark {
    pub const FIELD: &'static str = "Remark";
    pub const MAX_CHARS: usize = 200;

    /// Create a validated remark; surrounding whitespace is dropped.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        check_max_chars(Self::FIELD, trimmed, Self::MAX_CHARS)?;
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Where the signature name comes from (`SignSource`).
///
/// - `0`: full or short name of an enterprise or institution
/// - `1`: full or short name of an MIIT-registered website
/// - `2`: full or short name of an app
/// - `3`: full or short name of an official account or mini program
/// - `4`: full or short name of an e-commerce store
/// - `5`: full or short name of a trademark
pub struct SignSource(i32);

impl SignSource {
    pub const FIELD: &'static str = "SignSource";
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 5;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        check_range(Self::FIELD, value, Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Signature type (`SignType`): `1` or `2`.
pub struct SignType(i32);

impl SignType {
    pub const FIELD: &'static str = "SignType";
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 2;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        check_range(Self::FIELD, value, Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Supporting document attached to a signature application (`SignFileList.N`).
pub struct SignFile {
    /// Base64-encoded file contents (images up to 2 MB).
    pub contents: String,
    /// File format, e.g. `jpg`, `png`, `gif` or `jpeg`.
    pub suffix: String,
}

impl SignFile {
    pub fn new(contents: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            suffix: suffix.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Vendor-issued template code (`TemplateCode`), e.g. `SMS_154950909`.
///
/// Invariant: non-empty after trimming.
pub struct TemplateCode(String);

impl TemplateCode {
    pub const FIELD: &'static str = "TemplateCode";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        trimmed_non_empty(Self::FIELD, value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template name (`TemplateName`).
///
/// Invariant: non-empty after trimming, at most [`TemplateName::MAX_CHARS`] characters.
pub struct TemplateName(String);

impl TemplateName {
    pub const FIELD: &'static str = "TemplateName";
    pub const MAX_CHARS: usize = 30;

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let name = trimmed_non_empty(Self::FIELD, value.into())?;
        check_max_chars(Self::FIELD, &name, Self::MAX_CHARS)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template body (`TemplateContent`), with `${name}` style placeholders.
///
/// Invariant: non-empty after trimming, at most [`TemplateContent::MAX_CHARS`] characters.
/// The original value (including whitespace) is preserved.
pub struct TemplateContent(String);

impl TemplateContent {
    pub const FIELD: &'static str = "TemplateContent";
    pub const MAX_CHARS: usize = 500;

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        check_max_chars(Self::FIELD, &value, Self::MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template application remark (`Remark`).
///
/// Invariant: non-empty after trimming, at most [`TemplateRemark::MAX_CHARS`] characters.
pub struct TemplateRemark(String);

impl TemplateRemark {
    pub const FIELD: &'static str = "Remark";
    pub const MAX_CHARS: usize = 100;

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let remark = trimmed_non_empty(Self::FIELD, value.into())?;
        check_max_chars(Self::FIELD, &remark, Self::MAX_CHARS)?;
        Ok(Self(remark))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message category of a template (`TemplateType`).
///
/// - `0`: verification code
/// - `1`: notification
/// - `2`: promotional
/// - `3`: international / Hong Kong, Macao and Taiwan
pub struct TemplateType(i32);

impl TemplateType {
    pub const FIELD: &'static str = "TemplateType";
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 3;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        check_range(Self::FIELD, value, Self::MIN, Self::MAX)?;
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Values substituted into template placeholders (`TemplateParam`).
///
/// Invariant: a JSON object.
pub struct TemplateParam(serde_json::Map<String, serde_json::Value>);

impl TemplateParam {
    pub const FIELD: &'static str = "TemplateParam";

    pub fn new(values: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(values)
    }

    /// Parse a JSON-encoded parameter map such as `{"code":"1234"}`.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        parse_param_object(Self::FIELD, json).map(Self)
    }

    pub(crate) fn from_value(
        field: &'static str,
        value: serde_json::Value,
    ) -> Result<Self, ValidationError> {
        match value {
            serde_json::Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::InvalidJson {
                field,
                reason: format!("expected an object, got {other}"),
            }),
        }
    }

    pub fn values(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.0
    }

    /// JSON text as sent to the API.
    pub fn to_json(&self) -> String {
        serde_json::Value::Object(self.0.clone()).to_string()
    }
}

fn parse_param_object(
    field: &'static str,
    json: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, ValidationError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|err| ValidationError::InvalidJson {
            field,
            reason: err.to_string(),
        })?;
    TemplateParam::from_value(field, value).map(|param| param.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Vendor review status of a signature or template.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct AuditStatus(i32);

impl AuditStatus {
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known review state, if one exists.
    pub fn known_kind(self) -> Option<KnownAuditStatus> {
        KnownAuditStatus::from_code(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KnownAuditStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl KnownAuditStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Pending,
            1 => Self::Approved,
            2 => Self::Rejected,
            10 => Self::Cancelled,
            _ => return None,
        })
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
            Self::Cancelled => 10,
        }
    }
}
