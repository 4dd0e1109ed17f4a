//! Client layer: signs one vendor call per operation and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AccessKeyId, AccessKeySecret, AddSmsSign, AddSmsTemplate, ModifySmsSign, ModifySmsTemplate,
    Pagination, Reply, SendBatchSms, SendSms, SendSmsResponse, SignListResponse, SignName,
    SignResponse, SignStatusResponse, TemplateCode, TemplateListResponse, TemplateResponse,
    TemplateStatusResponse, ValidationError,
};
use crate::transport::{self, Decoded, TransportError};

const DEFAULT_ENDPOINT: &str = "https://dysmsapi.aliyuncs.com/";
const DEFAULT_REGION_ID: &str = "cn-hangzhou";

/// Environment variable read by [`Credentials::from_env`] for the AccessKey id.
pub const ACCESS_KEY_ID_ENV: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";
/// Environment variable read by [`Credentials::from_env`] for the AccessKey secret.
pub const ACCESS_KEY_SECRET_ENV: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// AccessKey pair used to sign every request.
pub struct Credentials {
    access_key_id: AccessKeyId,
    access_key_secret: AccessKeySecret,
}

#[derive(Debug, thiserror::Error)]
#[error("environment variable {0} is not set")]
pub struct MissingEnvVar(pub &'static str);

impl Credentials {
    /// Validate that both parts are non-empty.
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            access_key_id: AccessKeyId::new(access_key_id)?,
            access_key_secret: AccessKeySecret::new(access_key_secret)?,
        })
    }

    /// Read `ALIBABA_CLOUD_ACCESS_KEY_ID` and `ALIBABA_CLOUD_ACCESS_KEY_SECRET`.
    pub fn from_env() -> Result<Self, DysmsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DysmsError> {
        let id = lookup(ACCESS_KEY_ID_ENV)
            .ok_or_else(|| DysmsError::Init(Box::new(MissingEnvVar(ACCESS_KEY_ID_ENV))))?;
        let secret = lookup(ACCESS_KEY_SECRET_ENV)
            .ok_or_else(|| DysmsError::Init(Box::new(MissingEnvVar(ACCESS_KEY_SECRET_ENV))))?;
        Self::new(id, secret).map_err(|err| DysmsError::Init(Box::new(err)))
    }

    pub fn access_key_id(&self) -> &AccessKeyId {
        &self.access_key_id
    }

    pub fn access_key_secret(&self) -> &AccessKeySecret {
        &self.access_key_secret
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`DysmsClient`].
///
/// Business rejections are not errors: a request the vendor refuses for domain reasons
/// (bad phone number, unapproved template, ...) comes back as `Ok(Reply)` with the vendor
/// code in [`Reply::result`]. Errors cover:
/// - local validation failures (status 400, nothing was sent),
/// - client construction, transport, vendor-side and parse failures (status 500).
pub enum DysmsError {
    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The client could not be configured (credentials, endpoint, HTTP client).
    #[error("client initialization failed: {0}")]
    Init(#[source] Box<dyn StdError + Send + Sync>),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The vendor answered with a non-2xx HTTP status.
    #[error("service error (HTTP {status}): {code:?} {message:?}")]
    Service {
        status: u16,
        code: Option<String>,
        message: Option<String>,
        request_id: Option<String>,
    },

    /// A 2xx response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

impl DysmsError {
    /// HTTP-like status describing the failure class: `400` for local validation,
    /// `500` for everything else.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Init(_) | Self::Transport(_) | Self::Service { .. } | Self::Parse(_) => 500,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`DysmsClient`].
///
/// Use this when you need to customize the endpoint, region, timeout, or user-agent.
pub struct DysmsClientBuilder {
    credentials: Credentials,
    endpoint: String,
    region_id: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl DysmsClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            region_id: DEFAULT_REGION_ID.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API endpoint (default `https://dysmsapi.aliyuncs.com/`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the `RegionId` common parameter (default `cn-hangzhou`).
    pub fn region_id(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = region_id.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`DysmsClient`].
    ///
    /// Fails with [`DysmsError::Init`] if the endpoint is not an absolute URL or the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<DysmsClient, DysmsError> {
        let endpoint =
            url::Url::parse(&self.endpoint).map_err(|err| DysmsError::Init(Box::new(err)))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| DysmsError::Init(Box::new(err)))?;

        Ok(DysmsClient {
            credentials: self.credentials,
            endpoint: endpoint.into(),
            region_id: self.region_id,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level client for the SMS API.
///
/// Every method validates nothing itself (requests are validated when they are built),
/// signs the call, sends one `POST` to the endpoint and normalizes the answer into a
/// [`Reply`]. The client holds no per-call state; clone it freely or build one per call.
pub struct DysmsClient {
    credentials: Credentials,
    endpoint: String,
    region_id: String,
    http: Arc<dyn HttpTransport>,
}

impl DysmsClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`DysmsClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            region_id: DEFAULT_REGION_ID.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client from a plain AccessKey pair.
    ///
    /// Empty values fail with [`DysmsError::Init`].
    pub fn from_access_key(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Result<Self, DysmsError> {
        let credentials = Credentials::new(access_key_id, access_key_secret)
            .map_err(|err| DysmsError::Init(Box::new(err)))?;
        Ok(Self::new(credentials))
    }

    pub fn builder(credentials: Credentials) -> DysmsClientBuilder {
        DysmsClientBuilder::new(credentials)
    }

    /// Send one templated message to one or more phone numbers (`SendSms`).
    pub async fn send_sms(&self, request: SendSms) -> Result<Reply<SendSmsResponse>, DysmsError> {
        self.execute(
            transport::SEND_SMS_ACTION,
            transport::encode_send_sms_form(&request),
            transport::decode_send_sms_json_response,
        )
        .await
    }

    /// Send one template to several recipients, each with its own signature and
    /// parameters (`SendBatchSms`).
    pub async fn send_batch_sms(
        &self,
        request: SendBatchSms,
    ) -> Result<Reply<SendSmsResponse>, DysmsError> {
        self.execute(
            transport::SEND_BATCH_SMS_ACTION,
            transport::encode_send_batch_sms_form(&request),
            transport::decode_send_sms_json_response,
        )
        .await
    }

    /// Apply for a new signature (`AddSmsSign`).
    pub async fn add_sms_sign(&self, request: AddSmsSign) -> Result<Reply<SignResponse>, DysmsError> {
        self.execute(
            transport::ADD_SMS_SIGN_ACTION,
            transport::encode_add_sms_sign_form(&request),
            transport::decode_sign_json_response,
        )
        .await
    }

    /// Resubmit a rejected signature (`ModifySmsSign`).
    pub async fn modify_sms_sign(
        &self,
        request: ModifySmsSign,
    ) -> Result<Reply<SignResponse>, DysmsError> {
        self.execute(
            transport::MODIFY_SMS_SIGN_ACTION,
            transport::encode_modify_sms_sign_form(&request),
            transport::decode_sign_json_response,
        )
        .await
    }

    /// Withdraw a signature application or remove a signature (`DeleteSmsSign`).
    pub async fn delete_sms_sign(
        &self,
        sign_name: &SignName,
    ) -> Result<Reply<SignResponse>, DysmsError> {
        self.execute(
            transport::DELETE_SMS_SIGN_ACTION,
            transport::encode_sign_name_form(sign_name),
            transport::decode_sign_json_response,
        )
        .await
    }

    /// Look up the review status of one signature (`QuerySmsSign`).
    pub async fn query_sms_sign(
        &self,
        sign_name: &SignName,
    ) -> Result<Reply<SignStatusResponse>, DysmsError> {
        self.execute(
            transport::QUERY_SMS_SIGN_ACTION,
            transport::encode_sign_name_form(sign_name),
            transport::decode_sign_status_json_response,
        )
        .await
    }

    /// List signatures page by page (`QuerySmsSignList`).
    pub async fn query_sms_sign_list(
        &self,
        page: Pagination,
    ) -> Result<Reply<SignListResponse>, DysmsError> {
        self.execute(
            transport::QUERY_SMS_SIGN_LIST_ACTION,
            transport::encode_pagination_form(page),
            transport::decode_sign_list_json_response,
        )
        .await
    }

    /// Apply for a new template (`AddSmsTemplate`). The vendor-issued code is in the body.
    pub async fn add_sms_template(
        &self,
        request: AddSmsTemplate,
    ) -> Result<Reply<TemplateResponse>, DysmsError> {
        self.execute(
            transport::ADD_SMS_TEMPLATE_ACTION,
            transport::encode_add_sms_template_form(&request),
            transport::decode_template_json_response,
        )
        .await
    }

    /// Resubmit a rejected template (`ModifySmsTemplate`).
    pub async fn modify_sms_template(
        &self,
        request: ModifySmsTemplate,
    ) -> Result<Reply<TemplateResponse>, DysmsError> {
        self.execute(
            transport::MODIFY_SMS_TEMPLATE_ACTION,
            transport::encode_modify_sms_template_form(&request),
            transport::decode_template_json_response,
        )
        .await
    }

    /// Withdraw a template application or remove a template (`DeleteSmsTemplate`).
    pub async fn delete_sms_template(
        &self,
        code: &TemplateCode,
    ) -> Result<Reply<TemplateResponse>, DysmsError> {
        self.execute(
            transport::DELETE_SMS_TEMPLATE_ACTION,
            transport::encode_template_code_form(code),
            transport::decode_template_json_response,
        )
        .await
    }

    /// Look up the review status of one template (`QuerySmsTemplate`).
    pub async fn query_sms_template(
        &self,
        code: &TemplateCode,
    ) -> Result<Reply<TemplateStatusResponse>, DysmsError> {
        self.execute(
            transport::QUERY_SMS_TEMPLATE_ACTION,
            transport::encode_template_code_form(code),
            transport::decode_template_status_json_response,
        )
        .await
    }

    /// List templates page by page (`QuerySmsTemplateList`).
    pub async fn query_sms_template_list(
        &self,
        page: Pagination,
    ) -> Result<Reply<TemplateListResponse>, DysmsError> {
        self.execute(
            transport::QUERY_SMS_TEMPLATE_LIST_ACTION,
            transport::encode_pagination_form(page),
            transport::decode_template_list_json_response,
        )
        .await
    }

    async fn execute<T>(
        &self,
        action: &'static str,
        fields: Vec<(String, String)>,
        decode: fn(&str) -> Result<Decoded<T>, TransportError>,
    ) -> Result<Reply<T>, DysmsError> {
        let nonce = uuid::Uuid::new_v4().to_string();
        let mut params = transport::common_params(
            self.credentials.access_key_id.as_str(),
            action,
            &self.region_id,
            chrono::Utc::now(),
            &nonce,
        );
        params.extend(fields);
        transport::sign_params(
            "POST",
            &mut params,
            self.credentials.access_key_secret.as_str(),
        )
        .map_err(|err| DysmsError::Init(Box::new(err)))?;

        tracing::debug!(action, endpoint = %self.endpoint, "calling SMS API");

        let response = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(|err| {
                tracing::warn!(action, error = %err, "SMS API transport failure");
                DysmsError::Transport(err)
            })?;

        if !(200..=299).contains(&response.status) {
            let (code, message, request_id) = match transport::decode_error_body(&response.body) {
                Some(decoded) => (
                    decoded.result.code,
                    decoded.result.message,
                    decoded.request_id,
                ),
                None => (None, None, None),
            };
            tracing::warn!(
                action,
                status = response.status,
                code = code.as_deref().unwrap_or(""),
                "SMS API returned an error status"
            );
            return Err(DysmsError::Service {
                status: response.status,
                code,
                message,
                request_id,
            });
        }

        let decoded = decode(&response.body).map_err(|err| DysmsError::Parse(Box::new(err)))?;

        if decoded.result.is_ok() {
            tracing::debug!(action, status = response.status, "SMS API call succeeded");
        } else {
            tracing::debug!(
                action,
                code = decoded.result.code.as_deref().unwrap_or(""),
                message = decoded.result.message.as_deref().unwrap_or(""),
                "SMS API rejected the request"
            );
        }

        Ok(Reply {
            status_code: response.status,
            result: decoded.result,
            request_id: decoded.request_id,
            body: decoded.body,
        })
    }
}
