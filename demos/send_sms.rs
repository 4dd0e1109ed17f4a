use std::io;

use dysms::{
    Credentials, DysmsClient, PhoneNumber, RawPhoneNumber, SendSms, SignName, TemplateCode,
    TemplateParam,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone_raw = std::env::var("DYSMS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DYSMS_PHONE environment variable is required",
        )
    })?;
    let sign_name = std::env::var("DYSMS_SIGN_NAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DYSMS_SIGN_NAME environment variable is required",
        )
    })?;
    let template_code = std::env::var("DYSMS_TEMPLATE_CODE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DYSMS_TEMPLATE_CODE environment variable is required",
        )
    })?;
    let params = std::env::var("DYSMS_TEMPLATE_PARAM").ok();

    let client = DysmsClient::new(Credentials::from_env()?);
    let phone: RawPhoneNumber =
        PhoneNumber::parse(Some(phonenumber::country::Id::CN), phone_raw)?.into();
    let template_param = params.as_deref().map(TemplateParam::from_json).transpose()?;
    let request = SendSms::one(
        phone,
        SignName::existing(sign_name)?,
        TemplateCode::new(template_code)?,
        template_param,
    );

    let reply = client.send_sms(request).await?;
    println!(
        "status_code: {}, code: {:?}, message: {:?}, biz_id: {:?}",
        reply.status_code, reply.result.code, reply.result.message, reply.body.biz_id
    );

    Ok(())
}
