use std::io;

use dysms::{Credentials, DysmsClient, SendBatchSms, TemplateCode};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // e.g. DYSMS_PHONES='["1390000****","1370000****"]' DYSMS_SIGN_NAMES='["SignA","SignB"]'
    let phones = required("DYSMS_PHONES")?;
    let sign_names = required("DYSMS_SIGN_NAMES")?;
    let template_code = required("DYSMS_TEMPLATE_CODE")?;
    let params = std::env::var("DYSMS_TEMPLATE_PARAMS").ok();

    let client = DysmsClient::new(Credentials::from_env()?);
    let request = SendBatchSms::from_json_arrays(
        &phones,
        &sign_names,
        TemplateCode::new(template_code)?,
        params.as_deref(),
    )?;

    let reply = client.send_batch_sms(request).await?;
    println!(
        "status_code: {}, code: {:?}, message: {:?}, biz_id: {:?}",
        reply.status_code, reply.result.code, reply.result.message, reply.body.biz_id
    );

    Ok(())
}
