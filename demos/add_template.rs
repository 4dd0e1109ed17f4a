use dysms::{AddSmsTemplate, Credentials, DysmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = DysmsClient::new(Credentials::from_env()?);

    let request = AddSmsTemplate::new(
        "Login code",
        "Your verification code is ${code}. It expires in 5 minutes.",
        "Sent when a user signs in from a new device.",
        0,
    )?;
    let reply = client.add_sms_template(request).await?;
    println!(
        "status_code: {}, code: {:?}, template_code: {:?}",
        reply.status_code, reply.result.code, reply.body.template_code
    );

    Ok(())
}
