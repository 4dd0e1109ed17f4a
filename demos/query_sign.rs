use std::io;

use dysms::{Credentials, DysmsClient, Pagination, SignName};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = DysmsClient::new(Credentials::from_env()?);

    let list = client.query_sms_sign_list(Pagination::default()).await?;
    for sign in &list.body.signs {
        println!("{:?}: {:?}", sign.sign_name, sign.audit_status);
    }

    let sign_name = std::env::var("DYSMS_SIGN_NAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DYSMS_SIGN_NAME environment variable is required",
        )
    })?;
    let reply = client
        .query_sms_sign(&SignName::existing(sign_name)?)
        .await?;
    println!(
        "code: {:?}, audit_status: {:?}, reason: {:?}",
        reply.result.code,
        reply.body.audit_status.and_then(|status| status.known_kind()),
        reply.body.reason
    );

    Ok(())
}
