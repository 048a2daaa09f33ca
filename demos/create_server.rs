use std::io;

use postmark::{CreateServer, PostmarkClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::var("POSTMARK_SERVER_NAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_SERVER_NAME environment variable is required",
        )
    })?;
    let color = std::env::var("POSTMARK_SERVER_COLOR").unwrap_or_else(|_| "purple".to_owned());

    let client = PostmarkClient::new()?;
    let server = client
        .create_server(CreateServer {
            name,
            color,
            smtp_api_activated: true,
        })
        .await?;

    println!(
        "id: {}, name: {}, color: {}",
        server.id, server.name, server.color
    );

    Ok(())
}
